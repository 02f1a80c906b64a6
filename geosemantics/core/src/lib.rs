//! Geosemantics Core
//!
//! Fuzzy semantic evaluation of geometric formulas over noisy coordinates

pub mod error;
pub mod ir;       // Formula trees and assignments
pub mod geometry; // Primitives, constructions, measurements
pub mod semantics; // Truth algebra, function library, registry, evaluator
pub mod loader;   // JSON problem files

pub use error::{SemanticError, SemanticResult};
pub use ir::*;
pub use semantics::{
    evaluate, CollectionMode, Evaluator, EvaluatorConfig, FunctionRegistry, Operation,
    RegistryError, Truth, TruthValue, Value,
};
pub use loader::{EvaluationProblem, LoadError, LoadResult};
