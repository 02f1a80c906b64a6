//! Semantic evaluation of formula trees
//!
//! - **truth**: Graded truth values and their conjunction/disjunction algebra
//! - **value**: The kinds of values operations consume and produce
//! - **functions**: The predicate/function library
//! - **registry**: Closed operation set and the name -> implementation table
//! - **evaluator**: Recursive tree walk dispatching through the registry

pub mod truth;
pub mod value;
pub mod functions;
pub mod registry;
pub mod evaluator;

pub use truth::{Truth, TruthValue};
pub use value::Value;
pub use functions::OperationFn;
pub use registry::{FunctionRegistry, Operation, RegistryError};
pub use evaluator::{evaluate, CollectionMode, Evaluator, EvaluatorConfig};
