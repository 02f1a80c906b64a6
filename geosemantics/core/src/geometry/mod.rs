//! Geometry module - Pure geometric operations
//!
//! Primitives, their constructors, and the coordinate computations the
//! semantic layer measures with. NO truth values here - just clean geometry.

pub mod primitives;
pub mod constructions;
pub mod measure;

pub use primitives::*;
pub use constructions::ConstructionError;
pub use measure::*;
