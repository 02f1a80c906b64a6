//! Evaluation errors

use crate::geometry::ConstructionError;
use thiserror::Error;

/// Errors that abort a single evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticError {
    #[error("unbound variable: {0}")]
    UnboundVariable(String),

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("construction error: {0}")]
    Construction(#[from] ConstructionError),

    #[error("domain error: {0}")]
    DomainError(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("formula nesting exceeds maximum depth of {0}")]
    DepthLimitExceeded(usize),
}

impl SemanticError {
    pub(crate) fn type_mismatch(operation: &str, details: impl std::fmt::Display) -> Self {
        SemanticError::TypeMismatch(format!("{}: {}", operation, details))
    }
}

/// Result type for semantic operations
pub type SemanticResult<T> = Result<T, SemanticError>;
