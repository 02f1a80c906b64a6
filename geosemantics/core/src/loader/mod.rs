//! Problem loader
//!
//! Reads formula trees and their assignments from JSON so they can be
//! evaluated outside of a parsing pipeline.

pub mod json;

use crate::error::SemanticResult;
use crate::ir::{Assignment, Node};
use crate::semantics::{Evaluator, Value};
use serde::{Deserialize, Serialize};

/// One formula together with the assignment it is evaluated under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationProblem {
    /// Problem ID
    pub id: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Formula tree to evaluate
    pub formula: Node,

    /// Variable bindings
    #[serde(default)]
    pub assignment: Assignment,

    /// Optional: expected confidence (for validation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_confidence: Option<f64>,
}

impl EvaluationProblem {
    pub fn evaluate(&self, evaluator: &Evaluator<'_>) -> SemanticResult<Value> {
        evaluator.evaluate(&self.formula, &self.assignment)
    }

    /// Whether `value` matches the expected confidence within `tolerance`
    ///
    /// Problems without an expectation always match.
    pub fn matches_expectation(&self, value: &Value, tolerance: f64) -> bool {
        match (self.expected_confidence, value.confidence()) {
            (None, _) => true,
            (Some(expected), Some(actual)) => (expected - actual).abs() <= tolerance,
            (Some(_), None) => false,
        }
    }
}

/// Problem loader result
pub type LoadResult<T> = Result<T, LoadError>;

/// Problem loading errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// File not found
    FileNotFound(String),

    /// JSON parsing error
    ParseError(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::FileNotFound(path) => write!(f, "File not found: {}", path),
            LoadError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}
