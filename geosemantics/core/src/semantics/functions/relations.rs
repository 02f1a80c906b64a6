//! Relational predicates
//!
//! The one place numeric imprecision turns into graded confidence. Each
//! comparison measures a directional deviation and normalizes it by the mean
//! magnitude of the two operands.

use super::check_arity;
use crate::error::SemanticResult;
use crate::semantics::{Truth, TruthValue, Value};

fn scale(a: f64, b: f64) -> f64 {
    ((a + b) / 2.0).abs()
}

pub fn equals_tv(a: f64, b: f64) -> TruthValue {
    TruthValue::new((a - b).abs(), scale(a, b))
}

pub fn greater_tv(a: f64, b: f64) -> TruthValue {
    TruthValue::new((b - a).max(0.0), scale(a, b))
}

pub fn less_tv(a: f64, b: f64) -> TruthValue {
    TruthValue::new((a - b).max(0.0), scale(a, b))
}

fn compare(operation: &str, args: &[Value], relation: fn(f64, f64) -> TruthValue) -> SemanticResult<Value> {
    check_arity(operation, args, 2)?;
    let a = args[0].as_number(operation)?;
    let b = args[1].as_number(operation)?;
    Ok(relation(a, b).into())
}

pub fn equals(args: &[Value]) -> SemanticResult<Value> {
    compare("Equals", args, equals_tv)
}

pub fn greater(args: &[Value]) -> SemanticResult<Value> {
    compare("Greater", args, greater_tv)
}

pub fn less(args: &[Value]) -> SemanticResult<Value> {
    compare("Less", args, less_tv)
}

/// Disjunction of two truth values
pub fn or(args: &[Value]) -> SemanticResult<Value> {
    check_arity("Or", args, 2)?;
    let a = args[0].as_truth("Or")?;
    let b = args[1].as_truth("Or")?;
    Ok(Value::Truth(Truth::or(a, b)))
}
