//! Evaluated values
//!
//! Everything an operation can consume or produce.

use super::truth::{Truth, TruthValue};
use crate::error::{SemanticError, SemanticResult};
use crate::geometry::{Angle, Circle, Instance, Line, Point, Polygon};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Geometry(Instance),
    Truth(Truth),
    /// Evaluated collection argument; order is preserved
    Collection(Vec<Value>),
}

impl Value {
    /// Type name used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Geometry(inst) => inst.kind_name(),
            Value::Truth(_) => "truth",
            Value::Collection(_) => "collection",
        }
    }

    pub fn as_number(&self, operation: &str) -> SemanticResult<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(expected(operation, "number", other)),
        }
    }

    pub fn as_truth(&self, operation: &str) -> SemanticResult<Truth> {
        match self {
            Value::Truth(t) => Ok(*t),
            other => Err(expected(operation, "truth", other)),
        }
    }

    pub fn as_instance(&self, operation: &str) -> SemanticResult<&Instance> {
        match self {
            Value::Geometry(inst) => Ok(inst),
            other => Err(expected(operation, "geometric object", other)),
        }
    }

    pub fn as_point(&self, operation: &str) -> SemanticResult<Point> {
        match self {
            Value::Geometry(Instance::Point(p)) => Ok(*p),
            other => Err(expected(operation, "point", other)),
        }
    }

    pub fn as_line(&self, operation: &str) -> SemanticResult<Line> {
        match self {
            Value::Geometry(Instance::Line(l)) => Ok(*l),
            other => Err(expected(operation, "line", other)),
        }
    }

    pub fn as_circle(&self, operation: &str) -> SemanticResult<Circle> {
        match self {
            Value::Geometry(Instance::Circle(c)) => Ok(*c),
            other => Err(expected(operation, "circle", other)),
        }
    }

    pub fn as_angle(&self, operation: &str) -> SemanticResult<Angle> {
        match self {
            Value::Geometry(Instance::Angle(a)) => Ok(*a),
            other => Err(expected(operation, "angle", other)),
        }
    }

    pub fn as_polygon(&self, operation: &str) -> SemanticResult<&Polygon> {
        match self {
            Value::Geometry(Instance::Polygon(p)) => Ok(p),
            other => Err(expected(operation, "polygon", other)),
        }
    }

    pub fn as_collection(&self, operation: &str) -> SemanticResult<&[Value]> {
        match self {
            Value::Collection(items) => Ok(items),
            other => Err(expected(operation, "collection", other)),
        }
    }

    /// Confidence if this value is a truth value
    pub fn confidence(&self) -> Option<f64> {
        match self {
            Value::Truth(t) => Some(t.confidence()),
            _ => None,
        }
    }
}

fn expected(operation: &str, wanted: &str, found: &Value) -> SemanticError {
    SemanticError::type_mismatch(
        operation,
        format!("expected {}, found {}", wanted, found.kind_name()),
    )
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<Instance> for Value {
    fn from(inst: Instance) -> Self {
        Value::Geometry(inst)
    }
}

impl From<Point> for Value {
    fn from(p: Point) -> Self {
        Value::Geometry(Instance::Point(p))
    }
}

impl From<Line> for Value {
    fn from(l: Line) -> Self {
        Value::Geometry(Instance::Line(l))
    }
}

impl From<Circle> for Value {
    fn from(c: Circle) -> Self {
        Value::Geometry(Instance::Circle(c))
    }
}

impl From<Angle> for Value {
    fn from(a: Angle) -> Self {
        Value::Geometry(Instance::Angle(a))
    }
}

impl From<Polygon> for Value {
    fn from(p: Polygon) -> Self {
        Value::Geometry(Instance::Polygon(p))
    }
}

impl From<Truth> for Value {
    fn from(t: Truth) -> Self {
        Value::Truth(t)
    }
}

impl From<TruthValue> for Value {
    fn from(tv: TruthValue) -> Self {
        Value::Truth(Truth::Graded(tv))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Collection(items)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Geometry(inst) => write!(f, "{}", inst),
            Value::Truth(t) => write!(f, "{}", t),
            Value::Collection(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "}}")
            }
        }
    }
}
