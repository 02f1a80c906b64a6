//! Predicate/function library
//!
//! Every operation a formula can name. Implementations are pure functions
//! from already-evaluated arguments to a value; none of them sees the
//! assignment or any other evaluation state.

pub mod constructors;
pub mod measurements;
pub mod arithmetic;
pub mod relations;
pub mod predicates;
pub mod structural;

use super::value::Value;
use crate::error::{SemanticError, SemanticResult};

/// Signature shared by every library operation
pub type OperationFn = fn(&[Value]) -> SemanticResult<Value>;

/// Fails with `TypeMismatch` unless exactly `expected` arguments were given
pub(crate) fn check_arity(operation: &str, args: &[Value], expected: usize) -> SemanticResult<()> {
    if args.len() != expected {
        return Err(SemanticError::type_mismatch(
            operation,
            format!("expected {} arguments, got {}", expected, args.len()),
        ));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::geometry::{Circle, Instance, Line, Point, Polygon, PolygonKind};
    use crate::semantics::Value;

    pub fn pt(x: f64, y: f64) -> Value {
        Value::Geometry(Instance::Point(Point::new(x, y)))
    }

    pub fn line(a: (f64, f64), b: (f64, f64)) -> Value {
        Value::Geometry(Instance::Line(Line::new(Point::new(a.0, a.1), Point::new(b.0, b.1))))
    }

    pub fn circle(cx: f64, cy: f64, r: f64) -> Value {
        Value::Geometry(Instance::Circle(Circle::new(Point::new(cx, cy), r)))
    }

    pub fn polygon(kind: PolygonKind, coords: &[(f64, f64)]) -> Value {
        Value::Geometry(Instance::Polygon(Polygon {
            kind,
            vertices: coords.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }))
    }

    pub fn confidence(value: &Value) -> f64 {
        value.confidence().expect("expected a truth value")
    }
}
