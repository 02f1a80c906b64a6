//! Type and cardinality checks
//!
//! Crisp checks, reported through the certain/impossible truth sentinels so
//! they combine with graded predicates.

use super::check_arity;
use crate::error::SemanticResult;
use crate::geometry::{Instance, PolygonKind};
use crate::semantics::{TruthValue, Value};

fn kind_check(operation: &str, args: &[Value], matches: fn(&Instance) -> bool) -> SemanticResult<Value> {
    check_arity(operation, args, 1)?;
    let holds = match &args[0] {
        Value::Geometry(inst) => matches(inst),
        _ => false,
    };
    Ok(TruthValue::crisp(holds).into())
}

pub fn is_triangle(args: &[Value]) -> SemanticResult<Value> {
    kind_check("IsTriangle", args, |inst| {
        matches!(inst, Instance::Polygon(p) if p.kind == PolygonKind::Triangle)
    })
}

pub fn is_line(args: &[Value]) -> SemanticResult<Value> {
    kind_check("IsLine", args, |inst| matches!(inst, Instance::Line(_)))
}

pub fn is_angle(args: &[Value]) -> SemanticResult<Value> {
    kind_check("IsAngle", args, |inst| matches!(inst, Instance::Angle(_)))
}

pub fn is_point(args: &[Value]) -> SemanticResult<Value> {
    kind_check("IsPoint", args, |inst| matches!(inst, Instance::Point(_)))
}

/// Any polygon kind, triangles and quads included
pub fn is_polygon(args: &[Value]) -> SemanticResult<Value> {
    kind_check("IsPolygon", args, |inst| matches!(inst, Instance::Polygon(_)))
}

fn cardinality(operation: &str, args: &[Value], count: usize) -> SemanticResult<Value> {
    check_arity(operation, args, 1)?;
    let items = args[0].as_collection(operation)?;
    Ok(TruthValue::crisp(items.len() == count).into())
}

pub fn two(args: &[Value]) -> SemanticResult<Value> {
    cardinality("Two", args, 2)
}

pub fn three(args: &[Value]) -> SemanticResult<Value> {
    cardinality("Three", args, 3)
}
