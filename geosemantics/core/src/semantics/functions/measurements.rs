//! Measurements of geometric objects

use super::check_arity;
use crate::error::{SemanticError, SemanticResult};
use crate::geometry::{self, Circle, Instance, Polygon};
use crate::semantics::Value;
use std::f64::consts::PI;

pub fn length_of(args: &[Value]) -> SemanticResult<Value> {
    check_arity("LengthOf", args, 1)?;
    let line = args[0].as_line("LengthOf")?;
    Ok(Value::Number(geometry::line_length(&line)))
}

pub fn radius_of(args: &[Value]) -> SemanticResult<Value> {
    check_arity("RadiusOf", args, 1)?;
    Ok(Value::Number(args[0].as_circle("RadiusOf")?.radius))
}

/// Angle measure in radians
pub fn measure_of(args: &[Value]) -> SemanticResult<Value> {
    check_arity("MeasureOf", args, 1)?;
    let angle = args[0].as_angle("MeasureOf")?;
    Ok(Value::Number(geometry::angle_in_radian(&angle)))
}

pub fn area_of(args: &[Value]) -> SemanticResult<Value> {
    check_arity("AreaOf", args, 1)?;
    Ok(Value::Number(area(&args[0], "AreaOf")?))
}

pub(crate) fn area(value: &Value, operation: &str) -> SemanticResult<f64> {
    match value.as_instance(operation)? {
        Instance::Circle(c) => Ok(circle_area(c)),
        Instance::Polygon(p) => Ok(signed_polygon_area(p)),
        other => Err(SemanticError::type_mismatch(
            operation,
            format!("expected circle or polygon, found {}", other.kind_name()),
        )),
    }
}

fn circle_area(circle: &Circle) -> f64 {
    PI * circle.radius.powi(2)
}

/// Shoelace area; positive for counter-clockwise winding
fn signed_polygon_area(polygon: &Polygon) -> f64 {
    polygon
        .sides()
        .map(|side| side.a.cross_z(&side.b))
        .sum::<f64>()
        / 2.0
}
