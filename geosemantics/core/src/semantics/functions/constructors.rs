//! Geometric constructors
//!
//! Thin adapters from evaluated arguments onto `geometry::constructions`.
//! Wrong argument counts are construction errors, not type mismatches.

use crate::error::SemanticResult;
use crate::geometry::{constructions, ConstructionError, Instance, Point, PolygonKind};
use crate::semantics::Value;

fn expect_args(constructor: &'static str, args: &[Value], expected: usize) -> SemanticResult<()> {
    if args.len() != expected {
        return Err(ConstructionError::ArgumentCount {
            constructor,
            expected,
            found: args.len(),
        }
        .into());
    }
    Ok(())
}

fn points(constructor: &str, args: &[Value]) -> SemanticResult<Vec<Point>> {
    args.iter().map(|a| a.as_point(constructor)).collect()
}

pub fn line(args: &[Value]) -> SemanticResult<Value> {
    expect_args("Line", args, 2)?;
    let a = args[0].as_point("Line")?;
    let b = args[1].as_point("Line")?;
    Ok(Instance::Line(constructions::line(a, b)).into())
}

pub fn arc(args: &[Value]) -> SemanticResult<Value> {
    expect_args("Arc", args, 3)?;
    let circle = args[0].as_circle("Arc")?;
    let a = args[1].as_point("Arc")?;
    let b = args[2].as_point("Arc")?;
    Ok(Instance::Arc(constructions::arc(circle, a, b)).into())
}

pub fn circle(args: &[Value]) -> SemanticResult<Value> {
    expect_args("Circle", args, 2)?;
    let center = args[0].as_point("Circle")?;
    let radius = args[1].as_number("Circle")?;
    Ok(Instance::Circle(constructions::circle(center, radius)).into())
}

pub fn point(args: &[Value]) -> SemanticResult<Value> {
    expect_args("Point", args, 2)?;
    let x = args[0].as_number("Point")?;
    let y = args[1].as_number("Point")?;
    Ok(Instance::Point(Point::new(x, y)).into())
}

pub fn angle(args: &[Value]) -> SemanticResult<Value> {
    expect_args("Angle", args, 3)?;
    let a = args[0].as_point("Angle")?;
    let vertex = args[1].as_point("Angle")?;
    let c = args[2].as_point("Angle")?;
    Ok(Instance::Angle(constructions::angle(a, vertex, c)).into())
}

fn polygon_of(kind: PolygonKind, name: &str, args: &[Value]) -> SemanticResult<Value> {
    let polygon = constructions::polygon(kind, points(name, args)?)?;
    Ok(Instance::Polygon(polygon).into())
}

pub fn triangle(args: &[Value]) -> SemanticResult<Value> {
    polygon_of(PolygonKind::Triangle, "Triangle", args)
}

pub fn quad(args: &[Value]) -> SemanticResult<Value> {
    polygon_of(PolygonKind::Quad, "Quad", args)
}

pub fn hexagon(args: &[Value]) -> SemanticResult<Value> {
    polygon_of(PolygonKind::Hexagon, "Hexagon", args)
}

pub fn polygon(args: &[Value]) -> SemanticResult<Value> {
    polygon_of(PolygonKind::General, "Polygon", args)
}
