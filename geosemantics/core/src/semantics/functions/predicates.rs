//! Geometric predicates
//!
//! Each predicate reduces to one or more relational comparisons over measured
//! distances and angles, combined with the truth algebra.

use super::check_arity;
use super::measurements::area;
use super::relations::equals_tv;
use crate::error::{SemanticError, SemanticResult};
use crate::geometry::{self, Angle, Circle, Line, Point, Polygon};
use crate::semantics::{Truth, TruthValue, Value};

pub fn point_lies_on_circle_tv(point: &Point, circle: &Circle) -> TruthValue {
    equals_tv(geometry::distance(point, &circle.center), circle.radius)
}

/// `b` lies between `a` and `c`: |ac| = |ab| + |bc|
pub fn colinear_tv(a: &Point, b: &Point, c: &Point) -> TruthValue {
    let ac = geometry::distance(a, c);
    equals_tv(ac, geometry::distance(a, b) + geometry::distance(c, b))
}

pub fn point_lies_on_line_tv(point: &Point, line: &Line) -> TruthValue {
    colinear_tv(&line.a, point, &line.b)
}

/// Slope condition written without division so vertical lines need no special case
pub fn perpendicular_tv(l1: &Line, l2: &Line) -> TruthValue {
    equals_tv(
        (l1.b.y - l1.a.y) * (l2.b.y - l2.a.y),
        (l1.a.x - l1.b.x) * (l2.b.x - l2.a.x),
    )
}

pub fn is_chord_of_truth(line: &Line, circle: &Circle) -> Truth {
    Truth::from(point_lies_on_circle_tv(&line.a, circle))
        .and(point_lies_on_circle_tv(&line.b, circle).into())
}

fn polygon_with(operation: &str, value: &Value, vertices: usize) -> SemanticResult<Polygon> {
    let polygon = value.as_polygon(operation)?;
    if polygon.vertices.len() != vertices {
        return Err(SemanticError::type_mismatch(
            operation,
            format!("expected {} vertices, found {}", vertices, polygon.vertices.len()),
        ));
    }
    Ok(polygon.clone())
}

fn side_lengths(polygon: &Polygon) -> Vec<f64> {
    polygon.sides().map(|side| geometry::line_length(&side)).collect()
}

/// Conjunction of equality between each pair of consecutive entries
fn chained_equality(lengths: &[f64]) -> Truth {
    Truth::all(lengths.windows(2).map(|w| equals_tv(w[0], w[1]).into()))
}

pub fn tangent(args: &[Value]) -> SemanticResult<Value> {
    check_arity("Tangent", args, 2)?;
    let line = args[0].as_line("Tangent")?;
    let circle = args[1].as_circle("Tangent")?;
    let d = geometry::distance_line_point(&line, &circle.center);
    Ok(equals_tv(d, circle.radius).into())
}

pub fn point_lies_on_circle(args: &[Value]) -> SemanticResult<Value> {
    check_arity("PointLiesOnCircle", args, 2)?;
    let point = args[0].as_point("PointLiesOnCircle")?;
    let circle = args[1].as_circle("PointLiesOnCircle")?;
    Ok(point_lies_on_circle_tv(&point, &circle).into())
}

pub fn is_chord_of(args: &[Value]) -> SemanticResult<Value> {
    check_arity("IsChordOf", args, 2)?;
    let line = args[0].as_line("IsChordOf")?;
    let circle = args[1].as_circle("IsChordOf")?;
    Ok(is_chord_of_truth(&line, &circle).into())
}

pub fn is_diameter_line_of(args: &[Value]) -> SemanticResult<Value> {
    check_arity("IsDiameterLineOf", args, 2)?;
    let line = args[0].as_line("IsDiameterLineOf")?;
    let circle = args[1].as_circle("IsDiameterLineOf")?;
    let spans = equals_tv(geometry::line_length(&line), 2.0 * circle.radius);
    Ok(is_chord_of_truth(&line, &circle).and(spans.into()).into())
}

pub fn perpendicular(args: &[Value]) -> SemanticResult<Value> {
    check_arity("Perpendicular", args, 2)?;
    let l1 = args[0].as_line("Perpendicular")?;
    let l2 = args[1].as_line("Perpendicular")?;
    Ok(perpendicular_tv(&l1, &l2).into())
}

pub fn colinear(args: &[Value]) -> SemanticResult<Value> {
    check_arity("Colinear", args, 3)?;
    let a = args[0].as_point("Colinear")?;
    let b = args[1].as_point("Colinear")?;
    let c = args[2].as_point("Colinear")?;
    Ok(colinear_tv(&a, &b, &c).into())
}

pub fn point_lies_on_line(args: &[Value]) -> SemanticResult<Value> {
    check_arity("PointLiesOnLine", args, 2)?;
    let point = args[0].as_point("PointLiesOnLine")?;
    let line = args[1].as_line("PointLiesOnLine")?;
    Ok(point_lies_on_line_tv(&point, &line).into())
}

pub fn is_midpoint_of(args: &[Value]) -> SemanticResult<Value> {
    check_arity("IsMidpointOf", args, 2)?;
    let point = args[0].as_point("IsMidpointOf")?;
    let line = args[1].as_line("IsMidpointOf")?;
    let halves = equals_tv(
        geometry::distance(&line.a, &point),
        geometry::distance(&point, &line.b),
    );
    let on = point_lies_on_line_tv(&point, &line);
    Ok(Truth::from(halves).and(on.into()).into())
}

/// Every vertex of the polygon lies on the circle
pub fn is_inscribed_in(args: &[Value]) -> SemanticResult<Value> {
    check_arity("IsInscribedIn", args, 2)?;
    let polygon = args[0].as_polygon("IsInscribedIn")?;
    let circle = args[1].as_circle("IsInscribedIn")?;
    let out = Truth::all(
        polygon
            .vertices
            .iter()
            .map(|v| point_lies_on_circle_tv(v, &circle).into()),
    );
    Ok(out.into())
}

pub fn is_center_of(args: &[Value]) -> SemanticResult<Value> {
    check_arity("IsCenterOf", args, 2)?;
    let point = args[0].as_point("IsCenterOf")?;
    let circle = args[1].as_circle("IsCenterOf")?;
    let x = equals_tv(point.x, circle.center.x);
    let y = equals_tv(point.y, circle.center.y);
    Ok(Truth::from(x).and(y.into()).into())
}

/// Every line of the collection passes through the point
pub fn intersect_at(args: &[Value]) -> SemanticResult<Value> {
    check_arity("IntersectAt", args, 2)?;
    let lines = args[0].as_collection("IntersectAt")?;
    let point = args[1].as_point("IntersectAt")?;

    let mut out = Truth::Identity(true);
    for item in lines {
        let line = item.as_line("IntersectAt")?;
        out = out.and(point_lies_on_line_tv(&point, &line).into());
    }
    Ok(out.into())
}

pub fn equilateral(args: &[Value]) -> SemanticResult<Value> {
    check_arity("Equilateral", args, 1)?;
    let triangle = polygon_with("Equilateral", &args[0], 3)?;
    Ok(chained_equality(&side_lengths(&triangle)).into())
}

pub fn is_square(args: &[Value]) -> SemanticResult<Value> {
    check_arity("IsSquare", args, 1)?;
    let quad = polygon_with("IsSquare", &args[0], 4)?;
    Ok(chained_equality(&side_lengths(&quad)).into())
}

/// Any two sides match
pub fn isosceles(args: &[Value]) -> SemanticResult<Value> {
    check_arity("Isosceles", args, 1)?;
    let triangle = polygon_with("Isosceles", &args[0], 3)?;
    let sides = side_lengths(&triangle);

    let pairs = (0..sides.len())
        .flat_map(|i| (i + 1..sides.len()).map(move |j| (i, j)))
        .map(|(i, j)| equals_tv(sides[i], sides[j]).into());
    Ok(Truth::any(pairs).into())
}

/// The line passes through the vertex and splits the angle into equal halves
pub fn bisects_angle(args: &[Value]) -> SemanticResult<Value> {
    check_arity("BisectsAngle", args, 2)?;
    let line = args[0].as_line("BisectsAngle")?;
    let angle = args[1].as_angle("BisectsAngle")?;

    let on = point_lies_on_line_tv(&angle.vertex, &line);

    let distant = if line.a == angle.vertex { line.b } else { line.a };
    let first = Angle::new(angle.a, angle.vertex, distant);
    let second = Angle::new(distant, angle.vertex, angle.c);
    let halves = equals_tv(
        geometry::angle_in_radian(&first),
        geometry::angle_in_radian(&second),
    );

    Ok(Truth::from(on).and(halves.into()).into())
}

pub fn is_area_of(args: &[Value]) -> SemanticResult<Value> {
    check_arity("IsAreaOf", args, 2)?;
    let number = args[0].as_number("IsAreaOf")?;
    Ok(equals_tv(number, area(&args[1], "IsAreaOf")?).into())
}

pub fn is_length_of(args: &[Value]) -> SemanticResult<Value> {
    check_arity("IsLengthOf", args, 2)?;
    let number = args[0].as_number("IsLengthOf")?;
    let line = args[1].as_line("IsLengthOf")?;
    Ok(equals_tv(number, geometry::line_length(&line)).into())
}
