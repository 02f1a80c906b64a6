//! Computational geometry over coordinates
//!
//! Distances and angle measures. Nothing here knows about truth values.

use super::primitives::{Angle, Line, Point};

/// Distance between two points
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    p1.to(p2).norm()
}

/// Length of a segment
pub fn line_length(line: &Line) -> f64 {
    distance(&line.a, &line.b)
}

/// Perpendicular distance from `point` to the line through `line.a` and `line.b`
///
/// A degenerate line (coincident endpoints) falls back to point distance.
pub fn distance_line_point(line: &Line, point: &Point) -> f64 {
    let direction = line.a.to(&line.b);
    let length = direction.norm();
    if length == 0.0 {
        return distance(&line.a, point);
    }
    direction.cross_z(&line.a.to(point)).abs() / length
}

/// Measure of the angle at `angle.vertex` in radians, in `[0, π]`
pub fn angle_in_radian(angle: &Angle) -> f64 {
    let v1 = angle.vertex.to(&angle.a);
    let v2 = angle.vertex.to(&angle.c);

    let mag1 = v1.norm();
    let mag2 = v2.norm();

    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }

    (v1.dot(&v2) / (mag1 * mag2)).clamp(-1.0, 1.0).acos()
}
