//! Geometric constructions
//!
//! Builds primitives from their defining parts, validating arity.

use super::primitives::{Angle, Arc, Circle, Line, Point, Polygon, PolygonKind};
use thiserror::Error;

/// Errors raised when a constructor is given the wrong parts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstructionError {
    #[error("{constructor} expects {expected} arguments, got {found}")]
    ArgumentCount {
        constructor: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{kind:?} requires exactly {expected} vertices, got {found}")]
    VertexCount {
        kind: PolygonKind,
        expected: usize,
        found: usize,
    },

    #[error("polygon requires at least 3 vertices, got {0}")]
    TooFewVertices(usize),
}

pub fn line(a: Point, b: Point) -> Line {
    Line::new(a, b)
}

pub fn circle(center: Point, radius: f64) -> Circle {
    Circle::new(center, radius)
}

pub fn arc(circle: Circle, a: Point, b: Point) -> Arc {
    Arc { circle, a, b }
}

pub fn angle(a: Point, vertex: Point, c: Point) -> Angle {
    Angle::new(a, vertex, c)
}

/// Build a polygon of the given kind, checking the vertex count
pub fn polygon(kind: PolygonKind, vertices: Vec<Point>) -> Result<Polygon, ConstructionError> {
    match kind.arity() {
        Some(expected) if vertices.len() != expected => Err(ConstructionError::VertexCount {
            kind,
            expected,
            found: vertices.len(),
        }),
        None if vertices.len() < 3 => Err(ConstructionError::TooFewVertices(vertices.len())),
        _ => Ok(Polygon { kind, vertices }),
    }
}
