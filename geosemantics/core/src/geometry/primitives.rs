//! Geometric primitives
//!
//! Concrete coordinate-backed objects that formula variables are bound to.

use super::constructions::{self, ConstructionError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 2D point coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `self` to `other`
    pub fn to(&self, other: &Point) -> Point {
        Point::new(other.x - self.x, other.y - self.y)
    }

    /// Dot product with another point (as vectors from origin)
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product z-component (for 2D)
    pub fn cross_z(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }
}

/// Segment between two endpoints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Arc of `circle` running from `a` to `b`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub circle: Circle,
    pub a: Point,
    pub b: Point,
}

/// Angle `a`-`vertex`-`c`, measured at `vertex`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    pub a: Point,
    pub vertex: Point,
    pub c: Point,
}

impl Angle {
    pub fn new(a: Point, vertex: Point, c: Point) -> Self {
        Self { a, vertex, c }
    }
}

/// Which constructor produced a polygon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolygonKind {
    Triangle,
    Quad,
    Hexagon,
    General,
}

impl PolygonKind {
    /// Exact vertex count required by this kind, if fixed
    pub fn arity(&self) -> Option<usize> {
        match self {
            PolygonKind::Triangle => Some(3),
            PolygonKind::Quad => Some(4),
            PolygonKind::Hexagon => Some(6),
            PolygonKind::General => None,
        }
    }
}

/// Closed polygon; consecutive vertices (wrapping around) form its sides
///
/// Deserialization goes through [`constructions::polygon`], so a loaded
/// polygon satisfies the same vertex-count rules as a constructed one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPolygon")]
pub struct Polygon {
    pub kind: PolygonKind,
    pub vertices: Vec<Point>,
}

#[derive(Deserialize)]
struct RawPolygon {
    kind: PolygonKind,
    vertices: Vec<Point>,
}

impl TryFrom<RawPolygon> for Polygon {
    type Error = ConstructionError;

    fn try_from(raw: RawPolygon) -> Result<Self, Self::Error> {
        constructions::polygon(raw.kind, raw.vertices)
    }
}

impl Polygon {
    /// Sides as `(previous, current)` vertex pairs, starting with the closing side
    pub fn sides(&self) -> impl Iterator<Item = Line> + '_ {
        let n = self.vertices.len();
        self.vertices
            .iter()
            .enumerate()
            .map(move |(i, p)| Line::new(self.vertices[(i + n - 1) % n], *p))
    }
}

/// Any geometric object a formula can refer to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instance {
    Point(Point),
    Line(Line),
    Arc(Arc),
    Circle(Circle),
    Angle(Angle),
    Polygon(Polygon),
}

impl Instance {
    /// Type name used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Instance::Point(_) => "point",
            Instance::Line(_) => "line",
            Instance::Arc(_) => "arc",
            Instance::Circle(_) => "circle",
            Instance::Angle(_) => "angle",
            Instance::Polygon(p) => match p.kind {
                PolygonKind::Triangle => "triangle",
                PolygonKind::Quad => "quad",
                PolygonKind::Hexagon => "hexagon",
                PolygonKind::General => "polygon",
            },
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instance::Point(p) => write!(f, "Point{}", p),
            Instance::Line(l) => write!(f, "Line({}, {})", l.a, l.b),
            Instance::Arc(a) => write!(f, "Arc({}, r={}; {}, {})", a.circle.center, a.circle.radius, a.a, a.b),
            Instance::Circle(c) => write!(f, "Circle({}, {})", c.center, c.radius),
            Instance::Angle(a) => write!(f, "Angle({}, {}, {})", a.a, a.vertex, a.c),
            Instance::Polygon(p) => {
                write!(f, "{}(", self.kind_name())?;
                for (i, v) in p.vertices.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, ")")
            }
        }
    }
}
