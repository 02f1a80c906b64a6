//! Operation registry
//!
//! The set of operation names a formula may use is closed: [`Operation`]
//! enumerates it, and a [`FunctionRegistry`] can only bind names from that
//! set. A misspelled name is rejected when the registry is built rather than
//! surfacing as `UnknownOperation` in the middle of an evaluation.

use super::functions::{
    arithmetic, constructors, measurements, predicates, relations, structural, OperationFn,
};
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while building a registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("'{0}' is not a known operation name")]
    UnknownName(String),
}

macro_rules! operations {
    ($($variant:ident => $name:literal, $func:path;)*) => {
        /// Every operation name the formula language defines
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Operation {
            $($variant,)*
        }

        impl Operation {
            pub const ALL: &'static [Operation] = &[$(Operation::$variant,)*];

            /// Name as it appears in formula signatures
            pub fn name(&self) -> &'static str {
                match self {
                    $(Operation::$variant => $name,)*
                }
            }

            /// Library implementation bound by the standard registry
            pub fn implementation(&self) -> OperationFn {
                match self {
                    $(Operation::$variant => $func as OperationFn,)*
                }
            }
        }
    };
}

operations! {
    // Constructors
    Line => "Line", constructors::line;
    Arc => "Arc", constructors::arc;
    Circle => "Circle", constructors::circle;
    Point => "Point", constructors::point;
    Angle => "Angle", constructors::angle;
    Triangle => "Triangle", constructors::triangle;
    Quad => "Quad", constructors::quad;
    Hexagon => "Hexagon", constructors::hexagon;
    Polygon => "Polygon", constructors::polygon;

    // Measurements
    LengthOf => "LengthOf", measurements::length_of;
    RadiusOf => "RadiusOf", measurements::radius_of;
    MeasureOf => "MeasureOf", measurements::measure_of;
    AreaOf => "AreaOf", measurements::area_of;

    // Arithmetic
    Add => "Add", arithmetic::add;
    Sub => "Sub", arithmetic::sub;
    Mul => "Mul", arithmetic::mul;
    Div => "Div", arithmetic::div;
    Pow => "Pow", arithmetic::pow;
    Sqrt => "Sqrt", arithmetic::sqrt;

    // Relations
    Equals => "Equals", relations::equals;
    Greater => "Greater", relations::greater;
    Less => "Less", relations::less;
    Or => "Or", relations::or;

    // Geometric predicates
    Tangent => "Tangent", predicates::tangent;
    PointLiesOnCircle => "PointLiesOnCircle", predicates::point_lies_on_circle;
    IsChordOf => "IsChordOf", predicates::is_chord_of;
    IsDiameterLineOf => "IsDiameterLineOf", predicates::is_diameter_line_of;
    Perpendicular => "Perpendicular", predicates::perpendicular;
    Colinear => "Colinear", predicates::colinear;
    PointLiesOnLine => "PointLiesOnLine", predicates::point_lies_on_line;
    IsMidpointOf => "IsMidpointOf", predicates::is_midpoint_of;
    IsInscribedIn => "IsInscribedIn", predicates::is_inscribed_in;
    IsCenterOf => "IsCenterOf", predicates::is_center_of;
    IntersectAt => "IntersectAt", predicates::intersect_at;
    Equilateral => "Equilateral", predicates::equilateral;
    IsSquare => "IsSquare", predicates::is_square;
    Isosceles => "Isosceles", predicates::isosceles;
    BisectsAngle => "BisectsAngle", predicates::bisects_angle;
    IsAreaOf => "IsAreaOf", predicates::is_area_of;
    IsLengthOf => "IsLengthOf", predicates::is_length_of;

    // Structural checks
    IsTriangle => "IsTriangle", structural::is_triangle;
    IsLine => "IsLine", structural::is_line;
    IsAngle => "IsAngle", structural::is_angle;
    IsPoint => "IsPoint", structural::is_point;
    IsPolygon => "IsPolygon", structural::is_polygon;
    Two => "Two", structural::two;
    Three => "Three", structural::three;
}

impl FromStr for Operation {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| RegistryError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable name -> implementation table
///
/// Built once before evaluation starts and shared read-only; it is
/// `Send + Sync`, so any number of evaluations may use it concurrently.
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    table: FxHashMap<&'static str, (Operation, OperationFn)>,
}

impl FunctionRegistry {
    /// Registry with no operations bound
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every operation bound to its library implementation
    pub fn standard() -> Self {
        Operation::ALL
            .iter()
            .fold(Self::empty(), |registry, op| registry.with(*op, op.implementation()))
    }

    /// Bind (or rebind) an operation
    pub fn with(mut self, operation: Operation, implementation: OperationFn) -> Self {
        self.table.insert(operation.name(), (operation, implementation));
        self
    }

    /// Bind by name; the name must belong to the closed operation set
    pub fn register(self, name: &str, implementation: OperationFn) -> Result<Self, RegistryError> {
        let operation = name.parse::<Operation>()?;
        Ok(self.with(operation, implementation))
    }

    /// Drop an operation's binding
    pub fn without(mut self, operation: Operation) -> Self {
        self.table.remove(operation.name());
        self
    }

    pub fn get(&self, name: &str) -> Option<OperationFn> {
        self.table.get(name).map(|(_, f)| *f)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Bound operations, in declaration order
    pub fn operations(&self) -> Vec<Operation> {
        let mut ops: Vec<Operation> = self.table.values().map(|(op, _)| *op).collect();
        ops.sort();
        ops
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("operations", &self.operations())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SemanticResult;
    use crate::semantics::Value;

    fn always_seven(_args: &[Value]) -> SemanticResult<Value> {
        Ok(Value::Number(7.0))
    }

    #[test]
    fn test_standard_registry_is_complete() {
        let registry = FunctionRegistry::standard();

        assert_eq!(registry.len(), Operation::ALL.len());
        for op in Operation::ALL {
            assert!(registry.contains(op.name()), "{} should be registered", op);
        }
    }

    #[test]
    fn test_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), *op);
        }
    }

    #[test]
    fn test_register_rejects_typo() {
        let err = FunctionRegistry::empty().register("Equal", always_seven).unwrap_err();
        assert_eq!(err, RegistryError::UnknownName("Equal".to_string()));
    }

    #[test]
    fn test_register_overrides() {
        let registry = FunctionRegistry::standard()
            .register("LengthOf", always_seven)
            .unwrap();

        let f = registry.get("LengthOf").unwrap();
        assert_eq!(f(&[]).unwrap(), Value::Number(7.0));
        assert_eq!(registry.len(), Operation::ALL.len());
    }

    #[test]
    fn test_without() {
        let registry = FunctionRegistry::standard().without(Operation::Sqrt);

        assert!(!registry.contains("Sqrt"));
        assert!(registry.get("Sqrt").is_none());
        assert_eq!(registry.operations().len(), Operation::ALL.len() - 1);
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FunctionRegistry>();
    }
}
