//! Graded truth values
//!
//! Measurements from diagrams are noisy, so predicates never answer a plain
//! yes/no. They report how far the measured quantities are from exact
//! satisfaction (`norm`) relative to the size of those quantities (`scale`),
//! and derive a confidence in `[0, 1]` from the ratio.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence-weighted result of a relational or structural check
///
/// Deserialization reads only `norm` and `scale`; a serialized `confidence`
/// is ignored and recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTruthValue")]
pub struct TruthValue {
    norm: f64,
    scale: f64,
    confidence: f64,
}

#[derive(Deserialize)]
struct RawTruthValue {
    norm: f64,
    scale: f64,
}

impl From<RawTruthValue> for TruthValue {
    fn from(raw: RawTruthValue) -> Self {
        TruthValue::new(raw.norm, raw.scale)
    }
}

impl TruthValue {
    /// Build from a deviation and its reference magnitude
    ///
    /// `confidence = 1 - min(1, norm / scale)`. A zero scale yields confidence
    /// 0 even when `norm` is 0 as well, so comparing zero with zero fails.
    pub fn new(norm: f64, scale: f64) -> Self {
        let confidence = if scale == 0.0 {
            0.0
        } else {
            1.0 - (norm / scale).min(1.0)
        };
        Self { norm, scale, confidence }
    }

    /// Deviation with the default unit scale
    pub fn from_norm(norm: f64) -> Self {
        Self::new(norm, 1.0)
    }

    /// Crisp success: confidence 1
    pub fn certain() -> Self {
        Self::from_norm(0.0)
    }

    /// Crisp failure: confidence 0
    pub fn impossible() -> Self {
        Self::from_norm(f64::INFINITY)
    }

    /// Crisp check expressed through the sentinels
    pub fn crisp(holds: bool) -> Self {
        if holds {
            Self::certain()
        } else {
            Self::impossible()
        }
    }

    pub fn norm(&self) -> f64 {
        self.norm
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

impl fmt::Display for TruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TV(conf={:.2})", self.confidence)
    }
}

/// Truth operand: a graded value or a plain boolean identity
///
/// The identities seed folds: `true` is neutral for conjunction, `false` for
/// disjunction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Truth {
    Graded(TruthValue),
    Identity(bool),
}

impl Truth {
    /// Conjunction: the weaker operand wins
    ///
    /// Ties go to `other`.
    pub fn and(self, other: Truth) -> Truth {
        match (self, other) {
            (Truth::Graded(a), Truth::Graded(b)) => {
                if a.confidence < b.confidence {
                    Truth::Graded(a)
                } else {
                    Truth::Graded(b)
                }
            }
            (Truth::Identity(true), t) | (t, Truth::Identity(true)) => t,
            (Truth::Identity(false), _) | (_, Truth::Identity(false)) => Truth::Identity(false),
        }
    }

    /// Disjunction: the stronger operand wins
    ///
    /// Ties go to `other`.
    pub fn or(self, other: Truth) -> Truth {
        match (self, other) {
            (Truth::Graded(a), Truth::Graded(b)) => {
                if a.confidence > b.confidence {
                    Truth::Graded(a)
                } else {
                    Truth::Graded(b)
                }
            }
            (Truth::Identity(false), t) | (t, Truth::Identity(false)) => t,
            (Truth::Identity(true), _) | (_, Truth::Identity(true)) => Truth::Identity(true),
        }
    }

    /// Left fold of [`Truth::and`] seeded with `true`
    pub fn all<I: IntoIterator<Item = Truth>>(items: I) -> Truth {
        items.into_iter().fold(Truth::Identity(true), Truth::and)
    }

    /// Left fold of [`Truth::or`] seeded with `false`
    pub fn any<I: IntoIterator<Item = Truth>>(items: I) -> Truth {
        items.into_iter().fold(Truth::Identity(false), Truth::or)
    }

    /// Graded confidence; identities count as 1 and 0
    pub fn confidence(&self) -> f64 {
        match self {
            Truth::Graded(tv) => tv.confidence,
            Truth::Identity(true) => 1.0,
            Truth::Identity(false) => 0.0,
        }
    }

    pub fn graded(&self) -> Option<&TruthValue> {
        match self {
            Truth::Graded(tv) => Some(tv),
            Truth::Identity(_) => None,
        }
    }
}

impl From<TruthValue> for Truth {
    fn from(tv: TruthValue) -> Self {
        Truth::Graded(tv)
    }
}

impl From<bool> for Truth {
    fn from(b: bool) -> Self {
        Truth::Identity(b)
    }
}

impl fmt::Display for Truth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Truth::Graded(tv) => write!(f, "{}", tv),
            Truth::Identity(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tv(norm: f64, scale: f64) -> Truth {
        Truth::Graded(TruthValue::new(norm, scale))
    }

    #[test]
    fn test_confidence_formula() {
        assert_eq!(TruthValue::new(0.0, 4.0).confidence(), 1.0);
        assert_eq!(TruthValue::new(1.0, 4.0).confidence(), 0.75);
        // Deviation larger than scale saturates at 0
        assert_eq!(TruthValue::new(10.0, 4.0).confidence(), 0.0);
    }

    #[test]
    fn test_zero_scale_is_failure() {
        assert_eq!(TruthValue::new(0.0, 0.0).confidence(), 0.0);
        assert_eq!(TruthValue::new(3.0, 0.0).confidence(), 0.0);
    }

    #[test]
    fn test_deserialize_recomputes_confidence() {
        let json = r#"{"norm": 5.0, "scale": 1.0, "confidence": 1.0}"#;
        let tv: TruthValue = serde_json::from_str(json).unwrap();

        assert_eq!(tv.norm(), 5.0);
        assert_eq!(tv.confidence(), 0.0);
        assert_eq!(tv, TruthValue::new(5.0, 1.0));
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(TruthValue::certain().confidence(), 1.0);
        assert_eq!(TruthValue::impossible().confidence(), 0.0);
        assert_eq!(TruthValue::crisp(true), TruthValue::certain());
    }

    #[test]
    fn test_and_takes_minimum() {
        let x = tv(1.0, 4.0);
        let y = tv(2.0, 4.0);

        assert_eq!(x.and(y).confidence(), 0.5);
        assert_eq!(y.and(x).confidence(), 0.5);
    }

    #[test]
    fn test_or_takes_maximum() {
        let x = tv(1.0, 4.0);
        let y = tv(2.0, 4.0);

        assert_eq!(x.or(y).confidence(), 0.75);
        assert_eq!(y.or(x).confidence(), 0.75);
    }

    #[test]
    fn test_tie_returns_second_operand() {
        let x = tv(1.0, 2.0);
        let y = tv(2.0, 4.0);

        assert_eq!(x.and(y), y);
        assert_eq!(x.or(y), y);
    }

    #[test]
    fn test_identity_elements() {
        let x = tv(1.0, 3.0);

        assert_eq!(Truth::Identity(true).and(x), x);
        assert_eq!(x.and(Truth::Identity(true)), x);
        assert_eq!(Truth::Identity(false).or(x), x);
        assert_eq!(x.or(Truth::Identity(false)), x);
    }

    #[test]
    fn test_identities_absorb() {
        let x = tv(0.0, 1.0);

        assert_eq!(Truth::Identity(false).and(x), Truth::Identity(false));
        assert_eq!(x.or(Truth::Identity(true)), Truth::Identity(true));
        assert_eq!(Truth::Identity(true).and(Truth::Identity(false)), Truth::Identity(false));
        assert_eq!(Truth::Identity(false).or(Truth::Identity(false)), Truth::Identity(false));
    }

    #[test]
    fn test_folds() {
        let items = vec![tv(0.0, 1.0), tv(1.0, 2.0), tv(1.0, 4.0)];

        assert_eq!(Truth::all(items.clone()).confidence(), 0.5);
        assert_eq!(Truth::any(items).confidence(), 1.0);

        // Empty folds return their seeds
        assert_eq!(Truth::all(Vec::new()), Truth::Identity(true));
        assert_eq!(Truth::any(Vec::new()), Truth::Identity(false));
    }
}
