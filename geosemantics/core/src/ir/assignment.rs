//! Variable assignments
//!
//! Binds free variable identifiers to concrete values for one evaluation.

use crate::geometry::{Instance, Point};
use crate::semantics::Value;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Identifier -> value mapping, read-only during evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    values: FxHashMap<String, Value>,
}

impl Assignment {
    pub fn new() -> Self {
        Self {
            values: FxHashMap::default(),
        }
    }

    /// Bind a variable, replacing any previous binding
    pub fn bind(&mut self, id: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(id.into(), value.into());
    }

    /// Builder-style [`Assignment::bind`]
    pub fn with(mut self, id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.bind(id, value);
        self
    }

    /// Shorthand for binding a point by coordinates
    pub fn with_point(self, id: impl Into<String>, x: f64, y: f64) -> Self {
        self.with(id, Instance::Point(Point::new(x, y)))
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for (k, v) in iter {
            assignment.bind(k, v);
        }
        assignment
    }
}
