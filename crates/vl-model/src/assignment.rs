//! Variable and output assignments.
//!
//! Both are ordered `key -> Real` maps. A [`VariableAssignment`] always holds
//! exactly the keys its definition declares; it can only be seeded from
//! defaults (or decoded from a stored snapshot) and is never mutated in place.

use std::cell::RefCell;
use std::fmt;
use std::ops::{Deref, Index};

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use vl_core::Real;

use crate::schema::SimulationDef;

/// Ordered key/value pairs with unique keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueMap {
    entries: Vec<(String, Real)>,
}

impl ValueMap {
    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    fn upsert(&mut self, key: String, value: Real) {
        match self.position(&key) {
            Some(i) => self.entries[i].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<Real> {
        self.position(key).map(|i| self.entries[i].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Real)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Equality on the raw bit patterns, so `NaN` compares equal to itself.
    pub fn bitwise_eq(&self, other: &ValueMap) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|((ka, va), (kb, vb))| ka == kb && va.to_bits() == vb.to_bits())
    }
}

/// Chosen value for every declared input variable of one definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableAssignment(ValueMap);

impl VariableAssignment {
    /// Seed every declared variable with its default, in declaration order.
    pub fn from_defaults(def: &SimulationDef) -> Self {
        let mut map = ValueMap::default();
        for variable in &def.variables {
            map.upsert(variable.key.clone(), variable.default);
        }
        Self(map)
    }

    /// Copy of this assignment with `key` set to `value`.
    ///
    /// Returns `None` when `key` is not part of the assignment; `self` is
    /// never touched.
    pub fn with_value(&self, key: &str, value: Real) -> Option<Self> {
        let index = self.0.position(key)?;
        let mut next = self.clone();
        next.0.entries[index].1 = value;
        Some(next)
    }
}

impl Deref for VariableAssignment {
    type Target = ValueMap;

    fn deref(&self) -> &ValueMap {
        &self.0
    }
}

/// Result of one evaluation. May hold keys beyond the declared outputs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputAssignment(ValueMap);

impl OutputAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; a repeated key keeps its first position.
    pub fn with(mut self, key: impl Into<String>, value: Real) -> Self {
        self.0.upsert(key.into(), value);
        self
    }
}

impl Deref for OutputAssignment {
    type Target = ValueMap;

    fn deref(&self) -> &ValueMap {
        &self.0
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Real); N]> for OutputAssignment {
    fn from(pairs: [(K, Real); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Real)> for OutputAssignment {
    fn from_iter<I: IntoIterator<Item = (K, Real)>>(iter: I) -> Self {
        let mut map = ValueMap::default();
        for (k, v) in iter {
            map.upsert(k.into(), v);
        }
        Self(map)
    }
}

/// Read-only view handed to a formula.
///
/// Reading a key the assignment does not hold yields `NaN` and is remembered,
/// which lets the registry reject formulas that reference undeclared inputs.
pub struct Inputs<'a> {
    values: &'a ValueMap,
    undeclared: RefCell<Vec<String>>,
}

impl<'a> Inputs<'a> {
    pub fn new(assignment: &'a VariableAssignment) -> Self {
        Self {
            values: &assignment.0,
            undeclared: RefCell::new(Vec::new()),
        }
    }

    pub fn get(&self, key: &str) -> Real {
        self[key]
    }

    /// Keys read by the formula that the assignment does not contain.
    pub fn undeclared_reads(&self) -> Vec<String> {
        self.undeclared.borrow().clone()
    }

    fn note_undeclared(&self, key: &str) {
        let mut seen = self.undeclared.borrow_mut();
        if !seen.iter().any(|k| k == key) {
            seen.push(key.to_string());
        }
    }
}

impl Index<&str> for Inputs<'_> {
    type Output = Real;

    fn index(&self, key: &str) -> &Real {
        match self.values.position(key) {
            Some(i) => &self.values.entries[i].1,
            None => {
                self.note_undeclared(key);
                &Real::NAN
            }
        }
    }
}

// JSON has no NaN or infinities; they travel as strings. `null` decodes as
// NaN because that is what browsers write for it.
const NAN_TEXT: &str = "NaN";
const POS_INF_TEXT: &str = "Infinity";
const NEG_INF_TEXT: &str = "-Infinity";

struct EncodedReal(Real);

impl Serialize for EncodedReal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.is_finite() {
            serializer.serialize_f64(v)
        } else if v.is_nan() {
            serializer.serialize_str(NAN_TEXT)
        } else if v > 0.0 {
            serializer.serialize_str(POS_INF_TEXT)
        } else {
            serializer.serialize_str(NEG_INF_TEXT)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DecodedReal {
    Number(f64),
    Text(String),
}

impl DecodedReal {
    fn into_real<E: de::Error>(self) -> Result<Real, E> {
        match self {
            DecodedReal::Number(v) => Ok(v),
            DecodedReal::Text(text) => match text.as_str() {
                NAN_TEXT => Ok(Real::NAN),
                POS_INF_TEXT => Ok(Real::INFINITY),
                NEG_INF_TEXT => Ok(Real::NEG_INFINITY),
                other => Err(E::custom(format!("expected a number, got \"{other}\""))),
            },
        }
    }
}

impl Serialize for ValueMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, &EncodedReal(*v))?;
        }
        map.end()
    }
}

struct ValueMapVisitor;

impl<'de> Visitor<'de> for ValueMapVisitor {
    type Value = ValueMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of variable keys to numbers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ValueMap, A::Error> {
        let mut map = ValueMap::default();
        while let Some(key) = access.next_key::<String>()? {
            let value = match access.next_value::<Option<DecodedReal>>()? {
                Some(decoded) => decoded.into_real()?,
                None => Real::NAN,
            };
            map.upsert(key, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for ValueMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ValueMapVisitor)
    }
}
