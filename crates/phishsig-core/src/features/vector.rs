//! `FeatureVector`: one value per schema key, in schema order.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::schema::FeatureKey;
use crate::error::FeatureError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Count(u64),
    Flag(bool),
    /// Always within `[0, 1]`.
    Ratio(f64),
}

impl FeatureValue {
    pub fn as_f64(self) -> f64 {
        match self {
            FeatureValue::Count(n) => n as f64,
            FeatureValue::Flag(b) => u8::from(b) as f64,
            FeatureValue::Ratio(r) => r,
        }
    }
}

impl Serialize for FeatureValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            FeatureValue::Count(n) => serializer.serialize_u64(n),
            FeatureValue::Flag(b) => serializer.serialize_u8(u8::from(b)),
            FeatureValue::Ratio(r) => serializer.serialize_f64(r),
        }
    }
}

/// Immutable feature record for one URL. Serializes as a map whose keys
/// follow schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [FeatureValue; FeatureKey::COUNT],
}

impl FeatureVector {
    /// Builds a vector by evaluating `f` once per key.
    pub(crate) fn from_fn(mut f: impl FnMut(FeatureKey) -> FeatureValue) -> Self {
        Self {
            values: FeatureKey::ALL.map(&mut f),
        }
    }

    pub fn get(&self, key: FeatureKey) -> FeatureValue {
        self.values[key.index()]
    }

    pub fn get_by_name(&self, name: &str) -> Option<FeatureValue> {
        FeatureKey::from_name(name).map(|k| self.get(k))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(key, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureKey, FeatureValue)> + '_ {
        FeatureKey::ALL.into_iter().zip(self.values.iter().copied())
    }

    /// Numeric row in schema order.
    pub fn to_row(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.as_f64()).collect()
    }

    /// Numeric row in the caller's column order. Every column must name a
    /// feature this engine produces; duplicates are allowed.
    pub fn reindex<S: AsRef<str>>(&self, columns: &[S]) -> Result<Vec<f64>, FeatureError> {
        columns
            .iter()
            .map(|c| {
                let column = c.as_ref();
                self.get_by_name(column)
                    .map(FeatureValue::as_f64)
                    .ok_or_else(|| FeatureError::schema_mismatch(column))
            })
            .collect()
    }

    /// Comma-separated row in schema order (no header).
    pub fn to_csv_row(&self) -> String {
        self.to_row()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.name(), &value)?;
        }
        map.end()
    }
}
