use std::collections::BTreeMap;
use std::fmt;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Output classes, in probability-vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassLabel {
    Safe,
    Phishing,
}

impl ClassLabel {
    pub const ALL: [ClassLabel; 2] = [ClassLabel::Safe, ClassLabel::Phishing];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<ClassLabel> {
        ClassLabel::ALL.get(index).copied()
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClassLabel::Safe => "SAFE",
            ClassLabel::Phishing => "PHISHING",
        })
    }
}

/// Explainer output: for each class, `(feature name, contribution)` in
/// column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attributions {
    pub per_class: BTreeMap<ClassLabel, Vec<(String, f64)>>,
}

impl Attributions {
    pub fn for_class(&self, label: ClassLabel) -> Option<&[(String, f64)]> {
        self.per_class.get(&label).map(Vec::as_slice)
    }
}

/// Reference rows the explainer measures contributions against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl Background {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        let background = Self { columns, rows };
        background.validate()?;
        Ok(background)
    }

    pub fn validate(&self) -> Result<()> {
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != self.columns.len() {
                bail!(
                    "background row {i} has {} values, expected {}",
                    row.len(),
                    self.columns.len()
                );
            }
        }
        Ok(())
    }

    /// Per-column mean; zeros when there are no rows.
    pub fn column_means(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.columns.len()];
        for row in &self.rows {
            for (sum, v) in sums.iter_mut().zip(row) {
                *sum += v;
            }
        }
        if !self.rows.is_empty() {
            let n = self.rows.len() as f64;
            for sum in &mut sums {
                *sum /= n;
            }
        }
        sums
    }
}
