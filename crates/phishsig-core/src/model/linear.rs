//! Logistic scorer loaded from a small JSON file.
//!
//! ```json
//! {
//!   "columns": ["length_url", "ip", "phish_hints"],
//!   "weights": [0.01, 2.3, 0.9],
//!   "intercept": -1.5,
//!   "background": [[54, 0, 0], [23, 0, 1]]
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use super::attributions::Background;
use super::Classifier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    columns: Vec<String>,
    weights: Vec<f64>,
    intercept: f64,
    #[serde(default)]
    background: Vec<Vec<f64>>,
}

impl LinearModel {
    pub fn new(columns: Vec<String>, weights: Vec<f64>, intercept: f64) -> Result<Self> {
        let model = Self {
            columns,
            weights,
            intercept,
            background: Vec::new(),
        };
        model.validate()?;
        Ok(model)
    }

    pub fn with_background(mut self, rows: Vec<Vec<f64>>) -> Result<Self> {
        self.background = rows;
        self.validate()?;
        Ok(self)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("read model {}", path.display()))?;
        let model: LinearModel = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse model {}", path.display()))?;
        model
            .validate()
            .with_context(|| format!("invalid model {}", path.display()))?;
        tracing::info!(
            columns = model.columns.len(),
            background_rows = model.background.len(),
            "loaded linear model from {}",
            path.display()
        );
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            bail!("model has no columns");
        }
        if self.weights.len() != self.columns.len() {
            bail!(
                "model has {} weights for {} columns",
                self.weights.len(),
                self.columns.len()
            );
        }
        Background::new(self.columns.clone(), self.background.clone()).map(|_| ())
    }

    /// Background sample shipped with the model (possibly empty).
    pub fn background(&self) -> Background {
        Background {
            columns: self.columns.clone(),
            rows: self.background.clone(),
        }
    }

    fn decision(&self, row: &[f64]) -> f64 {
        self.intercept
            + self
                .weights
                .iter()
                .zip(row)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl Classifier for LinearModel {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>> {
        if row.len() != self.columns.len() {
            bail!(
                "row has {} values, model expects {}",
                row.len(),
                self.columns.len()
            );
        }
        let p = sigmoid(self.decision(row));
        Ok(vec![1.0 - p, p])
    }

    fn log_odds(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.columns.len() {
            bail!(
                "row has {} values, model expects {}",
                row.len(),
                self.columns.len()
            );
        }
        Ok(self.decision(row))
    }
}
