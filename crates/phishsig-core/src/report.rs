//! Presentation helpers: risk level, textual rationale, top signals.
//!
//! These turn probabilities and attributions into something a person can
//! read. Nothing here feeds back into extraction or scoring.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;

/// Confidence cut-offs for the risk level (both exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high: 0.85,
            medium: 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_confidence(confidence: f64, thresholds: &RiskThresholds) -> Self {
        if confidence > thresholds.high {
            RiskLevel::High
        } else if confidence > thresholds.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Medium => "MEDIUM RISK",
            RiskLevel::High => "HIGH RISK",
        })
    }
}

fn by_magnitude_desc(a: f64, b: f64) -> Ordering {
    b.abs().partial_cmp(&a.abs()).unwrap_or(Ordering::Equal)
}

/// One sentence per top-`top_n` contribution, largest magnitude first.
/// Ties keep their input order.
pub fn rationale(contributions: &[(String, f64)], top_n: usize) -> Vec<String> {
    let mut ranked: Vec<&(String, f64)> = contributions.iter().collect();
    ranked.sort_by(|a, b| by_magnitude_desc(a.1, b.1));
    ranked
        .into_iter()
        .take(top_n)
        .map(|(name, value)| {
            let effect = if *value > 0.0 { "increases" } else { "reduces" };
            format!("{} {} phishing risk", name.replace('_', " "), effect)
        })
        .collect()
}

/// A raw feature value, for the "strongest signals" listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal {
    pub name: &'static str,
    pub value: f64,
}

/// The `n` features with the largest absolute value.
pub fn top_signals(vector: &FeatureVector, n: usize) -> Vec<Signal> {
    let mut signals: Vec<Signal> = vector
        .iter()
        .map(|(key, value)| Signal {
            name: key.name(),
            value: value.as_f64(),
        })
        .collect();
    signals.sort_by(|a, b| by_magnitude_desc(a.value, b.value));
    signals.truncate(n);
    signals
}
