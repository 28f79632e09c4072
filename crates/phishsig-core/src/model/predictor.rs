//! URL → verdict, with every collaborator injected at construction.

use anyhow::{bail, Result};
use serde::Serialize;

use super::attributions::{Background, ClassLabel};
use super::{Classifier, Explainer};
use crate::features::{extract, FeatureKey};
use crate::report::{rationale, top_signals, RiskLevel, RiskThresholds, Signal};

const DEFAULT_EXPLAIN_TOP_N: usize = 3;
const DEFAULT_SIGNAL_TOP_N: usize = 10;

/// Classification of one url with its rationale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub url: String,
    pub label: ClassLabel,
    /// Highest class probability, rounded to three decimals.
    pub confidence: f64,
    pub risk: RiskLevel,
    pub rationale: Vec<String>,
    pub signals: Vec<Signal>,
}

pub struct Predictor {
    classifier: Box<dyn Classifier>,
    explainer: Box<dyn Explainer>,
    background: Background,
    columns: Vec<String>,
    thresholds: RiskThresholds,
    explain_top_n: usize,
    signal_top_n: usize,
}

impl Predictor {
    /// `columns` is the order the classifier expects; every entry must be a
    /// feature this engine produces and must match the classifier's own
    /// column list.
    pub fn new(
        classifier: Box<dyn Classifier>,
        explainer: Box<dyn Explainer>,
        background: Background,
        columns: Vec<String>,
    ) -> Result<Self> {
        for column in &columns {
            column.parse::<FeatureKey>()?;
        }
        if classifier.columns() != columns.as_slice() {
            bail!("predictor columns do not match classifier columns");
        }
        if background.columns != columns {
            bail!("background columns do not match classifier columns");
        }
        background.validate()?;
        Ok(Self {
            classifier,
            explainer,
            background,
            columns,
            thresholds: RiskThresholds::default(),
            explain_top_n: DEFAULT_EXPLAIN_TOP_N,
            signal_top_n: DEFAULT_SIGNAL_TOP_N,
        })
    }

    pub fn with_thresholds(mut self, thresholds: RiskThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_top_n(mut self, explain_top_n: usize, signal_top_n: usize) -> Self {
        self.explain_top_n = explain_top_n;
        self.signal_top_n = signal_top_n;
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn predict(&self, url: &str) -> Result<Verdict> {
        let features = extract(url);
        let row = features.reindex(&self.columns)?;

        let proba = self.classifier.predict_proba(&row)?;
        if proba.is_empty() {
            bail!("classifier returned no probabilities");
        }
        let (best, confidence) = proba.iter().copied().enumerate().fold(
            (0, f64::NEG_INFINITY),
            |best, (i, p)| if p > best.1 { (i, p) } else { best },
        );
        let label = if best == ClassLabel::Phishing.index() {
            ClassLabel::Phishing
        } else {
            ClassLabel::Safe
        };
        let risk = RiskLevel::from_confidence(confidence, &self.thresholds);

        let attributions = self
            .explainer
            .explain(self.classifier.as_ref(), &self.background, &row)?;
        let reasons = attributions
            .for_class(ClassLabel::Phishing)
            .map(|c| rationale(c, self.explain_top_n))
            .unwrap_or_default();

        tracing::debug!(url, %label, confidence, "scored url");

        Ok(Verdict {
            url: url.to_string(),
            label,
            confidence: (confidence * 1000.0).round() / 1000.0,
            risk,
            rationale: reasons,
            signals: top_signals(&features, self.signal_top_n),
        })
    }
}
