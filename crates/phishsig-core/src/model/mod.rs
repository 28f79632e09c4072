//! Classifier and explainer seams.
//!
//! The engine treats the classifier as an opaque scorer and the explainer as
//! an opaque attribution algorithm. Both are handed to [`Predictor`] at
//! construction time together with the background sample and the column
//! order they were trained with; nothing is loaded into process globals.

mod attributions;
mod linear;
mod occlusion;
mod predictor;

pub use attributions::{Attributions, Background, ClassLabel};
pub use linear::LinearModel;
pub use occlusion::OcclusionExplainer;
pub use predictor::{Predictor, Verdict};

use anyhow::{bail, Result};

const PROB_EPSILON: f64 = 1e-12;

/// Opaque scorer: numeric row (in [`Classifier::columns`] order) → one
/// probability per class, indexed by [`ClassLabel::index`].
pub trait Classifier: Send + Sync {
    /// Column order the classifier was trained on.
    fn columns(&self) -> &[String];

    fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>>;

    /// Phishing-class log-odds of `row`.
    ///
    /// The default recovers it from clamped probabilities, so it saturates
    /// near +/-27.6. Scorers that have a raw decision value should return it.
    fn log_odds(&self, row: &[f64]) -> Result<f64> {
        let proba = self.predict_proba(row)?;
        if proba.len() != ClassLabel::ALL.len() {
            bail!(
                "classifier returned {} probabilities, expected {}",
                proba.len(),
                ClassLabel::ALL.len()
            );
        }
        let p = proba[ClassLabel::Phishing.index()].clamp(PROB_EPSILON, 1.0 - PROB_EPSILON);
        Ok((p / (1.0 - p)).ln())
    }
}

/// Per-feature attribution for one row.
pub trait Explainer: Send + Sync {
    fn explain(
        &self,
        classifier: &dyn Classifier,
        background: &Background,
        row: &[f64],
    ) -> Result<Attributions>;
}
