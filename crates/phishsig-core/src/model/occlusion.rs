//! Model-agnostic attribution by replacing one feature at a time with its
//! background mean and measuring the change in the classifier's log-odds.
//!
//! For a logistic model this equals `w_i * (x_i - mean_i)` exactly, which is
//! also the interventional Shapley value for linear models.

use anyhow::{bail, Result};

use super::attributions::{Attributions, Background, ClassLabel};
use super::{Classifier, Explainer};

#[derive(Debug, Clone, Copy, Default)]
pub struct OcclusionExplainer;

impl Explainer for OcclusionExplainer {
    fn explain(
        &self,
        classifier: &dyn Classifier,
        background: &Background,
        row: &[f64],
    ) -> Result<Attributions> {
        let columns = classifier.columns();
        if background.columns != columns {
            bail!("background columns do not match classifier columns");
        }
        if row.len() != columns.len() {
            bail!(
                "row has {} values, classifier expects {}",
                row.len(),
                columns.len()
            );
        }

        let base = classifier.log_odds(row)?;
        let means = background.column_means();
        let mut phishing = Vec::with_capacity(columns.len());
        let mut occluded = row.to_vec();
        for (i, mean) in means.iter().enumerate() {
            occluded[i] = *mean;
            let z = classifier.log_odds(&occluded)?;
            occluded[i] = row[i];
            phishing.push(base - z);
        }

        // Two classes: the safe log-odds is the negated phishing log-odds.
        let safe = phishing.iter().map(|d| -d).collect::<Vec<_>>();
        let mut attributions = Attributions::default();
        for (label, values) in [(ClassLabel::Safe, safe), (ClassLabel::Phishing, phishing)] {
            let named = columns.iter().cloned().zip(values).collect();
            attributions.per_class.insert(label, named);
        }
        tracing::debug!(features = columns.len(), "computed occlusion attributions");
        Ok(attributions)
    }
}
