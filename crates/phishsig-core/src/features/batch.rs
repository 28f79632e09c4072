//! Parallel extraction over many urls.

use rayon::prelude::*;

use super::vector::FeatureVector;

/// Extracts features for every url. Output order matches input order.
pub fn extract_batch<S>(urls: &[S]) -> Vec<FeatureVector>
where
    S: AsRef<str> + Sync,
{
    let vectors: Vec<FeatureVector> = urls
        .par_iter()
        .map(|url| super::extract(url.as_ref()))
        .collect();
    tracing::debug!(count = vectors.len(), "extracted feature batch");
    vectors
}
