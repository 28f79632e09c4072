//! Feature extraction: URL string → ordered, versioned feature vector.
//!
//! Every function here is pure and allocation-local, so extraction can run
//! from any number of threads without coordination.

mod batch;
mod compute;
mod lexical;
mod schema;
mod vector;

pub use batch::extract_batch;
pub use compute::compute;
pub use schema::{feature_names, FeatureKey, FeatureKind, SCHEMA_VERSION};
pub use vector::{FeatureValue, FeatureVector};

use crate::error::FeatureError;
use crate::url_model::parse;

/// Parses and measures `url` in one call.
pub fn extract(url: &str) -> FeatureVector {
    compute(url, &parse(url))
}

/// Validates raw bytes as a url string. Non-UTF-8 input is rejected rather
/// than lossily decoded.
pub fn decode_url(raw: &[u8]) -> Result<&str, FeatureError> {
    std::str::from_utf8(raw)
        .map_err(|e| FeatureError::InvalidInput(format!("url is not valid UTF-8: {e}")))
}

/// Rejects urls longer than `max_len` characters.
pub fn check_len(url: &str, max_len: usize) -> Result<(), FeatureError> {
    let len = url.chars().count();
    if len > max_len {
        return Err(FeatureError::InvalidInput(format!(
            "url is {len} characters, limit is {max_len}"
        )));
    }
    Ok(())
}

/// Like [`extract`], for input that has not yet been validated as text.
pub fn extract_bytes(raw: &[u8]) -> Result<FeatureVector, FeatureError> {
    decode_url(raw).map(extract)
}

/// Like [`extract`], with a caller-imposed length limit.
pub fn extract_bounded(url: &str, max_len: usize) -> Result<FeatureVector, FeatureError> {
    check_len(url, max_len)?;
    Ok(extract(url))
}
