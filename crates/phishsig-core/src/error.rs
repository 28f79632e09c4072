//! Typed errors surfaced by the feature engine and the schema join.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeatureError {
    /// The caller handed the engine something that is not a URL string
    /// (non-UTF-8 bytes, or a string over the caller-imposed length limit).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A consumer asked for a column the engine does not produce.
    #[error("schema mismatch: column `{column}` is not part of feature schema v{version}")]
    SchemaMismatch { column: String, version: u32 },
}

impl FeatureError {
    pub(crate) fn schema_mismatch(column: impl Into<String>) -> Self {
        FeatureError::SchemaMismatch {
            column: column.into(),
            version: crate::features::SCHEMA_VERSION,
        }
    }
}
