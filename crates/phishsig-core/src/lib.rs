pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod model;
pub mod report;
pub mod url_model;

pub use error::FeatureError;
pub use features::{extract, FeatureKey, FeatureValue, FeatureVector, SCHEMA_VERSION};
pub use url_model::{parse, ParsedUrl};
