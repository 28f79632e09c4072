//! CLI command handlers, one per file.

mod batch;
mod completions;
mod extract;
mod predict;
mod schema;

pub use batch::run_batch;
pub use completions::{run_completions, run_manpage};
pub use extract::run_extract;
pub use predict::run_predict;
pub use schema::run_schema;
