//! Observation of a migration run
//!
//! - `reporter`: The `MigrationReporter` observer and its stock implementations
//! - `summary`: Totals reported once a run completes

pub mod reporter;
pub mod summary;

pub use reporter::{MigrationReporter, SilentReporter, TracingReporter};
pub use summary::MigrationSummary;
