use crate::artifacts::history::SourceEntry;
use crate::artifacts::report::summary::MigrationSummary;
use std::path::Path;
use tracing::{debug, info};

/// Observer of a migration run.
///
/// The CLI reports through `tracing`, embedders may collect records or stay silent.
/// All methods have default no-op implementations.
pub trait MigrationReporter: Send + Sync {
    /// A CVS repository was created at `destination_root`
    fn on_initialized(&self, _destination_root: &Path) {}

    /// One history file was copied; `source` is relative to the source root,
    /// `destination` is the full path written to
    fn on_copy(&self, _source: &SourceEntry, _destination: &Path) {}

    fn on_summary(&self, _summary: &MigrationSummary) {}
}

/// Reporter for silent operation
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl MigrationReporter for SilentReporter {}

/// Reporter logging each copy at debug level and the summary at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl MigrationReporter for TracingReporter {
    fn on_initialized(&self, destination_root: &Path) {
        info!(
            destination = %destination_root.display(),
            "initialized CVS repository"
        );
    }

    fn on_copy(&self, source: &SourceEntry, destination: &Path) {
        debug!("copy \"{source}\" -> \"{}\"", destination.display());
    }

    fn on_summary(&self, summary: &MigrationSummary) {
        info!("{summary}");
    }
}
