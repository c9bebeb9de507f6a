use crate::areas::initializer::RepositoryInitializer;
use crate::artifacts::report::MigrationReporter;
use crate::errors::MigrationResult;
use std::path::Path;
use tracing::debug;

/// Initialize a CVS repository at `destination_root` unless one is already there.
///
/// Returns whether the initializer was run.
pub fn initialize_destination_if_needed(
    destination_root: &Path,
    initializer: &dyn RepositoryInitializer,
    reporter: &dyn MigrationReporter,
) -> MigrationResult<bool> {
    if initializer.is_initialized(destination_root) {
        debug!(
            destination = %destination_root.display(),
            "CVS repository already initialized"
        );
        return Ok(false);
    }

    initializer.initialize(destination_root)?;
    reporter.on_initialized(destination_root);

    Ok(true)
}
