use crate::areas::cvs_repository::CvsRepository;
use crate::errors::{MigrationError, MigrationResult};
use derive_new::new;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Default CVS executable
pub const DEFAULT_CVS_PROGRAM: &str = "cvs";

/// Creates the CVS repository a migration writes into
pub trait RepositoryInitializer: Send + Sync {
    fn is_initialized(&self, destination_root: &Path) -> bool {
        CvsRepository::new(destination_root.into()).is_initialized()
    }

    /// Initialize a repository at `destination_root`
    ///
    /// # Errors
    ///
    /// Returns a process error when the initialization tool cannot be started
    /// or exits unsuccessfully.
    fn initialize(&self, destination_root: &Path) -> MigrationResult<()>;
}

/// Runs `<program> -d <absolute destination> init`
#[derive(Debug, Clone, new)]
pub struct CvsInitializer {
    program: OsString,
}

impl Default for CvsInitializer {
    fn default() -> Self {
        CvsInitializer::new(DEFAULT_CVS_PROGRAM.into())
    }
}

impl RepositoryInitializer for CvsInitializer {
    fn initialize(&self, destination_root: &Path) -> MigrationResult<()> {
        std::fs::create_dir_all(destination_root)
            .map_err(|err| MigrationError::io(destination_root, err))?;
        // cvs rejects relative repository paths
        let cvs_root = destination_root
            .canonicalize()
            .map_err(|err| MigrationError::io(destination_root, err))?;

        let command = format!(
            "{} -d {} init",
            self.program.to_string_lossy(),
            cvs_root.display()
        );
        debug!(%command, "initializing CVS repository");

        let status = Command::new(&self.program)
            .arg("-d")
            .arg(&cvs_root)
            .arg("init")
            .status()
            .map_err(|source| MigrationError::ProcessLaunch {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(MigrationError::Process { command, status });
        }

        Ok(())
    }
}
