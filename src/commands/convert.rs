use crate::areas::cvs_repository::CvsRepository;
use crate::areas::source_tree::SourceTree;
use crate::artifacts::history::RcsHistoryFile;
use crate::artifacts::report::{MigrationReporter, MigrationSummary};
use crate::errors::{MigrationError, MigrationResult};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// One pass copying every RCS history file of a source tree into its
/// flattened location in a CVS repository
pub struct Migration<'r> {
    source: SourceTree,
    destination: CvsRepository,
    reporter: &'r dyn MigrationReporter,
    cancelled: Arc<AtomicBool>,
}

impl<'r> Migration<'r> {
    pub fn new(
        source_root: &Path,
        destination_root: &Path,
        reporter: &'r dyn MigrationReporter,
    ) -> Self {
        Migration {
            source: SourceTree::new(source_root.into()),
            destination: CvsRepository::new(destination_root.into()),
            reporter,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Share a flag which, once set, stops the run before the next file
    pub fn with_cancellation(mut self, cancelled: Arc<AtomicBool>) -> Self {
        self.cancelled = cancelled;
        self
    }

    /// Run the migration and return the number of copied files.
    ///
    /// Files copied before a failure stay in place. Failures other than an
    /// interruption come back as [`MigrationError::Aborted`] carrying the number
    /// of files copied up to that point.
    pub fn run(&self) -> MigrationResult<usize> {
        let mut copied = 0;

        self.copy_history_files(&mut copied)
            .map_err(|err| match err {
                MigrationError::Interrupted { .. } => err,
                err => MigrationError::Aborted {
                    copied,
                    source: Box::new(err),
                },
            })?;

        self.reporter.on_summary(&MigrationSummary::new(
            copied,
            self.source.path().to_path_buf(),
            self.destination.path().to_path_buf(),
        ));

        Ok(copied)
    }

    fn copy_history_files(&self, copied: &mut usize) -> MigrationResult<()> {
        for entry in self.source.entries()? {
            if self.cancelled.load(Ordering::SeqCst) {
                return Err(MigrationError::Interrupted { copied: *copied });
            }

            let Some(history_file) = RcsHistoryFile::classify(entry?) else {
                continue;
            };

            let source = self.source.path().join(history_file.source());
            let written = self
                .destination
                .copy_history_file(&source, history_file.destination())?;

            self.reporter.on_copy(history_file.entry(), &written);
            *copied += 1;
        }

        Ok(())
    }
}

/// Copy all RCS history files below `source_root` into the CVS layout below
/// `destination_root` and return how many were copied
pub fn convert(
    source_root: &Path,
    destination_root: &Path,
    reporter: &dyn MigrationReporter,
) -> MigrationResult<usize> {
    Migration::new(source_root, destination_root, reporter).run()
}
