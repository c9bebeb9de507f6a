use derive_new::new;
use std::path::PathBuf;

/// Totals of a completed migration run
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MigrationSummary {
    copied: usize,
    source_root: PathBuf,
    destination_root: PathBuf,
}

impl std::fmt::Display for MigrationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "migrated {} files from \"{}\" to \"{}\"",
            self.copied,
            self.source_root.display(),
            self.destination_root.display()
        )
    }
}
