//! RCS history file classification and path flattening
//!
//! RCS keeps the history of `<project>/<name>` in `<project>/RCS/<name>,v`.
//! CVS expects the very same file at `<project>/<name>,v`, so flattening only
//! removes the `RCS` directory that directly contains the history file.

use crate::artifacts::history::source_entry::SourceEntry;
use std::path::{Path, PathBuf};

/// Name of the directory RCS stores history files in
pub const RCS_DIR_NAME: &str = "RCS";

/// Suffix every RCS history file name ends with
pub const HISTORY_FILE_SUFFIX: &str = ",v";

/// Check whether `path` names an RCS history file
///
/// True iff the file name ends with `,v` and its parent directory is named
/// exactly `RCS` (case-sensitive).
pub fn is_rcs_history_file(path: &Path) -> bool {
    let has_history_suffix = path
        .file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(HISTORY_FILE_SUFFIX.as_bytes()));

    let inside_rcs_dir = path
        .parent()
        .and_then(Path::file_name)
        .is_some_and(|dir_name| dir_name == RCS_DIR_NAME);

    has_history_suffix && inside_rcs_dir
}

/// A source entry proven to be an RCS history file, together with its
/// flattened destination
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RcsHistoryFile {
    entry: SourceEntry,
    destination: PathBuf,
}

impl RcsHistoryFile {
    /// Classify a source entry, returning `None` for anything that is not an
    /// RCS history file
    pub fn classify(entry: SourceEntry) -> Option<Self> {
        if !is_rcs_history_file(entry.path()) {
            return None;
        }

        let file_name = entry.path().file_name()?;
        let project_dir = entry.path().parent().and_then(Path::parent)?;
        let destination = project_dir.join(file_name);

        Some(RcsHistoryFile { entry, destination })
    }

    pub fn entry(&self) -> &SourceEntry {
        &self.entry
    }

    /// Path of the history file relative to the source root
    pub fn source(&self) -> &Path {
        self.entry.path()
    }

    /// Flattened path relative to the destination root
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}
