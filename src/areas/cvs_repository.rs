use crate::errors::{MigrationError, MigrationResult};
use derive_new::new;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Directory whose presence marks an initialized CVS repository
pub const CVSROOT_DIR_NAME: &str = "CVSROOT";

/// The CVS repository receiving flattened history files
#[derive(Debug, new)]
pub struct CvsRepository {
    path: Box<Path>,
}

impl CvsRepository {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_initialized(&self) -> bool {
        self.path.join(CVSROOT_DIR_NAME).is_dir()
    }

    /// Make sure `dir_path` (relative to the repository root) and all of its
    /// ancestors exist as directories.
    ///
    /// Succeeds whether or not the directories were already there. A path
    /// component occupied by anything other than a directory is an error.
    pub fn ensure_directory(&self, dir_path: &Path) -> MigrationResult<PathBuf> {
        let dir_path = self.path.join(dir_path);

        std::fs::create_dir_all(&dir_path).map_err(|err| MigrationError::io(&dir_path, err))?;

        Ok(dir_path)
    }

    /// Copy the bytes of `source` to `destination` (relative to the repository
    /// root), creating missing directories and truncating an existing file.
    ///
    /// Only content is copied: the new file gets the default permissions of
    /// the destination file system, never the (usually read-only) mode of the
    /// RCS history file. Refuses to write a file onto itself.
    pub fn copy_history_file(&self, source: &Path, destination: &Path) -> MigrationResult<PathBuf> {
        if let Some(parent) = destination.parent() {
            self.ensure_directory(parent)?;
        }
        let destination = self.path.join(destination);

        if is_same_file(source, &destination) {
            return Err(MigrationError::SameFile {
                path: source.to_path_buf(),
            });
        }

        let mut reader = File::open(source).map_err(|err| MigrationError::io(source, err))?;
        let mut writer =
            File::create(&destination).map_err(|err| MigrationError::io(&destination, err))?;

        std::io::copy(&mut reader, &mut writer)
            .map_err(|err| MigrationError::io(&destination, err))?;

        Ok(destination)
    }
}

/// Whether both paths exist and resolve to the same file
fn is_same_file(source: &Path, destination: &Path) -> bool {
    match (
        std::fs::canonicalize(source),
        std::fs::canonicalize(destination),
    ) {
        (Ok(source), Ok(destination)) => source == destination,
        _ => false,
    }
}
