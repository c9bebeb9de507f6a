use crate::artifacts::history::SourceEntry;
use crate::errors::{MigrationError, MigrationResult};
use anyhow::Context;
use derive_new::new;
use std::io::ErrorKind;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Metadata directories of other version control tools, never descended into
const IGNORED_DIRS: [&str; 3] = [".svn", ".git", ".hg"];

/// The legacy RCS tree being migrated
#[derive(Debug, new)]
pub struct SourceTree {
    path: Box<Path>,
}

impl SourceTree {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walk the tree and yield every file, relative to the root.
    ///
    /// Entries of a directory are visited in file name order. Symbolic links
    /// to directories are not descended into, any other symbolic link is
    /// yielded like a regular file. Errors met while descending are yielded in
    /// place of the entries they hide.
    pub fn entries(
        &self,
    ) -> MigrationResult<impl Iterator<Item = MigrationResult<SourceEntry>> + '_> {
        let metadata =
            std::fs::metadata(&self.path).map_err(|err| MigrationError::io(self.path(), err))?;

        if !metadata.is_dir() {
            return Err(MigrationError::io(
                self.path(),
                std::io::Error::new(ErrorKind::NotFound, "source folder is not a directory"),
            ));
        }

        Ok(WalkDir::new(&self.path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry))
            .filter_map(move |entry| self.to_source_entry(entry).transpose()))
    }

    fn is_ignored(entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && IGNORED_DIRS
                .iter()
                .any(|ignored| entry.file_name() == *ignored)
    }

    /// Regular files and symbolic links that do not point to a directory.
    /// A dangling link counts as a file, so copying it reports the error.
    fn is_file_like(entry: &DirEntry) -> bool {
        entry.file_type().is_file() || (entry.path_is_symlink() && !entry.path().is_dir())
    }

    fn to_source_entry(
        &self,
        entry: Result<DirEntry, walkdir::Error>,
    ) -> MigrationResult<Option<SourceEntry>> {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.path.to_path_buf());
            MigrationError::io(path, err.into())
        })?;

        if !Self::is_file_like(&entry) {
            return Ok(None);
        }

        let relative_path = entry
            .path()
            .strip_prefix(&self.path)
            .with_context(|| format!("{:?} is outside of {:?}", entry.path(), self.path))?;

        Ok(Some(SourceEntry::new(relative_path.to_path_buf())))
    }
}
