use derive_new::new;
use std::path::Path;
use std::path::PathBuf;

/// A regular file found under the source root, relative to that root
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, new)]
pub struct SourceEntry(PathBuf);

impl SourceEntry {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for SourceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
