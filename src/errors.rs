//! Error taxonomy for a migration run
//!
//! Every fatal condition ends up as a [`MigrationError`] and is only handled at
//! the outermost boundary ([`crate::commands::run`]).

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("{0}")]
    Configuration(String),

    #[error("cannot access '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' would be copied onto itself", .path.display())]
    SameFile { path: PathBuf },

    #[error("'{command}' failed with {status}")]
    Process { command: String, status: ExitStatus },

    #[error("cannot run '{command}'")]
    ProcessLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("migration interrupted after copying {copied} files")]
    Interrupted { copied: usize },

    #[error("migration aborted after copying {copied} files")]
    Aborted {
        copied: usize,
        #[source]
        source: Box<MigrationError>,
    },

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl MigrationError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MigrationError::Io {
            path: path.into(),
            source,
        }
    }

    /// Number of files already copied when the run stopped, if it got that far.
    pub fn copied(&self) -> Option<usize> {
        match self {
            MigrationError::Interrupted { copied } | MigrationError::Aborted { copied, .. } => {
                Some(*copied)
            }
            _ => None,
        }
    }
}

pub type MigrationResult<T> = Result<T, MigrationError>;
