use crate::areas::initializer::DEFAULT_CVS_PROGRAM;
use crate::errors::{MigrationError, MigrationResult};
use clap::Parser;
use derive_new::new;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "rcs4cvs",
    version,
    about = "Prepare an RCS project for processing with cvs2svn",
    long_about = "Copies every RCS history file (RCS/<name>,v) below SOURCE_FOLDER into the \
    flattened layout of the CVS repository DESTINATION_FOLDER, which is initialized with \
    'cvs init' if needed. The result can be converted with cvs2svn.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
pub struct Cli {
    #[arg(index = 1, value_name = "SOURCE_FOLDER", help = "Folder containing the RCS project")]
    source: PathBuf,

    #[arg(
        index = 2,
        value_name = "DESTINATION_FOLDER",
        help = "CVS repository receiving the flattened history files"
    )]
    destination: PathBuf,

    #[arg(short, long, help = "Log all actions performed in console")]
    verbose: bool,

    #[arg(
        long = "cvs",
        value_name = "PROGRAM",
        env = "RCS4CVS_CVS",
        default_value = DEFAULT_CVS_PROGRAM,
        help = "CVS executable used to initialize the destination repository"
    )]
    cvs_program: OsString,
}

/// Validated settings of one migration run
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MigrationConfig {
    source: PathBuf,
    destination: PathBuf,
    verbose: bool,
    cvs_program: OsString,
}

impl MigrationConfig {
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn cvs_program(&self) -> &OsStr {
        &self.cvs_program
    }

    pub fn validate(self) -> MigrationResult<Self> {
        if self.source.as_os_str().is_empty() {
            return Err(MigrationError::Configuration(
                "SOURCE_FOLDER must not be empty".to_string(),
            ));
        }

        if self.destination.as_os_str().is_empty() {
            return Err(MigrationError::Configuration(
                "DESTINATION_FOLDER must not be empty".to_string(),
            ));
        }

        if self.cvs_program.is_empty() {
            return Err(MigrationError::Configuration(
                "the CVS program must not be empty".to_string(),
            ));
        }

        let source = resolve(&self.source)?;
        let destination = resolve(&self.destination)?;

        if source == destination {
            return Err(MigrationError::Configuration(format!(
                "SOURCE_FOLDER and DESTINATION_FOLDER must differ, both are '{}'",
                source.display()
            )));
        }

        if destination.starts_with(&source) {
            return Err(MigrationError::Configuration(format!(
                "DESTINATION_FOLDER '{}' must not be inside SOURCE_FOLDER '{}'",
                destination.display(),
                source.display()
            )));
        }

        Ok(self)
    }
}

/// Absolute form of `path`, with symbolic links resolved when it exists
fn resolve(path: &Path) -> MigrationResult<PathBuf> {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .map_err(|err| MigrationError::io(path, err))
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl TryFrom<Cli> for MigrationConfig {
    type Error = MigrationError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        MigrationConfig::new(cli.source, cli.destination, cli.verbose, cli.cvs_program).validate()
    }
}
