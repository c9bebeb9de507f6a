//! Command line entry point and the two migration steps
//!
//! - `config`: Command line arguments and the validated `MigrationConfig`
//! - `init`: Initialization of the destination CVS repository
//! - `convert`: Copying RCS history files into the flattened CVS layout
//!
//! [`run`] ties them together and is the only place errors are handled.

pub mod config;
pub mod convert;
pub mod init;

use crate::areas::initializer::CvsInitializer;
use crate::artifacts::report::TracingReporter;
use crate::errors::{MigrationError, MigrationResult};
use crate::logging;
use anyhow::Context;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use config::{Cli, MigrationConfig};
use convert::Migration;
use is_terminal::IsTerminal;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;

pub use convert::convert;
pub use init::initialize_destination_if_needed;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Run the command line tool with `args` (the first one being the program
/// name) and return the process exit code
pub fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            // help and version go to stdout and are not failures
            let _ = err.print();
            return if err.use_stderr() {
                EXIT_FAILURE
            } else {
                EXIT_SUCCESS
            };
        }
    };

    logging::init_logger(cli.verbose());

    let result = MigrationConfig::try_from(cli).and_then(|config| execute(&config));

    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(err) => {
            report_error(&err);
            EXIT_FAILURE
        }
    }
}

fn execute(config: &MigrationConfig) -> MigrationResult<usize> {
    let initializer = CvsInitializer::new(config.cvs_program().to_os_string());
    initialize_destination_if_needed(config.destination(), &initializer, &TracingReporter)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the signal handling runtime")?;

    runtime.block_on(convert_until_interrupted(
        config.source().to_path_buf(),
        config.destination().to_path_buf(),
    ))
}

/// Run the migration on a blocking worker and stop it at the next file once
/// Ctrl-C is pressed
async fn convert_until_interrupted(
    source: PathBuf,
    destination: PathBuf,
) -> MigrationResult<usize> {
    let cancelled = Arc::new(AtomicBool::new(false));
    let worker_cancelled = cancelled.clone();

    let mut worker = tokio::task::spawn_blocking(move || {
        Migration::new(&source, &destination, &TracingReporter)
            .with_cancellation(worker_cancelled)
            .run()
    });

    tokio::select! {
        result = &mut worker => result.context("migration worker failed")?,
        signal = tokio::signal::ctrl_c() => {
            match signal {
                Ok(()) => {
                    warn!("interrupt received, stopping after the current file");
                    cancelled.store(true, Ordering::SeqCst);
                }
                Err(err) => warn!("cannot listen for Ctrl-C: {err}"),
            }
            worker.await.context("migration worker failed")?
        }
    }
}

fn report_error(err: &MigrationError) {
    match err {
        MigrationError::Configuration(message) => {
            let _ = Cli::command()
                .error(clap::error::ErrorKind::ValueValidation, message)
                .print();
        }
        MigrationError::Interrupted { copied } => {
            warn!(copied, "migration interrupted by user, copied files are kept");
        }
        _ => print_error(err),
    }
}

fn print_error(err: &MigrationError) {
    colored::control::set_override(std::io::stderr().is_terminal());

    let mut lines = error_lines(err).into_iter();
    if let Some(message) = lines.next() {
        eprintln!("{} {message}", "error:".red().bold());
    }
    for cause in lines {
        eprintln!("{} {cause}", "caused by:".red());
    }
}

/// `err` followed by each of its sources, outermost first
fn error_lines(err: &dyn std::error::Error) -> Vec<String> {
    let mut lines = vec![err.to_string()];

    let mut source = err.source();
    while let Some(cause) = source {
        lines.push(cause.to_string());
        source = cause.source();
    }

    lines
}
