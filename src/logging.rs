use is_terminal::IsTerminal;
use tracing::warn;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable overriding the log filter, e.g. `RCS4CVS_LOG=trace`
pub const LOG_FILTER_ENV: &str = "RCS4CVS_LOG";

/// Install the console logger: `info` by default, `debug` when verbose.
///
/// Installing it more than once is a no-op, so embedders calling
/// [`crate::run`] repeatedly keep the first configuration. An invalid
/// override is reported and replaced by the default filter.
pub fn init_logger(verbose: bool) {
    let directives = std::env::var(LOG_FILTER_ENV).ok();
    let (filter, rejected) = log_filter(directives.as_deref(), verbose);

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(filter)
        .try_init();

    if let (Some(directives), Some(err)) = (directives, rejected) {
        warn!(
            "ignoring invalid {LOG_FILTER_ENV}={directives:?} ({err}), using {:?}",
            default_directives(verbose)
        );
    }
}

fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("{}={level}", env!("CARGO_CRATE_NAME"))
}

fn log_filter(directives: Option<&str>, verbose: bool) -> (EnvFilter, Option<ParseError>) {
    match directives.map(EnvFilter::try_new) {
        Some(Ok(filter)) => (filter, None),
        Some(Err(err)) => (EnvFilter::new(default_directives(verbose)), Some(err)),
        None => (EnvFilter::new(default_directives(verbose)), None),
    }
}
