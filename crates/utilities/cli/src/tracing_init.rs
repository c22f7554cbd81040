//! Tracing initialization utilities.

use std::{io, path::Path};

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// File that receives diagnostics while the console owns the terminal.
pub const LOG_FILE_NAME: &str = "logscope.log";

/// Map a `-v` count to a tracing level.
///
/// - 0: WARN
/// - 1: INFO
/// - 2: DEBUG
/// - 3+: TRACE
pub const fn verbosity_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::builder().with_default_directive(verbosity_level(verbosity).into()).from_env_lossy()
}

/// Initialize the tracing subscriber with the given verbosity level.
///
/// Output goes to stderr. The `RUST_LOG` environment variable can be used to
/// override the default filter.
///
/// # Examples
///
/// ```no_run
/// use logscope_cli::init_tracing;
///
/// init_tracing(1);
/// tracing::info!("headless search started");
/// ```
///
/// # Panics
///
/// This function will panic if a global tracing subscriber has already been set.
pub fn init_tracing(verbosity: u8) {
    tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .init();
}

/// Initialize the tracing subscriber to write into `dir`/[`LOG_FILE_NAME`].
///
/// Used by the interactive console, where stdout and stderr belong to the
/// terminal UI. The returned guard flushes the background writer on drop and
/// must be held until the program exits.
///
/// # Errors
///
/// Returns an error if `dir` cannot be created.
///
/// # Panics
///
/// This function will panic if a global tracing subscriber has already been set.
pub fn init_file_tracing(dir: &Path, verbosity: u8) -> io::Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(fmt::layer().with_ansi(false).with_target(true).with_writer(writer))
        .init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, Level::WARN)]
    #[case(1, Level::INFO)]
    #[case(2, Level::DEBUG)]
    #[case(3, Level::TRACE)]
    #[case(9, Level::TRACE)]
    fn verbosity_level_mapping(#[case] verbosity: u8, #[case] expected: Level) {
        assert_eq!(verbosity_level(verbosity), expected);
    }
}
