#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/logscope/logscope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

/// LogScope CLI argument parsing.
///
/// The [`LogscopeCli`] struct provides the main interface for parsing command-line
/// arguments. It includes options for the search and sample endpoints, initial
/// search criteria, headless mode, and logging.
mod cli;
pub use cli::LogscopeCli;

/// Tracing initialization utilities.
///
/// The [`init_tracing`] function configures a stderr subscriber with a
/// verbosity-based log level and respects the `RUST_LOG` environment variable.
/// The [`init_file_tracing`] function does the same into a log file.
mod tracing_init;
pub use crate::tracing_init::{LOG_FILE_NAME, init_file_tracing, init_tracing, verbosity_level};
