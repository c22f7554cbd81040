use std::path::PathBuf;

use clap::Parser;
use logscope_search::{
    ClientConfig, DEFAULT_SAMPLE_ENDPOINT, DEFAULT_SEARCH_ENDPOINT, LogLevel, SearchCriteria,
};

/// LogScope CLI arguments.
///
/// By default the interactive console starts with the form prefilled from the
/// criteria flags. With `--headless`, one search is run with those criteria and
/// the results are printed to stdout.
#[derive(Parser, Debug, Clone)]
#[command(name = "logscope", about = "Search a remote log store from the terminal")]
#[command(version)]
pub struct LogscopeCli {
    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Search endpoint of the log store.
    #[arg(long, default_value = DEFAULT_SEARCH_ENDPOINT)]
    pub endpoint: String,

    /// Raw sample endpoint of the log store.
    #[arg(long, default_value = DEFAULT_SAMPLE_ENDPOINT)]
    pub sample_endpoint: String,

    /// Run one search without the interactive console and print the results.
    #[arg(long)]
    pub headless: bool,

    /// In headless mode, print raw sample lines from the store instead of searching.
    #[arg(long, requires = "headless")]
    pub sample: bool,

    /// Directory for the console's log file.
    #[arg(long, default_value = "./logs")]
    pub log_dir: PathBuf,

    /// Free-text query.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Level filter (info, error, or any other tag).
    #[arg(short, long)]
    pub level: Option<LogLevel>,

    /// Start of the time range, passed to the service as typed.
    #[arg(long)]
    pub start: Option<String>,

    /// End of the time range, passed to the service as typed.
    #[arg(long)]
    pub end: Option<String>,
}

impl LogscopeCli {
    /// Search criteria described by the flags.
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            query: self.query.clone(),
            level: self.level.clone(),
            start_time: self.start.clone(),
            end_time: self.end.clone(),
        }
    }

    /// Client configuration described by the flags.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::builder()
            .search_endpoint(self.endpoint.clone())
            .sample_endpoint(self.sample_endpoint.clone())
            .build()
    }
}
