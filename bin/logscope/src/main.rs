//! LogScope: search a remote log store from the terminal.
//!
//! # Operating Modes
//!
//! - **Console** (default): interactive search form and results table
//! - **Headless** (`--headless`): run one search with the criteria flags and
//!   print the results
//! - **Sample** (`--headless --sample`): print raw sample lines from the store

mod headless;

use std::sync::Arc;

use clap::Parser;
use eyre::Result;
use logscope_cli::{LogscopeCli, init_file_tracing, init_tracing};
use logscope_search::HttpSearchClient;
use logscope_tui::{App, create_tui};

fn main() -> Result<()> {
    let args = LogscopeCli::parse();

    if args.headless {
        init_tracing(args.verbose);
        headless::run(&args)
    } else {
        run_console(&args)
    }
}

/// Run the interactive console until the user quits.
fn run_console(args: &LogscopeCli) -> Result<()> {
    let _guard = init_file_tracing(&args.log_dir, args.verbose)?;

    let config = args.client_config();
    let app = App::new(config.search_endpoint.clone()).with_criteria(args.criteria());
    let client = Arc::new(HttpSearchClient::new(config));

    let rt = tokio::runtime::Runtime::new()?;
    let (tui, _handle) = create_tui(app, client, rt.handle().clone());

    tracing::info!(endpoint = %args.endpoint, "console started");
    tui.run()?;
    tracing::info!("console closed");

    Ok(())
}
