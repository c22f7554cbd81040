//! One-shot search without the console.

use std::io::{self, Write};

use eyre::{Result, bail};
use logscope_cli::LogscopeCli;
use logscope_search::{HttpSearchClient, SearchClient, SearchController, SearchError, SearchState};
use logscope_tui_common::{project, render_plain};

/// Run the headless mode selected by `args` and print to stdout.
///
/// # Errors
///
/// Returns an error if the search or sample request fails; the user-facing
/// message has already been printed to stderr by then.
pub(crate) fn run(args: &LogscopeCli) -> Result<()> {
    let client = HttpSearchClient::new(args.client_config());
    let rt = tokio::runtime::Runtime::new()?;

    if args.sample {
        return rt.block_on(print_sample(&client));
    }

    let mut controller = SearchController::new();
    let state = rt.block_on(controller.run_search(&client, &args.criteria()));
    print_state(state)
}

/// Message shown when the sample request fails.
const SAMPLE_FAILED_MESSAGE: &str = "Failed to fetch sample. Please try again.";

/// User-facing text for a failed sample request.
///
/// The store's own error report is shown as sent; every other failure is
/// collapsed into [`SAMPLE_FAILED_MESSAGE`].
fn sample_failure_message(error: &SearchError) -> &str {
    match error {
        SearchError::Service(message) => message,
        _ => SAMPLE_FAILED_MESSAGE,
    }
}

/// Print the outcome of a finished search.
fn print_state(state: &SearchState) -> Result<()> {
    if let Some(message) = state.error_message() {
        eprintln!("{message}");
        bail!("search failed");
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(render_plain(&project(state)).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Fetch and print the store's raw sample lines.
async fn print_sample<C: SearchClient>(client: &C) -> Result<()> {
    let sample = match client.sample().await {
        Ok(sample) => sample,
        Err(e) => {
            tracing::warn!(error = %e, "sample request failed");
            eprintln!("{}", sample_failure_message(&e));
            bail!("sample request failed");
        }
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "# {}", sample.filename)?;
    for line in &sample.sample_lines {
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()?;
    Ok(())
}
