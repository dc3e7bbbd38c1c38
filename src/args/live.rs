//! Interactive live search: stdin lines stand in for keystrokes.

use tokio::{
    io::{AsyncBufReadExt, BufReader},
    select,
    sync::mpsc,
};

use shopup::app::App;
use shopup::search::{CategoryFilter, SearchResults, spawn_search_worker};

use super::search::render_outcome;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

fn print_results(res: &SearchResults, min_chars: usize) {
    println!("-- [{}] \"{}\"", res.id, res.query);
    for line in render_outcome(&res.outcome, min_chars) {
        println!("{line}");
    }
}

/// What: Handle the `live` command.
///
/// Inputs:
/// - `app`: Application state
/// - `category`: Category selector value
/// - `limit`: Optional override of the dropdown preview limit
///
/// Output:
/// - `Ok(())` once stdin is exhausted and the last settled query was printed.
///
/// # Errors
/// - Returns an error if reading stdin fails.
///
/// Details:
/// - Each stdin line replaces the raw query, like a keystroke in the header box.
/// - Only queries that survive the debounce window are searched and printed, so piped
///   input usually yields a single result for the last line.
pub async fn handle_live(app: &App, category: &str, limit: Option<usize>) -> Result<()> {
    let mut policy = app.dropdown_policy();
    if limit.is_some() {
        policy.limit = limit;
    }
    let filter = CategoryFilter::from_selector(category);
    tracing::info!(category = %filter, debounce_ms = app.settings.debounce_ms, "Live search started");

    let mut query = app.debounced_query("");
    let (result_tx, mut result_rx) = mpsc::unbounded_channel();
    let worker = spawn_search_worker(
        query.subscribe(),
        result_tx,
        app.catalog.clone(),
        policy,
        filter,
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        select! {
            line = lines.next_line() => match line? {
                Some(raw) => query.update(raw),
                None => break,
            },
            Some(res) = result_rx.recv() => print_results(&res, policy.min_chars),
        }
    }

    // Let the final keystroke settle before closing the pipeline.
    let last = query.settle().await;
    tracing::debug!(settled = %last, "Final query settled");
    drop(query);
    while let Some(res) = result_rx.recv().await {
        print_results(&res, policy.min_chars);
    }
    if let Err(e) = worker.await {
        tracing::warn!(error = %e, "Live search worker ended abnormally");
    }
    tracing::info!("Live search finished");
    Ok(())
}
