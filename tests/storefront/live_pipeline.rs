//! Integration tests for the debounced live-search pipeline.
//!
//! Tests cover:
//! - Only settled queries reaching the search worker
//! - Short queries producing an inactive outcome
//! - Worker shutdown when the controller is dropped

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};

use shopup::catalog::Catalog;
use shopup::search::{CategoryFilter, DebouncedQuery, SearchOutcome, SearchPolicy, spawn_search_worker};

#[tokio::test(start_paused = true)]
/// What: Typing "a", "ap", "app" 100 ms apart produces a single search for "app".
///
/// Inputs:
/// - Default 300 ms debounce, dropdown policy, built-in catalog.
///
/// Output:
/// - One result set for "app"; nothing for the intermediate prefixes.
async fn integration_only_final_keystroke_is_searched() {
    let catalog = Arc::new(Catalog::builtin().expect("builtin catalog"));
    let mut query = DebouncedQuery::new("");
    let (tx, mut rx) = mpsc::unbounded_channel();
    let worker = spawn_search_worker(
        query.subscribe(),
        tx,
        Arc::clone(&catalog),
        SearchPolicy::default(),
        CategoryFilter::All,
    );

    query.update("a");
    sleep(Duration::from_millis(100)).await;
    query.update("ap");
    sleep(Duration::from_millis(100)).await;
    query.update("app");
    sleep(Duration::from_millis(200)).await;
    assert!(rx.try_recv().is_err(), "nothing may settle inside the window");

    sleep(Duration::from_millis(200)).await;
    let res = rx.try_recv().expect("settled result");
    assert_eq!(res.query, "app");
    let names: Vec<&str> = res.outcome.items().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Fresh Green Apples"]);

    sleep(Duration::from_secs(5)).await;
    assert!(rx.try_recv().is_err(), "exactly one emission");

    drop(query);
    worker.await.expect("worker joins");
}

#[tokio::test(start_paused = true)]
/// What: A one-character settled query is reported as inactive, not as zero results.
async fn integration_short_query_inactive() {
    let catalog = Arc::new(Catalog::builtin().expect("builtin catalog"));
    let mut query = DebouncedQuery::new("");
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _worker = spawn_search_worker(
        query.subscribe(),
        tx,
        catalog,
        SearchPolicy::default(),
        CategoryFilter::All,
    );
    query.update("m");
    let res = rx.recv().await.expect("result");
    assert_eq!(res.outcome, SearchOutcome::Inactive);
}

#[tokio::test(start_paused = true)]
/// What: Tearing down mid-typing means the worker never sees the pending query.
async fn integration_teardown_mid_typing() {
    let catalog = Arc::new(Catalog::builtin().expect("builtin catalog"));
    let mut query = DebouncedQuery::new("");
    let (tx, mut rx) = mpsc::unbounded_channel();
    let worker = spawn_search_worker(
        query.subscribe(),
        tx,
        catalog,
        SearchPolicy::listing(),
        CategoryFilter::All,
    );
    query.update("soap");
    sleep(Duration::from_millis(100)).await;
    query.teardown();
    drop(query);
    worker.await.expect("worker joins");
    assert!(rx.recv().await.is_none());
}
