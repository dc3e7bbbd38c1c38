//! Live search pipeline: settled queries in, search results out.

use std::sync::Arc;

use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};

use super::engine::{CategoryFilter, search};
use crate::catalog::{Catalog, Product};

/// Minimum settled query length before the header dropdown runs a search.
pub const DROPDOWN_MIN_CHARS: usize = 2;
/// Default number of products previewed in the header dropdown.
pub const DROPDOWN_LIMIT: usize = 5;

/// What: How a consumer runs the search engine.
///
/// Details:
/// - The header dropdown requires a minimum query length and caps results.
/// - The listing page runs unconditionally and shows every match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Queries shorter than this (trimmed, in chars) do not search at all.
    pub min_chars: usize,
    /// Optional result cap.
    pub limit: Option<usize>,
}

impl SearchPolicy {
    /// Policy for the header live-search dropdown.
    #[must_use]
    pub const fn dropdown(min_chars: usize, limit: usize) -> Self {
        Self {
            min_chars,
            limit: Some(limit),
        }
    }

    /// Policy for the full product listing page.
    #[must_use]
    pub const fn listing() -> Self {
        Self {
            min_chars: 0,
            limit: None,
        }
    }

    /// What: Apply the policy to a settled query.
    ///
    /// Inputs:
    /// - `products`: Catalog products in display order
    /// - `settled_query`: Debounced query
    /// - `filter`: Category restriction
    ///
    /// Output:
    /// - `Inactive` when the query is too short for this policy, otherwise the
    ///   (possibly empty) result list.
    #[must_use]
    pub fn run(
        &self,
        products: &[Product],
        settled_query: &str,
        filter: &CategoryFilter,
    ) -> SearchOutcome {
        if settled_query.trim().chars().count() < self.min_chars {
            return SearchOutcome::Inactive;
        }
        let items = search(products, settled_query, filter, self.limit)
            .into_iter()
            .cloned()
            .collect();
        SearchOutcome::Results(items)
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::dropdown(DROPDOWN_MIN_CHARS, DROPDOWN_LIMIT)
    }
}

/// Result of applying a [`SearchPolicy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// No search is active (query below the policy's minimum length).
    Inactive,
    /// Search ran; the list may be empty.
    Results(Vec<Product>),
}

impl SearchOutcome {
    /// Products to render; empty when inactive.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        match self {
            Self::Inactive => &[],
            Self::Results(items) => items,
        }
    }

    /// Whether a search ran.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Results(_))
    }
}

/// What: "N products found" line shown above the listing grid.
#[must_use]
pub fn results_summary(count: usize) -> String {
    if count == 1 {
        "1 product found".to_string()
    } else {
        format!("{count} products found")
    }
}

/// Results corresponding to one settled query.
#[derive(Clone, Debug)]
pub struct SearchResults {
    /// Monotonic sequence number of the emission that produced these results.
    pub id: u64,
    /// Settled query text the results were computed for.
    pub query: String,
    /// Outcome under the worker's policy.
    pub outcome: SearchOutcome,
}

/// What: Spawn the background worker that searches each settled query.
///
/// Inputs:
/// - `settled_rx`: Receiver from [`super::DebouncedQuery::subscribe`]
/// - `result_tx`: Channel sender for search results
/// - `catalog`: Shared read-only catalog
/// - `policy`: Dropdown or listing policy
/// - `filter`: Category restriction
///
/// Output:
/// - Handle of the spawned task.
///
/// Details:
/// - Debouncing already happened upstream, so every emission is searched.
/// - Exits when the controller is gone or the result receiver is dropped.
pub fn spawn_search_worker(
    mut settled_rx: watch::Receiver<String>,
    result_tx: mpsc::UnboundedSender<SearchResults>,
    catalog: Arc<Catalog>,
    policy: SearchPolicy,
    filter: CategoryFilter,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut next_id: u64 = 0;
        while settled_rx.changed().await.is_ok() {
            let query = settled_rx.borrow_and_update().clone();
            next_id += 1;
            let outcome = policy.run(&catalog.products, &query, &filter);
            tracing::debug!(
                id = next_id,
                query = %query,
                active = outcome.is_active(),
                hits = outcome.items().len(),
                "[Search] Worker produced results"
            );
            if result_tx
                .send(SearchResults {
                    id: next_id,
                    query,
                    outcome,
                })
                .is_err()
            {
                break;
            }
        }
        tracing::debug!("[Search] Worker stopped");
    })
}
