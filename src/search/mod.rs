//! Product search: debounced query input, the catalog filter engine, and the
//! live-search pipeline that joins them.
//!
//! Keystrokes go into a [`DebouncedQuery`]; each settled value is handed to the
//! engine under a [`SearchPolicy`] (header dropdown or listing page).

pub mod debounce;
pub mod engine;
pub mod live;

pub use debounce::{DEBOUNCE_MS, DebouncedQuery};
pub use engine::{ALL_CATEGORIES, CategoryFilter, matches_query, normalize_query, search};
pub use live::{
    DROPDOWN_LIMIT, DROPDOWN_MIN_CHARS, SearchOutcome, SearchPolicy, SearchResults,
    results_summary, spawn_search_worker,
};
