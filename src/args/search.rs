//! Command-line search functionality.

use shopup::app::App;
use shopup::search::{CategoryFilter, SearchOutcome, SearchPolicy, results_summary};

use super::format::product_line;

/// What: Pick the policy for a one-shot command-line search.
///
/// Inputs:
/// - `app`: Application state providing the configured dropdown policy
/// - `limit`: Explicit `--limit`, overriding the policy's cap
/// - `dropdown`: Whether to apply the header dropdown rules
pub fn policy_for(app: &App, limit: Option<usize>, dropdown: bool) -> SearchPolicy {
    let mut policy = if dropdown {
        app.dropdown_policy()
    } else {
        SearchPolicy::listing()
    };
    if limit.is_some() {
        policy.limit = limit;
    }
    policy
}

/// What: Render a search outcome as output lines.
///
/// Output:
/// - A hint when inactive, "No products found" for zero hits, otherwise a summary
///   line followed by one line per product.
pub fn render_outcome(outcome: &SearchOutcome, min_chars: usize) -> Vec<String> {
    match outcome {
        SearchOutcome::Inactive => vec![format!("Type at least {min_chars} characters to search")],
        SearchOutcome::Results(items) if items.is_empty() => {
            vec!["No products found".to_string()]
        }
        SearchOutcome::Results(items) => {
            let mut lines = Vec::with_capacity(items.len() + 1);
            lines.push(results_summary(items.len()));
            lines.extend(items.iter().map(product_line));
            lines
        }
    }
}

/// What: Handle the `search` command.
///
/// Inputs:
/// - `app`: Application state
/// - `query`: Query text
/// - `category`: Category selector value
/// - `limit`: Optional result cap
/// - `dropdown`: Apply the header dropdown rules
///
/// Details:
/// - Runs once on the given text; no debouncing is involved.
pub fn handle_search(app: &App, query: &str, category: &str, limit: Option<usize>, dropdown: bool) {
    let filter = CategoryFilter::from_selector(category);
    if let CategoryFilter::Only(id) = &filter
        && app.catalog.category(id).is_none()
    {
        tracing::warn!(category = %id, "Unknown category requested from CLI");
    }
    let policy = policy_for(app, limit, dropdown);
    tracing::info!(query = %query, category = %filter, dropdown, "Search mode requested from CLI");
    let outcome = policy.run(&app.catalog.products, query, &filter);
    for line in render_outcome(&outcome, policy.min_chars) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopup::catalog::Catalog;

    #[test]
    fn render_distinguishes_inactive_empty_and_hits() {
        assert_eq!(
            render_outcome(&SearchOutcome::Inactive, 2),
            vec!["Type at least 2 characters to search"]
        );
        assert_eq!(
            render_outcome(&SearchOutcome::Results(Vec::new()), 2),
            vec!["No products found"]
        );
        let catalog = Catalog::builtin().expect("builtin catalog");
        let lines = render_outcome(&SearchOutcome::Results(catalog.products[..2].to_vec()), 2);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "2 products found");
        assert!(lines[1].contains("Fresh Organic Bananas"));
    }
}
