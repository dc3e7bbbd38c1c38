//! Case-insensitive substring search over catalog products with a category filter.

use std::fmt;
use std::str::FromStr;

use crate::catalog::Product;

/// Reserved category identifier meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// What: Category restriction applied alongside the text query.
///
/// Details:
/// - `All` corresponds to the `"all"` sentinel used by the category selector.
/// - `Only` compares the product's category identifier for exact equality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// No restriction.
    #[default]
    All,
    /// Only products whose category identifier equals the contained value.
    Only(String),
}

impl CategoryFilter {
    /// What: Build a filter from a selector value.
    ///
    /// Inputs:
    /// - `value`: Category identifier or the `"all"` sentinel (case-insensitive, trimmed)
    ///
    /// Output:
    /// - `All` for the sentinel or an empty value, `Only(value)` otherwise.
    #[must_use]
    pub fn from_selector(value: &str) -> Self {
        let v = value.trim();
        if v.is_empty() || v.eq_ignore_ascii_case(ALL_CATEGORIES) {
            Self::All
        } else {
            Self::Only(v.to_string())
        }
    }

    /// Whether `product` passes this filter.
    #[must_use]
    pub fn admits(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => product.category == *id,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selector(s))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Only(id) => f.write_str(id),
        }
    }
}

/// What: Normalize a raw query for matching.
///
/// Output:
/// - Trimmed, lower-cased query. Empty means "match everything".
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// What: Check whether a product matches an already-normalized query.
///
/// Inputs:
/// - `product`: Candidate product
/// - `needle`: Output of [`normalize_query`]
///
/// Output:
/// - `true` when `needle` is empty or is a substring of the lower-cased name,
///   category identifier, or description.
#[must_use]
pub fn matches_query(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

/// What: Compute the visible product subset for a settled query and category filter.
///
/// Inputs:
/// - `catalog`: Full product list, in display order
/// - `settled_query`: Debounced query text (may be empty)
/// - `filter`: Category restriction
/// - `limit`: Optional cap on the number of results
///
/// Output:
/// - Matching products in catalog order, truncated to `limit` when given.
///
/// Details:
/// - Query and category predicates are ANDed.
/// - Never fails: no matches or an empty catalog produce an empty vector.
#[must_use]
pub fn search<'a>(
    catalog: &'a [Product],
    settled_query: &str,
    filter: &CategoryFilter,
    limit: Option<usize>,
) -> Vec<&'a Product> {
    let needle = normalize_query(settled_query);
    let matches = catalog
        .iter()
        .filter(|p| filter.admits(p) && matches_query(p, &needle));
    let items: Vec<&Product> = match limit {
        Some(n) => matches.take(n).collect(),
        None => matches.collect(),
    };
    tracing::trace!(
        query = %needle,
        category = %filter,
        limit = ?limit,
        hits = items.len(),
        "[Search] Catalog scan finished"
    );
    items
}
