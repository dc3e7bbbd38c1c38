//! Integration tests for catalog search over the built-in catalog.
//!
//! Tests cover:
//! - Query matching across name, category and description
//! - Category filtering as a subset of unfiltered results
//! - Dropdown versus listing policies

use shopup::catalog::Catalog;
use shopup::search::{CategoryFilter, SearchOutcome, SearchPolicy, search};

fn ids(items: &[&shopup::catalog::Product]) -> Vec<String> {
    items.iter().map(|p| p.id.clone()).collect()
}

#[test]
/// What: "fresh" matches names and descriptions (including "refreshing") in catalog order.
///
/// Inputs:
/// - Built-in catalog, query "fresh" under "all" and "dairy-bakery".
///
/// Output:
/// - All matches, then the dairy subset; an unmatched query returns nothing.
fn integration_fresh_over_builtin_catalog() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let all = search(&catalog.products, "fresh", &CategoryFilter::All, None);
    assert_eq!(ids(&all), vec!["1", "2", "3", "5", "6", "9", "10"]);

    let dairy = search(
        &catalog.products,
        "Fresh",
        &CategoryFilter::from_selector("dairy-bakery"),
        None,
    );
    assert_eq!(ids(&dairy), vec!["2", "3", "10"]);

    assert!(search(&catalog.products, "xyz123", &CategoryFilter::All, None).is_empty());
}

#[test]
/// What: A category name fragment matches through the category identifier.
fn integration_category_identifier_is_searchable() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let hits = search(&catalog.products, "baby", &CategoryFilter::All, None);
    assert_eq!(ids(&hits), vec!["12"]);
    let hits = search(&catalog.products, "personal-care", &CategoryFilter::All, None);
    assert_eq!(ids(&hits), vec!["8"]);
}

#[test]
/// What: Category results never include products outside the unfiltered result set.
fn integration_category_results_subset() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    for category in &catalog.categories {
        for q in ["", "e", "fresh", "pack"] {
            let all = search(&catalog.products, q, &CategoryFilter::All, None);
            let only = search(
                &catalog.products,
                q,
                &CategoryFilter::Only(category.id.clone()),
                None,
            );
            for p in only {
                assert_eq!(p.category, category.id);
                assert!(all.iter().any(|a| a.id == p.id));
            }
        }
    }
}

#[test]
/// What: The listing policy shows the whole category for an empty query, while the
/// dropdown reports no active search.
fn integration_listing_versus_dropdown() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let filter = CategoryFilter::from_selector("fruits-vegetables");

    let listing = SearchPolicy::listing().run(&catalog.products, "", &filter);
    assert_eq!(listing.items().len(), 3);

    let dropdown = SearchPolicy::default().run(&catalog.products, "", &filter);
    assert_eq!(dropdown, SearchOutcome::Inactive);

    let dropdown = SearchPolicy::default().run(&catalog.products, "ap", &filter);
    let names: Vec<&str> = dropdown.items().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Fresh Green Apples"]);
}
