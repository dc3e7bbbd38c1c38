//! Catalog browsing commands.

use shopup::app::App;
use shopup::catalog::Catalog;

use super::format::{product_details, product_line};

/// What: Category listing lines with actual and advertised item counts.
pub fn category_lines(catalog: &Catalog) -> Vec<String> {
    catalog
        .categories
        .iter()
        .map(|c| {
            format!(
                "{:<20} {:<24} {:>3} in catalog ({}+ items)",
                c.id,
                c.name,
                catalog.by_category(&c.id).len(),
                c.item_count
            )
        })
        .collect()
}

/// Handle the `categories` command.
pub fn handle_categories(app: &App) {
    for line in category_lines(&app.catalog) {
        println!("{line}");
    }
}

/// What: Handle the `product` command.
///
/// Details:
/// - Marks wishlisted products with a heart line.
pub fn handle_product(app: &App, id: &str) {
    let Some(p) = app.catalog.product(id) else {
        tracing::warn!(id = %id, "Product not found");
        println!("Product {id} not found");
        return;
    };
    let category = app.catalog.category(&p.category).map(|c| c.name.as_str());
    println!("{}", product_details(p, category));
    if app.wishlist.contains(&p.id) {
        println!("  ♥ In your wishlist");
    }
    let related = app.catalog.related(&p.id);
    if !related.is_empty() {
        println!();
        println!("You may also like:");
        for r in related {
            println!("{}", product_line(r));
        }
    }
}

/// What: Lines for the `featured` command: the featured strip, then the deals strip.
pub fn featured_lines(catalog: &Catalog) -> Vec<String> {
    let mut lines: Vec<String> = catalog.featured().iter().map(product_line).collect();
    let deals = catalog.deals();
    if !deals.is_empty() {
        lines.push(String::new());
        lines.push("Deals:".to_string());
        lines.extend(deals.into_iter().map(product_line));
    }
    lines
}

/// Handle the `featured` command.
pub fn handle_featured(app: &App) {
    for line in featured_lines(&app.catalog) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_lines_count_catalog_products() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let lines = category_lines(&catalog);
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("fruits-vegetables"));
        assert!(lines[0].contains("  3 in catalog (120+ items)"));
    }

    #[test]
    /// What: Featured output lists eight products, then the four deals.
    fn featured_lines_append_deals() {
        let catalog = Catalog::builtin().expect("builtin catalog");
        let lines = featured_lines(&catalog);
        assert_eq!(lines.len(), 8 + 2 + 4);
        assert_eq!(lines[9], "Deals:");
        assert!(lines[13].contains("Dove Beauty Bar Soap"));
    }
}
