//! Wishlist management from the command line.

use shopup::app::App;
use shopup::catalog::Catalog;
use shopup::wishlist::{Storage, WishlistStore};

use super::definition::WishlistAction;
use super::format::product_line;

/// What: Apply one wishlist action and describe the result.
///
/// Inputs:
/// - `store`: Wishlist to read or mutate
/// - `catalog`: Catalog used to resolve and validate product ids
/// - `action`: Requested action
///
/// Output:
/// - Lines to print.
///
/// Details:
/// - Adding an id unknown to the catalog is allowed (catalogs can change between runs)
///   but reported.
pub fn apply_action<S: Storage>(
    store: &mut WishlistStore<S>,
    catalog: &Catalog,
    action: &WishlistAction,
) -> Vec<String> {
    let name_of = |id: &str| {
        catalog
            .product(id)
            .map_or_else(|| format!("unknown product {id}"), |p| p.name.clone())
    };
    match action {
        WishlistAction::List => {
            let products = store.products(catalog);
            if products.is_empty() {
                return vec!["Your wishlist is empty".to_string()];
            }
            let n = products.len();
            let mut lines = vec![format!(
                "{n} item{} saved",
                if n == 1 { "" } else { "s" }
            )];
            lines.extend(products.into_iter().map(product_line));
            lines
        }
        WishlistAction::Add { id } => {
            if catalog.product(id).is_none() {
                tracing::warn!(id = %id, "Adding product that is not in the catalog");
            }
            if store.add(id) {
                vec![format!("Added {} to wishlist", name_of(id))]
            } else {
                vec![format!("{} is already in your wishlist", name_of(id))]
            }
        }
        WishlistAction::Remove { id } => {
            if store.remove(id) {
                vec![format!("Removed {} from wishlist", name_of(id))]
            } else {
                vec![format!("{} was not in your wishlist", name_of(id))]
            }
        }
        WishlistAction::Toggle { id } => {
            if store.toggle(id) {
                vec![format!("Added {} to wishlist", name_of(id))]
            } else {
                vec![format!("Removed {} from wishlist", name_of(id))]
            }
        }
        WishlistAction::Count => vec![store.count().to_string()],
        WishlistAction::Clear => {
            store.clear();
            vec!["Wishlist cleared".to_string()]
        }
    }
}

/// Handle the `wishlist` command.
pub fn handle_wishlist(app: &mut App, action: &WishlistAction) {
    tracing::info!(action = ?action, "Wishlist command requested from CLI");
    for line in apply_action(&mut app.wishlist, &app.catalog, action) {
        println!("{line}");
    }
}
