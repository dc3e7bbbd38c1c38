//! The wishlist store.

use std::collections::HashSet;

use super::storage::Storage;
use crate::catalog::{Catalog, Product};

/// Storage key the wishlist is persisted under.
pub const WISHLIST_STORAGE_KEY: &str = "shopup_wishlist";

/// What: Favorite product identifiers, written through to durable storage.
///
/// Inputs:
/// - A [`Storage`] backend, read once at construction.
///
/// Output:
/// - Membership, count and ordered identifiers for badge, card and wishlist-page readers.
///
/// Details:
/// - Identifiers are unique and kept in insertion order.
/// - Every mutating call serializes the whole list as a JSON array and writes it before
///   returning. Write failures are logged and otherwise ignored; the in-memory list
///   stays authoritative.
/// - Mutation requires `&mut self`, so there is one writer at a time. Share it behind a
///   mutex if several threads need to mutate it.
#[derive(Debug)]
pub struct WishlistStore<S: Storage> {
    ids: Vec<String>,
    key: String,
    storage: S,
}

impl<S: Storage> WishlistStore<S> {
    /// Load the wishlist stored under [`WISHLIST_STORAGE_KEY`].
    #[must_use]
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, WISHLIST_STORAGE_KEY)
    }

    /// What: Load the wishlist stored under a custom key.
    ///
    /// Inputs:
    /// - `storage`: Backend to read from and write through to
    /// - `key`: Storage key
    ///
    /// Output:
    /// - Store holding the persisted identifiers, or an empty store when the entry is
    ///   absent, unreadable, or not a JSON array of strings.
    ///
    /// Details:
    /// - Duplicate identifiers in stored data collapse to their first occurrence.
    #[must_use]
    pub fn load_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let ids = match storage.read(&key) {
            Ok(Some(raw)) => parse_ids(&raw, &key),
            Ok(None) => {
                tracing::debug!(key = %key, "[Wishlist] No stored wishlist, starting empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "[Wishlist] Failed to read stored wishlist");
                Vec::new()
            }
        };
        tracing::debug!(key = %key, count = ids.len(), "[Wishlist] Loaded");
        Self { ids, key, storage }
    }

    /// What: Add a product if it is not already wishlisted.
    ///
    /// Output:
    /// - `true` when the identifier was inserted.
    pub fn add(&mut self, product_id: &str) -> bool {
        let changed = if self.contains(product_id) {
            false
        } else {
            self.ids.push(product_id.to_string());
            true
        };
        self.persist();
        changed
    }

    /// What: Remove a product if it is wishlisted.
    ///
    /// Output:
    /// - `true` when the identifier was present.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|id| id != product_id);
        let changed = self.ids.len() != before;
        self.persist();
        changed
    }

    /// What: Remove the product if present, otherwise add it.
    ///
    /// Output:
    /// - Membership after the call.
    pub fn toggle(&mut self, product_id: &str) -> bool {
        if self.contains(product_id) {
            self.remove(product_id);
            false
        } else {
            self.add(product_id);
            true
        }
    }

    /// Remove every identifier.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.persist();
    }

    /// Whether `product_id` is wishlisted.
    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.ids.iter().any(|id| id == product_id)
    }

    /// Number of wishlisted products.
    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Wishlisted identifiers in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// What: Resolve wishlisted identifiers against a catalog.
    ///
    /// Output:
    /// - Wishlisted products in catalog order; identifiers unknown to the catalog are skipped.
    #[must_use]
    pub fn products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog
            .products
            .iter()
            .filter(|p| self.contains(&p.id))
            .collect()
    }

    /// Storage key in use.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store, returning its storage backend.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        let s = match serde_json::to_string(&self.ids) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "[Wishlist] Failed to serialize wishlist");
                return;
            }
        };
        match self.storage.write(&self.key, &s) {
            Ok(()) => {
                tracing::trace!(
                    key = %self.key,
                    count = self.ids.len(),
                    bytes = s.len(),
                    "[Wishlist] Persisted"
                );
            }
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "[Wishlist] Failed to persist wishlist"
                );
            }
        }
    }
}

fn parse_ids(raw: &str, key: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(list) => {
            let mut seen = HashSet::with_capacity(list.len());
            list.into_iter()
                .filter(|id| seen.insert(id.clone()))
                .collect()
        }
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "[Wishlist] Stored wishlist is malformed, ignoring it");
            Vec::new()
        }
    }
}
