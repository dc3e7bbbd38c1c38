//! Root composition: builds the catalog, settings and wishlist once and hands
//! them to whoever needs them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::time::Duration;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::search::{DebouncedQuery, SearchPolicy};
use crate::wishlist::{FileStorage, WishlistStore};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Application-wide state owned by the entry point.
///
/// Details:
/// - The catalog is shared read-only (`Arc`) so search workers can hold it.
/// - The wishlist is owned here and lent out by `&mut`; there is no global instance.
#[derive(Debug)]
pub struct App {
    /// Resolved configuration directory.
    pub config_dir: PathBuf,
    /// Settings loaded from `settings.conf`.
    pub settings: Settings,
    /// Read-only product catalog.
    pub catalog: Arc<Catalog>,
    /// Persisted wishlist.
    pub wishlist: WishlistStore<FileStorage>,
}

impl App {
    /// What: Build the application state.
    ///
    /// Inputs:
    /// - `config_dir_override`: Directory from `--config-dir`, if any
    /// - `catalog_path`: External catalog JSON from `--catalog`, if any
    ///
    /// Output:
    /// - Initialized application state.
    ///
    /// # Errors
    /// - Returns an error if the catalog cannot be loaded or parsed.
    ///
    /// Details:
    /// - Settings and wishlist never fail to load; they fall back to defaults / empty.
    pub fn init(config_dir_override: Option<&Path>, catalog_path: Option<&Path>) -> Result<Self> {
        let config_dir = crate::paths::config_dir(config_dir_override);
        let settings = Settings::load(&crate::paths::settings_path(&config_dir));
        Self::with_settings(config_dir, settings, catalog_path)
    }

    /// What: Build the application state from already-resolved settings.
    ///
    /// # Errors
    /// - Returns an error if the catalog cannot be loaded or parsed.
    pub fn with_settings(
        config_dir: PathBuf,
        settings: Settings,
        catalog_path: Option<&Path>,
    ) -> Result<Self> {
        let catalog = match catalog_path {
            Some(p) => Catalog::load(p)?,
            None => Catalog::builtin()?,
        };
        let storage = FileStorage::new(settings.storage_dir_or_default(&config_dir));
        let wishlist = WishlistStore::load_with_key(storage, settings.wishlist_key.clone());
        tracing::info!(
            config_dir = %config_dir.display(),
            products = catalog.len(),
            wishlist = wishlist.count(),
            "[App] Initialized"
        );
        Ok(Self {
            config_dir,
            settings,
            catalog: Arc::new(catalog),
            wishlist,
        })
    }

    /// A debounced query controller using the configured quiet period.
    #[must_use]
    pub fn debounced_query(&self, initial: &str) -> DebouncedQuery {
        DebouncedQuery::with_delay(initial, Duration::from_millis(self.settings.debounce_ms))
    }

    /// The header dropdown policy from settings.
    #[must_use]
    pub const fn dropdown_policy(&self) -> SearchPolicy {
        self.settings.dropdown_policy()
    }
}
