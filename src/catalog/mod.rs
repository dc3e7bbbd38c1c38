//! Product catalog: records, the built-in data set, and read-only lookups.
//!
//! The catalog is loaded once at startup and never mutated afterwards. Search,
//! the listing page and the wishlist page all borrow it.

use std::collections::HashSet;
use std::path::Path;

mod types;

pub use types::{Category, Product};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Built-in catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Number of products shown in the featured strip on the home page.
pub const FEATURED_COUNT: usize = 8;

/// Number of discounted products shown in the deals strip.
pub const DEALS_COUNT: usize = 4;

/// Number of other products suggested on a product details page.
pub const RELATED_COUNT: usize = 4;

/// What: Static, read-only product catalog.
///
/// Details:
/// - Product order is the order of the source data and is preserved by every lookup.
/// - Product identifiers are unique; loading rejects duplicates.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    /// Browsable categories, in display order.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// All products, in display order.
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// What: Build a catalog from in-memory parts.
    ///
    /// Inputs:
    /// - `categories`: Category records
    /// - `products`: Product records
    ///
    /// Output:
    /// - Catalog holding both lists as given.
    ///
    /// Details:
    /// - Does not validate identifier uniqueness; intended for tests and callers that
    ///   already own validated data.
    #[must_use]
    pub const fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// What: Parse the catalog embedded in the binary.
    ///
    /// Output:
    /// - The built-in catalog, or the parse error if the embedded data is broken.
    ///
    /// # Errors
    /// - Returns an error if the embedded JSON is malformed or contains duplicate ids.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// What: Parse a catalog from a JSON document.
    ///
    /// Inputs:
    /// - `json`: Document with `categories` and `products` arrays
    ///
    /// Output:
    /// - Parsed catalog.
    ///
    /// # Errors
    /// - Returns an error on malformed JSON or when two products share an identifier.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.ensure_unique_ids()?;
        tracing::debug!(
            categories = catalog.categories.len(),
            products = catalog.products.len(),
            "[Catalog] Parsed catalog"
        );
        Ok(catalog)
    }

    /// What: Load a catalog from a JSON file on disk.
    ///
    /// Inputs:
    /// - `path`: File to read
    ///
    /// Output:
    /// - Parsed catalog.
    ///
    /// # Errors
    /// - Returns an error if the file cannot be read or its content is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "[Catalog] Loading catalog from file");
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn ensure_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.products.len());
        for p in &self.products {
            if !seen.insert(p.id.as_str()) {
                return Err(format!("duplicate product id in catalog: {}", p.id).into());
            }
        }
        Ok(())
    }

    /// Look up a product by identifier.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a category by identifier.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// All products in the given category, in catalog order.
    #[must_use]
    pub fn by_category(&self, category_id: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category_id)
            .collect()
    }

    /// The first [`FEATURED_COUNT`] products.
    #[must_use]
    pub fn featured(&self) -> &[Product] {
        let end = self.products.len().min(FEATURED_COUNT);
        &self.products[..end]
    }

    /// What: Discounted products for the deals strip.
    ///
    /// Output:
    /// - Up to [`DEALS_COUNT`] products with a non-zero discount, in catalog order.
    #[must_use]
    pub fn deals(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.discount.is_some_and(|d| d > 0))
            .take(DEALS_COUNT)
            .collect()
    }

    /// What: Suggestions shown alongside a product.
    ///
    /// Inputs:
    /// - `id`: Identifier of the product being viewed (need not exist)
    ///
    /// Output:
    /// - Up to [`RELATED_COUNT`] other products, in catalog order.
    #[must_use]
    pub fn related(&self, id: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.id != id)
            .take(RELATED_COUNT)
            .collect()
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
