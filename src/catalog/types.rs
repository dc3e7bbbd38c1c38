use serde::{Deserialize, Serialize};

/// What: A single purchasable product.
///
/// Details:
/// - Prices are whole rupees.
/// - `original_price` and `discount` are only present for products on offer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current selling price.
    pub price: u32,
    /// Pre-discount price, when the product is on offer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,
    /// Pack size label (e.g. "1 litre", "Pack of 50").
    pub unit: String,
    /// Category identifier this product belongs to.
    pub category: String,
    /// Free-text description.
    pub description: String,
    /// Advertised delivery time label.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub delivery_time: String,
    /// Discount percentage shown on the product card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
    /// Whether the product can currently be ordered.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Product image URL.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
}

const fn default_in_stock() -> bool {
    true
}

impl Product {
    /// What: Amount saved against the original price.
    ///
    /// Output:
    /// - `Some(original - price)` when an original price above the current price is set.
    #[must_use]
    pub fn savings(&self) -> Option<u32> {
        self.original_price
            .and_then(|orig| orig.checked_sub(self.price))
            .filter(|s| *s > 0)
    }
}

/// A browsable product category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier referenced by [`Product::category`].
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category tile image URL.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    /// Advertised number of items in the category.
    #[serde(default)]
    pub item_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: u32, original_price: Option<u32>) -> Product {
        Product {
            id: "1".into(),
            name: "Fresh Organic Bananas".into(),
            price,
            original_price,
            unit: "1 dozen".into(),
            category: "fruits-vegetables".into(),
            description: String::new(),
            delivery_time: "10 mins".into(),
            discount: None,
            in_stock: true,
            image: String::new(),
        }
    }

    #[test]
    fn savings_only_when_discounted() {
        assert_eq!(product(45, Some(55)).savings(), Some(10));
        assert_eq!(product(45, None).savings(), None);
        assert_eq!(product(45, Some(45)).savings(), None);
        assert_eq!(product(60, Some(55)).savings(), None);
    }
}
