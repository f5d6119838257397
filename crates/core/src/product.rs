//! The catalog product record.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A product as listed in `products.json`.
///
/// The cart only ever snapshots `id`, `title`, `price`, and `img`; the
/// remaining fields exist for the product grid, quick view, and
/// search/category filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub img: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub lead_time: String,
    #[serde(default)]
    pub category: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_catalog_record() {
        let json = r#"{
            "id": 1,
            "title": "Teak Accent Chair",
            "price": 1500,
            "img": "images/chair.jpg",
            "desc": "Hand-finished teak frame.",
            "lead_time": "2-3 weeks",
            "category": "seating"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, Price::new(1500));
        assert_eq!(product.category, "seating");
    }

    #[test]
    fn test_optional_fields_default() {
        // A minimal record (the four fields the cart snapshots) still parses.
        let json = r#"{"id": 2, "title": "Lamp", "price": 800, "img": "x"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.desc.is_empty());
        assert!(product.category.is_empty());
    }
}
