//! The product catalog.
//!
//! Loaded once from `products.json` at startup. Unlike cart storage, a
//! catalog failure is surfaced to the caller: the UI shows an explicit
//! "unable to load products" state instead of silently rendering an empty
//! grid. The cart keeps working against an empty or partial catalog.

use std::path::Path;

use hebe_core::{Product, ProductId};

/// Errors that can occur loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot read products file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse products file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The read-only product listing backing the grid, quick view, and cart
/// adds.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&raw)?;
        tracing::info!("loaded {} product(s) from {path:?}", products.len());
        Ok(Self { products })
    }

    /// Build a catalog from already-loaded products (tests, fixtures).
    #[must_use]
    pub const fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in listing order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Case-insensitive search over title and description.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.desc.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Products in a category; `"all"` returns everything.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        if category == "all" {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Number of listed products.
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
