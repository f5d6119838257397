//! Cart line items and derived totals.

use hebe_core::{Price, Product, ProductId};
use serde::{Deserialize, Serialize};

/// One product-id-keyed entry in the cart.
///
/// Carries a denormalized snapshot of the product at the time it was
/// added; later catalog edits do not retroactively change a cart. A cart
/// holds at most one line per distinct [`ProductId`], and `qty` is always
/// at least 1 while the line exists (driving it to zero removes the line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    pub img: String,
    pub qty: u32,
}

impl CartLine {
    /// Snapshot a catalog product into a new line.
    #[must_use]
    pub fn from_product(product: &Product, qty: u32) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            img: product.img.clone(),
            qty,
        }
    }

    /// The line subtotal (`price * qty`).
    #[must_use]
    pub const fn subtotal(&self) -> Price {
        self.price.times(self.qty)
    }
}

/// Grand total over all lines, recomputed on demand.
#[must_use]
pub fn total(lines: &[CartLine]) -> Price {
    lines.iter().map(CartLine::subtotal).sum()
}

/// Sum of all line quantities (the cart badge count).
#[must_use]
pub fn total_quantity(lines: &[CartLine]) -> u32 {
    lines.iter().fold(0_u32, |n, line| n.saturating_add(line.qty))
}
