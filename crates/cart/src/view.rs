//! Cart display data, rendered as a pure function of cart state.
//!
//! The view model is headless: it describes line items, totals, and the
//! per-line affordances without assuming any UI toolkit. Rendering never
//! mutates the store.

use hebe_core::ProductId;

use crate::line::{self, CartLine};

/// Fixed message shown when the cart has no lines.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// A UI affordance on one cart line, tagged with that line's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    /// Increase the line quantity by one.
    Increment(ProductId),
    /// Decrease the line quantity by one (reaching zero removes).
    Decrement(ProductId),
    /// Remove the line outright.
    Remove(ProductId),
}

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: ProductId,
    pub title: String,
    pub qty: u32,
    /// Formatted unit price (`₹1,500`).
    pub unit_price: String,
    /// Formatted line subtotal (`₹3,000`).
    pub line_total: String,
}

impl CartLineView {
    /// The three interactive affordances for this line.
    #[must_use]
    pub const fn actions(&self) -> [LineAction; 3] {
        [
            LineAction::Increment(self.id),
            LineAction::Decrement(self.id),
            LineAction::Remove(self.id),
        ]
    }
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Badge count: sum of all line quantities.
    pub item_count: u32,
    /// Formatted grand total (`₹3,800`); `₹0` when empty, never absent.
    pub total: String,
    /// The fixed empty-state message, present only when there are no lines.
    pub empty_message: Option<&'static str>,
}

impl CartView {
    /// Render a view model from cart state.
    #[must_use]
    pub fn render(lines: &[CartLine]) -> Self {
        if lines.is_empty() {
            return Self::empty();
        }
        Self {
            lines: lines
                .iter()
                .map(|l| CartLineView {
                    id: l.id,
                    title: l.title.clone(),
                    qty: l.qty,
                    unit_price: l.price.to_string(),
                    line_total: l.subtotal().to_string(),
                })
                .collect(),
            item_count: line::total_quantity(lines),
            total: line::total(lines).to_string(),
            empty_message: None,
        }
    }

    /// The empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            item_count: 0,
            total: "₹0".to_owned(),
            empty_message: Some(EMPTY_CART_MESSAGE),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hebe_core::Price;

    use super::*;

    fn line(id: i64, title: &str, price: u64, qty: u32) -> CartLine {
        CartLine {
            id: ProductId::new(id),
            title: title.to_owned(),
            price: Price::new(price),
            img: "x".to_owned(),
            qty,
        }
    }

    #[test]
    fn test_empty_state_has_message_and_zero_total() {
        let view = CartView::render(&[]);
        assert!(view.lines.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.total, "₹0");
        assert_eq!(view.empty_message, Some(EMPTY_CART_MESSAGE));
    }

    #[test]
    fn test_renders_lines_with_formatted_amounts() {
        let view = CartView::render(&[line(1, "Chair", 1500, 2), line(2, "Lamp", 800, 1)]);

        assert_eq!(view.item_count, 3);
        assert_eq!(view.total, "₹3,800");
        assert_eq!(view.empty_message, None);

        let chair = view.lines.first().unwrap();
        assert_eq!(chair.unit_price, "₹1,500");
        assert_eq!(chair.line_total, "₹3,000");
        assert_eq!(chair.qty, 2);
    }

    #[test]
    fn test_line_actions_are_tagged_with_line_id() {
        let view = CartView::render(&[line(7, "Chair", 1500, 1)]);
        let actions = view.lines.first().unwrap().actions();
        assert_eq!(
            actions,
            [
                LineAction::Increment(ProductId::new(7)),
                LineAction::Decrement(ProductId::new(7)),
                LineAction::Remove(ProductId::new(7)),
            ]
        );
    }
}
