//! The canonical cart store.
//!
//! A [`CartStore`] is constructed once per page session, seeded from
//! persistent storage, and passed by reference to UI event handlers.
//! Every mutation is one synchronous transaction: mutate the collection,
//! persist it, notify subscribers with the freshly rendered view. There is
//! no suspension inside a mutation and no reentrancy.

use hebe_core::{Price, Product, ProductId};

use crate::line::{self, CartLine};
use crate::storage::{CartStorage, StorageBackend};
use crate::view::CartView;

/// Subscriber invoked with the rendered view after every mutation.
type ViewListener = Box<dyn FnMut(&CartView)>;

/// Owns the in-memory cart and keeps storage and subscribers in sync.
pub struct CartStore<B: StorageBackend> {
    lines: Vec<CartLine>,
    storage: CartStorage<B>,
    listeners: Vec<ViewListener>,
}

impl<B: StorageBackend> CartStore<B> {
    /// Open the store, loading any persisted cart.
    ///
    /// A missing or corrupt persisted cart loads as empty; opening never
    /// fails.
    pub fn open(storage: CartStorage<B>) -> Self {
        let lines = storage.load_cart();
        if !lines.is_empty() {
            tracing::info!("restored cart with {} line(s)", lines.len());
        }
        Self {
            lines,
            storage,
            listeners: Vec::new(),
        }
    }

    /// Subscribe to view updates.
    ///
    /// The listener is called immediately with the current view (the
    /// startup render), then after every mutation.
    pub fn subscribe(&mut self, mut listener: impl FnMut(&CartView) + 'static) {
        listener(&self.view());
        self.listeners.push(Box::new(listener));
    }

    /// The current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Render the current state.
    #[must_use]
    pub fn view(&self) -> CartView {
        CartView::render(&self.lines)
    }

    /// Add `qty` of a product, merging into an existing line for the same
    /// id rather than appending a duplicate.
    ///
    /// A zero `qty` is treated as 1 (the "Add" button default). Merging
    /// does not move the line; new products append at the end.
    pub fn add_item(&mut self, product: &Product, qty: u32) {
        let qty = if qty == 0 { 1 } else { qty };
        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == product.id) {
            existing.qty = existing.qty.saturating_add(qty);
        } else {
            self.lines.push(CartLine::from_product(product, qty));
        }
        self.commit();
    }

    /// Set a line's quantity to an absolute value.
    ///
    /// No line with that id: no-op. `qty <= 0`: removes the line, so a
    /// quantity below 1 never persists. Otherwise the quantity is set
    /// (not added).
    pub fn set_quantity(&mut self, id: ProductId, qty: i64) {
        if !self.lines.iter().any(|l| l.id == id) {
            return;
        }
        if qty <= 0 {
            self.remove_item(id);
            return;
        }
        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == id) {
            existing.qty = u32::try_from(qty).unwrap_or(u32::MAX);
        }
        self.commit();
    }

    /// Remove any line with the given id.
    ///
    /// Idempotent: removing an absent id still persists and re-renders,
    /// and the resulting cart is unchanged.
    pub fn remove_item(&mut self, id: ProductId) {
        self.lines.retain(|l| l.id != id);
        self.commit();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.commit();
    }

    /// Grand total, recomputed from the lines on every call.
    #[must_use]
    pub fn total(&self) -> Price {
        line::total(&self.lines)
    }

    /// Sum of all line quantities (the badge count), recomputed on every
    /// call.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        line::total_quantity(&self.lines)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    // Persist then notify; the tail of every mutation.
    fn commit(&mut self) {
        self.storage.save_cart(&self.lines);
        let view = CartView::render(&self.lines);
        for listener in &mut self.listeners {
            listener(&view);
        }
    }
}
