//! The storefront session: the command surface UI handlers call.
//!
//! Constructed once at page start and passed by reference to event
//! handlers. It owns the cart store, the display-mode controller, the
//! catalog, and the merchant config, and drives the deferred
//! post-checkout clear through an explicit [`ClearTask`].

use std::path::Path;
use std::time::Instant;

use hebe_cart::checkout::CLEAR_DELAY;
use hebe_cart::{
    CartStorage, CartStore, CartView, ClearTask, DisplayModeController, FileBackend,
    StorageBackend,
};
use hebe_core::ProductId;
use url::Url;

use crate::catalog::Catalog;
use crate::config::MerchantConfig;
use crate::links::{self, LinkError};

/// One shopper's session over the storefront.
pub struct StorefrontSession<B: StorageBackend> {
    config: MerchantConfig,
    catalog: Catalog,
    cart: CartStore<B>,
    display: DisplayModeController<B>,
    pending_clear: Option<ClearTask>,
}

impl StorefrontSession<FileBackend> {
    /// Open a session persisting under `data_dir`.
    ///
    /// Cart and display flag live under the same directory (disjoint
    /// keys); a fresh directory starts an empty, restored cart.
    #[must_use]
    pub fn open(config: MerchantConfig, catalog: Catalog, data_dir: &Path) -> Self {
        Self::with_storage(
            config,
            catalog,
            CartStorage::new(FileBackend::new(data_dir)),
            CartStorage::new(FileBackend::new(data_dir)),
        )
    }
}

impl<B: StorageBackend> StorefrontSession<B> {
    /// Open a session over explicit storage adapters (tests use memory
    /// backends here).
    pub fn with_storage(
        config: MerchantConfig,
        catalog: Catalog,
        cart_storage: CartStorage<B>,
        display_storage: CartStorage<B>,
    ) -> Self {
        tracing::info!(brand = %config.brand, "opening storefront session");
        Self {
            config,
            catalog,
            cart: CartStore::open(cart_storage),
            display: DisplayModeController::open(display_storage),
            pending_clear: None,
        }
    }

    /// The merchant configuration.
    #[must_use]
    pub const fn config(&self) -> &MerchantConfig {
        &self.config
    }

    /// The product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart store (for derived totals and subscriptions).
    pub fn cart_mut(&mut self) -> &mut CartStore<B> {
        &mut self.cart
    }

    /// Render the current cart view.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        self.cart.view()
    }

    // -------------------------------------------------------------------------
    // Cart commands
    // -------------------------------------------------------------------------

    /// Add a catalog product to the cart by id.
    ///
    /// Returns `false` (a no-op) when the id is not in the catalog; a
    /// stale button must not corrupt or crash the cart.
    pub fn add_to_cart(&mut self, id: ProductId, qty: u32) -> bool {
        let Some(product) = self.catalog.find(id) else {
            tracing::warn!(%id, "add ignored: product not in catalog");
            return false;
        };
        self.cart.add_item(product, qty);
        true
    }

    /// Set an absolute line quantity; `<= 0` removes the line.
    pub fn set_quantity(&mut self, id: ProductId, qty: i64) {
        self.cart.set_quantity(id, qty);
    }

    /// Remove a line (idempotent).
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.remove_item(id);
    }

    /// Empty the cart immediately.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Toggle the cart panel between minimized and restored.
    pub fn toggle_minimized(&mut self) -> bool {
        self.display.toggle()
    }

    /// Whether the cart panel is minimized.
    #[must_use]
    pub const fn is_minimized(&self) -> bool {
        self.display.is_minimized()
    }

    // -------------------------------------------------------------------------
    // Checkout hand-off
    // -------------------------------------------------------------------------

    /// Build the WhatsApp hand-off link for the current cart and schedule
    /// the deferred clear.
    ///
    /// The clear fires [`CLEAR_DELAY`] later regardless of whether the
    /// link was ever opened, and - matching the original storefront -
    /// regardless of items added in the meantime, unless
    /// [`cancel_pending_clear`](Self::cancel_pending_clear) is called
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured phone number does not form a
    /// valid URL.
    pub fn checkout(&mut self) -> Result<Url, LinkError> {
        let url = links::checkout_link(&self.config, self.cart.lines())?;
        self.pending_clear = Some(ClearTask::schedule(CLEAR_DELAY));
        Ok(url)
    }

    /// Call off a scheduled post-checkout clear, if one is pending.
    pub fn cancel_pending_clear(&mut self) {
        if let Some(task) = self.pending_clear.as_mut() {
            task.cancel();
        }
        self.pending_clear = None;
    }

    /// Drive deferred work: fires the post-checkout clear once due.
    ///
    /// Returns `true` if the cart was cleared on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self.pending_clear.is_some_and(|task| task.is_due(now));
        if due {
            self.pending_clear = None;
            self.cart.clear();
        }
        due
    }
}
