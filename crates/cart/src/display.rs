//! The minimized/restored presentation flag for the cart panel.
//!
//! Purely presentational: independent of cart contents, never read by the
//! checkout message builder. Persisted on every change so the panel state
//! survives a reload.

use crate::storage::{CartStorage, StorageBackend};

/// Tracks and persists whether the cart panel is collapsed.
#[derive(Debug)]
pub struct DisplayModeController<B: StorageBackend> {
    minimized: bool,
    storage: CartStorage<B>,
}

impl<B: StorageBackend> DisplayModeController<B> {
    /// Open the controller, loading the persisted flag (`false` on
    /// absence or corruption).
    pub fn open(storage: CartStorage<B>) -> Self {
        let minimized = storage.load_minimized();
        Self { minimized, storage }
    }

    /// Whether the panel is currently minimized.
    #[must_use]
    pub const fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// Flip the flag, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.set(!self.minimized);
        self.minimized
    }

    /// Collapse the panel.
    pub fn minimize(&mut self) {
        self.set(true);
    }

    /// Expand the panel.
    pub fn restore(&mut self) {
        self.set(false);
    }

    fn set(&mut self, minimized: bool) {
        self.minimized = minimized;
        self.storage.save_minimized(minimized);
    }
}
