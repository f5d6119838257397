//! Hebe Cart - the cart subsystem of the Hebe LivingSpace storefront.
//!
//! This crate owns everything between a UI event and the persisted cart:
//!
//! - [`storage`] - key/value persistence adapter (memory and file backed)
//! - [`line`] - cart line items and derived totals
//! - [`store`] - the canonical cart store (mutate, persist, notify)
//! - [`view`] - pure cart-state-to-view-model rendering
//! - [`display`] - the minimized/restored presentation flag
//! - [`checkout`] - WhatsApp order-message building and the deferred
//!   post-checkout clear
//!
//! The crate is headless and single-threaded by design: mutations are
//! synchronous transactions (mutate, persist, notify), and the only
//! deferred behavior is the [`checkout::ClearTask`] deadline, which the
//! caller's event loop drives explicitly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod display;
pub mod line;
pub mod storage;
pub mod store;
pub mod view;

pub use checkout::{ClearTask, build_message, encode_message};
pub use display::DisplayModeController;
pub use line::CartLine;
pub use storage::{CartStorage, FileBackend, MemoryBackend, StorageBackend, StorageError};
pub use store::CartStore;
pub use view::{CartLineView, CartView, LineAction};
