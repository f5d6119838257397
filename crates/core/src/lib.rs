//! Hebe Core - Shared types library.
//!
//! This crate provides the common types used across the Hebe LivingSpace
//! storefront components:
//! - `cart` - Client-side cart store, persistence, and checkout hand-off
//! - `storefront` - Catalog, merchant config, and WhatsApp deep links
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe ids, rupee prices, and
//!   validated quantity input
//! - [`product`] - The catalog product record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod product;
pub mod types;

pub use product::Product;
pub use types::*;
