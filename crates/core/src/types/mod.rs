//! Core types for the Hebe LivingSpace storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod quantity;

pub use id::{ParseIdError, ProductId};
pub use price::Price;
pub use quantity::{ParseQuantityError, parse_quantity};
