//! Hebe Storefront library.
//!
//! The collaborators the cart core needs to run as a storefront: merchant
//! configuration, the product catalog with search and category filtering,
//! WhatsApp deep links, and the session object that ties them to a
//! [`hebe_cart::CartStore`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod links;
pub mod session;

pub use catalog::{Catalog, CatalogError};
pub use config::MerchantConfig;
pub use links::LinkError;
pub use session::StorefrontSession;
