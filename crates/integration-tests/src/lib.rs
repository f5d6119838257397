//! Integration tests for the Hebe LivingSpace storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p hebe-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - cart lifecycle and persistence across sessions
//! - `checkout_flow` - message building, deep links, and the deferred
//!   post-checkout clear

use std::sync::Once;

static INIT: Once = Once::new();

/// Install a test subscriber so `tracing` output from the crates under
/// test lands in captured test output. Safe to call from every test.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
    });
}
