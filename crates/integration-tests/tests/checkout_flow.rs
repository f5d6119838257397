//! Checkout hand-off: message format, deep links, and the deferred clear.

#![allow(clippy::unwrap_used)]

use std::time::{Duration, Instant};

use hebe_cart::checkout::CLEAR_DELAY;
use hebe_core::{Price, Product, ProductId};
use hebe_storefront::{Catalog, MerchantConfig, StorefrontSession};

fn catalog() -> Catalog {
    Catalog::from_products(vec![
        Product {
            id: ProductId::new(1),
            title: "Chair".to_owned(),
            price: Price::new(1500),
            img: "x".to_owned(),
            desc: String::new(),
            lead_time: String::new(),
            category: String::new(),
        },
        Product {
            id: ProductId::new(2),
            title: "Lamp".to_owned(),
            price: Price::new(800),
            img: "y".to_owned(),
            desc: String::new(),
            lead_time: String::new(),
            category: String::new(),
        },
    ])
}

fn open_session(dir: &std::path::Path) -> StorefrontSession<hebe_cart::FileBackend> {
    StorefrontSession::open(MerchantConfig::default(), catalog(), dir)
}

// =============================================================================
// Hand-Off Link
// =============================================================================

#[test]
fn test_checkout_link_decodes_to_order_summary() {
    hebe_integration_tests::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let mut session = open_session(dir.path());

    session.add_to_cart(ProductId::new(1), 2);
    session.add_to_cart(ProductId::new(2), 1);

    let url = session.checkout().unwrap();
    assert_eq!(url.host_str(), Some("wa.me"));
    assert_eq!(url.path(), "/919608018417");

    let (_, text) = url.query_pairs().find(|(k, _)| k == "text").unwrap();
    assert_eq!(
        text,
        "New order\n\
         1. Chair x2 - ₹3000\n\
         2. Lamp x1 - ₹800\n\
         \n\
         Total: ₹3800\n\
         Name:\n\
         Address:\n\
         Contact:"
    );
}

#[test]
fn test_empty_cart_checkout_sends_generic_inquiry() {
    hebe_integration_tests::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let mut session = open_session(dir.path());

    let url = session.checkout().unwrap();
    let (_, text) = url.query_pairs().find(|(k, _)| k == "text").unwrap();
    assert_eq!(
        text,
        "Hi, I am interested in your products. Please share details."
    );
    assert!(!text.contains("Total"));
}

// =============================================================================
// Deferred Clear
// =============================================================================

#[test]
fn test_clear_fires_after_delay_and_persists() {
    hebe_integration_tests::init_tracing();
    let dir = tempfile::tempdir().unwrap();

    {
        let mut session = open_session(dir.path());
        session.add_to_cart(ProductId::new(1), 1);
        let _ = session.checkout().unwrap();
        assert!(session.tick(Instant::now() + CLEAR_DELAY));
    }

    // The wipe reached storage, not just memory.
    let reopened = open_session(dir.path());
    assert!(reopened.cart_view().lines.is_empty());
}

#[test]
fn test_clear_race_wipes_items_added_during_delay() {
    // Fire-and-forget by contract: the scheduled clear does not care
    // about mutations made while it was pending.
    hebe_integration_tests::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let mut session = open_session(dir.path());

    session.add_to_cart(ProductId::new(1), 1);
    let _ = session.checkout().unwrap();
    session.add_to_cart(ProductId::new(2), 3);

    assert!(session.tick(Instant::now() + CLEAR_DELAY + Duration::from_millis(1)));
    assert!(session.cart_view().lines.is_empty());
}

#[test]
fn test_cancelling_clear_preserves_new_items() {
    hebe_integration_tests::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let mut session = open_session(dir.path());

    session.add_to_cart(ProductId::new(1), 1);
    let _ = session.checkout().unwrap();
    session.add_to_cart(ProductId::new(2), 3);
    session.cancel_pending_clear();

    assert!(!session.tick(Instant::now() + CLEAR_DELAY + Duration::from_secs(60)));
    assert_eq!(session.cart_view().lines.len(), 2);
}

#[test]
fn test_checkout_does_not_mutate_cart() {
    hebe_integration_tests::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let mut session = open_session(dir.path());

    session.add_to_cart(ProductId::new(1), 2);
    let before = session.cart_view();
    let _ = session.checkout().unwrap();
    assert_eq!(session.cart_view(), before);
}
