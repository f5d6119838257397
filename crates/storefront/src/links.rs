//! WhatsApp click-to-chat deep links.
//!
//! Every outward hand-off is a `https://wa.me/<phone>?text=<message>` URL;
//! the message is percent-encoded exactly once, by
//! [`hebe_cart::encode_message`]. Opening the link is the embedding UI's
//! job; nothing here learns whether the chat was ever sent.

use hebe_cart::{CartLine, build_message, encode_message};
use url::Url;

use crate::config::MerchantConfig;

/// Fixed message behind the floating WhatsApp button.
pub const QUICK_INQUIRY: &str = "Hi, I want to know more about your products.";

/// Fixed message behind the secondary "ask a question" action.
pub const QUESTION: &str = "Hello, I have a question about your products.";

/// Errors constructing a wa.me link.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// The merchant phone number produced an unparseable URL.
    #[error("invalid wa.me link: {0}")]
    Invalid(#[from] url::ParseError),
}

/// Build the checkout hand-off link for the current cart.
///
/// The text parameter carries the order summary from
/// [`hebe_cart::build_message`] (or the fixed inquiry for an empty cart).
///
/// # Errors
///
/// Returns an error if the configured phone number does not form a valid
/// URL.
pub fn checkout_link(config: &MerchantConfig, lines: &[CartLine]) -> Result<Url, LinkError> {
    chat_link(config, &build_message(lines))
}

/// The floating-button quick inquiry link.
///
/// # Errors
///
/// Returns an error if the configured phone number does not form a valid
/// URL.
pub fn quick_inquiry_link(config: &MerchantConfig) -> Result<Url, LinkError> {
    chat_link(config, QUICK_INQUIRY)
}

/// The secondary call-to-action question link.
///
/// # Errors
///
/// Returns an error if the configured phone number does not form a valid
/// URL.
pub fn question_link(config: &MerchantConfig) -> Result<Url, LinkError> {
    chat_link(config, QUESTION)
}

fn chat_link(config: &MerchantConfig, message: &str) -> Result<Url, LinkError> {
    let raw = format!(
        "https://wa.me/{}?text={}",
        config.wa_phone,
        encode_message(message)
    );
    Ok(Url::parse(&raw)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hebe_core::{Price, ProductId};

    use super::*;

    fn cart() -> Vec<CartLine> {
        vec![CartLine {
            id: ProductId::new(1),
            title: "Chair".to_owned(),
            price: Price::new(1500),
            img: "x".to_owned(),
            qty: 2,
        }]
    }

    #[test]
    fn test_checkout_link_carries_encoded_order() {
        let url = checkout_link(&MerchantConfig::default(), &cart()).unwrap();
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/919608018417");
        let query = url.query().unwrap();
        assert!(query.starts_with("text=New%20order"));
        assert!(query.contains("%0A"));
        assert!(!query.contains(' '));
    }

    #[test]
    fn test_empty_cart_checkout_carries_inquiry() {
        let url = checkout_link(&MerchantConfig::default(), &[]).unwrap();
        assert!(url.query().unwrap().contains("interested%20in%20your%20products"));
    }

    #[test]
    fn test_decoded_text_round_trips() {
        let url = checkout_link(&MerchantConfig::default(), &cart()).unwrap();
        let (_, text) = url.query_pairs().find(|(k, _)| k == "text").unwrap();
        assert_eq!(text, build_message(&cart()));
    }

    #[test]
    fn test_fixed_inquiry_links() {
        let config = MerchantConfig::default();
        let quick = quick_inquiry_link(&config).unwrap();
        assert!(quick.query().unwrap().contains("know%20more"));
        let question = question_link(&config).unwrap();
        assert!(question.query().unwrap().contains("question%20about"));
    }

    #[test]
    fn test_custom_phone_is_used() {
        let config = MerchantConfig {
            wa_phone: "911111111111".to_owned(),
            brand: "Test".to_owned(),
        };
        let url = quick_inquiry_link(&config).unwrap();
        assert_eq!(url.path(), "/911111111111");
    }
}
