//! WhatsApp order-message building and the deferred post-checkout clear.
//!
//! [`build_message`] is a pure function of cart state; the transport
//! (opening the wa.me link) lives with the storefront. Amounts in the
//! message are deliberately ungrouped (`₹3000`, not `₹3,000`) - the text
//! is typed into a chat, not rendered in the panel.

use std::fmt::Write as _;
use std::time::{Duration, Instant};

use crate::line::{self, CartLine};

/// Fixed inquiry sent when checking out an empty cart.
pub const EMPTY_CART_INQUIRY: &str =
    "Hi, I am interested in your products. Please share details.";

/// How long after the checkout hand-off the cart is cleared.
pub const CLEAR_DELAY: Duration = Duration::from_millis(1500);

/// Build the plain-text order summary for the current cart.
///
/// Empty cart: the fixed generic inquiry. Otherwise a numbered list with
/// one line per cart item and its subtotal, the grand total, and blank
/// Name/Address/Contact fields for the customer to fill in. The result is
/// not yet percent-encoded; see [`encode_message`].
#[must_use]
pub fn build_message(lines: &[CartLine]) -> String {
    if lines.is_empty() {
        return EMPTY_CART_INQUIRY.to_owned();
    }

    let mut msg = String::from("New order");
    for (i, item) in lines.iter().enumerate() {
        let _ = write!(
            msg,
            "\n{}. {} x{} - ₹{}",
            i + 1,
            item.title,
            item.qty,
            item.subtotal().rupees()
        );
    }
    let _ = write!(
        msg,
        "\n\nTotal: ₹{}\nName:\nAddress:\nContact:",
        line::total(lines).rupees()
    );
    msg
}

/// Percent-encode a message for inclusion in a URL query parameter.
#[must_use]
pub fn encode_message(message: &str) -> String {
    urlencoding::encode(message).into_owned()
}

/// The deferred cart clear scheduled by a checkout hand-off.
///
/// The original storefront wiped the cart on a fixed timer with no
/// cancellation path, so items added during the delay window were lost.
/// The task is kept fire-and-forget by default to preserve that behavior,
/// but it is an explicit value: a caller that considers the race a bug can
/// [`cancel`](Self::cancel) it when the cart is mutated before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearTask {
    fire_at: Instant,
    cancelled: bool,
}

impl ClearTask {
    /// Schedule a clear `delay` from now.
    #[must_use]
    pub fn schedule(delay: Duration) -> Self {
        Self::schedule_at(Instant::now() + delay)
    }

    /// Schedule a clear at an explicit deadline (deterministic tests).
    #[must_use]
    pub const fn schedule_at(fire_at: Instant) -> Self {
        Self {
            fire_at,
            cancelled: false,
        }
    }

    /// Whether the task should fire at `now`. Always `false` once
    /// cancelled.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        !self.cancelled && now >= self.fire_at
    }

    /// Call off the clear. A cancelled task never becomes due again.
    pub const fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether [`cancel`](Self::cancel) was called.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
