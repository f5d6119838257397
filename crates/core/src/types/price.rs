//! Rupee prices with Indian-locale display grouping.
//!
//! The storefront sells in whole rupees only; there are no fractional
//! currency units and no multi-currency support, so the representation is
//! an unsigned integer rather than a decimal type.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

/// A price in whole Indian rupees.
///
/// `Display` renders the amount with the `₹` symbol and en-IN digit
/// grouping: the last three digits form one group, everything above groups
/// in twos (`₹1,00,000`).
///
/// ## Examples
///
/// ```
/// use hebe_core::Price;
///
/// assert_eq!(Price::new(800).to_string(), "₹800");
/// assert_eq!(Price::new(1500).to_string(), "₹1,500");
/// assert_eq!(Price::new(100_000).to_string(), "₹1,00,000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// A zero price, shown for the empty cart.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole-rupee amount.
    #[must_use]
    pub const fn new(rupees: u64) -> Self {
        Self(rupees)
    }

    /// The amount in whole rupees, without formatting.
    #[must_use]
    pub const fn rupees(&self) -> u64 {
        self.0
    }

    /// Multiply by a line quantity, saturating at the numeric ceiling
    /// rather than wrapping.
    #[must_use]
    pub const fn times(&self, qty: u32) -> Self {
        Self(self.0.saturating_mul(qty as u64))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", group_en_in(self.0))
    }
}

/// Apply en-IN digit grouping to a whole number.
///
/// The lowest three digits form the first group; higher digits group in
/// pairs (the lakh/crore convention).
fn group_en_in(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    let head_bytes = head.as_bytes();
    for (i, b) in head_bytes.iter().enumerate() {
        // Comma before every pair boundary, counted from the right of head.
        if i > 0 && (head_bytes.len() - i) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(char::from(*b));
    }
    grouped.push(',');
    grouped.push_str(tail);
    grouped
}
