//! Validated quantity input.
//!
//! Quantities arrive from UI attributes as text. The original storefront
//! coerced them with a bare numeric cast and let `NaN` leak into the cart;
//! here the boundary parses and rejects instead. The result is signed so a
//! zero or negative value can still flow to the store, where it means
//! "remove the line".

/// Errors that can occur when parsing a quantity from UI input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseQuantityError {
    /// The input string is empty (or whitespace only).
    #[error("quantity cannot be empty")]
    Empty,
    /// The input is not an integer.
    #[error("quantity is not numeric: {0:?}")]
    NotNumeric(String),
}

/// Parse a quantity from a string, rejecting anything non-integer.
///
/// # Errors
///
/// Returns an error if the input is empty or not an integer.
///
/// ## Examples
///
/// ```
/// use hebe_core::parse_quantity;
///
/// assert_eq!(parse_quantity("3").unwrap(), 3);
/// assert_eq!(parse_quantity("-1").unwrap(), -1);
/// assert!(parse_quantity("lots").is_err());
/// ```
pub fn parse_quantity(s: &str) -> Result<i64, ParseQuantityError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseQuantityError::Empty);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| ParseQuantityError::NotNumeric(s.to_owned()))
}
