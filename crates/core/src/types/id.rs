//! Newtype product id with explicit parsing for UI-sourced strings.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseIdError {
    /// The input string is empty (or whitespace only).
    #[error("product id cannot be empty")]
    Empty,
    /// The input is not an integer.
    #[error("product id is not numeric: {0:?}")]
    NotNumeric(String),
}

/// A catalog product identifier.
///
/// Identity is numeric: two ids are equal when their numeric values are
/// equal, regardless of whether they arrived as catalog JSON numbers or as
/// UI dataset strings. String inputs must go through [`ProductId::parse`];
/// there is no lossy `From<&str>` on purpose.
///
/// ## Examples
///
/// ```
/// use hebe_core::ProductId;
///
/// let from_catalog = ProductId::new(7);
/// let from_ui = ProductId::parse("7").unwrap();
/// assert_eq!(from_catalog, from_ui);
///
/// assert!(ProductId::parse("").is_err());
/// assert!(ProductId::parse("seven").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Create a new id from an i64 value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Parse a `ProductId` from a string, as delivered by UI attributes.
    ///
    /// Leading and trailing whitespace is tolerated; anything that is not
    /// an integer is rejected rather than silently coerced.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or not an integer.
    pub fn parse(s: &str) -> Result<Self, ParseIdError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseIdError::Empty);
        }
        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ParseIdError::NotNumeric(s.to_owned()))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ProductId> for i64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_identity_across_representations() {
        assert_eq!(ProductId::parse("42").unwrap(), ProductId::new(42));
        assert_eq!(ProductId::parse(" 42 ").unwrap(), ProductId::new(42));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(ProductId::parse(""), Err(ParseIdError::Empty));
        assert_eq!(ProductId::parse("   "), Err(ParseIdError::Empty));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(matches!(
            ProductId::parse("chair"),
            Err(ParseIdError::NotNumeric(_))
        ));
        assert!(matches!(
            ProductId::parse("1.5"),
            Err(ParseIdError::NotNumeric(_))
        ));
    }

    #[test]
    fn test_serde_transparent() {
        let id: ProductId = serde_json::from_str("7").unwrap();
        assert_eq!(id, ProductId::new(7));
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }
}
