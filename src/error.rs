//! Error types.
//!
//! Classification itself never fails: an unknown or malformed number is an
//! unidentified result, not an error. The only fallible operation is
//! turning text into a [`CardBrand`](crate::CardBrand).

use std::fmt;

/// Error returned when a string does not name a known card brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBrandError {
    input: String,
}

impl ParseBrandError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseBrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown card brand '{}' (expected one of VISA, MASTERCARD, AMEX, DINERS, DISCOVER, JCB, ELO)",
            self.input.escape_default()
        )
    }
}

impl std::error::Error for ParseBrandError {}
