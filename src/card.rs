//! Card brand identifiers.
//!
//! This module provides the closed set of card networks the classifier can
//! report.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseBrandError;

/// Card networks recognized by the rule table.
///
/// Variants are declared in rule-table order, which is also their `Ord`
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum CardBrand {
    /// Visa - Prefix 4, lengths 13, 16
    Visa,
    /// Mastercard - Prefix 51-55, length 16
    Mastercard,
    /// American Express - Prefix 34, 37, length 15
    Amex,
    /// Diners Club - Prefix 300-305, 36, 38, length 14
    Diners,
    /// Discover - Prefix 6011, 65, length 16
    Discover,
    /// JCB - Prefix 2131, 1800 (length 15) or 35 (length 16)
    Jcb,
    /// Elo - Brazilian network, fixed prefix list, any length
    Elo,
}

impl CardBrand {
    /// Every brand, in rule-table order.
    pub const ALL: [CardBrand; 7] = [
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::Diners,
        Self::Discover,
        Self::Jcb,
        Self::Elo,
    ];

    /// Returns the brand identifier, e.g. `"VISA"`.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Visa => "VISA",
            Self::Mastercard => "MASTERCARD",
            Self::Amex => "AMEX",
            Self::Diners => "DINERS",
            Self::Discover => "DISCOVER",
            Self::Jcb => "JCB",
            Self::Elo => "ELO",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardBrand {
    type Err = ParseBrandError;

    /// Parses a brand identifier, ignoring ASCII case and surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|brand| brand.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseBrandError::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        let names: Vec<&str> = CardBrand::ALL.iter().map(|b| b.as_str()).collect();
        assert_eq!(
            names,
            ["VISA", "MASTERCARD", "AMEX", "DINERS", "DISCOVER", "JCB", "ELO"]
        );
    }

    #[test]
    fn test_display_matches_identifier() {
        for brand in CardBrand::ALL {
            assert_eq!(brand.to_string(), brand.as_str());
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("VISA".parse::<CardBrand>(), Ok(CardBrand::Visa));
        assert_eq!("amex".parse::<CardBrand>(), Ok(CardBrand::Amex));
        assert_eq!(" Elo ".parse::<CardBrand>(), Ok(CardBrand::Elo));

        let err = "maestro".parse::<CardBrand>().unwrap_err();
        assert_eq!(err.input(), "maestro");
    }

    #[test]
    fn test_order_follows_table() {
        let mut sorted = CardBrand::ALL;
        sorted.sort();
        assert_eq!(sorted, CardBrand::ALL);
    }
}
