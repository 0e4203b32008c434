//! Classification pipeline: sanitize, validate, match.
//!
//! [`classify`] is the primary entry point. It never fails; a number that
//! is empty, fails the checksum, or fits no brand rule simply comes back
//! unidentified.

use std::fmt;

use crate::detect::identify_brand;
use crate::sanitize::sanitize;
use crate::CardBrand;

/// The outcome of classifying one raw card number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    /// The input with every non-digit character removed.
    pub sanitized_number: String,
    /// The identified brand, or `None` when unidentified.
    pub brand: Option<CardBrand>,
}

impl Classification {
    /// Returns true if a brand was identified.
    ///
    /// This also implies the sanitized number passed the Luhn check.
    #[inline]
    pub fn is_identified(&self) -> bool {
        self.brand.is_some()
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.brand {
            Some(brand) => write!(f, "{} ({})", self.sanitized_number, brand),
            None => write!(f, "{} (unidentified)", self.sanitized_number),
        }
    }
}

/// Classifies a raw card number.
///
/// Performs:
/// 1. Sanitization (every non-digit character is dropped)
/// 2. Luhn checksum validation
/// 3. Brand rule matching, first match wins
///
/// # Example
///
/// ```
/// use cc_brand::{classify, CardBrand};
///
/// let result = classify("4532-1234-5678-8909");
/// assert_eq!(result.sanitized_number, "4532123456788909");
/// assert_eq!(result.brand, Some(CardBrand::Visa));
///
/// // Checksum failure: no brand even though the prefix is VISA's
/// assert_eq!(classify("4532123456788902").brand, None);
/// ```
pub fn classify(raw: &str) -> Classification {
    let sanitized_number = sanitize(raw);
    let brand = identify_brand(&sanitized_number);

    Classification {
        sanitized_number,
        brand,
    }
}

/// Returns only the brand of a raw card number.
///
/// # Example
///
/// ```
/// use cc_brand::{identify_card_brand, CardBrand};
///
/// assert_eq!(identify_card_brand("5412 3456 7890 1232"), Some(CardBrand::Mastercard));
/// assert_eq!(identify_card_brand("invalid_number"), None);
/// ```
#[inline]
pub fn identify_card_brand(raw: &str) -> Option<CardBrand> {
    classify(raw).brand
}
