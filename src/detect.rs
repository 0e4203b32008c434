//! Card brand detection using an ordered table of numbering rules.
//!
//! Each [`BrandRule`] pairs a brand with the prefix/length patterns issued
//! under it. Rules are tried in declaration order and the first match wins,
//! so a number that fits several rules is reported under the earliest one.
//!
//! | Brand | Prefix | Length |
//! |-------|--------|--------|
//! | VISA | 4 | 13, 16 |
//! | MASTERCARD | 51-55 | 16 |
//! | AMEX | 34, 37 | 15 |
//! | DINERS | 300-305, 36, 38 | 14 |
//! | DISCOVER | 6011, 65 | 16 |
//! | JCB | 2131, 1800 / 35 | 15 / 16 |
//! | ELO | 4011, 431274, 438935, 451416, 457393, 4576, 457631, 457632, 504175, 627780, 636297, 636368, 636369 | any |
//!
//! Matching is anchored at the first digit. Only Luhn-valid numbers are
//! ever matched; see [`identify_brand`].

use crate::luhn::is_luhn_valid;
use crate::CardBrand;

/// Length constraint attached to a [`Pattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    /// The number must have exactly this many digits.
    Exactly(usize),
    /// Any number of digits, as long as the prefix is present.
    Any,
}

impl Length {
    #[inline]
    fn admits(self, len: usize) -> bool {
        match self {
            Self::Exactly(n) => n == len,
            Self::Any => true,
        }
    }
}

/// A single literal prefix together with the length it is valid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    /// Leading digits the number must start with.
    pub prefix: &'static str,
    /// Total digit count required when the prefix matches.
    pub length: Length,
}

impl Pattern {
    const fn new(prefix: &'static str, length: usize) -> Self {
        Self {
            prefix,
            length: Length::Exactly(length),
        }
    }

    const fn prefix_only(prefix: &'static str) -> Self {
        Self {
            prefix,
            length: Length::Any,
        }
    }

    /// Returns true if `digits` starts with the prefix and has an admitted
    /// length.
    #[inline]
    pub fn matches(&self, digits: &str) -> bool {
        digits.starts_with(self.prefix) && self.length.admits(digits.len())
    }
}

/// The numbering rules of one brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandRule {
    /// Brand reported when any pattern matches.
    pub brand: CardBrand,
    /// Alternative patterns; one match is enough.
    pub patterns: &'static [Pattern],
}

impl BrandRule {
    /// Returns true if any of the rule's patterns matches `digits`.
    #[inline]
    pub fn matches(&self, digits: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(digits))
    }
}

/// Brand rules in match order. Earlier rules take precedence.
pub static BRAND_RULES: &[BrandRule] = &[
    BrandRule {
        brand: CardBrand::Visa,
        patterns: &[Pattern::new("4", 13), Pattern::new("4", 16)],
    },
    BrandRule {
        brand: CardBrand::Mastercard,
        patterns: &[
            Pattern::new("51", 16),
            Pattern::new("52", 16),
            Pattern::new("53", 16),
            Pattern::new("54", 16),
            Pattern::new("55", 16),
        ],
    },
    BrandRule {
        brand: CardBrand::Amex,
        patterns: &[Pattern::new("34", 15), Pattern::new("37", 15)],
    },
    BrandRule {
        brand: CardBrand::Diners,
        patterns: &[
            Pattern::new("300", 14),
            Pattern::new("301", 14),
            Pattern::new("302", 14),
            Pattern::new("303", 14),
            Pattern::new("304", 14),
            Pattern::new("305", 14),
            Pattern::new("36", 14),
            Pattern::new("38", 14),
        ],
    },
    BrandRule {
        brand: CardBrand::Discover,
        patterns: &[Pattern::new("6011", 16), Pattern::new("65", 16)],
    },
    BrandRule {
        brand: CardBrand::Jcb,
        patterns: &[
            Pattern::new("2131", 15),
            Pattern::new("1800", 15),
            // 35 followed by three more digits, then eleven
            Pattern::new("35", 16),
        ],
    },
    BrandRule {
        brand: CardBrand::Elo,
        patterns: &[
            Pattern::prefix_only("4011"),
            Pattern::prefix_only("431274"),
            Pattern::prefix_only("438935"),
            Pattern::prefix_only("451416"),
            Pattern::prefix_only("457393"),
            Pattern::prefix_only("4576"),
            Pattern::prefix_only("457631"),
            Pattern::prefix_only("457632"),
            Pattern::prefix_only("504175"),
            Pattern::prefix_only("627780"),
            Pattern::prefix_only("636297"),
            Pattern::prefix_only("636368"),
            Pattern::prefix_only("636369"),
        ],
    },
];

/// Returns the brand of the first rule matching `digits`, without checking
/// the checksum.
///
/// # Example
///
/// ```
/// use cc_brand::detect::match_rules;
/// use cc_brand::CardBrand;
///
/// // Prefix and length only: the checksum is not consulted here
/// assert_eq!(match_rules("4532123456788902"), Some(CardBrand::Visa));
/// assert_eq!(match_rules("45321234567889"), None);
/// ```
pub fn match_rules(digits: &str) -> Option<CardBrand> {
    BRAND_RULES
        .iter()
        .find(|rule| rule.matches(digits))
        .map(|rule| rule.brand)
}

/// Identifies the brand of a sanitized, Luhn-valid digit string.
///
/// Returns `None` without consulting the rule table when `digits` fails
/// the Luhn check (including when it is empty or contains non-digits).
///
/// # Example
///
/// ```
/// use cc_brand::detect::identify_brand;
/// use cc_brand::CardBrand;
///
/// assert_eq!(identify_brand("378282246310005"), Some(CardBrand::Amex));
///
/// // VISA-shaped, but the checksum fails
/// assert_eq!(identify_brand("4532123456788902"), None);
/// ```
pub fn identify_brand(digits: &str) -> Option<CardBrand> {
    if !is_luhn_valid(digits) {
        return None;
    }

    match_rules(digits)
}
