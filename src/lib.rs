//! # cc_brand
//!
//! Payment card brand identification for Rust.
//!
//! Given free-form card number text, the classifier strips separators,
//! verifies the Luhn checksum and matches the digits against an ordered
//! table of brand numbering rules. Everything is a total function over
//! strings: bad input yields an unidentified result, never an error.
//!
//! [`classify`] is the entry point for almost every caller. The `batch` and
//! `stream` modules only apply it across many inputs.
//!
//! ## Quick Start
//!
//! ```rust
//! use cc_brand::{classify, is_luhn_valid, CardBrand};
//!
//! let result = classify("4532 1234 5678 8909");
//! assert_eq!(result.sanitized_number, "4532123456788909");
//! assert_eq!(result.brand, Some(CardBrand::Visa));
//!
//! // A failed checksum never gets a brand
//! assert_eq!(classify("4532123456788902").brand, None);
//!
//! assert!(is_luhn_valid("378282246310005"));
//! ```
//!
//! ## Batch Processing
//!
//! ```rust
//! use cc_brand::batch;
//!
//! let cards = vec!["4111111111111111", "5500000000000004", "invalid"];
//! let results = batch::classify_batch(&cards);
//! assert_eq!(results.len(), 3);
//!
//! let (identified, unidentified) = batch::count_identified(&cards);
//! assert_eq!((identified, unidentified), (2, 1));
//! ```
//!
//! ## Supported Card Brands
//!
//! Rules are tried top to bottom; the first match wins.
//!
//! | Brand | Prefix | Length |
//! |-------|--------|--------|
//! | VISA | 4 | 13, 16 |
//! | MASTERCARD | 51-55 | 16 |
//! | AMEX | 34, 37 | 15 |
//! | DINERS | 300-305, 36, 38 | 14 |
//! | DISCOVER | 6011, 65 | 16 |
//! | JCB | 2131, 1800 / 35 | 15 / 16 |
//! | ELO | fixed prefix list | any |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/deserialize brands and results |
//! | `parallel` | Rayon-based batch classification |
//! | `generate` | Random test card generation |
//! | `cli` | Command-line tool (`ccbrand`) |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod card;
pub mod classify;
pub mod detect;
pub mod error;
pub mod generate;
pub mod luhn;
pub mod sanitize;
pub mod stream;

// Re-export main types at crate root
pub use card::CardBrand;
pub use classify::{classify, identify_card_brand, Classification};
pub use detect::{identify_brand, BRAND_RULES};
pub use error::ParseBrandError;
pub use luhn::is_luhn_valid;
pub use sanitize::sanitize;
