//! Card number generation for testing purposes.
//!
//! Generated numbers pass the Luhn check and satisfy the brand's rule in
//! the detection table, so [`classify`](crate::classify) reports them as the
//! requested brand. They are not connected to real accounts.
//!
//! # Example
//!
//! ```
//! use cc_brand::generate::generate_card_deterministic;
//! use cc_brand::{classify, CardBrand};
//!
//! let number = generate_card_deterministic(CardBrand::Discover);
//! assert!(number.starts_with("6011"));
//! assert_eq!(classify(&number).brand, Some(CardBrand::Discover));
//! ```

use crate::luhn;
use crate::CardBrand;

#[cfg(feature = "generate")]
use rand::Rng;

/// Returns the prefix used when generating numbers for a brand.
pub const fn prefix_for_brand(brand: CardBrand) -> &'static str {
    match brand {
        CardBrand::Visa => "4",
        CardBrand::Mastercard => "51",
        CardBrand::Amex => "34",
        CardBrand::Diners => "36",
        CardBrand::Discover => "6011",
        CardBrand::Jcb => "35",
        CardBrand::Elo => "636368",
    }
}

/// Returns the length used when generating numbers for a brand.
pub const fn length_for_brand(brand: CardBrand) -> usize {
    match brand {
        CardBrand::Visa => 16,
        CardBrand::Mastercard => 16,
        CardBrand::Amex => 15,
        CardBrand::Diners => 14,
        CardBrand::Discover => 16,
        CardBrand::Jcb => 16,
        CardBrand::Elo => 16,
    }
}

/// Generates a valid card number deterministically (no randomness).
///
/// The body between prefix and check digit is zero-filled, so the same
/// brand always yields the same number.
pub fn generate_card_deterministic(brand: CardBrand) -> String {
    generate_card_deterministic_with_prefix(prefix_for_brand(brand), length_for_brand(brand))
}

/// Generates a Luhn-valid number with a custom prefix, zero-filling the body.
///
/// # Panics
///
/// Panics if the prefix has as many digits as `length` or more.
///
/// # Example
///
/// ```
/// use cc_brand::generate::generate_card_deterministic_with_prefix;
///
/// let number = generate_card_deterministic_with_prefix("2131", 15);
/// assert_eq!(number, "213100000000001");
/// assert!(cc_brand::is_luhn_valid(&number));
/// ```
pub fn generate_card_deterministic_with_prefix(prefix: &str, length: usize) -> String {
    let mut digits = prefix_digits(prefix, length);
    digits.resize(length - 1, 0);
    finish(digits)
}

/// Generates a valid card number for the given brand using random digits.
///
/// Requires the `generate` feature (which enables the `rand` dependency).
///
/// # Example
///
/// ```
/// use cc_brand::generate::generate_card;
/// use cc_brand::{classify, CardBrand};
///
/// let number = generate_card(CardBrand::Amex);
/// assert_eq!(classify(&number).brand, Some(CardBrand::Amex));
/// ```
#[cfg(feature = "generate")]
pub fn generate_card(brand: CardBrand) -> String {
    generate_card_with_prefix(prefix_for_brand(brand), length_for_brand(brand))
}

/// Generates a Luhn-valid number with the given prefix and length.
///
/// Requires the `generate` feature.
///
/// # Panics
///
/// Panics if the prefix has as many digits as `length` or more.
#[cfg(feature = "generate")]
pub fn generate_card_with_prefix(prefix: &str, length: usize) -> String {
    let mut rng = rand::thread_rng();
    generate_card_with_rng(prefix, length, &mut rng)
}

/// Generates a Luhn-valid number using a provided RNG.
///
/// Useful for reproducible fixtures with seeded RNGs.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(prefix: &str, length: usize, rng: &mut R) -> String {
    let mut digits = prefix_digits(prefix, length);
    while digits.len() < length - 1 {
        digits.push(rng.gen_range(0..10));
    }
    finish(digits)
}

fn prefix_digits(prefix: &str, length: usize) -> Vec<u8> {
    let digits = crate::sanitize::digits(prefix);
    assert!(
        digits.len() < length,
        "Prefix length must be less than total length"
    );
    digits
}

fn finish(mut digits: Vec<u8>) -> String {
    let check_digit = luhn::generate_check_digit(&digits);
    digits.push(check_digit);
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify;

    #[test]
    fn test_deterministic_every_brand() {
        for brand in CardBrand::ALL {
            let number = generate_card_deterministic(brand);
            assert_eq!(number.len(), length_for_brand(brand));
            assert!(number.starts_with(prefix_for_brand(brand)));
            assert_eq!(classify(&number).brand, Some(brand), "{}", number);
        }
    }

    #[test]
    fn test_deterministic_is_stable() {
        assert_eq!(
            generate_card_deterministic(CardBrand::Visa),
            generate_card_deterministic(CardBrand::Visa)
        );
        assert_eq!(generate_card_deterministic(CardBrand::Visa), "4000000000000002");
    }

    #[test]
    #[should_panic(expected = "Prefix length must be less than total length")]
    fn test_prefix_too_long() {
        generate_card_deterministic_with_prefix("4111", 4);
    }

    #[cfg(feature = "generate")]
    #[test]
    fn test_random_every_brand() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(7);
        for brand in CardBrand::ALL {
            for _ in 0..50 {
                let number = generate_card_with_rng(
                    prefix_for_brand(brand),
                    length_for_brand(brand),
                    &mut rng,
                );
                assert_eq!(classify(&number).brand, Some(brand), "{}", number);
            }
        }
    }
}
