//! Batch classification.
//!
//! Classification is stateless, so a batch is just the per-number pipeline
//! applied in order. With the `parallel` feature the same work is spread
//! across rayon's thread pool; results are identical and keep input order.

use std::collections::BTreeMap;

use crate::classify::{classify, Classification};
use crate::detect::identify_brand;
use crate::sanitize::sanitize;
use crate::CardBrand;

/// Classifies a slice of raw card numbers, preserving order.
///
/// # Example
///
/// ```
/// use cc_brand::batch::classify_batch;
/// use cc_brand::CardBrand;
///
/// let results = classify_batch(&["4111111111111111", "invalid"]);
/// assert_eq!(results[0].brand, Some(CardBrand::Visa));
/// assert_eq!(results[1].brand, None);
/// ```
#[inline]
pub fn classify_batch<S: AsRef<str>>(cards: &[S]) -> Vec<Classification> {
    cards.iter().map(|c| classify(c.as_ref())).collect()
}

/// Classifies a slice of raw card numbers in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn classify_batch_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> Vec<Classification> {
    use rayon::prelude::*;
    cards.par_iter().map(|c| classify(c.as_ref())).collect()
}

/// Counts identified and unidentified cards in a batch.
///
/// # Returns
///
/// Tuple of (identified_count, unidentified_count)
///
/// # Example
///
/// ```
/// use cc_brand::batch::count_identified;
///
/// let cards = ["4111111111111111", "1234567890123456", "5500000000000004"];
/// assert_eq!(count_identified(&cards), (2, 1));
/// ```
pub fn count_identified<S: AsRef<str>>(cards: &[S]) -> (usize, usize) {
    let identified = cards
        .iter()
        .filter_map(|c| brand_of(c.as_ref()))
        .count();

    (identified, cards.len() - identified)
}

/// Counts identified and unidentified cards in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn count_identified_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> (usize, usize) {
    use rayon::prelude::*;

    let identified = cards
        .par_iter()
        .filter_map(|c| brand_of(c.as_ref()))
        .count();

    (identified, cards.len() - identified)
}

/// Tallies identified cards per brand. Unidentified cards are not counted.
///
/// # Example
///
/// ```
/// use cc_brand::batch::brand_counts;
/// use cc_brand::CardBrand;
///
/// let counts = brand_counts(&["4111111111111111", "4222222222222", "378282246310005"]);
/// assert_eq!(counts[&CardBrand::Visa], 2);
/// assert_eq!(counts[&CardBrand::Amex], 1);
/// assert!(!counts.contains_key(&CardBrand::Jcb));
/// ```
pub fn brand_counts<S: AsRef<str>>(cards: &[S]) -> BTreeMap<CardBrand, usize> {
    let mut counts = BTreeMap::new();
    for brand in cards.iter().filter_map(|c| brand_of(c.as_ref())) {
        *counts.entry(brand).or_insert(0) += 1;
    }
    counts
}

#[inline]
fn brand_of(raw: &str) -> Option<CardBrand> {
    identify_brand(&sanitize(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: [&str; 5] = [
        "4111111111111111",
        "5500000000000004",
        "invalid",
        "378282246310005",
        "4111111111111112",
    ];

    #[test]
    fn test_classify_batch_order() {
        let results = classify_batch(&CARDS);
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].brand, Some(CardBrand::Visa));
        assert_eq!(results[1].brand, Some(CardBrand::Mastercard));
        assert_eq!(results[2].brand, None);
        assert_eq!(results[3].brand, Some(CardBrand::Amex));
        assert_eq!(results[4].brand, None);
    }

    #[test]
    fn test_count_identified() {
        assert_eq!(count_identified(&CARDS), (3, 2));
        assert_eq!(count_identified::<&str>(&[]), (0, 0));
    }

    #[test]
    fn test_brand_counts() {
        let counts = brand_counts(&CARDS);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[&CardBrand::Visa], 1);
        assert_eq!(counts[&CardBrand::Mastercard], 1);
        assert_eq!(counts[&CardBrand::Amex], 1);
    }

    #[test]
    fn test_owned_strings() {
        let cards: Vec<String> = CARDS.iter().map(|s| s.to_string()).collect();
        assert_eq!(classify_batch(&cards), classify_batch(&CARDS));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let cards: Vec<&str> = CARDS.iter().copied().cycle().take(1000).collect();
        assert_eq!(classify_batch_parallel(&cards), classify_batch(&cards));
        assert_eq!(count_identified_parallel(&cards), count_identified(&cards));
    }
}
