//! Streaming classification for processing cards as they arrive.
//!
//! Iterator adapters that classify lazily, one item at a time, so large
//! files or network streams never have to be collected first.
//!
//! # Example
//!
//! ```
//! use cc_brand::stream::ClassifyExt;
//!
//! let cards = vec!["4111111111111111", "5500000000000004", "invalid"];
//! let identified = cards.iter()
//!     .copied()
//!     .classify_cards()
//!     .filter(|c| c.is_identified())
//!     .count();
//!
//! assert_eq!(identified, 2);
//! ```

use crate::classify::{classify, Classification};
use crate::CardBrand;

/// An iterator that classifies every item of the wrapped iterator.
///
/// Created by [`ClassifyExt::classify_cards`].
#[derive(Debug, Clone)]
pub struct ClassifyStream<I> {
    inner: I,
}

impl<I> ClassifyStream<I> {
    /// Consumes the stream and returns the inner iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, S> Iterator for ClassifyStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Classification;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| classify(s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, S> ExactSizeIterator for ClassifyStream<I>
where
    I: ExactSizeIterator<Item = S>,
    S: AsRef<str>,
{
}

impl<I, S> DoubleEndedIterator for ClassifyStream<I>
where
    I: DoubleEndedIterator<Item = S>,
    S: AsRef<str>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|s| classify(s.as_ref()))
    }
}

/// An iterator that yields `(sanitized_number, brand)` for identified cards
/// only. Unidentified cards are skipped.
///
/// Created by [`ClassifyExt::identified_only`].
#[derive(Debug, Clone)]
pub struct IdentifiedStream<I> {
    inner: I,
}

impl<I, S> Iterator for IdentifiedStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = (String, CardBrand);

    fn next(&mut self) -> Option<Self::Item> {
        for s in self.inner.by_ref() {
            let result = classify(s.as_ref());
            if let Some(brand) = result.brand {
                return Some((result.sanitized_number, brand));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// Extension trait adding classification adapters to any iterator of
/// string-like items.
pub trait ClassifyExt: Iterator + Sized {
    /// Classifies each item.
    fn classify_cards(self) -> ClassifyStream<Self> {
        ClassifyStream { inner: self }
    }

    /// Yields only the identified cards with their brand.
    fn identified_only(self) -> IdentifiedStream<Self> {
        IdentifiedStream { inner: self }
    }
}

impl<I> ClassifyExt for I
where
    I: Iterator,
    I::Item: AsRef<str>,
{
}
