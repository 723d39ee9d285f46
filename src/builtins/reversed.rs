//! Reverse views - `reversed`
//!
//! `Reversed` borrows its source and swaps the forward and reverse
//! traversals, without copying. Sources with forward-only iteration do not
//! implement `DoubleEndedIterable` and are rejected at compile time.

use super::traits::{DoubleEndedIterable, Iterable, RandomAccessIterable, SizedIterable};
use std::fmt;

/// Reverse view over a borrowed sequence
pub struct Reversed<'s, S: ?Sized> {
    source: &'s S,
}

impl<'s, S: ?Sized> Reversed<'s, S> {
    #[inline]
    pub fn source(&self) -> &'s S {
        self.source
    }
}

impl<S: ?Sized> Clone for Reversed<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Reversed<'_, S> {}

impl<S: fmt::Debug + ?Sized> fmt::Debug for Reversed<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Reversed").field(&self.source).finish()
    }
}

impl<'s, S: DoubleEndedIterable + ?Sized> Iterable for Reversed<'s, S> {
    type Value = S::Value;
    type Category = S::Category;
    type Ref<'a> = S::Ref<'s> where Self: 'a;
    type Iter<'a> = S::RevIter<'s> where Self: 'a;

    #[inline]
    fn items(&self) -> Self::Iter<'_> {
        self.source.rev_items()
    }
}

impl<'s, S: DoubleEndedIterable + ?Sized> DoubleEndedIterable for Reversed<'s, S> {
    type RevIter<'a> = S::Iter<'s> where Self: 'a;

    #[inline]
    fn rev_items(&self) -> Self::RevIter<'_> {
        self.source.items()
    }
}

impl<'s, S: RandomAccessIterable + ?Sized> RandomAccessIterable for Reversed<'s, S> {
    #[inline]
    fn distance(&self) -> i64 {
        self.source.distance()
    }

    #[inline]
    fn at(&self, index: i64) -> Self::Ref<'_> {
        self.source.at(self.source.distance() - 1 - index)
    }
}

impl<'s, S: SizedIterable + DoubleEndedIterable + ?Sized> SizedIterable for Reversed<'s, S> {
    #[inline]
    fn size(&self) -> usize {
        self.source.size()
    }
}

impl<'s, S: DoubleEndedIterable + ?Sized> IntoIterator for Reversed<'s, S> {
    type Item = S::Ref<'s>;
    type IntoIter = S::RevIter<'s>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.source.rev_items()
    }
}

/// View `seq` back to front
#[inline]
pub fn reversed<S: DoubleEndedIterable + ?Sized>(seq: &S) -> Reversed<'_, S> {
    Reversed { source: seq }
}
