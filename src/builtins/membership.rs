//! Membership - the `in` operator as `contains`
//!
//! Sequences search linearly; ordered and hashed sets use their native
//! lookup; ranges answer arithmetically; strings search for substrings.

use super::convert::{EmptyList, EmptySet};
use super::iter::XRange;
use super::reversed::Reversed;
use super::traits::DoubleEndedIterable;
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

/// Containers that can answer `needle in self`
pub trait Contains<N: ?Sized> {
    fn contains_item(&self, needle: &N) -> bool;
}

impl<T: PartialEq> Contains<T> for [T] {
    #[inline]
    fn contains_item(&self, needle: &T) -> bool {
        self.iter().any(|item| item == needle)
    }
}

impl<T: PartialEq> Contains<T> for Vec<T> {
    #[inline]
    fn contains_item(&self, needle: &T) -> bool {
        self.as_slice().contains_item(needle)
    }
}

impl<T: PartialEq, const N: usize> Contains<T> for [T; N] {
    #[inline]
    fn contains_item(&self, needle: &T) -> bool {
        self.as_slice().contains_item(needle)
    }
}

impl<T: PartialEq> Contains<T> for VecDeque<T> {
    #[inline]
    fn contains_item(&self, needle: &T) -> bool {
        self.iter().any(|item| item == needle)
    }
}

impl<T: PartialEq> Contains<T> for LinkedList<T> {
    #[inline]
    fn contains_item(&self, needle: &T) -> bool {
        self.iter().any(|item| item == needle)
    }
}

impl<T: Ord> Contains<T> for BTreeSet<T> {
    #[inline]
    fn contains_item(&self, needle: &T) -> bool {
        self.contains(needle)
    }
}

impl<T: Hash + Eq, S: BuildHasher> Contains<T> for HashSet<T, S> {
    #[inline]
    fn contains_item(&self, needle: &T) -> bool {
        self.contains(needle)
    }
}

impl Contains<str> for str {
    #[inline]
    fn contains_item(&self, needle: &str) -> bool {
        self.contains(needle)
    }
}

impl Contains<String> for str {
    #[inline]
    fn contains_item(&self, needle: &String) -> bool {
        self.contains(needle.as_str())
    }
}

impl Contains<char> for str {
    #[inline]
    fn contains_item(&self, needle: &char) -> bool {
        self.contains(*needle)
    }
}

impl<N: ?Sized> Contains<N> for String
where
    str: Contains<N>,
{
    #[inline]
    fn contains_item(&self, needle: &N) -> bool {
        self.as_str().contains_item(needle)
    }
}

impl Contains<i64> for XRange {
    #[inline]
    fn contains_item(&self, needle: &i64) -> bool {
        self.contains_value(*needle)
    }
}

impl<S> Contains<S::Value> for Reversed<'_, S>
where
    S: DoubleEndedIterable + ?Sized,
    S::Value: PartialEq,
{
    #[inline]
    fn contains_item(&self, needle: &S::Value) -> bool {
        self.source().items().any(|item| S::view(&item) == needle)
    }
}

impl<T: ?Sized> Contains<T> for EmptyList {
    #[inline]
    fn contains_item(&self, _needle: &T) -> bool {
        false
    }
}

impl<T: ?Sized> Contains<T> for EmptySet {
    #[inline]
    fn contains_item(&self, _needle: &T) -> bool {
        false
    }
}

/// `needle in container`
#[inline]
pub fn contains<C, N>(container: &C, needle: &N) -> bool
where
    C: Contains<N> + ?Sized,
    N: ?Sized,
{
    container.contains_item(needle)
}
