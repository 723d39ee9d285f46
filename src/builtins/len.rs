//! Length operations - element counts selected by iterator category
//!
//! Design: The category of a container decides how its length is measured:
//! - random access: distance between first and end position, O(1)
//! - bidirectional: the container's native size, O(1)
//! - forward only: a full walk, O(n)

use super::traits::{
    BidirectionalTag, ForwardTag, Iterable, RandomAccessIterable, RandomAccessTag,
    SizedIterable,
};
use crate::logging::debug;

/// How a category measures a container of type `S`
pub trait LenStrategy<S: ?Sized> {
    /// Length when it is available without a walk
    fn known_len(seq: &S) -> Option<i64>;

    fn measure(seq: &S) -> i64;
}

impl<S: RandomAccessIterable + ?Sized> LenStrategy<S> for RandomAccessTag {
    #[inline]
    fn known_len(seq: &S) -> Option<i64> {
        Some(seq.distance())
    }

    #[inline]
    fn measure(seq: &S) -> i64 {
        seq.distance()
    }
}

impl<S: SizedIterable + ?Sized> LenStrategy<S> for BidirectionalTag {
    #[inline]
    fn known_len(seq: &S) -> Option<i64> {
        Some(seq.size() as i64)
    }

    #[inline]
    fn measure(seq: &S) -> i64 {
        seq.size() as i64
    }
}

impl<S: Iterable + ?Sized> LenStrategy<S> for ForwardTag {
    #[inline]
    fn known_len(_seq: &S) -> Option<i64> {
        None
    }

    fn measure(seq: &S) -> i64 {
        let count = seq.items().count() as i64;
        debug!(target: "builtins", count, "len() walked a forward-only container");
        count
    }
}

/// Trait for types with computable length
///
/// Implemented for every `Iterable` whose category can measure it.
pub trait HasLen {
    fn len(&self) -> i64;

    /// O(1) length, or `None` when only a walk could tell
    fn len_hint(&self) -> Option<i64>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> HasLen for S
where
    S: Iterable + ?Sized,
    S::Category: LenStrategy<S>,
{
    #[inline]
    fn len(&self) -> i64 {
        <S::Category as LenStrategy<S>>::measure(self)
    }

    #[inline]
    fn len_hint(&self) -> Option<i64> {
        <S::Category as LenStrategy<S>>::known_len(self)
    }
}

/// Number of elements in `obj`
#[inline]
pub fn len<T: HasLen + ?Sized>(obj: &T) -> i64 {
    obj.len()
}
