//! Set relations - `issuperset` and `issubset`
//!
//! The empty set sentinel answers `issuperset` with `false` for every
//! argument, including an empty one.

use super::convert::EmptySet;
use super::membership::Contains;
use super::traits::Iterable;
use crate::logging::log_builtin_call;
use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// Sets that can be compared against an arbitrary iterable
pub trait SetRelation<O: ?Sized> {
    /// Every element of `other` is in `self`
    fn is_superset_of(&self, other: &O) -> bool;

    /// Every element of `self` is in `other`
    fn is_subset_of(&self, other: &O) -> bool;
}

impl<T, O> SetRelation<O> for BTreeSet<T>
where
    T: Ord,
    O: Iterable<Value = T> + Contains<T> + ?Sized,
{
    fn is_superset_of(&self, other: &O) -> bool {
        other.items().all(|item| self.contains(O::view(&item)))
    }

    fn is_subset_of(&self, other: &O) -> bool {
        self.iter().all(|value| other.contains_item(value))
    }
}

impl<T, S, O> SetRelation<O> for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
    O: Iterable<Value = T> + Contains<T> + ?Sized,
{
    fn is_superset_of(&self, other: &O) -> bool {
        other.items().all(|item| self.contains(O::view(&item)))
    }

    fn is_subset_of(&self, other: &O) -> bool {
        self.iter().all(|value| other.contains_item(value))
    }
}

impl<O: ?Sized> SetRelation<O> for EmptySet {
    #[inline]
    fn is_superset_of(&self, _other: &O) -> bool {
        false
    }

    #[inline]
    fn is_subset_of(&self, _other: &O) -> bool {
        true
    }
}

/// `set.issuperset(other)`
#[inline]
pub fn issuperset<A, O>(set: &A, other: &O) -> bool
where
    A: SetRelation<O> + ?Sized,
    O: ?Sized,
{
    log_builtin_call("issuperset");
    set.is_superset_of(other)
}

/// `set.issubset(other)`
#[inline]
pub fn issubset<A, O>(set: &A, other: &O) -> bool
where
    A: SetRelation<O> + ?Sized,
    O: ?Sized,
{
    log_builtin_call("issubset");
    set.is_subset_of(other)
}
