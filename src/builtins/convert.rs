//! Conversions - `list`, `tuple`, `set` and `sorted`
//!
//! Design: Called with `()` these return the empty sentinels `EmptyList` /
//! `EmptySet`, which carry no element type and convert into any concrete
//! list or set. Called with a borrowed iterable they materialize an owned
//! copy, pre-sizing lists whenever the source length is known in O(1).

use super::len::HasLen;
use super::reserve::reserve;
use super::traits::{DoubleEndedIterable, Iterable, RandomAccessIterable, RandomAccessTag};
use super::truth::Truthy;
use crate::logging::{log_builtin_call, log_materialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::iter::Empty;

/// The empty list, before any element type is known
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EmptyList;

/// The empty set, before any element type is known
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EmptySet;

impl<T> From<EmptyList> for Vec<T> {
    #[inline]
    fn from(_: EmptyList) -> Self {
        Vec::new()
    }
}

impl<T> From<EmptySet> for BTreeSet<T> {
    #[inline]
    fn from(_: EmptySet) -> Self {
        BTreeSet::new()
    }
}

impl<T> PartialEq<Vec<T>> for EmptyList {
    #[inline]
    fn eq(&self, other: &Vec<T>) -> bool {
        other.is_empty()
    }
}

impl<T> PartialEq<EmptyList> for Vec<T> {
    #[inline]
    fn eq(&self, _: &EmptyList) -> bool {
        self.is_empty()
    }
}

impl<T> PartialEq<BTreeSet<T>> for EmptySet {
    #[inline]
    fn eq(&self, other: &BTreeSet<T>) -> bool {
        other.is_empty()
    }
}

impl<T> PartialEq<EmptySet> for BTreeSet<T> {
    #[inline]
    fn eq(&self, _: &EmptySet) -> bool {
        self.is_empty()
    }
}

macro_rules! empty_sequence {
    ($ty:ident) => {
        impl Iterable for $ty {
            type Value = Infallible;
            type Category = RandomAccessTag;
            type Ref<'a> = Infallible;
            type Iter<'a> = Empty<Infallible>;

            #[inline]
            fn items(&self) -> Empty<Infallible> {
                std::iter::empty()
            }
        }

        impl DoubleEndedIterable for $ty {
            type RevIter<'a> = Empty<Infallible>;

            #[inline]
            fn rev_items(&self) -> Empty<Infallible> {
                std::iter::empty()
            }
        }

        impl RandomAccessIterable for $ty {
            #[inline]
            fn distance(&self) -> i64 {
                0
            }

            fn at(&self, index: i64) -> Infallible {
                panic!("{} index {} out of range", stringify!($ty), index)
            }
        }

        impl Truthy for $ty {
            #[inline]
            fn truthy(&self) -> bool {
                false
            }
        }
    };
}

empty_sequence!(EmptyList);
empty_sequence!(EmptySet);

/// Copy every element of `seq` into a fresh list
pub(crate) fn collect_list<S>(seq: &S) -> Vec<S::Value>
where
    S: Iterable + HasLen + ?Sized,
    S::Value: Clone,
{
    let mut out: Vec<S::Value> = Vec::new();
    reserve(&mut out, seq);
    out.extend(seq.items().map(|item| S::owned(item)));
    log_materialize("list", out.len() as i64);
    out
}

/// Argument accepted by `list` and `tuple`
pub trait ListArg {
    type Output;

    fn into_list(self) -> Self::Output;
}

impl ListArg for () {
    type Output = EmptyList;

    #[inline]
    fn into_list(self) -> EmptyList {
        EmptyList
    }
}

impl<S> ListArg for &S
where
    S: Iterable + HasLen + ?Sized,
    S::Value: Clone,
{
    type Output = Vec<S::Value>;

    #[inline]
    fn into_list(self) -> Vec<S::Value> {
        collect_list(self)
    }
}

/// Argument accepted by `set`
pub trait SetArg {
    type Output;

    fn into_set(self) -> Self::Output;
}

impl SetArg for () {
    type Output = EmptySet;

    #[inline]
    fn into_set(self) -> EmptySet {
        EmptySet
    }
}

impl<S> SetArg for &S
where
    S: Iterable + ?Sized,
    S::Value: Ord + Clone,
{
    type Output = BTreeSet<S::Value>;

    #[inline]
    fn into_set(self) -> BTreeSet<S::Value> {
        self.items().map(|item| S::owned(item)).collect()
    }
}

/// `list()` or `list(iterable)`
#[inline]
pub fn list<A: ListArg>(arg: A) -> A::Output {
    log_builtin_call("list");
    arg.into_list()
}

/// `tuple()` or `tuple(iterable)`; tuples share the list representation
#[inline]
pub fn tuple<A: ListArg>(arg: A) -> A::Output {
    log_builtin_call("tuple");
    arg.into_list()
}

/// `set()` or `set(iterable)`
#[inline]
pub fn set<A: SetArg>(arg: A) -> A::Output {
    log_builtin_call("set");
    arg.into_set()
}

/// Result of a user comparator: an `Ordering`, or a signed integer whose
/// sign gives the order
pub trait IntoOrdering {
    fn into_ordering(self) -> Ordering;
}

impl IntoOrdering for Ordering {
    #[inline]
    fn into_ordering(self) -> Ordering {
        self
    }
}

macro_rules! signed_ordering {
    ($($t:ty),*) => {
        $(
            impl IntoOrdering for $t {
                #[inline]
                fn into_ordering(self) -> Ordering {
                    self.cmp(&0)
                }
            }
        )*
    };
}

signed_ordering!(i8, i16, i32, i64, isize);

/// Sorted copy of `seq`, ascending and stable
///
/// Incomparable pairs (such as NaN) are treated as equal.
pub fn sorted<S>(seq: &S) -> Vec<S::Value>
where
    S: Iterable + HasLen + ?Sized,
    S::Value: PartialOrd + Clone,
{
    log_builtin_call("sorted");
    let mut out = collect_list(seq);
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    out
}

/// Sorted copy of `seq` under a user comparator
///
/// The comparator must describe a strict weak ordering.
pub fn sorted_by<S, F, O>(seq: &S, mut compare: F) -> Vec<S::Value>
where
    S: Iterable + HasLen + ?Sized,
    S::Value: Clone,
    F: FnMut(&S::Value, &S::Value) -> O,
    O: IntoOrdering,
{
    log_builtin_call("sorted");
    let mut out = collect_list(seq);
    out.sort_by(|a, b| compare(a, b).into_ordering());
    out
}

/// Sorted copy of `seq`, ordered by a derived key
pub fn sorted_by_key<S, F, K>(seq: &S, mut key: F) -> Vec<S::Value>
where
    S: Iterable + HasLen + ?Sized,
    S::Value: Clone,
    F: FnMut(&S::Value) -> K,
    K: PartialOrd,
{
    log_builtin_call("sorted");
    let mut out = collect_list(seq);
    out.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal));
    out
}
