//! Iterator-category traits - the container contract consumed by the built-ins
//!
//! Design: every traversable value implements `Iterable` and names its
//! iterator category as an associated marker type. Capabilities layer on top:
//! - `DoubleEndedIterable` for reverse traversal (`reversed`)
//! - `RandomAccessIterable` for O(1) distance and indexing
//! - `SizedIterable` for containers that know their size without being indexable
//!
//! Built-ins such as `len` and `reserve` select their strategy from the
//! category at compile time.

use std::borrow::Borrow;
use std::collections::{btree_set, hash_set, linked_list, vec_deque};
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::iter::Rev;
use std::slice;
use std::str::Bytes;

/// Marker for an iterator category
pub trait IteratorCategory {
    const NAME: &'static str;
}

/// Single-pass forward traversal; length requires a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardTag;

/// Forward and reverse traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidirectionalTag;

/// O(1) advance by `n` and O(1) distance between positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomAccessTag;

impl IteratorCategory for ForwardTag {
    const NAME: &'static str = "forward";
}

impl IteratorCategory for BidirectionalTag {
    const NAME: &'static str = "bidirectional";
}

impl IteratorCategory for RandomAccessTag {
    const NAME: &'static str = "random_access";
}

/// A value exposing forward traversal over elements of type `Value`
///
/// `Ref<'a>` is what traversal yields: a borrow (`&T`) for owning
/// containers, or the value itself for generated sequences such as `xrange`.
pub trait Iterable {
    type Value;
    type Category: IteratorCategory;
    type Ref<'a>: Borrow<Self::Value>
    where
        Self: 'a;
    type Iter<'a>: Iterator<Item = Self::Ref<'a>>
    where
        Self: 'a;

    fn items(&self) -> Self::Iter<'_>;

    /// Borrow the element behind a yielded item
    #[inline]
    fn view<'r, 'a>(item: &'r Self::Ref<'a>) -> &'r Self::Value
    where
        Self: 'a,
    {
        <Self::Ref<'a> as Borrow<Self::Value>>::borrow(item)
    }

    /// Copy a yielded item out as an owned element
    #[inline]
    fn owned<'a>(item: Self::Ref<'a>) -> Self::Value
    where
        Self: 'a,
        Self::Value: Clone,
    {
        Self::view(&item).clone()
    }
}

/// Reverse traversal (`rbegin`/`rend`)
pub trait DoubleEndedIterable: Iterable {
    type RevIter<'a>: Iterator<Item = Self::Ref<'a>>
    where
        Self: 'a;

    fn rev_items(&self) -> Self::RevIter<'_>;
}

/// O(1) distance and indexing
pub trait RandomAccessIterable: DoubleEndedIterable {
    /// Distance from the first position to the end position
    fn distance(&self) -> i64;

    /// Element at `index`, counted from the front. Panics when out of range.
    fn at(&self, index: i64) -> Self::Ref<'_>;
}

/// Native O(1) element count for non-indexable containers
pub trait SizedIterable: Iterable {
    fn size(&self) -> usize;
}

#[inline]
pub(crate) fn to_index(index: i64) -> usize {
    usize::try_from(index).unwrap_or_else(|_| panic!("index {} out of range", index))
}

/// Clamp a length to a capacity request; negative lengths request nothing
#[inline]
pub(crate) fn to_capacity(len: i64) -> usize {
    usize::try_from(len).unwrap_or(0)
}

// Contiguous sequences

impl<T> Iterable for [T] {
    type Value = T;
    type Category = RandomAccessTag;
    type Ref<'a> = &'a T where Self: 'a;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;

    #[inline]
    fn items(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> DoubleEndedIterable for [T] {
    type RevIter<'a> = Rev<slice::Iter<'a, T>> where Self: 'a;

    #[inline]
    fn rev_items(&self) -> Self::RevIter<'_> {
        self.iter().rev()
    }
}

impl<T> RandomAccessIterable for [T] {
    #[inline]
    fn distance(&self) -> i64 {
        self.len() as i64
    }

    #[inline]
    fn at(&self, index: i64) -> Self::Ref<'_> {
        &self[to_index(index)]
    }
}

macro_rules! slice_backed {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> Iterable for $ty {
            type Value = T;
            type Category = RandomAccessTag;
            type Ref<'a> = &'a T where Self: 'a;
            type Iter<'a> = slice::Iter<'a, T> where Self: 'a;

            #[inline]
            fn items(&self) -> Self::Iter<'_> {
                self.as_slice().iter()
            }
        }

        impl<$($gen)*> DoubleEndedIterable for $ty {
            type RevIter<'a> = Rev<slice::Iter<'a, T>> where Self: 'a;

            #[inline]
            fn rev_items(&self) -> Self::RevIter<'_> {
                self.as_slice().iter().rev()
            }
        }

        impl<$($gen)*> RandomAccessIterable for $ty {
            #[inline]
            fn distance(&self) -> i64 {
                self.as_slice().len() as i64
            }

            #[inline]
            fn at(&self, index: i64) -> Self::Ref<'_> {
                &self.as_slice()[to_index(index)]
            }
        }
    };
}

slice_backed!([T] Vec<T>);
slice_backed!([T, const N: usize] [T; N]);

impl<T> Iterable for VecDeque<T> {
    type Value = T;
    type Category = RandomAccessTag;
    type Ref<'a> = &'a T where Self: 'a;
    type Iter<'a> = vec_deque::Iter<'a, T> where Self: 'a;

    #[inline]
    fn items(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> DoubleEndedIterable for VecDeque<T> {
    type RevIter<'a> = Rev<vec_deque::Iter<'a, T>> where Self: 'a;

    #[inline]
    fn rev_items(&self) -> Self::RevIter<'_> {
        self.iter().rev()
    }
}

impl<T> RandomAccessIterable for VecDeque<T> {
    #[inline]
    fn distance(&self) -> i64 {
        self.len() as i64
    }

    #[inline]
    fn at(&self, index: i64) -> Self::Ref<'_> {
        &self[to_index(index)]
    }
}

// Byte strings: the emulated language's `str` is a sequence of bytes

impl Iterable for str {
    type Value = u8;
    type Category = RandomAccessTag;
    type Ref<'a> = u8;
    type Iter<'a> = Bytes<'a>;

    #[inline]
    fn items(&self) -> Self::Iter<'_> {
        self.bytes()
    }
}

impl DoubleEndedIterable for str {
    type RevIter<'a> = Rev<Bytes<'a>>;

    #[inline]
    fn rev_items(&self) -> Self::RevIter<'_> {
        self.bytes().rev()
    }
}

impl RandomAccessIterable for str {
    #[inline]
    fn distance(&self) -> i64 {
        self.len() as i64
    }

    #[inline]
    fn at(&self, index: i64) -> u8 {
        self.as_bytes()[to_index(index)]
    }
}

impl Iterable for String {
    type Value = u8;
    type Category = RandomAccessTag;
    type Ref<'a> = u8;
    type Iter<'a> = Bytes<'a>;

    #[inline]
    fn items(&self) -> Self::Iter<'_> {
        self.as_str().bytes()
    }
}

impl DoubleEndedIterable for String {
    type RevIter<'a> = Rev<Bytes<'a>>;

    #[inline]
    fn rev_items(&self) -> Self::RevIter<'_> {
        self.as_str().bytes().rev()
    }
}

impl RandomAccessIterable for String {
    #[inline]
    fn distance(&self) -> i64 {
        self.len() as i64
    }

    #[inline]
    fn at(&self, index: i64) -> u8 {
        self.as_bytes()[to_index(index)]
    }
}

// Node-based containers

impl<T> Iterable for LinkedList<T> {
    type Value = T;
    type Category = BidirectionalTag;
    type Ref<'a> = &'a T where Self: 'a;
    type Iter<'a> = linked_list::Iter<'a, T> where Self: 'a;

    #[inline]
    fn items(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> DoubleEndedIterable for LinkedList<T> {
    type RevIter<'a> = Rev<linked_list::Iter<'a, T>> where Self: 'a;

    #[inline]
    fn rev_items(&self) -> Self::RevIter<'_> {
        self.iter().rev()
    }
}

impl<T> SizedIterable for LinkedList<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Iterable for BTreeSet<T> {
    type Value = T;
    type Category = BidirectionalTag;
    type Ref<'a> = &'a T where Self: 'a;
    type Iter<'a> = btree_set::Iter<'a, T> where Self: 'a;

    #[inline]
    fn items(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> DoubleEndedIterable for BTreeSet<T> {
    type RevIter<'a> = Rev<btree_set::Iter<'a, T>> where Self: 'a;

    #[inline]
    fn rev_items(&self) -> Self::RevIter<'_> {
        self.iter().rev()
    }
}

impl<T> SizedIterable for BTreeSet<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

/// Hash sets only promise forward traversal in unspecified order
impl<T, S> Iterable for HashSet<T, S> {
    type Value = T;
    type Category = ForwardTag;
    type Ref<'a> = &'a T where Self: 'a;
    type Iter<'a> = hash_set::Iter<'a, T> where Self: 'a;

    #[inline]
    fn items(&self) -> Self::Iter<'_> {
        self.iter()
    }
}
