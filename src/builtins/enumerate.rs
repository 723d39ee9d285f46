//! Indexed traversal - `enumerate`
//!
//! `enumerate` snapshots its argument into an owned list, so the result
//! stays valid independently of the source.

use super::convert::collect_list;
use super::len::HasLen;
use super::traits::{DoubleEndedIterable, Iterable, RandomAccessIterable, RandomAccessTag};
use crate::logging::log_builtin_call;
use std::cmp::Ordering;
use std::iter::{FusedIterator, Rev};
use std::slice;

/// Owned snapshot yielding `(index, element)` pairs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Enumerate<T> {
    seq: Vec<T>,
}

impl<T> Enumerate<T> {
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.seq
    }

    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.seq
    }

    #[inline]
    pub fn iter(&self) -> EnumerateIter<'_, T> {
        EnumerateIter {
            index: 0,
            end: self.seq.len() as i64,
            iter: self.seq.iter(),
        }
    }
}

impl<T> From<Vec<T>> for Enumerate<T> {
    #[inline]
    fn from(seq: Vec<T>) -> Self {
        Self { seq }
    }
}

/// Cursor pairing a position with the element there
///
/// Cursors compare by position alone.
#[derive(Debug, Clone)]
pub struct EnumerateIter<'a, T> {
    index: i64,
    end: i64,
    iter: slice::Iter<'a, T>,
}

impl<T> EnumerateIter<'_, T> {
    /// Position of the next element yielded forward
    #[inline]
    pub fn position(&self) -> i64 {
        self.index
    }
}

impl<T: Clone> Iterator for EnumerateIter<'_, T> {
    type Item = (i64, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, item.clone()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let skip = n.min(self.iter.len());
        self.index += skip as i64;
        if skip > 0 {
            self.iter.nth(skip - 1);
        }
        self.next()
    }
}

impl<T: Clone> DoubleEndedIterator for EnumerateIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.iter.next_back()?;
        self.end -= 1;
        Some((self.end, item.clone()))
    }
}

impl<T: Clone> ExactSizeIterator for EnumerateIter<'_, T> {}

impl<T: Clone> FusedIterator for EnumerateIter<'_, T> {}

impl<T> PartialEq for EnumerateIter<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for EnumerateIter<'_, T> {}

impl<T> PartialOrd for EnumerateIter<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.index.cmp(&other.index))
    }
}

impl<T> Ord for EnumerateIter<'_, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<T: Clone> Iterable for Enumerate<T> {
    type Value = (i64, T);
    type Category = RandomAccessTag;
    type Ref<'a> = (i64, T) where Self: 'a;
    type Iter<'a> = EnumerateIter<'a, T> where Self: 'a;

    #[inline]
    fn items(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T: Clone> DoubleEndedIterable for Enumerate<T> {
    type RevIter<'a> = Rev<EnumerateIter<'a, T>> where Self: 'a;

    #[inline]
    fn rev_items(&self) -> Self::RevIter<'_> {
        self.iter().rev()
    }
}

impl<T: Clone> RandomAccessIterable for Enumerate<T> {
    #[inline]
    fn distance(&self) -> i64 {
        self.seq.len() as i64
    }

    #[inline]
    fn at(&self, index: i64) -> (i64, T) {
        (index, self.seq.as_slice().at(index).clone())
    }
}

impl<'a, T: Clone> IntoIterator for &'a Enumerate<T> {
    type Item = (i64, T);
    type IntoIter = EnumerateIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pair every element of `seq` with its position, starting at 0
pub fn enumerate<S>(seq: &S) -> Enumerate<S::Value>
where
    S: Iterable + HasLen + ?Sized,
    S::Value: Clone,
{
    log_builtin_call("enumerate");
    Enumerate::from(collect_list(seq))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs() {
        let e = enumerate(&vec!['a', 'b', 'c']);
        let pairs: Vec<_> = e.iter().collect();
        assert_eq!(pairs, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
    }

    #[test]
    fn test_reverse_keeps_indices() {
        let e = enumerate(&vec![10, 20, 30]);
        let pairs: Vec<_> = e.iter().rev().collect();
        assert_eq!(pairs, vec![(2, 30), (1, 20), (0, 10)]);
    }

    #[test]
    fn test_nth_and_position() {
        let e = enumerate("abcd");
        let mut it = e.iter();
        assert_eq!(it.nth(2), Some((2, b'c')));
        assert_eq!(it.position(), 3);
        assert_eq!(it.nth(5), None);
    }

    #[test]
    fn test_cursor_equality_by_index() {
        let a = enumerate(&vec![1, 2]);
        let b = enumerate(&vec![7, 8, 9]);
        let mut ia = a.iter();
        let mut ib = b.iter();
        assert!(ia == ib);
        ia.next();
        assert!(ia > ib);
        ib.next();
        assert!(ia == ib);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut source = vec![1, 2];
        let e = enumerate(&source);
        source.push(3);
        assert_eq!(e.distance(), 2);
        assert_eq!(e.at(1), (1, 2));
    }
}
