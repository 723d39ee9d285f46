//! Integer ranges - lazy `xrange` and materialized `range`
//!
//! Design: `XRange` stores `(begin, end, step)` and derives its end position
//! arithmetically, so length, indexing and membership are all O(1).
//! Iteration and reverse iteration visit exactly the values of the
//! arithmetic progression that lie strictly before `end`.

use super::traits::{DoubleEndedIterable, Iterable, RandomAccessIterable, RandomAccessTag};
use super::truth::Truthy;
use crate::error::{BuiltinError, Result};
use crate::logging::{log_builtin_call, log_materialize};
use std::iter::{FusedIterator, Rev};

/// Lazy arithmetic progression of `i64` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XRange {
    begin: i64,
    end: i64,
    step: i64,
}

impl XRange {
    /// Create new range. Panics when `step` is zero.
    #[inline]
    pub fn new(begin: i64, end: i64, step: i64) -> Self {
        Self::try_new(begin, end, step).unwrap_or_else(|err| err.raise())
    }

    #[inline]
    pub fn try_new(begin: i64, end: i64, step: i64) -> Result<Self> {
        if step == 0 {
            return Err(BuiltinError::ZeroStep);
        }
        Ok(Self { begin, end, step })
    }

    #[inline]
    pub const fn start(&self) -> i64 {
        self.begin
    }

    /// The exclusive bound as given, not the computed end position
    #[inline]
    pub const fn stop(&self) -> i64 {
        self.end
    }

    #[inline]
    pub const fn step(&self) -> i64 {
        self.step
    }

    /// Value held by the end position: the first term of the progression
    /// at or past `end`, or `begin` when the range is empty
    ///
    /// Widened to `i128` since it may lie one step outside `i64`.
    #[inline]
    pub const fn end_value(&self) -> i128 {
        self.begin as i128 + self.count() as i128 * self.step as i128
    }

    /// Number of terms, exact over the whole `i64` domain
    #[inline]
    pub const fn count(&self) -> u64 {
        let (begin, end, step) = (self.begin as i128, self.end as i128, self.step as i128);
        let count = if step > 0 && end > begin {
            (end - begin + step - 1) / step
        } else if step < 0 && end < begin {
            (begin - end - step - 1) / -step
        } else {
            0
        };
        count as u64
    }

    /// Number of terms, saturating at `i64::MAX`
    #[inline]
    pub const fn len(&self) -> i64 {
        let count = self.count();
        if count > i64::MAX as u64 {
            i64::MAX
        } else {
            count as i64
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Element at `index`, if it lies inside the range
    #[inline]
    pub fn get(&self, index: i64) -> Option<i64> {
        if (0..self.len()).contains(&index) {
            Some(offset(self.begin, index as u64, self.step))
        } else {
            None
        }
    }

    /// Arithmetic membership test
    pub fn contains_value(&self, value: i64) -> bool {
        let in_bounds = if self.step > 0 {
            value >= self.begin && value < self.end
        } else {
            value <= self.begin && value > self.end
        };
        in_bounds && (value as i128 - self.begin as i128) % self.step as i128 == 0
    }

    #[inline]
    pub fn iter(&self) -> XRangeIter {
        XRangeIter {
            front: self.begin,
            remaining: self.count(),
            step: self.step,
        }
    }
}

// The term `n` steps past `begin`; exact whenever that term fits in `i64`
#[inline]
fn offset(begin: i64, n: u64, step: i64) -> i64 {
    begin.wrapping_add((n as i64).wrapping_mul(step))
}

/// Cursor over an `XRange`
///
/// `front` is the next value yielded forward and `remaining` the number of
/// terms left between both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XRangeIter {
    front: i64,
    remaining: u64,
    step: i64,
}

impl Iterator for XRangeIter {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let val = self.front;
        self.remaining -= 1;
        self.front = self.front.wrapping_add(self.step);
        Some(val)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (len, Some(len))
    }

    /// Advance by `n` positions in O(1)
    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let skip = (n as u64).min(self.remaining);
        self.front = offset(self.front, skip, self.step);
        self.remaining -= skip;
        self.next()
    }
}

impl ExactSizeIterator for XRangeIter {}

impl FusedIterator for XRangeIter {}

impl DoubleEndedIterator for XRangeIter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(offset(self.front, self.remaining, self.step))
    }
}

impl Iterable for XRange {
    type Value = i64;
    type Category = RandomAccessTag;
    type Ref<'a> = i64;
    type Iter<'a> = XRangeIter;

    #[inline]
    fn items(&self) -> XRangeIter {
        self.iter()
    }
}

impl DoubleEndedIterable for XRange {
    type RevIter<'a> = Rev<XRangeIter>;

    #[inline]
    fn rev_items(&self) -> Rev<XRangeIter> {
        self.iter().rev()
    }
}

impl RandomAccessIterable for XRange {
    #[inline]
    fn distance(&self) -> i64 {
        self.len()
    }

    #[inline]
    fn at(&self, index: i64) -> i64 {
        self.get(index)
            .unwrap_or_else(|| panic!("xrange object index {} out of range", index))
    }
}

impl IntoIterator for XRange {
    type Item = i64;
    type IntoIter = XRangeIter;

    #[inline]
    fn into_iter(self) -> XRangeIter {
        self.iter()
    }
}

impl IntoIterator for &XRange {
    type Item = i64;
    type IntoIter = XRangeIter;

    #[inline]
    fn into_iter(self) -> XRangeIter {
        self.iter()
    }
}

impl Truthy for XRange {
    #[inline]
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

/// Accepted argument shapes: `stop`, `(start, stop)` or `(start, stop, step)`
pub trait XRangeArgs {
    fn into_xrange(self) -> Result<XRange>;
}

impl XRangeArgs for i64 {
    #[inline]
    fn into_xrange(self) -> Result<XRange> {
        XRange::try_new(0, self, 1)
    }
}

impl XRangeArgs for (i64, i64) {
    #[inline]
    fn into_xrange(self) -> Result<XRange> {
        XRange::try_new(self.0, self.1, 1)
    }
}

impl XRangeArgs for (i64, i64, i64) {
    #[inline]
    fn into_xrange(self) -> Result<XRange> {
        XRange::try_new(self.0, self.1, self.2)
    }
}

/// Lazy range. Panics when the step is zero.
#[inline]
pub fn xrange<A: XRangeArgs>(args: A) -> XRange {
    args.into_xrange().unwrap_or_else(|err| err.raise())
}

#[inline]
pub fn try_xrange<A: XRangeArgs>(args: A) -> Result<XRange> {
    args.into_xrange()
}

/// Materialized range
pub fn range<A: XRangeArgs>(args: A) -> Vec<i64> {
    log_builtin_call("range");
    let xr = xrange(args);
    log_materialize("range", xr.len());
    xr.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_value() {
        assert_eq!(XRange::new(0, 10, 3).end_value(), 12);
        assert_eq!(XRange::new(10, 0, -3).end_value(), -2);
        assert_eq!(XRange::new(5, 0, 1).end_value(), 5);
        assert_eq!(XRange::new(0, 5, -1).end_value(), 0);
    }

    #[test]
    fn test_bounds_near_i64_limits() {
        let top = xrange((i64::MAX - 5, i64::MAX, 10));
        assert_eq!(top.len(), 1);
        assert_eq!(range((i64::MAX - 5, i64::MAX, 10)), vec![i64::MAX - 5]);
        assert_eq!(top.iter().rev().collect::<Vec<_>>(), vec![i64::MAX - 5]);
        assert!(top.contains_value(i64::MAX - 5));
        assert!(!top.contains_value(i64::MIN));

        let bottom = xrange((i64::MIN + 2, i64::MIN, -3));
        assert_eq!(bottom.iter().collect::<Vec<_>>(), vec![i64::MIN + 2]);
        assert_eq!(bottom.end_value(), i64::MIN as i128 - 1);

        let wide = xrange((i64::MIN, i64::MAX, i64::MAX));
        assert_eq!(wide.iter().collect::<Vec<_>>(), vec![i64::MIN, -1, i64::MAX - 1]);
        assert_eq!(wide.iter().rev().next(), Some(i64::MAX - 1));
        assert!(wide.contains_value(-1));
        assert_eq!(wide.get(2), Some(i64::MAX - 1));
    }

    #[test]
    fn test_len_saturates_on_full_domain() {
        let full = xrange((i64::MIN, i64::MAX));
        assert_eq!(full.count(), u64::MAX);
        assert_eq!(full.len(), i64::MAX);
        assert_eq!(full.iter().nth(3), Some(i64::MIN + 3));
        assert_eq!(full.iter().next_back(), Some(i64::MAX - 1));
    }

    #[test]
    fn test_nth_advances_in_place() {
        let mut it = xrange(10).iter();
        assert_eq!(it.nth(3), Some(3));
        assert_eq!(it.next(), Some(4));
        assert_eq!(it.nth(100), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_get_and_at() {
        let xr = xrange((1, 10, 4));
        assert_eq!(xr.get(0), Some(1));
        assert_eq!(xr.get(2), Some(9));
        assert_eq!(xr.get(3), None);
        assert_eq!(xr.get(-1), None);
        assert_eq!(xr.at(1), 5);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_at_out_of_range() {
        xrange(3).at(3);
    }

    #[test]
    fn test_zero_step() {
        assert!(matches!(try_xrange((0, 5, 0)), Err(BuiltinError::ZeroStep)));
    }

    #[test]
    fn test_truthiness() {
        assert!(xrange(1).truthy());
        assert!(!xrange((3, 3)).truthy());
    }

    #[test]
    fn test_for_loop() {
        let mut seen = Vec::new();
        for x in xrange((0, 6, 2)) {
            seen.push(x);
        }
        assert_eq!(seen, vec![0, 2, 4]);
    }
}
