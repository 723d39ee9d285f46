//! Capacity hints - `reserve`
//!
//! Pre-sizes a destination list from a source whose length is known in O(1).
//! Every other destination/source pairing is a no-op.

use super::len::HasLen;
use super::traits::to_capacity;
use std::collections::{BTreeSet, HashSet};

/// Destinations that may accept a capacity hint
pub trait Reservable {
    /// Make room for at least `total` elements overall
    fn reserve_total(&mut self, total: usize);
}

impl<T> Reservable for Vec<T> {
    #[inline]
    fn reserve_total(&mut self, total: usize) {
        self.reserve(total.saturating_sub(self.len()));
    }
}

impl<T> Reservable for BTreeSet<T> {
    #[inline]
    fn reserve_total(&mut self, _total: usize) {}
}

impl<T, S> Reservable for HashSet<T, S> {
    #[inline]
    fn reserve_total(&mut self, _total: usize) {}
}

/// Pre-size `dst` to `len(src)` when that length is cheap to obtain
#[inline]
pub fn reserve<D, S>(dst: &mut D, src: &S)
where
    D: Reservable + ?Sized,
    S: HasLen + ?Sized,
{
    if let Some(len) = src.len_hint() {
        dst.reserve_total(to_capacity(len));
    }
}
