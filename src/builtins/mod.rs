//! Built-in functions - Python built-ins over statically typed containers
//!
//! Design: Every built-in is a generic function resolved at compile time.
//! Containers plug in through the category traits in `traits`; each builtin
//! lives in a focused module and is re-exported here.

mod aggregate;
mod convert;
mod enumerate;
mod functional;
mod iter;
mod len;
mod membership;
mod reserve;
mod reversed;
mod scalar;
mod set_ops;
mod traits;
mod truth;

#[cfg(test)]
mod tests;

pub use aggregate::{
    all, any, max, max2, min, min2, reduce, reduce_with, sum, sum_with, try_max, try_min,
    try_reduce, Aggregate, Extremum, Max, Min, Promote,
};
pub use convert::{
    list, set, sorted, sorted_by, sorted_by_key, tuple, EmptyList, EmptySet, IntoOrdering,
    ListArg, SetArg,
};
pub use enumerate::{enumerate, Enumerate, EnumerateIter};
pub use functional::{filter, filter_truthy, map, zip, Lockstep, MapSources, Zip};
pub use iter::{range, try_xrange, xrange, XRange, XRangeArgs, XRangeIter};
pub use len::{len, HasLen, LenStrategy};
pub use membership::{contains, Contains};
pub use reserve::{reserve, Reservable};
pub use reversed::{reversed, Reversed};
pub use scalar::{
    abs, bin, chr, cmp, complex, complex_real, divmod, floor_divmod, hex, id, oct, pow, round,
    round_to, str, Abs, Id,
};
pub use set_ops::{issubset, issuperset, SetRelation};
pub use traits::{
    BidirectionalTag, DoubleEndedIterable, ForwardTag, IteratorCategory, Iterable,
    RandomAccessIterable, RandomAccessTag, SizedIterable,
};
pub use truth::Truthy;

use crate::logging::{debug, info};

/// Initialize builtins subsystem
pub fn init() {
    info!("Builtins subsystem initializing");
    debug!(
        categories = ?[ForwardTag::NAME, BidirectionalTag::NAME, RandomAccessTag::NAME],
        "Builtins initialized"
    );
}

/// Cleanup builtins resources
///
/// Built-ins hold no global state; this only marks the shutdown in the log.
pub fn cleanup() {
    debug!("Cleaning up builtins subsystem");
}
