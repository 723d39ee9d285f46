//! First-class built-ins
//!
//! Plain function values for built-ins that are passed as arguments, e.g.
//! `reduce(functor::max, &v)` or `map(functor::str, &xs)`. Where a built-in
//! is variadic, its functor is the binary form.

pub use crate::builtins::{
    abs, all, any, bin, chr, cmp, complex, contains, divmod, filter, hex, id, len, list, map,
    oct, pow, range, reduce, round, set, sorted, str, sum, tuple, xrange, zip,
};

pub use crate::builtins::{max2 as max, min2 as min};
