//! Aggregates - `max`, `min`, `sum`, `reduce`, `all`, `any`
//!
//! Design: `max`/`min` accept either a tuple of scalars or a borrowed
//! sequence, dispatched through `Aggregate`. Mixed scalar arguments are
//! combined under the common-type rule of `Promote`: integers widen,
//! integers meet floats as floats. N-ary forms fold right to left.

use super::traits::Iterable;
use super::truth::Truthy;
use crate::error::{BuiltinError, Result};
use crate::logging::log_builtin_call;
use num_traits::Zero;
use std::ops::Add;

/// Common type of `Self` and `Rhs`, with conversions from both sides
pub trait Promote<Rhs = Self> {
    type Output;

    fn promote(self) -> Self::Output;

    fn promote_rhs(rhs: Rhs) -> Self::Output;
}

impl<T> Promote<T> for T {
    type Output = T;

    #[inline]
    fn promote(self) -> T {
        self
    }

    #[inline]
    fn promote_rhs(rhs: T) -> T {
        rhs
    }
}

macro_rules! promote {
    ($($lhs:ty, $rhs:ty => $out:ty;)*) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn promote(self) -> $out {
                    self as $out
                }

                #[inline]
                fn promote_rhs(rhs: $rhs) -> $out {
                    rhs as $out
                }
            }

            impl Promote<$lhs> for $rhs {
                type Output = $out;

                #[inline]
                fn promote(self) -> $out {
                    self as $out
                }

                #[inline]
                fn promote_rhs(rhs: $lhs) -> $out {
                    rhs as $out
                }
            }
        )*
    };
}

promote! {
    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i16, i32 => i32;
    i16, i64 => i64;
    i32, i64 => i64;

    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;
    u16, u32 => u32;
    u16, u64 => u64;
    u32, u64 => u64;

    u8, i16 => i16;
    u8, i32 => i32;
    u8, i64 => i64;
    u16, i32 => i32;
    u16, i64 => i64;
    u32, i64 => i64;

    i8, f32 => f32;
    i16, f32 => f32;
    i32, f32 => f32;
    i64, f32 => f32;
    u8, f32 => f32;
    u16, f32 => f32;
    u32, f32 => f32;
    u64, f32 => f32;

    i8, f64 => f64;
    i16, f64 => f64;
    i32, f64 => f64;
    i64, f64 => f64;
    u8, f64 => f64;
    u16, f64 => f64;
    u32, f64 => f64;
    u64, f64 => f64;
    f32, f64 => f64;
}

/// Selection rule shared by `max` and `min`
pub trait Extremum {
    const NAME: &'static str;

    /// Choose between two operands of the common type
    fn pick<T: PartialOrd>(first: T, second: T) -> T;

    /// Whether `candidate` displaces `best` during a sequence scan
    fn replaces<T: PartialOrd + ?Sized>(candidate: &T, best: &T) -> bool;
}

/// Largest element; ties keep the earlier operand
#[derive(Debug, Clone, Copy)]
pub struct Max;

/// Smallest element; binary ties keep the later operand
#[derive(Debug, Clone, Copy)]
pub struct Min;

impl Extremum for Max {
    const NAME: &'static str = "max";

    #[inline]
    fn pick<T: PartialOrd>(first: T, second: T) -> T {
        if second > first {
            second
        } else {
            first
        }
    }

    #[inline]
    fn replaces<T: PartialOrd + ?Sized>(candidate: &T, best: &T) -> bool {
        candidate > best
    }
}

impl Extremum for Min {
    const NAME: &'static str = "min";

    #[inline]
    fn pick<T: PartialOrd>(first: T, second: T) -> T {
        if first < second {
            first
        } else {
            second
        }
    }

    #[inline]
    fn replaces<T: PartialOrd + ?Sized>(candidate: &T, best: &T) -> bool {
        candidate < best
    }
}

/// Argument packs reducible under `Op`
///
/// Returns `None` only for an empty sequence.
pub trait Aggregate<Op> {
    type Output;

    fn aggregate(self) -> Option<Self::Output>;
}

impl<Op, A> Aggregate<Op> for (A,) {
    type Output = A;

    #[inline]
    fn aggregate(self) -> Option<A> {
        Some(self.0)
    }
}

impl<Op, A, B> Aggregate<Op> for (A, B)
where
    Op: Extremum,
    A: Promote<B>,
    A::Output: PartialOrd,
{
    type Output = A::Output;

    #[inline]
    fn aggregate(self) -> Option<A::Output> {
        Some(Op::pick(
            <A as Promote<B>>::promote(self.0),
            <A as Promote<B>>::promote_rhs(self.1),
        ))
    }
}

// (a, b, c, ..) reduces as (a, (b, (c, ..)))
macro_rules! aggregate_tuple {
    ($A:ident $a:ident, $($R:ident $r:ident),+) => {
        impl<Op, $A, $($R),+> Aggregate<Op> for ($A, $($R),+)
        where
            ($($R,)+): Aggregate<Op>,
            ($A, <($($R,)+) as Aggregate<Op>>::Output): Aggregate<Op>,
        {
            type Output = <($A, <($($R,)+) as Aggregate<Op>>::Output) as Aggregate<Op>>::Output;

            #[inline]
            fn aggregate(self) -> Option<Self::Output> {
                let ($a, $($r),+) = self;
                let rest = ($($r,)+).aggregate()?;
                ($a, rest).aggregate()
            }
        }
    };
}

aggregate_tuple!(A a, B b, C c);
aggregate_tuple!(A a, B b, C c, D d);
aggregate_tuple!(A a, B b, C c, D d, E e);
aggregate_tuple!(A a, B b, C c, D d, E e, F f);

/// Sequence scan; the first extreme element wins
impl<Op, S> Aggregate<Op> for &S
where
    Op: Extremum,
    S: Iterable + ?Sized,
    S::Value: PartialOrd + Clone,
{
    type Output = S::Value;

    fn aggregate(self) -> Option<S::Value> {
        let mut items = self.items();
        let mut best = items.next()?;
        for item in items {
            if Op::replaces(S::view(&item), S::view(&best)) {
                best = item;
            }
        }
        Some(S::owned(best))
    }
}

#[cold]
#[track_caller]
fn empty_sequence(builtin: &'static str) -> ! {
    BuiltinError::EmptySequence { builtin }.raise()
}

/// `max((a, b, ..))` or `max(&seq)`. Panics on an empty sequence.
#[inline]
#[track_caller]
pub fn max<A: Aggregate<Max>>(args: A) -> A::Output {
    args.aggregate().unwrap_or_else(|| empty_sequence(Max::NAME))
}

#[inline]
pub fn try_max<A: Aggregate<Max>>(args: A) -> Result<A::Output> {
    args.aggregate()
        .ok_or(BuiltinError::EmptySequence { builtin: Max::NAME })
}

/// `min((a, b, ..))` or `min(&seq)`. Panics on an empty sequence.
#[inline]
#[track_caller]
pub fn min<A: Aggregate<Min>>(args: A) -> A::Output {
    args.aggregate().unwrap_or_else(|| empty_sequence(Min::NAME))
}

#[inline]
pub fn try_min<A: Aggregate<Min>>(args: A) -> Result<A::Output> {
    args.aggregate()
        .ok_or(BuiltinError::EmptySequence { builtin: Min::NAME })
}

/// Binary `max` as a plain function, usable as a reducer
#[inline]
pub fn max2<A, B>(a: A, b: B) -> A::Output
where
    A: Promote<B>,
    A::Output: PartialOrd,
{
    Max::pick(<A as Promote<B>>::promote(a), <A as Promote<B>>::promote_rhs(b))
}

/// Binary `min` as a plain function, usable as a reducer
#[inline]
pub fn min2<A, B>(a: A, b: B) -> A::Output
where
    A: Promote<B>,
    A::Output: PartialOrd,
{
    Min::pick(<A as Promote<B>>::promote(a), <A as Promote<B>>::promote_rhs(b))
}

/// Variadic `max!(a, b, ..)`
#[macro_export]
macro_rules! max {
    ($($arg:expr),+ $(,)?) => {
        $crate::builtins::max(($($arg,)+))
    };
}

/// Variadic `min!(a, b, ..)`
#[macro_export]
macro_rules! min {
    ($($arg:expr),+ $(,)?) => {
        $crate::builtins::min(($($arg,)+))
    };
}

/// Sum of `seq`, starting from zero
#[inline]
pub fn sum<S>(seq: &S) -> S::Value
where
    S: Iterable + ?Sized,
    S::Value: Zero + Clone,
{
    sum_with(seq, <S::Value as Zero>::zero())
}

/// Sum of `seq` added onto `start`, in the common type of both
pub fn sum_with<S, T>(seq: &S, start: T) -> T::Output
where
    S: Iterable + ?Sized,
    S::Value: Clone,
    T: Promote<S::Value>,
    T::Output: Add<Output = T::Output>,
{
    log_builtin_call("sum");
    seq.items().fold(<T as Promote<S::Value>>::promote(start), |acc, item| {
        acc + <T as Promote<S::Value>>::promote_rhs(S::owned(item))
    })
}

/// Left fold of `seq` seeded with its first element. Panics when empty.
#[track_caller]
pub fn reduce<S, F>(op: F, seq: &S) -> S::Value
where
    S: Iterable + ?Sized,
    S::Value: Clone,
    F: FnMut(S::Value, S::Value) -> S::Value,
{
    try_reduce(op, seq).unwrap_or_else(|err| err.raise())
}

pub fn try_reduce<S, F>(mut op: F, seq: &S) -> Result<S::Value>
where
    S: Iterable + ?Sized,
    S::Value: Clone,
    F: FnMut(S::Value, S::Value) -> S::Value,
{
    log_builtin_call("reduce");
    let mut items = seq.items();
    let first = items
        .next()
        .ok_or(BuiltinError::EmptySequence { builtin: "reduce" })?;

    Ok(items.fold(S::owned(first), |acc, item| op(acc, S::owned(item))))
}

/// Left fold of `seq` seeded with `init`
pub fn reduce_with<S, F, A>(mut op: F, seq: &S, init: A) -> A
where
    S: Iterable + ?Sized,
    S::Value: Clone,
    F: FnMut(A, S::Value) -> A,
{
    log_builtin_call("reduce");
    seq.items().fold(init, |acc, item| op(acc, S::owned(item)))
}

/// True when every element is truthy; true for an empty sequence
#[inline]
pub fn all<S>(seq: &S) -> bool
where
    S: Iterable + ?Sized,
    S::Value: Truthy,
{
    seq.items().all(|item| S::view(&item).truthy())
}

/// True when some element is truthy; false for an empty sequence
#[inline]
pub fn any<S>(seq: &S) -> bool
where
    S: Iterable + ?Sized,
    S::Value: Truthy,
{
    seq.items().any(|item| S::view(&item).truthy())
}
