//! Functional built-ins - `map`, `filter`, `zip`
//!
//! Design: Multi-source traversal walks every source in lockstep, driven by
//! the first one. The result has the first source's length; a secondary
//! source that runs out early violates the caller's contract and panics.

use super::convert::EmptyList;
use super::len::HasLen;
use super::traits::{to_capacity, Iterable};
use super::truth::Truthy;
use crate::error::BuiltinError;
use crate::logging::{log_builtin_call, log_materialize};

/// One or more borrowed sources traversed together
///
/// A bare `&S` yields its items directly; a tuple of borrows yields tuples.
pub trait MapSources<'s> {
    type Item;
    type Iter: Iterator<Item = Self::Item>;

    /// Length of the driving (first) source
    fn lead_len(&self) -> i64;

    fn lockstep(self, builtin: &'static str) -> Self::Iter;
}

impl<'s, S> MapSources<'s> for &'s S
where
    S: Iterable + HasLen + ?Sized,
{
    type Item = S::Ref<'s>;
    type Iter = S::Iter<'s>;

    #[inline]
    fn lead_len(&self) -> i64 {
        HasLen::len(*self)
    }

    #[inline]
    fn lockstep(self, _builtin: &'static str) -> S::Iter<'s> {
        self.items()
    }
}

/// Iterator over several sources in step with the first
#[derive(Debug, Clone)]
pub struct Lockstep<L, R> {
    lead: L,
    rest: R,
    builtin: &'static str,
}

#[cold]
#[track_caller]
fn short_source(builtin: &'static str, position: usize) -> ! {
    BuiltinError::ShortSource { builtin, position }.raise()
}

macro_rules! lockstep_tuple {
    ($S0:ident; $($S:ident $src:tt $rest:tt),*) => {
        impl<'s, $S0, $($S),*> MapSources<'s> for (&'s $S0, $(&'s $S,)*)
        where
            $S0: Iterable + HasLen + ?Sized,
            $($S: Iterable + ?Sized,)*
        {
            type Item = (<$S0 as Iterable>::Ref<'s>, $(<$S as Iterable>::Ref<'s>,)*);
            type Iter = Lockstep<<$S0 as Iterable>::Iter<'s>, ($(<$S as Iterable>::Iter<'s>,)*)>;

            #[inline]
            fn lead_len(&self) -> i64 {
                HasLen::len(self.0)
            }

            #[inline]
            fn lockstep(self, builtin: &'static str) -> Self::Iter {
                Lockstep {
                    lead: self.0.items(),
                    rest: ($(self.$src.items(),)*),
                    builtin,
                }
            }
        }

        impl<$S0: Iterator, $($S: Iterator),*> Iterator for Lockstep<$S0, ($($S,)*)> {
            type Item = ($S0::Item, $($S::Item,)*);

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                let head = self.lead.next()?;
                Some((
                    head,
                    $(match self.rest.$rest.next() {
                        Some(item) => item,
                        None => short_source(self.builtin, $src + 1),
                    },)*
                ))
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.lead.size_hint()
            }
        }
    };
}

lockstep_tuple!(S0;);
lockstep_tuple!(S0; S1 1 0);
lockstep_tuple!(S0; S1 1 0, S2 2 1);
lockstep_tuple!(S0; S1 1 0, S2 2 1, S3 3 2);
lockstep_tuple!(S0; S1 1 0, S2 2 1, S3 3 2, S4 4 3);
lockstep_tuple!(S0; S1 1 0, S2 2 1, S3 3 2, S4 4 3, S5 5 4);

/// Apply `op` to each item of `sources`, collecting the results
///
/// With a single source `op` receives its items; with a tuple of sources
/// `op` receives a tuple holding one item from each.
pub fn map<'s, Z, F, R>(op: F, sources: Z) -> Vec<R>
where
    Z: MapSources<'s>,
    F: FnMut(Z::Item) -> R,
{
    log_builtin_call("map");
    let len = sources.lead_len();
    log_materialize("map", len);

    let mut out = Vec::with_capacity(to_capacity(len));
    out.extend(sources.lockstep("map").map(op));
    out
}

/// Elements of `seq` for which `pred` is truthy, in order
pub fn filter<S, F, R>(mut pred: F, seq: &S) -> Vec<S::Value>
where
    S: Iterable + ?Sized,
    S::Value: Clone,
    F: FnMut(&S::Value) -> R,
    R: Truthy,
{
    log_builtin_call("filter");
    let mut out = Vec::new();
    for item in seq.items() {
        let value = S::view(&item);
        if pred(value).truthy() {
            out.push(value.clone());
        }
    }
    out
}

/// Elements of `seq` that are themselves truthy
pub fn filter_truthy<S>(seq: &S) -> Vec<S::Value>
where
    S: Iterable + ?Sized,
    S::Value: Truthy + Clone,
{
    filter(|value: &S::Value| value.truthy(), seq)
}

/// Sources accepted by `zip`
pub trait Zip {
    type Output;

    fn zip(self) -> Self::Output;
}

impl Zip for () {
    type Output = EmptyList;

    #[inline]
    fn zip(self) -> EmptyList {
        EmptyList
    }
}

macro_rules! zip_tuple {
    ($($S:ident $idx:tt),+) => {
        impl<'s, $($S),+> Zip for ($(&'s $S,)+)
        where
            Self: MapSources<'s, Item = ($(<$S as Iterable>::Ref<'s>,)+)>,
            $($S: Iterable + ?Sized, <$S as Iterable>::Value: Clone,)+
        {
            type Output = Vec<($(<$S as Iterable>::Value,)+)>;

            fn zip(self) -> Self::Output {
                log_builtin_call("zip");
                let mut out = Vec::with_capacity(to_capacity(self.lead_len()));
                for item in self.lockstep("zip") {
                    out.push(($(<$S as Iterable>::owned(item.$idx),)+));
                }
                out
            }
        }
    };
}

zip_tuple!(S0 0);
zip_tuple!(S0 0, S1 1);
zip_tuple!(S0 0, S1 1, S2 2);
zip_tuple!(S0 0, S1 1, S2 2, S3 3);
zip_tuple!(S0 0, S1 1, S2 2, S3 3, S4 4);
zip_tuple!(S0 0, S1 1, S2 2, S3 3, S4 4, S5 5);

/// `zip()` or `zip((&a, &b, ..))`
#[inline]
pub fn zip<Z: Zip>(sources: Z) -> Z::Output {
    sources.zip()
}
