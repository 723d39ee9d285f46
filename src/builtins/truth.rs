//! Truth testing - the boolean interpretation used by `all`, `any` and `filter`
//!
//! Zero numbers and empty containers are false; everything else is true.

use num_complex::Complex;
use num_traits::Zero;
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::convert::Infallible;

/// Types with a boolean interpretation
pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn truthy(&self) -> bool {
        *self
    }
}

macro_rules! numeric_truthy {
    ($zero:expr => $($t:ty),*) => {
        $(
            impl Truthy for $t {
                #[inline]
                fn truthy(&self) -> bool {
                    *self != $zero
                }
            }
        )*
    };
}

numeric_truthy!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
numeric_truthy!(0.0 => f32, f64);

impl Truthy for char {
    #[inline]
    fn truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    #[inline]
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for VecDeque<T> {
    #[inline]
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for LinkedList<T> {
    #[inline]
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for BTreeSet<T> {
    #[inline]
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, S> Truthy for HashSet<T, S> {
    #[inline]
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

/// `None` is false; a present value is tested on its own
impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn truthy(&self) -> bool {
        self.as_ref().map_or(false, Truthy::truthy)
    }
}

impl<T: Zero + PartialEq> Truthy for Complex<T> {
    #[inline]
    fn truthy(&self) -> bool {
        !(self.re == T::zero() && self.im == T::zero())
    }
}

impl Truthy for Infallible {
    fn truthy(&self) -> bool {
        match *self {}
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

impl Truthy for () {
    #[inline]
    fn truthy(&self) -> bool {
        false
    }
}

// Non-empty tuples are always true
macro_rules! tuple_truthy {
    ($($T:ident),+) => {
        impl<$($T),+> Truthy for ($($T,)+) {
            #[inline]
            fn truthy(&self) -> bool {
                true
            }
        }
    };
}

tuple_truthy!(A);
tuple_truthy!(A, B);
tuple_truthy!(A, B, C);
tuple_truthy!(A, B, C, D);
tuple_truthy!(A, B, C, D, E);
tuple_truthy!(A, B, C, D, E, F);
