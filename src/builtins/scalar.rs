//! Scalar built-ins - numeric helpers, formatting and identity
//!
//! `abs`, `bin`, `chr`, `cmp`, `complex`, `divmod`, `hex`, `id`, `oct`,
//! `pow`, `round` and `str`.

use num_complex::Complex;
use num_traits::{AsPrimitive, Float, Pow, PrimInt};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::ops::{Div, Rem};

/// Absolute value; the magnitude for complex numbers
pub trait Abs {
    type Output;

    fn abs(self) -> Self::Output;
}

macro_rules! signed_abs {
    ($($t:ty),*) => {
        $(
            impl Abs for $t {
                type Output = $t;

                #[inline]
                fn abs(self) -> $t {
                    <$t>::abs(self)
                }
            }
        )*
    };
}

macro_rules! unsigned_abs {
    ($($t:ty),*) => {
        $(
            impl Abs for $t {
                type Output = $t;

                #[inline]
                fn abs(self) -> $t {
                    self
                }
            }
        )*
    };
}

signed_abs!(i8, i16, i32, i64, i128, isize, f32, f64);
unsigned_abs!(u8, u16, u32, u64, u128, usize);

impl<T: Float> Abs for Complex<T> {
    type Output = T;

    #[inline]
    fn abs(self) -> T {
        self.norm()
    }
}

impl<T: Abs + Copy> Abs for &T {
    type Output = T::Output;

    #[inline]
    fn abs(self) -> T::Output {
        (*self).abs()
    }
}

#[inline]
pub fn abs<T: Abs>(v: T) -> T::Output {
    v.abs()
}

/// Binary literal: `0b` then the digits of the two's-complement bit pattern
#[inline]
pub fn bin<T: fmt::Binary>(v: T) -> String {
    format!("0b{:b}", v)
}

#[inline]
pub fn hex<T: fmt::LowerHex>(v: T) -> String {
    format!("0x{:x}", v)
}

/// Octal literal with a single leading `0`, so `oct(0)` is `"00"`
#[inline]
pub fn oct<T: fmt::Octal>(v: T) -> String {
    format!("0{:o}", v)
}

/// One-character string for a byte value; the value is truncated to 8 bits
/// and read as Latin-1
#[inline]
pub fn chr<T: AsPrimitive<u8>>(v: T) -> String {
    char::from(v.as_()).to_string()
}

/// Three-way comparison: -1, 0 or 1. Incomparable operands give 0.
#[inline]
pub fn cmp<A: PartialOrd<B>, B>(a: A, b: B) -> i64 {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => -1,
        Some(Ordering::Greater) => 1,
        Some(Ordering::Equal) | None => 0,
    }
}

#[inline]
pub fn complex<R, I>(re: R, im: I) -> Complex<f64>
where
    R: AsPrimitive<f64>,
    I: AsPrimitive<f64>,
{
    Complex::new(re.as_(), im.as_())
}

#[inline]
pub fn complex_real<R: AsPrimitive<f64>>(re: R) -> Complex<f64> {
    Complex::new(re.as_(), 0.0)
}

/// `(a / b, a % b)` with the host's truncating semantics
#[inline]
pub fn divmod<A, B>(a: A, b: B) -> (<A as Div<B>>::Output, <A as Rem<B>>::Output)
where
    A: Div<B> + Rem<B> + Copy,
    B: Copy,
{
    (a / b, a % b)
}

/// Integer `divmod` with floor semantics: the remainder takes the sign of
/// the divisor
#[inline]
pub fn floor_divmod<T: PrimInt>(a: T, b: T) -> (T, T) {
    let (q, r) = (a / b, a % b);
    let zero = T::zero();
    if r != zero && ((r < zero) != (b < zero)) {
        (q - T::one(), r + b)
    } else {
        (q, r)
    }
}

#[inline]
pub fn pow<B: Pow<E>, E>(base: B, exp: E) -> B::Output {
    base.pow(exp)
}

/// Round half away from zero
#[inline]
pub fn round<T: AsPrimitive<f64>>(v: T) -> f64 {
    round_to(v, 0)
}

/// Round half away from zero to `digits` decimal places
///
/// The scaled value is rounded through `i64`, so results saturate at the
/// `i64` range.
#[inline]
pub fn round_to<T: AsPrimitive<f64>>(v: T, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    ((v.as_() * scale).round() as i64) as f64 / scale
}

/// Textual rendering through `Display`
#[inline]
pub fn str<T: fmt::Display>(v: T) -> String {
    v.to_string()
}

/// Stable identity of a value
///
/// Lists report their element storage, so copies of the same buffer handle
/// agree. Every other value reports its own address.
pub trait Id {
    fn identity(&self) -> isize;
}

impl<T> Id for Vec<T> {
    #[inline]
    fn identity(&self) -> isize {
        self.as_ptr() as isize
    }
}

impl<T> Id for [T] {
    #[inline]
    fn identity(&self) -> isize {
        self.as_ptr() as isize
    }
}

impl Id for str {
    #[inline]
    fn identity(&self) -> isize {
        self.as_ptr() as isize
    }
}

macro_rules! address_id {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Id for $ty {
                #[inline]
                fn identity(&self) -> isize {
                    self as *const Self as isize
                }
            }
        )*
    };
}

address_id!(
    [] bool, [] char,
    [] i8, [] i16, [] i32, [] i64, [] i128, [] isize,
    [] u8, [] u16, [] u32, [] u64, [] u128, [] usize,
    [] f32, [] f64,
    [] String,
    [T] Complex<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T] BTreeSet<T>,
    [T, S] HashSet<T, S>,
    [] super::iter::XRange,
    [T] super::enumerate::Enumerate<T>,
);

#[inline]
pub fn id<T: Id + ?Sized>(v: &T) -> isize {
    v.identity()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs() {
        assert_eq!(abs(-5i64), 5);
        assert_eq!(abs(7u32), 7);
        assert_eq!(abs(-2.5f64), 2.5);
        assert_eq!(abs(Complex::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_radix_strings() {
        assert_eq!(bin(5), "0b101");
        assert_eq!(bin(0), "0b0");
        assert_eq!(hex(255), "0xff");
        assert_eq!(oct(8), "010");
        assert_eq!(oct(0), "00");
    }

    #[test]
    fn test_negative_bin_is_twos_complement() {
        assert_eq!(bin(-1i8), "0b11111111");
    }

    #[test]
    fn test_chr() {
        assert_eq!(chr(65), "A");
        assert_eq!(chr(256 + 97), "a");
        assert_eq!(chr(0xe9u8), "é");
    }

    #[test]
    fn test_cmp() {
        assert_eq!(cmp(1, 2), -1);
        assert_eq!(cmp("b", "a"), 1);
        assert_eq!(cmp(3.0, 3.0), 0);
        assert_eq!(cmp(f64::NAN, 1.0), 0);
    }

    #[test]
    fn test_complex() {
        let z = complex(1, 2.5);
        assert_eq!(z.re, 1.0);
        assert_eq!(z.im, 2.5);
        assert_eq!(complex_real(3u8), Complex::new(3.0, 0.0));
    }

    #[test]
    fn test_divmod() {
        assert_eq!(divmod(7, 2), (3, 1));
        assert_eq!(divmod(-7, 2), (-3, -1));
        assert_eq!(floor_divmod(-7, 2), (-4, 1));
        assert_eq!(floor_divmod(7, -2), (-4, -1));
        assert_eq!(floor_divmod(6, -2), (-3, 0));
    }

    #[test]
    fn test_pow() {
        assert_eq!(pow(2i64, 10u32), 1024);
        assert_eq!(pow(9.0f64, 0.5f64), 3.0);
    }

    #[test]
    fn test_round() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -3.0);
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round(7), 7.0);
    }

    #[test]
    fn test_str() {
        assert_eq!(str(42), "42");
        assert_eq!(str("x"), "x");
        assert_eq!(str(true), "true");
    }

    #[test]
    fn test_id() {
        let v = vec![1, 2];
        let w = v.clone();
        assert_eq!(id(&v), id(&v[..]));
        assert_ne!(id(&v), id(&w));

        let x = 5i64;
        assert_eq!(id(&x), &x as *const i64 as isize);
    }
}
