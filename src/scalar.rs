//! # Scalar Capabilities
//!
//! Component types accepted by the vector family are described by three traits:
//!
//! - [`Scalar`]: any primitive integer or floating point type. Supplies zero/one,
//!   ordering, the four arithmetic operators and `as`-style conversion through `f64`.
//! - [`Integral`]: the integer subset. Bitwise and shift operators, and the
//!   truncating `%`, are only implemented for vectors over an `Integral` scalar, so
//!   asking for `a & b` on a `Vec3<f32>` is rejected by the compiler.
//! - [`Floating`]: the floating point subset. Geometric operations whose result is
//!   inherently fractional (normalize, transform, lerp, move towards) name a
//!   `Floating` output type explicitly, independent of the input scalar.
//!
//! Conversions between scalar kinds never happen implicitly. Where an operation
//! needs to leave `T` it goes through [`Scalar::to_f64`] / [`Scalar::from_f64`],
//! which follow Rust's `as` semantics (truncation towards zero and saturation
//! for float to integer).

use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::{Float, Num, PrimInt};

/// A primitive numeric type usable as a vector component.
pub trait Scalar:
    Num + Copy + PartialOrd + Debug + Display + FromStr + Default + Send + Sync + 'static
{
    /// Widens (or, for 64-bit integers beyond 2^53, rounds) into an `f64`.
    fn to_f64(self) -> f64;

    /// Converts back with `as` semantics.
    fn from_f64(value: f64) -> Self;

    #[inline]
    fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }

    /// The smaller of two values. Returns `self` when the two are unordered.
    #[inline]
    fn min_of(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// The larger of two values. Returns `self` when the two are unordered.
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

/// Integer scalars. Enables the bitwise operator family on vectors.
pub trait Integral: Scalar + PrimInt {}

/// Floating point scalars.
pub trait Floating: Scalar + Float {}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Integral for i8 {}
impl Integral for i16 {}
impl Integral for i32 {}
impl Integral for i64 {}
impl Integral for isize {}
impl Integral for u8 {}
impl Integral for u16 {}
impl Integral for u32 {}
impl Integral for u64 {}
impl Integral for usize {}

impl Floating for f32 {}
impl Floating for f64 {}
