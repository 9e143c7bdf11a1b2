//! Operator implementations shared by every vector dimension.
//!
//! Arithmetic is generic over [`Scalar`](crate::Scalar). Remainder has two meanings
//! (truncating for integers, floored for floats) and so is generated per primitive type.
//! The bitwise family is generic over [`Integral`](crate::Integral) only, which keeps it
//! off float vectors at compile time.

use std::ops;

use super::{Vec2, Vec3, Vec4};
use crate::{Integral, Scalar};

macro_rules! impl_vector_arithmetic {
    ($vec:ident, $( $component:ident )*) => {
        // Vector-vector operations

        impl<T: Scalar> ops::Add for $vec<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                $vec { $( $component: self.$component + rhs.$component ),* }
            }
        }

        impl<T: Scalar> ops::Sub for $vec<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $vec { $( $component: self.$component - rhs.$component ),* }
            }
        }

        /// Hadamard product.
        impl<T: Scalar> ops::Mul for $vec<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                $vec { $( $component: self.$component * rhs.$component ),* }
            }
        }

        /// Hadamard quotient.
        impl<T: Scalar> ops::Div for $vec<T> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: Self) -> Self {
                $vec { $( $component: self.$component / rhs.$component ),* }
            }
        }

        // Vector-scalar operations

        impl<T: Scalar> ops::Add<T> for $vec<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: T) -> Self {
                $vec { $( $component: self.$component + rhs ),* }
            }
        }

        impl<T: Scalar> ops::Sub<T> for $vec<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: T) -> Self {
                $vec { $( $component: self.$component - rhs ),* }
            }
        }

        impl<T: Scalar> ops::Mul<T> for $vec<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: T) -> Self {
                $vec { $( $component: self.$component * rhs ),* }
            }
        }

        impl<T: Scalar> ops::Div<T> for $vec<T> {
            type Output = Self;
            #[inline]
            fn div(self, rhs: T) -> Self {
                $vec { $( $component: self.$component / rhs ),* }
            }
        }

        impl<T: Scalar + ops::Neg<Output = T>> ops::Neg for $vec<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                $vec { $( $component: -self.$component ),* }
            }
        }

        // Compound assignment, in place

        impl<T: Scalar> ops::AddAssign for $vec<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Scalar> ops::SubAssign for $vec<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Scalar> ops::MulAssign for $vec<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl<T: Scalar> ops::DivAssign for $vec<T> {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl<T: Scalar> ops::AddAssign<T> for $vec<T> {
            #[inline]
            fn add_assign(&mut self, rhs: T) {
                *self = *self + rhs;
            }
        }

        impl<T: Scalar> ops::SubAssign<T> for $vec<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: T) {
                *self = *self - rhs;
            }
        }

        impl<T: Scalar> ops::MulAssign<T> for $vec<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T: Scalar> ops::DivAssign<T> for $vec<T> {
            #[inline]
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }
    };
}

/// Bitwise operators. Shifts take a `u32` amount, as the primitive shifts do.
macro_rules! impl_vector_bitwise {
    ($vec:ident, $( $component:ident )*) => {
        impl<T: Integral> ops::BitAnd for $vec<T> {
            type Output = Self;
            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                $vec { $( $component: self.$component & rhs.$component ),* }
            }
        }

        impl<T: Integral> ops::BitOr for $vec<T> {
            type Output = Self;
            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                $vec { $( $component: self.$component | rhs.$component ),* }
            }
        }

        impl<T: Integral> ops::BitXor for $vec<T> {
            type Output = Self;
            #[inline]
            fn bitxor(self, rhs: Self) -> Self {
                $vec { $( $component: self.$component ^ rhs.$component ),* }
            }
        }

        impl<T: Integral> ops::Not for $vec<T> {
            type Output = Self;
            #[inline]
            fn not(self) -> Self {
                $vec { $( $component: !self.$component ),* }
            }
        }

        impl<T: Integral> ops::Shl<u32> for $vec<T> {
            type Output = Self;
            #[inline]
            fn shl(self, rhs: u32) -> Self {
                $vec { $( $component: self.$component << rhs as usize ),* }
            }
        }

        impl<T: Integral> ops::Shr<u32> for $vec<T> {
            type Output = Self;
            #[inline]
            fn shr(self, rhs: u32) -> Self {
                $vec { $( $component: self.$component >> rhs as usize ),* }
            }
        }

        impl<T: Integral> ops::BitAndAssign for $vec<T> {
            #[inline]
            fn bitand_assign(&mut self, rhs: Self) {
                *self = *self & rhs;
            }
        }

        impl<T: Integral> ops::BitOrAssign for $vec<T> {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                *self = *self | rhs;
            }
        }

        impl<T: Integral> ops::BitXorAssign for $vec<T> {
            #[inline]
            fn bitxor_assign(&mut self, rhs: Self) {
                *self = *self ^ rhs;
            }
        }

        impl<T: Integral> ops::ShlAssign<u32> for $vec<T> {
            #[inline]
            fn shl_assign(&mut self, rhs: u32) {
                *self = *self << rhs;
            }
        }

        impl<T: Integral> ops::ShrAssign<u32> for $vec<T> {
            #[inline]
            fn shr_assign(&mut self, rhs: u32) {
                *self = *self >> rhs;
            }
        }
    };
}

/// Operators with a primitive scalar on the left: `s * v` and `s / v`.
macro_rules! impl_scalar_lhs {
    ($vec:ident, $scalar:ty, $( $component:ident )*) => {
        impl ops::Mul<$vec<$scalar>> for $scalar {
            type Output = $vec<$scalar>;
            #[inline]
            fn mul(self, rhs: $vec<$scalar>) -> $vec<$scalar> {
                rhs * self
            }
        }

        impl ops::Div<$vec<$scalar>> for $scalar {
            type Output = $vec<$scalar>;
            #[inline]
            fn div(self, rhs: $vec<$scalar>) -> $vec<$scalar> {
                $vec { $( $component: self / rhs.$component ),* }
            }
        }
    };
}

/// `%` for integer components: the primitive truncating remainder.
macro_rules! impl_integer_rem {
    ($vec:ident, $int:ty, $( $component:ident )*) => {
        impl ops::Rem<$int> for $vec<$int> {
            type Output = Self;
            #[inline]
            fn rem(self, rhs: $int) -> Self {
                $vec { $( $component: self.$component % rhs ),* }
            }
        }

        impl ops::Rem for $vec<$int> {
            type Output = Self;
            #[inline]
            fn rem(self, rhs: Self) -> Self {
                $vec { $( $component: self.$component % rhs.$component ),* }
            }
        }

        impl_rem_assign!($vec, $int);
    };
}

/// `%` for float components: floored modulo, `v - d * floor(v / d)`, each component
/// using its own ratio. The result takes the sign of the divisor.
macro_rules! impl_float_rem {
    ($vec:ident, $float:ty, $( $component:ident )*) => {
        impl ops::Rem<$float> for $vec<$float> {
            type Output = Self;
            #[inline]
            fn rem(self, rhs: $float) -> Self {
                $vec { $( $component: self.$component - rhs * (self.$component / rhs).floor() ),* }
            }
        }

        impl ops::Rem for $vec<$float> {
            type Output = Self;
            #[inline]
            fn rem(self, rhs: Self) -> Self {
                $vec {
                    $( $component: self.$component
                        - rhs.$component * (self.$component / rhs.$component).floor() ),*
                }
            }
        }

        impl_rem_assign!($vec, $float);
    };
}

macro_rules! impl_rem_assign {
    ($vec:ident, $t:ty) => {
        impl ops::RemAssign<$t> for $vec<$t> {
            #[inline]
            fn rem_assign(&mut self, rhs: $t) {
                *self = *self % rhs;
            }
        }

        impl ops::RemAssign for $vec<$t> {
            #[inline]
            fn rem_assign(&mut self, rhs: Self) {
                *self = *self % rhs;
            }
        }
    };
}

macro_rules! impl_per_primitive {
    ($vec:ident, $( $component:ident )*) => {
        impl_integer_rem!($vec, i8, $( $component )*);
        impl_integer_rem!($vec, i16, $( $component )*);
        impl_integer_rem!($vec, i32, $( $component )*);
        impl_integer_rem!($vec, i64, $( $component )*);
        impl_integer_rem!($vec, isize, $( $component )*);
        impl_integer_rem!($vec, u8, $( $component )*);
        impl_integer_rem!($vec, u16, $( $component )*);
        impl_integer_rem!($vec, u32, $( $component )*);
        impl_integer_rem!($vec, u64, $( $component )*);
        impl_integer_rem!($vec, usize, $( $component )*);
        impl_float_rem!($vec, f32, $( $component )*);
        impl_float_rem!($vec, f64, $( $component )*);

        impl_scalar_lhs!($vec, i8, $( $component )*);
        impl_scalar_lhs!($vec, i16, $( $component )*);
        impl_scalar_lhs!($vec, i32, $( $component )*);
        impl_scalar_lhs!($vec, i64, $( $component )*);
        impl_scalar_lhs!($vec, isize, $( $component )*);
        impl_scalar_lhs!($vec, u8, $( $component )*);
        impl_scalar_lhs!($vec, u16, $( $component )*);
        impl_scalar_lhs!($vec, u32, $( $component )*);
        impl_scalar_lhs!($vec, u64, $( $component )*);
        impl_scalar_lhs!($vec, usize, $( $component )*);
        impl_scalar_lhs!($vec, f32, $( $component )*);
        impl_scalar_lhs!($vec, f64, $( $component )*);
    };
}

impl_vector_arithmetic!(Vec2, x y);
impl_vector_arithmetic!(Vec3, x y z);
impl_vector_arithmetic!(Vec4, x y z w);

impl_vector_bitwise!(Vec2, x y);
impl_vector_bitwise!(Vec3, x y z);
impl_vector_bitwise!(Vec4, x y z w);

impl_per_primitive!(Vec2, x y);
impl_per_primitive!(Vec3, x y z);
impl_per_primitive!(Vec4, x y z w);
