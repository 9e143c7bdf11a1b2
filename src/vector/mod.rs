//! # Vectors
//!
//! Fixed-size 2, 3 and 4 component vectors over any [`Scalar`](crate::Scalar) component
//! type, used by geometry and transform code and converted to `[f32; N]` whenever a
//! value has to reach the GPU.
//!
//! ## Overview
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`]: plain `#[repr(C)]` value types. Every transformation
//!   returns a new vector; only the compound assignment operators mutate in place.
//! - Integer aliases ([`IVec3`], [`UVec2`], ...) and `f32` aliases ([`FVec4`], ...) for
//!   the common instantiations.
//!
//! ## Operation Set
//!
//! All three dimensions share the same core:
//!
//! - **Arithmetic**: `+ -` (vector or broadcast scalar), `* /` (scalar or component-wise
//!   Hadamard), unary `-`, `%` (truncating for integers, floored for floats).
//! - **Bitwise**: `& | ^ ! << >>`, only for [`Integral`](crate::Integral) components.
//! - **Metrics**: [`length`](Vec3::length), [`length_sqr`](Vec3::length_sqr),
//!   [`distance`](Vec3::distance), [`distance_sqr`](Vec3::distance_sqr), [`dot`](Vec3::dot),
//!   [`almost_equals`](Vec3::almost_equals).
//! - **Geometry**: normalize, reflect, lerp, move towards, clamp (vector or scalar
//!   bounds), clamp magnitude, and a free-form [`apply_op`](Vec3::apply_op).
//! - **Matrix**: `transform` by a column-major `nalgebra_glm::Mat4` with the translation in
//!   the last column.
//!
//! Dimension specific operations live with their type: 2D rotation and signed angle on
//! [`Vec2`]; cross product, refraction, axis/quaternion rotation and unprojection on
//! [`Vec3`].
//!
//! ## Degenerate Inputs
//!
//! Nothing here fails at runtime. Degenerate geometry resolves to a fixed answer:
//! normalizing a zero vector yields (approximately) zero, refraction under total internal
//! reflection yields zero, and moving towards a coincident point yields that point.
//!
//! ## Conversions
//!
//! - `From<[f32; N]>` / `From<VecN<T>> for [f32; N]`: the native tuple form. Narrowing to
//!   `f32` happens regardless of `T`.
//! - `From` to and from the matching `nalgebra_glm::TVecN<f32>`.
//! - [`cast`](Vec3::cast): explicit per-component `as` conversion to another scalar type.

mod ops;
mod vec2;
mod vec3;
mod vec4;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Relative tolerance used by `almost_equals`.
pub const ALMOST_EQUALS_EPSILON: f64 = 0.000001;

/// Added to the length before dividing in `normalize`, so a zero vector maps to zero
/// instead of NaN.
pub const NORMALIZE_EPSILON: f64 = 0.000001;

pub type FVec2 = Vec2<f32>;
pub type IVec2 = Vec2<i32>;
pub type UVec2 = Vec2<u32>;

pub type FVec3 = Vec3<f32>;
pub type IVec3 = Vec3<i32>;
pub type UVec3 = Vec3<u32>;

pub type FVec4 = Vec4<f32>;
pub type IVec4 = Vec4<i32>;
pub type UVec4 = Vec4<u32>;

/// Failure to read a vector from its text form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseVectorError {
    #[error("expected {expected} components, found {found}")]
    ComponentCount { expected: usize, found: usize },
    #[error("component {index} is not a valid number: {text:?}")]
    InvalidComponent { index: usize, text: String },
}

/// Splits `<1, 2, 3>`, `1 2 3` or `1,2,3` into its component strings.
pub(crate) fn split_components(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(trimmed);
    inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect()
}

#[inline]
fn almost_equal_component(a: f64, b: f64) -> bool {
    (a - b).abs() <= ALMOST_EQUALS_EPSILON * 1.0f64.max(a.abs().max(b.abs()))
}

/// Generates the operations every dimension shares: construction, conversion, metrics,
/// the geometric core and formatting.
macro_rules! impl_vector_common {
    ($vec:ident, $n:literal, $glm:ident, $( $component:ident : $index:literal ),*) => {
        impl<T: $crate::Scalar> $vec<T> {
            #[inline]
            pub const fn new($( $component: T ),*) -> Self {
                Self { $( $component ),* }
            }

            /// Broadcasts one value to every component.
            #[inline]
            pub fn splat(value: T) -> Self {
                Self { $( $component: value ),* }
            }

            #[inline]
            pub fn zero() -> Self {
                Self::splat(T::zero())
            }

            #[inline]
            pub fn one() -> Self {
                Self::splat(T::one())
            }

            #[inline]
            pub fn from_array(array: [T; $n]) -> Self {
                let [$( $component ),*] = array;
                Self { $( $component ),* }
            }

            #[inline]
            pub fn to_array(self) -> [T; $n] {
                [$( self.$component ),*]
            }

            /// The `f32` tuple form shaders and vertex/uniform buffers consume.
            #[inline]
            pub fn to_native(self) -> [f32; $n] {
                [$( self.$component.to_f32() ),*]
            }

            /// Component-wise `as` conversion into another scalar type.
            #[inline]
            pub fn cast<U>(self) -> $vec<U>
            where
                U: $crate::Scalar,
                T: num_traits::AsPrimitive<U>,
            {
                $vec { $( $component: num_traits::AsPrimitive::<U>::as_(self.$component) ),* }
            }

            /// True when every component pair is within `1e-6 * max(1, |a|, |b|)`.
            pub fn almost_equals(self, other: Self) -> bool {
                true $( && $crate::vector::almost_equal_component(
                    self.$component.to_f64(),
                    other.$component.to_f64(),
                ) )*
            }

            #[inline]
            pub(crate) fn length_sqr_f64(self) -> f64 {
                0.0 $( + self.$component.to_f64() * self.$component.to_f64() )*
            }

            /// Squared Euclidean length.
            #[inline]
            pub fn length_sqr(self) -> f32 {
                self.length_sqr_f64() as f32
            }

            #[inline]
            pub fn length(self) -> f32 {
                self.length_sqr_f64().sqrt() as f32
            }

            #[inline]
            fn distance_sqr_to<U: $crate::Scalar>(self, other: $vec<U>) -> f64 {
                0.0 $( + (other.$component.to_f64() - self.$component.to_f64()).powi(2) )*
            }

            #[inline]
            pub fn distance_sqr(self, other: Self) -> f32 {
                self.distance_sqr_to(other) as f32
            }

            #[inline]
            pub fn distance(self, other: Self) -> f32 {
                self.distance_sqr_to(other).sqrt() as f32
            }

            #[inline]
            pub fn dot(self, other: Self) -> T {
                T::zero() $( + self.$component * other.$component )*
            }

            /// Divides by `length + 1e-6`. A zero vector stays (approximately) zero.
            pub fn normalize<U: $crate::Floating>(self) -> $vec<U> {
                let len = self.length_sqr_f64().sqrt() + $crate::vector::NORMALIZE_EPSILON;
                $vec { $( $component: U::from_f64(self.$component.to_f64() / len) ),* }
            }

            /// Applies `op` to every component.
            #[inline]
            pub fn apply_op(self, op: impl Fn(T) -> T) -> Self {
                Self { $( $component: op(self.$component) ),* }
            }

            /// Unclamped linear interpolation; `amount` outside `[0, 1]` extrapolates.
            pub fn lerp<U: $crate::Floating>(self, target: Self, amount: f32) -> $vec<U> {
                let amount = amount as f64;
                $vec {
                    $( $component: U::from_f64(
                        self.$component.to_f64()
                            + amount * (target.$component.to_f64() - self.$component.to_f64()),
                    ) ),*
                }
            }

            /// Steps at most `max_distance` along the straight line to `target`. Returns
            /// `target` itself once it is within reach. A `max_distance` of zero or less
            /// does not move, unless the two points already coincide.
            pub fn move_towards<U: $crate::Floating>(
                self,
                target: $vec<U>,
                max_distance: f32,
            ) -> $vec<U> {
                let dist_sqr = self.distance_sqr_to(target);
                if dist_sqr == 0.0 {
                    return target;
                }
                let max_distance = max_distance as f64;
                if max_distance <= 0.0 {
                    return $vec { $( $component: U::from_f64(self.$component.to_f64()) ),* };
                }
                if dist_sqr <= max_distance * max_distance {
                    return target;
                }
                let amount = max_distance / dist_sqr.sqrt();
                $vec {
                    $( $component: U::from_f64(
                        self.$component.to_f64()
                            + amount * (target.$component.to_f64() - self.$component.to_f64()),
                    ) ),*
                }
            }

            /// `self - 2 * dot(self, normal) * normal`. `normal` is expected to be unit length.
            pub fn reflect(self, normal: Self) -> Self {
                let two_dot = (T::one() + T::one()) * self.dot(normal);
                Self { $( $component: self.$component - two_dot * normal.$component ),* }
            }

            /// Clamps each component between the matching components of `min` and `max`.
            #[inline]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                Self { $( $component: min.$component.max_of(max.$component.min_of(self.$component)) ),* }
            }

            /// Clamps every component between `a` and `b`.
            #[inline]
            pub fn clamp_scalar(self, a: T, b: T) -> Self {
                Self { $( $component: a.max_of(b.min_of(self.$component)) ),* }
            }

            /// Rescales to the nearest of `min_len` / `max_len` when the length falls
            /// outside that range, keeping the direction. A zero vector has no direction
            /// and is returned as is.
            pub fn clamp_magnitude(self, min_len: f32, max_len: f32) -> Self {
                let len = self.length_sqr_f64().sqrt();
                let (min_len, max_len) = (min_len as f64, max_len as f64);
                if (len >= min_len && len <= max_len) || len == 0.0 {
                    return self;
                }
                let scale = min_len.max(max_len.min(len)) / len;
                Self { $( $component: T::from_f64(self.$component.to_f64() * scale) ),* }
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self { $( $component: self.$component.min_of(other.$component) ),* }
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self { $( $component: self.$component.max_of(other.$component) ),* }
            }
        }

        impl<T: $crate::Scalar> Default for $vec<T> {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<T: $crate::Scalar> From<[f32; $n]> for $vec<T> {
            fn from(native: [f32; $n]) -> Self {
                let [$( $component ),*] = native;
                Self { $( $component: T::from_f64($component as f64) ),* }
            }
        }

        impl<T: $crate::Scalar> From<$vec<T>> for [f32; $n] {
            fn from(vector: $vec<T>) -> Self {
                vector.to_native()
            }
        }

        impl<T: $crate::Scalar> From<nalgebra_glm::$glm<f32>> for $vec<T> {
            fn from(v: nalgebra_glm::$glm<f32>) -> Self {
                Self { $( $component: T::from_f64(v.$component as f64) ),* }
            }
        }

        impl<T: $crate::Scalar> From<$vec<T>> for nalgebra_glm::$glm<f32> {
            fn from(v: $vec<T>) -> Self {
                nalgebra_glm::$glm::<f32>::new($( v.$component.to_f32() ),*)
            }
        }

        impl<T> std::ops::Index<usize> for $vec<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                match index {
                    $( $index => &self.$component, )*
                    _ => panic!(concat!(stringify!($vec), " index out of range: {}"), index),
                }
            }
        }

        impl<T> std::ops::IndexMut<usize> for $vec<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $( $index => &mut self.$component, )*
                    _ => panic!(concat!(stringify!($vec), " index out of range: {}"), index),
                }
            }
        }

        impl<T: $crate::Scalar> std::fmt::Display for $vec<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "<")?;
                for (i, value) in self.to_array().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, ">")
            }
        }

        impl<T: $crate::Scalar> std::str::FromStr for $vec<T> {
            type Err = $crate::vector::ParseVectorError;

            fn from_str(text: &str) -> Result<Self, Self::Err> {
                let parts = $crate::vector::split_components(text);
                if parts.len() != $n {
                    return Err($crate::vector::ParseVectorError::ComponentCount {
                        expected: $n,
                        found: parts.len(),
                    });
                }
                Ok(Self {
                    $( $component: parts[$index].parse::<T>().map_err(|_| {
                        $crate::vector::ParseVectorError::InvalidComponent {
                            index: $index,
                            text: parts[$index].to_string(),
                        }
                    })?, )*
                })
            }
        }

        // SAFETY: `#[repr(C)]` with every field of type `T`, so there is no padding and
        // any bit pattern valid for `T` is valid for the vector.
        unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $vec<T> {}
        unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $vec<T> {}
    };
}

pub(crate) use impl_vector_common;
