//! # Math
//!
//! Scalar helpers used alongside the vector types, and matrix clean-up for transforms
//! headed to the GPU.
//!
//! ## Functions
//!
//! - [`clamp`], [`lerp`], [`wrap`]: the scalar versions of the per-component vector
//!   operations.
//! - [`normalize_in_range`] / [`remap`]: linear re-ranging of a value.
//! - [`sign`]: `-1`, `0` or `1`.
//! - [`deg_to_rad`] / [`rad_to_deg`]: plain unit conversions with no wrapping.
//! - [`reduce_to_rotation`]: strips translation and scale from an affine `Mat4`.

use crate::{Floating, Scalar};

/// Clamps `value` to `[min, max]`. When `min > max` the result is `max`.
pub fn clamp<T: Scalar>(value: T, min: T, max: T) -> T {
    value.max_of(min).min_of(max)
}

/// `start + (end - start) * amount`, unclamped.
pub fn lerp<T: Floating>(start: T, end: T, amount: T) -> T {
    start + (end - start) * amount
}

/// Where `value` sits between `start` (0) and `end` (1).
pub fn normalize_in_range<T: Floating>(value: T, start: T, end: T) -> T {
    (value - start) / (end - start)
}

/// Maps `value` from `[start, end]` onto `[target_start, target_end]`.
pub fn remap<T: Floating>(value: T, start: T, end: T, target_start: T, target_end: T) -> T {
    normalize_in_range(value, start, end) * (target_end - target_start) + target_start
}

/// Wraps `value` into `[min, max)` with floored arithmetic, so negative inputs wrap the
/// same way positive ones do.
pub fn wrap<T: Floating>(value: T, min: T, max: T) -> T {
    let range = max - min;
    value - range * ((value - min) / range).floor()
}

/// `-1` for negative, `0` for zero, `1` for positive.
pub fn sign<T: Scalar>(value: T) -> i32 {
    if value == T::zero() {
        0
    } else if value < T::zero() {
        -1
    } else {
        1
    }
}

#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}

/// Removes translation and scale from `matrix` in place, leaving the rotation.
///
/// The matrix is column-major with the translation in the last column (points are
/// multiplied on the right). The translation column is zeroed and each of the three
/// basis columns is divided by its length.
///
/// Assumes there is no skew. A skewed input keeps its skew coupled into the rotation
/// part, and a zero basis column produces NaNs.
pub fn reduce_to_rotation(matrix: &mut nalgebra_glm::Mat4) {
    matrix.column_mut(3).fill(0.0);
    for i in 0..3 {
        matrix.column_mut(i).normalize_mut();
    }
}
