//! # Vec2
//!
//! Two component vector. Adds the planar operations: signed angle, rotation about the
//! origin or a pivot, and transform by a `Mat4` with `z = 0, w = 1`.

use serde::{Deserialize, Serialize};

use super::impl_vector_common;
use crate::{Floating, Scalar};

/// Two component vector.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl_vector_common!(Vec2, 2, TVec2, x: 0, y: 1);

impl<T: Scalar> Vec2<T> {
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Signed angle in radians from `self` to `other` about the origin, in `(-π, π]`.
    pub fn angle(self, other: Self) -> f32 {
        let (ax, ay) = (self.x.to_f64(), self.y.to_f64());
        let (bx, by) = (other.x.to_f64(), other.y.to_f64());
        let det = ax * by - ay * bx;
        let dot = ax * bx + ay * by;
        det.atan2(dot) as f32
    }

    /// Rotates counter-clockwise about the origin by `angle` radians.
    pub fn rotate(self, angle: f32) -> Self {
        let (sin, cos) = (angle as f64).sin_cos();
        let (x, y) = (self.x.to_f64(), self.y.to_f64());
        Self::new(T::from_f64(x * cos - y * sin), T::from_f64(x * sin + y * cos))
    }

    /// Rotates counter-clockwise about `origin` by `angle` radians.
    pub fn rotate_around(self, angle: f32, origin: Self) -> Self {
        let (sin, cos) = (angle as f64).sin_cos();
        let (ox, oy) = (origin.x.to_f64(), origin.y.to_f64());
        let dx = self.x.to_f64() - ox;
        let dy = self.y.to_f64() - oy;
        Self::new(
            T::from_f64(ox + dx * cos - dy * sin),
            T::from_f64(oy + dx * sin + dy * cos),
        )
    }

    /// Applies `matrix` to `(x, y, 0, 1)` and keeps the first two components.
    pub fn transform<U: Floating>(self, matrix: &nalgebra_glm::Mat4) -> Vec2<U> {
        let point = matrix * nalgebra_glm::vec4(self.x.to_f32(), self.y.to_f32(), 0.0, 1.0);
        Vec2::new(U::from_f64(point.x as f64), U::from_f64(point.y as f64))
    }
}
