//! # Vec3
//!
//! Three component vector with the spatial operations: cross product, unsigned angle,
//! refraction, axis-angle and quaternion rotation, point transform and unprojection.

use serde::{Deserialize, Serialize};

use super::impl_vector_common;
use crate::{Floating, Scalar};

/// Three component vector.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl_vector_common!(Vec3, 3, TVec3, x: 0, y: 1, z: 2);

impl<T: Scalar> Vec3<T> {
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    fn to_f64_array(self) -> [f64; 3] {
        [self.x.to_f64(), self.y.to_f64(), self.z.to_f64()]
    }

    fn from_f64_array([x, y, z]: [f64; 3]) -> Self {
        Self::new(T::from_f64(x), T::from_f64(y), T::from_f64(z))
    }

    fn homogeneous(self) -> nalgebra_glm::Vec4 {
        nalgebra_glm::vec4(self.x.to_f32(), self.y.to_f32(), self.z.to_f32(), 1.0)
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Unsigned angle in radians between the two vectors, in `[0, π]`.
    pub fn angle(self, other: Self) -> f32 {
        let a = nalgebra_glm::TVec3::<f64>::from(self.to_f64_array());
        let b = nalgebra_glm::TVec3::<f64>::from(other.to_f64_array());
        a.cross(&b).norm().atan2(a.dot(&b)) as f32
    }

    /// Refracts through a surface with unit `normal` and ratio of refractive indices `r`.
    /// Total internal reflection yields the zero vector.
    pub fn refract(self, normal: Self, r: f32) -> Self {
        let v = self.to_f64_array();
        let n = normal.to_f64_array();
        let r = r as f64;
        let dot = v[0] * n[0] + v[1] * n[1] + v[2] * n[2];
        let d = 1.0 - r * r * (1.0 - dot * dot);
        if d < 0.0 {
            return Self::zero();
        }
        let k = r * dot + d.sqrt();
        Self::from_f64_array([0usize, 1, 2].map(|i| r * v[i] - k * n[i]))
    }

    /// Rotates by `angle` radians about `axis` (right-handed). A zero axis leaves the
    /// vector unchanged.
    pub fn rotate_by_axis_angle(self, axis: Self, angle: f32) -> Self {
        let axis = nalgebra_glm::TVec3::<f64>::from(axis.to_f64_array());
        if axis.norm_squared() == 0.0 {
            return self;
        }
        let v = nalgebra_glm::TVec3::<f64>::from(self.to_f64_array());
        let rotated = nalgebra_glm::rotate_vec3(&v, angle as f64, &axis);
        Self::from_f64_array([rotated.x, rotated.y, rotated.z])
    }

    /// Rotates by a (unit) quaternion.
    pub fn rotate_by_quaternion(self, rotation: &nalgebra_glm::Quat) -> Self {
        let v = nalgebra_glm::TVec3::<f32>::from(self);
        let rotated = nalgebra_glm::quat_rotate_vec3(rotation, &v);
        Self::from(rotated)
    }

    /// Applies `matrix` to `(x, y, z, 1)` and keeps the first three components.
    pub fn transform<U: Floating>(self, matrix: &nalgebra_glm::Mat4) -> Vec3<U> {
        let point = matrix * self.homogeneous();
        Vec3::new(
            U::from_f64(point.x as f64),
            U::from_f64(point.y as f64),
            U::from_f64(point.z as f64),
        )
    }

    /// Maps a normalized-device-space point back through `projection * view`.
    pub fn unproject<U: Floating>(
        self,
        projection: &nalgebra_glm::Mat4,
        view: &nalgebra_glm::Mat4,
    ) -> Vec3<U> {
        let inverse = nalgebra_glm::inverse(&(projection * view));
        let point = inverse * self.homogeneous();
        let w = point.w as f64;
        Vec3::new(
            U::from_f64(point.x as f64 / w),
            U::from_f64(point.y as f64 / w),
            U::from_f64(point.z as f64 / w),
        )
    }
}
