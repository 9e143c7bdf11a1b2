//! # Vec4
//!
//! Four component vector; homogeneous points and RGBA colors.

use serde::{Deserialize, Serialize};

use super::impl_vector_common;
use crate::{Floating, Scalar};

/// Four component vector. Also the shape of a homogeneous point or an RGBA color.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl_vector_common!(Vec4, 4, TVec4, x: 0, y: 1, z: 2, w: 3);

impl<T: Scalar> Vec4<T> {
    /// Full `matrix * self`; `w` is taken as stored.
    pub fn transform<U: Floating>(self, matrix: &nalgebra_glm::Mat4) -> Vec4<U> {
        let v = matrix * nalgebra_glm::Vec4::from(self);
        Vec4::new(
            U::from_f64(v.x as f64),
            U::from_f64(v.y as f64),
            U::from_f64(v.z as f64),
            U::from_f64(v.w as f64),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn transform_respects_w() {
        let m = nalgebra_glm::translate(
            &nalgebra_glm::Mat4::identity(),
            &nalgebra_glm::vec3(1.0, 1.0, 1.0),
        );
        let direction: Vec4<f32> = Vec4::new(1.0f32, 2.0, 3.0, 0.0).transform(&m);
        assert_eq!(direction, Vec4::new(1.0, 2.0, 3.0, 0.0));
        let point: Vec4<f32> = Vec4::new(1.0f32, 2.0, 3.0, 1.0).transform(&m);
        assert_eq!(point, Vec4::new(2.0, 3.0, 4.0, 1.0));
    }

    #[test]
    fn move_towards_steps_fixed_distance() {
        let from = Vec4::new(0.0f32, 0.0, 0.0, 0.0);
        let to = Vec4::new(10.0f32, 0.0, 0.0, 0.0);
        let step = from.move_towards(to, 2.5);
        assert_eq!(step, Vec4::new(2.5, 0.0, 0.0, 0.0));
        assert_eq!(from.move_towards(to, 10.0), to);
        assert_eq!(to.move_towards(to, 0.0), to);
    }

    #[test]
    fn lerp_extrapolates() {
        let a = Vec4::new(0i32, 10, 20, 30);
        let b = Vec4::new(10i32, 20, 30, 40);
        let mid: Vec4<f32> = a.lerp(b, 0.5);
        assert_eq!(mid, Vec4::new(5.0, 15.0, 25.0, 35.0));
        let past: Vec4<f32> = a.lerp(b, 1.5);
        assert_abs_diff_eq!(past.x, 15.0, epsilon = 1e-6);
        let before: Vec4<f32> = a.lerp(b, -1.0);
        assert_abs_diff_eq!(before.w, 20.0, epsilon = 1e-6);
    }

    #[test]
    fn clamp_vector_and_scalar_bounds() {
        let v = Vec4::new(-5i32, 3, 12, 7);
        assert_eq!(v.clamp_scalar(0, 10), Vec4::new(0, 3, 10, 7));
        assert_eq!(
            v.clamp(Vec4::new(-1, 4, 0, 0), Vec4::new(1, 5, 20, 6)),
            Vec4::new(-1, 4, 12, 6)
        );
    }

    #[test]
    fn native_round_trip_for_integers() {
        let v = Vec4::new(-3i32, 0, 16_777_216, 42);
        let native: [f32; 4] = v.into();
        assert_eq!(Vec4::<i32>::from(native), v);
    }

    #[test]
    fn indexing_by_component() {
        let mut v = Vec4::new(1u8, 2, 3, 4);
        v[3] = 9;
        assert_eq!((v[0], v[3]), (1, 9));
    }

    #[test]
    fn parse_rejects_wrong_arity() {
        assert!(matches!(
            "1 2 3".parse::<Vec4<i32>>(),
            Err(crate::ParseVectorError::ComponentCount { expected: 4, found: 3 })
        ));
        assert!(matches!(
            "1 2 x 4".parse::<Vec4<i32>>(),
            Err(crate::ParseVectorError::InvalidComponent { index: 2, .. })
        ));
    }

    #[test]
    fn element_wise_min_max() {
        let a = Vec4::new(1i32, 8, -3, 4);
        let b = Vec4::new(2i32, 5, -7, 4);
        assert_eq!(a.min(b), Vec4::new(1, 5, -7, 4));
        assert_eq!(a.max(b), Vec4::new(2, 8, -3, 4));
        let f = Vec4::new(0.5f32, -1.0, 2.0, 0.0);
        assert_eq!(f.min(Vec4::zero()), Vec4::new(0.0, -1.0, 0.0, 0.0));
    }

    #[test]
    fn array_round_trip() {
        let v = Vec4::from_array([1u16, 2, 3, 4]);
        assert_eq!(v, Vec4::new(1, 2, 3, 4));
        assert_eq!(v.to_array(), [1, 2, 3, 4]);
    }
}
