use approx::{abs_diff_eq, assert_abs_diff_eq};
use gfx_util::{Vec2, Vec3, Vec4};
use proptest::prelude::*;

fn ivec3() -> impl Strategy<Value = Vec3<i32>> {
    (-100_000i32..100_000, -100_000i32..100_000, -100_000i32..100_000)
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn fvec2() -> impl Strategy<Value = Vec2<f32>> {
    (-100.0f32..100.0, -100.0f32..100.0).prop_map(|(x, y)| Vec2::new(x, y))
}

fn dvec3() -> impl Strategy<Value = Vec3<f64>> {
    (-100.0f64..100.0, -100.0f64..100.0, -100.0f64..100.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn dvec4() -> impl Strategy<Value = Vec4<f64>> {
    (
        -100.0f64..100.0,
        -100.0f64..100.0,
        -100.0f64..100.0,
        -100.0f64..100.0,
    )
        .prop_map(|(x, y, z, w)| Vec4::new(x, y, z, w))
}

/// Unit vector from spherical angles, exact to f64 rounding.
fn unit_normal() -> impl Strategy<Value = Vec3<f64>> {
    (0.0f64..std::f64::consts::TAU, 0.0f64..std::f64::consts::PI).prop_map(|(theta, phi)| {
        Vec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos())
    })
}

fn close3(a: Vec3<f64>, b: Vec3<f64>, epsilon: f64) -> bool {
    abs_diff_eq!(a.x, b.x, epsilon = epsilon)
        && abs_diff_eq!(a.y, b.y, epsilon = epsilon)
        && abs_diff_eq!(a.z, b.z, epsilon = epsilon)
}

proptest! {
    #[test]
    fn adding_negation_gives_zero(v in ivec3(), f in dvec4()) {
        prop_assert_eq!(v + (-v), Vec3::zero());
        prop_assert!((f + (-f)).almost_equals(Vec4::zero()));
    }

    #[test]
    fn scalar_multiplication_commutes(v in ivec3(), s in -100i32..100) {
        prop_assert_eq!(v * s, s * v);
    }

    #[test]
    fn normalize_yields_unit_length(v in dvec3()) {
        prop_assume!(v.length() > 0.1);
        let n: Vec3<f32> = v.normalize();
        prop_assert!((n.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn reflecting_twice_is_identity(v in dvec3(), normal in unit_normal()) {
        let back = v.reflect(normal).reflect(normal);
        prop_assert!(close3(back, v, 1e-9), "{} -> {}", v, back);
    }

    #[test]
    fn move_towards_reaches_target_within_range(
        from in dvec3(),
        to in dvec3(),
        extra in 0.001f32..10.0,
    ) {
        let reach = from.distance(to) + extra;
        let moved: Vec3<f64> = from.move_towards(to, reach);
        prop_assert_eq!(moved, to);
    }

    #[test]
    fn move_towards_steps_exactly_max_distance(from in dvec3(), to in dvec3(), step in 0.0f32..1.0) {
        prop_assume!(from.distance(to) > 2.0);
        let moved: Vec3<f64> = from.move_towards(to, step);
        prop_assert!((from.distance(moved) - step).abs() < 1e-4);
    }

    #[test]
    fn clamp_magnitude_lands_in_range(v in dvec3(), lo in 0.0f32..50.0, span in 0.0f32..50.0) {
        prop_assume!(v.length() > 1e-3);
        let hi = lo + span;
        let len = v.clamp_magnitude(lo, hi).length();
        prop_assert!(len >= lo - 1e-3 && len <= hi + 1e-3, "{} not in [{}, {}]", len, lo, hi);
    }

    #[test]
    fn rotation_round_trip(v in fvec2(), angle in -10.0f32..10.0) {
        prop_assert_eq!(v.rotate(0.0), v);
        let back = v.rotate(angle).rotate(-angle);
        prop_assert!(abs_diff_eq!(back.x, v.x, epsilon = 1e-3));
        prop_assert!(abs_diff_eq!(back.y, v.y, epsilon = 1e-3));
    }

    #[test]
    fn rotation_preserves_length(v in fvec2(), angle in -10.0f32..10.0) {
        prop_assert!((v.rotate(angle).length() - v.length()).abs() < 1e-3);
    }

    #[test]
    fn integer_native_round_trip(x in -(1i32 << 24)..(1 << 24), y in -(1i32 << 24)..(1 << 24)) {
        let v = Vec2::new(x, y);
        let native: [f32; 2] = v.into();
        prop_assert_eq!(Vec2::<i32>::from(native), v);
    }

    #[test]
    fn cast_matches_scalar_as(x in -1.0e4f32..1.0e4, y in -1.0e4f32..1.0e4, z in -1.0e4f32..1.0e4) {
        let v = Vec3::new(x, y, z);
        prop_assert_eq!(v.cast::<i16>(), Vec3::new(x as i16, y as i16, z as i16));
        prop_assert_eq!(v.cast::<u8>(), Vec3::new(x as u8, y as u8, z as u8));
    }

    #[test]
    fn text_round_trip(v in ivec3()) {
        prop_assert_eq!(v.to_string().parse::<Vec3<i32>>(), Ok(v));
    }

    #[test]
    fn float_rem_is_floored(v in dvec3(), d in 0.5f64..20.0) {
        let r = v % d;
        for value in r.to_array() {
            prop_assert!((-1e-9..d + 1e-9).contains(&value), "{} % {} = {}", v, d, value);
        }
    }
}

#[test]
fn move_towards_at_exact_distance_returns_target() {
    let from = Vec2::new(0.0f32, 0.0);
    let to = Vec2::new(3.0f32, 4.0);
    assert_eq!(from.move_towards(to, 5.0), to);
}

#[test]
fn normalize_zero_vector_stays_zero() {
    let n: Vec4<f32> = Vec4::<i32>::zero().normalize();
    assert_abs_diff_eq!(n.length(), 0.0);
}
