//! Edge cases: NaN, infinities, signed zeros and exact ties.

use shader_numeric::common::*;

#[test]
fn round_even_reference_ties() {
    assert_eq!(round_even(2.5f32), 2.0);
    assert_eq!(round_even(3.5f32), 4.0);
    assert_eq!(round_even(-2.5f32), -2.0);
    assert_eq!(round_even(-3.5f32), -4.0);

    assert_eq!(
        round_even(vec4d(2.5, 3.5, -2.5, -3.5)),
        vec4d(2.0, 4.0, -2.0, -4.0)
    );
}

#[test]
fn round_even_just_off_a_tie_rounds_normally() {
    let above = f64::from_bits(2.5f64.to_bits() + 1);
    let below = f64::from_bits(2.5f64.to_bits() - 1);
    assert_eq!(round_even(above), 3.0);
    assert_eq!(round_even(below), 2.0);
}

#[test]
fn round_even_non_finite() {
    assert!(round_even(f32::NAN).is_nan());
    assert_eq!(round_even(f64::INFINITY), f64::INFINITY);
    assert_eq!(round_even(f64::NEG_INFINITY), f64::NEG_INFINITY);
}

#[test]
fn round_keeps_ties_away_from_zero() {
    assert_eq!(round(vec3f(0.5, -0.5, 1.5)), vec3f(1.0, -1.0, 2.0));
}

#[test]
fn clamp_nan_input_maps_to_lower() {
    assert_eq!(clamp(f32::NAN, 1.0, 5.0), 1.0);
    assert_eq!(clamp(f64::NAN, 1.0, 5.0), 1.0);
    assert_eq!(
        clamp(vec3f(f32::NAN, 3.0, f32::NAN), 1.0, 5.0),
        vec3f(1.0, 3.0, 1.0)
    );
    assert_eq!(
        clamp(
            vec2d(f64::NAN, f64::NAN),
            vec2d(-1.0, 2.0),
            vec2d(1.0, 3.0)
        ),
        vec2d(-1.0, 2.0)
    );
}

#[test]
fn clamp_infinities() {
    assert_eq!(clamp(f32::INFINITY, 0.0, 1.0), 1.0);
    assert_eq!(clamp(f32::NEG_INFINITY, 0.0, 1.0), 0.0);
    assert_eq!(clamp(7.0f64, f64::NEG_INFINITY, f64::INFINITY), 7.0);
}

#[test]
fn fract_never_reaches_one() {
    assert!(fract(-1e-20f64) < 1.0);
    assert!(fract(-1e-20f32) < 1.0);
    assert!(fract(-f64::from_bits(1)) < 1.0);
    assert!(fract(-f32::from_bits(1)) < 1.0);

    let v = fract(vec4f(-1e-20, -1e-30, -1e-38, -1e-45));
    for i in 0..4 {
        assert!(v[i] < 1.0, "lane {i}: {:?}", v);
    }
}

#[test]
fn fract_of_signed_zero() {
    assert_eq!(fract(0.0f32), 0.0);
    assert_eq!(fract(-0.0f64), 0.0);
}

#[test]
fn modulo_sign_and_zero_divisor() {
    assert_eq!(modulo(7.0f64, 3.0), 1.0);
    assert_eq!(modulo(-7.0f64, 3.0), 2.0);
    assert_eq!(modulo(7.0f64, -3.0), -2.0);
    assert!(modulo(7.0f32, 0.0).is_nan());
    assert!(modulo(f64::INFINITY, 3.0).is_nan());
    let v = modulo(vec3f(1.0, 2.0, 3.0), 0.0);
    assert!(v[0].is_nan() && v[1].is_nan() && v[2].is_nan());
}

#[test]
fn modf_signed_zero_and_infinity() {
    let r = modf(-3.0f32);
    assert_eq!(r.integral, -3.0);
    assert_eq!(r.fractional, 0.0);
    assert!(r.fractional.is_sign_negative());

    let r = modf(f64::INFINITY);
    assert_eq!(r.integral, f64::INFINITY);
    assert_eq!(r.fractional, 0.0);
    assert!(r.fractional.is_sign_positive());

    let r = modf(vec2d(f64::NEG_INFINITY, -0.0));
    assert_eq!(r.integral[0], f64::NEG_INFINITY);
    assert!(r.fractional[0].is_sign_negative());
    assert!(r.integral[1].is_sign_negative());
    assert!(r.fractional[1].is_sign_negative());
}

#[test]
fn mix_reference_values() {
    assert_eq!(mix(10.0f32, 20.0, 0.5), 15.0);
    assert_eq!(mix(10.0f64, 20.0, 2.0), 30.0);
    assert_eq!(
        mix(vec4f(10.0, 10.0, 10.0, 10.0), vec4f(20.0, 20.0, 20.0, 20.0), vec4f(0.0, 0.5, 1.0, 2.0)),
        vec4f(10.0, 15.0, 20.0, 30.0)
    );
}

#[test]
fn mix_propagates_nan() {
    assert!(mix(f32::NAN, 1.0, 0.5).is_nan());
    assert!(mix(0.0f64, 1.0, f64::NAN).is_nan());
}

#[test]
fn smoothstep_equal_edges() {
    // Division by zero: below the edge saturates to 0, above to 1.
    assert_eq!(smoothstep(0.0f32, 1.0, 1.0), 0.0);
    assert_eq!(smoothstep(2.0f32, 1.0, 1.0), 1.0);
    assert_eq!(smoothstep(1.0f64, 1.0, 1.0), 0.0);
}

#[test]
fn smoothstep_reversed_edges() {
    assert_eq!(smoothstep(0.0f64, 1.0, 0.0), 1.0);
    assert_eq!(smoothstep(1.0f64, 1.0, 0.0), 0.0);
    assert_eq!(smoothstep(0.5f64, 1.0, 0.0), 0.5);
}

#[test]
fn smoothstep_nan_input_maps_to_zero() {
    assert_eq!(smoothstep(f32::NAN, 0.0, 1.0), 0.0);
}

#[test]
fn fma_single_rounding() {
    let e = f32::EPSILON;
    let v = fma(vec2f(1.0 + e, 1.0), vec2f(1.0 - e, 1.0), vec2f(-1.0, 1.0));
    assert_eq!(v, vec2f(-(e * e), 2.0));
}

#[test]
fn scalbn_extremes() {
    assert_eq!(scalbn(1.0f32, 128), f32::INFINITY);
    assert_eq!(scalbn(1.0f32, -150), 0.0);
    assert_eq!(scalbn(1.0f32, -149), f32::from_bits(1));
    assert_eq!(scalbn(-0.0f64, 10).to_bits(), (-0.0f64).to_bits());
    assert!(scalbn(f64::NAN, 3).is_nan());
    assert_eq!(scalbn(f64::INFINITY, -2000), f64::INFINITY);
    assert_eq!(
        scalbn(vec3d(1.0, 1.0, 1.0), vec3i(i32::MAX, i32::MIN, 0)),
        vec3d(f64::INFINITY, 0.0, 1.0)
    );
}

#[test]
fn matrix_round_trip_preserves_special_values() {
    let m = mat3x3d(
        vec3d(f64::NAN, -0.0, f64::INFINITY),
        vec3d(f64::NEG_INFINITY, f64::MIN_POSITIVE, f64::MAX),
        vec3d(f64::from_bits(1), -f64::NAN, 0.0),
    );
    let back = Mat3d::from(Mat4d::from(m));
    let bits = |m: Mat3d| m.to_cols().map(|c| c.to_array().map(f64::to_bits));
    assert_eq!(bits(back), bits(m));
}

#[test]
fn matrix_embed_layout() {
    let m: Mat4d = mat3x3d(
        vec3d(1.0, 2.0, 3.0),
        vec3d(4.0, 5.0, 6.0),
        vec3d(7.0, 8.0, 9.0),
    )
    .into();
    let g: glam::DMat4 = m.into();
    assert_eq!(
        g.to_cols_array(),
        [1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 6.0, 0.0, 7.0, 8.0, 9.0, 0.0, 0.0, 0.0, 0.0, 1.0]
    );
}
