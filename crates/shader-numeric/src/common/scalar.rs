//! The scalar core.
//!
//! Every builtin is written exactly once here, generically over [`Float`].
//! The vector entry points in `numeric_builtin_functions` apply these same
//! functions to each lane.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Rem, Sub};

/// An IEEE-754 floating point scalar: `f32` or `f64`.
///
/// Provides the constants the builtins need and the platform primitives they
/// are built on.
pub trait Float:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const HALF: Self;
    const TWO: Self;
    const THREE: Self;
    /// The largest representable value strictly less than one.
    const ONE_MINUS_ULP: Self;

    fn floor(self) -> Self;
    fn trunc(self) -> Self;
    /// Nearest integer, ties away from zero.
    fn round(self) -> Self;
    /// The smaller of two values. If one operand is NaN, the other is returned.
    fn min(self, other: Self) -> Self;
    /// The larger of two values. If one operand is NaN, the other is returned.
    fn max(self, other: Self) -> Self;
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn copysign(self, sign: Self) -> Self;
    /// `self * a + b` with a single rounding.
    fn mul_add(self, a: Self, b: Self) -> Self;
    /// `self * 2^exp`, computed by adjusting the exponent.
    fn scalbn(self, exp: i32) -> Self;
}

macro_rules! impl_float {
    ($ty:ty, $scalbn:path) => {
        impl Float for $ty {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const HALF: Self = 0.5;
            const TWO: Self = 2.0;
            const THREE: Self = 3.0;
            const ONE_MINUS_ULP: Self = 1.0 - <$ty>::EPSILON / 2.0;

            fn floor(self) -> Self {
                <$ty>::floor(self)
            }

            fn trunc(self) -> Self {
                <$ty>::trunc(self)
            }

            fn round(self) -> Self {
                <$ty>::round(self)
            }

            fn min(self, other: Self) -> Self {
                <$ty>::min(self, other)
            }

            fn max(self, other: Self) -> Self {
                <$ty>::max(self, other)
            }

            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }

            fn is_infinite(self) -> bool {
                <$ty>::is_infinite(self)
            }

            fn copysign(self, sign: Self) -> Self {
                <$ty>::copysign(self, sign)
            }

            fn mul_add(self, a: Self, b: Self) -> Self {
                <$ty>::mul_add(self, a, b)
            }

            fn scalbn(self, exp: i32) -> Self {
                $scalbn(self, exp)
            }
        }
    };
}

impl_float!(f32, libm::scalbnf);
impl_float!(f64, libm::scalbn);

/// Restricts `value` to `[lower, upper]`.
///
/// A NaN `value` yields `lower` (precisely `min(lower, upper)`). The result is
/// only NaN when both bounds are NaN.
pub fn clamp<T: Float>(value: T, lower: T, upper: T) -> T {
    if value.is_nan() {
        return lower.min(upper);
    }
    value.max(lower).min(upper)
}

/// `x - floor(x)`, clamped to `[0, 1)`.
///
/// For tiny negative `x` the subtraction rounds to exactly `1.0`; the clamp
/// pulls that back below one. NaN and infinite inputs yield `0.0`.
pub fn fract<T: Float>(x: T) -> T {
    clamp(x - x.floor(), T::ZERO, T::ONE_MINUS_ULP)
}

/// Nearest integer to `x`, ties away from zero.
pub fn round<T: Float>(x: T) -> T {
    x.round()
}

/// Nearest integer to `x`, ties to the nearest even integer.
///
/// Both `3.5` and `4.5` round to `4.0`.
pub fn round_even<T: Float>(x: T) -> T {
    let fractional = fract(x);
    // Only an exact tie takes the even branch.
    if fractional > T::HALF || fractional < T::HALF {
        return x.round();
    }

    let integral = x.trunc();
    if integral % T::TWO == T::ZERO {
        integral
    } else if x <= T::ZERO {
        integral - T::ONE
    } else {
        integral + T::ONE
    }
}

/// Floor-division modulus, `x - y * floor(x / y)`.
///
/// The result has the sign of `y`. `y == 0` is not guarded.
pub fn modulo<T: Float>(x: T, y: T) -> T {
    x - y * (x / y).floor()
}

/// Splits `x` into its integral part (rounded toward zero) and its fractional
/// part. Both parts carry the sign of `x`.
pub fn modf<T: Float>(x: T) -> (T, T) {
    let integral = x.trunc();
    if x.is_infinite() {
        return (integral, T::ZERO.copysign(x));
    }
    (integral, (x - integral).copysign(x))
}

/// Linear blend of `x` and `y`. `t` is not restricted to `[0, 1]`.
pub fn mix<T: Float>(x: T, y: T, t: T) -> T {
    x + t * (y - x)
}

/// Hermite interpolation between `0` and `1` as `x` moves from `edge0` to
/// `edge1`. `edge0 == edge1` is not guarded.
pub fn smoothstep<T: Float>(x: T, edge0: T, edge1: T) -> T {
    let t = clamp((x - edge0) / (edge1 - edge0), T::ZERO, T::ONE);
    t * t * (T::THREE - T::TWO * t)
}

/// `a * b + c` with a single rounding.
pub fn fma<T: Float>(a: T, b: T, c: T) -> T {
    a.mul_add(b, c)
}

/// `x * 2^exp`, without forming `2^exp`.
pub fn scalbn<T: Float>(x: T, exp: i32) -> T {
    x.scalbn(exp)
}
