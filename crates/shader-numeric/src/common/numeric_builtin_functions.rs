//! Traits that provide the shading-language numeric builtin functions.
//!
//! Each builtin is a trait implemented for `f32` and `f64`, and once more,
//! generically, for `Vec<N, T>`. A free function of the same name dispatches
//! through the trait. Vector variants apply the scalar function to each lane.
//!
//! | Function | Parameter Types | Description |
//! | --- | --- | --- |
//! | fn clamp(e: T, low: B, high: B) -> T | S is f32 or f64. T is S or vecN<S>. B is T, or S when T is a vector | Restricts e to [low, high]: min(max(e, low), high). A NaN e yields low. |
//! | fn fract(e: T) -> T | S is f32 or f64. T is S or vecN<S> | e - floor(e), clamped to [0, 1). Tiny negative e yields the largest value below 1.0 rather than 1.0. NaN and infinite e yield 0.0. |
//! | fn round(e: T) -> T | S is f32 or f64. T is S or vecN<S> | The nearest integer to e. Halfway cases round away from zero. |
//! | fn roundEven(e: T) -> T | S is f32 or f64. T is S or vecN<S> | The nearest integer to e. Halfway cases round to the even neighbor. |
//! | fn mod(x: T, y: D) -> T | S is f32 or f64. T is S or vecN<S>. D is T, or S when T is a vector | x - y * floor(x / y). The result takes the sign of y. |
//! | fn modf(e: T) -> ModfResult<T> | S is f32 or f64. T is S or vecN<S> | Splits e into integral and fractional parts, both with the sign of e. |
//! | fn mix(x: T, y: T, t: F) -> T | S is f32 or f64. T is S or vecN<S>. F is T, or S when T is a vector | The linear blend x + t * (y - x). t is not clamped. |
//! | fn smoothstep(x: T, edge0: E, edge1: E) -> T | S is f32 or f64. T is S or vecN<S>. E is T, or S when T is a vector | t * t * (3.0 - 2.0 * t), where t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0). |
//! | fn fma(a: T, b: T, c: T) -> T | S is f32 or f64. T is S or vecN<S> | a * b + c, rounded once. |
//! | fn scalbn(x: T, exp: I) -> T | S is f32 or f64. T is S or vecN<S>. I is i32, or vecN<i32> when T is a vector | x * 2^exp, computed without forming 2^exp. |
//!
//! `roundEven` and `mod` are spelled [`round_even`] and [`modulo`] in Rust.

use super::scalar::{self, Float};
use super::vector::{ScalarCompOfVec, Vec};

/// Result of [`modf`]: `integral + fractional` is the original value.
///
/// Both parts carry the sign of the input, so `modf(-3.0)` has a fractional
/// part of `-0.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModfResult<T> {
    pub integral: T,
    pub fractional: T,
}

/// Provides the numeric built-in function `clamp`.
pub trait NumericBuiltinClamp<Bound = Self> {
    /// Restricts the value of e within a range [low, high].
    fn clamp(self, low: Bound, high: Bound) -> Self;
}

/// Restricts the value of e within a range [low, high].
///
/// Component-wise when T is a vector. `low` and `high` may be scalars, in which
/// case every lane uses the same bounds.
pub fn clamp<T: NumericBuiltinClamp<B>, B>(e: T, low: B, high: B) -> T {
    <T as NumericBuiltinClamp<B>>::clamp(e, low, high)
}

mod clamp {
    use super::*;

    macro_rules! impl_clamp_scalar {
        ($ty:ty) => {
            impl NumericBuiltinClamp for $ty {
                fn clamp(self, low: Self, high: Self) -> Self {
                    scalar::clamp(self, low, high)
                }
            }
        };
    }
    impl_clamp_scalar!(f32);
    impl_clamp_scalar!(f64);

    impl<const N: usize, T: Float + ScalarCompOfVec<N>> NumericBuiltinClamp for Vec<N, T> {
        fn clamp(self, low: Self, high: Self) -> Self {
            self.zip3_map(low, high, scalar::clamp)
        }
    }

    impl<const N: usize, T: Float + ScalarCompOfVec<N>> NumericBuiltinClamp<T> for Vec<N, T> {
        fn clamp(self, low: T, high: T) -> Self {
            self.map(|e| scalar::clamp(e, low, high))
        }
    }
}

pub trait NumericBuiltinFract {
    fn fract(self) -> Self;
}

/// Returns the fractional part of e, in [0, 1).
pub fn fract<T: NumericBuiltinFract>(e: T) -> T {
    <T as NumericBuiltinFract>::fract(e)
}

mod fract {
    use super::*;

    macro_rules! impl_fract_scalar {
        ($ty:ty) => {
            impl NumericBuiltinFract for $ty {
                fn fract(self) -> Self {
                    scalar::fract(self)
                }
            }
        };
    }
    impl_fract_scalar!(f32);
    impl_fract_scalar!(f64);

    impl<const N: usize, T: Float + ScalarCompOfVec<N>> NumericBuiltinFract for Vec<N, T> {
        fn fract(self) -> Self {
            self.map(scalar::fract)
        }
    }
}

/// Provides the numeric built-in function `round`.
pub trait NumericBuiltinRound {
    /// The nearest integer, halfway cases away from zero.
    fn round(self) -> Self;
}

/// The nearest integer to e, halfway cases away from zero.
pub fn round<T: NumericBuiltinRound>(e: T) -> T {
    <T as NumericBuiltinRound>::round(e)
}

mod round {
    use super::*;

    macro_rules! impl_round_scalar {
        ($ty:ty) => {
            impl NumericBuiltinRound for $ty {
                fn round(self) -> Self {
                    scalar::round(self)
                }
            }
        };
    }
    impl_round_scalar!(f32);
    impl_round_scalar!(f64);

    impl<const N: usize, T: Float + ScalarCompOfVec<N>> NumericBuiltinRound for Vec<N, T> {
        fn round(self) -> Self {
            self.map(scalar::round)
        }
    }
}

/// Provides the numeric built-in function `roundEven`.
pub trait NumericBuiltinRoundEven {
    /// The nearest integer, halfway cases to the even neighbor.
    fn round_even(self) -> Self;
}

/// The nearest integer to e. When e lies halfway between integers k and k + 1,
/// the result is k when k is even, and k + 1 when k is odd.
pub fn round_even<T: NumericBuiltinRoundEven>(e: T) -> T {
    <T as NumericBuiltinRoundEven>::round_even(e)
}

mod round_even {
    use super::*;

    macro_rules! impl_round_even_scalar {
        ($ty:ty) => {
            impl NumericBuiltinRoundEven for $ty {
                fn round_even(self) -> Self {
                    scalar::round_even(self)
                }
            }
        };
    }
    impl_round_even_scalar!(f32);
    impl_round_even_scalar!(f64);

    impl<const N: usize, T: Float + ScalarCompOfVec<N>> NumericBuiltinRoundEven for Vec<N, T> {
        fn round_even(self) -> Self {
            self.map(scalar::round_even)
        }
    }
}

/// Provides the numeric built-in function `mod`.
pub trait NumericBuiltinModulo<Divisor = Self> {
    fn modulo(self, y: Divisor) -> Self;
}

/// `x - y * floor(x / y)`. The result takes the sign of `y`.
///
/// Component-wise when T is a vector. `y` may be a scalar divisor for every
/// lane.
pub fn modulo<T: NumericBuiltinModulo<D>, D>(x: T, y: D) -> T {
    <T as NumericBuiltinModulo<D>>::modulo(x, y)
}

mod modulo {
    use super::*;

    macro_rules! impl_modulo_scalar {
        ($ty:ty) => {
            impl NumericBuiltinModulo for $ty {
                fn modulo(self, y: Self) -> Self {
                    scalar::modulo(self, y)
                }
            }
        };
    }
    impl_modulo_scalar!(f32);
    impl_modulo_scalar!(f64);

    impl<const N: usize, T: Float + ScalarCompOfVec<N>> NumericBuiltinModulo for Vec<N, T> {
        fn modulo(self, y: Self) -> Self {
            self.zip_map(y, scalar::modulo)
        }
    }

    impl<const N: usize, T: Float + ScalarCompOfVec<N>> NumericBuiltinModulo<T> for Vec<N, T> {
        fn modulo(self, y: T) -> Self {
            self.map(|x| scalar::modulo(x, y))
        }
    }
}

/// Provides the numeric built-in function `modf`.
pub trait NumericBuiltinModf: Sized {
    fn modf(self) -> ModfResult<Self>;
}

/// Splits e into its integral part, rounded toward zero, and its fractional
/// part. Both parts have the sign of e, and `±inf` yields `(±inf, ±0.0)`.
pub fn modf<T: NumericBuiltinModf>(e: T) -> ModfResult<T> {
    <T as NumericBuiltinModf>::modf(e)
}

mod modf {
    use super::*;

    macro_rules! impl_modf_scalar {
        ($ty:ty) => {
            impl NumericBuiltinModf for $ty {
                fn modf(self) -> ModfResult<Self> {
                    let (integral, fractional) = scalar::modf(self);
                    ModfResult {
                        integral,
                        fractional,
                    }
                }
            }
        };
    }
    impl_modf_scalar!(f32);
    impl_modf_scalar!(f64);

    impl<const N: usize, T: Float + ScalarCompOfVec<N>> NumericBuiltinModf for Vec<N, T> {
        fn modf(self) -> ModfResult<Self> {
            let parts = self.to_array().map(scalar::modf);
            ModfResult {
                integral: Vec::from_array(parts.map(|(i, _)| i)),
                fractional: Vec::from_array(parts.map(|(_, f)| f)),
            }
        }
    }
}

/// Provides the numeric built-in function `mix`.
pub trait NumericBuiltinMix<Factor = Self> {
    /// Returns the linear blend of self and y: self + t * (y - self).
    fn mix(self, y: Self, t: Factor) -> Self;
}

/// Returns the linear blend of x and y: x + t * (y - x).
///
/// `t` is not clamped, so values outside [0, 1] extrapolate. When T is a
/// vector, `t` may be a scalar blending factor used for every lane.
pub fn mix<T: NumericBuiltinMix<F>, F>(x: T, y: T, t: F) -> T {
    <T as NumericBuiltinMix<F>>::mix(x, y, t)
}

mod mix {
    use super::*;

    macro_rules! impl_mix_scalar {
        ($ty:ty) => {
            impl NumericBuiltinMix for $ty {
                fn mix(self, y: Self, t: Self) -> Self {
                    scalar::mix(self, y, t)
                }
            }
        };
    }
    impl_mix_scalar!(f32);
    impl_mix_scalar!(f64);

    impl<const N: usize, T: Float + ScalarCompOfVec<N>> NumericBuiltinMix for Vec<N, T> {
        fn mix(self, y: Self, t: Self) -> Self {
            self.zip3_map(y, t, scalar::mix)
        }
    }

    impl<const N: usize, T: Float + ScalarCompOfVec<N>> NumericBuiltinMix<T> for Vec<N, T> {
        fn mix(self, y: Self, t: T) -> Self {
            self.zip_map(y, |x, y| scalar::mix(x, y, t))
        }
    }
}

/// Provides the numeric built-in function `smoothstep`.
pub trait NumericBuiltinSmoothstep<Edge = Self> {
    fn smoothstep(self, edge0: Edge, edge1: Edge) -> Self;
}

/// Returns the smooth Hermite interpolation between 0 and 1 as x moves from
/// edge0 to edge1.
///
/// The result is t * t * (3.0 - 2.0 * t), where
/// t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0). When T is a vector the
/// edges may be scalars shared by every lane.
pub fn smoothstep<T: NumericBuiltinSmoothstep<E>, E>(x: T, edge0: E, edge1: E) -> T {
    <T as NumericBuiltinSmoothstep<E>>::smoothstep(x, edge0, edge1)
}

mod smoothstep {
    use super::*;

    macro_rules! impl_smoothstep_scalar {
        ($ty:ty) => {
            impl NumericBuiltinSmoothstep for $ty {
                fn smoothstep(self, edge0: Self, edge1: Self) -> Self {
                    scalar::smoothstep(self, edge0, edge1)
                }
            }
        };
    }
    impl_smoothstep_scalar!(f32);
    impl_smoothstep_scalar!(f64);

    impl<const N: usize, T: Float + ScalarCompOfVec<N>> NumericBuiltinSmoothstep for Vec<N, T> {
        fn smoothstep(self, edge0: Self, edge1: Self) -> Self {
            self.zip3_map(edge0, edge1, scalar::smoothstep)
        }
    }

    impl<const N: usize, T: Float + ScalarCompOfVec<N>> NumericBuiltinSmoothstep<T> for Vec<N, T> {
        fn smoothstep(self, edge0: T, edge1: T) -> Self {
            self.map(|x| scalar::smoothstep(x, edge0, edge1))
        }
    }
}

/// Provides the numeric built-in function `fma`.
pub trait NumericBuiltinFma {
    fn fma(self, b: Self, c: Self) -> Self;
}

/// Returns a * b + c, computed with a single rounding. Component-wise when T
/// is a vector.
pub fn fma<T: NumericBuiltinFma>(a: T, b: T, c: T) -> T {
    <T as NumericBuiltinFma>::fma(a, b, c)
}

mod fma {
    use super::*;

    macro_rules! impl_fma_scalar {
        ($ty:ty) => {
            impl NumericBuiltinFma for $ty {
                fn fma(self, b: Self, c: Self) -> Self {
                    scalar::fma(self, b, c)
                }
            }
        };
    }
    impl_fma_scalar!(f32);
    impl_fma_scalar!(f64);

    impl<const N: usize, T: Float + ScalarCompOfVec<N>> NumericBuiltinFma for Vec<N, T> {
        fn fma(self, b: Self, c: Self) -> Self {
            self.zip3_map(b, c, scalar::fma)
        }
    }
}

/// Provides the numeric built-in function `scalbn`.
pub trait NumericBuiltinScalbn<Exp> {
    fn scalbn(self, exp: Exp) -> Self;
}

/// Returns x * 2^exp, by adjusting the exponent of x.
///
/// Overflow yields infinity and underflow yields zero or a subnormal. When T is
/// a vector, exp is either a single `i32` or a vector of `i32` exponents.
pub fn scalbn<T: NumericBuiltinScalbn<I>, I>(x: T, exp: I) -> T {
    <T as NumericBuiltinScalbn<I>>::scalbn(x, exp)
}

mod scalbn {
    use super::*;

    macro_rules! impl_scalbn_scalar {
        ($ty:ty) => {
            impl NumericBuiltinScalbn<i32> for $ty {
                fn scalbn(self, exp: i32) -> Self {
                    scalar::scalbn(self, exp)
                }
            }
        };
    }
    impl_scalbn_scalar!(f32);
    impl_scalbn_scalar!(f64);

    impl<const N: usize, T> NumericBuiltinScalbn<Vec<N, i32>> for Vec<N, T>
    where
        T: Float + ScalarCompOfVec<N>,
        i32: ScalarCompOfVec<N>,
    {
        fn scalbn(self, exp: Vec<N, i32>) -> Self {
            self.zip_map(exp, scalar::scalbn)
        }
    }

    impl<const N: usize, T: Float + ScalarCompOfVec<N>> NumericBuiltinScalbn<i32> for Vec<N, T> {
        fn scalbn(self, exp: i32) -> Self {
            self.map(|x| scalar::scalbn(x, exp))
        }
    }
}
