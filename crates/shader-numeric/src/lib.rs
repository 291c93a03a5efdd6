//! Shading-language common functions, in Rust.
//!
//! `shader-numeric` provides the elementwise numeric builtins found in shading
//! language standard libraries (`clamp`, `fract`, `round`, `roundEven`, `mod`,
//! `modf`, `mix`, `smoothstep`, `fma` and `scalbn`) over `f32` and `f64`
//! scalars and over 2, 3 and 4 lane vectors of either precision, along with the
//! structural conversions between 3x3 and 4x4 matrices.
//!
//! Everything is meant to be glob-imported:
//!
//! ```rust
//! use shader_numeric::common::*;
//!
//! assert_eq!(round_even(2.5f32), 2.0);
//! assert_eq!(round_even(vec3d(2.5, 3.5, -3.5)), vec3d(2.0, 4.0, -4.0));
//! assert!(fract(-1e-20f64) < 1.0);
//!
//! let m: Mat4f = mat3x3f(
//!     vec3f(1.0, 2.0, 3.0),
//!     vec3f(4.0, 5.0, 6.0),
//!     vec3f(7.0, 8.0, 9.0),
//! )
//! .into();
//! assert_eq!(m.col(3), vec4f(0.0, 0.0, 0.0, 1.0));
//! ```
//!
//! Vector and matrix storage is provided by [`glam`]. Every vector function is
//! the scalar function applied to each lane independently; there is never any
//! interaction between lanes.

pub mod common;
