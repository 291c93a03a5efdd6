//! The common functions, for Rust.
//!
//! This module is meant to be glob-imported.
//!
//! The glob-imported import statement `use shader_numeric::common::*` pulls in
//! the vector and matrix types like `Vec3f`, `Vec4d` and `Mat4f`, their
//! constructors like `vec3f` and `mat3x3d`, and the builtin functions like
//! `clamp`, `round_even` and `smoothstep`.
//!
//! Builtins that share a name with an inherent float method (`fract`, `round`,
//! `clamp`, ...) are free functions here, so `fract(x)` calls the shading
//! language flavor while `x.fract()` still calls the standard library's.

mod matrix;
mod numeric_builtin_functions;
mod scalar;
mod vector;

pub use matrix::*;
pub use numeric_builtin_functions::*;
pub use scalar::Float;
pub use vector::*;
