//! Square column-major matrices and the 3x3 <-> 4x4 shape conversions.

use std::fmt;

use super::scalar::Float;
use super::vector::{ScalarCompOfVec, Vec};

/// Trait identifying the inner matrix types.
///
/// Matrices consist of `f32` or `f64` elements.
pub trait ScalarCompOfMatrix<const N: usize>: ScalarCompOfVec<N> {
    type Output: Clone + Copy;

    fn mat_to_cols(m: Mat<N, Self>) -> [Vec<N, Self>; N];
    fn mat_from_cols(cols: [Vec<N, Self>; N]) -> Mat<N, Self>;
}

/// An `NxN` dimensional column-major matrix.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct Mat<const N: usize, T: ScalarCompOfMatrix<N>> {
    pub(crate) inner: <T as ScalarCompOfMatrix<N>>::Output,
}

/// matrix! generates the N×N matrix:
/// * ScalarCompOfMatrix impl
/// * concretized type alias
/// * const constructor
/// * conversions to and from the glam type
macro_rules! matrix {
    ($n:literal, $ty:ty, $ty_suffix:ident, $inner:ty, [$($cols:ident),+]) => {
        paste::paste! {
            impl ScalarCompOfMatrix<$n> for $ty {
                type Output = $inner;

                fn mat_to_cols(m: Mat<$n, $ty>) -> [Vec<$n, $ty>; $n] {
                    m.inner.to_cols_array_2d().map(Vec::<$n, $ty>::from_array)
                }

                fn mat_from_cols(cols: [Vec<$n, $ty>; $n]) -> Mat<$n, $ty> {
                    Mat {
                        inner: <$inner>::from_cols_array_2d(&cols.map(Vec::to_array)),
                    }
                }
            }

            #[doc = concat!("A ", $n, "x", $n, " column-major matrix of ", stringify!($ty), " components.")]
            pub type [<Mat $n x $n $ty_suffix>] = Mat<$n, $ty>;

            #[doc = concat!("Alias for Mat", $n, "x", $n, stringify!($ty_suffix), ".")]
            pub type [<Mat $n $ty_suffix>] = Mat<$n, $ty>;

            #[doc = concat!("Constructs a ", $n, "x", $n, " column-major matrix of ", stringify!($ty), " components.")]
            pub const fn [<mat $n x $n $ty_suffix>]($($cols: Vec<$n, $ty>),+) -> Mat<$n, $ty> {
                let inner = <$inner>::from_cols($($cols.inner),+);
                Mat { inner }
            }

            impl From<$inner> for Mat<$n, $ty> {
                fn from(value: $inner) -> Self {
                    Mat { inner: value }
                }
            }

            impl From<Mat<$n, $ty>> for $inner {
                fn from(value: Mat<$n, $ty>) -> Self {
                    value.inner
                }
            }
        }
    };
}

// Mat<3, f32>
matrix!(3, f32, f, glam::Mat3, [x_axis, y_axis, z_axis]);
// Mat<3, f64>
matrix!(3, f64, d, glam::DMat3, [x_axis, y_axis, z_axis]);
// Mat<4, f32>
matrix!(4, f32, f, glam::Mat4, [x_axis, y_axis, z_axis, w_axis]);
// Mat<4, f64>
matrix!(4, f64, d, glam::DMat4, [x_axis, y_axis, z_axis, w_axis]);

impl<const N: usize, T: ScalarCompOfMatrix<N>> Mat<N, T> {
    /// Construct from columns.
    pub fn from_cols(cols: [Vec<N, T>; N]) -> Self {
        <T as ScalarCompOfMatrix<N>>::mat_from_cols(cols)
    }

    /// The columns, in order.
    pub fn to_cols(self) -> [Vec<N, T>; N] {
        <T as ScalarCompOfMatrix<N>>::mat_to_cols(self)
    }

    /// Column `index`.
    ///
    /// ## Panics
    /// Panics if `index >= N`.
    pub fn col(self, index: usize) -> Vec<N, T> {
        self.to_cols()[index]
    }
}

impl<const N: usize, T: ScalarCompOfMatrix<N> + Float> Mat<N, T> {
    pub fn identity() -> Self {
        Self::from_cols(std::array::from_fn(|c| {
            Vec::from_array(std::array::from_fn(
                |r| if r == c { T::ONE } else { T::ZERO },
            ))
        }))
    }
}

impl<T> Mat<4, T>
where
    T: ScalarCompOfMatrix<4> + ScalarCompOfMatrix<3> + Float,
{
    /// Keeps the upper-left 3x3 block: the first three components of the
    /// first three columns.
    pub fn truncate(self) -> Mat<3, T> {
        let cols = self.to_cols();
        Mat::<3, T>::from_cols(std::array::from_fn(|i| {
            let [x, y, z, _] = cols[i].to_array();
            Vec::<3, T>::from_array([x, y, z])
        }))
    }
}

impl<T> Mat<3, T>
where
    T: ScalarCompOfMatrix<4> + ScalarCompOfMatrix<3> + Float,
{
    /// Places `self` in the upper-left 3x3 block of a 4x4 matrix.
    ///
    /// Each column gets a zero fourth component and the fourth column is
    /// `(0, 0, 0, 1)`.
    pub fn embed(self) -> Mat<4, T> {
        let [c0, c1, c2] = self.to_cols().map(|col| {
            let [x, y, z] = col.to_array();
            Vec::<4, T>::from_array([x, y, z, T::ZERO])
        });
        let c3 = Vec::<4, T>::from_array([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
        Mat::<4, T>::from_cols([c0, c1, c2, c3])
    }
}

impl<T> From<Mat<4, T>> for Mat<3, T>
where
    T: ScalarCompOfMatrix<4> + ScalarCompOfMatrix<3> + Float,
{
    fn from(m: Mat<4, T>) -> Self {
        m.truncate()
    }
}

impl<T> From<Mat<3, T>> for Mat<4, T>
where
    T: ScalarCompOfMatrix<4> + ScalarCompOfMatrix<3> + Float,
{
    fn from(m: Mat<3, T>) -> Self {
        m.embed()
    }
}

impl<const N: usize, T: ScalarCompOfMatrix<N> + PartialEq> PartialEq for Mat<N, T> {
    fn eq(&self, other: &Self) -> bool {
        self.to_cols() == other.to_cols()
    }
}

impl<const N: usize, T: ScalarCompOfMatrix<N> + fmt::Debug> fmt::Debug for Mat<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_tuple(&format!("Mat{N}x{N}"));
        for col in self.to_cols() {
            s.field(&col);
        }
        s.finish()
    }
}

#[cfg(test)]
mod test {
    use super::super::vector::*;
    use super::*;

    fn sample3() -> Mat3f {
        mat3x3f(
            vec3f(1.0, 2.0, 3.0),
            vec3f(4.0, 5.0, 6.0),
            vec3f(7.0, 8.0, 9.0),
        )
    }

    #[test]
    fn sanity_constructor_is_column_major() {
        let m = sample3();
        assert_eq!(m.col(0), vec3f(1.0, 2.0, 3.0));
        assert_eq!(m.col(2), vec3f(7.0, 8.0, 9.0));
        let g: glam::Mat3 = m.into();
        assert_eq!(g.z_axis, glam::Vec3::new(7.0, 8.0, 9.0));
    }

    #[test]
    fn sanity_embed() {
        let m = sample3().embed();
        assert_eq!(
            m,
            mat4x4f(
                vec4f(1.0, 2.0, 3.0, 0.0),
                vec4f(4.0, 5.0, 6.0, 0.0),
                vec4f(7.0, 8.0, 9.0, 0.0),
                vec4f(0.0, 0.0, 0.0, 1.0),
            )
        );
    }

    #[test]
    fn sanity_truncate() {
        let m = mat4x4d(
            vec4d(1.0, 2.0, 3.0, 4.0),
            vec4d(5.0, 6.0, 7.0, 8.0),
            vec4d(9.0, 10.0, 11.0, 12.0),
            vec4d(13.0, 14.0, 15.0, 16.0),
        );
        let t: Mat3d = m.into();
        assert_eq!(
            t,
            mat3x3d(
                vec3d(1.0, 2.0, 3.0),
                vec3d(5.0, 6.0, 7.0),
                vec3d(9.0, 10.0, 11.0),
            )
        );
    }

    #[test]
    fn sanity_identity() {
        assert_eq!(Mat3d::identity().embed(), Mat4d::identity());
        assert_eq!(Mat4f::identity().truncate(), Mat3f::identity());
        let g: glam::Mat4 = Mat4f::identity().into();
        assert_eq!(g, glam::Mat4::IDENTITY);
    }

    #[test]
    fn sanity_round_trip_keeps_nan_bits() {
        let nan = f32::from_bits(0x7fc0_1234);
        let m = mat3x3f(
            vec3f(nan, -0.0, f32::INFINITY),
            vec3f(4.0, nan, 6.0),
            vec3f(f32::NEG_INFINITY, 8.0, -nan),
        );
        let back = m.embed().truncate();
        let bits = |m: Mat3f| m.to_cols().map(|c| c.to_array().map(f32::to_bits));
        assert_eq!(bits(back), bits(m));
    }

    #[test]
    #[should_panic]
    fn sanity_col_out_of_bounds() {
        let _ = sample3().col(3);
    }

    #[test]
    fn sanity_debug() {
        let s = format!("{:?}", Mat3f::identity());
        assert!(s.starts_with("Mat3x3(Vec3 { x: 1.0"));
    }
}
