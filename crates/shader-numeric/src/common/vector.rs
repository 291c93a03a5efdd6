//! Vector implementations.
//!
//! `Vec<N, T>` is a thin wrapper over the glam vector that stores `N` lanes of
//! `T`. The lane helpers ([`Vec::map`], [`Vec::zip_map`] and [`Vec::zip3_map`])
//! are how every builtin is lifted from scalars to vectors, once, for every lane
//! count and precision.

use std::fmt;

/// Trait for accessing the underlying type of a vector.
pub trait ScalarCompOfVec<const N: usize>: Copy + Sized {
    /// The glam vector holding `N` components of `Self`.
    type Output: Copy + Clone;

    fn vec_to_array(v: Vec<N, Self>) -> [Self; N];
    fn vec_from_array(lanes: [Self; N]) -> Vec<N, Self>;
}

/// An `N` dimensional vector.
#[repr(transparent)]
#[derive(Copy, Clone)]
pub struct Vec<const N: usize, T: ScalarCompOfVec<N>> {
    pub(crate) inner: <T as ScalarCompOfVec<N>>::Output,
}

pub type Vec2<T> = Vec<2, T>;
pub type Vec3<T> = Vec<3, T>;
pub type Vec4<T> = Vec<4, T>;

/// vector! generates:
/// * the ScalarCompOfVec impl
/// * a concretized type alias
/// * a const constructor
/// * conversions to and from the glam type
macro_rules! vector {
    // Example: vector!(2, f32, f, glam::Vec2, [x, y]);
    ($n:literal, $ty:ty, $ty_suffix:ident, $glam_ty:ty, [$($fields:ident),+]) => {
        paste::paste! {
            impl ScalarCompOfVec<$n> for $ty {
                type Output = $glam_ty;

                fn vec_to_array(v: Vec<$n, $ty>) -> [$ty; $n] {
                    v.inner.to_array()
                }

                fn vec_from_array(lanes: [$ty; $n]) -> Vec<$n, $ty> {
                    Vec {
                        inner: <$glam_ty>::from_array(lanes),
                    }
                }
            }

            #[doc = concat!("Concrete type alias for a ", $n, " dimensional vector of ", stringify!($ty), " scalar components.")]
            pub type [<Vec $n $ty_suffix>] = Vec<$n, $ty>;

            #[doc = concat!("Constructor for a ", $n, " dimensional vector of ", stringify!($ty), " scalar components.")]
            pub const fn [<vec $n $ty_suffix>]($($fields: $ty),+) -> Vec<$n, $ty> {
                Vec {
                    inner: <$glam_ty>::new($($fields),+),
                }
            }

            impl From<$glam_ty> for Vec<$n, $ty> {
                fn from(value: $glam_ty) -> Self {
                    Vec { inner: value }
                }
            }

            impl From<Vec<$n, $ty>> for $glam_ty {
                fn from(value: Vec<$n, $ty>) -> Self {
                    value.inner
                }
            }
        }
    };
}

vector!(2, f32, f, glam::Vec2, [x, y]);
vector!(2, f64, d, glam::DVec2, [x, y]);
vector!(2, i32, i, glam::IVec2, [x, y]);

vector!(3, f32, f, glam::Vec3, [x, y, z]);
vector!(3, f64, d, glam::DVec3, [x, y, z]);
vector!(3, i32, i, glam::IVec3, [x, y, z]);

vector!(4, f32, f, glam::Vec4, [x, y, z, w]);
vector!(4, f64, d, glam::DVec4, [x, y, z, w]);
vector!(4, i32, i, glam::IVec4, [x, y, z, w]);

impl<const N: usize, T: ScalarCompOfVec<N>> Vec<N, T> {
    /// Construct from an array of lanes.
    pub fn from_array(lanes: [T; N]) -> Self {
        T::vec_from_array(lanes)
    }

    /// Convert to an array of lanes.
    pub fn to_array(self) -> [T; N] {
        T::vec_to_array(self)
    }

    /// A vector with every lane set to `value`.
    pub fn splat(value: T) -> Self {
        Self::from_array([value; N])
    }

    /// Apply `f` to each lane.
    pub fn map<U: ScalarCompOfVec<N>>(self, f: impl FnMut(T) -> U) -> Vec<N, U> {
        Vec::from_array(self.to_array().map(f))
    }

    /// Apply `f` to each pair of corresponding lanes.
    pub fn zip_map<U, R>(self, other: Vec<N, U>, mut f: impl FnMut(T, U) -> R) -> Vec<N, R>
    where
        U: ScalarCompOfVec<N>,
        R: ScalarCompOfVec<N>,
    {
        let a = self.to_array();
        let b = other.to_array();
        Vec::from_array(std::array::from_fn(|i| f(a[i], b[i])))
    }

    /// Apply `f` to each triple of corresponding lanes.
    pub fn zip3_map<U, V, R>(
        self,
        second: Vec<N, U>,
        third: Vec<N, V>,
        mut f: impl FnMut(T, U, V) -> R,
    ) -> Vec<N, R>
    where
        U: ScalarCompOfVec<N>,
        V: ScalarCompOfVec<N>,
        R: ScalarCompOfVec<N>,
    {
        let a = self.to_array();
        let b = second.to_array();
        let c = third.to_array();
        Vec::from_array(std::array::from_fn(|i| f(a[i], b[i], c[i])))
    }
}

impl<const N: usize, T: ScalarCompOfVec<N>> From<[T; N]> for Vec<N, T> {
    fn from(lanes: [T; N]) -> Self {
        Self::from_array(lanes)
    }
}

impl<const N: usize, T: ScalarCompOfVec<N>> From<Vec<N, T>> for [T; N] {
    fn from(v: Vec<N, T>) -> Self {
        v.to_array()
    }
}

impl<const N: usize, T> std::ops::Index<usize> for Vec<N, T>
where
    T: ScalarCompOfVec<N>,
    <T as ScalarCompOfVec<N>>::Output: std::ops::Index<usize, Output = T>,
{
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.inner[index]
    }
}

impl<const N: usize, T: ScalarCompOfVec<N> + PartialEq> PartialEq for Vec<N, T> {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl<const N: usize, T: ScalarCompOfVec<N> + fmt::Debug> fmt::Debug for Vec<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(&format!("Vec{N}"));
        for (name, lane) in ["x", "y", "z", "w"].into_iter().zip(self.to_array()) {
            s.field(name, &lane);
        }
        s.finish()
    }
}
