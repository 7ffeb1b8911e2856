pub mod aliases;
mod functions;
mod geometry;
mod ops;

pub use functions::*;

use core::ops::{Index, IndexMut};

use num_traits::{AsPrimitive, ConstOne, ConstZero};

use crate::traits::Scalar;

/// Fixed-length vector of `N` elements of type `T`.
///
/// Storage is a single `[T; N]` array. The named accessors (`x/y/z/w`,
/// `r/g/b/a`, `s/t`, `u/v`) are views onto the same elements as `v[i]`:
/// writing through one name is visible through every other name.
///
/// Equality is exact per component. Ordering is lexicographic.
///
/// # Examples
///
/// ```
/// use geomath::{vec3, Vector};
///
/// let mut v = vec3(1.0_f32, 2.0, 3.0);
/// v.set_r(5.0);
/// assert_eq!(v.x(), 5.0);
/// assert_eq!(v[0], 5.0);
///
/// let p: Vector<f32, 4> = Vector::extend_from(&v, &[1.0]);
/// assert_eq!(p.as_array(), &[5.0, 2.0, 3.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize> {
    pub(crate) data: [T; N],
}

// ── Constants ───────────────────────────────────────────────────────

impl<T: ConstZero + Copy, const N: usize> Vector<T, N> {
    /// All components zero.
    pub const ZERO: Self = Self { data: [T::ZERO; N] };
}

impl<T: ConstOne + Copy, const N: usize> Vector<T, N> {
    /// All components one.
    pub const ONE: Self = Self { data: [T::ONE; N] };
}

impl<T: ConstZero + ConstOne> Vector<T, 2> {
    pub const UNIT_X: Self = Self { data: [T::ONE, T::ZERO] };
    pub const UNIT_Y: Self = Self { data: [T::ZERO, T::ONE] };
}

impl<T: ConstZero + ConstOne> Vector<T, 3> {
    pub const UNIT_X: Self = Self { data: [T::ONE, T::ZERO, T::ZERO] };
    pub const UNIT_Y: Self = Self { data: [T::ZERO, T::ONE, T::ZERO] };
    pub const UNIT_Z: Self = Self { data: [T::ZERO, T::ZERO, T::ONE] };
}

impl<T: ConstZero + ConstOne> Vector<T, 4> {
    pub const UNIT_X: Self = Self { data: [T::ONE, T::ZERO, T::ZERO, T::ZERO] };
    pub const UNIT_Y: Self = Self { data: [T::ZERO, T::ONE, T::ZERO, T::ZERO] };
    pub const UNIT_Z: Self = Self { data: [T::ZERO, T::ZERO, T::ONE, T::ZERO] };
    pub const UNIT_W: Self = Self { data: [T::ZERO, T::ZERO, T::ZERO, T::ONE] };
}

// ── Constructors ────────────────────────────────────────────────────

impl<T, const N: usize> Vector<T, N> {
    /// Create a vector from an array.
    ///
    /// ```
    /// use geomath::Vector;
    /// let v = Vector::new([1.0, 2.0, 3.0]);
    /// assert_eq!(v[2], 3.0);
    /// ```
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Create a vector by calling `f` with each index.
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self {
            data: core::array::from_fn(f),
        }
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` only for `Vector<T, 0>`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Apply `f` to every component.
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector {
            data: self.data.map(f),
        }
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Broadcast `value` into every component.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Combine two vectors component by component.
    #[inline]
    pub fn zip_map<U: Copy, R, F: FnMut(T, U) -> R>(&self, rhs: &Vector<U, N>, mut f: F) -> Vector<R, N> {
        Vector::from_fn(|i| f(self.data[i], rhs.data[i]))
    }

    /// Convert every component with `as` semantics.
    ///
    /// ```
    /// use geomath::Vector;
    /// let v = Vector::new([1.7_f64, -2.2]);
    /// assert_eq!(v.cast::<i32>(), Vector::new([1, -2]));
    /// ```
    #[inline]
    pub fn cast<U>(&self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map(|x| x.as_())
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Vector of zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self {
            data: [T::zero(); N],
        }
    }

    /// Copy up to `N` values from `src`; missing trailing values are zero.
    ///
    /// Covers construction from a partial component list and from an
    /// external contiguous buffer.
    ///
    /// ```
    /// use geomath::Vector;
    /// let v: Vector<i32, 4> = Vector::from_slice(&[7, 8]);
    /// assert_eq!(v.into_array(), [7, 8, 0, 0]);
    ///
    /// let w: Vector<i32, 2> = Vector::from_slice(&[1, 2, 3, 4]);
    /// assert_eq!(w.into_array(), [1, 2]);
    /// ```
    pub fn from_slice(src: &[T]) -> Self {
        let mut out = Self::zeros();
        let n = N.min(src.len());
        out.data[..n].copy_from_slice(&src[..n]);
        out
    }

    /// Resize a vector of a different length.
    ///
    /// The first `min(N, K)` components are copied. Growing zero-fills,
    /// shrinking truncates.
    #[inline]
    pub fn resize_from<const K: usize>(src: &Vector<T, K>) -> Self {
        Self::from_slice(&src.data)
    }

    /// Resize `src`, then keep filling the remaining slots from `rest`,
    /// left to right. Values that do not fit are ignored.
    ///
    /// ```
    /// use geomath::{vec2, Vector};
    /// let v: Vector<f64, 4> = Vector::extend_from(&vec2(1.0, 2.0), &[3.0]);
    /// assert_eq!(v.into_array(), [1.0, 2.0, 3.0, 0.0]);
    /// ```
    pub fn extend_from<const K: usize>(src: &Vector<T, K>, rest: &[T]) -> Self {
        let mut out = Self::resize_from(src);
        let start = K.min(N);
        let n = (N - start).min(rest.len());
        out.data[start..start + n].copy_from_slice(&rest[..n]);
        out
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::zeros()
    }
}

/// Create a 2-component vector.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vector<T, 2> {
    Vector { data: [x, y] }
}

/// Create a 3-component vector.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vector<T, 3> {
    Vector { data: [x, y, z] }
}

/// Create a 4-component vector.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vector<T, 4> {
    Vector { data: [x, y, z, w] }
}

// ── Named accessors ─────────────────────────────────────────────────

macro_rules! named_accessors {
    ($($get:ident, $get_mut:ident, $set:ident => $idx:literal;)*) => {
        impl<T: Copy, const N: usize> Vector<T, N> {
            $(
                #[doc = concat!("Component ", stringify!($idx), ".")]
                #[inline]
                pub fn $get(&self) -> T {
                    const { assert!($idx < N, "vector has no such component") };
                    self.data[$idx]
                }

                #[doc = concat!("Mutable reference to component ", stringify!($idx), ".")]
                #[inline]
                pub fn $get_mut(&mut self) -> &mut T {
                    const { assert!($idx < N, "vector has no such component") };
                    &mut self.data[$idx]
                }

                #[doc = concat!("Overwrite component ", stringify!($idx), ".")]
                #[inline]
                pub fn $set(&mut self, value: T) {
                    const { assert!($idx < N, "vector has no such component") };
                    self.data[$idx] = value;
                }
            )*
        }
    };
}

named_accessors! {
    x, x_mut, set_x => 0;
    y, y_mut, set_y => 1;
    z, z_mut, set_z => 2;
    w, w_mut, set_w => 3;
    r, r_mut, set_r => 0;
    g, g_mut, set_g => 1;
    b, b_mut, set_b => 2;
    a, a_mut, set_a => 3;
    s, s_mut, set_s => 0;
    t, t_mut, set_t => 1;
    u, u_mut, set_u => 0;
    v, v_mut, set_v => 1;
}

impl<T: Copy> Vector<T, 3> {
    /// The first two components.
    #[inline]
    pub fn xy(&self) -> Vector<T, 2> {
        vec2(self.data[0], self.data[1])
    }
}

impl<T: Copy> Vector<T, 4> {
    /// The first three components.
    #[inline]
    pub fn xyz(&self) -> Vector<T, 3> {
        vec3(self.data[0], self.data[1], self.data[2])
    }
}

// ── Indexing and conversions ────────────────────────────────────────

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        debug_assert!(i < N, "index {i} out of range for vector of length {N}");
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < N, "index {i} out of range for vector of length {N}");
        &mut self.data[i]
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: core::fmt::Display, const N: usize> core::fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq, const N: usize> approx::AbsDiffEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq, const N: usize> approx::RelativeEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::UlpsEq, const N: usize> approx::UlpsEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
