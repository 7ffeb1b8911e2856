pub mod aliases;
mod affine;
mod ops;
mod square;
mod util;

pub use aliases::*;

use core::ops::{Index, IndexMut};

use num_traits::{ConstOne, ConstZero};

use crate::traits::Scalar;
use crate::Vector;

/// Fixed-size matrix with `N` rows and `M` columns.
///
/// Storage is row-major: `N` row vectors of length `M`, so flat element
/// `i * M + j` is row `i`, column `j`. `m[i]` is the `i`-th row and
/// `m[(i, j)]` a single element.
///
/// # Examples
///
/// ```
/// use geomath::{vec2, Matrix};
///
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a[1], vec2(3.0, 4.0));
/// assert_eq!(a.nrows(), 2);
///
/// let b: Matrix<f64, 3, 3> = Matrix::identity();
/// assert_eq!(b, Matrix::<f64, 3, 3>::IDENTITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const N: usize, const M: usize> {
    pub(crate) rows: [Vector<T, M>; N],
}

impl<T, const N: usize, const M: usize> Matrix<T, N, M> {
    /// Length of the main diagonal, `min(N, M)`.
    pub const RANK: usize = if N < M { N } else { M };

    /// Create a matrix from nested row arrays.
    #[inline]
    pub fn new(rows: [[T; M]; N]) -> Self {
        Self {
            rows: rows.map(Vector::new),
        }
    }

    /// Create a matrix from row vectors.
    #[inline]
    pub const fn from_rows(rows: [Vector<T, M>; N]) -> Self {
        Self { rows }
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        N
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        M
    }

    /// All elements in row-major order.
    #[inline]
    pub fn as_flat_slice(&self) -> &[T] {
        // SAFETY: Vector is repr(transparent) over [T; M], so the rows are
        // N * M contiguous, initialized T values.
        unsafe { core::slice::from_raw_parts(self.rows.as_ptr().cast::<T>(), N * M) }
    }

    /// Mutable row-major view of all elements.
    #[inline]
    pub fn as_flat_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_flat_slice`.
        unsafe { core::slice::from_raw_parts_mut(self.rows.as_mut_ptr().cast::<T>(), N * M) }
    }

    #[inline]
    pub fn into_rows(self) -> [Vector<T, M>; N] {
        self.rows
    }
}

// ── Named rows ──────────────────────────────────────────────────────

macro_rules! named_rows {
    ($($get:ident, $get_mut:ident => $idx:literal;)*) => {
        impl<T, const N: usize, const M: usize> Matrix<T, N, M> {
            $(
                #[doc = concat!("Row ", stringify!($idx), ".")]
                #[inline]
                pub fn $get(&self) -> &Vector<T, M> {
                    const { assert!($idx < N, "matrix has no such row") };
                    &self.rows[$idx]
                }

                #[doc = concat!("Mutable reference to row ", stringify!($idx), ".")]
                #[inline]
                pub fn $get_mut(&mut self) -> &mut Vector<T, M> {
                    const { assert!($idx < N, "matrix has no such row") };
                    &mut self.rows[$idx]
                }
            )*
        }
    };
}

named_rows! {
    x, x_mut => 0;
    y, y_mut => 1;
    z, z_mut => 2;
    w, w_mut => 3;
}

impl<T: ConstZero + Copy, const N: usize, const M: usize> Matrix<T, N, M> {
    /// All elements zero.
    pub const ZERO: Self = Self {
        rows: [Vector::ZERO; N],
    };
}

macro_rules! impl_identity_const {
    ($($n:literal => [$([$($e:ident),*]),*];)*) => {
        $(
            impl<T: ConstZero + ConstOne> Matrix<T, $n, $n> {
                #[doc = concat!("The ", stringify!($n), "×", stringify!($n), " identity.")]
                pub const IDENTITY: Self = Self {
                    rows: [$(Vector::new([$(T::$e),*])),*],
                };
            }
        )*
    };
}

impl_identity_const! {
    1 => [[ONE]];
    2 => [[ONE, ZERO], [ZERO, ONE]];
    3 => [[ONE, ZERO, ZERO], [ZERO, ONE, ZERO], [ZERO, ZERO, ONE]];
    4 => [
        [ONE, ZERO, ZERO, ZERO],
        [ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, ONE, ZERO],
        [ZERO, ZERO, ZERO, ONE]
    ];
    5 => [
        [ONE, ZERO, ZERO, ZERO, ZERO],
        [ZERO, ONE, ZERO, ZERO, ZERO],
        [ZERO, ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, ZERO, ONE, ZERO],
        [ZERO, ZERO, ZERO, ZERO, ONE]
    ];
    6 => [
        [ONE, ZERO, ZERO, ZERO, ZERO, ZERO],
        [ZERO, ONE, ZERO, ZERO, ZERO, ZERO],
        [ZERO, ZERO, ONE, ZERO, ZERO, ZERO],
        [ZERO, ZERO, ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, ZERO, ZERO, ONE, ZERO],
        [ZERO, ZERO, ZERO, ZERO, ZERO, ONE]
    ];
}

impl<T: Scalar, const N: usize, const M: usize> Matrix<T, N, M> {
    /// Create a matrix filled with zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self {
            rows: [Vector::zeros(); N],
        }
    }

    /// `value` on the main diagonal, zero elsewhere. Defined for every
    /// shape; only the first `RANK` diagonal positions exist.
    ///
    /// ```
    /// use geomath::Matrix;
    /// let m: Matrix<i32, 2, 3> = Matrix::from_diagonal(7);
    /// assert_eq!(m, Matrix::new([[7, 0, 0], [0, 7, 0]]));
    /// ```
    pub fn from_diagonal(value: T) -> Self {
        let mut m = Self::zeros();
        for k in 0..Self::RANK {
            m.rows[k].data[k] = value;
        }
        m
    }

    /// Place `diag` on the main diagonal. Entries past `RANK` are ignored
    /// and missing ones stay zero.
    pub fn from_diagonal_vector<const K: usize>(diag: &Vector<T, K>) -> Self {
        let mut m = Self::zeros();
        for k in 0..Self::RANK.min(K) {
            m.rows[k].data[k] = diag.data[k];
        }
        m
    }

    /// Ones on the diagonal, for any shape.
    #[inline]
    pub fn identity() -> Self {
        Self::from_diagonal(T::one())
    }

    /// Copy at most `N * M` row-major values from `src`; missing values
    /// are zero.
    ///
    /// ```
    /// use geomath::Matrix;
    /// let m: Matrix<f32, 2, 2> = Matrix::from_slice(&[1.0, 2.0, 3.0]);
    /// assert_eq!(m, Matrix::new([[1.0, 2.0], [3.0, 0.0]]));
    /// ```
    pub fn from_slice(src: &[T]) -> Self {
        let mut m = Self::zeros();
        let n = (N * M).min(src.len());
        m.as_flat_mut_slice()[..n].copy_from_slice(&src[..n]);
        m
    }
}

impl<T: Scalar, const N: usize, const M: usize> Default for Matrix<T, N, M> {
    #[inline]
    fn default() -> Self {
        Self::zeros()
    }
}

// ── Indexing ────────────────────────────────────────────────────────

impl<T, const N: usize, const M: usize> Index<usize> for Matrix<T, N, M> {
    type Output = Vector<T, M>;

    #[inline]
    fn index(&self, i: usize) -> &Vector<T, M> {
        debug_assert!(i < N, "row {i} out of range for matrix with {N} rows");
        &self.rows[i]
    }
}

impl<T, const N: usize, const M: usize> IndexMut<usize> for Matrix<T, N, M> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Vector<T, M> {
        debug_assert!(i < N, "row {i} out of range for matrix with {N} rows");
        &mut self.rows[i]
    }
}

impl<T, const N: usize, const M: usize> Index<(usize, usize)> for Matrix<T, N, M> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.rows[i].data[j]
    }
}

impl<T, const N: usize, const M: usize> IndexMut<(usize, usize)> for Matrix<T, N, M> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.rows[i].data[j]
    }
}

impl<T, const N: usize, const M: usize> From<[[T; M]; N]> for Matrix<T, N, M> {
    #[inline]
    fn from(rows: [[T; M]; N]) -> Self {
        Self::new(rows)
    }
}

impl<T, const N: usize, const M: usize> From<[Vector<T, M>; N]> for Matrix<T, N, M> {
    #[inline]
    fn from(rows: [Vector<T, M>; N]) -> Self {
        Self::from_rows(rows)
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize, const M: usize> bytemuck::Zeroable
    for Matrix<T, N, M>
{
}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize, const M: usize> bytemuck::Pod for Matrix<T, N, M> {}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq, const N: usize, const M: usize> approx::AbsDiffEq for Matrix<T, N, M>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq, const N: usize, const M: usize> approx::RelativeEq for Matrix<T, N, M>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::UlpsEq, const N: usize, const M: usize> approx::UlpsEq for Matrix<T, N, M>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vec2, vec3};

    #[test]
    fn zeros_and_identity() {
        let z: Matrix<f64, 3, 3> = Matrix::zeros();
        assert_eq!(z, Matrix::ZERO);
        assert_eq!(z[(2, 2)], 0.0);

        let id: Matrix<f64, 3, 3> = Matrix::identity();
        assert_eq!(id, Matrix::<f64, 3, 3>::IDENTITY);
        assert_eq!(id[(1, 1)], 1.0);
        assert_eq!(id[(0, 1)], 0.0);
        assert_eq!(Matrix::<i32, 6, 6>::IDENTITY.trace(), 6);
        assert_eq!(Matrix::<u8, 1, 1>::IDENTITY, Matrix::new([[1]]));
    }

    #[test]
    fn row_major_layout() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.as_flat_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(m[1], vec3(4, 5, 6));
        assert_eq!(m[(1, 2)], 6);
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(Matrix::<i32, 2, 3>::RANK, 2);
        assert_eq!(Matrix::<i32, 5, 4>::RANK, 4);
    }

    #[test]
    fn index_mut_by_row_and_element() {
        let mut m: Matrix<f64, 2, 2> = Matrix::zeros();
        m[(0, 1)] = 5.0;
        m[1] = vec2(7.0, 8.0);
        assert_eq!(m, Matrix::new([[0.0, 5.0], [7.0, 8.0]]));
        m[1][0] = -1.0;
        assert_eq!(m[(1, 0)], -1.0);
    }

    #[test]
    #[should_panic]
    fn row_index_out_of_range() {
        let m: Matrix<f32, 2, 2> = Matrix::identity();
        let i = m.nrows();
        let _ = m[i];
    }

    #[test]
    fn diagonal_constructors() {
        let m: Matrix<f64, 3, 2> = Matrix::from_diagonal(2.0);
        assert_eq!(m, Matrix::new([[2.0, 0.0], [0.0, 2.0], [0.0, 0.0]]));

        let d: Matrix<i32, 3, 3> = Matrix::from_diagonal_vector(&vec3(1, 2, 3));
        assert_eq!(d, Matrix::new([[1, 0, 0], [0, 2, 0], [0, 0, 3]]));

        let short: Matrix<i32, 3, 3> = Matrix::from_diagonal_vector(&vec2(4, 5));
        assert_eq!(short[(2, 2)], 0);

        let wide: Matrix<i32, 2, 4> = Matrix::identity();
        assert_eq!(wide, Matrix::new([[1, 0, 0, 0], [0, 1, 0, 0]]));
    }

    #[test]
    fn from_slice_pads_and_truncates() {
        let m: Matrix<i32, 2, 2> = Matrix::from_slice(&[1, 2, 3, 4, 5]);
        assert_eq!(m, Matrix::new([[1, 2], [3, 4]]));
        let p: Matrix<i32, 2, 3> = Matrix::from_slice(&[9]);
        assert_eq!(p, Matrix::new([[9, 0, 0], [0, 0, 0]]));
    }

    #[test]
    fn conversions() {
        let m: Matrix<u16, 2, 2> = [[1, 2], [3, 4]].into();
        let r: Matrix<u16, 2, 2> = [vec2(1, 2), vec2(3, 4)].into();
        assert_eq!(m, r);
        assert_eq!(m.into_rows()[0], vec2(1, 2));
        assert_eq!(Matrix::<f32, 4, 4>::default(), Matrix::ZERO);
    }

    #[test]
    fn named_rows() {
        let mut m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9], [10, 11, 12]]);
        assert_eq!(*m.x(), vec3(1, 2, 3));
        assert_eq!(*m.y(), vec3(4, 5, 6));
        assert_eq!(*m.z(), vec3(7, 8, 9));
        assert_eq!(*m.w(), vec3(10, 11, 12));

        *m.w_mut() = vec3(0, 0, 1);
        m.x_mut()[2] = -3;
        assert_eq!(m[(3, 2)], 1);
        assert_eq!(m[(0, 2)], -3);

        let two = Matrix::new([[1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(*two.y(), vec2(0.0, 1.0));
    }

    #[test]
    fn equality_is_exact() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let mut b = a;
        assert_eq!(a, b);
        b[(1, 1)] = 4.000001;
        assert_ne!(a, b);
    }
}
