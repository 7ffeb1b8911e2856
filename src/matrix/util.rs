use core::fmt::{self, Write as _};

use crate::traits::Scalar;
use crate::{Matrix, Vector};

// ── Constructors ────────────────────────────────────────────────────

impl<T, const N: usize, const M: usize> Matrix<T, N, M> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use geomath::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, Matrix::identity());
    /// ```
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            rows: core::array::from_fn(|i| Vector::from_fn(|j| f(i, j))),
        }
    }

    /// Apply a function to every element, producing a new matrix.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Matrix<U, N, M> {
        Matrix {
            rows: self.rows.map(|r| r.map(&mut f)),
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> Matrix<T, N, M> {
    /// Resize a matrix of another shape.
    ///
    /// The top-left overlap is copied. Diagonal positions from
    /// `min(overlap rows, overlap cols)` up to `RANK` are set to one, so a
    /// smaller transform lands inside a larger identity; everything else
    /// is zero.
    ///
    /// ```
    /// use geomath::Matrix;
    /// let m3 = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// let m4: Matrix<i32, 4, 4> = Matrix::resize_from(&m3);
    /// assert_eq!(m4[3], geomath::vec4(0, 0, 0, 1));
    /// let m2: Matrix<i32, 2, 2> = Matrix::resize_from(&m3);
    /// assert_eq!(m2, Matrix::new([[1, 2], [4, 5]]));
    /// ```
    pub fn resize_from<const I: usize, const J: usize>(src: &Matrix<T, I, J>) -> Self {
        let rows = N.min(I);
        let cols = M.min(J);
        let mut out = Self::zeros();
        for i in 0..rows {
            for j in 0..cols {
                out.rows[i].data[j] = src.rows[i].data[j];
            }
        }
        for k in rows.min(cols)..Self::RANK {
            out.rows[k].data[k] = T::one();
        }
        out
    }
}

// ── Rows, columns and sub-matrices ──────────────────────────────────

impl<T: Copy, const N: usize, const M: usize> Matrix<T, N, M> {
    /// Row `i` as a vector.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<T, M> {
        self.rows[i]
    }

    /// Column `j` as a vector.
    #[inline]
    pub fn col(&self, j: usize) -> Vector<T, N> {
        debug_assert!(j < M, "column {j} out of range for matrix with {M} columns");
        Vector::from_fn(|i| self.rows[i].data[j])
    }

    #[inline]
    pub fn set_row(&mut self, i: usize, row: &Vector<T, M>) {
        self.rows[i] = *row;
    }

    pub fn set_col(&mut self, j: usize, col: &Vector<T, N>) {
        for i in 0..N {
            self.rows[i].data[j] = col.data[i];
        }
    }

    /// Transpose: (N×M) → (M×N).
    ///
    /// ```
    /// use geomath::Matrix;
    /// let a = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(a.transpose(), Matrix::new([[1, 4], [2, 5], [3, 6]]));
    /// ```
    pub fn transpose(&self) -> Matrix<T, M, N> {
        Matrix::from_fn(|i, j| self.rows[j].data[i])
    }

    /// The matrix with row `row` and column `col` removed.
    ///
    /// The output shape must be exactly one smaller in each dimension;
    /// anything else fails to compile.
    ///
    /// ```
    /// use geomath::Matrix;
    /// let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// assert_eq!(m.minor::<2, 2>(1, 1), Matrix::new([[1, 3], [7, 9]]));
    /// ```
    pub fn minor<const P: usize, const Q: usize>(&self, row: usize, col: usize) -> Matrix<T, P, Q> {
        const {
            assert!(
                P + 1 == N && Q + 1 == M,
                "a minor drops exactly one row and one column"
            )
        };
        debug_assert!(row < N && col < M, "minor ({row}, {col}) out of range");
        Matrix::from_fn(|i, j| {
            let si = if i < row { i } else { i + 1 };
            let sj = if j < col { j } else { j + 1 };
            self.rows[si].data[sj]
        })
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display, const N: usize, const M: usize> fmt::Display for Matrix<T, N, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Max width per column for alignment
        let mut widths = [0usize; M];
        for row in self.rows.iter() {
            for (j, x) in row.iter().enumerate() {
                let w = WriteCounting::count(|wc| write!(wc, "{x}"));
                widths[j] = widths[j].max(w);
            }
        }

        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "[")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:>width$}", x, width = widths[j])?;
            }
            write!(f, "]")?;
            if i + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Counts characters written, without allocating.
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
