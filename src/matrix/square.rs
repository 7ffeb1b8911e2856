//! Square-matrix algebra.
//!
//! The cofactor family (`determinant`, `cofactor`, `adjugate`, `inverse`,
//! `try_inverse`) is generated for each concrete rank from 1 to 6. Rank `n`
//! expands along row 0 into rank `n - 1` minors, so the recursion is
//! resolved entirely at compile time and bottoms out at rank 1.
//!
//! From rank 2 up the expansion alternates signs, so the element type must
//! be signed (`Neg`); unsigned matrices only get the rank-1 family.

use core::ops::Neg;

use crate::error::LinalgError;
use crate::traits::Scalar;
use crate::{Matrix, Vector};

impl<T: Copy, const N: usize> Matrix<T, N, N> {
    /// Transpose without leaving the matrix: swaps every element above the
    /// diagonal with its mirror below it.
    pub fn transpose_in_place(&mut self) {
        for i in 0..N {
            for j in (i + 1)..N {
                let tmp = self.rows[i].data[j];
                self.rows[i].data[j] = self.rows[j].data[i];
                self.rows[j].data[i] = tmp;
            }
        }
    }

    /// The main diagonal.
    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self.rows[i].data[i])
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of diagonal elements.
    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.rows[i].data[i];
        }
        sum
    }

    /// Check if the matrix equals its transpose.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..N {
            for j in (i + 1)..N {
                if self.rows[i].data[j] != self.rows[j].data[i] {
                    return false;
                }
            }
        }
        true
    }
}

// ── Rank 1 ──────────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T, 1, 1> {
    /// The single element.
    #[inline]
    pub fn determinant(&self) -> T {
        self.rows[0].data[0]
    }

    /// The cofactor of a 1×1 matrix is the determinant of the empty
    /// matrix, one.
    #[inline]
    pub fn cofactor(&self, i: usize, j: usize) -> T {
        debug_assert!(i == 0 && j == 0, "cofactor ({i}, {j}) out of range");
        T::one()
    }

    #[inline]
    pub fn adjugate(&self) -> Self {
        Self::identity()
    }

    /// Reciprocal of the single element.
    #[inline]
    pub fn inverse(&self) -> Self {
        debug_assert!(
            self.determinant() != T::zero(),
            "inverse of a singular matrix"
        );
        Self::new([[T::one() / self.rows[0].data[0]]])
    }

    pub fn try_inverse(&self) -> Result<Self, LinalgError> {
        if self.determinant() == T::zero() {
            log::debug!("try_inverse: 1x1 matrix is singular");
            return Err(LinalgError::Singular);
        }
        Ok(Self::new([[T::one() / self.rows[0].data[0]]]))
    }
}

// ── Ranks 2 to 6 ────────────────────────────────────────────────────

macro_rules! impl_cofactor_family {
    ($($n:literal => $m:literal),*) => {
        $(
            impl<T: Scalar + Neg<Output = T>> Matrix<T, $n, $n> {
                /// Laplace expansion along row 0.
                pub fn determinant(&self) -> T {
                    let mut det = T::zero();
                    for j in 0..$n {
                        let term =
                            self.rows[0].data[j] * self.minor::<$m, $m>(0, j).determinant();
                        det = if j % 2 == 0 { det + term } else { det - term };
                    }
                    det
                }

                /// Signed minor, `(-1)^(i+j) * det(minor(i, j))`.
                pub fn cofactor(&self, i: usize, j: usize) -> T {
                    let d = self.minor::<$m, $m>(i, j).determinant();
                    if (i + j) % 2 == 0 {
                        d
                    } else {
                        -d
                    }
                }

                /// Transpose of the cofactor matrix.
                pub fn adjugate(&self) -> Self {
                    Self::from_fn(|i, j| self.cofactor(j, i))
                }

                /// `adjugate / det`.
                ///
                /// A singular input is a caller error: it asserts in debug
                /// builds and the result is unspecified otherwise. Use
                /// [`try_inverse`](Self::try_inverse) to test for it.
                pub fn inverse(&self) -> Self {
                    let (adj, det) = self.adjugate_and_determinant();
                    debug_assert!(det != T::zero(), "inverse of a singular matrix");
                    adj / det
                }

                /// Inverse, or [`LinalgError::Singular`] when the
                /// determinant is exactly zero.
                pub fn try_inverse(&self) -> Result<Self, LinalgError> {
                    let (adj, det) = self.adjugate_and_determinant();
                    if det == T::zero() {
                        log::debug!(
                            "try_inverse: {}x{} matrix is singular",
                            $n,
                            $n
                        );
                        return Err(LinalgError::Singular);
                    }
                    Ok(adj / det)
                }

                // Row 0 of the source against column 0 of the adjugate is
                // the cofactor expansion, so the determinant comes for free.
                fn adjugate_and_determinant(&self) -> (Self, T) {
                    let adj = self.adjugate();
                    let det = self.rows[0].dot(&adj.col(0));
                    (adj, det)
                }
            }
        )*
    };
}

impl_cofactor_family!(2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5);
