use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;
use crate::{Matrix, Vector};

// ── Element-wise addition and subtraction ───────────────────────────

macro_rules! impl_elementwise {
    ($Op:ident, $method:ident, $OpAssign:ident, $method_assign:ident) => {
        impl<T: Scalar, const N: usize, const M: usize> $Op for Matrix<T, N, M> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                let mut out = self;
                for i in 0..N {
                    out.rows[i] = self.rows[i].$method(rhs.rows[i]);
                }
                out
            }
        }

        impl<T: Scalar, const N: usize, const M: usize> $OpAssign for Matrix<T, N, M> {
            #[inline]
            fn $method_assign(&mut self, rhs: Self) {
                for i in 0..N {
                    self.rows[i].$method_assign(rhs.rows[i]);
                }
            }
        }

        impl<T: Scalar, const N: usize, const M: usize> $OpAssign<&Matrix<T, N, M>>
            for Matrix<T, N, M>
        {
            #[inline]
            fn $method_assign(&mut self, rhs: &Matrix<T, N, M>) {
                self.$method_assign(*rhs);
            }
        }
    };
}

impl_elementwise!(Add, add, AddAssign, add_assign);
impl_elementwise!(Sub, sub, SubAssign, sub_assign);

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar + Neg<Output = T>, const N: usize, const M: usize> Neg for Matrix<T, N, M> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            rows: self.rows.map(|r| -r),
        }
    }
}

impl<T: Scalar + Neg<Output = T>, const N: usize, const M: usize> Neg for &Matrix<T, N, M> {
    type Output = Matrix<T, N, M>;

    #[inline]
    fn neg(self) -> Matrix<T, N, M> {
        (*self).neg()
    }
}

// ── Matrix product: (N×M) * (M×P) → (N×P) ───────────────────────────

impl<T: Scalar, const N: usize, const M: usize, const P: usize> Mul<Matrix<T, M, P>>
    for Matrix<T, N, M>
{
    type Output = Matrix<T, N, P>;

    /// `out[i][j] = Σ_k self[i][k] * rhs[k][j]`, each entry a row-column
    /// dot product.
    fn mul(self, rhs: Matrix<T, M, P>) -> Matrix<T, N, P> {
        let cols = rhs.transpose();
        Matrix::from_fn(|i, j| self.rows[i].dot(&cols.rows[j]))
    }
}

/// Only square right operands keep the shape, so `*=` is limited to them.
impl<T: Scalar, const N: usize, const M: usize> MulAssign<Matrix<T, M, M>> for Matrix<T, N, M> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<T, M, M>) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const N: usize, const M: usize> MulAssign<&Matrix<T, M, M>> for Matrix<T, N, M> {
    #[inline]
    fn mul_assign(&mut self, rhs: &Matrix<T, M, M>) {
        *self = *self * *rhs;
    }
}

// ── Matrix-vector products ──────────────────────────────────────────

impl<T: Scalar, const N: usize, const M: usize> Mul<Vector<T, M>> for Matrix<T, N, M> {
    type Output = Vector<T, N>;

    /// Column-vector product: entry `i` is `row(i) · v`.
    #[inline]
    fn mul(self, v: Vector<T, M>) -> Vector<T, N> {
        Vector::from_fn(|i| self.rows[i].dot(&v))
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<&Vector<T, M>> for &Matrix<T, N, M> {
    type Output = Vector<T, N>;

    #[inline]
    fn mul(self, v: &Vector<T, M>) -> Vector<T, N> {
        *self * *v
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<Matrix<T, N, M>> for Vector<T, N> {
    type Output = Vector<T, M>;

    /// Row-vector product: entry `j` is `v · col(j)`.
    fn mul(self, m: Matrix<T, N, M>) -> Vector<T, M> {
        let mut out = Vector::zeros();
        for i in 0..N {
            out += m.rows[i] * self.data[i];
        }
        out
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<&Matrix<T, N, M>> for &Vector<T, N> {
    type Output = Vector<T, M>;

    #[inline]
    fn mul(self, m: &Matrix<T, N, M>) -> Vector<T, M> {
        *self * *m
    }
}

// ── Scalar multiplication and division ──────────────────────────────

impl<T: Scalar, const N: usize, const M: usize> Mul<T> for Matrix<T, N, M> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self {
            rows: self.rows.map(|r| r * rhs),
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> MulAssign<T> for Matrix<T, N, M> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for r in self.rows.iter_mut() {
            *r *= rhs;
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> Div<T> for Matrix<T, N, M> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        debug_assert!(rhs != T::zero(), "division of a matrix by zero");
        Self {
            rows: self.rows.map(|r| r / rhs),
        }
    }
}

impl<T: Scalar, const N: usize, const M: usize> DivAssign<T> for Matrix<T, N, M> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

// ── Reference variants ──────────────────────────────────────────────
// Matrix is Copy, so &Matrix ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: Scalar, const N: usize, const M: usize> $Op<Matrix<T, N, M>>
            for &Matrix<T, N, M>
        {
            type Output = Matrix<T, N, M>;
            fn $method(self, rhs: Matrix<T, N, M>) -> Matrix<T, N, M> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const N: usize, const M: usize> $Op<&Matrix<T, N, M>>
            for Matrix<T, N, M>
        {
            type Output = Matrix<T, N, M>;
            fn $method(self, rhs: &Matrix<T, N, M>) -> Matrix<T, N, M> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const N: usize, const M: usize> $Op<&Matrix<T, N, M>>
            for &Matrix<T, N, M>
        {
            type Output = Matrix<T, N, M>;
            fn $method(self, rhs: &Matrix<T, N, M>) -> Matrix<T, N, M> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);

impl<T: Scalar, const N: usize, const M: usize, const P: usize> Mul<Matrix<T, M, P>>
    for &Matrix<T, N, M>
{
    type Output = Matrix<T, N, P>;
    fn mul(self, rhs: Matrix<T, M, P>) -> Matrix<T, N, P> {
        (*self).mul(rhs)
    }
}

impl<T: Scalar, const N: usize, const M: usize, const P: usize> Mul<&Matrix<T, M, P>>
    for Matrix<T, N, M>
{
    type Output = Matrix<T, N, P>;
    fn mul(self, rhs: &Matrix<T, M, P>) -> Matrix<T, N, P> {
        self.mul(*rhs)
    }
}

impl<T: Scalar, const N: usize, const M: usize, const P: usize> Mul<&Matrix<T, M, P>>
    for &Matrix<T, N, M>
{
    type Output = Matrix<T, N, P>;
    fn mul(self, rhs: &Matrix<T, M, P>) -> Matrix<T, N, P> {
        (*self).mul(*rhs)
    }
}

impl<T: Scalar, const N: usize, const M: usize> Mul<T> for &Matrix<T, N, M> {
    type Output = Matrix<T, N, M>;
    fn mul(self, rhs: T) -> Matrix<T, N, M> {
        (*self).mul(rhs)
    }
}

impl<T: Scalar, const N: usize, const M: usize> Div<T> for &Matrix<T, N, M> {
    type Output = Matrix<T, N, M>;
    fn div(self, rhs: T) -> Matrix<T, N, M> {
        (*self).div(rhs)
    }
}

// ── scalar * matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize, const M: usize> Mul<Matrix<$t, N, M>> for $t {
                type Output = Matrix<$t, N, M>;

                fn mul(self, rhs: Matrix<$t, N, M>) -> Matrix<$t, N, M> {
                    rhs * self
                }
            }

            impl<const N: usize, const M: usize> Mul<&Matrix<$t, N, M>> for $t {
                type Output = Matrix<$t, N, M>;

                fn mul(self, rhs: &Matrix<$t, N, M>) -> Matrix<$t, N, M> {
                    *rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vec2, vec3};

    #[test]
    fn add_sub() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);
        assert_eq!(a + b, Matrix::new([[6.0, 8.0], [10.0, 12.0]]));
        assert_eq!(b - a, Matrix::new([[4.0, 4.0], [4.0, 4.0]]));
    }

    #[test]
    fn add_assign_sub_assign() {
        let mut a = Matrix::new([[1, 2], [3, 4]]);
        let b = Matrix::new([[5, 6], [7, 8]]);
        a += b;
        assert_eq!(a[(0, 0)], 6);
        a -= &b;
        assert_eq!(a, Matrix::new([[1, 2], [3, 4]]));
    }

    #[test]
    fn negation() {
        let a = Matrix::new([[1.0, -2.0], [3.0, -4.0]]);
        assert_eq!(-a, Matrix::new([[-1.0, 2.0], [-3.0, 4.0]]));
        assert_eq!(-&a, -a);
    }

    #[test]
    fn matrix_multiply() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);
        let c = a * b;
        assert_eq!(c[(0, 0)], 19.0); // 1*5 + 2*7
        assert_eq!(c[(0, 1)], 22.0); // 1*6 + 2*8
        assert_eq!(c[(1, 0)], 43.0); // 3*5 + 4*7
        assert_eq!(c[(1, 1)], 50.0); // 3*6 + 4*8
    }

    #[test]
    fn matrix_multiply_non_square() {
        // (2×3) * (3×2) → (2×2)
        let a = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        let b = Matrix::new([[7, 8], [9, 10], [11, 12]]);
        let c = a * b;
        assert_eq!(c, Matrix::new([[58, 64], [139, 154]]));

        // (3×2) * (2×3) → (3×3)
        let d = b * a;
        assert_eq!(d[(2, 2)], 11 * 3 + 12 * 6);
    }

    #[test]
    fn mul_assign_square_rhs() {
        let mut a = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        let swap: Matrix<i32, 3, 3> = Matrix::new([[0, 1, 0], [1, 0, 0], [0, 0, 1]]);
        a *= swap;
        assert_eq!(a, Matrix::new([[2, 1, 3], [5, 4, 6]]));
        a *= &Matrix::<i32, 3, 3>::IDENTITY;
        assert_eq!(a, Matrix::new([[2, 1, 3], [5, 4, 6]]));
    }

    #[test]
    fn matrix_vector() {
        let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let v = vec3(7.0, 8.0, 9.0);
        assert_eq!(a * v, vec2(50.0, 122.0));
        assert_eq!(&a * &v, vec2(50.0, 122.0));

        let r = vec2(1.0, -1.0);
        assert_eq!(r * a, vec3(-3.0, -3.0, -3.0));
        assert_eq!(&r * &a, r * a);
        assert_eq!(r * a, a.transpose() * r);
    }

    #[test]
    fn matrix_vector_f32x4() {
        let m: Matrix<f32, 4, 4> = Matrix::from_fn(|i, j| (i * 4 + j) as f32);
        let v = Vector::new([1.0_f32, 0.0, -1.0, 2.0]);
        assert_eq!(m * v, Vector::new([4.0, 12.0, 20.0, 28.0]));
    }

    #[test]
    fn scalar_ops() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = a * 3.0;
        assert_eq!(b[(1, 1)], 12.0);
        assert_eq!(3.0 * a, b);
        assert_eq!(3.0 * &a, b);
        assert_eq!(b / 3.0, a);
        assert_eq!(&b / 3.0, a);

        let mut c = a;
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c, Matrix::new([[0.5, 1.0], [1.5, 2.0]]));
    }

    #[test]
    fn ref_variants() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);
        assert_eq!(&a + b, a + b);
        assert_eq!(a + &b, a + b);
        assert_eq!(&b - &a, b - a);
        let expected = a * b;
        assert_eq!(&a * b, expected);
        assert_eq!(a * &b, expected);
        assert_eq!(&a * &b, expected);
    }

    #[test]
    fn identity_multiply() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(a * Matrix::<f64, 2, 2>::IDENTITY, a);
        assert_eq!(Matrix::<f64, 2, 2>::IDENTITY * a, a);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "division of a matrix by zero")]
    fn divide_by_zero_asserts() {
        let _ = Matrix::<f64, 2, 2>::IDENTITY / 0.0;
    }
}
