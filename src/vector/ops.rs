use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Not, Sub, SubAssign};

use crate::traits::Scalar;
use crate::Vector;

// ── Component-wise binary ops ───────────────────────────────────────

macro_rules! impl_componentwise {
    ($Op:ident, $method:ident, $OpAssign:ident, $method_assign:ident, $op:tt) => {
        impl<T: Scalar, const N: usize> $Op for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                let mut out = self;
                for i in 0..N {
                    out.data[i] = self.data[i] $op rhs.data[i];
                }
                out
            }
        }

        impl<T: Scalar, const N: usize> $OpAssign for Vector<T, N> {
            #[inline]
            fn $method_assign(&mut self, rhs: Self) {
                for i in 0..N {
                    self.data[i] = self.data[i] $op rhs.data[i];
                }
            }
        }

        impl<T: Scalar, const N: usize> $OpAssign<&Vector<T, N>> for Vector<T, N> {
            #[inline]
            fn $method_assign(&mut self, rhs: &Vector<T, N>) {
                self.$method_assign(*rhs);
            }
        }

        // Vector is Copy, so &Vector ops just deref and delegate.
        impl<T: Scalar, const N: usize> $Op<Vector<T, N>> for &Vector<T, N> {
            type Output = Vector<T, N>;
            #[inline]
            fn $method(self, rhs: Vector<T, N>) -> Vector<T, N> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<&Vector<T, N>> for Vector<T, N> {
            type Output = Vector<T, N>;
            #[inline]
            fn $method(self, rhs: &Vector<T, N>) -> Vector<T, N> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<&Vector<T, N>> for &Vector<T, N> {
            type Output = Vector<T, N>;
            #[inline]
            fn $method(self, rhs: &Vector<T, N>) -> Vector<T, N> {
                (*self).$method(*rhs)
            }
        }
    };
}

impl_componentwise!(Add, add, AddAssign, add_assign, +);
impl_componentwise!(Sub, sub, SubAssign, sub_assign, -);
impl_componentwise!(Mul, mul, MulAssign, mul_assign, *);

// ── Scalar multiplication and division ──────────────────────────────

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.map(|x| x * rhs)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for &Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn mul(self, rhs: T) -> Vector<T, N> {
        (*self).mul(rhs)
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x * rhs;
        }
    }
}

/// Division by a zero scalar is a caller error: it asserts in debug builds
/// and yields IEEE infinities/NaN (or an integer panic) otherwise.
impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        debug_assert!(rhs != T::zero(), "division of a vector by zero");
        self.map(|x| x / rhs)
    }
}

impl<T: Scalar, const N: usize> Div<T> for &Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn div(self, rhs: T) -> Vector<T, N> {
        (*self).div(rhs)
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        debug_assert!(rhs != T::zero(), "division of a vector by zero");
        for x in self.data.iter_mut() {
            *x = *x / rhs;
        }
    }
}

// ── scalar * vector (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs * self
                }
            }

            impl<const N: usize> Mul<&Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: &Vector<$t, N>) -> Vector<$t, N> {
                    *rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Negation ────────────────────────────────────────────────────────
// Only for element types with a sign; `-Vector<u32, N>` does not compile.

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for &Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn neg(self) -> Vector<T, N> {
        (*self).neg()
    }
}

impl<const N: usize> Not for Vector<bool, N> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(|b| !b)
    }
}
