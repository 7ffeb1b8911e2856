//! Component-wise comparison, boolean algebra and the elementary function
//! bank.
//!
//! Comparisons return a `Vector<bool, N>` mask that is reduced with
//! [`any`], [`all`] and [`negate`]:
//!
//! ```
//! use geomath::{all, any, equal_eps, less_than, vec3};
//!
//! let a = vec3(1.0_f32, 2.0, 3.0);
//! let b = vec3(1.0_f32, 2.0000001, 4.0);
//! assert!(any(&less_than(&a, &b)));
//! assert!(!all(&equal_eps(&a, &b, 1e-5)));
//! ```

use crate::traits::{FloatScalar, Scalar};
use crate::Vector;

// ── Boolean algebra ─────────────────────────────────────────────────

/// `true` if any component is `true`.
#[inline]
pub fn any<const N: usize>(v: &Vector<bool, N>) -> bool {
    v.data.iter().any(|&b| b)
}

/// `true` if every component is `true` (vacuously true for `N == 0`).
#[inline]
pub fn all<const N: usize>(v: &Vector<bool, N>) -> bool {
    v.data.iter().all(|&b| b)
}

/// Component-wise logical not.
#[inline]
pub fn negate<const N: usize>(v: &Vector<bool, N>) -> Vector<bool, N> {
    !*v
}

impl<const N: usize> Vector<bool, N> {
    #[inline]
    pub fn any(&self) -> bool {
        any(self)
    }

    #[inline]
    pub fn all(&self) -> bool {
        all(self)
    }

    #[inline]
    pub fn negate(&self) -> Self {
        negate(self)
    }
}

// ── Comparisons ─────────────────────────────────────────────────────

macro_rules! compare_fn {
    ($($(#[$doc:meta])* $name:ident => $op:tt;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<T: PartialOrd + Copy, const N: usize>(
                a: &Vector<T, N>,
                b: &Vector<T, N>,
            ) -> Vector<bool, N> {
                a.zip_map(b, |x, y| x $op y)
            }
        )*
    };
}

compare_fn! {
    /// `a[i] < b[i]`
    less_than => <;
    /// `a[i] <= b[i]`
    less_than_equal => <=;
    /// `a[i] > b[i]`
    greater_than => >;
    /// `a[i] >= b[i]`
    greater_than_equal => >=;
}

#[inline]
fn abs_diff<T: Scalar>(a: T, b: T) -> T {
    if a > b {
        a - b
    } else {
        b - a
    }
}

/// `|a[i] - b[i]| <= epsilon[i]`. A zero tolerance is exact equality.
#[inline]
pub fn equal<T: Scalar, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
    epsilon: &Vector<T, N>,
) -> Vector<bool, N> {
    Vector::from_fn(|i| abs_diff(a.data[i], b.data[i]) <= epsilon.data[i])
}

/// [`equal`] with the same tolerance for every component.
#[inline]
pub fn equal_eps<T: Scalar, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
    epsilon: T,
) -> Vector<bool, N> {
    equal(a, b, &Vector::splat(epsilon))
}

/// Negation of [`equal`].
#[inline]
pub fn not_equal<T: Scalar, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
    epsilon: &Vector<T, N>,
) -> Vector<bool, N> {
    negate(&equal(a, b, epsilon))
}

/// Negation of [`equal_eps`].
#[inline]
pub fn not_equal_eps<T: Scalar, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
    epsilon: T,
) -> Vector<bool, N> {
    negate(&equal_eps(a, b, epsilon))
}

// ── Elementary functions ────────────────────────────────────────────

macro_rules! unary_fn {
    ($($name:ident),*) => {
        $(
            #[doc = concat!("Component-wise `", stringify!($name), "`.")]
            #[inline]
            pub fn $name<T: FloatScalar, const N: usize>(v: &Vector<T, N>) -> Vector<T, N> {
                v.map(|x| x.$name())
            }
        )*
    };
}

unary_fn!(sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, asinh, acosh, atanh, abs);

/// Component-wise four-quadrant arctangent of `y / x`.
#[inline]
pub fn atan2<T: FloatScalar, const N: usize>(y: &Vector<T, N>, x: &Vector<T, N>) -> Vector<T, N> {
    y.zip_map(x, |a, b| a.atan2(b))
}

/// Component-wise radians to degrees.
#[inline]
pub fn degrees<T: FloatScalar, const N: usize>(v: &Vector<T, N>) -> Vector<T, N> {
    v.map(crate::scalar::degrees)
}

/// Component-wise degrees to radians.
#[inline]
pub fn radians<T: FloatScalar, const N: usize>(v: &Vector<T, N>) -> Vector<T, N> {
    v.map(crate::scalar::radians)
}

// ── Swizzle ─────────────────────────────────────────────────────────

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Gather components by index into a new vector of length `K`.
    ///
    /// ```
    /// use geomath::{vec2, vec4};
    /// let v = vec4(1, 2, 3, 4);
    /// assert_eq!(v.swizzle([3, 0]), vec2(4, 1));
    /// assert_eq!(v.swizzle([1, 1, 1]).into_array(), [2, 2, 2]);
    /// ```
    #[inline]
    pub fn swizzle<const K: usize>(&self, indices: [usize; K]) -> Vector<T, K> {
        indices.map(|i| self[i]).into()
    }
}

/// Free-function form of [`Vector::swizzle`].
#[inline]
pub fn swizzle<T: Copy, const N: usize, const K: usize>(
    v: &Vector<T, N>,
    indices: [usize; K],
) -> Vector<T, K> {
    v.swizzle(indices)
}
