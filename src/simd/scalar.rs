//! Generic scalar fallback for SIMD-dispatched operations.
//!
//! Used for every element type and length without a lane kernel, and on
//! architectures without SIMD support.

use crate::traits::Scalar;

/// Dot product of two fixed-length arrays, accumulated left to right.
#[inline]
pub fn dot<T: Scalar, const N: usize>(a: &[T; N], b: &[T; N]) -> T {
    let mut sum = T::zero();
    for i in 0..N {
        sum = sum + a[i] * b[i];
    }
    sum
}
