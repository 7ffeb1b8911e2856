//! SIMD-accelerated kernels with compile-time architecture dispatch.
//!
//! This module is private: it accelerates the dot product behind
//! [`Vector::dot`](crate::Vector::dot), matrix-vector products and
//! [`Quaternion::dot`](crate::Quaternion::dot). The public API is unchanged.
//!
//! ## Dispatch strategy
//!
//! Dispatch happens at monomorphization time on the pair
//! `(TypeId::of::<T>(), N)`. For `Vector<f32, 4>` the compiler selects the
//! 4-lane kernel and dead-code-eliminates the fallback. Every other element
//! type and length uses the generic scalar loop.
//!
//! ## Rounding
//!
//! The scalar loop accumulates left to right, `((a0 + a1) + a2) + a3`. The
//! lane kernels reduce pairwise, so results may differ from the scalar loop
//! in the last bits. Exact inputs (small integers, powers of two) agree
//! bit for bit.
//!
//! ## Architecture support
//!
//! | Arch      | ISA   | Horizontal reduction          |
//! |-----------|-------|-------------------------------|
//! | `x86_64`  | SSE3  | `haddps` twice                |
//! | `x86_64`  | SSE2  | `movhlps` + `shufps` + `addss`|
//! | `aarch64` | NEON  | `faddp` across lanes          |
//! | other     | scalar| left-to-right loop            |
//!
//! SSE3 is selected with `-C target-feature=+sse3` (or `target-cpu=native`).

pub(crate) mod scalar;

#[cfg(target_arch = "aarch64")]
pub(crate) mod f32_neon;

#[cfg(target_arch = "x86_64")]
pub(crate) mod f32_sse;

use core::any::TypeId;

use crate::traits::Scalar;

/// Dispatch a fixed-length dot product to SIMD or scalar fallback.
#[inline]
pub(crate) fn dot_dispatch<T: Scalar, const N: usize>(a: &[T; N], b: &[T; N]) -> T {
    if N == 4 && TypeId::of::<T>() == TypeId::of::<f32>() {
        #[cfg(target_arch = "x86_64")]
        {
            let a = unsafe { &*(a as *const [T; N] as *const [f32; 4]) };
            let b = unsafe { &*(b as *const [T; N] as *const [f32; 4]) };
            let result = f32_sse::dot4(a, b);
            return unsafe { *(&result as *const f32 as *const T) };
        }
        #[cfg(target_arch = "aarch64")]
        {
            let a = unsafe { &*(a as *const [T; N] as *const [f32; 4]) };
            let b = unsafe { &*(b as *const [T; N] as *const [f32; 4]) };
            let result = f32_neon::dot4(a, b);
            return unsafe { *(&result as *const f32 as *const T) };
        }
    }
    scalar::dot(a, b)
}
