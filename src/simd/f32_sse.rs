//! SSE-accelerated f32 kernels for x86_64.
//!
//! SSE provides 128-bit registers → 4×f32 lanes. SSE2 is part of the
//! x86_64 baseline; the SSE3 horizontal add is used when the build enables it.

use core::arch::x86_64::*;

/// Dot product of two 4-element f32 arrays.
#[inline]
pub fn dot4(a: &[f32; 4], b: &[f32; 4]) -> f32 {
    unsafe {
        let prod = _mm_mul_ps(_mm_loadu_ps(a.as_ptr()), _mm_loadu_ps(b.as_ptr()));
        horizontal_sum(prod)
    }
}

/// `(v0 + v1) + (v2 + v3)`
#[cfg(target_feature = "sse3")]
#[inline]
unsafe fn horizontal_sum(v: __m128) -> f32 {
    let pairs = _mm_hadd_ps(v, v);
    _mm_cvtss_f32(_mm_hadd_ps(pairs, pairs))
}

/// `(v0 + v2) + (v1 + v3)`
#[cfg(not(target_feature = "sse3"))]
#[inline]
unsafe fn horizontal_sum(v: __m128) -> f32 {
    let shuf = _mm_movehl_ps(v, v);
    let sums = _mm_add_ps(v, shuf);
    let shuf2 = _mm_shuffle_ps(sums, sums, 1);
    _mm_cvtss_f32(_mm_add_ss(sums, shuf2))
}
