//! NEON-accelerated f32 kernels for aarch64.
//!
//! NEON provides 128-bit registers → 4×f32 lanes.

use core::arch::aarch64::*;

/// Dot product of two 4-element f32 arrays using NEON.
///
/// Multiplies and adds separately (no fused multiply-add) so every product
/// is rounded the same way as in the scalar loop.
#[inline]
pub fn dot4(a: &[f32; 4], b: &[f32; 4]) -> f32 {
    unsafe {
        let va = vld1q_f32(a.as_ptr());
        let vb = vld1q_f32(b.as_ptr());
        vaddvq_f32(vmulq_f32(va, vb))
    }
}
