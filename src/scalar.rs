//! Scalar constants and helpers shared by every numeric type.
//!
//! Constants are associated items of [`MathConsts`], so they are evaluated at
//! compile time and can be used in `const` contexts:
//!
//! ```
//! use geomath::scalar::{radians, MathConsts};
//!
//! const HALF_TURN: f32 = f32::PI;
//! assert!((radians(180.0_f32) - HALF_TURN).abs() < 1e-6);
//! ```

use num_traits::{Float, PrimInt, Unsigned, WrappingAdd, WrappingSub};

/// Compile-time numeric constants for floating-point element types.
pub trait MathConsts: Sized {
    /// π.
    const PI: Self;
    /// π / 2.
    const PI_OVER_TWO: Self;
    /// 2π.
    const TWO_PI: Self;
    /// cos(0.5 rad). Threshold between the asin and acos branches when
    /// extracting quaternion angles.
    const COS_ONE_OVER_TWO: Self;
    /// Machine epsilon.
    const EPSILON: Self;
    /// Positive infinity.
    const INF: Self;
    /// 10⁻⁶, the relative tolerance used to detect opposite directions.
    const MICRO: Self;
}

macro_rules! impl_math_consts {
    ($($t:ident),*) => {
        $(
            impl MathConsts for $t {
                const PI: $t = core::$t::consts::PI;
                const PI_OVER_TWO: $t = core::$t::consts::FRAC_PI_2;
                const TWO_PI: $t = core::$t::consts::TAU;
                const COS_ONE_OVER_TWO: $t = 0.877_582_561_890_372_716_116_281_582_603_83;
                const EPSILON: $t = $t::EPSILON;
                const INF: $t = $t::INFINITY;
                const MICRO: $t = 1.0e-6;
            }
        )*
    };
}

impl_math_consts!(f32, f64);

// ── Angles and ranges ───────────────────────────────────────────────

/// Convert radians to degrees.
#[inline]
pub fn degrees<T: Float>(radians: T) -> T {
    radians.to_degrees()
}

/// Convert degrees to radians.
#[inline]
pub fn radians<T: Float>(degrees: T) -> T {
    degrees.to_radians()
}

/// Snap `val` to zero when its magnitude is below `deadzone`.
///
/// ```
/// use geomath::scalar::deadzone;
///
/// assert_eq!(deadzone(0.05_f32, 0.1), 0.0);
/// assert_eq!(deadzone(-0.5_f32, 0.1), -0.5);
/// ```
#[inline]
pub fn deadzone<T: Float>(val: T, deadzone: T) -> T {
    if val.abs() < deadzone {
        T::zero()
    } else {
        val
    }
}

/// Map `x` from `[min, max]` onto `[0, 1]`.
#[inline]
pub fn normalize_range<T: Float>(x: T, min: T, max: T) -> T {
    (x - min) / (max - min)
}

/// Scale `x` by `bias`, then offset by `shift`.
#[inline]
pub fn shift_bias<T: Float>(x: T, shift: T, bias: T) -> T {
    x * bias + shift
}

// ── Alignment ───────────────────────────────────────────────────────
//
// Integer helpers for padding sizes and offsets. Every `alignment` must be
// a power of two.

/// Round `value` up using a precomputed `alignment - 1` mask.
#[inline]
pub fn align_up_with_mask<T: PrimInt + Unsigned>(value: T, mask: T) -> T {
    (value + mask) & !mask
}

/// Round `value` down using a precomputed `alignment - 1` mask.
#[inline]
pub fn align_down_with_mask<T: PrimInt + Unsigned>(value: T, mask: T) -> T {
    value & !mask
}

/// Round `value` up to the next multiple of `alignment`.
///
/// ```
/// use geomath::scalar::align_up;
///
/// assert_eq!(align_up(13_u32, 8), 16);
/// assert_eq!(align_up(16_u32, 8), 16);
/// ```
#[inline]
pub fn align_up<T: PrimInt + Unsigned>(value: T, alignment: T) -> T {
    debug_assert!(alignment.count_ones() == 1, "alignment must be a power of two");
    align_up_with_mask(value, alignment - T::one())
}

/// Round `value` down to the previous multiple of `alignment`.
#[inline]
pub fn align_down<T: PrimInt + Unsigned>(value: T, alignment: T) -> T {
    debug_assert!(alignment.count_ones() == 1, "alignment must be a power of two");
    align_down_with_mask(value, alignment - T::one())
}

/// Whether `value` is a multiple of `alignment`.
#[inline]
pub fn is_aligned<T: PrimInt + Unsigned>(value: T, alignment: T) -> bool {
    debug_assert!(alignment.count_ones() == 1, "alignment must be a power of two");
    (value & (alignment - T::one())) == T::zero()
}

/// Number of `alignment`-sized blocks needed to hold `value` (ceiling division).
#[inline]
pub fn divide_by_multiple<T: PrimInt + Unsigned>(value: T, alignment: T) -> T {
    (value + alignment - T::one()) / alignment
}

/// Round up to the next power of two. Powers of two map to themselves and
/// zero maps to zero.
///
/// ```
/// use geomath::scalar::next_highest_pow2;
///
/// assert_eq!(next_highest_pow2(17_u32), 32);
/// assert_eq!(next_highest_pow2(64_u64), 64);
/// assert_eq!(next_highest_pow2(0_u32), 0);
/// ```
#[inline]
pub fn next_highest_pow2<T>(v: T) -> T
where
    T: PrimInt + Unsigned + WrappingAdd + WrappingSub,
{
    let bits = T::zero().count_zeros() as usize;
    let mut v = v.wrapping_sub(&T::one());
    let mut shift = 1;
    while shift < bits {
        v = v | (v >> shift);
        shift <<= 1;
    }
    v.wrapping_add(&T::one())
}
