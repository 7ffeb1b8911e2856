use core::fmt::Debug;
use num_traits::{ConstOne, ConstZero, Float, Num, One, Zero};

use crate::scalar::MathConsts;

/// Trait for types that can be used as vector and matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
///
/// `ConstZero`/`ConstOne` back the compile-time `ZERO`, `ONE` and
/// `IDENTITY` constants. `'static` is required so the SIMD layer can
/// recognise concrete element types at monomorphization time.
pub trait Scalar:
    Copy + PartialEq + PartialOrd + Debug + Zero + One + ConstZero + ConstOne + Num + 'static
{
}

impl<T> Scalar for T where
    T: Copy + PartialEq + PartialOrd + Debug + Zero + One + ConstZero + ConstOne + Num + 'static
{
}

/// Trait for floating-point elements.
///
/// Required by operations that need `sqrt`, `sin`, `abs`, etc.
/// (lengths, normalization, quaternions, rotation builders).
pub trait FloatScalar: Scalar + Float + MathConsts {}

impl<T: Scalar + Float + MathConsts> FloatScalar for T {}
