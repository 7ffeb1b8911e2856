//! Short names for common matrix shapes and element types.

use crate::Matrix;

// ── Square ──────────────────────────────────────────────────────────

/// 1×1 matrix.
pub type Matrix1<T> = Matrix<T, 1, 1>;
/// 2×2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 3×3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// 4×4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;
/// 5×5 matrix.
pub type Matrix5<T> = Matrix<T, 5, 5>;
/// 6×6 matrix.
pub type Matrix6<T> = Matrix<T, 6, 6>;

// ── Rectangular ─────────────────────────────────────────────────────

/// 2 rows, 3 columns.
pub type Matrix2x3<T> = Matrix<T, 2, 3>;
/// 2 rows, 4 columns.
pub type Matrix2x4<T> = Matrix<T, 2, 4>;
/// 3 rows, 2 columns.
pub type Matrix3x2<T> = Matrix<T, 3, 2>;
/// 3 rows, 4 columns (an affine transform without its last row).
pub type Matrix3x4<T> = Matrix<T, 3, 4>;
/// 4 rows, 2 columns.
pub type Matrix4x2<T> = Matrix<T, 4, 2>;
/// 4 rows, 3 columns.
pub type Matrix4x3<T> = Matrix<T, 4, 3>;

// ── Element types ───────────────────────────────────────────────────

pub type Matrix2f = Matrix2<f32>;
pub type Matrix3f = Matrix3<f32>;
pub type Matrix4f = Matrix4<f32>;
pub type Matrix3x4f = Matrix3x4<f32>;
pub type Matrix2d = Matrix2<f64>;
pub type Matrix3d = Matrix3<f64>;
pub type Matrix4d = Matrix4<f64>;
pub type Matrix3x4d = Matrix3x4<f64>;
