//! Short names for common vector sizes and element types.

use crate::Vector;

/// 1-component vector.
pub type Vector1<T> = Vector<T, 1>;
/// 2-component vector.
pub type Vector2<T> = Vector<T, 2>;
/// 3-component vector.
pub type Vector3<T> = Vector<T, 3>;
/// 4-component vector.
pub type Vector4<T> = Vector<T, 4>;
/// 5-component vector.
pub type Vector5<T> = Vector<T, 5>;
/// 6-component vector.
pub type Vector6<T> = Vector<T, 6>;

pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;
pub type Vector2d = Vector2<f64>;
pub type Vector3d = Vector3<f64>;
pub type Vector4d = Vector4<f64>;
pub type Vector2i = Vector2<i32>;
pub type Vector3i = Vector3<i32>;
pub type Vector4i = Vector4<i32>;
pub type Vector2u = Vector2<u32>;
pub type Vector3u = Vector3<u32>;
pub type Vector4u = Vector4<u32>;
/// Component mask produced by the comparison functions.
pub type Vector4b = Vector4<bool>;
