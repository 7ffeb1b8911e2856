//! # geomath
//!
//! Fixed-size linear algebra for geometry and graphics transforms, no-std
//! compatible. Every type is a stack value with compile-time dimensions.
//!
//! ## Quick start
//!
//! ```
//! use geomath::{vec3, Matrix4, Quaternion, Vector};
//!
//! // Rotate a point a quarter turn about z, then move it along x.
//! let q = Quaternion::from_axis_angle(&Vector::<f64, 3>::UNIT_Z, core::f64::consts::FRAC_PI_2);
//! let m = Matrix4::translation(&vec3(1.0, 0.0, 0.0)) * q.to_mat4();
//! let p = m.transform_point(&vec3(1.0, 0.0, 0.0));
//! assert!((p - vec3(1.0, 1.0, 0.0)).length() < 1e-12);
//!
//! // Cofactor inverse
//! let a = Matrix4::translation(&vec3(1.0, 2.0, 3.0));
//! assert_eq!(a.inverse(), Matrix4::translation(&vec3(-1.0, -2.0, -3.0)));
//! ```
//!
//! ## Modules
//!
//! - [`vector`] — `Vector<T, N>`: component-wise arithmetic, dot, cross,
//!   length, named accessors (`x/y/z/w`, `r/g/b/a`, `s/t`, `u/v`),
//!   comparison masks, swizzles and an elementwise function bank.
//!
//! - [`matrix`] — `Matrix<T, N, M>` with `N` rows of `M` columns, stored
//!   row-major. Products, transpose, minors, and the cofactor family
//!   (`determinant`, `cofactor`, `adjugate`, `inverse`, `try_inverse`)
//!   for square ranks 1 to 6. Affine 4×4 builders.
//!
//! - [`quaternion`] — Scalar-first `(w, x, y, z)` rotations: axis-angle,
//!   Euler and matrix conversions, Hamilton product, `slerp`/`squad`,
//!   `exp`/`log`/`pow`.
//!
//! - [`transform`] — `Transform<T>`: scale, pivot rotation and translation
//!   composed into a 4×4 matrix that is rebuilt only after a change.
//!
//! - [`scalar`] — Angle conversion, range remapping and integer alignment
//!   helpers, plus the [`MathConsts`] constants.
//!
//! - [`traits`] — Element traits:
//!   - [`Scalar`] — all elements (`Copy + PartialOrd + Num` with const zero/one)
//!   - [`FloatScalar`] — real floats, used by lengths, rotations and quaternions
//!
//! The 4-wide `f32` dot product is routed to SSE or NEON kernels when the
//! target supports them; every other element type and width uses a scalar
//! loop. The choice is made per monomorphization and does not change results
//! beyond floating-point summation order.
//!
//! ## Cargo features
//!
//! | Feature    | Default  | Description |
//! |------------|----------|-------------|
//! | `std`      | yes      | Hardware FPU via system libm, `std::error::Error` |
//! | `libm`     | baseline | Pure-Rust software float fallback |
//! | `approx`   | no       | `AbsDiffEq` / `RelativeEq` / `UlpsEq` for all types |
//! | `bytemuck` | no       | `Pod` / `Zeroable` for GPU upload |
//! | `all`      | no       | All features |
//!
//! Build with `-C target-feature=+sse3` on x86_64 to get the horizontal-add
//! dot kernel.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod error;
pub mod matrix;
pub mod quaternion;
pub mod scalar;
mod simd;
pub mod traits;
pub mod transform;
pub mod vector;

pub use error::LinalgError;
pub use matrix::aliases::{
    Matrix1, Matrix2, Matrix2d, Matrix2f, Matrix2x3, Matrix2x4, Matrix3, Matrix3d, Matrix3f,
    Matrix3x2, Matrix3x4, Matrix3x4d, Matrix3x4f, Matrix4, Matrix4d, Matrix4f, Matrix4x2,
    Matrix4x3, Matrix5, Matrix6,
};
pub use matrix::Matrix;
pub use quaternion::Quaternion;
pub use scalar::MathConsts;
pub use traits::{FloatScalar, Scalar};
pub use transform::{Transform, Transformd, Transformf};
pub use vector::aliases::{
    Vector1, Vector2, Vector2d, Vector2f, Vector2i, Vector2u, Vector3, Vector3d, Vector3f,
    Vector3i, Vector3u, Vector4, Vector4b, Vector4d, Vector4f, Vector4i, Vector4u, Vector5,
    Vector6,
};
pub use vector::{
    all, any, equal, equal_eps, greater_than, greater_than_equal, less_than, less_than_equal,
    negate, not_equal, not_equal_eps, swizzle, vec2, vec3, vec4, Vector,
};

/// Quaternion aliases.
pub type Quaternionf = Quaternion<f32>;
pub type Quaterniond = Quaternion<f64>;
