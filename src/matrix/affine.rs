//! Affine 4×4 builders.
//!
//! Matrices act on column vectors (`m * v`), so the translation lives in
//! column 3 and a composite `a * b` applies `b` first.

use crate::traits::FloatScalar;
use crate::{Matrix, Vector};

impl<T: FloatScalar> Matrix<T, 4, 4> {
    /// Translation by `t`.
    ///
    /// ```
    /// use geomath::{vec3, Matrix4};
    /// let m = Matrix4::translation(&vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m.transform_point(&vec3(1.0, 1.0, 1.0)), vec3(2.0, 3.0, 4.0));
    /// ```
    pub fn translation(t: &Vector<T, 3>) -> Self {
        let mut m = Self::identity();
        for i in 0..3 {
            m.rows[i].data[3] = t.data[i];
        }
        m
    }

    /// Non-uniform scale by `s` along the coordinate axes.
    pub fn scaling(s: &Vector<T, 3>) -> Self {
        let mut m = Self::identity();
        for i in 0..3 {
            m.rows[i].data[i] = s.data[i];
        }
        m
    }

    /// Rotation by `angle` radians about the x axis.
    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::new([[l, o, o, o], [o, c, -s, o], [o, s, c, o], [o, o, o, l]])
    }

    /// Rotation by `angle` radians about the y axis.
    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::new([[c, o, s, o], [o, l, o, o], [-s, o, c, o], [o, o, o, l]])
    }

    /// Rotation by `angle` radians about the z axis.
    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::new([[c, -s, o, o], [s, c, o, o], [o, o, l, o], [o, o, o, l]])
    }

    /// Rotation by `angle` radians about a unit `axis` (Rodrigues).
    pub fn rotation_axis_angle(axis: &Vector<T, 3>, angle: T) -> Self {
        debug_assert!(
            axis.is_normalized(T::EPSILON.sqrt()),
            "rotation axis must be unit length"
        );
        let [x, y, z] = axis.data;
        let (s, c) = angle.sin_cos();
        let t = T::one() - c;
        let (o, l) = (T::zero(), T::one());
        Self::new([
            [t * x * x + c, t * x * y - s * z, t * x * z + s * y, o],
            [t * x * y + s * z, t * y * y + c, t * y * z - s * x, o],
            [t * x * z - s * y, t * y * z + s * x, t * z * z + c, o],
            [o, o, o, l],
        ])
    }

    /// Apply the matrix to a point (implicit `w = 1`), dropping the
    /// resulting `w`.
    #[inline]
    pub fn transform_point(&self, p: &Vector<T, 3>) -> Vector<T, 3> {
        let h: Vector<T, 4> = Vector::extend_from(p, &[T::one()]);
        (*self * h).xyz()
    }

    /// Apply the linear part to a direction (implicit `w = 0`).
    #[inline]
    pub fn transform_vector(&self, v: &Vector<T, 3>) -> Vector<T, 3> {
        let h: Vector<T, 4> = Vector::resize_from(v);
        (*self * h).xyz()
    }
}
