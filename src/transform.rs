//! Scale / rotate / translate composite with a lazily rebuilt matrix.
//!
//! The four logical fields are plain values; the composite 4×4 matrix is
//! cached behind a dirty flag. Setters only mark the cache stale, and the
//! next read of [`Transform::matrix`] rebuilds it once.
//!
//! The cache lives in [`Cell`]s so reads can rebuild through `&self`. That
//! makes `Transform` `Send` but not `Sync`: share it between threads only
//! behind a lock.

use core::cell::Cell;

use crate::quaternion::Quaternion;
use crate::traits::FloatScalar;
use crate::vector::aliases::Vector3;
use crate::{Matrix, Vector};

/// Composite affine transform with a cached matrix.
///
/// The matrix is
/// `T(translate) · T(origin) · R(rotation) · T(-origin) · S(scale)`:
/// scale first, then rotate about `rotation_origin`, then translate.
///
/// # Examples
///
/// ```
/// use geomath::{vec3, Transform};
///
/// let mut t = Transform::<f64>::default();
/// assert!(!t.is_dirty());
///
/// t.set_translate(vec3(1.0, 2.0, 3.0));
/// assert!(t.is_dirty());
/// assert_eq!(t.transform_point(&vec3(0.0, 0.0, 0.0)), vec3(1.0, 2.0, 3.0));
/// assert!(!t.is_dirty());
/// ```
#[derive(Debug, Clone)]
pub struct Transform<T: FloatScalar> {
    scale: Vector3<T>,
    translate: Vector3<T>,
    rotation_origin: Vector3<T>,
    rotation: Quaternion<T>,

    matrix: Cell<Matrix<T, 4, 4>>,
    dirty: Cell<bool>,
}

impl<T: FloatScalar> Transform<T> {
    /// Build from all four components.
    ///
    /// The cache starts as the identity, so the transform is dirty unless
    /// every component is its identity default.
    pub fn new(
        scale: Vector3<T>,
        translate: Vector3<T>,
        rotation_origin: Vector3<T>,
        rotation: Quaternion<T>,
    ) -> Self {
        let is_identity = scale == Vector::ONE
            && translate == Vector::ZERO
            && rotation_origin == Vector::ZERO
            && rotation == Quaternion::IDENTITY;
        Self {
            scale,
            translate,
            rotation_origin,
            rotation,
            matrix: Cell::new(Matrix::<T, 4, 4>::IDENTITY),
            dirty: Cell::new(!is_identity),
        }
    }

    #[inline]
    pub fn scale(&self) -> &Vector3<T> {
        &self.scale
    }

    #[inline]
    pub fn set_scale(&mut self, scale: Vector3<T>) {
        self.scale = scale;
        self.dirty.set(true);
    }

    #[inline]
    pub fn translate(&self) -> &Vector3<T> {
        &self.translate
    }

    #[inline]
    pub fn set_translate(&mut self, translate: Vector3<T>) {
        self.translate = translate;
        self.dirty.set(true);
    }

    /// Pivot point the rotation is applied about.
    #[inline]
    pub fn rotation_origin(&self) -> &Vector3<T> {
        &self.rotation_origin
    }

    #[inline]
    pub fn set_rotation_origin(&mut self, origin: Vector3<T>) {
        self.rotation_origin = origin;
        self.dirty.set(true);
    }

    #[inline]
    pub fn rotation(&self) -> &Quaternion<T> {
        &self.rotation
    }

    /// Set the rotation. `rotation` should be a unit quaternion.
    #[inline]
    pub fn set_rotation(&mut self, rotation: Quaternion<T>) {
        self.rotation = rotation;
        self.dirty.set(true);
    }

    /// Whether the next [`matrix`](Self::matrix) call will rebuild.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// The composite matrix, rebuilt first if any component changed since
    /// the last read.
    pub fn matrix(&self) -> Matrix<T, 4, 4> {
        if self.dirty.get() {
            self.rebuild();
        }
        self.matrix.get()
    }

    /// Apply the composite matrix to a point.
    #[inline]
    pub fn transform_point(&self, p: &Vector3<T>) -> Vector3<T> {
        self.matrix().transform_point(p)
    }

    fn rebuild(&self) {
        log::trace!("rebuilding transform matrix");
        let mut m = Matrix::translation(&self.translate);
        m *= Matrix::translation(&self.rotation_origin);
        m *= self.rotation.to_mat4();
        m *= Matrix::translation(&-self.rotation_origin);
        m *= Matrix::scaling(&self.scale);
        self.matrix.set(m);
        self.dirty.set(false);
    }
}

impl<T: FloatScalar> Default for Transform<T> {
    /// Unit scale, no translation, no rotation. Starts clean.
    fn default() -> Self {
        Self::new(
            Vector::ONE,
            Vector::ZERO,
            Vector::ZERO,
            Quaternion::IDENTITY,
        )
    }
}

impl<T: FloatScalar> From<&Transform<T>> for Matrix<T, 4, 4> {
    #[inline]
    fn from(t: &Transform<T>) -> Self {
        t.matrix()
    }
}

pub type Transformf = Transform<f32>;
pub type Transformd = Transform<f64>;
