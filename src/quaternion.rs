use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use num_traits::{AsPrimitive, ConstOne, ConstZero};

use crate::matrix::aliases::{Matrix3, Matrix4};
use crate::simd;
use crate::traits::FloatScalar;
use crate::vector::aliases::{Vector3, Vector4};
use crate::{Matrix, Vector};

/// Quaternion for 3D rotations.
///
/// Scalar-first convention: `w` is the scalar part and `(x, y, z)` the
/// vector part, so `q[0] == q.w`. Rotation operations assume a unit
/// quaternion; normalizing is the caller's job.
///
/// # Examples
///
/// ```
/// use geomath::{vec3, Quaternion, Vector};
///
/// let q = Quaternion::from_axis_angle(&Vector::<f64, 3>::UNIT_Z, core::f64::consts::FRAC_PI_2);
/// let v = q * vec3(1.0, 0.0, 0.0);
/// assert!((v - vec3(0.0, 1.0, 0.0)).length() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Quaternion<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T> Quaternion<T> {
    /// Create a quaternion from components, scalar first.
    #[inline]
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// Components as `[w, x, y, z]`.
    #[inline]
    pub fn into_array(self) -> [T; 4] {
        [self.w, self.x, self.y, self.z]
    }
}

impl<T: ConstZero + ConstOne> Quaternion<T> {
    /// `(1, 0, 0, 0)`, no rotation.
    pub const IDENTITY: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
}

impl<T: Copy> Quaternion<T> {
    /// Scalar part plus vector part.
    #[inline]
    pub fn from_scalar_vector(w: T, v: &Vector3<T>) -> Self {
        let [x, y, z] = v.data;
        Self { w, x, y, z }
    }

    /// The scalar part, same as `w`.
    #[inline]
    pub fn s(&self) -> T {
        self.w
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub fn vec(&self) -> Vector3<T> {
        Vector::new([self.x, self.y, self.z])
    }

    #[inline]
    pub fn set_vec(&mut self, v: &Vector3<T>) {
        [self.x, self.y, self.z] = v.data;
    }

    #[inline]
    pub fn to_array(&self) -> [T; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Convert every component with `as` semantics.
    pub fn cast<U>(&self) -> Quaternion<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Quaternion::new(self.w.as_(), self.x.as_(), self.y.as_(), self.z.as_())
    }
}

impl<T: FloatScalar> Default for Quaternion<T> {
    /// The identity rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: FloatScalar> Quaternion<T> {
    /// Rotation by `angle` radians about a unit `axis`.
    #[inline]
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T) -> Self {
        let half = angle / (T::one() + T::one());
        let (s, c) = half.sin_cos();
        Self::from_scalar_vector(c, &(*axis * s))
    }

    /// Rotation from Euler angles `(pitch, yaw, roll)` in radians, about
    /// x, y and z respectively.
    ///
    /// The order of the half-angle products fixes the composition order;
    /// it is not interchangeable with other Euler conventions.
    ///
    /// ```
    /// use geomath::{vec3, Quaternion, Vector};
    /// let a = Quaternion::from_euler(&vec3(90.0_f32.to_radians(), 0.0, 0.0));
    /// let b = Quaternion::from_axis_angle(&Vector::<f32, 3>::UNIT_X, 90.0_f32.to_radians());
    /// assert!((a.w - b.w).abs() < 1e-6 && (a.x - b.x).abs() < 1e-6);
    /// ```
    pub fn from_euler(angles: &Vector3<T>) -> Self {
        let half = T::one() / (T::one() + T::one());
        let [cx, cy, cz] = (*angles * half).map(|a| a.cos()).data;
        let [sx, sy, sz] = (*angles * half).map(|a| a.sin()).data;
        Self {
            w: cx * cy * cz + sx * sy * sz,
            x: sx * cy * cz - cx * sy * sz,
            y: cx * sy * cz + sx * cy * sz,
            z: cx * cy * sz - sx * sy * cz,
        }
    }

    /// Shortest-arc rotation taking direction `u` onto direction `v`.
    ///
    /// Both inputs must be unit length. Opposite directions have no unique
    /// shortest arc; a half turn about an axis orthogonal to `u` is
    /// returned.
    pub fn from_two_vectors(u: &Vector3<T>, v: &Vector3<T>) -> Self {
        debug_assert!(
            u.is_normalized(T::EPSILON.sqrt()) && v.is_normalized(T::EPSILON.sqrt()),
            "from_two_vectors expects unit vectors"
        );
        let norm_uv = (u.dot(u) * v.dot(v)).sqrt();
        let real = norm_uv + u.dot(v);
        if real < T::MICRO * norm_uv {
            let [ux, uy, uz] = u.data;
            let axis = if ux.abs() > uz.abs() {
                Vector::new([-uy, ux, T::zero()])
            } else {
                Vector::new([T::zero(), -uz, uy])
            };
            Self::from_scalar_vector(T::zero(), &axis).normalize()
        } else {
            Self::from_scalar_vector(real, &u.cross(v)).normalize()
        }
    }

    /// Rotation from a 3×3 rotation matrix.
    ///
    /// Branches on the trace first, then on the largest diagonal element,
    /// so the square root always has a well-conditioned argument.
    pub fn from_mat3(m: &Matrix3<T>) -> Self {
        let one = T::one();
        let two = one + one;
        let half = one / two;
        let quarter = half * half;
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] =
            m.rows.map(|r| r.into_array());
        let trace = m00 + m11 + m22;

        if trace > T::zero() {
            let s = half / (trace + one).sqrt();
            Self {
                w: quarter / s,
                x: (m21 - m12) * s,
                y: (m02 - m20) * s,
                z: (m10 - m01) * s,
            }
        } else if m00 > m11 && m00 > m22 {
            let s = two * (one + m00 - m11 - m22).sqrt();
            Self {
                w: (m21 - m12) / s,
                x: quarter * s,
                y: (m01 + m10) / s,
                z: (m02 + m20) / s,
            }
        } else if m11 > m22 {
            let s = two * (one + m11 - m00 - m22).sqrt();
            Self {
                w: (m02 - m20) / s,
                x: (m01 + m10) / s,
                y: quarter * s,
                z: (m12 + m21) / s,
            }
        } else {
            let s = two * (one + m22 - m00 - m11).sqrt();
            Self {
                w: (m10 - m01) / s,
                x: (m02 + m20) / s,
                y: (m12 + m21) / s,
                z: quarter * s,
            }
        }
    }

    /// Rotation from the upper-left 3×3 block of a 4×4 matrix.
    #[inline]
    pub fn from_mat4(m: &Matrix4<T>) -> Self {
        Self::from_mat3(&Matrix::resize_from(m))
    }

    /// Equivalent 3×3 rotation matrix.
    pub fn to_mat3(&self) -> Matrix3<T> {
        let one = T::one();
        let two = one + one;
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Matrix::new([
            [one - two * (yy + zz), two * (xy - wz), two * (xz + wy)],
            [two * (xy + wz), one - two * (xx + zz), two * (yz - wx)],
            [two * (xz - wy), two * (yz + wx), one - two * (xx + yy)],
        ])
    }

    /// Equivalent 4×4 rotation matrix (no translation).
    #[inline]
    pub fn to_mat4(&self) -> Matrix4<T> {
        Matrix::resize_from(&self.to_mat3())
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// 4D dot product.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        simd::dot_dispatch(&self.to_array(), &rhs.to_array())
    }

    #[inline]
    pub fn length_sqr(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn length(&self) -> T {
        self.length_sqr().sqrt()
    }

    /// Unit quaternion in the same direction, or the identity when the
    /// length is not positive.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= T::zero() {
            Self::IDENTITY
        } else {
            *self / len
        }
    }

    /// Whether `|1 - length²| < epsilon`.
    #[inline]
    pub fn is_normalized(&self, epsilon: T) -> bool {
        (T::one() - self.length_sqr()).abs() < epsilon
    }

    /// Negate the vector part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Multiplicative inverse, `conjugate / dot(q, q)`.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.dot(self)
    }

    /// Same as the Hamilton product `self * rhs`.
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        *self * *rhs
    }
}

// ── Angle, axis and Euler extraction ────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Rotation angle in radians, in `[0, 2π)`.
    ///
    /// Near the identity, `acos(w)` loses precision, so the angle is taken
    /// from the vector length instead.
    pub fn angle(&self) -> T {
        let two = T::one() + T::one();
        if self.w.abs() > T::COS_ONE_OVER_TWO {
            let a = self.vec().length().asin() * two;
            if self.w < T::zero() {
                T::TWO_PI - a
            } else {
                a
            }
        } else {
            self.w.acos() * two
        }
    }

    /// Unit rotation axis, or `fallback` when the rotation angle is zero
    /// and the axis is undefined.
    pub fn axis(&self, fallback: &Vector3<T>) -> Vector3<T> {
        let t = T::one() - self.w * self.w;
        if t <= T::zero() {
            return *fallback;
        }
        self.vec() / t.sqrt()
    }

    /// [`axis`](Self::axis) with `+z` as the fallback.
    #[inline]
    pub fn axis_or_z(&self) -> Vector3<T> {
        self.axis(&Vector3::UNIT_Z)
    }

    /// Rotation about x in radians.
    pub fn pitch(&self) -> T {
        let two = T::one() + T::one();
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        let sin_part = two * (y * z + w * x);
        let cos_part = w * w - x * x - y * y + z * z;
        if sin_part.abs() <= T::EPSILON && cos_part.abs() <= T::EPSILON {
            // Gimbal lock: atan2(0, 0) is meaningless.
            return two * x.atan2(w);
        }
        sin_part.atan2(cos_part)
    }

    /// Rotation about y in radians, in `[-π/2, π/2]`.
    pub fn yaw(&self) -> T {
        let two = T::one() + T::one();
        let s = -two * (self.x * self.z - self.w * self.y);
        s.max(-T::one()).min(T::one()).asin()
    }

    /// Rotation about z in radians.
    pub fn roll(&self) -> T {
        let two = T::one() + T::one();
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        let sin_part = two * (x * y + w * z);
        let cos_part = w * w + x * x - y * y - z * z;
        if sin_part.abs() <= T::EPSILON && cos_part.abs() <= T::EPSILON {
            return T::zero();
        }
        sin_part.atan2(cos_part)
    }

    /// `(pitch, yaw, roll)`, the inverse of [`from_euler`](Self::from_euler)
    /// away from gimbal lock.
    #[inline]
    pub fn euler_angles(&self) -> Vector3<T> {
        Vector::new([self.pitch(), self.yaw(), self.roll()])
    }
}

// ── Interpolation ────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Component-wise affine blend. The result is not renormalized.
    ///
    /// `t` must lie in `[0, 1]`.
    #[inline]
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        debug_assert!(
            t >= T::zero() && t <= T::one(),
            "lerp parameter must be in [0, 1]"
        );
        *self * (T::one() - t) + *other * t
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// When the operands are nearly parallel the sine of the angle is too
    /// small to divide by, and the result falls back to [`lerp`](Self::lerp).
    pub fn slerp(&self, other: &Self, t: T) -> Self {
        let mut cos_theta = self.dot(other);
        let mut end = *other;
        if cos_theta < T::zero() {
            end = -end;
            cos_theta = -cos_theta;
        }

        if cos_theta > T::one() - T::EPSILON {
            return self.lerp(&end, t);
        }

        let theta = cos_theta.acos();
        (*self * ((T::one() - t) * theta).sin() + end * (t * theta).sin()) / theta.sin()
    }

    /// Spherical cubic interpolation between `q0` and `q1` with control
    /// points `s0`, `s1` (see [`intermediate`](Self::intermediate)).
    pub fn squad(q0: &Self, q1: &Self, s0: &Self, s1: &Self, t: T) -> Self {
        let two = T::one() + T::one();
        q0.slerp(q1, t)
            .slerp(&s0.slerp(s1, t), two * t * (T::one() - t))
    }

    /// Control point for [`squad`](Self::squad) at `curr`, given its
    /// neighbours.
    pub fn intermediate(prev: &Self, curr: &Self, next: &Self) -> Self {
        let four = T::one() + T::one() + T::one() + T::one();
        let inv = curr.inverse();
        (-((*next * inv).log() + (*prev * inv).log()) / four).exp() * *curr
    }
}

// ── Exponential family ───────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Quaternion exponential, `e^w (cos |v|, sin |v| · v/|v|)`.
    pub fn exp(&self) -> Self {
        let v = self.vec();
        let angle = v.length();
        let scale = self.w.exp();
        if angle < T::EPSILON {
            return Self::new(scale, T::zero(), T::zero(), T::zero());
        }
        let (s, c) = angle.sin_cos();
        Self::from_scalar_vector(c * scale, &(v * (s * scale / angle)))
    }

    /// Quaternion logarithm.
    ///
    /// A near-zero vector part leaves only the scalar logarithm; negative
    /// scalars get a π in the first vector slot, and the zero quaternion
    /// maps to infinities.
    pub fn log(&self) -> Self {
        let v = self.vec();
        let len = v.length();
        let (o, w) = (T::zero(), self.w);
        if len < T::EPSILON {
            return if w > o {
                Self::new(w.ln(), o, o, o)
            } else if w < o {
                Self::new((-w).ln(), T::PI, o, o)
            } else {
                Self::new(T::INF, T::INF, T::INF, T::INF)
            };
        }
        let t = len.atan2(w) / len;
        let half = T::one() / (T::one() + T::one());
        Self::from_scalar_vector(half * (len * len + w * w).ln(), &(v * t))
    }

    /// Raise to a real power.
    ///
    /// Returns the identity for a zero exponent or the zero quaternion, and
    /// a plain scalar power when the vector part underflows.
    pub fn pow(&self, e: T) -> Self {
        let magnitude = self.length();
        if e.abs() < T::EPSILON || magnitude == T::zero() {
            return Self::IDENTITY;
        }

        let cos_angle = self.w / magnitude;
        let angle = if cos_angle.abs() > T::COS_ONE_OVER_TWO {
            let vec_sqr = self.vec().length_sqr();
            if vec_sqr < T::min_positive_value() {
                return Self::new(self.w.powf(e), T::zero(), T::zero(), T::zero());
            }
            let a = (vec_sqr.sqrt() / magnitude).asin();
            if cos_angle < T::zero() {
                T::PI - a
            } else {
                a
            }
        } else {
            cos_angle.acos()
        };

        let new_angle = angle * e;
        let div = new_angle.sin() / angle.sin();
        let mag = magnitude.powf(e - T::one());
        Self::from_scalar_vector(
            new_angle.cos() * magnitude * mag,
            &(self.vec() * (div * mag)),
        )
    }

    /// Principal square root, `pow(0.5)`.
    #[inline]
    pub fn sqrt(&self) -> Self {
        self.pow(T::one() / (T::one() + T::one()))
    }
}

// ── Comparisons ──────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    #[inline]
    fn as_vector(&self) -> Vector4<T> {
        Vector::new(self.to_array())
    }

    pub fn less_than(&self, other: &Self) -> Vector4<bool> {
        crate::vector::less_than(&self.as_vector(), &other.as_vector())
    }

    pub fn less_than_equal(&self, other: &Self) -> Vector4<bool> {
        crate::vector::less_than_equal(&self.as_vector(), &other.as_vector())
    }

    pub fn greater_than(&self, other: &Self) -> Vector4<bool> {
        crate::vector::greater_than(&self.as_vector(), &other.as_vector())
    }

    pub fn greater_than_equal(&self, other: &Self) -> Vector4<bool> {
        crate::vector::greater_than_equal(&self.as_vector(), &other.as_vector())
    }

    /// `|self[i] - other[i]| < epsilon`. The comparison is strict, so a
    /// zero tolerance never matches.
    pub fn equal(&self, other: &Self, epsilon: T) -> Vector4<bool> {
        self.as_vector()
            .zip_map(&other.as_vector(), |a, b| (a - b).abs() < epsilon)
    }

    /// Negation of [`equal`](Self::equal).
    pub fn not_equal(&self, other: &Self, epsilon: T) -> Vector4<bool> {
        !self.equal(other, epsilon)
    }
}

// ── Indexing ─────────────────────────────────────────────────────────

impl<T> Index<usize> for Quaternion<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.w,
            1 => &self.x,
            2 => &self.y,
            3 => &self.z,
            _ => panic!("index {i} out of range for quaternion"),
        }
    }
}

impl<T> IndexMut<usize> for Quaternion<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.w,
            1 => &mut self.x,
            2 => &mut self.y,
            3 => &mut self.z,
            _ => panic!("index {i} out of range for quaternion"),
        }
    }
}

// ── Operators ────────────────────────────────────────────────────────

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    /// Negates every component. `-q` is the same rotation as `q`.
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl<T: FloatScalar> Neg for &Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn neg(self) -> Quaternion<T> {
        -*self
    }
}

macro_rules! impl_componentwise {
    ($Op:ident, $method:ident, $OpAssign:ident, $method_assign:ident, $op:tt) => {
        impl<T: FloatScalar> $Op for Quaternion<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::new(
                    self.w $op rhs.w,
                    self.x $op rhs.x,
                    self.y $op rhs.y,
                    self.z $op rhs.z,
                )
            }
        }

        impl<T: FloatScalar> $OpAssign for Quaternion<T> {
            #[inline]
            fn $method_assign(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_componentwise!(Add, add, AddAssign, add_assign, +);
impl_componentwise!(Sub, sub, SubAssign, sub_assign, -);

// Hamilton product: q1 * q2 applies q2 first.
impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self {
            w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        }
    }
}

impl<T: FloatScalar> Mul<&Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        *self * *rhs
    }
}

impl<T: FloatScalar> MulAssign for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: FloatScalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }
}

impl<T: FloatScalar> MulAssign<T> for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, s: T) {
        *self = *self * s;
    }
}

impl<T: FloatScalar> Div<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, s: T) -> Self {
        debug_assert!(s != T::zero(), "division of a quaternion by zero");
        Self::new(self.w / s, self.x / s, self.y / s, self.z / s)
    }
}

impl<T: FloatScalar> DivAssign<T> for Quaternion<T> {
    #[inline]
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Quaternion<$t>> for $t {
                type Output = Quaternion<$t>;

                #[inline]
                fn mul(self, rhs: Quaternion<$t>) -> Quaternion<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64);

// ── Rotating vectors ─────────────────────────────────────────────────

impl<T: FloatScalar> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    /// Rotate `v`: `v + 2 (w (q×v) + q×(q×v))` with `q` the vector part.
    #[inline]
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        let two = T::one() + T::one();
        let qv = self.vec();
        let uv = qv.cross(&v);
        let uuv = qv.cross(&uv);
        v + (uv * self.w + uuv) * two
    }
}

impl<T: FloatScalar> Mul<&Vector3<T>> for &Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, v: &Vector3<T>) -> Vector3<T> {
        *self * *v
    }
}

impl<T: FloatScalar> Mul<Vector4<T>> for Quaternion<T> {
    type Output = Vector4<T>;

    /// Rotate the `xyz` part, keep `w`.
    #[inline]
    fn mul(self, v: Vector4<T>) -> Vector4<T> {
        Vector::extend_from(&(self * v.xyz()), &[v.data[3]])
    }
}

impl<T: FloatScalar> Mul<Quaternion<T>> for Vector3<T> {
    type Output = Vector3<T>;

    /// Rotate by the inverse of `q`.
    #[inline]
    fn mul(self, q: Quaternion<T>) -> Vector3<T> {
        q.inverse() * self
    }
}

impl<T: FloatScalar> Mul<Quaternion<T>> for Vector4<T> {
    type Output = Vector4<T>;

    #[inline]
    fn mul(self, q: Quaternion<T>) -> Vector4<T> {
        q.inverse() * self
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl<T: FloatScalar> From<Quaternion<T>> for Matrix3<T> {
    #[inline]
    fn from(q: Quaternion<T>) -> Self {
        q.to_mat3()
    }
}

impl<T: FloatScalar> From<Quaternion<T>> for Matrix4<T> {
    #[inline]
    fn from(q: Quaternion<T>) -> Self {
        q.to_mat4()
    }
}

impl<T: FloatScalar> From<Matrix3<T>> for Quaternion<T> {
    #[inline]
    fn from(m: Matrix3<T>) -> Self {
        Self::from_mat3(&m)
    }
}

impl<T: FloatScalar> From<Matrix4<T>> for Quaternion<T> {
    #[inline]
    fn from(m: Matrix4<T>) -> Self {
        Self::from_mat4(&m)
    }
}

// ── Display ──────────────────────────────────────────────────────────

impl<T: core::fmt::Display> core::fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({} + {}i + {}j + {}k)", self.w, self.x, self.y, self.z)
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quaternion<T> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quaternion<T> {}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq> approx::AbsDiffEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon)
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq> approx::RelativeEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

#[cfg(feature = "approx")]
impl<T: approx::UlpsEq> approx::UlpsEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.w.ulps_eq(&other.w, epsilon, max_ulps)
            && self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPS: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn vec_approx_eq(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
        (0..3).all(|i| approx_eq(a[i], b[i]))
    }

    fn quat_approx_eq(a: &Quaternion<f64>, b: &Quaternion<f64>) -> bool {
        // q and -q represent the same rotation
        let direct = (0..4).all(|i| approx_eq(a[i], b[i]));
        let negated = (0..4).all(|i| approx_eq(a[i], -b[i]));
        direct || negated
    }

    fn mat_approx_eq(a: &Matrix3<f64>, b: &Matrix3<f64>) -> bool {
        a.as_flat_slice()
            .iter()
            .zip(b.as_flat_slice())
            .all(|(x, y)| approx_eq(*x, *y))
    }

    // ── Construction and layout ──────────────────────────────────

    #[test]
    fn identity_and_default() {
        let q = Quaternion::<f64>::IDENTITY;
        assert_eq!(q.into_array(), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(Quaternion::<f32>::default(), Quaternion::IDENTITY);
    }

    #[test]
    fn scalar_vector_views() {
        let mut q = Quaternion::from_scalar_vector(1.0, &vec3(2.0, 3.0, 4.0));
        assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(q.s(), 1.0);
        assert_eq!(q.vec(), vec3(2.0, 3.0, 4.0));
        assert_eq!(q[0], 1.0);
        assert_eq!(q[3], 4.0);
        q[2] = 9.0;
        assert_eq!(q.y, 9.0);
        q.set_vec(&vec3(0.0, 0.0, 0.0));
        assert_eq!(q.to_array(), [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "out of range for quaternion")]
    fn index_out_of_range() {
        let q = Quaternion::<f32>::IDENTITY;
        let _ = q[4];
    }

    #[test]
    fn cast_between_precisions() {
        let q = Quaternion::new(0.5_f64, -0.5, 0.25, 1.0);
        assert_eq!(q.cast::<f32>(), Quaternion::new(0.5_f32, -0.5, 0.25, 1.0));
    }

    #[test]
    fn from_axis_angle_z_90() {
        let q = Quaternion::from_axis_angle(&vec3(0.0, 0.0, 1.0), FRAC_PI_2);
        let h = FRAC_PI_4.cos();
        assert!(quat_approx_eq(&q, &Quaternion::new(h, 0.0, 0.0, h)));
    }

    #[test]
    fn euler_pitch_matches_axis_angle() {
        let q0 = Quaternion::from_euler(&vec3(90.0_f64.to_radians(), 0.0, 0.0));
        let q1 = Quaternion::from_axis_angle(&Vector3::UNIT_X, 90.0_f64.to_radians());
        assert!(quat_approx_eq(&q0, &q1));

        let yaw = Quaternion::from_euler(&vec3(0.0, 0.4, 0.0));
        assert!(quat_approx_eq(&yaw, &Quaternion::from_axis_angle(&Vector3::UNIT_Y, 0.4)));
        let roll = Quaternion::from_euler(&vec3(0.0, 0.0, -1.2));
        assert!(quat_approx_eq(&roll, &Quaternion::from_axis_angle(&Vector3::UNIT_Z, -1.2)));
    }

    #[test]
    fn euler_roundtrip() {
        let angles = vec3(0.3, -0.2, 0.7);
        let q = Quaternion::from_euler(&angles);
        assert!(vec_approx_eq(&q.euler_angles(), &angles));
        assert!(approx_eq(q.pitch(), 0.3));
        assert!(approx_eq(q.yaw(), -0.2));
        assert!(approx_eq(q.roll(), 0.7));
    }

    #[test]
    fn yaw_clamps_at_gimbal_lock() {
        let q = Quaternion::from_euler(&vec3(0.0, FRAC_PI_2, 0.0));
        assert!((q.yaw() - FRAC_PI_2).abs() < 1e-7);
        assert!(!q.yaw().is_nan());
    }

    #[test]
    fn pitch_and_roll_degenerate_fallbacks() {
        // Quarter turn about y: both atan2 arguments vanish.
        let q = Quaternion::from_axis_angle(&Vector3::UNIT_Y, FRAC_PI_2);
        assert_eq!(q.pitch(), 0.0);
        assert_eq!(q.roll(), 0.0);
        let r = Quaternion::new(0.5, 0.5, -0.5, 0.5);
        assert!(approx_eq(r.pitch(), FRAC_PI_2));
    }

    #[test]
    fn two_vectors_quarter_turn() {
        let q = Quaternion::from_two_vectors(&Vector3::UNIT_X, &Vector3::UNIT_Y);
        let expected = Quaternion::from_axis_angle(&Vector3::UNIT_Z, FRAC_PI_2);
        assert!(quat_approx_eq(&q, &expected));
        assert!(vec_approx_eq(&(q * Vector3::UNIT_X), &Vector3::UNIT_Y));
    }

    #[test]
    fn two_vectors_parallel_and_opposite() {
        let u = vec3(1.0, 2.0, 2.0) / 3.0;
        let same = Quaternion::from_two_vectors(&u, &u);
        assert!(quat_approx_eq(&same, &Quaternion::IDENTITY));

        let x = Vector3::<f64>::UNIT_X;
        let q = Quaternion::from_two_vectors(&x, &-x);
        assert_eq!(q, Quaternion::new(0.0, 0.0, 1.0, 0.0));
        assert!(vec_approx_eq(&(q * x), &-x));

        let z = Vector3::<f64>::UNIT_Z;
        let q = Quaternion::from_two_vectors(&z, &-z);
        assert!(approx_eq(q.vec().dot(&z), 0.0));
        assert!(vec_approx_eq(&(q * z), &-z));
    }

    // ── Core operations ──────────────────────────────────────────

    #[test]
    fn conjugate_and_inverse() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), Quaternion::new(1.0, -2.0, -3.0, -4.0));
        assert_eq!(q.length_sqr(), 30.0);
        let p = q * q.conjugate();
        assert!(quat_approx_eq(&p, &Quaternion::new(30.0, 0.0, 0.0, 0.0)));
        assert!(quat_approx_eq(&(q * q.inverse()), &Quaternion::IDENTITY));
    }

    #[test]
    fn normalize_and_zero() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0).normalize();
        assert!(approx_eq(q.length(), 1.0));
        assert!(q.is_normalized(1e-12));
        let z = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(z.normalize(), Quaternion::IDENTITY);
    }

    #[test]
    fn dot_f32_uses_all_lanes() {
        let a = Quaternion::new(1.0_f32, 2.0, 3.0, 4.0);
        assert_eq!(a.dot(&a), 30.0);
    }

    #[test]
    fn hamilton_product() {
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, Quaternion::new(-1.0, 0.0, 0.0, 0.0));
        assert_eq!(i.cross(&j), k);
        assert_eq!(&i * &j, k);

        let mut q = i;
        q *= j;
        assert_eq!(q, k);
    }

    #[test]
    fn arithmetic() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a + b, Quaternion::new(1.5, 2.5, 3.5, 4.5));
        assert_eq!(a - b, Quaternion::new(0.5, 1.5, 2.5, 3.5));
        assert_eq!(a * 2.0, Quaternion::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Quaternion::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(-a, Quaternion::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(-&a, -a);

        let mut c = a;
        c += b;
        c -= b;
        c *= 4.0;
        c /= 2.0;
        assert_eq!(c, a * 2.0);
    }

    // ── Rotation of vectors ──────────────────────────────────────

    #[test]
    fn rotate_vector_90_about_z() {
        let q = Quaternion::from_axis_angle(&Vector3::UNIT_Z, FRAC_PI_2);
        let r = q * vec3(1.0, 0.0, 0.0);
        assert!(vec_approx_eq(&r, &vec3(0.0, 1.0, 0.0)));
        assert!(vec_approx_eq(&(&q * &vec3(1.0, 0.0, 0.0)), &r));
    }

    #[test]
    fn rotate_vec4_keeps_w() {
        let q = Quaternion::from_axis_angle(&Vector3::UNIT_Z, FRAC_PI_2);
        let r = q * Vector::new([1.0, 0.0, 0.0, 7.0]);
        assert_eq!(r[3], 7.0);
        assert!(vec_approx_eq(&r.xyz(), &vec3(0.0, 1.0, 0.0)));
        let back = r * q;
        assert!(vec_approx_eq(&back.xyz(), &vec3(1.0, 0.0, 0.0)));
    }

    #[test]
    fn vector_times_quaternion_is_inverse_rotation() {
        let q = Quaternion::from_axis_angle(&vec3(1.0, 2.0, 2.0).normalize(), 0.9);
        let v = vec3(0.3, -1.0, 2.0);
        assert!(vec_approx_eq(&(v * q), &(q.inverse() * v)));
        assert!(vec_approx_eq(&((q * v) * q), &v));
    }

    #[test]
    fn composition_matches_sequential_rotation() {
        let q1 = Quaternion::from_axis_angle(&Vector3::UNIT_X, FRAC_PI_2);
        let q2 = Quaternion::from_axis_angle(&Vector3::UNIT_Y, FRAC_PI_2);
        let v = vec3(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(&((q2 * q1) * v), &(q2 * (q1 * v))));
    }

    // ── Matrix conversion ────────────────────────────────────────

    #[test]
    fn identity_matrices() {
        assert_eq!(Quaternion::<f64>::IDENTITY.to_mat3(), Matrix3::IDENTITY);
        assert_eq!(Quaternion::<f32>::IDENTITY.to_mat4(), Matrix4::IDENTITY);
        assert_eq!(Quaternion::from_mat3(&Matrix3::<f64>::IDENTITY), Quaternion::IDENTITY);
        assert_eq!(Quaternion::from_mat4(&Matrix4::<f64>::IDENTITY), Quaternion::IDENTITY);
    }

    #[test]
    fn matrix_matches_vector_rotation() {
        let q = Quaternion::from_axis_angle(&Vector3::UNIT_Y, 0.8);
        let v = vec3(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(&(q * v), &(q.to_mat3() * v)));
        assert!(vec_approx_eq(&(q * v), &q.to_mat4().transform_point(&v)));
    }

    #[test]
    fn matrix_matches_rodrigues() {
        let axis = vec3(2.0, -1.0, 2.0) / 3.0;
        let q = Quaternion::from_axis_angle(&axis, 1.3);
        let r = Matrix4::rotation_axis_angle(&axis, 1.3);
        let m: Matrix4<f64> = q.into();
        for (a, b) in m.as_flat_slice().iter().zip(r.as_flat_slice()) {
            assert!(approx_eq(*a, *b));
        }
    }

    #[test]
    fn from_mat3_all_branches() {
        let cases = [
            (Vector3::UNIT_X, 0.1),      // trace > 0
            (Vector3::UNIT_X, PI - 0.01), // m00 largest
            (Vector3::UNIT_Y, PI - 0.01), // m11 largest
            (Vector3::UNIT_Z, PI - 0.01), // m22 largest
            (vec3(1.0, 1.0, 1.0).normalize(), 2.5),
        ];
        for (axis, angle) in cases {
            let q = Quaternion::from_axis_angle(&axis, angle);
            let m = q.to_mat3();
            let back = Quaternion::from_mat3(&m);
            assert!(quat_approx_eq(&q, &back), "axis {axis} angle {angle}");
            assert!(mat_approx_eq(&back.to_mat3(), &m));
            let via_from: Quaternion<f64> = Matrix4::from(q).into();
            assert!(quat_approx_eq(&q, &via_from));
        }
    }

    // ── Angle and axis ───────────────────────────────────────────

    #[test]
    fn angle_both_branches() {
        let axis = vec3(0.0, 0.6, 0.8);
        for angle in [0.3, 1.5, 3.0, 2.0 * PI - 0.2] {
            let q = Quaternion::from_axis_angle(&axis, angle);
            assert!((q.angle() - angle).abs() < 1e-10, "angle {angle}");
        }
    }

    #[test]
    fn axis_and_fallback() {
        let axis = vec3(0.0, 0.6, 0.8);
        let q = Quaternion::from_axis_angle(&axis, 1.1);
        assert!(vec_approx_eq(&q.axis_or_z(), &axis));
        let fallback = vec3(1.0, 0.0, 0.0);
        assert_eq!(Quaternion::IDENTITY.axis(&fallback), fallback);
        assert_eq!(Quaternion::<f64>::IDENTITY.axis_or_z(), Vector3::UNIT_Z);
    }

    // ── Interpolation ────────────────────────────────────────────

    #[test]
    fn lerp_endpoints_exact() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(-1.0, 0.5, 0.0, 2.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), Quaternion::new(0.0, 1.25, 1.5, 3.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "lerp parameter")]
    fn lerp_outside_unit_interval_asserts() {
        let a = Quaternion::<f64>::IDENTITY;
        let _ = a.lerp(&a, 1.5);
    }

    #[test]
    fn slerp_endpoints() {
        let a = Quaternion::from_axis_angle(&Vector3::UNIT_X, 0.3);
        let b = Quaternion::from_axis_angle(&Vector3::UNIT_Z, 1.0);
        assert!(quat_approx_eq(&a.slerp(&b, 0.0), &a));
        assert!(quat_approx_eq(&a.slerp(&b, 1.0), &b));
    }

    #[test]
    fn slerp_midpoint() {
        let a = Quaternion::<f64>::IDENTITY;
        let b = Quaternion::from_axis_angle(&Vector3::UNIT_Z, FRAC_PI_2);
        let expected = Quaternion::from_axis_angle(&Vector3::UNIT_Z, FRAC_PI_4);
        assert!(quat_approx_eq(&a.slerp(&b, 0.5), &expected));
    }

    #[test]
    fn slerp_takes_short_path() {
        let a = Quaternion::from_axis_angle(&Vector3::UNIT_Z, 0.2);
        let b = -Quaternion::from_axis_angle(&Vector3::UNIT_Z, 0.6);
        let mid = a.slerp(&b, 0.5);
        assert!(quat_approx_eq(&mid, &Quaternion::from_axis_angle(&Vector3::UNIT_Z, 0.4)));
        assert!(mid.w > 0.0);
    }

    #[test]
    fn slerp_nearly_parallel_falls_back_to_lerp() {
        let a = Quaternion::<f64>::IDENTITY;
        let s = a.slerp(&a, 0.25);
        assert_eq!(s, a);
    }

    #[test]
    fn slerp_unit_output() {
        let a = Quaternion::from_axis_angle(&Vector3::UNIT_X, 0.3);
        let b = Quaternion::from_axis_angle(&Vector3::UNIT_Y, 1.5);
        for i in 0..=10 {
            let s = a.slerp(&b, i as f64 / 10.0);
            assert!(approx_eq(s.length(), 1.0));
        }
    }

    #[test]
    fn squad_endpoints_and_intermediate() {
        let axis = vec3(0.0, 0.0, 1.0);
        let q0 = Quaternion::from_axis_angle(&axis, 0.0);
        let q1 = Quaternion::from_axis_angle(&axis, 0.5);
        let q2 = Quaternion::from_axis_angle(&axis, 1.0);
        let q3 = Quaternion::from_axis_angle(&axis, 1.5);

        // Constant-rate rotation: the control point is the key itself.
        let s1 = Quaternion::intermediate(&q0, &q1, &q2);
        let s2 = Quaternion::intermediate(&q1, &q2, &q3);
        assert!(quat_approx_eq(&s1, &q1));
        assert!(quat_approx_eq(&s2, &q2));

        assert!(quat_approx_eq(&Quaternion::squad(&q1, &q2, &s1, &s2, 0.0), &q1));
        assert!(quat_approx_eq(&Quaternion::squad(&q1, &q2, &s1, &s2, 1.0), &q2));
        let mid = Quaternion::squad(&q1, &q2, &s1, &s2, 0.5);
        assert!(quat_approx_eq(&mid, &Quaternion::from_axis_angle(&axis, 0.75)));
    }

    // ── Exponential family ───────────────────────────────────────

    #[test]
    fn exp_log_roundtrip() {
        let q = Quaternion::from_axis_angle(&vec3(0.0, 0.6, 0.8), 1.2);
        let l = q.log();
        assert!(approx_eq(l.w, 0.0));
        assert!(vec_approx_eq(&l.vec(), &(vec3(0.0, 0.6, 0.8) * 0.6)));
        assert!(quat_approx_eq(&l.exp(), &q));

        let p = Quaternion::new(2.0, 0.1, -0.2, 0.3);
        assert!(quat_approx_eq(&p.log().exp(), &p));
    }

    #[test]
    fn exp_scalar_only() {
        let q = Quaternion::new(1.0, 0.0, 0.0, 0.0).exp();
        assert_eq!(q, Quaternion::new(1.0_f64.exp(), 0.0, 0.0, 0.0));
        assert_eq!(Quaternion::new(0.0, 0.0, 0.0, 0.0).exp(), Quaternion::<f64>::IDENTITY);
    }

    #[test]
    fn log_degenerate_cases() {
        assert_eq!(
            Quaternion::new(2.0_f64, 0.0, 0.0, 0.0).log(),
            Quaternion::new(2.0_f64.ln(), 0.0, 0.0, 0.0)
        );
        assert_eq!(
            Quaternion::new(-2.0_f64, 0.0, 0.0, 0.0).log(),
            Quaternion::new(2.0_f64.ln(), PI, 0.0, 0.0)
        );
        let z = Quaternion::new(0.0_f64, 0.0, 0.0, 0.0).log();
        assert!(z.to_array().iter().all(|c| *c == f64::INFINITY));
    }

    #[test]
    fn pow_special_exponents() {
        let q = Quaternion::from_axis_angle(&vec3(0.0, 0.6, 0.8), 1.0);
        assert_eq!(q.pow(0.0), Quaternion::IDENTITY);
        assert!(quat_approx_eq(&q.pow(1.0), &q));
        assert!(quat_approx_eq(&q.pow(2.0), &(q * q)));
        assert!(quat_approx_eq(&q.pow(-1.0), &q.inverse()));
        assert_eq!(Quaternion::new(0.0, 0.0, 0.0, 0.0).pow(3.0), Quaternion::<f64>::IDENTITY);
    }

    #[test]
    fn pow_small_and_negative_scalar() {
        // asin branch with a small angle and with a negative scalar part
        let small = Quaternion::from_axis_angle(&Vector3::UNIT_X, 0.2);
        assert!(quat_approx_eq(&small.pow(3.0), &Quaternion::from_axis_angle(&Vector3::UNIT_X, 0.6)));
        let flipped = -small;
        assert!(quat_approx_eq(&flipped.pow(1.0), &flipped));

        // vector part underflows: plain scalar power
        let s = Quaternion::new(4.0, 0.0, 0.0, 0.0);
        assert_eq!(s.pow(0.5), Quaternion::new(2.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn sqrt_squares_back() {
        let q = Quaternion::from_axis_angle(&vec3(1.0, 0.0, 0.0), 2.2);
        let r = q.sqrt();
        assert!(quat_approx_eq(&(r * r), &q));
        assert!(quat_approx_eq(&r, &Quaternion::from_axis_angle(&vec3(1.0, 0.0, 0.0), 1.1)));
    }

    // ── Comparisons and display ──────────────────────────────────

    #[test]
    fn comparisons() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(1.0, 3.0, 2.0, 4.5);
        assert_eq!(a.less_than(&b).into_array(), [false, true, false, true]);
        assert_eq!(a.less_than_equal(&b).into_array(), [true, true, false, true]);
        assert_eq!(a.greater_than(&b).into_array(), [false, false, true, false]);
        assert_eq!(a.greater_than_equal(&b).into_array(), [true, false, true, false]);
        assert_eq!(a.equal(&b, 0.75).into_array(), [true, false, false, true]);
        assert_eq!(a.not_equal(&b, 0.75).into_array(), [false, true, true, false]);
        // strict comparison: zero tolerance never matches
        assert!(!a.equal(&a, 0.0).any());
    }

    #[test]
    fn display() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(format!("{q}"), "(1 + 2i + 3j + 4k)");
    }

    #[test]
    fn f32_basic() {
        let q = Quaternion::from_axis_angle(&Vector3::UNIT_Z, core::f32::consts::FRAC_PI_2);
        let r = q * vec3(1.0_f32, 0.0, 0.0);
        assert!(r[0].abs() < 1e-6);
        assert!((r[1] - 1.0).abs() < 1e-6);
    }
}
