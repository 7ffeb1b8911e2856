use crate::simd;
use crate::traits::{FloatScalar, Scalar};
use crate::Vector;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Dot product of two vectors.
    ///
    /// `Vector<f32, 4>` uses a 4-lane SIMD kernel where available; its result
    /// may differ from the scalar loop in the last bits (pairwise instead of
    /// left-to-right summation).
    ///
    /// ```
    /// use geomath::{vec3, vec4};
    /// assert_eq!(vec3(1, 2, 3).dot(&vec3(4, 5, 6)), 32); // 1*4 + 2*5 + 3*6
    /// let v = vec4(1.0_f32, 2.0, 3.0, 4.0);
    /// assert_eq!(v.dot(&v), 30.0);
    /// ```
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        simd::dot_dispatch(&self.data, &rhs.data)
    }

    /// Squared length, `dot(self, self)`.
    #[inline]
    pub fn length_sqr(&self) -> T {
        self.dot(self)
    }

    /// Component-wise minimum.
    pub fn component_min(&self, rhs: &Self) -> Self {
        self.zip_map(rhs, |a, b| if b < a { b } else { a })
    }

    /// Component-wise maximum.
    pub fn component_max(&self, rhs: &Self) -> Self {
        self.zip_map(rhs, |a, b| if b > a { b } else { a })
    }

    /// Sum of all components.
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x)
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Cross product. Defined for 3-component vectors only.
    ///
    /// ```
    /// use geomath::Vector;
    /// let z = Vector::<f64, 3>::UNIT_X.cross(&Vector::<f64, 3>::UNIT_Y);
    /// assert_eq!(z, Vector::<f64, 3>::UNIT_Z);
    /// ```
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = rhs.data;
        Self::new([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> T {
        self.length_sqr().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A vector of length exactly zero is returned unchanged, so the result
    /// is not guaranteed to be unit length in that one case.
    ///
    /// ```
    /// use geomath::{vec2, Vector};
    /// assert_eq!(vec2(3.0, 4.0).normalize(), vec2(0.6, 0.8));
    /// assert_eq!(Vector::<f32, 3>::ZERO.normalize(), Vector::ZERO);
    /// ```
    #[inline]
    pub fn normalize(&self) -> Self {
        let l = self.length();
        if l == T::zero() {
            *self
        } else {
            *self / l
        }
    }

    /// Whether `|1 - length²| < epsilon`.
    #[inline]
    pub fn is_normalized(&self, epsilon: T) -> bool {
        (T::one() - self.length_sqr()).abs() < epsilon
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(&self, rhs: &Self) -> T {
        (*self - *rhs).length()
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        self.map(|x| x.abs())
    }
}
