//! # Quaternion algebra
//!
//! A quaternion is a scalar plus a 3-vector, written here as `(w, x, y, z)`. Under the
//! Hamilton product the quaternions form an associative, non-commutative algebra.
//!
//! - Unit quaternions (`w² + x² + y² + z² = 1`) represent 3D rotations. A rotation of
//!   angle θ about the unit axis `n` is `(cos(θ/2), sin(θ/2) · n)`.
//! - Pure quaternions (`w = 0`) represent 3D vectors, in particular translations.
//!
//! ## Operator matrices
//!
//! The Hamilton product is bilinear, so left and right multiplication are linear maps
//! on R⁴. [`Quaternion::left_operator`] and [`Quaternion::right_operator`] return them
//! as 4×4 matrices acting on `(w, x, y, z)` column vectors:
//!
//! ```text
//! a * b = Hp(a) · b = Hm(b) · a
//! ```
//!
//! They are the building blocks for linearizing expressions (e.g. Jacobians) over
//! quaternion products.

use crate::error::AlgebraError;
use glam::{DMat4, DQuat, DVec3, DVec4};

/// A quaternion with double precision coefficients.
///
/// Stored as a [`glam::DQuat`]. Constructors and accessors of this type use the
/// `(w, x, y, z)` order; the underlying glam value stores `(x, y, z, w)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Quaternion(pub DQuat);

impl Quaternion {
    /// The zero quaternion.
    pub const ZERO: Self = Self(DQuat::from_xyzw(0.0, 0.0, 0.0, 0.0));

    /// The identity quaternion `(1, 0, 0, 0)`.
    pub const IDENTITY: Self = Self(DQuat::IDENTITY);

    /// Create a new quaternion from its scalar part `w` and vector part `(x, y, z)`.
    #[inline]
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self(DQuat::from_xyzw(x, y, z, w))
    }

    /// Create a quaternion from `[w, x, y, z]` coefficients.
    #[inline]
    pub const fn from_wxyz(coeffs: [f64; 4]) -> Self {
        Self::new(coeffs[0], coeffs[1], coeffs[2], coeffs[3])
    }

    /// Create a quaternion from a slice of `[w, x, y, z]` coefficients.
    ///
    /// Fails with [`AlgebraError::TypeMismatch`] unless the slice holds exactly four values.
    pub fn from_slice(coeffs: &[f64]) -> Result<Self, AlgebraError> {
        match coeffs {
            [w, x, y, z] => Ok(Self::new(*w, *x, *y, *z)),
            _ => Err(AlgebraError::TypeMismatch {
                expected: 4,
                got: coeffs.len(),
            }),
        }
    }

    /// Create a quaternion with all four coefficients set to `value`.
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create a pure quaternion `(0, v)` from a 3-vector.
    #[inline]
    pub fn from_vector(v: DVec3) -> Self {
        Self::new(0.0, v.x, v.y, v.z)
    }

    /// The coefficients as `[w, x, y, z]`.
    #[inline]
    pub fn to_wxyz(&self) -> [f64; 4] {
        [self.0.w, self.0.x, self.0.y, self.0.z]
    }

    /// The coefficients as a `(w, x, y, z)` column vector, the layout the operator matrices act on.
    #[inline]
    pub fn to_vec4(&self) -> DVec4 {
        DVec4::new(self.0.w, self.0.x, self.0.y, self.0.z)
    }

    /// Create a quaternion from a `(w, x, y, z)` column vector.
    #[inline]
    pub fn from_vec4(v: DVec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    /// The scalar (real) part `w`.
    #[inline]
    pub fn scalar(&self) -> f64 {
        self.0.w
    }

    /// The vector (imaginary) part `(x, y, z)`.
    #[inline]
    pub fn vector(&self) -> DVec3 {
        self.0.xyz()
    }

    /// The conjugate `(w, -x, -y, -z)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self(self.0.conjugate())
    }

    /// The product of the quaternion with its conjugate.
    ///
    /// The vector part of the result is zero and the scalar part is the squared magnitude.
    #[inline]
    pub fn norm_squared(&self) -> Self {
        *self * self.conjugate()
    }

    /// Dot product of the coefficient vectors.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> f64 {
        self.0.dot(rhs.0)
    }

    /// Element-wise floor division by a scalar.
    pub fn floor_div(&self, rhs: f64) -> Self {
        let [w, x, y, z] = self.to_wxyz();
        Self::new(
            (w / rhs).floor(),
            (x / rhs).floor(),
            (y / rhs).floor(),
            (z / rhs).floor(),
        )
    }

    /// Element-wise division of the coefficients by those of `rhs`.
    ///
    /// This is not the inverse of the Hamilton product. A zero coefficient in `rhs` yields an
    /// infinite or NaN coefficient, as in IEEE 754.
    #[inline]
    pub fn div_elementwise(&self, rhs: Quaternion) -> Self {
        Self::from_vec4(self.to_vec4() / rhs.to_vec4())
    }

    /// Element-wise floor division of the coefficients by those of `rhs`.
    #[inline]
    pub fn floor_div_elementwise(&self, rhs: Quaternion) -> Self {
        Self::from_vec4((self.to_vec4() / rhs.to_vec4()).floor())
    }

    /// The left multiplication operator `Hp(a)`, such that `a * b = Hp(a) · b`.
    pub fn left_operator(&self) -> DMat4 {
        let [w, x, y, z] = self.to_wxyz();
        #[rustfmt::skip]
        let rows = [
            [w, -x, -y, -z],
            [x,  w, -z,  y],
            [y,  z,  w, -x],
            [z, -y,  x,  w],
        ];
        DMat4::from_cols_array_2d(&rows).transpose()
    }

    /// The right multiplication operator `Hm(b)`, such that `a * b = Hm(b) · a`.
    pub fn right_operator(&self) -> DMat4 {
        let [w, x, y, z] = self.to_wxyz();
        #[rustfmt::skip]
        let rows = [
            [w, -x, -y, -z],
            [x,  w,  z, -y],
            [y, -z,  w,  x],
            [z,  y, -x,  w],
        ];
        DMat4::from_cols_array_2d(&rows).transpose()
    }
}

impl Default for Quaternion {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Deref for Quaternion {
    type Target = DQuat;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DQuat> for Quaternion {
    #[inline]
    fn from(q: DQuat) -> Self {
        Self(q)
    }
}

impl From<Quaternion> for DQuat {
    #[inline]
    fn from(q: Quaternion) -> Self {
        q.0
    }
}

impl From<[f64; 4]> for Quaternion {
    #[inline]
    fn from(coeffs: [f64; 4]) -> Self {
        Self::from_wxyz(coeffs)
    }
}

// Hamilton product
impl std::ops::Mul<Quaternion> for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn mul(self, rhs: Quaternion) -> Self::Output {
        Quaternion(self.0 * rhs.0)
    }
}

impl std::ops::Mul<f64> for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Quaternion(self.0 * rhs)
    }
}

impl std::ops::Mul<Quaternion> for f64 {
    type Output = Quaternion;

    #[inline]
    fn mul(self, rhs: Quaternion) -> Self::Output {
        Quaternion(rhs.0 * self)
    }
}

impl std::ops::Div<f64> for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Quaternion(self.0 / rhs)
    }
}

impl std::ops::Add<Quaternion> for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn add(self, rhs: Quaternion) -> Self::Output {
        Quaternion(self.0 + rhs.0)
    }
}

impl std::ops::Sub<Quaternion> for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn sub(self, rhs: Quaternion) -> Self::Output {
        Quaternion(self.0 - rhs.0)
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn neg(self) -> Self::Output {
        Quaternion(-self.0)
    }
}

#[cfg(any(test, feature = "approx"))]
impl approx::AbsDiffEq for Quaternion {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        <f64 as approx::AbsDiffEq>::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.to_wxyz()
            .iter()
            .zip(other.to_wxyz().iter())
            .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(any(test, feature = "approx"))]
impl approx::RelativeEq for Quaternion {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        <f64 as approx::RelativeEq>::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.to_wxyz()
            .iter()
            .zip(other.to_wxyz().iter())
            .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
    }
}
