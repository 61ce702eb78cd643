//! # Dual quaternion algebra
//!
//! A dual quaternion is a pair `A = a0 + ε a1` of quaternions, the primal part `a0` and
//! the dual part `a1`, with the dual unit `ε² = 0`. Multiplication follows the dual-number
//! rule:
//!
//! ```text
//! (a0 + ε a1)(b0 + ε b1) = a0 b0 + ε (a0 b1 + a1 b0)
//! ```
//!
//! where the products on the right are Hamilton products. Like the quaternion product it is
//! associative and non-commutative.
//!
//! A dual quaternion encodes a rigid-body motion when the primal part is a unit quaternion
//! and the primal and dual parts are orthogonal (`a0 · a1 = 0`).

use crate::{error::AlgebraError, quaternion::Quaternion};

/// A dual quaternion `primal + ε dual`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualQuaternion {
    /// The primal (real) part.
    pub primal: Quaternion,
    /// The dual part.
    pub dual: Quaternion,
}

impl DualQuaternion {
    /// The zero dual quaternion.
    pub const ZERO: Self = Self {
        primal: Quaternion::ZERO,
        dual: Quaternion::ZERO,
    };

    /// The identity `1 + ε 0`.
    pub const IDENTITY: Self = Self {
        primal: Quaternion::IDENTITY,
        dual: Quaternion::ZERO,
    };

    /// Create a new dual quaternion from its primal and dual parts.
    #[inline]
    pub const fn new(primal: Quaternion, dual: Quaternion) -> Self {
        Self { primal, dual }
    }

    /// Create a dual quaternion from `[w, x, y, z]` coefficients of the primal part followed
    /// by the dual part.
    pub fn from_array(coeffs: [f64; 8]) -> Self {
        Self {
            primal: Quaternion::new(coeffs[0], coeffs[1], coeffs[2], coeffs[3]),
            dual: Quaternion::new(coeffs[4], coeffs[5], coeffs[6], coeffs[7]),
        }
    }

    /// The eight coefficients, primal `[w, x, y, z]` followed by dual `[w, x, y, z]`.
    ///
    /// This is the vector layout the 8×8 operator matrices act on.
    pub fn to_array(&self) -> [f64; 8] {
        let [pw, px, py, pz] = self.primal.to_wxyz();
        let [dw, dx, dy, dz] = self.dual.to_wxyz();
        [pw, px, py, pz, dw, dx, dy, dz]
    }

    /// Read a component by index: `0` is the primal part, `1` the dual part.
    pub fn component(&self, index: usize) -> Result<Quaternion, AlgebraError> {
        match index {
            0 => Ok(self.primal),
            1 => Ok(self.dual),
            _ => Err(AlgebraError::InvalidIndex(index)),
        }
    }

    /// Return a copy with the component at `index` replaced by the quaternion `[w, x, y, z]`.
    ///
    /// Fails with [`AlgebraError::InvalidIndex`] for an index other than 0 or 1, and with
    /// [`AlgebraError::TypeMismatch`] when `coeffs` does not hold a quaternion.
    pub fn with_component(&self, index: usize, coeffs: &[f64]) -> Result<Self, AlgebraError> {
        if index > 1 {
            return Err(AlgebraError::InvalidIndex(index));
        }
        let value = Quaternion::from_slice(coeffs)?;
        let mut out = *self;
        match index {
            0 => out.primal = value,
            _ => out.dual = value,
        }
        Ok(out)
    }

    /// Component-wise conjugate `(conj(a0), conj(a1))`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            primal: self.primal.conjugate(),
            dual: self.dual.conjugate(),
        }
    }

    /// The product of the dual quaternion with its conjugate.
    #[inline]
    pub fn norm_squared(&self) -> Self {
        *self * self.conjugate()
    }

    /// Add the same quaternion to both the primal and the dual part.
    ///
    /// This is not a dual-number operation. A scalar can be broadcast with
    /// [`Quaternion::splat`].
    #[inline]
    pub fn broadcast_add(&self, rhs: Quaternion) -> Self {
        Self {
            primal: self.primal + rhs,
            dual: self.dual + rhs,
        }
    }

    /// Subtract the same quaternion from both the primal and the dual part.
    #[inline]
    pub fn broadcast_sub(&self, rhs: Quaternion) -> Self {
        Self {
            primal: self.primal - rhs,
            dual: self.dual - rhs,
        }
    }

    /// Element-wise floor division of both parts by a scalar.
    pub fn floor_div(&self, rhs: f64) -> Self {
        Self {
            primal: self.primal.floor_div(rhs),
            dual: self.dual.floor_div(rhs),
        }
    }

    /// Element-wise floor division of both parts by the coefficients of a quaternion.
    pub fn floor_div_elementwise(&self, rhs: Quaternion) -> Self {
        Self {
            primal: self.primal.floor_div_elementwise(rhs),
            dual: self.dual.floor_div_elementwise(rhs),
        }
    }

    /// Whether the dual quaternion encodes a rigid motion: unit primal part orthogonal
    /// to the dual part, both within `tolerance`.
    pub fn is_unit_rigid(&self, tolerance: f64) -> bool {
        (self.primal.length_squared() - 1.0).abs() <= tolerance
            && self.primal.dot(&self.dual).abs() <= tolerance
    }

    /// Decomposition (weighted) multiplication.
    ///
    /// There is no agreed definition for this product, so it always fails with
    /// [`AlgebraError::UnsupportedOperation`].
    pub fn decomposition_mul(&self, _rhs: &Self) -> Result<Self, AlgebraError> {
        Err(AlgebraError::UnsupportedOperation(
            "decomposition multiplication",
        ))
    }

    /// The 8×8 left multiplication operator, such that `A * B = Hp8(A) · B`.
    ///
    /// ```text
    /// [ Hp(a0)    0     ]
    /// [ Hp(a1)  Hp(a0)  ]
    /// ```
    pub fn left_operator(&self) -> faer::Mat<f64> {
        block_operator(
            self.primal.left_operator().to_cols_array_2d(),
            self.dual.left_operator().to_cols_array_2d(),
        )
    }

    /// The 8×8 right multiplication operator, such that `A * B = Hm8(B) · A`.
    ///
    /// ```text
    /// [ Hm(b0)    0     ]
    /// [ Hm(b1)  Hm(b0)  ]
    /// ```
    pub fn right_operator(&self) -> faer::Mat<f64> {
        block_operator(
            self.primal.right_operator().to_cols_array_2d(),
            self.dual.right_operator().to_cols_array_2d(),
        )
    }
}

/// Assemble the lower block-triangular 8×8 operator from the column-major 4×4 blocks
/// of the primal and dual parts.
fn block_operator(primal: [[f64; 4]; 4], dual: [[f64; 4]; 4]) -> faer::Mat<f64> {
    let mut mat = faer::Mat::<f64>::zeros(8, 8);
    for (col, (p_col, d_col)) in primal.iter().zip(dual.iter()).enumerate() {
        for row in 0..4 {
            mat.write(row, col, p_col[row]);
            mat.write(row + 4, col + 4, p_col[row]);
            mat.write(row + 4, col, d_col[row]);
        }
    }
    mat
}

impl Default for DualQuaternion {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<(Quaternion, Quaternion)> for DualQuaternion {
    #[inline]
    fn from((primal, dual): (Quaternion, Quaternion)) -> Self {
        Self::new(primal, dual)
    }
}

// Dual-number multiplication
impl std::ops::Mul<DualQuaternion> for DualQuaternion {
    type Output = DualQuaternion;

    #[inline]
    fn mul(self, rhs: DualQuaternion) -> Self::Output {
        DualQuaternion {
            primal: self.primal * rhs.primal,
            dual: self.primal * rhs.dual + self.dual * rhs.primal,
        }
    }
}

// Right-multiplies both parts by the quaternion
impl std::ops::Mul<Quaternion> for DualQuaternion {
    type Output = DualQuaternion;

    #[inline]
    fn mul(self, rhs: Quaternion) -> Self::Output {
        DualQuaternion {
            primal: self.primal * rhs,
            dual: self.dual * rhs,
        }
    }
}

impl std::ops::Mul<f64> for DualQuaternion {
    type Output = DualQuaternion;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        DualQuaternion {
            primal: self.primal * rhs,
            dual: self.dual * rhs,
        }
    }
}

impl std::ops::Mul<DualQuaternion> for f64 {
    type Output = DualQuaternion;

    #[inline]
    fn mul(self, rhs: DualQuaternion) -> Self::Output {
        rhs * self
    }
}

impl std::ops::Div<f64> for DualQuaternion {
    type Output = DualQuaternion;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        DualQuaternion {
            primal: self.primal / rhs,
            dual: self.dual / rhs,
        }
    }
}

// Divides both parts element-wise, see `Quaternion::div_elementwise`
impl std::ops::Div<Quaternion> for DualQuaternion {
    type Output = DualQuaternion;

    #[inline]
    fn div(self, rhs: Quaternion) -> Self::Output {
        DualQuaternion {
            primal: self.primal.div_elementwise(rhs),
            dual: self.dual.div_elementwise(rhs),
        }
    }
}

impl std::ops::Add<DualQuaternion> for DualQuaternion {
    type Output = DualQuaternion;

    #[inline]
    fn add(self, rhs: DualQuaternion) -> Self::Output {
        DualQuaternion {
            primal: self.primal + rhs.primal,
            dual: self.dual + rhs.dual,
        }
    }
}

impl std::ops::Sub<DualQuaternion> for DualQuaternion {
    type Output = DualQuaternion;

    #[inline]
    fn sub(self, rhs: DualQuaternion) -> Self::Output {
        DualQuaternion {
            primal: self.primal - rhs.primal,
            dual: self.dual - rhs.dual,
        }
    }
}

impl std::ops::Neg for DualQuaternion {
    type Output = DualQuaternion;

    #[inline]
    fn neg(self) -> Self::Output {
        DualQuaternion {
            primal: -self.primal,
            dual: -self.dual,
        }
    }
}

#[cfg(any(test, feature = "approx"))]
impl approx::AbsDiffEq for DualQuaternion {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        <f64 as approx::AbsDiffEq>::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.primal, &other.primal, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.dual, &other.dual, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl approx::RelativeEq for DualQuaternion {
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
        approx::RelativeEq::relative_eq(&self.primal, &other.primal, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.dual, &other.dual, epsilon, max_relative)
    }
}
