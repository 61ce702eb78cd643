//! Elementary rotations and translations.
//!
//! These are the quaternions a pose is built from. Their invariants are checked once, when
//! they are constructed, so that every pose built from them encodes a rigid motion.

use crate::error::KinematicsError;
use dqkin_algebra::Quaternion;
use glam::DVec3;

/// Absolute tolerance used to accept a norm as unit.
pub const UNIT_TOLERANCE: f64 = 1e-8;

/// A rotation, stored as a unit quaternion `(cos(θ/2), sin(θ/2) · axis)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation(Quaternion);

impl Rotation {
    /// The identity rotation.
    pub const IDENTITY: Self = Self(Quaternion::IDENTITY);

    /// Create a rotation of `angle` radians about `axis`.
    ///
    /// PRECONDITION: `axis` is a unit vector. It is not normalized here; an axis whose norm
    /// differs from one by more than [`UNIT_TOLERANCE`] fails with
    /// [`KinematicsError::NonUnitAxis`].
    pub fn new(angle: f64, axis: DVec3) -> Result<Self, KinematicsError> {
        let norm = axis.length();
        if !is_unit(norm) {
            return Err(KinematicsError::NonUnitAxis { norm });
        }
        Ok(Self::from_unit_axis(angle, axis))
    }

    /// Rotation of `angle` radians about the X axis.
    #[inline]
    pub fn about_x(angle: f64) -> Self {
        Self::from_unit_axis(angle, DVec3::X)
    }

    /// Rotation of `angle` radians about the Y axis.
    #[inline]
    pub fn about_y(angle: f64) -> Self {
        Self::from_unit_axis(angle, DVec3::Y)
    }

    /// Rotation of `angle` radians about the Z axis.
    #[inline]
    pub fn about_z(angle: f64) -> Self {
        Self::from_unit_axis(angle, DVec3::Z)
    }

    /// Create a rotation from a quaternion.
    ///
    /// Fails with [`KinematicsError::NonUnitRotation`] if the quaternion is not unit-norm.
    pub fn from_quaternion(q: Quaternion) -> Result<Self, KinematicsError> {
        let norm = q.length();
        if !is_unit(norm) {
            return Err(KinematicsError::NonUnitRotation { norm });
        }
        Ok(Self(q))
    }

    /// The underlying unit quaternion.
    #[inline]
    pub fn quaternion(&self) -> Quaternion {
        self.0
    }

    fn from_unit_axis(angle: f64, axis: DVec3) -> Self {
        let (sin, cos) = (0.5 * angle).sin_cos();
        let v = sin * axis;
        Self(Quaternion::new(cos, v.x, v.y, v.z))
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Rotation> for Quaternion {
    fn from(r: Rotation) -> Self {
        r.0
    }
}

/// A translation, stored as the pure quaternion `(0, x, y, z)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translation(Quaternion);

impl Translation {
    /// The zero translation.
    pub const ZERO: Self = Self(Quaternion::ZERO);

    /// Create a translation from a 3-vector.
    #[inline]
    pub fn new(v: DVec3) -> Self {
        Self(Quaternion::from_vector(v))
    }

    /// Create a translation from its `x`, `y`, `z` components.
    #[inline]
    pub fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        Self(Quaternion::new(0.0, x, y, z))
    }

    /// Create a translation from a quaternion.
    ///
    /// Fails with [`KinematicsError::NonPureTranslation`] if the scalar part is not zero.
    pub fn from_quaternion(q: Quaternion) -> Result<Self, KinematicsError> {
        let scalar = q.scalar();
        if scalar.abs() > UNIT_TOLERANCE || scalar.is_nan() {
            return Err(KinematicsError::NonPureTranslation { scalar });
        }
        Ok(Self(q))
    }

    /// The underlying pure quaternion.
    #[inline]
    pub fn quaternion(&self) -> Quaternion {
        self.0
    }

    /// The translation vector.
    #[inline]
    pub fn vector(&self) -> DVec3 {
        self.0.vector()
    }
}

impl Default for Translation {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<DVec3> for Translation {
    fn from(v: DVec3) -> Self {
        Self::new(v)
    }
}

impl From<Translation> for Quaternion {
    fn from(t: Translation) -> Self {
        t.0
    }
}

// NaN norms are rejected too
pub(crate) fn is_unit(norm: f64) -> bool {
    (norm - 1.0).abs() <= UNIT_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_rotation_half_angle() -> Result<(), KinematicsError> {
        let angle = std::f64::consts::FRAC_PI_3;
        let axis = DVec3::new(1.0, 2.0, 2.0) / 3.0;
        let r = Rotation::new(angle, axis)?.quaternion();
        assert_relative_eq!(r.scalar(), (angle / 2.0).cos(), epsilon = EPSILON);
        assert_relative_eq!(r.x, (angle / 2.0).sin() / 3.0, epsilon = EPSILON);
        assert_relative_eq!(r.y, 2.0 * (angle / 2.0).sin() / 3.0, epsilon = EPSILON);
        assert_relative_eq!(r.z, 2.0 * (angle / 2.0).sin() / 3.0, epsilon = EPSILON);
        assert_relative_eq!(r.length(), 1.0, epsilon = EPSILON);
        Ok(())
    }

    #[test]
    fn test_rotation_about_axes() -> Result<(), KinematicsError> {
        let angle = 0.7;
        assert_eq!(Rotation::about_x(angle), Rotation::new(angle, DVec3::X)?);
        assert_eq!(Rotation::about_y(angle), Rotation::new(angle, DVec3::Y)?);
        assert_eq!(Rotation::about_z(angle), Rotation::new(angle, DVec3::Z)?);
        assert_eq!(Rotation::about_z(0.0), Rotation::IDENTITY);
        Ok(())
    }

    #[test]
    fn test_rotation_rejects_non_unit_axis() {
        assert!(matches!(
            Rotation::new(1.0, DVec3::new(0.0, 0.0, 2.0)),
            Err(KinematicsError::NonUnitAxis { .. })
        ));
        assert!(matches!(
            Rotation::new(0.0, DVec3::ZERO),
            Err(KinematicsError::NonUnitAxis { .. })
        ));
        assert!(matches!(
            Rotation::new(1.0, DVec3::new(f64::NAN, 0.0, 0.0)),
            Err(KinematicsError::NonUnitAxis { .. })
        ));
    }

    #[test]
    fn test_rotation_from_quaternion() {
        let q = Quaternion::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(Rotation::from_quaternion(q).map(|r| r.quaternion()), Ok(q));
        assert_eq!(
            Rotation::from_quaternion(Quaternion::new(1.0, 1.0, 0.0, 0.0)),
            Err(KinematicsError::NonUnitRotation {
                norm: 2.0_f64.sqrt()
            })
        );
    }

    #[test]
    fn test_translation() {
        let t = Translation::new(DVec3::new(1.0, -2.0, 3.0));
        assert_eq!(t.quaternion(), Quaternion::new(0.0, 1.0, -2.0, 3.0));
        assert_eq!(t.vector(), DVec3::new(1.0, -2.0, 3.0));
        assert_eq!(Translation::from_xyz(1.0, -2.0, 3.0), t);
        assert_eq!(Translation::default().vector(), DVec3::ZERO);
    }

    #[test]
    fn test_translation_rejects_scalar_part() {
        assert_eq!(
            Translation::from_quaternion(Quaternion::new(0.5, 1.0, 0.0, 0.0)),
            Err(KinematicsError::NonPureTranslation { scalar: 0.5 })
        );
        assert!(Translation::from_quaternion(Quaternion::new(0.0, 1.0, 0.0, 0.0)).is_ok());
    }
}
