//! # Poses as unit dual quaternions
//!
//! A rigid motion with rotation `r` (unit quaternion) and translation `t` (pure quaternion)
//! is encoded as the dual quaternion
//!
//! ```text
//! P = r + ε ½ t r
//! ```
//!
//! and the translation is recovered with `t = 2 · dual · conj(primal)`. For a valid encoding
//! the decoded quaternion has a zero scalar part; a non-zero residual means the dual
//! quaternion is not a rigid motion.
//!
//! Two types share this encoding and differ only in role:
//!
//! - [`Point`] is an operand: a frame placed in space.
//! - [`Transformation`] is an operator acting on frames.
//!
//! Only the meaningful products are defined:
//!
//! ```text
//! Point          * Transformation -> Point
//! Transformation * Transformation -> Transformation
//! ```

use crate::{
    elementary::{Rotation, Translation},
    error::KinematicsError,
};
use dqkin_algebra::{DualQuaternion, Quaternion};
use glam::DVec3;

/// Tolerance on the unit norm of the primal part and on the decoded scalar residual.
pub const POSE_TOLERANCE: f64 = 1e-8;

/// Encode a rotation and a translation as the dual quaternion `r + ε ½ t r`.
pub fn make_pose(rotation: Rotation, translation: Translation) -> DualQuaternion {
    let r = rotation.quaternion();
    DualQuaternion::new(r, 0.5 * translation.quaternion() * r)
}

/// Decode the translation `2 · dual · conj(primal)` of a pose.
///
/// Fails with [`KinematicsError::PoseConsistency`] if the primal part is not unit-norm or
/// the decoded quaternion has a scalar part larger than [`POSE_TOLERANCE`].
pub fn extract_position(pose: &DualQuaternion) -> Result<DVec3, KinematicsError> {
    let norm_squared = pose.primal.length_squared();
    let decoded = 2.0 * pose.dual * pose.primal.conjugate();
    let scalar = decoded.scalar();

    let unit = (norm_squared - 1.0).abs() <= POSE_TOLERANCE;
    let pure = scalar.abs() <= POSE_TOLERANCE;
    if !(unit && pure) {
        return Err(KinematicsError::PoseConsistency {
            norm_squared,
            scalar,
        });
    }

    Ok(decoded.vector())
}

/// The orientation of a pose, its primal part.
#[inline]
pub fn extract_orientation(pose: &DualQuaternion) -> Quaternion {
    pose.primal
}

macro_rules! define_pose_type {
    (
        $(#[$meta:meta])*
        $name:ident,
        $identity:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name(DualQuaternion);

        impl $name {
            /// The identity pose: no rotation, no translation.
            pub const $identity: Self = Self(DualQuaternion::IDENTITY);

            /// Create a pose from a rotation and a translation.
            #[inline]
            pub fn new(rotation: Rotation, translation: Translation) -> Self {
                Self(make_pose(rotation, translation))
            }

            /// Create a pose from a translation vector, without rotation.
            #[inline]
            pub fn from_translation(v: DVec3) -> Self {
                Self::new(Rotation::IDENTITY, Translation::new(v))
            }

            /// Wrap a dual quaternion, checking that it encodes a rigid motion.
            ///
            /// Fails with [`KinematicsError::NotRigid`] unless the primal part is unit-norm and
            /// orthogonal to the dual part, within [`POSE_TOLERANCE`].
            pub fn from_dual_quaternion(dq: DualQuaternion) -> Result<Self, KinematicsError> {
                if !dq.is_unit_rigid(POSE_TOLERANCE) {
                    return Err(KinematicsError::NotRigid {
                        norm_squared: dq.primal.length_squared(),
                        dot: dq.primal.dot(&dq.dual),
                    });
                }
                Ok(Self(dq))
            }

            /// Wrap a dual quaternion as is.
            ///
            /// Nothing is checked; an invalid encoding surfaces later as
            /// [`KinematicsError::PoseConsistency`] on extraction.
            #[inline]
            pub const fn from_dual_quaternion_unchecked(dq: DualQuaternion) -> Self {
                Self(dq)
            }

            /// The underlying dual quaternion.
            #[inline]
            pub fn dual_quaternion(&self) -> DualQuaternion {
                self.0
            }

            /// Read a component by index: `0` is the primal part, `1` the dual part.
            pub fn component(&self, index: usize) -> Result<Quaternion, KinematicsError> {
                Ok(self.0.component(index)?)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$identity
            }
        }

        impl From<$name> for DualQuaternion {
            #[inline]
            fn from(pose: $name) -> Self {
                pose.0
            }
        }

        impl std::ops::Mul<Transformation> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: Transformation) -> Self::Output {
                $name(self.0 * rhs.0)
            }
        }

        impl std::ops::MulAssign<Transformation> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Transformation) {
                *self = *self * rhs;
            }
        }
    };
}

define_pose_type!(
    /// A frame placed in space, the operand of a [`Transformation`].
    Point,
    ORIGIN
);

define_pose_type!(
    /// A rigid transformation, the operator acting on a [`Point`].
    Transformation,
    IDENTITY
);

impl Point {
    /// The Cartesian position of the frame.
    ///
    /// Fails with [`KinematicsError::PoseConsistency`] if the pose is not a rigid motion.
    pub fn position(&self) -> Result<DVec3, KinematicsError> {
        extract_position(&self.0)
    }

    /// The orientation of the frame as a unit quaternion.
    #[inline]
    pub fn orientation(&self) -> Quaternion {
        extract_orientation(&self.0)
    }
}

impl Transformation {
    /// The translation applied by the transformation.
    ///
    /// Fails with [`KinematicsError::PoseConsistency`] if the transformation is not a rigid
    /// motion.
    pub fn translation(&self) -> Result<DVec3, KinematicsError> {
        extract_position(&self.0)
    }

    /// The rotation applied by the transformation as a unit quaternion.
    #[inline]
    pub fn rotation(&self) -> Quaternion {
        extract_orientation(&self.0)
    }
}
