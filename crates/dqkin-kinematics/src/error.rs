use dqkin_algebra::AlgebraError;

/// An error type for the kinematics module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// Error when a rotation axis is not a unit vector.
    #[error("Rotation axis must be a unit vector, got norm {norm}")]
    NonUnitAxis {
        /// norm of the given axis.
        norm: f64,
    },

    /// Error when a rotation quaternion is not unit-norm.
    #[error("Rotation quaternion must be unit-norm, got norm {norm}")]
    NonUnitRotation {
        /// norm of the given quaternion.
        norm: f64,
    },

    /// Error when a translation quaternion has a non-zero scalar part.
    #[error("Translation quaternion must be a pure vector, got scalar part {scalar}")]
    NonPureTranslation {
        /// scalar part of the given quaternion.
        scalar: f64,
    },

    /// Error when a dual quaternion does not satisfy the rigid-motion constraints.
    #[error(
        "Dual quaternion is not a rigid motion: |primal|² = {norm_squared}, primal · dual = {dot}"
    )]
    NotRigid {
        /// squared norm of the primal part.
        norm_squared: f64,
        /// dot product of the primal and dual parts.
        dot: f64,
    },

    /// Error when decoding the translation of a pose leaves a non-negligible residual.
    #[error("Pose is inconsistent: |primal|² = {norm_squared}, decoded scalar part = {scalar}")]
    PoseConsistency {
        /// squared norm of the primal part.
        norm_squared: f64,
        /// scalar part of `2 · dual · conj(primal)`, zero for a valid pose.
        scalar: f64,
    },

    /// Error when the number of joint values does not match the number of links.
    #[error("Expected {expected} joint values, got {got}")]
    JointCountMismatch {
        /// number of links in the chain.
        expected: usize,
        /// number of joint values provided.
        got: usize,
    },

    /// Error from the underlying algebra.
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}
