/// An error type for the algebra module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AlgebraError {
    /// Error when a dual-quaternion component is accessed with an index other than 0 or 1.
    #[error("Invalid dual-quaternion component index {0}, expected 0 (primal) or 1 (dual)")]
    InvalidIndex(usize),

    /// Error when a value that is not a quaternion is used as a quaternion.
    #[error("Expected a quaternion with {expected} coefficients, got {got}")]
    TypeMismatch {
        /// number of coefficients a quaternion holds.
        expected: usize,
        /// number of coefficients that were provided.
        got: usize,
    },

    /// Error when an operation has no defined semantics.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}
