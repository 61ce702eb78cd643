#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # dqkin algebra
//!
//! This crate provides the algebra used to represent rigid-body motions:
//!
//! - [`Quaternion`]: four coefficients `(w, x, y, z)` under the Hamilton product.
//! - [`DualQuaternion`]: a pair of quaternions under dual-number multiplication.
//!
//! Both types are immutable `Copy` values; every operation returns a new value.
//!
//! ## Example
//!
//! ```rust
//! use dqkin_algebra::{DualQuaternion, Quaternion};
//!
//! let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
//! let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
//! assert_eq!(i * j, Quaternion::new(0.0, 0.0, 0.0, 1.0));
//!
//! let a = DualQuaternion::new(Quaternion::IDENTITY, i);
//! assert_eq!(a * DualQuaternion::IDENTITY, a);
//! ```

/// Dual quaternions and their 8×8 operator matrices.
pub mod dual_quaternion;

/// Error types for the algebra module.
pub mod error;

/// Quaternions and their 4×4 operator matrices.
pub mod quaternion;

pub use dual_quaternion::DualQuaternion;
pub use error::AlgebraError;
pub use quaternion::Quaternion;
