#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # dqkin kinematics
//!
//! Rigid-body poses encoded as unit dual quaternions, and forward kinematics of serial
//! manipulators described with Denavit–Hartenberg parameters.
//!
//! ## Example
//!
//! ```rust
//! use dqkin_kinematics::{chain::DhLink, KinematicChain};
//!
//! let chain = KinematicChain::new(vec![
//!     DhLink::new(7.0, 0.0, std::f64::consts::FRAC_PI_2),
//!     DhLink::new(0.0, 10.0, 0.0),
//!     DhLink::new(0.0, 10.0, 0.0),
//! ]);
//!
//! let end = chain.forward(&[0.0, 0.0, 0.0]).unwrap();
//! let position = end.position().unwrap();
//! assert!((position.x - 20.0).abs() < 1e-9);
//! assert!((position.z - 7.0).abs() < 1e-9);
//! ```

/// Forward kinematics of serial chains.
pub mod chain;

/// Denavit–Hartenberg link transforms.
pub mod dh;

/// Elementary rotations and translations.
pub mod elementary;

/// Error types for the kinematics module.
pub mod error;

/// Poses encoded as unit dual quaternions.
pub mod pose;

pub use chain::{compose, KinematicChain};
pub use dh::{build_link, DhParameters};
pub use elementary::{Rotation, Translation};
pub use error::KinematicsError;
pub use pose::{Point, Transformation};
