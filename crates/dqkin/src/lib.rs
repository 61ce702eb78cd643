#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use dqkin_algebra as algebra;

#[doc(inline)]
pub use dqkin_kinematics as kinematics;
