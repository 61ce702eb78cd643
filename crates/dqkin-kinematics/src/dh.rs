//! Denavit–Hartenberg link transforms.
//!
//! A link in the standard DH convention is described by four parameters:
//!
//! - `theta`: joint angle, rotation about the previous Z axis.
//! - `d`: link offset, translation along the previous Z axis.
//! - `a`: link length, translation along the common normal X axis.
//! - `alpha`: link twist, rotation about the common normal X axis.
//!
//! The link transform is the product of two screw motions, first along Z then along X:
//!
//! ```text
//! T = screw_z(theta, d) * screw_x(alpha, a)
//! ```

use crate::{
    elementary::{Rotation, Translation},
    pose::Transformation,
};
use serde::{Deserialize, Serialize};

/// The four Denavit–Hartenberg parameters of a link.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DhParameters {
    /// Joint angle in radians.
    pub theta: f64,
    /// Link offset along Z.
    pub d: f64,
    /// Link length along X.
    pub a: f64,
    /// Link twist in radians.
    pub alpha: f64,
}

impl DhParameters {
    /// Create DH parameters in the standard `(theta, d, a, alpha)` order.
    pub fn new(theta: f64, d: f64, a: f64, alpha: f64) -> Self {
        Self { theta, d, a, alpha }
    }

    /// Create DH parameters from a `[theta, d, a, alpha]` array.
    pub fn from_array(params: [f64; 4]) -> Self {
        let [theta, d, a, alpha] = params;
        Self { theta, d, a, alpha }
    }

    /// The parameters as a `[theta, d, a, alpha]` array.
    pub fn to_array(&self) -> [f64; 4] {
        [self.theta, self.d, self.a, self.alpha]
    }

    /// The link transform.
    pub fn transformation(&self) -> Transformation {
        build_link(self.theta, self.d, self.a, self.alpha)
    }
}

impl From<[f64; 4]> for DhParameters {
    fn from(params: [f64; 4]) -> Self {
        Self::from_array(params)
    }
}

/// Build the transform of a link from its DH parameters.
///
/// # Arguments
///
/// * `theta` - Joint angle in radians, about the Z axis.
/// * `d` - Link offset along the Z axis.
/// * `a` - Link length along the X axis.
/// * `alpha` - Link twist in radians, about the X axis.
///
/// # Returns
///
/// The transform `screw_z(theta, d) * screw_x(alpha, a)`. The order matters, the
/// reversed product is a different transform.
///
/// Example:
///
/// ```
/// use dqkin_kinematics::dh::build_link;
///
/// let link = build_link(0.0, 7.0, 10.0, 0.0);
/// let t = link.translation().unwrap();
/// assert!((t.x - 10.0).abs() < 1e-12);
/// assert!((t.z - 7.0).abs() < 1e-12);
/// ```
pub fn build_link(theta: f64, d: f64, a: f64, alpha: f64) -> Transformation {
    let screw_z = Transformation::new(
        Rotation::about_z(theta),
        Translation::from_xyz(0.0, 0.0, d),
    );
    let screw_x = Transformation::new(
        Rotation::about_x(alpha),
        Translation::from_xyz(a, 0.0, 0.0),
    );
    screw_z * screw_x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KinematicsError;
    use approx::assert_relative_eq;
    use dqkin_algebra::{DualQuaternion, Quaternion};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_from_array() {
        let p = DhParameters::from_array([0.1, 2.0, 3.0, 0.4]);
        assert_eq!(p, DhParameters::new(0.1, 2.0, 3.0, 0.4));
        assert_eq!(p.to_array(), [0.1, 2.0, 3.0, 0.4]);
        assert_eq!(DhParameters::from([0.1, 2.0, 3.0, 0.4]), p);
    }

    #[test]
    fn test_zero_link_is_identity() {
        assert_eq!(
            DhParameters::default().transformation(),
            Transformation::IDENTITY
        );
    }

    #[test]
    fn test_link_values() -> Result<(), KinematicsError> {
        let link = build_link(FRAC_PI_3, 7.0, 2.0, FRAC_PI_2);
        let dq = link.dual_quaternion();

        let primal = Quaternion::new(
            0.6123724356957946,
            0.6123724356957945,
            0.3535533905932737,
            0.35355339059327373,
        );
        let dual = Quaternion::new(
            -1.8498093027722526,
            -0.6250644313806634,
            2.4968569155285545,
            1.7897501343420077,
        );
        assert_relative_eq!(dq, DualQuaternion::new(primal, dual), epsilon = EPSILON);

        // the origin moves up the Z axis by d, then along the rotated X axis by a
        let t = link.translation()?;
        assert_relative_eq!(t.x, 2.0 * FRAC_PI_3.cos(), epsilon = EPSILON);
        assert_relative_eq!(t.y, 2.0 * FRAC_PI_3.sin(), epsilon = EPSILON);
        assert_relative_eq!(t.z, 7.0, epsilon = EPSILON);
        Ok(())
    }

    #[test]
    fn test_link_order_matters() {
        let screw_z = Transformation::new(
            Rotation::about_z(FRAC_PI_3),
            Translation::from_xyz(0.0, 0.0, 7.0),
        );
        let screw_x = Transformation::new(
            Rotation::about_x(FRAC_PI_2),
            Translation::from_xyz(2.0, 0.0, 0.0),
        );

        let link = build_link(FRAC_PI_3, 7.0, 2.0, FRAC_PI_2);
        assert_eq!(link, screw_z * screw_x);

        let reversed = (screw_x * screw_z).dual_quaternion();
        let diff = link.dual_quaternion() - reversed;
        let max_diff = diff.to_array().iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        assert!(max_diff > 1.0);
    }

    #[test]
    fn test_serde() -> Result<(), Box<dyn std::error::Error>> {
        let p = DhParameters::new(0.5, 7.0, 0.0, FRAC_PI_2);
        let json = serde_json::to_string(&p)?;
        let back: DhParameters = serde_json::from_str(&json)?;
        assert_eq!(back, p);

        let parsed: DhParameters =
            serde_json::from_str(r#"{ "theta": 0.0, "d": 1.0, "a": 2.0, "alpha": 3.0 }"#)?;
        assert_eq!(parsed, DhParameters::new(0.0, 1.0, 2.0, 3.0));
        Ok(())
    }
}
