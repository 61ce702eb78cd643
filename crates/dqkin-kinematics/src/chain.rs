//! Forward kinematics of serial chains of revolute joints.
//!
//! The end-effector pose is the left-to-right product of the base pose and the link
//! transforms:
//!
//! ```text
//! end = base * T1(q1) * T2(q2) * ... * Tn(qn)
//! ```
//!
//! The product is associative but not commutative, so the links are always applied in
//! chain order.

use crate::{
    dh::{build_link, DhParameters},
    error::KinematicsError,
    pose::{Point, Transformation},
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// The fixed DH parameters of a revolute link. The joint angle is supplied at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DhLink {
    /// Link offset along Z.
    pub d: f64,
    /// Link length along X.
    pub a: f64,
    /// Link twist in radians.
    pub alpha: f64,
}

impl DhLink {
    /// Create a link from its offset, length and twist.
    pub fn new(d: f64, a: f64, alpha: f64) -> Self {
        Self { d, a, alpha }
    }

    /// The full DH parameters with the joint angle `theta`.
    pub fn parameters(&self, theta: f64) -> DhParameters {
        DhParameters::new(theta, self.d, self.a, self.alpha)
    }

    /// The link transform for the joint angle `theta`.
    pub fn transformation(&self, theta: f64) -> Transformation {
        build_link(theta, self.d, self.a, self.alpha)
    }
}

/// Compose a base pose with a sequence of transforms, applied left to right.
pub fn compose(base: Point, transforms: &[Transformation]) -> Point {
    transforms
        .iter()
        .enumerate()
        .fold(base, |pose, (i, tf)| {
            let pose = pose * *tf;
            log::trace!("link {}: {:?}", i, pose);
            pose
        })
}

/// A serial chain of revolute links described by a DH table.
///
/// The chain can be loaded from a serialized DH table, e.g. JSON:
///
/// ```json
/// { "links": [ { "d": 7.0, "a": 0.0, "alpha": 1.5707963267948966 } ] }
/// ```
///
/// The base is not part of the serialized form and defaults to [`Point::ORIGIN`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KinematicChain {
    /// The pose the chain is attached to.
    #[serde(skip)]
    pub base: Point,
    /// The links, from the base to the end effector.
    pub links: Vec<DhLink>,
}

impl KinematicChain {
    /// Create a chain attached to the origin.
    pub fn new(links: Vec<DhLink>) -> Self {
        Self {
            base: Point::ORIGIN,
            links,
        }
    }

    /// Attach the chain to another base pose.
    pub fn with_base(mut self, base: Point) -> Self {
        self.base = base;
        self
    }

    /// Number of joints, one per link.
    pub fn num_joints(&self) -> usize {
        self.links.len()
    }

    /// The transform of each link for the given joint angles.
    ///
    /// Fails with [`KinematicsError::JointCountMismatch`] unless there is one angle per link.
    pub fn link_transforms(&self, joints: &[f64]) -> Result<Vec<Transformation>, KinematicsError> {
        if joints.len() != self.links.len() {
            return Err(KinematicsError::JointCountMismatch {
                expected: self.links.len(),
                got: joints.len(),
            });
        }

        Ok(self
            .links
            .iter()
            .zip(joints.iter())
            .map(|(link, &theta)| link.transformation(theta))
            .collect())
    }

    /// The end-effector pose for the given joint angles.
    ///
    /// # Arguments
    ///
    /// * `joints` - One joint angle in radians per link, in chain order.
    ///
    /// # Returns
    ///
    /// The pose `base * T1 * ... * Tn`.
    pub fn forward(&self, joints: &[f64]) -> Result<Point, KinematicsError> {
        let transforms = self.link_transforms(joints)?;
        let pose = compose(self.base, &transforms);

        log::debug!(
            "forward kinematics over {} joints: {:?}",
            transforms.len(),
            pose.position()
        );

        Ok(pose)
    }

    /// The end-effector pose for a batch of independent joint configurations.
    ///
    /// The configurations are evaluated in parallel; the results keep the input order.
    pub fn forward_batch(&self, samples: &[Vec<f64>]) -> Vec<Result<Point, KinematicsError>> {
        samples
            .par_iter()
            .map(|joints| self.forward(joints))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elementary::{Rotation, Translation};
    use approx::assert_relative_eq;
    use glam::DVec3;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    const EPSILON: f64 = 1e-9;

    fn planar_chain() -> KinematicChain {
        KinematicChain::new(vec![DhLink::new(0.0, 1.0, 0.0), DhLink::new(0.0, 1.0, 0.0)])
    }

    #[test]
    fn test_dh_link() {
        let link = DhLink::new(7.0, 0.0, FRAC_PI_2);
        assert_eq!(
            link.parameters(0.3),
            DhParameters::new(0.3, 7.0, 0.0, FRAC_PI_2)
        );
        assert_eq!(
            link.transformation(0.3),
            build_link(0.3, 7.0, 0.0, FRAC_PI_2)
        );
    }

    #[test]
    fn test_compose_empty() {
        assert_eq!(compose(Point::ORIGIN, &[]), Point::ORIGIN);
    }

    #[test]
    fn test_planar_two_link() -> Result<(), KinematicsError> {
        let chain = planar_chain();
        assert_eq!(chain.num_joints(), 2);

        let straight = chain.forward(&[0.0, 0.0])?.position()?;
        assert_relative_eq!(straight.x, 2.0, epsilon = EPSILON);
        assert_relative_eq!(straight.y, 0.0, epsilon = EPSILON);

        let elbow = chain.forward(&[0.0, FRAC_PI_2])?.position()?;
        assert_relative_eq!(elbow.x, 1.0, epsilon = EPSILON);
        assert_relative_eq!(elbow.y, 1.0, epsilon = EPSILON);

        let shoulder = chain.forward(&[FRAC_PI_2, 0.0])?.position()?;
        assert_relative_eq!(shoulder.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(shoulder.y, 2.0, epsilon = EPSILON);
        Ok(())
    }

    #[test]
    fn test_forward_matches_compose() -> Result<(), KinematicsError> {
        let chain = planar_chain();
        let joints = [0.3, -1.1];
        let transforms = chain.link_transforms(&joints)?;
        assert_eq!(chain.forward(&joints)?, compose(chain.base, &transforms));
        Ok(())
    }

    #[test]
    fn test_joint_count_mismatch() {
        let chain = planar_chain();
        assert_eq!(
            chain.forward(&[0.0]),
            Err(KinematicsError::JointCountMismatch {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_with_base() -> Result<(), KinematicsError> {
        let base = Point::new(Rotation::IDENTITY, Translation::from_xyz(0.0, 0.0, 5.0));
        let chain = planar_chain().with_base(base);
        let p = chain.forward(&[0.0, 0.0])?.position()?;
        assert_relative_eq!(p.x, 2.0, epsilon = EPSILON);
        assert_relative_eq!(p.z, 5.0, epsilon = EPSILON);
        Ok(())
    }

    #[test]
    fn test_forward_batch() -> Result<(), KinematicsError> {
        let chain = planar_chain();
        let samples: Vec<Vec<f64>> = (0..64)
            .map(|i| vec![i as f64 * 0.1, -(i as f64) * 0.05])
            .collect();
        let results = chain.forward_batch(&samples);
        assert_eq!(results.len(), samples.len());
        for (joints, result) in samples.iter().zip(results) {
            assert_eq!(result?, chain.forward(joints)?);
        }

        let bad = chain.forward_batch(&[vec![0.0; 3]]);
        assert!(matches!(
            bad[0],
            Err(KinematicsError::JointCountMismatch { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_deserialize_chain() -> Result<(), Box<dyn std::error::Error>> {
        let json = r#"{ "links": [
            { "d": 7.0, "a": 0.0, "alpha": 1.5707963267948966 },
            { "d": 0.0, "a": 10.0, "alpha": 0.0 }
        ] }"#;
        let chain: KinematicChain = serde_json::from_str(json)?;
        assert_eq!(chain.base, Point::ORIGIN);
        assert_eq!(chain.links[0], DhLink::new(7.0, 0.0, FRAC_PI_2));
        assert_eq!(chain.links[1], DhLink::new(0.0, 10.0, 0.0));

        let p = chain.forward(&[FRAC_PI_4, 0.0])?.position()?;
        let expected = DVec3::new(10.0 * FRAC_PI_4.cos(), 10.0 * FRAC_PI_4.sin(), 7.0);
        assert_relative_eq!(p.x, expected.x, epsilon = EPSILON);
        assert_relative_eq!(p.y, expected.y, epsilon = EPSILON);
        assert_relative_eq!(p.z, expected.z, epsilon = EPSILON);
        Ok(())
    }
}
