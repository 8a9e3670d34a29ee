use crate::math::{rotate_2d, Point3};

use super::frame::Frame;
use super::regular_profile::RegularProfile;

/// One oriented copy of the profile placed on the path.
///
/// Vertex `j` always corresponds to profile vertex `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Point3>,
}

impl Ring {
    /// Wraps already placed ring vertices.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Returns the ring vertices.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the ring has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the ring, returning its vertices.
    #[must_use]
    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}

/// Places the profile at one path sample.
///
/// The twist is applied in the profile plane first, then the frame rotation,
/// then the translation to `origin`. The order matters.
pub struct TransformRing {
    twist_deg: f64,
}

impl TransformRing {
    /// Creates a new `TransformRing` operation with the given twist in degrees.
    #[must_use]
    pub fn new(twist_deg: f64) -> Self {
        Self { twist_deg }
    }

    /// Twist for ring `index` given the per-ring increment.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn for_ring(index: usize, twist_factor: f64) -> Self {
        Self::new(index as f64 * twist_factor)
    }

    /// Executes the transform, producing one ring.
    #[must_use]
    pub fn execute(&self, profile: &RegularProfile, frame: &Frame, origin: &Point3) -> Ring {
        let points = profile
            .points()
            .iter()
            .map(|p| origin + frame.apply(&rotate_2d(p, self.twist_deg)))
            .collect();
        Ring { points }
    }
}
