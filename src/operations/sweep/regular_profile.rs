use crate::error::{ConfigError, Result};
use crate::math::{cos_deg, sin_deg, Point2, TOLERANCE};

/// Smallest number of sides a cross-section polygon can have.
pub const MIN_PROFILE_SIDES: usize = 3;

/// A regular polygon cross-section in the local XY plane.
///
/// Vertex `k` sits at angle `k * 360 / sides` on a circle of `radius`,
/// counter-clockwise from the +X axis.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularProfile {
    points: Vec<Point2>,
    radius: f64,
}

impl RegularProfile {
    /// Builds the profile polygon.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooFewSides`] if `sides < 3` and
    /// [`ConfigError::InvalidRadius`] if the radius is not positive.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(sides: usize, radius: f64) -> Result<Self> {
        if sides < MIN_PROFILE_SIDES {
            return Err(ConfigError::TooFewSides {
                min: MIN_PROFILE_SIDES,
                actual: sides,
            }
            .into());
        }
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(ConfigError::InvalidRadius(radius).into());
        }

        let n = sides as f64;
        let points = (0..sides)
            .map(|k| {
                let angle = k as f64 * 360.0 / n;
                Point2::new(radius * cos_deg(angle), radius * sin_deg(angle))
            })
            .collect();

        Ok(Self { points, radius })
    }

    /// Returns the polygon vertices in counter-clockwise order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of polygon vertices.
    #[must_use]
    pub fn sides(&self) -> usize {
        self.points.len()
    }

    /// Returns the circumradius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Length of one polygon edge, `2 r sin(180 / sides)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn edge_length(&self) -> f64 {
        2.0 * self.radius * sin_deg(180.0 / self.sides() as f64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::TubesweepError;

    #[test]
    fn hexagon_vertices() {
        let profile = RegularProfile::new(6, 2.0).unwrap();
        assert_eq!(profile.sides(), 6);
        assert_relative_eq!(profile.points()[0], Point2::new(2.0, 0.0));
        assert_relative_eq!(profile.points()[1], Point2::new(1.0, 3.0_f64.sqrt()), epsilon = 1e-12);
        assert_relative_eq!(profile.points()[3], Point2::new(-2.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn vertices_lie_on_circle() {
        let profile = RegularProfile::new(11, 0.75).unwrap();
        for p in profile.points() {
            assert_relative_eq!(p.coords.norm(), 0.75, epsilon = 1e-12);
        }
    }

    #[test]
    fn winding_is_counter_clockwise() {
        let profile = RegularProfile::new(5, 1.0).unwrap();
        let pts = profile.points();
        let n = pts.len();
        let twice_area: f64 = (0..n)
            .map(|i| {
                let j = (i + 1) % n;
                pts[i].x * pts[j].y - pts[j].x * pts[i].y
            })
            .sum();
        assert!(twice_area > 0.0);
    }

    #[test]
    fn edges_have_equal_length() {
        let profile = RegularProfile::new(7, 3.0).unwrap();
        let pts = profile.points();
        for i in 0..pts.len() {
            let j = (i + 1) % pts.len();
            assert_relative_eq!((pts[j] - pts[i]).norm(), profile.edge_length(), epsilon = 1e-12);
        }
    }

    #[test]
    fn too_few_sides() {
        let err = RegularProfile::new(2, 1.0).unwrap_err();
        assert!(matches!(
            err,
            TubesweepError::Config(ConfigError::TooFewSides { min: 3, actual: 2 })
        ));
    }

    #[test]
    fn invalid_radius() {
        assert!(RegularProfile::new(6, 0.0).is_err());
        assert!(RegularProfile::new(6, -2.0).is_err());
        assert!(RegularProfile::new(6, f64::NAN).is_err());
    }
}
