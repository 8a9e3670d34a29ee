use crate::error::{ConfigError, Result};
use crate::math::{cos_deg, sin_deg, Point3, TOLERANCE};

use super::PathCurve;

/// A circle of the given radius in the XY plane, centred at the origin.
///
/// `P(t) = (radius * cos(t), radius * sin(t), 0)` with `t` in degrees. The
/// tangent is horizontal everywhere, so the fixed up reference never
/// degenerates along this path.
#[derive(Debug, Clone, Copy)]
pub struct CirclePath {
    radius: f64,
}

impl CirclePath {
    /// Creates a new circular path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScale`] if the radius is not positive.
    pub fn new(radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(ConfigError::InvalidScale(radius).into());
        }
        Ok(Self { radius })
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl PathCurve for CirclePath {
    fn evaluate(&self, t_deg: f64) -> Point3 {
        Point3::new(
            self.radius * cos_deg(t_deg),
            self.radius * sin_deg(t_deg),
            0.0,
        )
    }
}
