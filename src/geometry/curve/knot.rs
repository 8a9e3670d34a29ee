use crate::error::{ConfigError, Result};
use crate::math::{cos_deg, sin_deg, Point3, TOLERANCE};

use super::PathCurve;

/// The classic trefoil knot.
///
/// ```text
/// x = sin(t) + 2 sin(2t)
/// y = cos(t) - 2 cos(2t)
/// z = -sin(3t)
/// ```
///
/// Unit amplitude; scale it with [`ScaledCurve`](super::ScaledCurve) or the
/// sweep's `path_scale`. Its tangent is never vertical, so fixed-up frames
/// are well defined everywhere on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrefoilKnot;

impl PathCurve for TrefoilKnot {
    fn evaluate(&self, t_deg: f64) -> Point3 {
        Point3::new(
            sin_deg(t_deg) + 2.0 * sin_deg(2.0 * t_deg),
            cos_deg(t_deg) - 2.0 * cos_deg(2.0 * t_deg),
            -sin_deg(3.0 * t_deg),
        )
    }
}

/// A `(p, q)` torus knot wound on a torus with the given major and minor radii.
///
/// The curve winds `p` times around the torus axis and `q` times through
/// the hole. `(2, 3)` is a trefoil.
#[derive(Debug, Clone, Copy)]
pub struct TorusKnot {
    p: u32,
    q: u32,
    major: f64,
    minor: f64,
}

impl TorusKnot {
    /// Creates a new torus knot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScale`] if either radius is not positive
    /// or the minor radius is not smaller than the major one.
    pub fn new(p: u32, q: u32, major: f64, minor: f64) -> Result<Self> {
        for radius in [major, minor] {
            if !radius.is_finite() || radius < TOLERANCE {
                return Err(ConfigError::InvalidScale(radius).into());
            }
        }
        if minor >= major {
            return Err(ConfigError::InvalidScale(minor).into());
        }
        Ok(Self { p, q, major, minor })
    }

    /// Returns the `(p, q)` winding numbers.
    #[must_use]
    pub fn windings(&self) -> (u32, u32) {
        (self.p, self.q)
    }
}

impl Default for TorusKnot {
    fn default() -> Self {
        Self {
            p: 2,
            q: 3,
            major: 2.0,
            minor: 1.0,
        }
    }
}

impl PathCurve for TorusKnot {
    fn evaluate(&self, t_deg: f64) -> Point3 {
        let pt = f64::from(self.p) * t_deg;
        let qt = f64::from(self.q) * t_deg;
        let r = self.major + self.minor * cos_deg(qt);
        Point3::new(r * cos_deg(pt), r * sin_deg(pt), -self.minor * sin_deg(qt))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn trefoil_start_point() {
        let p = TrefoilKnot.evaluate(0.0);
        assert_relative_eq!(p, Point3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn trefoil_is_periodic() {
        assert_eq!(TrefoilKnot.evaluate(0.0), TrefoilKnot.evaluate(360.0));
        let a = TrefoilKnot.evaluate(37.0);
        let b = TrefoilKnot.evaluate(397.0);
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }

    #[test]
    fn torus_knot_stays_on_torus() {
        let knot = TorusKnot::new(3, 5, 4.0, 1.5).unwrap();
        for i in 0..36 {
            let p = knot.evaluate(f64::from(i) * 10.0);
            let ring = (p.x.hypot(p.y) - 4.0).hypot(p.z);
            assert_relative_eq!(ring, 1.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn torus_knot_is_periodic() {
        let knot = TorusKnot::default();
        assert_eq!(knot.evaluate(0.0), knot.evaluate(360.0));
        assert_eq!(knot.windings(), (2, 3));
    }

    #[test]
    fn torus_knot_rejects_bad_radii() {
        assert!(TorusKnot::new(2, 3, 1.0, 1.0).is_err());
        assert!(TorusKnot::new(2, 3, 0.0, -1.0).is_err());
        assert!(TorusKnot::new(2, 3, f64::INFINITY, 1.0).is_err());
    }
}
