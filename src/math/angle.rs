//! Degree-valued trigonometry.
//!
//! Curves and profiles are parameterised in degrees. Quadrant angles return
//! exact values so a full revolution lands back on its starting point.

use super::Point2;

/// Sine of an angle given in degrees.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn sin_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r == 0.0 || r == 180.0 {
        0.0
    } else if r == 90.0 {
        1.0
    } else if r == 270.0 {
        -1.0
    } else {
        deg.to_radians().sin()
    }
}

/// Cosine of an angle given in degrees.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn cos_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r == 90.0 || r == 270.0 {
        0.0
    } else if r == 0.0 {
        1.0
    } else if r == 180.0 {
        -1.0
    } else {
        deg.to_radians().cos()
    }
}

/// Rotates a 2D point counter-clockwise about the origin by `deg` degrees.
#[must_use]
pub fn rotate_2d(p: &Point2, deg: f64) -> Point2 {
    let (s, c) = (sin_deg(deg), cos_deg(deg));
    Point2::new(p.x * c - p.y * s, p.x * s + p.y * c)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn quadrant_angles_are_exact() {
        assert_eq!(sin_deg(0.0), 0.0);
        assert_eq!(sin_deg(90.0), 1.0);
        assert_eq!(sin_deg(180.0), 0.0);
        assert_eq!(sin_deg(-90.0), -1.0);
        assert_eq!(cos_deg(360.0), 1.0);
        assert_eq!(cos_deg(720.0), 1.0);
        assert_eq!(cos_deg(270.0), 0.0);
        assert_eq!(cos_deg(540.0), -1.0);
    }

    #[test]
    fn general_angles_match_radian_trig() {
        for deg in [1.0, 33.3, 145.0, 222.2, -17.5, 1234.5] {
            let rad = f64::to_radians(deg);
            assert_relative_eq!(sin_deg(deg), rad.sin(), epsilon = 1e-12);
            assert_relative_eq!(cos_deg(deg), rad.cos(), epsilon = 1e-12);
        }
    }

    #[test]
    fn rotate_quarter_turn() {
        let p = rotate_2d(&Point2::new(2.0, 0.0), 90.0);
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 2.0);
    }

    #[test]
    fn rotate_preserves_length() {
        let p = Point2::new(3.0, -4.0);
        let q = rotate_2d(&p, 71.0);
        assert_relative_eq!(q.coords.norm(), 5.0, epsilon = 1e-12);
    }
}
