mod circle;
mod knot;

pub use circle::CirclePath;
pub use knot::{TorusKnot, TrefoilKnot};

use crate::math::Point3;

/// A closed parametric space curve used as a sweep path.
///
/// The parameter is an angle in degrees. Implementations are expected to be
/// periodic over `[0, 360]`: the sweep closes the tube by connecting the
/// last ring back to the first, which only looks right when
/// `evaluate(360.0)` returns to `evaluate(0.0)`.
pub trait PathCurve {
    /// Evaluates the curve at the degree-valued parameter `t_deg`.
    fn evaluate(&self, t_deg: f64) -> Point3;
}

impl<F> PathCurve for F
where
    F: Fn(f64) -> Point3,
{
    fn evaluate(&self, t_deg: f64) -> Point3 {
        self(t_deg)
    }
}

/// Uniformly scales another curve about the origin.
#[derive(Debug, Clone, Copy)]
pub struct ScaledCurve<'a, C: ?Sized> {
    curve: &'a C,
    factor: f64,
}

impl<'a, C: PathCurve + ?Sized> ScaledCurve<'a, C> {
    /// Wraps `curve` so every sample is multiplied by `factor`.
    #[must_use]
    pub fn new(curve: &'a C, factor: f64) -> Self {
        Self { curve, factor }
    }

    /// Returns the scale factor.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl<C: PathCurve + ?Sized> PathCurve for ScaledCurve<'_, C> {
    fn evaluate(&self, t_deg: f64) -> Point3 {
        Point3::from(self.curve.evaluate(t_deg).coords * self.factor)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn closures_are_curves() {
        let line = |t: f64| Point3::new(t, 0.0, 0.0);
        assert_relative_eq!(line.evaluate(12.0).x, 12.0);
    }

    #[test]
    fn scaled_curve_multiplies_samples() {
        let base = |t: f64| Point3::new(1.0, t, -2.0);
        let scaled = ScaledCurve::new(&base, 3.0);
        let p = scaled.evaluate(2.0);
        assert_relative_eq!(p, Point3::new(3.0, 6.0, -6.0));
        assert_relative_eq!(scaled.factor(), 3.0);
    }
}
