use crate::error::{ConfigError, Result};
use crate::math::TOLERANCE;

use super::frame::FrameMode;
use super::regular_profile::MIN_PROFILE_SIDES;
use super::sample_path::MIN_STEP_COUNT;

/// Parameters controlling a tube sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepParams {
    /// Number of ring positions along the path.
    pub step_count: usize,
    /// Number of vertices in the cross-section polygon.
    pub profile_sides: usize,
    /// Uniform scale applied to the curve.
    pub path_scale: f64,
    /// Circumradius of the cross-section polygon.
    pub tube_radius: f64,
    /// Twist added per ring, in degrees.
    pub twist_factor: f64,
    /// How frames are oriented along the path.
    pub frame_mode: FrameMode,
    /// Largest accepted gap between the path's first and closing sample.
    /// `None` only warns about a visible gap.
    pub closure_tolerance: Option<f64>,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            step_count: 150,
            profile_sides: 6,
            path_scale: 10.0,
            tube_radius: 2.0,
            twist_factor: 0.0,
            frame_mode: FrameMode::FixedUp,
            closure_tolerance: None,
        }
    }
}

impl SweepParams {
    /// Sets the number of ring positions.
    #[must_use]
    pub fn with_step_count(mut self, step_count: usize) -> Self {
        self.step_count = step_count;
        self
    }

    /// Sets the number of profile vertices.
    #[must_use]
    pub fn with_profile_sides(mut self, sides: usize) -> Self {
        self.profile_sides = sides;
        self
    }

    /// Sets the curve scale.
    #[must_use]
    pub fn with_path_scale(mut self, scale: f64) -> Self {
        self.path_scale = scale;
        self
    }

    /// Sets the tube radius.
    #[must_use]
    pub fn with_tube_radius(mut self, radius: f64) -> Self {
        self.tube_radius = radius;
        self
    }

    /// Sets the per-ring twist in degrees.
    #[must_use]
    pub fn with_twist_factor(mut self, twist: f64) -> Self {
        self.twist_factor = twist;
        self
    }

    /// Sets the frame strategy.
    #[must_use]
    pub fn with_frame_mode(mut self, mode: FrameMode) -> Self {
        self.frame_mode = mode;
        self
    }

    /// Rejects paths whose closing sample is farther than `tolerance` from
    /// the first one.
    #[must_use]
    pub fn with_closure_tolerance(mut self, tolerance: f64) -> Self {
        self.closure_tolerance = Some(tolerance);
        self
    }

    /// Checks every static parameter.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] for the first invalid parameter.
    pub fn validate(&self) -> Result<()> {
        if self.step_count < MIN_STEP_COUNT {
            return Err(ConfigError::TooFewSteps {
                min: MIN_STEP_COUNT,
                actual: self.step_count,
            }
            .into());
        }
        if self.profile_sides < MIN_PROFILE_SIDES {
            return Err(ConfigError::TooFewSides {
                min: MIN_PROFILE_SIDES,
                actual: self.profile_sides,
            }
            .into());
        }
        if !self.path_scale.is_finite() || self.path_scale < TOLERANCE {
            return Err(ConfigError::InvalidScale(self.path_scale).into());
        }
        if !self.tube_radius.is_finite() || self.tube_radius < TOLERANCE {
            return Err(ConfigError::InvalidRadius(self.tube_radius).into());
        }
        if !self.twist_factor.is_finite() {
            return Err(ConfigError::InvalidTwist(self.twist_factor).into());
        }
        if let Some(tolerance) = self.closure_tolerance {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(ConfigError::InvalidTolerance(tolerance).into());
            }
        }
        let fits = self
            .step_count
            .checked_mul(self.profile_sides)
            .is_some_and(|n| u32::try_from(n).is_ok());
        if !fits {
            return Err(ConfigError::MeshTooLarge {
                steps: self.step_count,
                sides: self.profile_sides,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TubesweepError;

    fn config_error(params: SweepParams) -> ConfigError {
        match params.validate().unwrap_err() {
            TubesweepError::Config(e) => e,
            other => panic!("expected a configuration error, got {other}"),
        }
    }

    #[test]
    fn defaults_are_valid() {
        SweepParams::default().validate().unwrap();
    }

    #[test]
    fn builder_sets_fields() {
        let params = SweepParams::default()
            .with_step_count(40)
            .with_profile_sides(8)
            .with_path_scale(2.5)
            .with_tube_radius(0.3)
            .with_twist_factor(3.0)
            .with_frame_mode(FrameMode::Strict)
            .with_closure_tolerance(1e-6);
        assert_eq!(params.step_count, 40);
        assert_eq!(params.profile_sides, 8);
        assert_eq!(params.frame_mode, FrameMode::Strict);
        assert_eq!(params.closure_tolerance, Some(1e-6));
        params.validate().unwrap();
    }

    #[test]
    fn rejects_single_step() {
        assert_eq!(
            config_error(SweepParams::default().with_step_count(1)),
            ConfigError::TooFewSteps { min: 2, actual: 1 }
        );
    }

    #[test]
    fn rejects_two_sides() {
        assert_eq!(
            config_error(SweepParams::default().with_profile_sides(2)),
            ConfigError::TooFewSides { min: 3, actual: 2 }
        );
    }

    #[test]
    fn rejects_non_positive_sizes() {
        assert_eq!(
            config_error(SweepParams::default().with_path_scale(0.0)),
            ConfigError::InvalidScale(0.0)
        );
        assert_eq!(
            config_error(SweepParams::default().with_tube_radius(-1.0)),
            ConfigError::InvalidRadius(-1.0)
        );
    }

    #[test]
    fn rejects_non_finite_twist_and_tolerance() {
        assert!(matches!(
            config_error(SweepParams::default().with_twist_factor(f64::NAN)),
            ConfigError::InvalidTwist(_)
        ));
        assert_eq!(
            config_error(SweepParams::default().with_closure_tolerance(-1.0)),
            ConfigError::InvalidTolerance(-1.0)
        );
    }

    #[test]
    fn negative_twist_is_allowed() {
        SweepParams::default().with_twist_factor(-7.5).validate().unwrap();
    }

    #[test]
    fn rejects_index_overflow() {
        let params = SweepParams::default()
            .with_step_count(1 << 20)
            .with_profile_sides(1 << 13);
        assert!(matches!(
            config_error(params),
            ConfigError::MeshTooLarge { .. }
        ));
    }
}
