use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::geometry::curve::PathCurve;
use crate::math::{Point3, Vector3};
use crate::tessellation::Aabb;

/// Smallest step count that still describes a tube.
pub const MIN_STEP_COUNT: usize = 2;

/// An ordered, conceptually periodic sequence of path samples.
///
/// Holds `step_count + 1` points. Sample `step_count` is the curve evaluated
/// at 360 degrees; connectivity treats sample `step_count` as sample `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Point3>,
    step_count: usize,
}

impl Path {
    /// Returns the number of ring positions (`len() - 1`).
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Returns the number of stored samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns all samples, including the closing sample at 360 degrees.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns sample `i`.
    #[must_use]
    pub fn point(&self, i: usize) -> Point3 {
        self.points[i]
    }

    /// Direction from sample `i` to its successor, wrapping modulo `step_count`.
    #[must_use]
    pub fn segment(&self, i: usize) -> Vector3 {
        let next = (i + 1) % self.step_count;
        self.points[next] - self.points[i % self.step_count]
    }

    /// Distance between the first sample and the closing sample.
    #[must_use]
    pub fn closure_gap(&self) -> f64 {
        (self.points[self.step_count] - self.points[0]).norm()
    }

    /// Length of the diagonal of the samples' bounding box.
    #[must_use]
    pub fn extent(&self) -> f64 {
        Aabb::from_points(&self.points).map_or(0.0, |aabb| aabb.size().norm())
    }
}

/// Samples a periodic curve at equally spaced degree-valued parameters.
pub struct SamplePath {
    step_count: usize,
}

impl SamplePath {
    /// Creates a new `SamplePath` operation.
    #[must_use]
    pub fn new(step_count: usize) -> Self {
        Self { step_count }
    }

    /// Evaluates `curve` at `t_i = i * 360 / step_count` for `i` in
    /// `[0, step_count]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooFewSteps`] before evaluating anything when
    /// `step_count < 2`, and [`ConfigError::NonFiniteSample`] if the curve
    /// yields a NaN or infinite coordinate.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute<C: PathCurve + ?Sized>(&self, curve: &C) -> Result<Path> {
        if self.step_count < MIN_STEP_COUNT {
            return Err(ConfigError::TooFewSteps {
                min: MIN_STEP_COUNT,
                actual: self.step_count,
            }
            .into());
        }

        // `i * 360 / n` rather than `i * (360 / n)` so the last sample lands
        // on exactly 360.
        let n = self.step_count as f64;
        let points: Vec<Point3> = (0..=self.step_count)
            .map(|i| curve.evaluate(i as f64 * 360.0 / n))
            .collect();

        if let Some(index) = points
            .iter()
            .position(|p| !p.coords.iter().all(|c| c.is_finite()))
        {
            return Err(ConfigError::NonFiniteSample { index }.into());
        }

        debug!(samples = points.len(), "sampled sweep path");
        Ok(Path {
            points,
            step_count: self.step_count,
        })
    }
}
