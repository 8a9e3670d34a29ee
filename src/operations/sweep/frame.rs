//! Orientation frames along a sampled path.
//!
//! A frame places the profile's local X/Y plane perpendicular to the path
//! tangent. The default strategy uses a fixed world "up" reference; a
//! rotation-minimizing strategy propagates the previous frame instead.

use std::f64::consts::PI;

use nalgebra::{Rotation3, Unit};
use tracing::debug;

use crate::error::{FrameError, Result};
use crate::math::{Matrix3, Matrix4, Point2, Vector3, TOLERANCE};

use super::sample_path::Path;

/// Strategy used to orient the profile along the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameMode {
    /// Fixed `up = +Z` reference. A tangent parallel to `up` switches to the
    /// secondary `+X` reference for that sample.
    #[default]
    FixedUp,
    /// Fixed `up = +Z` reference. A tangent parallel to `up` is an error.
    Strict,
    /// Parallel transport from the previous frame, with the residual twist
    /// at the seam spread evenly over all rings.
    RotationMinimizing,
}

/// Why a frame could not be built from a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// The direction has zero length.
    ZeroTangent,
    /// The direction is parallel to the reference vector.
    ParallelToReference,
}

/// A right-handed orthonormal basis at a path sample.
///
/// `normal` is the local X axis, `binormal` the local Y axis and `tangent`
/// the local Z axis, so `normal x binormal = tangent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Local X axis.
    pub normal: Vector3,
    /// Local Y axis.
    pub binormal: Vector3,
    /// Local Z axis, along the path.
    pub tangent: Vector3,
}

impl Frame {
    /// The primary reference vector, `+Z`.
    #[must_use]
    pub fn up() -> Vector3 {
        Vector3::z()
    }

    /// The reference used when the tangent is parallel to [`Frame::up`].
    #[must_use]
    pub fn fallback_reference() -> Vector3 {
        Vector3::x()
    }

    /// Builds a frame whose tangent follows `dir`:
    ///
    /// ```text
    /// z = normalize(dir)
    /// x = normalize(reference x z)
    /// y = z x x
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the [`Degeneracy`] if `dir` is zero or parallel to `reference`.
    pub fn from_direction(
        dir: &Vector3,
        reference: &Vector3,
    ) -> std::result::Result<Self, Degeneracy> {
        let tangent = dir
            .try_normalize(TOLERANCE)
            .ok_or(Degeneracy::ZeroTangent)?;
        let normal = reference
            .cross(&tangent)
            .try_normalize(TOLERANCE)
            .ok_or(Degeneracy::ParallelToReference)?;
        let binormal = tangent.cross(&normal);
        Ok(Self {
            normal,
            binormal,
            tangent,
        })
    }

    /// Rotation matrix with columns `(normal, binormal, tangent)`.
    #[must_use]
    pub fn rotation(&self) -> Matrix3 {
        Matrix3::from_columns(&[self.normal, self.binormal, self.tangent])
    }

    /// Homogeneous transform of the rotation with zero translation.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix4 {
        self.rotation().to_homogeneous()
    }

    /// Maps a point of the local XY plane into world orientation.
    #[must_use]
    pub fn apply(&self, local: &Point2) -> Vector3 {
        self.normal * local.x + self.binormal * local.y
    }

    /// Rotates the normal and binormal about the tangent by `deg` degrees.
    #[must_use]
    pub fn rotated_about_tangent(&self, deg: f64) -> Self {
        let (sin_a, cos_a) = deg.to_radians().sin_cos();
        Self {
            normal: self.normal * cos_a + self.binormal * sin_a,
            binormal: -self.normal * sin_a + self.binormal * cos_a,
            tangent: self.tangent,
        }
    }

    /// Checks unit length, mutual orthogonality and right-handedness.
    #[must_use]
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let unit = [self.normal, self.binormal, self.tangent]
            .iter()
            .all(|v| (v.norm() - 1.0).abs() < tolerance);
        let orthogonal = self.normal.dot(&self.binormal).abs() < tolerance
            && self.normal.dot(&self.tangent).abs() < tolerance
            && self.binormal.dot(&self.tangent).abs() < tolerance;
        let right_handed = (self.normal.cross(&self.binormal) - self.tangent).norm() < tolerance;
        unit && orthogonal && right_handed
    }

    /// Carries this frame onto a new unit tangent with the smallest rotation.
    #[must_use]
    pub fn transport(&self, new_tangent: &Vector3) -> Self {
        let rotation = Rotation3::rotation_between(&self.tangent, new_tangent).unwrap_or_else(
            // Reversed tangent: half turn about the normal keeps the basis right-handed.
            || Rotation3::from_axis_angle(&Unit::new_unchecked(self.normal), PI),
        );
        let normal = rotation * self.normal;
        // Drop accumulated drift so the basis stays orthonormal.
        let normal = (normal - new_tangent * new_tangent.dot(&normal))
            .try_normalize(TOLERANCE)
            .unwrap_or(normal);
        Self {
            normal,
            binormal: new_tangent.cross(&normal),
            tangent: *new_tangent,
        }
    }

    /// Signed angle in degrees that rotates `self.normal` onto `other.normal`
    /// about `other.tangent`.
    #[must_use]
    pub fn twist_to(&self, other: &Self) -> f64 {
        let sin = other.tangent.dot(&self.normal.cross(&other.normal));
        let cos = self.normal.dot(&other.normal);
        sin.atan2(cos).to_degrees()
    }
}

/// Computes one frame per ring position of a path.
pub struct FrameSolver {
    mode: FrameMode,
}

impl FrameSolver {
    /// Creates a new `FrameSolver` using the given strategy.
    #[must_use]
    pub fn new(mode: FrameMode) -> Self {
        Self { mode }
    }

    /// Returns the frame strategy.
    #[must_use]
    pub fn mode(&self) -> FrameMode {
        self.mode
    }

    /// Solves the frames for rings `0..path.step_count()`.
    ///
    /// Ring `i` uses the tangent `path[(i + 1) mod step_count] - path[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::ZeroTangent`] for coincident consecutive samples
    /// and, in [`FrameMode::Strict`], [`FrameError::ParallelToUp`] for a
    /// tangent parallel to [`Frame::up`].
    pub fn solve(&self, path: &Path) -> Result<Vec<Frame>> {
        debug!(mode = ?self.mode, rings = path.step_count(), "solving sweep frames");
        match self.mode {
            FrameMode::FixedUp | FrameMode::Strict => (0..path.step_count())
                .map(|i| fixed_frame(i, &path.segment(i), self.mode == FrameMode::Strict))
                .collect(),
            FrameMode::RotationMinimizing => rotation_minimizing_frames(path),
        }
    }
}

fn fixed_frame(index: usize, dir: &Vector3, strict: bool) -> Result<Frame> {
    match Frame::from_direction(dir, &Frame::up()) {
        Ok(frame) => Ok(frame),
        Err(Degeneracy::ZeroTangent) => Err(FrameError::ZeroTangent { index }.into()),
        Err(Degeneracy::ParallelToReference) if strict => {
            Err(FrameError::ParallelToUp { index }.into())
        }
        Err(Degeneracy::ParallelToReference) => {
            debug!(index, "tangent parallel to up, using fallback reference");
            Frame::from_direction(dir, &Frame::fallback_reference())
                .map_err(|_| FrameError::ParallelToUp { index }.into())
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn rotation_minimizing_frames(path: &Path) -> Result<Vec<Frame>> {
    let n = path.step_count();
    let tangents = (0..n)
        .map(|index| {
            path.segment(index)
                .try_normalize(TOLERANCE)
                .ok_or_else(|| FrameError::ZeroTangent { index }.into())
        })
        .collect::<Result<Vec<Vector3>>>()?;

    let mut frames = Vec::with_capacity(n);
    frames.push(fixed_frame(0, &tangents[0], false)?);
    for tangent in &tangents[1..] {
        let prev = frames[frames.len() - 1];
        frames.push(prev.transport(tangent));
    }

    // Carry the last frame across the seam and spread the mismatch.
    let closing = frames[n - 1].transport(&tangents[0]);
    let seam_twist = closing.twist_to(&frames[0]);
    debug!(seam_twist, "distributing seam twist");
    for (i, frame) in frames.iter_mut().enumerate().skip(1) {
        *frame = frame.rotated_about_tangent(seam_twist * i as f64 / n as f64);
    }

    Ok(frames)
}
