//! Sweeps a regular polygon along a closed parametric curve.
//!
//! ```text
//! SamplePath -> FrameSolver -> TransformRing -> StitchRings -> QuadMesh
//!                                    ^
//!                             RegularProfile
//! ```
//!
//! Every stage works on plain immutable data. Ring `i` and face `(i, j)`
//! depend only on their indices and the shared inputs, so the `parallel`
//! feature spreads them over a rayon pool without changing the output.

mod frame;
mod params;
mod regular_profile;
mod sample_path;
mod stitch_rings;
mod transform_ring;

pub use frame::{Degeneracy, Frame, FrameMode, FrameSolver};
pub use params::SweepParams;
pub use regular_profile::{RegularProfile, MIN_PROFILE_SIDES};
pub use sample_path::{Path, SamplePath, MIN_STEP_COUNT};
pub use stitch_rings::{quad_face, quad_faces, StitchRings};
pub use transform_ring::{Ring, TransformRing};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};
use crate::geometry::curve::{PathCurve, ScaledCurve};
use crate::tessellation::QuadMesh;

/// Relative closure gap above which an unchecked path is reported.
const CLOSURE_WARN_RATIO: f64 = 1e-6;

/// Sweeps a tube along a curve and returns the indexed quad mesh.
pub struct Sweep<C> {
    curve: C,
    params: SweepParams,
}

impl<C: PathCurve> Sweep<C> {
    /// Creates a new `Sweep` operation.
    #[must_use]
    pub fn new(curve: C, params: SweepParams) -> Self {
        Self { curve, params }
    }

    /// Returns the sweep parameters.
    #[must_use]
    pub fn params(&self) -> &SweepParams {
        &self.params
    }

    /// Runs the full pipeline.
    ///
    /// Nothing is sampled until the parameters have been validated, and no
    /// mesh is returned unless every stage succeeds.
    ///
    /// # Errors
    ///
    /// - [`ConfigError`] for invalid parameters, non-finite curve samples or
    ///   a closure gap above `closure_tolerance`.
    /// - [`FrameError`](crate::error::FrameError) for degenerate tangents.
    /// - [`TopologyError`](crate::error::TopologyError) if the assembled mesh
    ///   breaks its index invariants.
    pub fn execute(&self) -> Result<QuadMesh> {
        let params = &self.params;
        params.validate()?;

        let curve = ScaledCurve::new(&self.curve, params.path_scale);
        let path = SamplePath::new(params.step_count).execute(&curve)?;
        check_closure(&path, params.closure_tolerance)?;

        let profile = RegularProfile::new(params.profile_sides, params.tube_radius)?;
        let frames = FrameSolver::new(params.frame_mode).solve(&path)?;
        let rings = build_rings(&path, &profile, &frames, params.twist_factor);

        let mesh = StitchRings::new(params.step_count, params.profile_sides).execute(rings)?;
        mesh.validate()?;

        info!(
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "sweep complete"
        );
        Ok(mesh)
    }
}

fn check_closure(path: &Path, tolerance: Option<f64>) -> Result<()> {
    let gap = path.closure_gap();
    match tolerance {
        Some(tolerance) if gap > tolerance => {
            Err(ConfigError::PathNotClosed { gap, tolerance }.into())
        }
        Some(_) => Ok(()),
        None => {
            if gap > CLOSURE_WARN_RATIO * path.extent().max(1.0) {
                warn!(gap, "sweep path does not close; the seam will be visible");
            } else {
                debug!(gap, "sweep path closes");
            }
            Ok(())
        }
    }
}

fn build_rings(
    path: &Path,
    profile: &RegularProfile,
    frames: &[Frame],
    twist_factor: f64,
) -> Vec<Ring> {
    let ring_at = |i: usize| {
        TransformRing::for_ring(i, twist_factor).execute(profile, &frames[i], &path.point(i))
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..frames.len()).into_par_iter().map(ring_at).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..frames.len()).map(ring_at).collect()
    }
}
