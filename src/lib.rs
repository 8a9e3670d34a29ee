//! Parametric tube sweeps.
//!
//! Samples a closed curve, orients a regular polygon along it and stitches
//! the resulting rings into an indexed quad mesh.
//!
//! ```
//! use tubesweep::{Sweep, SweepParams, TrefoilKnot};
//!
//! let mesh = Sweep::new(TrefoilKnot, SweepParams::default()).execute()?;
//! assert_eq!(mesh.face_count(), 150 * 6);
//! # Ok::<(), tubesweep::TubesweepError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{Result, TubesweepError};
pub use geometry::curve::{CirclePath, PathCurve, TorusKnot, TrefoilKnot};
pub use operations::sweep::{FrameMode, Sweep, SweepParams};
pub use tessellation::{QuadMesh, TriangleMesh};
