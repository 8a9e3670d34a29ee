pub mod curve;

pub use curve::{CirclePath, PathCurve, ScaledCurve, TorusKnot, TrefoilKnot};
