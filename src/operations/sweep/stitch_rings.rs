use crate::error::{Result, TopologyError};
use crate::tessellation::QuadMesh;

use super::transform_ring::Ring;

/// Connects consecutive rings with quads and closes the tube.
pub struct StitchRings {
    step_count: usize,
    sides: usize,
}

impl StitchRings {
    /// Creates a new `StitchRings` operation.
    #[must_use]
    pub fn new(step_count: usize, sides: usize) -> Self {
        Self { step_count, sides }
    }

    /// Flattens the rings into one vertex buffer and emits the quad faces.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::IndexConsistency`] if the ring count or any
    /// ring's size does not match the configured dimensions.
    pub fn execute(&self, rings: Vec<Ring>) -> Result<QuadMesh> {
        if rings.len() != self.step_count {
            return Err(TopologyError::IndexConsistency(format!(
                "expected {} rings, got {}",
                self.step_count,
                rings.len()
            ))
            .into());
        }
        if let Some((i, ring)) = rings
            .iter()
            .enumerate()
            .find(|(_, ring)| ring.len() != self.sides)
        {
            return Err(TopologyError::IndexConsistency(format!(
                "ring {i} has {} vertices, profile has {}",
                ring.len(),
                self.sides
            ))
            .into());
        }

        let mut vertices = Vec::with_capacity(self.step_count * self.sides);
        for ring in rings {
            vertices.extend(ring.into_points());
        }

        Ok(QuadMesh {
            vertices,
            faces: quad_faces(self.step_count, self.sides),
            rings: self.step_count,
            sides: self.sides,
        })
    }
}

/// Face `(i, j)` joining ring `i` to ring `i + 1` between profile vertices
/// `j` and `j + 1`, both indices wrapping.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn quad_face(i: usize, j: usize, step_count: usize, sides: usize) -> [u32; 4] {
    let next_i = (i + 1) % step_count;
    let next_j = (j + 1) % sides;
    [
        (i * sides + j) as u32,
        (next_i * sides + j) as u32,
        (next_i * sides + next_j) as u32,
        (i * sides + next_j) as u32,
    ]
}

/// All `step_count * sides` faces, ring-major.
#[must_use]
pub fn quad_faces(step_count: usize, sides: usize) -> Vec<[u32; 4]> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..step_count)
            .into_par_iter()
            .flat_map_iter(|i| (0..sides).map(move |j| quad_face(i, j, step_count, sides)))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..step_count)
            .flat_map(|i| (0..sides).map(move |j| quad_face(i, j, step_count, sides)))
            .collect()
    }
}
