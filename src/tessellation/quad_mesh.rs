use crate::error::{Result, TopologyError};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::Aabb;

/// An indexed quad mesh produced by a sweep.
///
/// Ring `i` occupies vertices `[i * sides, (i + 1) * sides)`. Each face lists
/// four zero-based vertex indices, clockwise when seen from outside the tube
/// (the right-hand normal of a face points inward).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuadMesh {
    /// Vertex positions, ring-major.
    pub vertices: Vec<Point3>,
    /// Quad faces.
    pub faces: Vec<[u32; 4]>,
    /// Number of rings.
    pub rings: usize,
    /// Vertices per ring.
    pub sides: usize,
}

impl QuadMesh {
    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the vertices of ring `i`, or `None` if out of range.
    #[must_use]
    pub fn ring(&self, i: usize) -> Option<&[Point3]> {
        if i >= self.rings {
            return None;
        }
        self.vertices.get(i * self.sides..(i + 1) * self.sides)
    }

    /// Returns the ring index a vertex index belongs to.
    #[must_use]
    pub fn ring_of(&self, vertex: u32) -> usize {
        vertex as usize / self.sides.max(1)
    }

    /// Bounding box of all vertices.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }

    /// Unit right-hand normal of a face by Newell's method.
    ///
    /// Points into the tube under the mesh's winding convention. Returns
    /// `None` for a degenerate face or an out-of-range face index.
    #[must_use]
    pub fn face_normal(&self, face: usize) -> Option<Vector3> {
        let indices = self.faces.get(face)?;
        let mut normal = Vector3::zeros();
        for k in 0..4 {
            let curr = self.vertices.get(indices[k] as usize)?;
            let next = self.vertices.get(indices[(k + 1) % 4] as usize)?;
            normal.x += (curr.y - next.y) * (curr.z + next.z);
            normal.y += (curr.z - next.z) * (curr.x + next.x);
            normal.z += (curr.x - next.x) * (curr.y + next.y);
        }
        normal.try_normalize(TOLERANCE)
    }

    /// Checks the buffer sizes and that every face references four distinct,
    /// in-range vertices.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::IndexConsistency`] describing the first
    /// violation found.
    pub fn validate(&self) -> Result<()> {
        let expected = self.rings * self.sides;
        if self.vertices.len() != expected {
            return Err(inconsistent(format!(
                "{} vertices for {} rings of {} sides",
                self.vertices.len(),
                self.rings,
                self.sides
            )));
        }
        if self.faces.len() != expected {
            return Err(inconsistent(format!(
                "{} faces for {} rings of {} sides",
                self.faces.len(),
                self.rings,
                self.sides
            )));
        }

        for (f, face) in self.faces.iter().enumerate() {
            if let Some(&index) = face.iter().find(|&&v| v as usize >= expected) {
                return Err(inconsistent(format!(
                    "face {f} references vertex {index} out of {expected}"
                )));
            }
            for a in 0..4 {
                for b in (a + 1)..4 {
                    if face[a] == face[b] {
                        return Err(inconsistent(format!(
                            "face {f} repeats vertex {}",
                            face[a]
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

fn inconsistent(message: String) -> crate::error::TubesweepError {
    TopologyError::IndexConsistency(message).into()
}
