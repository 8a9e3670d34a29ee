use crate::math::{Point2, Vector3, TOLERANCE};

use super::{QuadMesh, TriangleMesh};

impl QuadMesh {
    /// Splits every quad into two triangles, counter-clockwise from outside.
    ///
    /// Quad `(a, b, c, d)` becomes `(a, d, c)` and `(a, c, b)`. Vertex normals
    /// are the area-weighted average of the adjacent triangle normals. UVs
    /// run `u = i / rings` along the path and `v = j / sides` around it.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn triangulate(&self) -> TriangleMesh {
        let indices: Vec<[u32; 3]> = self
            .faces
            .iter()
            .flat_map(|&[a, b, c, d]| [[a, d, c], [a, c, b]])
            .collect();

        let mut normals = vec![Vector3::zeros(); self.vertices.len()];
        for tri in &indices {
            let [p0, p1, p2] = tri.map(|i| self.vertices[i as usize]);
            // Cross product length is twice the area: weights come for free.
            let n = (p1 - p0).cross(&(p2 - p0));
            for &i in tri {
                normals[i as usize] += n;
            }
        }
        for n in &mut normals {
            *n = n.try_normalize(TOLERANCE).unwrap_or_else(Vector3::zeros);
        }

        let sides = self.sides.max(1);
        let rings = self.rings.max(1) as f64;
        let uvs = (0..self.vertices.len())
            .map(|k| Point2::new((k / sides) as f64 / rings, (k % sides) as f64 / sides as f64))
            .collect();

        TriangleMesh {
            vertices: self.vertices.clone(),
            normals,
            uvs,
            indices,
        }
    }
}
