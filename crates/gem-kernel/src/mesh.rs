use serde::{Deserialize, Serialize};

use gem_types::{Point3d, Vec3};

/// An indexed triangle mesh.
///
/// Invariants for a well-formed mesh: every index in `faces` is below
/// `vertices.len()`, the surface is a closed manifold, and face winding is
/// counter-clockwise seen from outside. [`crate::audit_mesh`] checks all of
/// these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GemMesh {
    pub vertices: Vec<Point3d>,
    pub faces: Vec<[u32; 3]>,
}

impl GemMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Unnormalized face normal (cross of the two edge vectors). Magnitude
    /// is twice the triangle area.
    pub fn face_normal(&self, face: usize) -> Vec3 {
        let [a, b, c] = self.faces[face];
        let pa = self.vertices[a as usize];
        let pb = self.vertices[b as usize];
        let pc = self.vertices[c as usize];
        (pb - pa).cross(&(pc - pa))
    }

    pub fn face_centroid(&self, face: usize) -> Point3d {
        let [a, b, c] = self.faces[face];
        let pa = self.vertices[a as usize];
        let pb = self.vertices[b as usize];
        let pc = self.vertices[c as usize];
        Point3d::new(
            (pa.x + pb.x + pc.x) / 3.0,
            (pa.y + pb.y + pc.y) / 3.0,
            (pa.z + pb.z + pc.z) / 3.0,
        )
    }

    /// Area-weighted vertex normals, normalized where possible. Degenerate
    /// accumulations fall back to the zero vector.
    pub fn vertex_normals(&self) -> Vec<Vec3> {
        let mut accum = vec![Vec3::ZERO; self.vertices.len()];
        for face in 0..self.faces.len() {
            let n = self.face_normal(face);
            for &idx in &self.faces[face] {
                let i = idx as usize;
                if i < accum.len() {
                    accum[i] = accum[i] + n;
                }
            }
        }
        accum
            .into_iter()
            .map(|n| n.normalized().unwrap_or(Vec3::ZERO))
            .collect()
    }

    /// Axis-aligned bounds as `(min, max)` corner points. `None` for an
    /// empty mesh.
    pub fn bounds(&self) -> Option<(Point3d, Point3d)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }
        Some((min, max))
    }
}
