//! Mesh soundness audit.
//!
//! The builder produces watertight meshes by construction; this module is
//! the independent check used by tests and offered to consumers that accept
//! meshes from elsewhere (e.g. cached or deserialized catalog previews).

use std::collections::HashMap;
use std::fmt;

use tracing::{info, instrument};

use crate::mesh::GemMesh;

/// Triangles with less than this squared-area are flagged degenerate.
const DEGENERATE_AREA_SQ: f64 = 1e-24;

/// The result of auditing a mesh. All counts refer to the mesh as given;
/// nothing is repaired.
#[derive(Debug, Clone, Default)]
pub struct MeshReport {
    pub vertex_count: usize,
    pub face_count: usize,
    pub edge_count: usize,
    /// Directed edges used by exactly one triangle (holes in the surface).
    pub boundary_edges: usize,
    /// Undirected edges shared by more than two triangles, or by two
    /// triangles winding the same way.
    pub non_manifold_edges: usize,
    /// Face corners referencing a vertex index past the vertex array.
    pub out_of_bounds_indices: usize,
    /// Triangles with near-zero area.
    pub degenerate_faces: usize,
    /// Faces whose normal points toward the origin instead of away.
    pub inward_faces: usize,
}

impl MeshReport {
    /// Closed surface: every edge shared by exactly two opposed triangles.
    pub fn is_watertight(&self) -> bool {
        self.boundary_edges == 0 && self.non_manifold_edges == 0 && self.out_of_bounds_indices == 0
    }

    /// Watertight, consistently outward, and free of degenerate triangles.
    pub fn is_sound(&self) -> bool {
        self.is_watertight() && self.inward_faces == 0 && self.degenerate_faces == 0
    }

    /// V - E + F; 2 for a closed genus-0 surface.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertex_count as i64 - self.edge_count as i64 + self.face_count as i64
    }
}

impl fmt::Display for MeshReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "MeshReport: V={} E={} F={} (euler={}), sound={}",
            self.vertex_count,
            self.edge_count,
            self.face_count,
            self.euler_characteristic(),
            self.is_sound(),
        )?;
        writeln!(
            f,
            "  boundary_edges={} non_manifold_edges={} out_of_bounds={} degenerate={} inward={}",
            self.boundary_edges,
            self.non_manifold_edges,
            self.out_of_bounds_indices,
            self.degenerate_faces,
            self.inward_faces,
        )
    }
}

/// Audit a mesh for watertightness, winding, and index validity.
///
/// Winding is judged against the origin: the stone is modeled around the
/// origin, so every outward face normal must have a positive dot product
/// with its centroid. Faces containing out-of-bounds indices are skipped by
/// the geometric checks and only counted in `out_of_bounds_indices`.
#[instrument(skip(mesh))]
pub fn audit_mesh(mesh: &GemMesh) -> MeshReport {
    let mut report = MeshReport {
        vertex_count: mesh.vertex_count(),
        face_count: mesh.face_count(),
        ..MeshReport::default()
    };

    // Directed edge census. A closed orientable surface uses every
    // undirected edge exactly twice, once in each direction.
    let mut directed: HashMap<(u32, u32), u32> = HashMap::new();

    for (face_idx, face) in mesh.faces.iter().enumerate() {
        let valid = face.iter().all(|&i| (i as usize) < mesh.vertices.len());
        if !valid {
            report.out_of_bounds_indices += face
                .iter()
                .filter(|&&i| (i as usize) >= mesh.vertices.len())
                .count();
            continue;
        }

        for e in 0..3 {
            let a = face[e];
            let b = face[(e + 1) % 3];
            *directed.entry((a, b)).or_insert(0) += 1;
        }

        let normal = mesh.face_normal(face_idx);
        if normal.length_squared() < DEGENERATE_AREA_SQ {
            report.degenerate_faces += 1;
            continue;
        }
        let centroid = mesh.face_centroid(face_idx);
        if normal.dot(&centroid.to_vec3()) <= 0.0 {
            report.inward_faces += 1;
        }
    }

    let mut undirected: HashMap<(u32, u32), (u32, u32)> = HashMap::new();
    for (&(a, b), &count) in &directed {
        let key = if a < b { (a, b) } else { (b, a) };
        let entry = undirected.entry(key).or_insert((0, 0));
        if (a, b) == key {
            entry.0 += count;
        } else {
            entry.1 += count;
        }
    }

    report.edge_count = undirected.len();
    for &(forward, backward) in undirected.values() {
        let total = forward + backward;
        if total == 1 {
            report.boundary_edges += 1;
        } else if total > 2 || forward != backward {
            // Either over-shared or two triangles winding the same way.
            report.non_manifold_edges += 1;
        }
    }

    info!(
        vertex_count = report.vertex_count,
        face_count = report.face_count,
        edge_count = report.edge_count,
        boundary_edges = report.boundary_edges,
        non_manifold_edges = report.non_manifold_edges,
        sound = report.is_sound(),
        "mesh audit complete"
    );
    report
}
