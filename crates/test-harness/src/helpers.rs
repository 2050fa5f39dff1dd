//! Helper functions: error type, fixture constructors, mesh and inclusion math.

use gem_types::{ClarityGrade, ClarityTable, Inclusion, Point3d, ProportionSpec};

use gem_kernel::GemMesh;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },

    #[error("engine error: {0}")]
    Engine(#[from] gem_engine::GemError),
}

// ── Fixture Constructors ────────────────────────────────────────────────────

/// The reference ideal-cut proportion spec used across scenario tests.
pub fn reference_spec() -> ProportionSpec {
    ProportionSpec::new(0.56, 0.16, 1.0, 0.43, 0.01)
}

/// A shallow, spready stone: wide table, low crown.
pub fn shallow_spec() -> ProportionSpec {
    ProportionSpec::new(0.68, 0.10, 1.0, 0.38, 0.02)
}

/// A deep, small-table stone.
pub fn deep_spec() -> ProportionSpec {
    ProportionSpec::new(0.50, 0.19, 1.0, 0.52, 0.01)
}

/// A sparse clarity table carrying only the named grades, taken from the
/// standard table. Panics if a grade is missing there; harness-side fixture
/// code is allowed to panic.
pub fn sparse_clarity_table(grades: &[ClarityGrade]) -> ClarityTable {
    let standard = ClarityTable::standard();
    let profiles = grades
        .iter()
        .map(|g| {
            *standard
                .profile_for(*g)
                .unwrap_or_else(|| panic!("standard table lacks {}", g))
        })
        .collect();
    ClarityTable { profiles }
}

// ── Mesh Math ───────────────────────────────────────────────────────────────

/// Bounding box of a mesh as `(min, max)`. Panics on an empty mesh.
pub fn mesh_bounding_box(mesh: &GemMesh) -> (Point3d, Point3d) {
    mesh.bounds().expect("mesh has no vertices")
}

/// Signed volume via the divergence theorem over the triangle soup.
/// Positive for a closed, outward-wound surface.
pub fn signed_volume(mesh: &GemMesh) -> f64 {
    let mut volume = 0.0;
    for face in &mesh.faces {
        let a = mesh.vertices[face[0] as usize].to_vec3();
        let b = mesh.vertices[face[1] as usize].to_vec3();
        let c = mesh.vertices[face[2] as usize].to_vec3();
        volume += a.dot(&b.cross(&c)) / 6.0;
    }
    volume
}

// ── Inclusion Math ──────────────────────────────────────────────────────────

/// Farthest inclusion distance from the stone's center.
pub fn max_inclusion_radius(inclusions: &[Inclusion]) -> f64 {
    inclusions
        .iter()
        .map(|i| i.position.distance_to(&Point3d::ORIGIN))
        .fold(0.0, f64::max)
}

/// Count of carbon-spot inclusions in a set.
pub fn carbon_count(inclusions: &[Inclusion]) -> usize {
    inclusions.iter().filter(|i| i.carbon).count()
}
