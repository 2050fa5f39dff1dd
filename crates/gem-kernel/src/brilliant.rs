//! Round-brilliant mesh construction.
//!
//! The topology is fixed: 58 vertices and 112 triangles regardless of
//! proportions. Proportion parameters move vertices; they never change the
//! facet layout. This keeps every produced mesh watertight by construction
//! and lets the scene adapter morph between proportion sets by lerping
//! vertex positions.

use std::f64::consts::PI;

use tracing::{debug, info, instrument};

use gem_types::{Point3d, ProportionSpec};

use crate::errors::GeometryError;
use crate::mesh::GemMesh;

/// 1 table center + 8 table rim + 8 star + 16 upper girdle + 16 lower
/// girdle + 8 pavilion mains + 1 culet.
pub const BRILLIANT_VERTEX_COUNT: usize = 58;

/// 8 table fan + 16 crown star + 24 crown bezel + 32 girdle + 24 pavilion
/// + 8 pavilion fan.
pub const BRILLIANT_FACE_COUNT: usize = 112;

/// Girdle band half-thickness as a fraction of girdle radius.
const GIRDLE_HALF_THICKNESS: f64 = 0.02;

/// Star ring sits 35% of the way out from the table rim to the girdle.
const STAR_RADIUS_BLEND: f64 = 0.35;

/// Pavilion main vertices sit at 45% of the girdle radius.
const PAVILION_MAIN_RADIUS: f64 = 0.45;

// Vertex index layout. The face tables below depend on this ordering.
const TABLE_CENTER: u32 = 0;
const RIM_BASE: u32 = 1;
const STAR_BASE: u32 = 9;
const UPPER_GIRDLE_BASE: u32 = 17;
const LOWER_GIRDLE_BASE: u32 = 33;
const PAVILION_BASE: u32 = 49;
const CULET: u32 = 57;

/// Reject non-finite proportions, clamp degenerate ones.
///
/// Clamping bounds are physical sanity limits, not cut-grade limits: a
/// clamped stone still renders as a recognizable brilliant. Returns
/// [`GeometryError::NonFinite`] for NaN/infinity anywhere, since a silently
/// degenerate mesh is worse than a visible error.
pub fn sanitize_spec(spec: &ProportionSpec) -> Result<ProportionSpec, GeometryError> {
    for (param, value) in spec.fields() {
        if !value.is_finite() {
            return Err(GeometryError::NonFinite { param, value });
        }
    }
    let girdle_radius = spec.girdle_radius.max(1e-3);
    Ok(ProportionSpec {
        table_ratio: spec.table_ratio.clamp(1e-3, 0.99),
        crown_height: spec
            .crown_height
            .clamp(0.05 * girdle_radius, 1.0 * girdle_radius),
        girdle_radius,
        pavilion_depth: spec
            .pavilion_depth
            .clamp(0.1 * girdle_radius, 2.0 * girdle_radius),
        culet_size: spec.culet_size.clamp(1e-4, 0.2 * girdle_radius),
    })
}

/// Build the round-brilliant mesh for a proportion spec.
///
/// The mesh is y-up: table toward +y, culet at `y = -pavilion_depth`. Faces
/// wind counter-clockwise seen from outside the stone.
#[instrument]
pub fn build_brilliant(spec: &ProportionSpec) -> Result<GemMesh, GeometryError> {
    let spec = sanitize_spec(spec)?;
    debug!(?spec, "building with sanitized proportions");

    let r = spec.girdle_radius;
    let table_radius = spec.table_ratio * r;
    let star_radius = table_radius + STAR_RADIUS_BLEND * (r - table_radius);
    let crown_y = spec.crown_height;
    let star_y = 0.55 * spec.crown_height;
    let girdle_y = GIRDLE_HALF_THICKNESS * r;
    let pavilion_radius = PAVILION_MAIN_RADIUS * r;
    let pavilion_y = -0.55 * spec.pavilion_depth;
    let culet_y = -spec.pavilion_depth;

    let ring = |radius: f64, y: f64, offset: f64, count: usize| {
        let step = 2.0 * PI / count as f64;
        (0..count).map(move |k| {
            let angle = offset + k as f64 * step;
            Point3d::new(radius * angle.cos(), y, radius * angle.sin())
        })
    };

    let mut vertices = Vec::with_capacity(BRILLIANT_VERTEX_COUNT);
    vertices.push(Point3d::new(0.0, crown_y, 0.0));
    // Table rim offset by pi/8 so its edges align with the crown facets.
    vertices.extend(ring(table_radius, crown_y, PI / 8.0, 8));
    vertices.extend(ring(star_radius, star_y, 0.0, 8));
    vertices.extend(ring(r, girdle_y, 0.0, 16));
    vertices.extend(ring(r, -girdle_y, 0.0, 16));
    vertices.extend(ring(pavilion_radius, pavilion_y, 0.0, 8));
    vertices.push(Point3d::new(0.0, culet_y, 0.0));

    let mesh = GemMesh {
        vertices,
        faces: brilliant_faces(),
    };
    info!(
        vertex_count = mesh.vertex_count(),
        face_count = mesh.face_count(),
        "built brilliant-cut mesh"
    );
    Ok(mesh)
}

/// The fixed triangulation. Shared by every brilliant mesh.
fn brilliant_faces() -> Vec<[u32; 3]> {
    let rim = |k: u32| RIM_BASE + k % 8;
    let star = |k: u32| STAR_BASE + k % 8;
    let ug = |j: u32| UPPER_GIRDLE_BASE + j % 16;
    let lg = |j: u32| LOWER_GIRDLE_BASE + j % 16;
    let pav = |k: u32| PAVILION_BASE + k % 8;

    let mut faces = Vec::with_capacity(BRILLIANT_FACE_COUNT);

    // Table fan.
    for k in 0..8 {
        faces.push([TABLE_CENTER, rim(k + 1), rim(k)]);
    }

    // Crown star facets: rim vertex k sits angularly between stars k and
    // k+1, so each segment splits into two triangles.
    for k in 0..8 {
        faces.push([star(k), rim(k), star(k + 1)]);
        faces.push([rim(k), rim(k + 1), star(k + 1)]);
    }

    // Crown bezel facets: the kite under each star splits across two upper
    // girdle segments, plus the join triangle to the next star.
    for k in 0..8 {
        faces.push([star(k), ug(2 * k), ug(2 * k + 15)]);
        faces.push([star(k), ug(2 * k + 1), ug(2 * k)]);
        faces.push([star(k), star(k + 1), ug(2 * k + 1)]);
    }

    // Girdle band: two triangles per segment.
    for j in 0..16 {
        faces.push([lg(j), ug(j), ug(j + 1)]);
        faces.push([lg(j), ug(j + 1), lg(j + 1)]);
    }

    // Pavilion main facets: mirrored bezel logic against the lower girdle.
    for k in 0..8 {
        faces.push([pav(k), lg(2 * k + 15), lg(2 * k)]);
        faces.push([pav(k), lg(2 * k), lg(2 * k + 1)]);
        faces.push([pav(k), lg(2 * k + 1), pav(k + 1)]);
    }

    // Pavilion lower fan into the culet.
    for k in 0..8 {
        faces.push([CULET, pav(k), pav(k + 1)]);
    }

    faces
}
