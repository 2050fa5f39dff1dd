//! Verification oracles — pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not
//! panics. This lets a scenario collect all failures in one pass.

use gem_types::{ClarityGrade, ClarityTable, ColorTable, Inclusion};

use gem_engine::{defect_area, generate_inclusions, interpolate_color_grade};
use gem_kernel::{audit_mesh, GemMesh};

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: Some(value),
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: Some(value),
        }
    }
}

// ── Mesh Oracles ────────────────────────────────────────────────────────────

/// Check Euler's formula: V - E + F = 2 for a closed genus-0 mesh.
pub fn check_euler_formula(mesh: &GemMesh) -> OracleVerdict {
    let report = audit_mesh(mesh);
    let euler = report.euler_characteristic();
    if euler == 2 {
        OracleVerdict::pass_val(
            "euler_formula",
            format!(
                "V({}) - E({}) + F({}) = 2",
                report.vertex_count, report.edge_count, report.face_count
            ),
            euler as f64,
        )
    } else {
        OracleVerdict::fail_val(
            "euler_formula",
            format!(
                "V({}) - E({}) + F({}) = {} (expected 2)",
                report.vertex_count, report.edge_count, report.face_count, euler
            ),
            euler as f64,
        )
    }
}

/// Check that every edge is shared by exactly two opposed triangles.
pub fn check_watertight(mesh: &GemMesh) -> OracleVerdict {
    let report = audit_mesh(mesh);
    if report.is_watertight() {
        OracleVerdict::pass(
            "watertight",
            format!("all {} edges are two-faced and opposed", report.edge_count),
        )
    } else {
        OracleVerdict::fail(
            "watertight",
            format!(
                "boundary={} non_manifold={} out_of_bounds={}",
                report.boundary_edges, report.non_manifold_edges, report.out_of_bounds_indices
            ),
        )
    }
}

/// Check that every face normal points away from the origin.
pub fn check_outward_winding(mesh: &GemMesh) -> OracleVerdict {
    let report = audit_mesh(mesh);
    if report.inward_faces == 0 && report.degenerate_faces == 0 {
        OracleVerdict::pass(
            "outward_winding",
            format!("all {} faces wind outward", report.face_count),
        )
    } else {
        OracleVerdict::fail(
            "outward_winding",
            format!(
                "{} inward faces, {} degenerate faces of {}",
                report.inward_faces, report.degenerate_faces, report.face_count
            ),
        )
    }
}

// ── Generator Oracles ───────────────────────────────────────────────────────

/// Check that two generation runs for the same inputs are identical.
pub fn check_generation_determinism(
    grade: ClarityGrade,
    seed: f64,
    table: &ClarityTable,
) -> OracleVerdict {
    let a = generate_inclusions(grade, seed, table);
    let b = generate_inclusions(grade, seed, table);
    match (a, b) {
        (Ok(a), Ok(b)) if a == b => OracleVerdict::pass_val(
            "generation_determinism",
            format!("{} @ seed {} reproduced {} inclusions", grade, seed, a.len()),
            a.len() as f64,
        ),
        (Ok(a), Ok(b)) => OracleVerdict::fail(
            "generation_determinism",
            format!(
                "{} @ seed {} diverged: {} vs {} inclusions or differing fields",
                grade,
                seed,
                a.len(),
                b.len()
            ),
        ),
        (a, b) => OracleVerdict::fail(
            "generation_determinism",
            format!("generation errored: {:?} / {:?}", a.err(), b.err()),
        ),
    }
}

/// Check that mean defect area is non-decreasing along the clarity scale,
/// averaged over the given seeds.
pub fn check_defect_monotonicity(table: &ClarityTable, seeds: &[f64]) -> OracleVerdict {
    if seeds.is_empty() {
        return OracleVerdict::fail("defect_monotonicity", "no seeds supplied".to_string());
    }
    let mut prev = (ClarityGrade::Fl, 0.0f64);
    for &grade in &ClarityGrade::ALL {
        let mut total = 0.0;
        for &seed in seeds {
            match generate_inclusions(grade, seed, table) {
                Ok(set) => total += defect_area(&set),
                Err(e) => {
                    return OracleVerdict::fail(
                        "defect_monotonicity",
                        format!("generation failed at {}: {}", grade, e),
                    )
                }
            }
        }
        let mean = total / seeds.len() as f64;
        if mean + 1e-12 < prev.1 {
            return OracleVerdict::fail_val(
                "defect_monotonicity",
                format!(
                    "mean defect area fell from {} ({:.4}) to {} ({:.4})",
                    prev.0, prev.1, grade, mean
                ),
                mean,
            );
        }
        prev = (grade, mean);
    }
    OracleVerdict::pass_val(
        "defect_monotonicity",
        format!("non-decreasing over {} seeds, I3 mean {:.4}", seeds.len(), prev.1),
        prev.1,
    )
}

/// Check that every inclusion sits inside the given lateral/vertical bounds.
pub fn check_inclusions_bounded(
    inclusions: &[Inclusion],
    lateral_limit: f64,
    top_limit: f64,
    bottom_limit: f64,
) -> OracleVerdict {
    let mut escaped = Vec::new();
    for (i, inc) in inclusions.iter().enumerate() {
        let lateral = (inc.position.x * inc.position.x + inc.position.z * inc.position.z).sqrt();
        if lateral > lateral_limit || inc.position.y > top_limit || inc.position.y < -bottom_limit {
            escaped.push(i);
        }
    }
    if escaped.is_empty() {
        OracleVerdict::pass(
            "inclusions_bounded",
            format!("all {} inclusions inside the stone envelope", inclusions.len()),
        )
    } else {
        OracleVerdict::fail(
            "inclusions_bounded",
            format!(
                "{} of {} inclusions escaped: indices {:?}",
                escaped.len(),
                inclusions.len(),
                &escaped[..escaped.len().min(5)]
            ),
        )
    }
}

/// Check anchor exactness: integer positions return table entries verbatim.
pub fn check_anchor_exactness(table: &ColorTable) -> OracleVerdict {
    for (i, anchor) in table.anchors.iter().enumerate() {
        match interpolate_color_grade(i as f64, table) {
            Ok(tint) => {
                if tint.hue != anchor.hue
                    || tint.saturation != anchor.saturation
                    || tint.lightness != anchor.lightness
                    || tint.warmth != anchor.warmth
                {
                    return OracleVerdict::fail(
                        "anchor_exactness",
                        format!("anchor {} ({}) drifted under interpolation", i, anchor.grade),
                    );
                }
            }
            Err(e) => {
                return OracleVerdict::fail(
                    "anchor_exactness",
                    format!("interpolation failed at anchor {}: {}", i, e),
                )
            }
        }
    }
    OracleVerdict::pass(
        "anchor_exactness",
        format!("all {} anchors returned verbatim", table.anchors.len()),
    )
}
