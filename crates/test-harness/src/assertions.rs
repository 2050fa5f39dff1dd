//! Rich assertion helpers with diagnostic output.
//!
//! Every failure includes expected vs actual and the scenario context
//! string for maximum debuggability.

use gem_types::{Inclusion, Tint};

use gem_kernel::{audit_mesh, GemMesh};

use crate::helpers::HarnessError;
use crate::oracle::OracleVerdict;

/// Assert exact mesh counts (V, F) for a built stone.
pub fn assert_mesh_counts(
    mesh: &GemMesh,
    expected_v: usize,
    expected_f: usize,
    ctx: &str,
) -> Result<(), HarnessError> {
    let v = mesh.vertex_count();
    let f = mesh.face_count();
    if v == expected_v && f == expected_f {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected V={} F={}, got V={} F={}",
                ctx, expected_v, expected_f, v, f
            ),
        })
    }
}

/// Assert the mesh is watertight, outward-wound, and index-valid.
pub fn assert_mesh_sound(mesh: &GemMesh, ctx: &str) -> Result<(), HarnessError> {
    let report = audit_mesh(mesh);
    if report.is_sound() {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{}] mesh unsound:\n{}", ctx, report),
        })
    }
}

/// Assert an inclusion set has exactly the expected count.
pub fn assert_inclusion_count(
    inclusions: &[Inclusion],
    expected: usize,
    ctx: &str,
) -> Result<(), HarnessError> {
    if inclusions.len() == expected {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected {} inclusions, got {}",
                ctx,
                expected,
                inclusions.len()
            ),
        })
    }
}

/// Assert two inclusion sets are structurally identical.
pub fn assert_inclusions_identical(
    a: &[Inclusion],
    b: &[Inclusion],
    ctx: &str,
) -> Result<(), HarnessError> {
    if a == b {
        Ok(())
    } else {
        let first_diff = a
            .iter()
            .zip(b.iter())
            .position(|(x, y)| x != y)
            .map(|i| i.to_string())
            .unwrap_or_else(|| format!("length {} vs {}", a.len(), b.len()));
        Err(HarnessError::AssertionFailed {
            detail: format!("[{}] inclusion sets differ at {}", ctx, first_diff),
        })
    }
}

/// Assert two tints match channel-wise within tolerance.
pub fn assert_tint_near(a: &Tint, b: &Tint, tol: f64, ctx: &str) -> Result<(), HarnessError> {
    for (channel, x, y) in [
        ("hue", a.hue, b.hue),
        ("saturation", a.saturation, b.saturation),
        ("lightness", a.lightness, b.lightness),
        ("warmth", a.warmth, b.warmth),
    ] {
        if (x - y).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] tint {} mismatch: {:.6} vs {:.6} (tol={})",
                    ctx, channel, x, y, tol
                ),
            });
        }
    }
    Ok(())
}

/// Assert a scalar lies within tolerance of the expected value.
pub fn assert_near(actual: f64, expected: f64, tol: f64, ctx: &str) -> Result<(), HarnessError> {
    if (actual - expected).abs() <= tol {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected {:.6} +/- {}, got {:.6}",
                ctx, expected, tol, actual
            ),
        })
    }
}

/// Promote a failed oracle verdict into a harness error.
pub fn require_verdict(verdict: OracleVerdict) -> Result<(), HarnessError> {
    if verdict.passed {
        Ok(())
    } else {
        Err(HarnessError::OracleFailure {
            oracle: verdict.oracle_name,
            detail: verdict.detail,
        })
    }
}
