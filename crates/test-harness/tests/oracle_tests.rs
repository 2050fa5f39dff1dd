//! Tests for the oracle functions themselves: each must pass on good input
//! and fail with useful detail on deliberately broken input.

use test_harness::helpers::{reference_spec, sparse_clarity_table};
use test_harness::oracle::*;

use gem_engine::{build_brilliant, generate_inclusions};
use gem_types::{ClarityGrade, ClarityTable, ColorTable};

#[test]
fn test_euler_oracle_passes_on_brilliant() {
    let mesh = build_brilliant(&reference_spec()).unwrap();
    let verdict = check_euler_formula(&mesh);
    assert!(verdict.passed, "{}", verdict.detail);
    assert_eq!(verdict.value, Some(2.0));
}

#[test]
fn test_euler_oracle_fails_on_open_mesh() {
    let mut mesh = build_brilliant(&reference_spec()).unwrap();
    mesh.faces.truncate(100);
    let verdict = check_watertight(&mesh);
    assert!(!verdict.passed);
    assert!(verdict.detail.contains("boundary"), "detail: {}", verdict.detail);
}

#[test]
fn test_winding_oracle_catches_flipped_face() {
    let mut mesh = build_brilliant(&reference_spec()).unwrap();
    mesh.faces[40].swap(0, 1);
    let verdict = check_outward_winding(&mesh);
    assert!(!verdict.passed);
    assert!(verdict.detail.contains("inward"));
}

#[test]
fn test_determinism_oracle() {
    let table = ClarityTable::standard();
    for grade in [ClarityGrade::Fl, ClarityGrade::Vs1, ClarityGrade::I3] {
        let verdict = check_generation_determinism(grade, 42.0, &table);
        assert!(verdict.passed, "{}", verdict.detail);
    }
}

#[test]
fn test_monotonicity_oracle_on_standard_table() {
    let table = ClarityTable::standard();
    let seeds: Vec<f64> = (0..32).map(|s| s as f64 * 5.0 + 1.0).collect();
    let verdict = check_defect_monotonicity(&table, &seeds);
    assert!(verdict.passed, "{}", verdict.detail);
}

#[test]
fn test_monotonicity_oracle_rejects_empty_seed_set() {
    let verdict = check_defect_monotonicity(&ClarityTable::standard(), &[]);
    assert!(!verdict.passed);
}

#[test]
fn test_bounds_oracle() {
    let table = ClarityTable::standard();
    let set = generate_inclusions(ClarityGrade::I3, 17.0, &table).unwrap();
    let verdict = check_inclusions_bounded(&set, 0.75, 0.12, 0.32);
    assert!(verdict.passed, "{}", verdict.detail);

    // Absurdly tight bounds trip the oracle.
    let verdict = check_inclusions_bounded(&set, 1e-6, 1e-6, 1e-6);
    assert!(!verdict.passed);
    assert!(verdict.detail.contains("escaped"));
}

#[test]
fn test_anchor_oracle_on_standard_and_sparse_tables() {
    assert!(check_anchor_exactness(&ColorTable::standard()).passed);

    // A sparse clarity table still answers determinism checks through the
    // nearest-grade fallback.
    let table = sparse_clarity_table(&[ClarityGrade::Vs2, ClarityGrade::Si2]);
    let verdict = check_generation_determinism(ClarityGrade::I1, 3.0, &table);
    assert!(verdict.passed, "{}", verdict.detail);
}
