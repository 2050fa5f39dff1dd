//! End-to-end scenarios mirroring the diamond-education modules: each one
//! drives the engine exactly the way its UI panel does and verifies every
//! step with oracles and rich assertions.

use test_harness::assertions::*;
use test_harness::helpers::*;
use test_harness::oracle::*;

use gem_engine::{
    defect_area, derive_inclusion_material, derive_material_params, generate_inclusions,
    interpolate_color_grade, PreviewEngine,
};
use gem_types::{ClarityGrade, ClarityTable, ColorTable, DisplayMode, ProportionSpec};

// ── Scenario 1: Cut module ──────────────────────────────────────────────
// The cut slider morphs between proportion presets; every intermediate
// stone must stay a closed, outward-wound 58-vertex brilliant.

#[test]
fn test_cut_module_proportion_sweep() {
    let presets = [reference_spec(), shallow_spec(), deep_spec()];
    for (a, b) in [(0, 1), (0, 2), (1, 2)] {
        for step in 0..=8 {
            let t = step as f64 / 8.0;
            let (pa, pb) = (&presets[a], &presets[b]);
            let spec = ProportionSpec::new(
                pa.table_ratio + t * (pb.table_ratio - pa.table_ratio),
                pa.crown_height + t * (pb.crown_height - pa.crown_height),
                pa.girdle_radius + t * (pb.girdle_radius - pa.girdle_radius),
                pa.pavilion_depth + t * (pb.pavilion_depth - pa.pavilion_depth),
                pa.culet_size + t * (pb.culet_size - pa.culet_size),
            );
            let mesh = gem_engine::build_brilliant(&spec).unwrap();
            assert_mesh_counts(&mesh, 58, 112, "cut sweep").unwrap();
            require_verdict(check_watertight(&mesh)).unwrap();
            require_verdict(check_outward_winding(&mesh)).unwrap();
            assert!(signed_volume(&mesh) > 0.0, "stone has positive volume");
        }
    }
}

// ── Scenario 2: Color module ────────────────────────────────────────────
// Dragging D..Z shifts tint and transmission continuously; anchors are
// exact and warmth never regresses.

#[test]
fn test_color_module_slider_sweep() {
    let table = ColorTable::standard();
    require_verdict(check_anchor_exactness(&table)).unwrap();

    let mut prev_warmth = -1.0;
    let mut prev_transmission = 2.0;
    for step in 0..=44 {
        let position = step as f64 * 0.5;
        let tint = interpolate_color_grade(position, &table).unwrap();
        assert!(tint.warmth >= prev_warmth, "warmth regressed at {}", position);
        prev_warmth = tint.warmth;

        let mat = derive_material_params(&tint, 0.0, DisplayMode::Normal, None).unwrap();
        assert!(
            mat.transmission <= prev_transmission + 1e-12,
            "transmission rose at {}",
            position
        );
        prev_transmission = mat.transmission;
    }
}

// ── Scenario 3: Clarity module ──────────────────────────────────────────
// The loupe toggle regenerates nothing: the same seed keeps the same flaw
// pattern while the material emphasizes it.

#[test]
fn test_clarity_module_loupe_toggle() {
    let mut engine = PreviewEngine::with_standard_tables();
    let seed = 2024.0;

    let eye = engine.inclusions(ClarityGrade::Si1, seed).unwrap();
    let loupe = engine.inclusions(ClarityGrade::Si1, seed).unwrap();
    assert_inclusions_identical(&eye, &loupe, "loupe toggle").unwrap();
    assert_inclusion_count(&eye, 6, "SI1 count").unwrap();

    let visibility = engine
        .clarity_table()
        .profile_for(ClarityGrade::Si1)
        .unwrap()
        .visibility;
    let tint = engine.tint(2.0).unwrap();
    let normal = engine
        .material(&tint, visibility, DisplayMode::Normal, None)
        .unwrap();
    let magnified = engine
        .material(&tint, visibility, DisplayMode::Magnified, None)
        .unwrap();
    assert!(magnified.clarity_haze > normal.clarity_haze);
    assert!(magnified.transmission < normal.transmission);

    for inc in &eye {
        let normal_mat =
            derive_inclusion_material(inc.kind, visibility, DisplayMode::Normal).unwrap();
        let loupe_mat =
            derive_inclusion_material(inc.kind, visibility, DisplayMode::Magnified).unwrap();
        assert!(loupe_mat.opacity_scale > normal_mat.opacity_scale);
    }
}

#[test]
fn test_clarity_module_full_scale() {
    let table = ClarityTable::standard();
    let seeds: Vec<f64> = (0..40).map(|s| 7.0 + s as f64 * 13.0).collect();
    require_verdict(check_defect_monotonicity(&table, &seeds)).unwrap();

    for &seed in &seeds[..5] {
        for grade in ClarityGrade::ALL {
            let set = generate_inclusions(grade, seed, &table).unwrap();
            require_verdict(check_inclusions_bounded(&set, 0.75, 0.12, 0.32)).unwrap();
            require_verdict(check_generation_determinism(grade, seed, &table)).unwrap();
        }
    }
}

// ── Scenario 4: Fluorescence module ─────────────────────────────────────

#[test]
fn test_fluorescence_module_uv_lamp() {
    let table = ColorTable::standard();
    let tint = interpolate_color_grade(3.0, &table).unwrap();

    // Lamp off: no glow regardless of the stone's fluorescence.
    for intensity in [None, Some(0.0), Some(1.0)] {
        let mat = derive_material_params(&tint, 0.05, DisplayMode::Normal, intensity).unwrap();
        assert_near(mat.emissive_intensity, 0.0, 0.0, "lamp off").unwrap();
    }

    // Lamp on: glow scales with the stone's fluorescence intensity.
    let faint = derive_material_params(&tint, 0.05, DisplayMode::UvLit, Some(0.25)).unwrap();
    let strong = derive_material_params(&tint, 0.05, DisplayMode::UvLit, Some(1.0)).unwrap();
    assert!(strong.emissive_intensity > faint.emissive_intensity);
    assert!(faint.emissive_intensity > 0.0);
    assert_eq!(faint.emissive_tint, strong.emissive_tint);
}

// ── Scenario 5: Grading quiz ────────────────────────────────────────────
// The quiz shows a mystery stone generated from a hidden (grade, seed)
// pair; regenerating the answer key must reproduce the stone exactly.

#[test]
fn test_grading_quiz_reproducible_mystery_stones() {
    let table = ClarityTable::standard();
    let quiz: [(ClarityGrade, f64); 4] = [
        (ClarityGrade::Vvs2, 311.0),
        (ClarityGrade::Vs2, 1918.0),
        (ClarityGrade::Si2, 777.5),
        (ClarityGrade::I2, 5.25),
    ];

    for (grade, seed) in quiz {
        let shown = generate_inclusions(grade, seed, &table).unwrap();
        let answer_key = generate_inclusions(grade, seed, &table).unwrap();
        assert_inclusions_identical(&shown, &answer_key, "quiz stone").unwrap();

        // A quiz taker comparing two adjacent grades sees distinct stones.
        let same_seed_worse =
            generate_inclusions(ClarityGrade::from_ordinal(grade.ordinal() + 1).unwrap(), seed, &table)
                .unwrap();
        assert!(shown != same_seed_worse, "adjacent grades must differ");
    }
}

// ── Scenario 6: Bulk-edit catalog preview ───────────────────────────────
// Dozens of stones rendered in one grid, all through one memoized engine;
// repeated rows cost no recomputation.

#[test]
fn test_bulk_edit_preview_grid() {
    let mut engine = PreviewEngine::with_standard_tables();
    let rows: Vec<(f64, ClarityGrade, f64)> = vec![
        (0.0, ClarityGrade::If, 1.0),
        (2.0, ClarityGrade::Vvs1, 2.0),
        (4.5, ClarityGrade::Vs1, 3.0),
        (7.0, ClarityGrade::Si1, 4.0),
        (9.5, ClarityGrade::I1, 5.0),
        // Duplicate SKUs repeat earlier parameters.
        (4.5, ClarityGrade::Vs1, 3.0),
        (0.0, ClarityGrade::If, 1.0),
    ];

    let spec = reference_spec();
    for &(position, grade, seed) in &rows {
        let mesh = engine.mesh(&spec).unwrap();
        assert_mesh_sound(&mesh, "bulk preview").unwrap();
        let tint = engine.tint(position).unwrap();
        let inclusions = engine.inclusions(grade, seed).unwrap();
        let visibility = engine
            .clarity_table()
            .profile_for(grade)
            .unwrap()
            .visibility;
        engine
            .material(&tint, visibility, DisplayMode::Normal, None)
            .unwrap();
        if grade == ClarityGrade::If {
            assert_inclusion_count(&inclusions, 0, "IF row").unwrap();
        } else {
            assert!(defect_area(&inclusions) > 0.0);
        }
    }

    // 7 rows x 4 lookups; the mesh repeats 6 times, the duplicate rows
    // repeat everything.
    assert!(engine.hits() >= 6, "hits: {}", engine.hits());
}

// ── Scenario 7: Tenant configuration ────────────────────────────────────
// A tenant ships a coarse five-grade table; every grade on the full scale
// still resolves to a deterministic, bounded inclusion set.

#[test]
fn test_tenant_sparse_table_covers_full_scale() {
    let table = sparse_clarity_table(&[
        ClarityGrade::Fl,
        ClarityGrade::Vvs1,
        ClarityGrade::Vs1,
        ClarityGrade::Si1,
        ClarityGrade::I1,
    ]);
    table.validate().unwrap();

    for grade in ClarityGrade::ALL {
        let a = generate_inclusions(grade, 88.0, &table).unwrap();
        let b = generate_inclusions(grade, 88.0, &table).unwrap();
        assert_inclusions_identical(&a, &b, "sparse table determinism").unwrap();
        require_verdict(check_inclusions_bounded(&a, 0.75, 0.12, 0.32)).unwrap();
    }

    // I3 resolves to the most included defined profile, never to empty.
    let worst = generate_inclusions(ClarityGrade::I3, 88.0, &table).unwrap();
    assert_inclusion_count(&worst, 12, "I3 falls back to I1").unwrap();

    // IF resolves toward FL/VVS1, and FL stays empty.
    let flawless = generate_inclusions(ClarityGrade::Fl, 88.0, &table).unwrap();
    assert_inclusion_count(&flawless, 0, "FL stays empty").unwrap();
}

// ── Scenario 8: Tenant JSON configuration ───────────────────────────────
// Custom tables arrive from the SaaS frontend as JSON; a valid payload
// drives the engine, an inconsistent one is rejected at construction.

#[test]
fn test_tenant_json_tables() {
    let json = r#"{
        "profiles": [
            { "grade": "If", "count": 0, "max_size": 0.0,
              "visibility": 0.0, "center_bias": 0.0, "carbon_bias": 0.0 },
            { "grade": "Si1", "count": 5, "max_size": 0.05,
              "visibility": 0.5, "center_bias": 0.3, "carbon_bias": 0.15 },
            { "grade": "I3", "count": 20, "max_size": 0.18,
              "visibility": 1.0, "center_bias": 0.6, "carbon_bias": 0.5 }
        ]
    }"#;
    let table: ClarityTable = serde_json::from_str(json).unwrap();
    let mut engine = PreviewEngine::new(ColorTable::standard(), table).unwrap();

    let set = engine.inclusions(ClarityGrade::Si1, 42.0).unwrap();
    assert_inclusion_count(&set, 5, "tenant SI1").unwrap();

    // A payload that breaks the pedagogical ordering never constructs.
    let bad = r#"{
        "profiles": [
            { "grade": "Si1", "count": 5, "max_size": 0.05,
              "visibility": 0.5, "center_bias": 0.3, "carbon_bias": 0.15 },
            { "grade": "I3", "count": 2, "max_size": 0.18,
              "visibility": 1.0, "center_bias": 0.6, "carbon_bias": 0.5 }
        ]
    }"#;
    let bad_table: ClarityTable = serde_json::from_str(bad).unwrap();
    assert!(PreviewEngine::new(ColorTable::standard(), bad_table).is_err());
}
