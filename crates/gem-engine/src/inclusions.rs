//! Deterministic inclusion generation.
//!
//! The clarity module's whole pedagogy hangs on two properties: the same
//! `(grade, seed)` pair always produces the same flaw pattern, and worse
//! grades show more visible defect area. Both are tested, the first
//! exactly and the second statistically over seed samples.

use tracing::{debug, info, instrument};

use gem_types::{
    ClarityGrade, ClarityProfile, ClarityTable, EulerRot, Inclusion, InclusionKind, Point3d,
    TableError,
};

use crate::errors::GemError;
use crate::rand::{seeded_unit, sub_seed};

use std::f64::consts::PI;

// Placement ellipsoid, girdle-radius units. Keeps inclusions inside the
// nominal stone: tighter toward the thin crown, deeper into the pavilion.
const RADIAL_EXTENT: f64 = 0.75;
const CROWN_EXTENT: f64 = 0.12;
const PAVILION_EXTENT: f64 = 0.32;

/// Radius multiplier for center-biased inclusions.
const CENTER_SHRINK: f64 = 0.35;

// Fixed draw indices per inclusion. Adding a draw must append, never
// reorder, or every existing seed changes appearance.
const DRAW_CARBON: u32 = 0;
const DRAW_CENTER: u32 = 1;
const DRAW_RADIUS: u32 = 2;
const DRAW_THETA: u32 = 3;
const DRAW_PHI: u32 = 4;
const DRAW_KIND: u32 = 5;
const DRAW_SIZE: u32 = 6;
const DRAW_ROT_X: u32 = 7;
const DRAW_ROT_Y: u32 = 8;
const DRAW_ROT_Z: u32 = 9;
const DRAW_OPACITY: u32 = 10;

/// Generate the inclusion set for a clarity grade and seed.
///
/// Looks up the grade's profile in the table; a sparse table falls back to
/// the nearest defined grade by ordinal distance (ties toward the more
/// included grade), never silently to zero inclusions. FL/IF profiles have
/// `count == 0` and yield an empty list for every seed.
#[instrument(skip(table))]
pub fn generate_inclusions(
    grade: ClarityGrade,
    seed: f64,
    table: &ClarityTable,
) -> Result<Vec<Inclusion>, GemError> {
    if !seed.is_finite() {
        return Err(GemError::InvalidNumericInput {
            param: "seed",
            value: seed,
        });
    }
    if table.is_empty() {
        return Err(TableError::Empty.into());
    }

    let profile = match table.profile_for(grade) {
        Some(p) => p,
        None => {
            let nearest = table
                .nearest_profile(grade)
                .ok_or(TableError::Empty)
                .map_err(GemError::from)?;
            debug!(
                requested = %grade,
                resolved = %nearest.grade,
                "grade missing from sparse table, using nearest profile"
            );
            nearest
        }
    };

    let inclusions: Vec<Inclusion> = (0..profile.count)
        .map(|i| generate_one(profile, sub_seed(seed, i)))
        .collect();

    info!(
        count = inclusions.len(),
        defect_area = defect_area(&inclusions),
        "generated inclusion set"
    );
    Ok(inclusions)
}

/// Build one inclusion from its sub-seed. Each field has a fixed draw
/// index, so fields never steal entropy from each other.
fn generate_one(profile: &ClarityProfile, seed: f64) -> Inclusion {
    let carbon = seeded_unit(seed, DRAW_CARBON) < profile.carbon_bias;
    let centered = seeded_unit(seed, DRAW_CENTER) < profile.center_bias;

    let radius_scale = if centered { CENTER_SHRINK } else { 1.0 };
    let radius = seeded_unit(seed, DRAW_RADIUS) * radius_scale;
    let theta = seeded_unit(seed, DRAW_THETA) * 2.0 * PI;
    let phi = seeded_unit(seed, DRAW_PHI) * PI;

    let vertical = radius * phi.cos();
    let vertical_extent = if vertical >= 0.0 {
        CROWN_EXTENT
    } else {
        PAVILION_EXTENT
    };
    let position = Point3d::new(
        radius * phi.sin() * theta.cos() * RADIAL_EXTENT,
        vertical * vertical_extent,
        radius * phi.sin() * theta.sin() * RADIAL_EXTENT,
    );

    let kind = if carbon {
        InclusionKind::Carbon
    } else {
        let pick = seeded_unit(seed, DRAW_KIND) * InclusionKind::LIGHT_KINDS.len() as f64;
        InclusionKind::LIGHT_KINDS[(pick as usize).min(InclusionKind::LIGHT_KINDS.len() - 1)]
    };

    let size = profile.max_size * (0.4 + 0.6 * seeded_unit(seed, DRAW_SIZE));
    let rotation = EulerRot::new(
        seeded_unit(seed, DRAW_ROT_X) * 2.0 * PI,
        seeded_unit(seed, DRAW_ROT_Y) * 2.0 * PI,
        seeded_unit(seed, DRAW_ROT_Z) * 2.0 * PI,
    );
    let opacity = profile.visibility * (0.6 + 0.4 * seeded_unit(seed, DRAW_OPACITY));

    Inclusion {
        kind,
        position,
        size,
        rotation,
        opacity,
        carbon,
    }
}

/// Aggregate visible defect area: the sum of `size * opacity` over the set.
/// This is the metric that must grow as clarity worsens.
pub fn defect_area(inclusions: &[Inclusion]) -> f64 {
    inclusions.iter().map(|inc| inc.size * inc.opacity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flawless_grades_yield_empty_set() {
        let table = ClarityTable::standard();
        for seed in [0.0, 7.0, 42.0, -3.25, 9999.0] {
            assert!(generate_inclusions(ClarityGrade::Fl, seed, &table)
                .unwrap()
                .is_empty());
            assert!(generate_inclusions(ClarityGrade::If, seed, &table)
                .unwrap()
                .is_empty());
        }
    }

    #[test]
    fn test_vs1_produces_three_inclusions() {
        let table = ClarityTable::standard();
        let set = generate_inclusions(ClarityGrade::Vs1, 42.0, &table).unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let table = ClarityTable::standard();
        let a = generate_inclusions(ClarityGrade::Si2, 123.5, &table).unwrap();
        let b = generate_inclusions(ClarityGrade::Si2, 123.5, &table).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let table = ClarityTable::standard();
        let a = generate_inclusions(ClarityGrade::Si2, 1.0, &table).unwrap();
        let b = generate_inclusions(ClarityGrade::Si2, 2.0, &table).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_fields_respect_profile_bounds() {
        let table = ClarityTable::standard();
        let profile = *table.profile_for(ClarityGrade::I2).unwrap();
        for seed in 0..50 {
            let set = generate_inclusions(ClarityGrade::I2, seed as f64, &table).unwrap();
            assert_eq!(set.len(), profile.count as usize);
            for inc in &set {
                assert!(inc.size >= 0.4 * profile.max_size - 1e-12);
                assert!(inc.size <= profile.max_size + 1e-12);
                assert!(inc.opacity >= 0.6 * profile.visibility - 1e-12);
                assert!(inc.opacity <= profile.visibility + 1e-12);
                assert_eq!(inc.carbon, inc.kind == InclusionKind::Carbon);
            }
        }
    }

    #[test]
    fn test_positions_stay_inside_placement_envelope() {
        let table = ClarityTable::standard();
        for seed in 0..50 {
            let set = generate_inclusions(ClarityGrade::I3, seed as f64, &table).unwrap();
            for inc in &set {
                let lateral = (inc.position.x * inc.position.x
                    + inc.position.z * inc.position.z)
                    .sqrt();
                assert!(lateral <= RADIAL_EXTENT + 1e-12);
                assert!(inc.position.y <= CROWN_EXTENT + 1e-12);
                assert!(inc.position.y >= -PAVILION_EXTENT - 1e-12);
            }
        }
    }

    #[test]
    fn test_nan_seed_rejected() {
        let table = ClarityTable::standard();
        match generate_inclusions(ClarityGrade::Vs1, f64::NAN, &table) {
            Err(GemError::InvalidNumericInput { param, .. }) => assert_eq!(param, "seed"),
            other => panic!("expected InvalidNumericInput, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_table_rejected() {
        let table = ClarityTable { profiles: vec![] };
        assert_eq!(
            generate_inclusions(ClarityGrade::Vs1, 1.0, &table),
            Err(GemError::Table(TableError::Empty))
        );
    }

    #[test]
    fn test_sparse_table_fails_closed_to_nearest_grade() {
        let standard = ClarityTable::standard();
        let table = ClarityTable {
            profiles: vec![
                *standard.profile_for(ClarityGrade::Vs2).unwrap(),
                *standard.profile_for(ClarityGrade::I2).unwrap(),
            ],
        };
        // SI1 is absent; nearest is VS2 (distance 1 vs 2).
        let set = generate_inclusions(ClarityGrade::Si1, 5.0, &table).unwrap();
        assert_eq!(set.len(), 4, "fell back to the VS2 profile");
        // I3 is absent; clamps to I2, never to an empty set.
        let set = generate_inclusions(ClarityGrade::I3, 5.0, &table).unwrap();
        assert_eq!(set.len(), 16);
    }

    #[test]
    fn test_defect_area_sums_size_times_opacity() {
        let table = ClarityTable::standard();
        let set = generate_inclusions(ClarityGrade::Si1, 9.0, &table).unwrap();
        let expected: f64 = set.iter().map(|i| i.size * i.opacity).sum();
        assert_eq!(defect_area(&set), expected);
        assert!(expected > 0.0);
        assert_eq!(defect_area(&[]), 0.0);
    }

    #[test]
    fn test_defect_area_grows_with_worse_grades_on_average() {
        let table = ClarityTable::standard();
        let seeds: Vec<f64> = (0..48).map(|s| s as f64 * 11.0 + 0.5).collect();

        let mean_area = |grade: ClarityGrade| -> f64 {
            seeds
                .iter()
                .map(|&s| defect_area(&generate_inclusions(grade, s, &table).unwrap()))
                .sum::<f64>()
                / seeds.len() as f64
        };

        let mut prev = 0.0;
        for grade in ClarityGrade::ALL {
            let area = mean_area(grade);
            assert!(
                area + 1e-12 >= prev,
                "mean defect area regressed at {}: {} < {}",
                grade,
                area,
                prev
            );
            prev = area;
        }
    }
}
