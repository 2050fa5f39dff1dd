//! Grade tables: explicit, immutable configuration for the generators.
//!
//! The standard tables ship as `Default` impls; callers may supply their own
//! (e.g. deserialized from JSON) as long as `validate()` passes. The engine
//! never reads hidden globals.

use serde::{Deserialize, Serialize};

use crate::grades::{ClarityGrade, ColorGrade};

/// Table consistency violations, reported by `validate()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("grade table is empty")]
    Empty,

    #[error("anchors are not in ascending grade order (position {position})")]
    UnsortedAnchors { position: usize },

    #[error("duplicate anchor for grade {grade}")]
    DuplicateAnchor { grade: String },

    #[error("{field} decreases at grade {grade}; clarity fields must be non-decreasing toward I3")]
    NonMonotonic {
        field: &'static str,
        grade: String,
    },

    #[error("{field} out of range at grade {grade}")]
    OutOfRange {
        field: &'static str,
        grade: String,
    },
}

/// Tint anchor for one color grade: absolute HSL plus a warmth scalar in
/// [0, 1] that downstream material derivation uses to damp transmission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorAnchor {
    pub grade: ColorGrade,
    /// Hue in degrees.
    pub hue: f64,
    /// Saturation in [0, 1].
    pub saturation: f64,
    /// Lightness in [0, 1].
    pub lightness: f64,
    /// Warmth in [0, 1]; 0 at D, 1 at Z.
    pub warmth: f64,
}

/// Ordered color anchors. Interpolation is defined between adjacent anchors
/// only; positions outside the table clamp to the nearest end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTable {
    pub anchors: Vec<ColorAnchor>,
}

impl ColorTable {
    /// The standard D..Z table. The hue stays on the yellow axis; warmth and
    /// saturation ramp up toward Z while lightness falls off slightly.
    pub fn standard() -> Self {
        let last = (ColorGrade::ALL.len() - 1) as f64;
        let anchors = ColorGrade::ALL
            .iter()
            .map(|&grade| {
                let t = grade.ordinal() as f64 / last;
                ColorAnchor {
                    grade,
                    hue: 54.0,
                    saturation: 0.55 * t,
                    lightness: 0.97 - 0.22 * t,
                    warmth: t,
                }
            })
            .collect();
        Self { anchors }
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Check internal consistency: non-empty, strictly ascending grades,
    /// channels in range.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.anchors.is_empty() {
            return Err(TableError::Empty);
        }
        for (i, pair) in self.anchors.windows(2).enumerate() {
            if pair[1].grade <= pair[0].grade {
                if pair[1].grade == pair[0].grade {
                    return Err(TableError::DuplicateAnchor {
                        grade: pair[1].grade.to_string(),
                    });
                }
                return Err(TableError::UnsortedAnchors { position: i + 1 });
            }
        }
        for anchor in &self.anchors {
            for (field, value) in [
                ("saturation", anchor.saturation),
                ("lightness", anchor.lightness),
                ("warmth", anchor.warmth),
            ] {
                if !(0.0..=1.0).contains(&value) {
                    return Err(TableError::OutOfRange {
                        field,
                        grade: anchor.grade.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Inclusion-generation parameters for one clarity grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClarityProfile {
    pub grade: ClarityGrade,
    /// How many inclusions to generate.
    pub count: u32,
    /// Upper bound on inclusion size (girdle-radius units).
    pub max_size: f64,
    /// Base opacity scalar in [0, 1].
    pub visibility: f64,
    /// Probability that an inclusion is pulled toward the stone center.
    pub center_bias: f64,
    /// Probability that an inclusion is a dark carbon spot.
    pub carbon_bias: f64,
}

/// Ordered clarity profiles, FL first. `count`, `max_size`, and `visibility`
/// must be non-decreasing toward I3; that monotonicity is what makes the
/// clarity module read correctly on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarityTable {
    pub profiles: Vec<ClarityProfile>,
}

impl ClarityTable {
    /// The standard FL..I3 table.
    pub fn standard() -> Self {
        let rows: [(ClarityGrade, u32, f64, f64, f64, f64); 11] = [
            (ClarityGrade::Fl, 0, 0.0, 0.0, 0.0, 0.0),
            (ClarityGrade::If, 0, 0.0, 0.0, 0.0, 0.0),
            (ClarityGrade::Vvs1, 1, 0.020, 0.15, 0.10, 0.05),
            (ClarityGrade::Vvs2, 2, 0.025, 0.20, 0.15, 0.08),
            (ClarityGrade::Vs1, 3, 0.035, 0.30, 0.20, 0.10),
            (ClarityGrade::Vs2, 4, 0.045, 0.40, 0.25, 0.12),
            (ClarityGrade::Si1, 6, 0.060, 0.55, 0.35, 0.20),
            (ClarityGrade::Si2, 8, 0.080, 0.70, 0.40, 0.25),
            (ClarityGrade::I1, 12, 0.110, 0.85, 0.50, 0.35),
            (ClarityGrade::I2, 16, 0.150, 0.95, 0.55, 0.45),
            (ClarityGrade::I3, 22, 0.200, 1.00, 0.60, 0.55),
        ];
        let profiles = rows
            .iter()
            .map(
                |&(grade, count, max_size, visibility, center_bias, carbon_bias)| {
                    ClarityProfile {
                        grade,
                        count,
                        max_size,
                        visibility,
                        center_bias,
                        carbon_bias,
                    }
                },
            )
            .collect();
        Self { profiles }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Exact lookup; `None` when the table is sparse and lacks the grade.
    pub fn profile_for(&self, grade: ClarityGrade) -> Option<&ClarityProfile> {
        self.profiles.iter().find(|p| p.grade == grade)
    }

    /// Nearest profile by ordinal distance, ties toward the more included
    /// grade. Fails closed: a sparse table never silently drops an included
    /// grade to zero inclusions.
    pub fn nearest_profile(&self, grade: ClarityGrade) -> Option<&ClarityProfile> {
        let target = grade.ordinal() as i64;
        self.profiles.iter().min_by_key(|p| {
            let d = (p.grade.ordinal() as i64 - target).abs();
            // Tie-break key: prefer larger ordinal (more included).
            (d, std::cmp::Reverse(p.grade.ordinal()))
        })
    }

    /// Check internal consistency: non-empty, strictly ascending grades,
    /// probabilities in range, monotone count/max_size/visibility.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.profiles.is_empty() {
            return Err(TableError::Empty);
        }
        for (i, pair) in self.profiles.windows(2).enumerate() {
            let (a, b) = (&pair[0], &pair[1]);
            if b.grade <= a.grade {
                if b.grade == a.grade {
                    return Err(TableError::DuplicateAnchor {
                        grade: b.grade.to_string(),
                    });
                }
                return Err(TableError::UnsortedAnchors { position: i + 1 });
            }
            if b.count < a.count {
                return Err(TableError::NonMonotonic {
                    field: "count",
                    grade: b.grade.to_string(),
                });
            }
            if b.max_size < a.max_size {
                return Err(TableError::NonMonotonic {
                    field: "max_size",
                    grade: b.grade.to_string(),
                });
            }
            if b.visibility < a.visibility {
                return Err(TableError::NonMonotonic {
                    field: "visibility",
                    grade: b.grade.to_string(),
                });
            }
        }
        for p in &self.profiles {
            for (field, value) in [
                ("visibility", p.visibility),
                ("center_bias", p.center_bias),
                ("carbon_bias", p.carbon_bias),
            ] {
                if !(0.0..=1.0).contains(&value) {
                    return Err(TableError::OutOfRange {
                        field,
                        grade: p.grade.to_string(),
                    });
                }
            }
            if !p.max_size.is_finite() || p.max_size < 0.0 {
                return Err(TableError::OutOfRange {
                    field: "max_size",
                    grade: p.grade.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for ClarityTable {
    fn default() -> Self {
        Self::standard()
    }
}
