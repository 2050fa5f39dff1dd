use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Parse failure for a grade key not on the scale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown grade key: {key}")]
pub struct UnknownGradeError {
    pub key: String,
}

/// Bodycolor grade on the GIA D..Z scale. D is colorless, Z is the most
/// yellow-tinted grade before fancy color territory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ColorGrade {
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl ColorGrade {
    pub const ALL: [ColorGrade; 23] = [
        ColorGrade::D,
        ColorGrade::E,
        ColorGrade::F,
        ColorGrade::G,
        ColorGrade::H,
        ColorGrade::I,
        ColorGrade::J,
        ColorGrade::K,
        ColorGrade::L,
        ColorGrade::M,
        ColorGrade::N,
        ColorGrade::O,
        ColorGrade::P,
        ColorGrade::Q,
        ColorGrade::R,
        ColorGrade::S,
        ColorGrade::T,
        ColorGrade::U,
        ColorGrade::V,
        ColorGrade::W,
        ColorGrade::X,
        ColorGrade::Y,
        ColorGrade::Z,
    ];

    /// Zero-based position on the scale: D = 0 .. Z = 22.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }
}

impl fmt::Display for ColorGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for ColorGrade {
    type Err = UnknownGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .find(|g| g.to_string() == key)
            .copied()
            .ok_or(UnknownGradeError { key })
    }
}

/// Clarity grade on the GIA FL..I3 scale. FL/IF stones carry no visible
/// inclusions; I3 is the most heavily included grade.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ClarityGrade {
    /// Flawless.
    Fl,
    /// Internally flawless.
    If,
    Vvs1,
    Vvs2,
    Vs1,
    Vs2,
    Si1,
    Si2,
    I1,
    I2,
    I3,
}

impl ClarityGrade {
    pub const ALL: [ClarityGrade; 11] = [
        ClarityGrade::Fl,
        ClarityGrade::If,
        ClarityGrade::Vvs1,
        ClarityGrade::Vvs2,
        ClarityGrade::Vs1,
        ClarityGrade::Vs2,
        ClarityGrade::Si1,
        ClarityGrade::Si2,
        ClarityGrade::I1,
        ClarityGrade::I2,
        ClarityGrade::I3,
    ];

    /// Zero-based position on the scale: FL = 0 .. I3 = 10. Larger ordinal
    /// means more included.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    /// The trade label for the grade (e.g. "VVS1").
    pub fn label(&self) -> &'static str {
        match self {
            ClarityGrade::Fl => "FL",
            ClarityGrade::If => "IF",
            ClarityGrade::Vvs1 => "VVS1",
            ClarityGrade::Vvs2 => "VVS2",
            ClarityGrade::Vs1 => "VS1",
            ClarityGrade::Vs2 => "VS2",
            ClarityGrade::Si1 => "SI1",
            ClarityGrade::Si2 => "SI2",
            ClarityGrade::I1 => "I1",
            ClarityGrade::I2 => "I2",
            ClarityGrade::I3 => "I3",
        }
    }
}

impl fmt::Display for ClarityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ClarityGrade {
    type Err = UnknownGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .find(|g| g.label() == key)
            .copied()
            .ok_or(UnknownGradeError { key })
    }
}
