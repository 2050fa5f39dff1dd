use serde::{Deserialize, Serialize};

use crate::geom::Rgb;

/// Resolved bodycolor tint: the output of color-grade interpolation and an
/// input to material derivation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tint {
    /// Hue in degrees.
    pub hue: f64,
    /// Saturation in [0, 1].
    pub saturation: f64,
    /// Lightness in [0, 1].
    pub lightness: f64,
    /// Warmth in [0, 1].
    pub warmth: f64,
}

impl Tint {
    pub fn new(hue: f64, saturation: f64, lightness: f64, warmth: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            warmth,
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_hsl(self.hue, self.saturation, self.lightness)
    }

    pub fn is_finite(&self) -> bool {
        self.hue.is_finite()
            && self.saturation.is_finite()
            && self.lightness.is_finite()
            && self.warmth.is_finite()
    }
}

/// How the stone is being shown in the education modules.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(tag = "type")]
pub enum DisplayMode {
    /// Eye-distance viewing.
    Normal,
    /// Loupe view; inclusions are emphasized and transmission drops.
    Magnified,
    /// Long-wave UV lamp; fluorescence glows.
    UvLit,
}

/// Final optical parameters handed to the scene adapter. Derived on demand,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialParams {
    pub color_tint: Rgb,
    /// Light transmission in [0, 1]; lower for warmer stones and loupe view.
    pub transmission: f64,
    /// Surface roughness in [0, 1].
    pub roughness: f64,
    /// Internal haze from inclusions, in [0, 1].
    pub clarity_haze: f64,
    /// Fluorescence glow color; black outside UV mode.
    pub emissive_tint: Rgb,
    /// Fluorescence glow strength; zero outside UV mode.
    pub emissive_intensity: f64,
}

/// Per-kind optical parameters for rendering a single inclusion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InclusionMaterial {
    pub base_color: Rgb,
    pub roughness: f64,
    /// Multiplier applied to the inclusion's generated opacity.
    pub opacity_scale: f64,
}
