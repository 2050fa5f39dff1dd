//! Optical material derivation.
//!
//! Pure combination functions: a resolved tint, a clarity visibility
//! scalar, and a display mode in; final shader-facing parameters out.
//! Every output field is a deterministic function of the declared inputs.

use gem_types::{DisplayMode, InclusionKind, InclusionMaterial, MaterialParams, Rgb, Tint};

use crate::errors::GemError;

/// Transmission of a colorless stone under normal viewing.
const BASE_TRANSMISSION: f64 = 0.96;

/// Warm bodycolor absorbs; the warmest grade loses this much transmission.
const WARMTH_ABSORPTION: f64 = 0.18;

/// Loupe view flattens transmission to keep inclusions legible.
const MAGNIFIED_TRANSMISSION_LOSS: f64 = 0.08;
const UV_TRANSMISSION_LOSS: f64 = 0.04;

const BASE_ROUGHNESS: f64 = 0.02;
const VISIBILITY_ROUGHNESS: f64 = 0.03;

const HAZE_FACTOR: f64 = 0.35;
const MAGNIFIED_HAZE_FACTOR: f64 = 0.5;

/// Long-wave UV fluorescence glows blue.
const FLUORESCENCE_TINT: Rgb = Rgb {
    r: 0.35,
    g: 0.45,
    b: 1.0,
};
const FLUORESCENCE_GAIN: f64 = 0.85;

/// Derive the stone's material parameters.
///
/// `fluorescence` is the stone's fluorescence intensity in [0, 1]; `None`
/// means non-fluorescent. Emission is non-zero only in [`DisplayMode::UvLit`].
pub fn derive_material_params(
    tint: &Tint,
    visibility: f64,
    mode: DisplayMode,
    fluorescence: Option<f64>,
) -> Result<MaterialParams, GemError> {
    if !tint.is_finite() {
        return Err(GemError::InvalidNumericInput {
            param: "tint",
            value: tint.hue,
        });
    }
    if !visibility.is_finite() {
        return Err(GemError::InvalidNumericInput {
            param: "visibility",
            value: visibility,
        });
    }
    let fluorescence = fluorescence.unwrap_or(0.0);
    if !fluorescence.is_finite() {
        return Err(GemError::InvalidNumericInput {
            param: "fluorescence",
            value: fluorescence,
        });
    }

    let visibility = visibility.clamp(0.0, 1.0);
    let mode_loss = match mode {
        DisplayMode::Normal => 0.0,
        DisplayMode::Magnified => MAGNIFIED_TRANSMISSION_LOSS,
        DisplayMode::UvLit => UV_TRANSMISSION_LOSS,
    };
    let transmission =
        (BASE_TRANSMISSION - WARMTH_ABSORPTION * tint.warmth.clamp(0.0, 1.0) - mode_loss)
            .clamp(0.0, 1.0);

    let haze_factor = if mode == DisplayMode::Magnified {
        MAGNIFIED_HAZE_FACTOR
    } else {
        HAZE_FACTOR
    };

    let (emissive_tint, emissive_intensity) = if mode == DisplayMode::UvLit {
        (FLUORESCENCE_TINT, FLUORESCENCE_GAIN * fluorescence.clamp(0.0, 1.0))
    } else {
        (Rgb::BLACK, 0.0)
    };

    Ok(MaterialParams {
        color_tint: tint.to_rgb(),
        transmission,
        roughness: BASE_ROUGHNESS + VISIBILITY_ROUGHNESS * visibility,
        clarity_haze: visibility * haze_factor,
        emissive_tint,
        emissive_intensity,
    })
}

/// Derive render parameters for a single inclusion kind.
///
/// Diffuse kinds (cloud, feather) scatter light and render rough; sharp
/// crystalline kinds stay glossy. Carbon spots are near-black. The loupe
/// view boosts opacity so small flaws stay legible.
pub fn derive_inclusion_material(
    kind: InclusionKind,
    visibility: f64,
    mode: DisplayMode,
) -> Result<InclusionMaterial, GemError> {
    if !visibility.is_finite() {
        return Err(GemError::InvalidNumericInput {
            param: "visibility",
            value: visibility,
        });
    }
    let visibility = visibility.clamp(0.0, 1.0);

    let (base_color, roughness) = match kind {
        InclusionKind::Carbon => (Rgb::new(0.05, 0.05, 0.06), 0.6),
        InclusionKind::Cloud => (Rgb::new(0.92, 0.92, 0.94), 0.85),
        InclusionKind::Feather => (Rgb::new(0.88, 0.9, 0.93), 0.75),
        InclusionKind::Needle => (Rgb::new(0.8, 0.82, 0.85), 0.4),
        InclusionKind::Pinpoint => (Rgb::new(0.75, 0.78, 0.82), 0.25),
        InclusionKind::Crystal => (Rgb::new(0.82, 0.85, 0.9), 0.15),
    };

    let opacity_scale = match mode {
        DisplayMode::Magnified => 0.6 + 0.4 * visibility + 0.35,
        _ => 0.6 + 0.4 * visibility,
    };

    Ok(InclusionMaterial {
        base_color,
        roughness,
        opacity_scale,
    })
}
