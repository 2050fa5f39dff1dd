//! Color-grade interpolation.
//!
//! The continuous grade slider in the color module maps a position on the
//! anchor table to a tint. One implementation serves every module; the
//! anchors are caller-supplied configuration.

use gem_types::{ColorTable, Tint};

use crate::errors::GemError;

/// Interpolate a tint at a continuous position on the color-grade axis.
///
/// `position` indexes the anchor table: integer positions return the anchor
/// exactly (no float drift), fractional positions lerp channel-wise between
/// the two bracketing anchors. Positions outside the table clamp to the
/// first/last anchor; there is no extrapolation.
pub fn interpolate_color_grade(position: f64, table: &ColorTable) -> Result<Tint, GemError> {
    if !position.is_finite() {
        return Err(GemError::InvalidNumericInput {
            param: "position",
            value: position,
        });
    }
    let anchors = &table.anchors;
    if anchors.is_empty() {
        return Err(gem_types::TableError::Empty.into());
    }

    let last = anchors.len() - 1;
    if position <= 0.0 {
        return Ok(anchor_tint(table, 0));
    }
    if position >= last as f64 {
        return Ok(anchor_tint(table, last));
    }

    let lower = position.floor() as usize;
    let fraction = position - position.floor();
    if fraction == 0.0 {
        // Exactly on an anchor: return it verbatim.
        return Ok(anchor_tint(table, lower));
    }
    let a = &anchors[lower];
    let b = &anchors[lower + 1];

    let lerp = |x: f64, y: f64| x + fraction * (y - x);
    Ok(Tint {
        hue: lerp(a.hue, b.hue),
        saturation: lerp(a.saturation, b.saturation),
        lightness: lerp(a.lightness, b.lightness),
        warmth: lerp(a.warmth, b.warmth),
    })
}

fn anchor_tint(table: &ColorTable, index: usize) -> Tint {
    let a = &table.anchors[index];
    Tint {
        hue: a.hue,
        saturation: a.saturation,
        lightness: a.lightness,
        warmth: a.warmth,
    }
}
