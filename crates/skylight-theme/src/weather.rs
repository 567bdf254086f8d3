//! Weather-domain palette derivation.
//!
//! The dashboard plots six weather dimensions side by side, so their colors
//! are derived from one base color with fixed hue rotations: a triadic spread
//! for temperature/humidity/wind, the complement for pressure, and analogous
//! neighbors for precipitation and cloud cover. Downstream consumers key off
//! these exact offsets, so they are part of the contract.

use indexmap::IndexMap;
use skylight_color::HslColor;

use crate::error::Result;

/// Hue rotation per weather dimension, relative to the base color.
const WEATHER_ROTATIONS: [(&str, f32); 6] = [
    ("temperature", 0.0),
    ("humidity", 120.0),
    ("wind", 240.0),
    ("pressure", 180.0),
    ("precipitation", 60.0),
    ("clouds", -60.0),
];

/// Derive the weather palette from a base (temperature) color.
///
/// The `"temperature"` entry is always the base color itself,
/// case-normalized to lowercase hex.
pub fn weather_palette(base: HslColor) -> IndexMap<String, String> {
    WEATHER_ROTATIONS
        .into_iter()
        .map(|(kind, degrees)| (kind.to_string(), base.rotate_hue(degrees).to_hex()))
        .collect()
}

/// Hex-string convenience for [`weather_palette`].
pub fn weather_palette_hex(base_hex: &str) -> Result<IndexMap<String, String>> {
    Ok(weather_palette(HslColor::from_hex(base_hex)?))
}

/// Build a mild-to-severe alert gradient from a base color.
///
/// Lightness interpolates from `base + 30` down to the base value while
/// saturation rises from the base value to `base + 20`; the first entry is
/// the mildest. The result has exactly `levels` entries (a single level
/// yields the mildest color, zero levels an empty vector).
pub fn alert_gradient(base: HslColor, levels: usize) -> Vec<String> {
    let span = levels.saturating_sub(1).max(1) as f32;

    (0..levels)
        .map(|i| {
            let factor = i as f32 / span;
            HslColor::new(
                base.hue,
                base.saturation + 20.0 * factor,
                base.lightness + 30.0 * (1.0 - factor),
            )
            .to_hex()
        })
        .collect()
}

/// Hex-string convenience for [`alert_gradient`].
pub fn alert_gradient_hex(base_hex: &str, levels: usize) -> Result<Vec<String>> {
    Ok(alert_gradient(HslColor::from_hex(base_hex)?, levels))
}
