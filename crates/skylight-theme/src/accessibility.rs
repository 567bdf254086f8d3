//! WCAG contrast metrics and color-vision simulation.

use indexmap::IndexMap;
use skylight_color::HslColor;

use crate::error::{Error, Result};
use crate::palette::ColorPalette;

/// WCAG AA minimum contrast ratio for normal text.
pub const WCAG_AA_CONTRAST: f64 = 4.5;

/// WCAG AAA minimum contrast ratio for normal text.
pub const WCAG_AAA_CONTRAST: f64 = 7.0;

/// Accessibility metrics for a single color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMetrics {
    /// Perceived brightness in `[0, 1]` (0.299 R + 0.587 G + 0.114 B).
    pub luminance: f64,
    /// The better of the contrast ratios against white and black.
    pub contrast_ratio: f64,
    /// Clears WCAG AA (>= 4.5) against at least one of white/black.
    pub wcag_aa_compliant: bool,
    /// Clears WCAG AAA (>= 7.0) against at least one of white/black.
    pub wcag_aaa_compliant: bool,
    /// Contrast against white is at least 4.5.
    pub readable_on_white: bool,
    /// Contrast against black is at least 4.5.
    pub readable_on_black: bool,
}

/// A color-vision deficiency to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBlindness {
    /// Red-blind.
    Protanopia,
    /// Green-blind.
    Deuteranopia,
    /// Blue-blind.
    Tritanopia,
    /// Complete color blindness (grayscale).
    Achromatopsia,
}

/// WCAG relative luminance of a color (sRGB gamma corrected).
pub fn relative_luminance(color: HslColor) -> f64 {
    let (r, g, b) = color.to_rgb8();
    let gamma = |channel: u8| {
        let c = channel as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * gamma(r) + 0.7152 * gamma(g) + 0.0722 * gamma(b)
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
pub fn contrast_ratio(a: HslColor, b: HslColor) -> f64 {
    let lum_a = relative_luminance(a);
    let lum_b = relative_luminance(b);
    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);
    (lighter + 0.05) / (darker + 0.05)
}

/// Hex-string convenience for [`contrast_ratio`].
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64> {
    Ok(contrast_ratio(
        HslColor::from_hex(a)?,
        HslColor::from_hex(b)?,
    ))
}

/// Compute accessibility metrics for a color.
pub fn color_metrics(color: HslColor) -> ColorMetrics {
    let (r, g, b) = color.to_rgb8();
    let luminance = (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0;

    let white = contrast_ratio(color, HslColor::WHITE);
    let black = contrast_ratio(color, HslColor::BLACK);

    ColorMetrics {
        luminance,
        contrast_ratio: white.max(black),
        wcag_aa_compliant: white >= WCAG_AA_CONTRAST || black >= WCAG_AA_CONTRAST,
        wcag_aaa_compliant: white >= WCAG_AAA_CONTRAST || black >= WCAG_AAA_CONTRAST,
        readable_on_white: white >= WCAG_AA_CONTRAST,
        readable_on_black: black >= WCAG_AA_CONTRAST,
    }
}

/// Simulate how a color appears under a color-vision deficiency.
///
/// The dichromatic cases use published linear RGB approximation matrices;
/// achromatopsia collapses to luminance-weighted gray. Output channels are
/// clamped to `[0, 255]`.
pub fn simulate_color_blindness(color: HslColor, blindness: ColorBlindness) -> String {
    let (r, g, b) = color.to_rgb8();
    let (r, g, b) = (r as f64, g as f64, b as f64);

    let (new_r, new_g, new_b) = match blindness {
        ColorBlindness::Protanopia => (
            0.567 * r + 0.433 * g,
            0.558 * r + 0.442 * g,
            0.242 * g + 0.758 * b,
        ),
        ColorBlindness::Deuteranopia => (
            0.625 * r + 0.375 * g,
            0.700 * r + 0.300 * g,
            0.300 * g + 0.700 * b,
        ),
        ColorBlindness::Tritanopia => (
            0.950 * r + 0.050 * g,
            0.433 * g + 0.567 * b,
            0.475 * g + 0.525 * b,
        ),
        ColorBlindness::Achromatopsia => {
            let gray = 0.299 * r + 0.587 * g + 0.114 * b;
            (gray, gray, gray)
        }
    };

    let clamp = |v: f64| v.clamp(0.0, 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", clamp(new_r), clamp(new_g), clamp(new_b))
}

impl ColorPalette {
    /// Accessibility metrics for a registered color, or `None` when the
    /// name/variant is absent.
    pub fn color_metrics(&self, name: &str, variant: &str) -> Option<ColorMetrics> {
        self.get_color_hsl(name, variant).map(color_metrics)
    }

    /// Search a fixed lightness ladder for a variant of `name` that clears
    /// WCAG AA contrast against `background_hex`.
    ///
    /// Light backgrounds walk a darkening ladder (40, 30, 20, 10), dark
    /// backgrounds a lightening one (60, 70, 80, 90); the first candidate at
    /// or above 4.5 wins. The result is empty when `name` is unregistered or
    /// no rung clears the threshold; this fails closed rather than guessing.
    pub fn suggest_accessible_variant(
        &self,
        name: &str,
        background_hex: &str,
    ) -> Result<IndexMap<String, String>> {
        let background = HslColor::from_hex(background_hex)
            .map_err(|source| Error::invalid_color("background", source))?;

        let mut suggestions = IndexMap::new();
        let Some(base) = self.base_color(name) else {
            return Ok(suggestions);
        };

        let (ladder, prefix): (&[f32], &str) = if background.lightness > 50.0 {
            (&[40.0, 30.0, 20.0, 10.0], "accessible_dark")
        } else {
            (&[60.0, 70.0, 80.0, 90.0], "accessible_light")
        };

        for &lightness in ladder {
            let candidate = HslColor::new(base.hue, base.saturation, lightness);
            if contrast_ratio(candidate, background) >= WCAG_AA_CONTRAST {
                suggestions.insert(format!("{prefix}_{lightness:.0}"), candidate.to_hex());
                break;
            }
        }

        Ok(suggestions)
    }

    /// Simulate a registered color under a color-vision deficiency.
    ///
    /// Returns `None` when the name/variant is absent.
    pub fn simulate_color_blindness(
        &self,
        name: &str,
        blindness: ColorBlindness,
        variant: &str,
    ) -> Option<String> {
        self.get_color_hsl(name, variant)
            .map(|color| simulate_color_blindness(color, blindness))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrast_extremes() {
        assert_eq!(contrast_ratio(HslColor::BLACK, HslColor::WHITE), 21.0);
        assert_eq!(contrast_ratio(HslColor::WHITE, HslColor::BLACK), 21.0);
    }

    #[test]
    fn test_contrast_with_self_is_one() {
        for hex in ["#c43939", "#2563eb", "#ffffff", "#000000", "#777777"] {
            let color = HslColor::from_hex(hex).unwrap();
            assert_eq!(contrast_ratio(color, color), 1.0);
        }
    }

    #[test]
    fn test_contrast_hex_form() {
        assert_eq!(contrast_ratio_hex("#000000", "#ffffff").unwrap(), 21.0);
        assert!(contrast_ratio_hex("#000000", "bogus").is_err());
    }

    #[test]
    fn test_relative_luminance_bounds() {
        assert_eq!(relative_luminance(HslColor::BLACK), 0.0);
        assert_eq!(relative_luminance(HslColor::WHITE), 1.0);
    }

    #[test]
    fn test_known_contrast_value() {
        // #2563eb vs white is ~5.17 per the WCAG formula
        let ratio = contrast_ratio_hex("#2563eb", "#ffffff").unwrap();
        assert!((ratio - 5.17).abs() < 0.01, "got {ratio}");
    }

    #[test]
    fn test_color_metrics_flags() {
        let blue = HslColor::from_hex("#2563eb").unwrap();
        let metrics = color_metrics(blue);

        assert!(metrics.readable_on_white);
        assert!(!metrics.readable_on_black);
        assert!(metrics.wcag_aa_compliant);
        assert!(!metrics.wcag_aaa_compliant);
        assert!((metrics.contrast_ratio - 5.17).abs() < 0.01);
        assert!(metrics.luminance > 0.0 && metrics.luminance < 1.0);

        let white = color_metrics(HslColor::WHITE);
        assert_eq!(white.luminance, 1.0);
        assert_eq!(white.contrast_ratio, 21.0);
        assert!(white.wcag_aaa_compliant);
    }

    #[test]
    fn test_palette_metrics_lookup() {
        let mut palette = ColorPalette::new();
        palette.set_base_hex("primary", "#2563eb").unwrap();

        assert!(palette.color_metrics("primary", "base").is_some());
        assert!(palette.color_metrics("primary", "hover").is_some());
        assert_eq!(palette.color_metrics("nope", "base"), None);
    }

    #[test]
    fn test_achromatopsia_is_gray() {
        for hex in ["#c43939", "#2563eb", "#10b981"] {
            let color = HslColor::from_hex(hex).unwrap();
            let simulated = simulate_color_blindness(color, ColorBlindness::Achromatopsia);
            let (r, g, b) = HslColor::from_hex(&simulated).unwrap().to_rgb8();
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn test_protanopia_flattens_red() {
        let red = HslColor::from_hex("#ff0000").unwrap();
        let simulated = simulate_color_blindness(red, ColorBlindness::Protanopia);
        // 0.567 * 255 = 144.585 -> truncated to 144; 0.558 * 255 = 142.29
        assert_eq!(simulated, "#908e00");
    }

    #[test]
    fn test_palette_blindness_lookup() {
        let mut palette = ColorPalette::new();
        palette.set_base_hex("primary", "#c43939").unwrap();

        let simulated = palette
            .simulate_color_blindness("primary", ColorBlindness::Achromatopsia, "base")
            .unwrap();
        let (r, g, b) = HslColor::from_hex(&simulated).unwrap().to_rgb8();
        assert_eq!((r, g), (g, b));

        assert_eq!(
            palette.simulate_color_blindness("nope", ColorBlindness::Protanopia, "base"),
            None
        );
    }

    #[test]
    fn test_accessible_variant_on_light_background() {
        let mut palette = ColorPalette::new();
        palette.set_base_hex("primary", "#2563eb").unwrap();

        let suggestions = palette
            .suggest_accessible_variant("primary", "#ffffff")
            .unwrap();
        assert_eq!(suggestions.len(), 1);

        let (key, hex) = suggestions.first().unwrap();
        assert!(key.starts_with("accessible_dark_"));
        let candidate = HslColor::from_hex(hex).unwrap();
        let background = HslColor::WHITE;
        assert!(contrast_ratio(candidate, background) >= WCAG_AA_CONTRAST);
    }

    #[test]
    fn test_accessible_variant_on_dark_background() {
        let mut palette = ColorPalette::new();
        palette.set_base_hex("primary", "#2563eb").unwrap();

        let suggestions = palette
            .suggest_accessible_variant("primary", "#111827")
            .unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions.keys().next().unwrap().starts_with("accessible_light_"));
    }

    #[test]
    fn test_accessible_variant_unknown_name_is_empty() {
        let palette = ColorPalette::new();
        let suggestions = palette
            .suggest_accessible_variant("primary", "#ffffff")
            .unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_accessible_variant_exhausted_ladder_is_empty() {
        // A saturated blue background sits just above 50% lightness (so the
        // darkening ladder is chosen) but has very low luminance, so no rung
        // reaches 4.5. The search fails closed with an empty map.
        let mut palette = ColorPalette::new();
        palette.set_base_hex("primary", "#2563eb").unwrap();

        let suggestions = palette
            .suggest_accessible_variant("primary", "#0a0aff")
            .unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_accessible_variant_rejects_bad_background() {
        let mut palette = ColorPalette::new();
        palette.set_base_hex("primary", "#2563eb").unwrap();
        assert!(palette.suggest_accessible_variant("primary", "oops").is_err());
    }
}
