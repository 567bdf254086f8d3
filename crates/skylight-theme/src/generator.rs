//! Variant generation strategies.
//!
//! A generator expands one base color into a named set of derived shades for
//! UI states (hover, pressed, disabled, ...). The palette owns exactly one
//! generator, selected at construction time; swapping it changes the shape of
//! every variant set but never touches the registered base colors.

use indexmap::IndexMap;
use skylight_color::HslColor;

use crate::mode::ThemeMode;

/// A named set of derived variants for one base color.
///
/// Keys are generator-defined. The `"base"` key is never present here; the
/// original color is stored separately by the palette.
pub type VariantSet = IndexMap<String, HslColor>;

/// Strategy for expanding a base color into named variants.
pub trait ColorGenerator {
    /// Stable name recorded in palette exports (e.g. `"standard"`).
    fn name(&self) -> &'static str;

    /// Derive the variant set for `base` under `mode`.
    ///
    /// Must be a pure function of its arguments.
    fn generate_variants(&self, base: HslColor, mode: ThemeMode) -> VariantSet;
}

/// Five-variant generator: light, dark, hover, pressed, disabled.
///
/// The light- and dark-mode formulas are asymmetric on purpose: a base color
/// sitting on a dark surface needs its "lighter" states pushed further up,
/// and its interaction states brighten instead of darkening.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardGenerator;

impl ColorGenerator for StandardGenerator {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn generate_variants(&self, base: HslColor, mode: ThemeMode) -> VariantSet {
        let mut variants = VariantSet::new();

        match mode {
            ThemeMode::Light => {
                variants.insert("light".to_string(), base.lighten(20.0));
                variants.insert("dark".to_string(), base.darken(20.0));
                variants.insert("hover".to_string(), base.darken(10.0));
                variants.insert("pressed".to_string(), base.darken(30.0));
                variants.insert(
                    "disabled".to_string(),
                    base.desaturate(50.0).lighten(30.0),
                );
            }
            ThemeMode::Dark => {
                variants.insert("light".to_string(), base.lighten(30.0));
                variants.insert("dark".to_string(), base.darken(15.0));
                variants.insert("hover".to_string(), base.lighten(15.0));
                variants.insert("pressed".to_string(), base.lighten(25.0));
                variants.insert(
                    "disabled".to_string(),
                    base.desaturate(60.0).darken(20.0),
                );
            }
        }

        variants
    }
}

/// Material Design tonal generator: stops `material_50` through
/// `material_900` plus the standard state aliases.
///
/// Each stop pins lightness to a fixed target; saturation is attenuated at
/// the extremes so very light and very dark stops do not oversaturate.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialGenerator;

/// Target lightness per Material stop.
const MATERIAL_STOPS: [(&str, f32); 10] = [
    ("50", 95.0),
    ("100", 90.0),
    ("200", 80.0),
    ("300", 70.0),
    ("400", 60.0),
    ("500", 50.0),
    ("600", 40.0),
    ("700", 30.0),
    ("800", 20.0),
    ("900", 10.0),
];

impl ColorGenerator for MaterialGenerator {
    fn name(&self) -> &'static str {
        "material"
    }

    fn generate_variants(&self, base: HslColor, mode: ThemeMode) -> VariantSet {
        let mut variants = VariantSet::new();

        for (stop, target_lightness) in MATERIAL_STOPS {
            let saturation_factor = if target_lightness > 80.0 {
                0.6
            } else if target_lightness < 20.0 {
                0.8
            } else {
                1.0
            };

            let color = HslColor::new(
                base.hue,
                base.saturation * saturation_factor,
                target_lightness,
            )
            .with_alpha(base.alpha);
            variants.insert(format!("material_{stop}"), color);
        }

        let light = variants["material_200"];
        let dark = variants["material_700"];
        let (hover, pressed, disabled) = match mode {
            ThemeMode::Light => (
                variants["material_400"],
                variants["material_800"],
                variants["material_100"],
            ),
            ThemeMode::Dark => (
                variants["material_300"],
                variants["material_200"],
                variants["material_800"],
            ),
        };

        variants.insert("light".to_string(), light);
        variants.insert("dark".to_string(), dark);
        variants.insert("hover".to_string(), hover);
        variants.insert("pressed".to_string(), pressed);
        variants.insert("disabled".to_string(), disabled);

        variants
    }
}
