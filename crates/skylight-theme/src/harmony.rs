//! Classical color-harmony derivation.
//!
//! Each harmony is a fixed set of hue rotations (or lightness/saturation
//! moves for the monochromatic case) applied to a base color.

use indexmap::IndexMap;
use skylight_color::HslColor;

/// A color-theory relationship between a base color and its companions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorHarmony {
    /// Lightness/saturation variations of the same hue.
    Monochromatic,
    /// Neighbors at ±30° on the wheel.
    Analogous,
    /// The single hue 180° away.
    Complementary,
    /// Two companions at +120° and +240°.
    Triadic,
    /// Three companions at +90°, +180°, +270°.
    Tetradic,
    /// Companions at +150° and +210°.
    SplitComplementary,
}

impl ColorHarmony {
    /// Stable string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::SplitComplementary => "split_complementary",
        }
    }
}

/// Derive harmony companions for a base color, as hex strings.
pub fn harmony_colors(base: HslColor, harmony: ColorHarmony) -> IndexMap<String, String> {
    let mut colors = IndexMap::new();
    let mut push = |name: &str, color: HslColor| {
        colors.insert(name.to_string(), color.to_hex());
    };

    match harmony {
        ColorHarmony::Complementary => {
            push("complementary", base.rotate_hue(180.0));
        }
        ColorHarmony::Triadic => {
            push("triadic_1", base.rotate_hue(120.0));
            push("triadic_2", base.rotate_hue(240.0));
        }
        ColorHarmony::Analogous => {
            push("analogous_1", base.rotate_hue(30.0));
            push("analogous_2", base.rotate_hue(-30.0));
        }
        ColorHarmony::SplitComplementary => {
            push("split_comp_1", base.rotate_hue(150.0));
            push("split_comp_2", base.rotate_hue(210.0));
        }
        ColorHarmony::Tetradic => {
            push("tetradic_1", base.rotate_hue(90.0));
            push("tetradic_2", base.rotate_hue(180.0));
            push("tetradic_3", base.rotate_hue(270.0));
        }
        ColorHarmony::Monochromatic => {
            push("monochromatic_light", base.lighten(30.0));
            push("monochromatic_dark", base.darken(30.0));
            push("monochromatic_muted", base.desaturate(40.0));
        }
    }

    colors
}
