//! Palette snapshots for import/export.
//!
//! A [`PaletteDocument`] is the JSON-serializable form of a palette: theme
//! mode, generator name, base colors (hex plus HSL breakdown), and optionally
//! the generated variants as hex. Reading and writing files is the caller's
//! job; this module only maps between the document and a live palette.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use skylight_color::HslColor;

use crate::error::{Error, Result};
use crate::generator::{ColorGenerator, MaterialGenerator, StandardGenerator};
use crate::mode::ThemeMode;
use crate::palette::ColorPalette;

/// JSON-serializable snapshot of a palette.
///
/// Every field is optional on the way in; [`ColorPalette::import`] applies
/// whatever is present and validates everything before mutating.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaletteDocument {
    /// Theme mode, `"light"` or `"dark"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_type: Option<String>,
    /// Generator strategy name, `"standard"` or `"material"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator_type: Option<String>,
    /// Base colors by semantic name.
    #[serde(default)]
    pub base_colors: IndexMap<String, ColorEntry>,
    /// Generated variants by semantic name, hex only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<IndexMap<String, IndexMap<String, String>>>,
}

/// One base color in a document: hex form, HSL breakdown, or both.
///
/// When both are present the hex form wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsl: Option<HslEntry>,
}

/// HSL component breakdown of an exported color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HslEntry {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    #[serde(default = "default_alpha")]
    pub alpha: f32,
}

fn default_alpha() -> f32 {
    1.0
}

impl From<HslColor> for HslEntry {
    fn from(color: HslColor) -> Self {
        Self {
            hue: color.hue,
            saturation: color.saturation,
            lightness: color.lightness,
            alpha: color.alpha,
        }
    }
}

impl From<&HslEntry> for HslColor {
    fn from(entry: &HslEntry) -> Self {
        HslColor::new(entry.hue, entry.saturation, entry.lightness).with_alpha(entry.alpha)
    }
}

impl ColorPalette {
    /// Snapshot the palette into a serializable document.
    pub fn export(&self, include_variants: bool) -> PaletteDocument {
        let mut document = PaletteDocument {
            theme_type: Some(self.theme_mode().as_str().to_string()),
            generator_type: Some(self.generator_name().to_string()),
            ..PaletteDocument::default()
        };

        for (name, color) in self.base_colors() {
            document.base_colors.insert(
                name.to_string(),
                ColorEntry {
                    hex: Some(color.to_hex()),
                    hsl: Some(color.into()),
                },
            );
        }

        if include_variants {
            let mut variants = IndexMap::new();
            for (name, set) in self.variant_sets() {
                variants.insert(
                    name.to_string(),
                    set.iter()
                        .map(|(variant, color)| (variant.clone(), color.to_hex()))
                        .collect::<IndexMap<String, String>>(),
                );
            }
            document.variants = Some(variants);
        }

        document
    }

    /// Apply a document to this palette.
    ///
    /// Absent fields are skipped; present fields are validated in full before
    /// anything is mutated, so an `Err` leaves the palette untouched. Colors
    /// in the document are merged over existing entries by name. A document
    /// naming an unrecognized generator keeps the current one (logged).
    /// Variant sets in the document are ignored; variants are always
    /// regenerated from the imported base colors.
    pub fn import(&mut self, document: &PaletteDocument) -> Result<()> {
        let mode = document
            .theme_type
            .as_deref()
            .map(str::parse::<ThemeMode>)
            .transpose()?;

        let generator: Option<Box<dyn ColorGenerator>> =
            match document.generator_type.as_deref() {
                None => None,
                Some("standard") => Some(Box::new(StandardGenerator)),
                Some("material") => Some(Box::new(MaterialGenerator)),
                Some(other) => {
                    tracing::warn!(
                        generator = other,
                        "unknown generator in palette document, keeping current"
                    );
                    None
                }
            };

        let mut staged = Vec::with_capacity(document.base_colors.len());
        for (name, entry) in &document.base_colors {
            let color = if let Some(hex) = &entry.hex {
                HslColor::from_hex(hex).map_err(|source| Error::invalid_color(name, source))?
            } else if let Some(hsl) = &entry.hsl {
                HslColor::from(hsl)
            } else {
                tracing::warn!(name = %name, "color entry without hex or hsl, skipping");
                continue;
            };
            staged.push((name.clone(), color));
        }

        if let Some(mode) = mode {
            self.set_theme_mode(mode);
        }
        if let Some(generator) = generator {
            self.set_generator(generator);
        }
        for (name, color) in staged {
            self.set_base_color(name, color);
        }

        tracing::debug!(colors = self.len(), "palette document imported");
        Ok(())
    }
}
