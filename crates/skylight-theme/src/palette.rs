//! The semantic color palette orchestrator.

use std::fmt;

use indexmap::IndexMap;
use skylight_color::HslColor;

use crate::error::{Error, Result};
use crate::generator::{ColorGenerator, MaterialGenerator, StandardGenerator, VariantSet};
use crate::harmony::{self, ColorHarmony};
use crate::mode::ThemeMode;

/// Names of the built-in semantic presets accepted by
/// [`ColorPalette::load_preset`].
pub const PRESET_NAMES: [&str; 5] = ["default", "material", "bootstrap", "weather", "red"];

/// A dynamic palette of semantic base colors and their generated variants.
///
/// Semantic names are an open namespace: any string key is accepted, so
/// composite keys like `"weather_temperature"` work without special casing.
/// Setting a base color immediately regenerates that name's variant set via
/// the active [`ColorGenerator`]; switching the theme mode regenerates every
/// registered name.
///
/// Lookups for unknown names or variants return `None` rather than failing;
/// callers are expected to supply their own fallback color.
///
/// # Example
///
/// ```
/// use skylight_theme::palette::ColorPalette;
/// use skylight_theme::mode::ThemeMode;
///
/// let mut palette = ColorPalette::new();
/// palette.load_preset("red");
/// assert_eq!(palette.get_color("primary", "base").as_deref(), Some("#c43939"));
///
/// palette.set_theme_mode(ThemeMode::Dark);
/// assert!(palette.get_color("primary", "hover").is_some());
/// assert_eq!(palette.get_color("primary", "no-such-variant"), None);
/// ```
pub struct ColorPalette {
    generator: Box<dyn ColorGenerator>,
    base_colors: IndexMap<String, HslColor>,
    variants: IndexMap<String, VariantSet>,
    mode: ThemeMode,
}

impl ColorPalette {
    /// Create an empty palette with the standard generator in light mode.
    pub fn new() -> Self {
        Self::with_generator(Box::new(StandardGenerator))
    }

    /// Create an empty palette with an explicit generator strategy.
    pub fn with_generator(generator: Box<dyn ColorGenerator>) -> Self {
        Self {
            generator,
            base_colors: IndexMap::new(),
            variants: IndexMap::new(),
            mode: ThemeMode::Light,
        }
    }

    /// Create a palette preloaded from a named preset.
    pub fn from_preset(preset: &str, mode: ThemeMode) -> Self {
        let mut palette = Self::new();
        palette.set_theme_mode(mode);
        palette.load_preset(preset);
        palette
    }

    /// Create a Material Design palette: material generator + material preset.
    pub fn material(mode: ThemeMode) -> Self {
        let mut palette = Self::with_generator(Box::new(MaterialGenerator));
        palette.set_theme_mode(mode);
        palette.load_preset("material");
        palette
    }

    /// Name of the active generator strategy.
    pub fn generator_name(&self) -> &'static str {
        self.generator.name()
    }

    /// Replace the generator strategy and regenerate every variant set.
    pub fn set_generator(&mut self, generator: Box<dyn ColorGenerator>) {
        self.generator = generator;
        self.regenerate_all();
        tracing::debug!(generator = self.generator.name(), "generator replaced");
    }

    /// Register a base color under a semantic name and regenerate its
    /// variants. Any string is a valid name.
    pub fn set_base_color(&mut self, name: impl Into<String>, color: HslColor) {
        let name = name.into();
        let variants = self.generator.generate_variants(color, self.mode);
        tracing::debug!(name = %name, hex = %color.to_hex(), "base color set");
        self.base_colors.insert(name.clone(), color);
        self.variants.insert(name, variants);
    }

    /// Register a base color from a hex string.
    pub fn set_base_hex(&mut self, name: impl Into<String>, hex: &str) -> Result<()> {
        let name = name.into();
        let color =
            HslColor::from_hex(hex).map_err(|source| Error::invalid_color(&name, source))?;
        self.set_base_color(name, color);
        Ok(())
    }

    /// Register several base colors at once.
    pub fn set_base_colors<N>(&mut self, colors: impl IntoIterator<Item = (N, HslColor)>)
    where
        N: Into<String>,
    {
        for (name, color) in colors {
            self.set_base_color(name, color);
        }
    }

    /// The stored base color for a semantic name.
    pub fn base_color(&self, name: &str) -> Option<HslColor> {
        self.base_colors.get(name).copied()
    }

    /// Look up a color as a hex string.
    ///
    /// The `"base"` variant reads the stored base color; any other variant
    /// name is looked up in the generated set. Returns `None` when either
    /// the name or the variant is absent.
    pub fn get_color(&self, name: &str, variant: &str) -> Option<String> {
        self.get_color_hsl(name, variant).map(HslColor::to_hex)
    }

    /// Look up a color in HSL form. Same resolution rules as
    /// [`get_color`](Self::get_color).
    pub fn get_color_hsl(&self, name: &str, variant: &str) -> Option<HslColor> {
        if variant == "base" {
            return self.base_colors.get(name).copied();
        }
        self.variants.get(name)?.get(variant).copied()
    }

    /// All variants for a semantic name as hex strings, `"base"` included.
    pub fn all_variants(&self, name: &str) -> IndexMap<String, String> {
        let mut result = IndexMap::new();
        if let Some(base) = self.base_colors.get(name) {
            result.insert("base".to_string(), base.to_hex());
        }
        if let Some(variants) = self.variants.get(name) {
            for (variant, color) in variants {
                result.insert(variant.clone(), color.to_hex());
            }
        }
        result
    }

    /// The generated variant set for a semantic name, without `"base"`.
    pub fn variant_set(&self, name: &str) -> Option<&VariantSet> {
        self.variants.get(name)
    }

    /// Iterate over registered semantic names in insertion order.
    pub fn semantic_names(&self) -> impl Iterator<Item = &str> {
        self.base_colors.keys().map(String::as_str)
    }

    /// Iterate over `(name, base color)` pairs in insertion order.
    pub fn base_colors(&self) -> impl Iterator<Item = (&str, HslColor)> {
        self.base_colors.iter().map(|(name, color)| (name.as_str(), *color))
    }

    /// Iterate over `(name, variant set)` pairs in insertion order.
    pub fn variant_sets(&self) -> impl Iterator<Item = (&str, &VariantSet)> {
        self.variants.iter().map(|(name, set)| (name.as_str(), set))
    }

    /// Number of registered semantic names.
    pub fn len(&self) -> usize {
        self.base_colors.len()
    }

    /// True when no base colors are registered.
    pub fn is_empty(&self) -> bool {
        self.base_colors.is_empty()
    }

    /// The current theme mode.
    pub fn theme_mode(&self) -> ThemeMode {
        self.mode
    }

    /// Switch the theme mode, regenerating every variant set.
    ///
    /// A no-op when the mode is unchanged.
    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.regenerate_all();
        tracing::debug!(mode = %mode, "theme mode changed, variants regenerated");
    }

    /// Load a built-in semantic preset (see [`PRESET_NAMES`]).
    ///
    /// Surface and background entries depend on the current theme mode, so a
    /// preset is typically re-applied after a mode switch. An unknown preset
    /// name is a logged no-op.
    pub fn load_preset(&mut self, preset: &str) {
        let Some(colors) = preset_colors(preset, self.mode) else {
            tracing::warn!(preset, "unknown semantic preset, ignoring");
            return;
        };

        for (name, hex) in colors {
            self.set_base_color(name, HslColor::from_hex(hex).unwrap());
        }
        tracing::debug!(preset, "semantic preset loaded");
    }

    /// Derive harmony companions from a registered base color.
    ///
    /// Returns an empty map when `name` is not registered.
    pub fn generate_harmony(
        &self,
        name: &str,
        harmony_type: ColorHarmony,
    ) -> IndexMap<String, String> {
        let Some(base) = self.base_colors.get(name).copied() else {
            return IndexMap::new();
        };
        harmony::harmony_colors(base, harmony_type)
    }

    fn regenerate_all(&mut self) {
        for (name, base) in &self.base_colors {
            self.variants
                .insert(name.clone(), self.generator.generate_variants(*base, self.mode));
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ColorPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPalette")
            .field("generator", &self.generator.name())
            .field("mode", &self.mode)
            .field("base_colors", &self.base_colors)
            .finish_non_exhaustive()
    }
}

/// The built-in preset tables. Surface and background adapt to the mode.
fn preset_colors(preset: &str, mode: ThemeMode) -> Option<[(&'static str, &'static str); 7]> {
    let light = mode.is_light();

    let colors = match preset {
        "default" => [
            ("primary", "#2563eb"),
            ("success", "#10b981"),
            ("warning", "#f59e0b"),
            ("error", "#dc2626"),
            ("info", "#6b7280"),
            ("surface", if light { "#ffffff" } else { "#1f2937" }),
            ("background", if light { "#f9fafb" } else { "#111827" }),
        ],
        "material" => [
            ("primary", "#1976d2"),
            ("success", "#388e3c"),
            ("warning", "#f57c00"),
            ("error", "#d32f2f"),
            ("info", "#1976d2"),
            ("surface", if light { "#ffffff" } else { "#121212" }),
            ("background", if light { "#fafafa" } else { "#000000" }),
        ],
        "bootstrap" => [
            ("primary", "#0d6efd"),
            ("success", "#198754"),
            ("warning", "#ffc107"),
            ("error", "#dc3545"),
            ("info", "#0dcaf0"),
            ("surface", if light { "#ffffff" } else { "#212529" }),
            ("background", if light { "#f8f9fa" } else { "#000000" }),
        ],
        "weather" => [
            ("primary", "#0ea5e9"),
            ("success", "#22c55e"),
            ("warning", "#eab308"),
            ("error", "#ef4444"),
            ("info", "#6366f1"),
            ("surface", if light { "#ffffff" } else { "#1e293b" }),
            ("background", if light { "#f1f5f9" } else { "#0f172a" }),
        ],
        "red" => [
            ("primary", "#c43939"),
            ("success", "#22c55e"),
            ("warning", "#f59e0b"),
            ("error", "#dc2626"),
            ("info", "#6b7280"),
            ("surface", if light { "#ffffff" } else { "#1f2937" }),
            ("background", if light { "#f9fafb" } else { "#111827" }),
        ],
        _ => return None,
    };

    Some(colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_base_color() {
        let mut palette = ColorPalette::new();
        palette.set_base_hex("primary", "#2563eb").unwrap();

        assert_eq!(
            palette.get_color("primary", "base").as_deref(),
            Some("#2563eb")
        );
        assert!(palette.base_color("primary").is_some());
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_set_base_hex_rejects_malformed() {
        let mut palette = ColorPalette::new();
        let err = palette.set_base_hex("primary", "#nope").unwrap_err();
        assert!(matches!(err, Error::InvalidColor { .. }));
        assert!(palette.is_empty());
    }

    #[test]
    fn test_unknown_lookups_return_none() {
        let mut palette = ColorPalette::new();
        palette.set_base_hex("primary", "#2563eb").unwrap();

        assert_eq!(palette.get_color("secondary", "base"), None);
        assert_eq!(palette.get_color("primary", "glow"), None);
        assert_eq!(palette.base_color("secondary"), None);
        assert!(palette.all_variants("secondary").is_empty());
    }

    #[test]
    fn test_variants_generated_on_set() {
        let mut palette = ColorPalette::new();
        palette.set_base_hex("primary", "#2563eb").unwrap();

        let base = palette.get_color_hsl("primary", "base").unwrap();
        let light = palette.get_color_hsl("primary", "light").unwrap();
        assert!(light.lightness > base.lightness);

        let all = palette.all_variants("primary");
        assert_eq!(all.len(), 6); // base + 5 standard variants
        assert_eq!(all.keys().next().map(String::as_str), Some("base"));
    }

    #[test]
    fn test_theme_mode_switch_regenerates() {
        let mut palette = ColorPalette::new();
        palette.set_base_hex("primary", "#2563eb").unwrap();

        let light_hover = palette.get_color_hsl("primary", "hover").unwrap();
        palette.set_theme_mode(ThemeMode::Dark);
        let dark_hover = palette.get_color_hsl("primary", "hover").unwrap();

        // Light mode darkens hover, dark mode lightens it
        assert!(light_hover.lightness < dark_hover.lightness);
        assert_eq!(palette.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_set_same_mode_is_noop() {
        let mut palette = ColorPalette::new();
        palette.set_base_hex("primary", "#2563eb").unwrap();
        let before = palette.all_variants("primary");

        palette.set_theme_mode(ThemeMode::Light);
        assert_eq!(palette.all_variants("primary"), before);
    }

    #[test]
    fn test_red_preset_primary() {
        let mut palette = ColorPalette::new();
        palette.load_preset("red");

        assert_eq!(
            palette.get_color("primary", "base").as_deref(),
            Some("#c43939")
        );
        assert_eq!(palette.len(), 7);
    }

    #[test]
    fn test_preset_surface_depends_on_mode() {
        let light = ColorPalette::from_preset("default", ThemeMode::Light);
        let dark = ColorPalette::from_preset("default", ThemeMode::Dark);

        assert_eq!(light.get_color("surface", "base").as_deref(), Some("#ffffff"));
        assert_eq!(dark.get_color("surface", "base").as_deref(), Some("#1f2937"));
        // Primary is mode-independent
        assert_eq!(
            light.get_color("primary", "base"),
            dark.get_color("primary", "base")
        );
    }

    #[test]
    fn test_unknown_preset_is_noop() {
        let mut palette = ColorPalette::new();
        palette.set_base_hex("primary", "#2563eb").unwrap();
        palette.load_preset("vaporwave");

        assert_eq!(palette.len(), 1);
        assert_eq!(
            palette.get_color("primary", "base").as_deref(),
            Some("#2563eb")
        );
    }

    #[test]
    fn test_all_presets_load() {
        for preset in PRESET_NAMES {
            let palette = ColorPalette::from_preset(preset, ThemeMode::Light);
            assert_eq!(palette.len(), 7, "preset {preset}");
            assert!(palette.get_color("primary", "base").is_some());
            assert!(palette.get_color("background", "base").is_some());
        }
    }

    #[test]
    fn test_material_palette_constructor() {
        let palette = ColorPalette::material(ThemeMode::Light);
        assert_eq!(palette.generator_name(), "material");
        assert!(palette.get_color("primary", "material_500").is_some());
    }

    #[test]
    fn test_set_generator_regenerates() {
        let mut palette = ColorPalette::new();
        palette.set_base_hex("primary", "#2563eb").unwrap();
        assert_eq!(palette.get_color("primary", "material_500"), None);

        palette.set_generator(Box::new(MaterialGenerator));
        assert_eq!(palette.generator_name(), "material");
        assert!(palette.get_color("primary", "material_500").is_some());
    }

    #[test]
    fn test_open_namespace_names() {
        let mut palette = ColorPalette::new();
        palette.set_base_hex("weather_temperature", "#c43939").unwrap();
        palette.set_base_hex("", "#000000").unwrap();

        assert!(palette.get_color("weather_temperature", "hover").is_some());
        assert!(palette.get_color("", "base").is_some());
    }

    #[test]
    fn test_overwrite_regenerates_variants() {
        let mut palette = ColorPalette::new();
        palette.set_base_hex("primary", "#2563eb").unwrap();
        let before = palette.get_color("primary", "light");

        palette.set_base_hex("primary", "#c43939").unwrap();
        let after = palette.get_color("primary", "light");

        assert_ne!(before, after);
        assert_eq!(palette.len(), 1);
    }
}
