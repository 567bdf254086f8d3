//! Semantic color palettes and theming for Skylight.
//!
//! This crate turns a handful of base colors into a full UI palette:
//!
//! - **Generators**: pluggable strategies that expand one base color into
//!   named variants (hover, pressed, disabled, ...) for a light or dark theme
//! - **Palette**: an open, string-keyed registry of semantic base colors
//!   kept in sync with their generated variants
//! - **Harmony**: classical color-theory companions from fixed hue rotations
//! - **Accessibility**: WCAG contrast metrics and color-vision simulation
//! - **Weather palettes**: domain color sets for the analytics dashboards
//! - **Import/export**: JSON-serializable palette snapshots
//! - **Theme manager**: an explicit context that owns the palette and
//!   broadcasts mode changes
//!
//! # Example
//!
//! ```
//! use skylight_theme::prelude::*;
//!
//! let mut palette = ColorPalette::new();
//! palette.load_preset("red");
//! assert_eq!(palette.get_color("primary", "base").as_deref(), Some("#c43939"));
//!
//! palette.set_theme_mode(ThemeMode::Dark);
//! let hover = palette.get_color("primary", "hover").unwrap();
//! assert_ne!(hover, "#c43939");
//! ```

pub mod mode;
pub mod generator;
pub mod palette;
pub mod harmony;
pub mod accessibility;
pub mod weather;
pub mod document;
pub mod manager;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::accessibility::{
        color_metrics, contrast_ratio, contrast_ratio_hex, simulate_color_blindness,
        ColorBlindness, ColorMetrics, WCAG_AA_CONTRAST, WCAG_AAA_CONTRAST,
    };
    pub use crate::document::PaletteDocument;
    pub use crate::generator::{
        ColorGenerator, MaterialGenerator, StandardGenerator, VariantSet,
    };
    pub use crate::harmony::{harmony_colors, ColorHarmony};
    pub use crate::manager::{ListenerId, ThemeChange, ThemeManager};
    pub use crate::mode::ThemeMode;
    pub use crate::palette::{ColorPalette, PRESET_NAMES};
    pub use crate::weather::{
        alert_gradient, alert_gradient_hex, weather_palette, weather_palette_hex,
    };
    pub use skylight_color::{HslColor, ParseColorError};
}
