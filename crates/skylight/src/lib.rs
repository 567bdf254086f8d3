//! Skylight - adaptive color and theming for weather analytics UIs.
//!
//! This is the main umbrella crate that re-exports the public APIs.
//!
//! # Example
//!
//! ```
//! use skylight::HslColor;
//! use skylight::theme::prelude::*;
//!
//! let mut manager = ThemeManager::new("weather", ThemeMode::Light);
//! manager.toggle_theme();
//!
//! let primary = manager.palette().get_color("primary", "base").unwrap();
//! assert_eq!(HslColor::from_hex(&primary).unwrap().to_hex(), primary);
//! ```

pub use skylight_color::*;

/// Palettes, generators, and theme management.
pub mod theme {
    pub use skylight_theme::*;
}
