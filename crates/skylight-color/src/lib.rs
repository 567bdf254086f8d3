//! Color value types for Skylight.
//!
//! This crate provides [`HslColor`], the immutable hue/saturation/lightness
//! value type the rest of the theming engine is built on. Working in HSL makes
//! tint/shade derivation a matter of arithmetic on one channel, which is why
//! every variant generator upstream operates on this type rather than raw RGB.
//!
//! # Example
//!
//! ```
//! use skylight_color::HslColor;
//!
//! let primary = HslColor::from_hex("#2563eb").unwrap();
//! let hover = primary.darken(10.0);
//!
//! assert!(hover.lightness < primary.lightness);
//! assert_eq!(primary.to_hex(), "#2563eb");
//! ```

mod hsl;

pub use hsl::{HslColor, ParseColorError};
