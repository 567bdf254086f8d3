//! The HSL color value type and its conversions.

use std::fmt;
use std::str::FromStr;

/// Error parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    /// The string has the wrong number of hex digits.
    #[error("hex color must have 6 or 8 digits, got {0}")]
    InvalidLength(usize),
    /// The string contains a character that is not a hex digit.
    #[error("invalid hex digit in color '{0}'")]
    InvalidDigit(String),
}

/// A color in hue/saturation/lightness space.
///
/// Hue is in degrees and always normalized to `[0, 360)`; saturation and
/// lightness are percentages clamped to `[0, 100]`; alpha is clamped to
/// `[0, 1]`. Every transform returns a new value and re-establishes these
/// invariants, so out-of-range inputs are wrapped or clamped rather than
/// rejected.
///
/// # Example
///
/// ```
/// use skylight_color::HslColor;
///
/// let red = HslColor::new(0.0, 54.9, 49.6);
/// let rotated = red.rotate_hue(480.0);
/// assert_eq!(rotated.hue, 120.0);
///
/// let washed = red.lighten(80.0);
/// assert_eq!(washed.lightness, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    /// Hue in degrees, `[0, 360)`.
    pub hue: f32,
    /// Saturation percentage, `[0, 100]`.
    pub saturation: f32,
    /// Lightness percentage, `[0, 100]`.
    pub lightness: f32,
    /// Opacity, `[0, 1]`.
    pub alpha: f32,
}

impl HslColor {
    /// Create an opaque color, normalizing hue and clamping the rest.
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: saturation.clamp(0.0, 100.0),
            lightness: lightness.clamp(0.0, 100.0),
            alpha: 1.0,
        }
    }

    /// Create a color from 8-bit RGB components.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let (hue, saturation, lightness) =
            rgb_to_hsl(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
        Self {
            hue,
            saturation,
            lightness,
            alpha: 1.0,
        }
    }

    /// Parse a color from a hex string (e.g. `"#FF0000"` or `"#FF000080"`).
    ///
    /// The leading `#` is optional and digits may be upper- or lowercase.
    /// An 8-digit string carries alpha in its last two digits.
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let digits = hex.trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(ParseColorError::InvalidDigit(hex.to_string()));
        }

        let len = digits.len();
        if len != 6 && len != 8 {
            return Err(ParseColorError::InvalidLength(len));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ParseColorError::InvalidDigit(hex.to_string()))
        };

        let r = channel(0)?;
        let g = channel(2)?;
        let b = channel(4)?;
        let color = Self::from_rgb8(r, g, b);

        if len == 8 {
            Ok(color.with_alpha(channel(6)? as f32 / 255.0))
        } else {
            Ok(color)
        }
    }

    /// Convert to 8-bit RGB, rounding each channel to the nearest integer.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = hsl_to_rgb(
            self.hue,
            self.saturation / 100.0,
            self.lightness / 100.0,
        );
        (
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        )
    }

    /// Format as a lowercase `#rrggbb` hex string. Alpha is not serialized.
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Return a lighter color, lightness clamped to 100.
    pub fn lighten(self, amount: f32) -> Self {
        Self {
            lightness: (self.lightness + amount).clamp(0.0, 100.0),
            ..self
        }
    }

    /// Return a darker color, lightness clamped to 0.
    pub fn darken(self, amount: f32) -> Self {
        Self {
            lightness: (self.lightness - amount).clamp(0.0, 100.0),
            ..self
        }
    }

    /// Return a more saturated color, clamped to 100.
    pub fn saturate(self, amount: f32) -> Self {
        Self {
            saturation: (self.saturation + amount).clamp(0.0, 100.0),
            ..self
        }
    }

    /// Return a less saturated color, clamped to 0.
    pub fn desaturate(self, amount: f32) -> Self {
        Self {
            saturation: (self.saturation - amount).clamp(0.0, 100.0),
            ..self
        }
    }

    /// Rotate the hue by `degrees`, wrapping into `[0, 360)`.
    ///
    /// Negative rotations are valid and wrap the other way around the wheel.
    pub fn rotate_hue(self, degrees: f32) -> Self {
        Self {
            hue: (self.hue + degrees).rem_euclid(360.0),
            ..self
        }
    }

    /// Return the same color with a new alpha, clamped to `[0, 1]`.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Opaque white.
    pub const WHITE: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        lightness: 100.0,
        alpha: 1.0,
    };

    /// Opaque black.
    pub const BLACK: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        lightness: 0.0,
        alpha: 1.0,
    };
}

impl FromStr for HslColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// HSL to RGB. Hue in degrees, saturation/lightness in `[0, 1]`; output
/// channels in `[0, 1]`.
fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> (f32, f32, f32) {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let hp = hue / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r1, g1, b1) = if hp < 1.0 {
        (c, x, 0.0)
    } else if hp < 2.0 {
        (x, c, 0.0)
    } else if hp < 3.0 {
        (0.0, c, x)
    } else if hp < 4.0 {
        (0.0, x, c)
    } else if hp < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r1 + m, g1 + m, b1 + m)
}

/// RGB to HSL. Channels in `[0, 1]`; returns (degrees, percent, percent).
fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        return (0.0, 0.0, lightness * 100.0);
    }

    let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());

    let hue = if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (hue.rem_euclid(360.0), saturation * 100.0, lightness * 100.0)
}
