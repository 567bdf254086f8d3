//! Error types for the theming engine.

use skylight_color::ParseColorError;

/// Result type alias for theming operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the theming engine.
///
/// Lookup misses (unknown semantic names or variants) are deliberately not
/// errors; those return `None` or an empty map so callers can fall back to a
/// default. Only genuinely malformed input surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A bare color string failed to parse.
    #[error(transparent)]
    Color(#[from] ParseColorError),

    /// A color associated with a named entry failed to parse.
    #[error("invalid color for '{name}': {source}")]
    InvalidColor {
        name: String,
        #[source]
        source: ParseColorError,
    },

    /// A theme-mode string was neither "light" nor "dark".
    #[error("unknown theme mode '{0}'")]
    UnknownThemeMode(String),
}

impl Error {
    /// Create an invalid-color error for a named entry.
    pub fn invalid_color(name: impl Into<String>, source: ParseColorError) -> Self {
        Self::InvalidColor {
            name: name.into(),
            source,
        }
    }
}
