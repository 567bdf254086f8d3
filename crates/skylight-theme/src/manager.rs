//! Theme context for UI state owners.
//!
//! [`ThemeManager`] is an explicit context object, not a global: whatever
//! owns UI state constructs one and passes it down. It owns a
//! [`ColorPalette`], tracks the active preset so mode-dependent preset
//! entries (surface, background) can be re-applied on a switch, and
//! broadcasts each mode change to registered listeners so every chart and
//! widget restyles from the same event.
//!
//! The manager is single-threaded; callers sharing one across threads must
//! serialize access themselves.

use std::fmt;

use indexmap::IndexMap;
use skylight_color::HslColor;

use crate::accessibility::ColorMetrics;
use crate::error::{Error, Result};
use crate::mode::ThemeMode;
use crate::palette::{ColorPalette, PRESET_NAMES};
use crate::weather::weather_palette;

/// Notification payload for a theme switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChange {
    /// The mode before the switch.
    pub previous: ThemeMode,
    /// The mode after the switch.
    pub current: ThemeMode,
}

/// Handle for removing a theme-change listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&ThemeChange)>;

/// Owns the palette and the current theme mode, and notifies listeners on
/// mode changes.
pub struct ThemeManager {
    palette: ColorPalette,
    preset: String,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl ThemeManager {
    /// Create a manager with a preset and initial mode.
    pub fn new(preset: &str, mode: ThemeMode) -> Self {
        let mut palette = ColorPalette::new();
        palette.set_theme_mode(mode);
        palette.load_preset(preset);

        Self {
            palette,
            preset: preset.to_string(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// The palette under management.
    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Mutable access to the palette, e.g. for registering custom colors.
    pub fn palette_mut(&mut self) -> &mut ColorPalette {
        &mut self.palette
    }

    /// The current theme mode.
    pub fn theme_mode(&self) -> ThemeMode {
        self.palette.theme_mode()
    }

    /// The active preset name.
    pub fn preset(&self) -> &str {
        &self.preset
    }

    /// Switch to `mode`. Returns false (and notifies nobody) when already
    /// active.
    ///
    /// The active preset is re-applied after the switch because its surface
    /// and background entries are mode-dependent.
    pub fn set_theme(&mut self, mode: ThemeMode) -> bool {
        let previous = self.palette.theme_mode();
        if previous == mode {
            return false;
        }

        self.palette.set_theme_mode(mode);
        self.palette.load_preset(&self.preset);

        let change = ThemeChange {
            previous,
            current: mode,
        };
        for (_, listener) in &self.listeners {
            listener(&change);
        }

        tracing::debug!(mode = %mode, "theme changed");
        true
    }

    /// Switch to the opposite mode and return it.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        let next = self.palette.theme_mode().toggled();
        self.set_theme(next);
        next
    }

    /// Load a different preset. Unknown names leave the active preset in
    /// place (the palette logs the miss).
    pub fn set_preset(&mut self, preset: &str) {
        if PRESET_NAMES.contains(&preset) {
            self.preset = preset.to_string();
        }
        self.palette.load_preset(preset);
    }

    /// Register a listener invoked on every actual mode change.
    pub fn on_theme_changed(&mut self, listener: impl Fn(&ThemeChange) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a previously registered listener. Returns false when the id is
    /// unknown.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Base hex color per registered semantic name.
    pub fn current_colors(&self) -> IndexMap<String, String> {
        self.palette
            .base_colors()
            .map(|(name, color)| (name.to_string(), color.to_hex()))
            .collect()
    }

    /// Derive the weather palette from `base_hex` and register each entry
    /// under a `weather_{kind}` semantic name.
    pub fn register_weather_colors(&mut self, base_hex: &str) -> Result<()> {
        let base = HslColor::from_hex(base_hex)
            .map_err(|source| Error::invalid_color("temperature", source))?;

        for (kind, hex) in weather_palette(base) {
            self.palette.set_base_hex(format!("weather_{kind}"), &hex)?;
        }
        Ok(())
    }

    /// Accessibility metrics for every registered base color.
    pub fn accessibility_report(&self) -> IndexMap<String, ColorMetrics> {
        self.palette
            .semantic_names()
            .filter_map(|name| {
                self.palette
                    .color_metrics(name, "base")
                    .map(|metrics| (name.to_string(), metrics))
            })
            .collect()
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new("red", ThemeMode::Light)
    }
}

impl fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeManager")
            .field("preset", &self.preset)
            .field("mode", &self.theme_mode())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
