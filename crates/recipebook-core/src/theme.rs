//! Light and dark theme tokens
//!
//! A [`Theme`] is resolved once at startup from the host's appearance
//! preference and handed explicitly to the renderer.

use serde::{Deserialize, Serialize};

/// Colors used by the recipe screen, as CSS hex strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Card background
    pub primary: &'static str,
    /// Text drawn on cards
    pub on_primary: &'static str,
    /// Window background behind the list
    pub background: &'static str,
    /// Text drawn on the window background (empty state)
    pub on_background: &'static str,
    /// Fill behind an image that is loading or failed to load
    pub image_placeholder: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        primary: "#6650a4",
        on_primary: "#ffffff",
        background: "#fffbfe",
        on_background: "#1c1b1f",
        image_placeholder: "#8e7cc3",
    };

    pub const DARK: Palette = Palette {
        primary: "#d0bcff",
        on_primary: "#381e72",
        background: "#1c1b1f",
        on_background: "#e6e1e5",
        image_placeholder: "#4f378b",
    };
}

/// Type scale for the recipe card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typography {
    pub font_family: &'static str,
    /// Day label size in px
    pub label_size: u16,
    /// Title size in px
    pub title_size: u16,
    pub title_weight: u16,
    /// Description size in px
    pub body_size: u16,
}

impl Typography {
    pub const DEFAULT: Typography = Typography {
        font_family: "Roboto, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
        label_size: 15,
        title_size: 20,
        title_weight: 700,
        body_size: 18,
    };
}

impl Default for Typography {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Palette and typography for one run of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
    pub typography: Typography,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        self.palette == Palette::DARK
    }
}

/// Pick the theme for the host's appearance preference.
pub fn resolve_theme(prefers_dark: bool) -> Theme {
    Theme {
        palette: if prefers_dark {
            Palette::DARK
        } else {
            Palette::LIGHT
        },
        typography: Typography::DEFAULT,
    }
}

/// User preference for application theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow system preference (default)
    #[default]
    System,
    /// Always use light theme
    Light,
    /// Always use dark theme
    Dark,
}

impl ThemePreference {
    /// Whether to use the dark palette, given the host's current appearance
    pub fn prefers_dark(self, system_is_dark: bool) -> bool {
        match self {
            ThemePreference::System => system_is_dark,
            ThemePreference::Light => false,
            ThemePreference::Dark => true,
        }
    }

    /// Get a user-friendly display name
    pub fn display_name(self) -> &'static str {
        match self {
            ThemePreference::System => "System",
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_theme_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(resolve_theme(true).palette, Palette::DARK);
            assert_eq!(resolve_theme(false).palette, Palette::LIGHT);
        }
        assert_eq!(resolve_theme(true), resolve_theme(true));
    }

    #[test]
    fn test_typography_is_shared_by_both_palettes() {
        assert_eq!(resolve_theme(true).typography, resolve_theme(false).typography);
        assert_eq!(Typography::default().title_size, 20);
    }

    #[test]
    fn test_is_dark() {
        assert!(resolve_theme(true).is_dark());
        assert!(!resolve_theme(false).is_dark());
    }

    #[test]
    fn test_preference_overrides_system() {
        assert!(ThemePreference::System.prefers_dark(true));
        assert!(!ThemePreference::System.prefers_dark(false));
        assert!(!ThemePreference::Light.prefers_dark(true));
        assert!(ThemePreference::Dark.prefers_dark(false));
    }

    #[test]
    fn test_preference_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ThemePreference::Dark).unwrap(), "\"dark\"");
        let pref: ThemePreference = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(pref, ThemePreference::System);
    }
}
