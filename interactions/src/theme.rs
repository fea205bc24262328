//! Light/dark theme value and startup resolution.
//!
//! The theme lives as a `data-theme` attribute on `<html>` and as a string in
//! the settings store. At startup a stored value wins; otherwise the operating
//! system's color-scheme preference decides.
//!
//! TRADE-OFFS
//! ==========
//! A stored value that is neither `light` nor `dark` is ignored rather than
//! applied verbatim, so a corrupted entry cannot leave the page without a
//! recognised theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::consts::THEME_STORAGE_KEY;
use crate::settings::SettingsStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the startup theme from the store, falling back to the OS signal.
pub fn resolve_initial(store: &impl SettingsStore, prefers_dark: bool) -> Theme {
    store
        .get(THEME_STORAGE_KEY)
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

/// Which toggle icons carry the `active` class for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeIcons {
    pub sun: bool,
    pub moon: bool,
    pub glow: bool,
}

impl ThemeIcons {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        let dark = theme.is_dark();
        Self { sun: !dark, moon: dark, glow: dark }
    }
}
