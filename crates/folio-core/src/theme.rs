//! Theme model for the folio site.
//!
//! A visitor picks one [`ThemeMode`]. Every mode except [`ThemeMode::Auto`]
//! maps directly onto an [`AppliedTheme`]; `Auto` picks light or dark from
//! the local hour of day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StorageError, ThemeError};
use crate::storage::PreferenceStore;

/// Theme selected by the visitor and persisted between visits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light during the day, dark at night.
    #[default]
    Auto,
    Light,
    Dark,
    Neon,
    Minimalist,
    Retro,
}

impl ThemeMode {
    /// Value written to storage and used in the `<select>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Auto => "auto",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Neon => "neon",
            ThemeMode::Minimalist => "minimalist",
            ThemeMode::Retro => "retro",
        }
    }

    /// Display name for the theme switcher.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Auto => "Auto (Time-based)",
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::Neon => "Neon",
            ThemeMode::Minimalist => "Minimalist",
            ThemeMode::Retro => "Retro",
        }
    }

    /// All selectable modes, in switcher order.
    pub fn all() -> &'static [ThemeMode] {
        &[
            ThemeMode::Auto,
            ThemeMode::Light,
            ThemeMode::Dark,
            ThemeMode::Neon,
            ThemeMode::Minimalist,
            ThemeMode::Retro,
        ]
    }

    /// Resolves this mode to a concrete theme for the given local hour.
    pub fn resolve(&self, hour: u32, daylight: &Daylight) -> AppliedTheme {
        match self {
            ThemeMode::Auto => {
                if daylight.is_daytime(hour) {
                    AppliedTheme::Light
                } else {
                    AppliedTheme::Dark
                }
            }
            ThemeMode::Light => AppliedTheme::Light,
            ThemeMode::Dark => AppliedTheme::Dark,
            ThemeMode::Neon => AppliedTheme::Neon,
            ThemeMode::Minimalist => AppliedTheme::Minimalist,
            ThemeMode::Retro => AppliedTheme::Retro,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeMode::all()
            .iter()
            .copied()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ThemeError::Unknown(s.to_string()))
    }
}

/// Concrete theme applied to the document root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppliedTheme {
    Light,
    Dark,
    Neon,
    Minimalist,
    Retro,
}

impl AppliedTheme {
    /// CSS class placed on `<html>`.
    pub fn css_class(&self) -> &'static str {
        match self {
            AppliedTheme::Light => "theme-light",
            AppliedTheme::Dark => "theme-dark",
            AppliedTheme::Neon => "theme-neon",
            AppliedTheme::Minimalist => "theme-minimalist",
            AppliedTheme::Retro => "theme-retro",
        }
    }

    /// Every class a previous theme may have left on the root.
    pub fn all_css_classes() -> &'static [&'static str] {
        &[
            "theme-light",
            "theme-dark",
            "theme-neon",
            "theme-minimalist",
            "theme-retro",
        ]
    }
}

/// Daytime window used by [`ThemeMode::Auto`]: `start_hour <= hour < end_hour`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Daylight {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for Daylight {
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 19,
        }
    }
}

impl Daylight {
    pub fn is_daytime(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}

/// Reads the stored theme preference.
///
/// A missing or unrecognised value falls back to `fallback`, and an
/// unrecognised one is removed from the store. Only storage access failures
/// are reported.
pub fn load_preference<S: PreferenceStore + ?Sized>(
    store: &S,
    key: &str,
    fallback: ThemeMode,
) -> Result<ThemeMode, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(fallback);
    };

    match raw.parse::<ThemeMode>() {
        Ok(mode) => Ok(mode),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding stored theme preference");
            store.remove(key)?;
            Ok(fallback)
        }
    }
}

/// Persists the theme preference.
pub fn save_preference<S: PreferenceStore + ?Sized>(
    store: &S,
    key: &str,
    mode: ThemeMode,
) -> Result<(), StorageError> {
    store.set(key, mode.as_str())?;
    tracing::debug!(key, theme = %mode, "Saved theme preference");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_parse_round_trips_every_mode() {
        for mode in ThemeMode::all() {
            assert_eq!(mode.as_str().parse::<ThemeMode>().unwrap(), *mode);
        }
        assert_eq!(
            "sepia".parse::<ThemeMode>(),
            Err(ThemeError::Unknown("sepia".to_string()))
        );
    }

    #[test]
    fn test_auto_follows_time_of_day() {
        let daylight = Daylight::default();
        assert_eq!(ThemeMode::Auto.resolve(7, &daylight), AppliedTheme::Dark);
        assert_eq!(ThemeMode::Auto.resolve(8, &daylight), AppliedTheme::Light);
        assert_eq!(ThemeMode::Auto.resolve(18, &daylight), AppliedTheme::Light);
        assert_eq!(ThemeMode::Auto.resolve(19, &daylight), AppliedTheme::Dark);
        assert_eq!(ThemeMode::Auto.resolve(0, &daylight), AppliedTheme::Dark);
    }

    #[test]
    fn test_explicit_modes_ignore_hour() {
        let daylight = Daylight::default();
        for hour in [0, 12, 23] {
            assert_eq!(ThemeMode::Dark.resolve(hour, &daylight), AppliedTheme::Dark);
            assert_eq!(ThemeMode::Retro.resolve(hour, &daylight), AppliedTheme::Retro);
        }
    }

    #[test]
    fn test_preference_defaults_to_auto() {
        let store = MemoryStore::new();
        assert_eq!(
            load_preference(&store, "theme-preference", ThemeMode::Auto).unwrap(),
            ThemeMode::Auto
        );

        store.set("theme-preference", "not-a-theme").unwrap();
        assert_eq!(
            load_preference(&store, "theme-preference", ThemeMode::Auto).unwrap(),
            ThemeMode::Auto
        );
    }

    #[test]
    fn test_unrecognised_preference_is_cleared() {
        let store = MemoryStore::new();
        store.set("theme-preference", "sepia").unwrap();
        store.set("other", "kept").unwrap();

        assert_eq!(
            load_preference(&store, "theme-preference", ThemeMode::Dark).unwrap(),
            ThemeMode::Dark
        );
        assert_eq!(store.get("theme-preference").unwrap(), None);
        assert_eq!(store.get("other").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn test_preference_persists_choice() {
        let store = MemoryStore::new();
        save_preference(&store, "theme-preference", ThemeMode::Neon).unwrap();

        assert_eq!(store.get("theme-preference").unwrap().as_deref(), Some("neon"));
        assert_eq!(
            load_preference(&store, "theme-preference", ThemeMode::Auto).unwrap(),
            ThemeMode::Neon
        );
    }

    #[test]
    fn test_css_classes_cover_every_applied_theme() {
        let classes = AppliedTheme::all_css_classes();
        for theme in [
            AppliedTheme::Light,
            AppliedTheme::Dark,
            AppliedTheme::Neon,
            AppliedTheme::Minimalist,
            AppliedTheme::Retro,
        ] {
            assert!(classes.contains(&theme.css_class()));
        }
    }
}
