use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;

use crate::error::PrefsError;

/// Storage key under which the chosen theme is persisted.
pub const THEME_STORAGE_KEY: &str = "theme";

/// The visual mode of the page.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Resolves the startup theme.
    ///
    /// Precedence: a valid stored value, then the environment's dark-mode
    /// preference, then light. `prefers_dark` is `None` when the environment
    /// cannot report one.
    pub fn resolve(stored: Option<&str>, prefers_dark: Option<bool>) -> Self {
        if let Some(theme) = stored.and_then(|s| Self::parse(s).ok()) {
            return theme;
        }
        match prefers_dark {
            Some(true) => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Parses a stored value. Only the exact strings `light` and `dark` are valid.
    pub fn parse(s: &str) -> Result<Self, PrefsError> {
        Self::from_str(s).map_err(|_| PrefsError::UnknownTheme(s.to_string()))
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The persisted and `data-theme` form: `"light"` or `"dark"`.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_value_wins() {
        assert_eq!(
            ThemePreference::resolve(Some("light"), Some(true)),
            ThemePreference::Light
        );
        assert_eq!(
            ThemePreference::resolve(Some("dark"), Some(false)),
            ThemePreference::Dark
        );
    }

    #[test]
    fn falls_back_to_environment_then_light() {
        assert_eq!(ThemePreference::resolve(None, Some(true)), ThemePreference::Dark);
        assert_eq!(ThemePreference::resolve(None, Some(false)), ThemePreference::Light);
        assert_eq!(ThemePreference::resolve(None, None), ThemePreference::Light);
    }

    #[test]
    fn ignores_garbage_in_storage() {
        assert_eq!(
            ThemePreference::resolve(Some("solarized"), Some(true)),
            ThemePreference::Dark
        );
        assert_eq!(
            ThemePreference::parse("Dark"),
            Err(PrefsError::UnknownTheme("Dark".into()))
        );
    }

    #[test]
    fn toggle_flips_and_round_trips_through_storage_form() {
        let dark = ThemePreference::Light.toggled();
        assert!(dark.is_dark());
        assert_eq!(dark.as_str(), "dark");
        assert_eq!(ThemePreference::parse(dark.as_str()), Ok(dark));
        assert_eq!(dark.toggled(), ThemePreference::Light);
    }
}
