use api::prefs::theme_preference::ThemePreference;
use api::prefs::theme_preference::THEME_STORAGE_KEY;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};

use crate::app_state_mut::ThemeState;
use crate::compat;

/// Creates the theme state and resolves the startup theme on mount:
/// stored preference, then the color-scheme media query, then light.
pub fn use_theme() -> ThemeState {
    let mut mode = use_signal(ThemePreference::default);

    use_effect(move || {
        spawn(async move {
            let stored = compat::load_preference(THEME_STORAGE_KEY).await;
            let prefers_dark = compat::prefers_dark().await;
            let resolved = ThemePreference::resolve(stored.as_deref(), prefers_dark);
            info!(
                "theme: {} (stored: {:?}, prefers dark: {:?})",
                resolved.as_str(),
                stored,
                prefers_dark
            );
            mode.set(resolved);
            compat::apply_theme(resolved).await;
        });
    });

    ThemeState { mode }
}

impl ThemeState {
    /// Flips the theme, re-applies it and persists the choice.
    pub fn toggle(&mut self) {
        let next = self.mode.peek().toggled();
        self.mode.set(next);

        spawn(async move {
            compat::apply_theme(next).await;
            if !compat::store_preference(THEME_STORAGE_KEY, next.as_str()).await {
                warn!("could not persist theme preference");
            }
        });
    }
}
