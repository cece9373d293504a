// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod app_state_mut;
pub mod compat;
mod components;
pub mod converter;
pub mod hooks;
pub mod rate_fetch;
mod screens;
#[cfg(test)]
mod test_support;

use api::prefs::theme_preference::ThemePreference;
use api::prefs::user_prefs::UserPrefs;
use app_state::AppState;
use components::pico::Container;
use components::theme_toggle::ThemeToggle;
use hooks::use_converter::use_converter;
use hooks::use_number_locale::use_number_locale;
use hooks::use_theme::use_theme;
use screens::converter::ConverterScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let converter_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        min-height: 100%;
        margin: 0;
        padding: 0;
    }

    /* --- APP FRAME --- */
    .app-main-container {
        min-height: 100dvh;
        display: grid;
        place-items: center;
        padding: 4rem 1rem 1rem 1rem;
    }

    .app-main-container > main {
        width: 100%;
        max-width: 36rem;
        padding: 0;
    }

    .app-main-container article {
        border-radius: 2rem;
        padding: 2rem;
    }

    /* --- CORNERS --- */
    .site-title {
        position: fixed;
        top: 1rem;
        left: 1rem;
        font-size: 1.125rem;
        font-weight: 600;
        letter-spacing: -0.01em;
    }

    .theme-toggle {
        position: fixed;
        top: 0.75rem;
        right: 0.75rem;
        border-radius: 999px;
        padding: 0.375rem 0.875rem;
        font-size: 0.875rem;
    }

    .toggle-content { display: flex; align-items: center; gap: 0.5rem; }

    @media (max-width: 640px) {
        .toggle-label { display: none; }
    }

    /* --- CONVERTER --- */
    .swap-button {
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        padding: 0;
        font-size: 1.25rem;
    }

    .converter-error {
        margin: 0.5rem 0 0 0;
        font-size: 0.75rem;
        color: var(--pico-del-color);
    }

    button.wide {
        width: 100%;
        border-radius: 999px;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "CurrencyConverter" }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{converter_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let user_prefs = use_hook(|| {
        let prefs = UserPrefs::from_env();
        dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
        prefs
    });

    rsx! {
        LoadedApp {
            app_state: AppState::new(user_prefs),
        }
    }
}

/// Owns all view state and runs the reactive pipeline.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let theme = use_theme();
    use_context_provider(|| theme);

    let converter_state = use_converter(
        app_state.prefs.default_pair(),
        app_state.prefs.default_amount(),
        app_state.provider.clone(),
    );
    use_number_locale(converter_state.locale);

    rsx! {
        ThemedRoot {
            mode: *theme.mode.read(),
            div {
                class: "site-title",
                "CurrencyConverter"
            }
            ThemeToggle {}
            div {
                class: "app-main-container",
                Container {
                    ConverterScreen {}
                }
            }
        }
    }
}

/// Carries the current mode as a `data-theme` attribute so Pico variables
/// resolve for this subtree as well as for the root element.
#[component]
fn ThemedRoot(mode: ThemePreference, children: Element) -> Element {
    let class = if mode.is_dark() { "dark" } else { "" };

    rsx! {
        div {
            class: "{class}",
            "data-theme": mode.as_str(),
            {children}
        }
    }
}
