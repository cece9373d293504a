//! Theme toggle button.

use api::prefs::theme_preference::ThemePreference;
use dioxus::prelude::*;

use crate::app_state_mut::ThemeState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;

/// Switches between light and dark mode. Offers the mode it will switch to.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<ThemeState>();
    let mode = *theme.mode.read();

    rsx! {
        Button {
            button_type: ButtonType::Secondary,
            outline: true,
            aria_label: "Toggle dark mode",
            class: "theme-toggle",
            on_click: move |_| theme.toggle(),
            match mode {
                ThemePreference::Dark => rsx! {
                    span { class: "toggle-content", SunIcon {} span { class: "toggle-label", "Light" } }
                },
                ThemePreference::Light => rsx! {
                    span { class: "toggle-content", MoonIcon {} span { class: "toggle-label", "Dark" } }
                },
            }
        }
    }
}

#[component]
fn SunIcon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "12", cy: "12", r: "5" }
            line { x1: "12", y1: "1", x2: "12", y2: "3" }
            line { x1: "12", y1: "21", x2: "12", y2: "23" }
            line { x1: "4.22", y1: "4.22", x2: "5.64", y2: "5.64" }
            line { x1: "18.36", y1: "18.36", x2: "19.78", y2: "19.78" }
            line { x1: "1", y1: "12", x2: "3", y2: "12" }
            line { x1: "21", y1: "12", x2: "23", y2: "12" }
            line { x1: "4.22", y1: "19.78", x2: "5.64", y2: "18.36" }
            line { x1: "18.36", y1: "5.64", x2: "19.78", y2: "4.22" }
        }
    }
}

#[component]
fn MoonIcon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" }
        }
    }
}
