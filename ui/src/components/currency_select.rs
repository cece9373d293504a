//! Currency picker with icons.

#![allow(non_snake_case)]

use api::currency_code::CurrencyCode;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

const EUR_ICON: Asset = asset!("/assets/eur.svg");
const INR_ICON: Asset = asset!("/assets/inr.svg");

pub fn currency_icon(code: CurrencyCode) -> Asset {
    match code {
        CurrencyCode::EUR => EUR_ICON,
        CurrencyCode::INR => INR_ICON,
    }
}

#[component]
fn CurrencyLabel(code: CurrencyCode) -> Element {
    rsx! {
        span {
            style: "display: flex; align-items: center; gap: 0.5rem;",
            img {
                src: currency_icon(code),
                alt: "{code}",
                style: "height: 1rem; width: 1rem; border-radius: 50%;",
            }
            span { style: "font-size: 0.875rem; font-weight: 500;", "{code}" }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CurrencySelectProps {
    /// The currently selected currency.
    pub selected: CurrencyCode,
    /// Called with the chosen currency. Not called when the menu is dismissed.
    pub on_select: EventHandler<CurrencyCode>,
    /// Accessible name of the trigger, e.g. "From currency".
    pub label: String,
}

/// A dropdown listing every supported currency with its icon.
pub fn CurrencySelect(props: CurrencySelectProps) -> Element {
    let mut is_open = use_signal(|| false);
    let selected = props.selected;

    rsx! {
        div {
            style: "position: relative; width: 8rem; flex-shrink: 0;",
            div {
                class: "secondary",
                role: "button",
                "aria-haspopup": "listbox",
                "aria-expanded": "{is_open()}",
                "aria-label": "{props.label}",
                title: "{selected.name()}",
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.375rem 0.75rem;
                    border-radius: 0.75rem;
                    background-color: var(--pico-secondary-background);
                    cursor: pointer;
                ",
                onclick: move |_| is_open.toggle(),
                CurrencyLabel { code: selected }
                span { "↓" }
            }
            if is_open() {
                // Backdrop to catch clicks outside the dropdown
                div {
                    style: "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: 9; background: transparent;",
                    onclick: move |_| is_open.set(false),
                }
                ul {
                    role: "listbox",
                    // Stop click propagation to prevent the backdrop from closing the dropdown
                    onclick: |e| e.stop_propagation(),
                    style: "
                        position: absolute;
                        min-width: 100%;
                        z-index: 10;
                        list-style: none;
                        background-color: var(--pico-card-background-color);
                        border: 1px solid var(--pico-card-border-color);
                        border-radius: var(--pico-border-radius);
                        padding: 0.5rem;
                        margin: 0.25rem 0 0 0;
                    ",
                    for code in CurrencyCode::iter() {
                        li {
                            key: "{code}",
                            role: "option",
                            "aria-selected": "{code == selected}",
                            style: "display: flex; align-items: center; cursor: pointer; padding: 0.3rem; white-space: nowrap;",
                            onclick: move |_| {
                                props.on_select.call(code);
                                is_open.set(false);
                            },
                            span {
                                style: if code == selected { "width: 1.5rem;" } else { "width: 1.5rem; visibility: hidden;" },
                                "✓"
                            }
                            CurrencyLabel { code }
                        }
                    }
                }
            }
        }
    }
}
