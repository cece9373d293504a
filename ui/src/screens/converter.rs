//=============================================================================
// File: src/screens/converter.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state_mut::ConverterState;
use crate::components::amount_field::AmountField;
use crate::components::currency_select::CurrencySelect;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::rate_display::RateDisplay;

#[component]
pub fn ConverterScreen() -> Element {
    let mut state = use_context::<ConverterState>();

    let pair = (state.pair)();
    let fetch = state.fetch.read();
    let rate = fetch.rate();
    let loading = fetch.is_loading();
    let error = fetch.error();
    drop(fetch);

    let result_placeholder = if loading { "Fetching rate..." } else { "0.00" };

    rsx! {
        Card {
            div {
                style: "display: flex; flex-direction: column; gap: 1.5rem;",

                RateDisplay {
                    pair,
                    rate,
                    locale: (state.locale)(),
                }

                AmountField {
                    label: "Amount",
                    value: (state.amount)(),
                    placeholder: "0.00",
                    on_input: move |text: String| state.amount.set(text),
                    CurrencySelect {
                        label: "From currency",
                        selected: pair.source,
                        on_select: move |code| state.select_source(code),
                    }
                }

                div {
                    style: "display: flex; justify-content: center;",
                    button {
                        r#type: "button",
                        class: "swap-button",
                        "aria-label": "Swap",
                        onclick: move |_| state.swap(),
                        "⇄"
                    }
                }

                div {
                    AmountField {
                        label: "Converted to",
                        value: (state.result)(),
                        placeholder: result_placeholder.to_string(),
                        CurrencySelect {
                            label: "To currency",
                            selected: pair.target,
                            on_select: move |code| state.select_target(code),
                        }
                    }
                    if let Some(error) = error {
                        p {
                            class: "converter-error",
                            role: "alert",
                            "{error}"
                        }
                    }
                }

                div {
                    style: "display: flex; flex-direction: column; gap: 0.75rem;",
                    Button {
                        button_type: ButtonType::Primary,
                        class: "wide",
                        disabled: loading || rate.is_none(),
                        on_click: move |_| state.convert(),
                        "Convert"
                    }
                    // No tracking backend yet; the button is present but inert.
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        class: "wide",
                        "Track exchange rate"
                    }
                }
            }
        }
    }
}
