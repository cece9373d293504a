use api::conversion_pair::ConversionPair;
use api::number_format::NumberLocale;
use api::rate::Rate;
use dioxus::prelude::*;

use crate::converter::rate_statement;

/// The "Mid-market exchange rate" banner. Renders nothing until a rate is known.
#[component]
pub fn RateDisplay(pair: ConversionPair, rate: Option<Rate>, locale: NumberLocale) -> Element {
    let Some(rate) = rate else {
        return rsx! {};
    };
    let statement = rate_statement(pair, rate, &locale);

    rsx! {
        div {
            style: "text-align: center; font-size: 0.875rem; color: var(--pico-muted-color);",
            div { style: "font-weight: 500;", "Mid-market exchange rate" }
            div { style: "margin-top: 0.25rem;", "{statement}" }
        }
    }
}
