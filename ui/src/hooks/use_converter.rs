use api::conversion_pair::ConversionPair;
use api::number_format::NumberLocale;
use api::rate_providers::RateProvider;
use dioxus::prelude::*;

use super::use_live_conversion::use_live_conversion;
use super::use_rate_fetcher::use_rate_fetcher;
use crate::app_state_mut::ConverterState;

/// Creates the converter signals, provides them as context and starts the
/// fetch and live-conversion pipeline against `provider`.
pub fn use_converter<P>(pair: ConversionPair, amount: &str, provider: P) -> ConverterState
where
    P: RateProvider + Clone + 'static,
{
    let pair = use_signal(|| pair);
    let amount = use_signal(|| amount.to_string());
    let fetch = use_signal(Default::default);
    let result = use_signal(String::new);
    let locale = use_signal(NumberLocale::default);

    let state = use_context_provider(|| ConverterState {
        pair,
        amount,
        fetch,
        result,
        locale,
    });

    use_rate_fetcher(state, provider);
    use_live_conversion(state);

    state
}
