use dioxus::prelude::*;

use crate::app_state_mut::ConverterState;
use crate::converter;

/// Recomputes the converted amount when the amount text or the stored rate
/// changes.
///
/// Loading and error changes do not re-run it, so a swap's cleared result stays
/// empty until the new pair's rate lands.
pub fn use_live_conversion(state: ConverterState) {
    let fetch = state.fetch;
    let amount = state.amount;
    let locale = state.locale;
    let mut result = state.result;

    let snapshot = use_memo(move || fetch.read().snapshot());

    use_effect(move || {
        let rate = snapshot().rate;
        let text = converter::convert_amount(&amount.read(), rate, &locale.read());
        result.set(text);
    });
}
