//! Defines the mutable, reactive state for the converter view.

use api::conversion_pair::ConversionPair;
use api::currency_code::CurrencyCode;
use api::number_format::NumberLocale;
use api::prefs::theme_preference::ThemePreference;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::converter;
use crate::rate_fetch::RateFetchState;

/// A reactive state provided as a Dioxus context for the converter.
///
/// The pair lives in one signal so a swap is a single write. Rate, error and
/// loading flag live together in `fetch`, which only the rate fetcher and the
/// Convert action write to.
#[derive(Clone, Copy)]
pub struct ConverterState {
    pub pair: Signal<ConversionPair>,
    pub amount: Signal<String>,
    pub fetch: Signal<RateFetchState>,
    /// Text of the "Converted to" field.
    pub result: Signal<String>,
    /// Number formatting rules, replaced once the display language is known.
    pub locale: Signal<NumberLocale>,
}

impl ConverterState {
    pub fn select_source(&mut self, code: CurrencyCode) {
        let next = self.pair.peek().with_source(code);
        self.pair.set(next);
    }

    pub fn select_target(&mut self, code: CurrencyCode) {
        let next = self.pair.peek().with_target(code);
        self.pair.set(next);
    }

    /// Exchanges source and target in one write and blanks the result until
    /// the new pair's rate arrives.
    pub fn swap(&mut self) {
        self.pair.with_mut(|pair| *pair = pair.swapped());
        self.result.set(String::new());
    }

    /// The Convert button. Conversion is already live, so this only validates.
    pub fn convert(&mut self) {
        match converter::validate_amount(&self.amount.peek()) {
            Ok(amount) => debug!("convert requested for valid amount {}", amount),
            Err(e) => self.fetch.write().report(e),
        }
    }
}

/// The page theme, owned by the top-level view.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub mode: Signal<ThemePreference>,
}
