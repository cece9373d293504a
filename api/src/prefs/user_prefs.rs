use super::pref_var;
use super::rate_service::RateServicePrefs;
use crate::conversion_pair::ConversionPair;
use crate::currency_code::CurrencyCode;
use crate::error::PrefsError;
use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;

/// Represents all startup prefs for the converter.
///
/// # Environment Variables
/// - `RATE_API_URL`: base URL of the rate service.
/// - `CONVERTER_FROM` / `CONVERTER_TO`: initial currencies, e.g. "eur", "INR".
/// - `CONVERTER_AMOUNT`: initial amount text.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    rate_service: RateServicePrefs,
    default_pair: ConversionPair,
    default_amount: String,
}

impl UserPrefs {
    pub const DEFAULT_AMOUNT: &'static str = "1";

    pub fn from_env() -> Self {
        let fallback = ConversionPair::default();
        let source = currency_or(pref_var!("CONVERTER_FROM"), fallback.source);
        let target = currency_or(pref_var!("CONVERTER_TO"), fallback.target);

        Self {
            rate_service: RateServicePrefs::from_env(),
            default_pair: ConversionPair::new(source, target),
            default_amount: pref_var!("CONVERTER_AMOUNT")
                .unwrap_or_else(|| Self::DEFAULT_AMOUNT.to_string()),
        }
    }

    pub fn rate_service(&self) -> &RateServicePrefs {
        &self.rate_service
    }

    pub fn default_pair(&self) -> ConversionPair {
        self.default_pair
    }

    pub fn default_amount(&self) -> &str {
        &self.default_amount
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Parses a configured currency code.
pub fn parse_currency(s: &str) -> Result<CurrencyCode, PrefsError> {
    CurrencyCode::from_str(s.trim()).map_err(|_| PrefsError::UnknownCurrency(s.to_string()))
}

fn currency_or(value: Option<String>, fallback: CurrencyCode) -> CurrencyCode {
    match value.as_deref().map(parse_currency) {
        Some(Ok(code)) => code,
        Some(Err(e)) => {
            warn!("ignoring currency preference: {}", e);
            fallback
        }
        None => fallback,
    }
}
