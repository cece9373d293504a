//! Defines traits and implementations for external exchange rate providers.

use crate::conversion_pair::ConversionPair;
use crate::error::RateError;
use crate::rate::Quote;

/// A trait for any service that can quote a mid-market rate for a pair.
pub trait RateProvider {
    /// Fetches the latest rate for `pair`, bypassing any HTTP cache.
    async fn get_rate(&self, pair: ConversionPair) -> Result<Quote, RateError>;
}

/// Provides rates from the public Frankfurter API.
pub mod frankfurter {
    use super::*;
    use crate::currency_code::CurrencyCode;
    use crate::prefs::rate_service::RateServicePrefs;
    use crate::rate::Rate;
    use serde_json::Value;

    /// An implementation of the `RateProvider` trait for Frankfurter.
    #[derive(Clone, Debug, PartialEq)]
    pub struct Frankfurter {
        base_url: String,
    }

    impl Frankfurter {
        pub fn new(prefs: &RateServicePrefs) -> Self {
            Self {
                base_url: prefs.base_url().trim_end_matches('/').to_string(),
            }
        }

        /// The `latest` endpoint for a pair, e.g.
        /// `https://api.frankfurter.app/latest?from=EUR&to=INR`.
        pub fn latest_url(&self, pair: ConversionPair) -> String {
            format!(
                "{}/latest?from={}&to={}",
                self.base_url, pair.source, pair.target
            )
        }
    }

    impl Default for Frankfurter {
        fn default() -> Self {
            Self::new(&RateServicePrefs::default())
        }
    }

    impl RateProvider for Frankfurter {
        async fn get_rate(&self, pair: ConversionPair) -> Result<Quote, RateError> {
            let url = self.latest_url(pair);
            let (status, body) = crate::http::get_uncached(&url).await?;
            let rate = parse_rate_body(status, &body, pair.target)?;
            Ok(Quote { pair, rate })
        }
    }

    /// Interprets a response from the `latest` endpoint.
    ///
    /// Non-2xx statuses and bodies that are not JSON are failures. A JSON body that
    /// has no positive number at `rates[target]` means the rate is unavailable.
    pub fn parse_rate_body(status: u16, body: &str, target: CurrencyCode) -> Result<Rate, RateError> {
        if !(200..300).contains(&status) {
            return Err(RateError::Status(status));
        }

        let resp: Value = serde_json::from_str(body)?;

        // The structure for a rate is: resp["rates"][target_code]
        resp.get("rates")
            .and_then(|rates| rates.get(target.code()))
            .and_then(Value::as_f64)
            .and_then(Rate::new)
            .ok_or(RateError::Unavailable { currency: target })
    }
}

#[cfg(test)]
mod tests {
    use super::frankfurter::*;
    use crate::conversion_pair::ConversionPair;
    use crate::currency_code::CurrencyCode;
    use crate::error::RateError;
    use crate::error::UserError;
    use crate::prefs::rate_service::RateServicePrefs;

    #[test]
    fn builds_latest_url_for_pair() {
        let provider = Frankfurter::new(&RateServicePrefs::new("https://rates.test/"));
        let pair = ConversionPair::new(CurrencyCode::EUR, CurrencyCode::INR);
        assert_eq!(
            provider.latest_url(pair),
            "https://rates.test/latest?from=EUR&to=INR"
        );
    }

    #[test]
    fn default_provider_targets_frankfurter() {
        let pair = ConversionPair::new(CurrencyCode::INR, CurrencyCode::EUR);
        assert_eq!(
            Frankfurter::default().latest_url(pair),
            "https://api.frankfurter.app/latest?from=INR&to=EUR"
        );
    }

    #[test]
    fn reads_rate_for_target() {
        let rate = parse_rate_body(200, r#"{"amount":1.0,"base":"EUR","rates":{"INR":90.12}}"#, CurrencyCode::INR)
            .unwrap();
        assert_eq!(rate.value(), 90.12);
    }

    #[test]
    fn integer_rate_is_numeric() {
        let rate = parse_rate_body(200, r#"{"rates":{"INR":90}}"#, CurrencyCode::INR).unwrap();
        assert_eq!(rate.value(), 90.0);
    }

    #[test]
    fn empty_rates_is_unavailable() {
        let err = parse_rate_body(200, r#"{"rates":{}}"#, CurrencyCode::INR).unwrap_err();
        assert!(matches!(err, RateError::Unavailable { currency: CurrencyCode::INR }));
        assert_eq!(err.user_error(), UserError::RateUnavailable);
    }

    #[test]
    fn non_numeric_or_missing_rates_are_unavailable() {
        for body in [
            r#"{"rates":{"INR":"90"}}"#,
            r#"{"rates":{"EUR":1}}"#,
            r#"{"message":"not found"}"#,
            r#"[]"#,
            r#"{"rates":{"INR":0}}"#,
        ] {
            let err = parse_rate_body(200, body, CurrencyCode::INR).unwrap_err();
            assert_eq!(err.user_error(), UserError::RateUnavailable, "body: {body}");
        }
    }

    #[test]
    fn bad_status_is_failure() {
        let err = parse_rate_body(404, r#"{"rates":{"INR":90}}"#, CurrencyCode::INR).unwrap_err();
        assert!(matches!(err, RateError::Status(404)));
        assert_eq!(err.user_error(), UserError::FetchFailed);
    }

    #[test]
    fn malformed_body_is_failure() {
        let err = parse_rate_body(200, "<html>oops</html>", CurrencyCode::INR).unwrap_err();
        assert!(matches!(err, RateError::Malformed(_)));
        assert_eq!(err.user_error(), UserError::FetchFailed);
    }
}
