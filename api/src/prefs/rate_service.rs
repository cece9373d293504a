use serde::Deserialize;
use serde::Serialize;

use super::pref_var;

/// Where exchange rates are fetched from.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RateServicePrefs {
    base_url: String,
}

impl RateServicePrefs {
    /// **Easy toggle:** the public Frankfurter instance.
    /// This is the lowest priority setting.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.frankfurter.app";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Creates an instance from the `RATE_API_URL` variable, falling back to
    /// [`Self::DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::new(pref_var!("RATE_API_URL").unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for RateServicePrefs {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}
