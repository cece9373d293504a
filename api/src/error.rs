//! Error types shared by the rate service and the converter view.

use thiserror::Error;

use crate::currency_code::CurrencyCode;

/// An error that can occur while retrieving a rate from the rate service.
///
/// The `Display` text carries the technical cause and is meant for logs. What the
/// user sees comes from [`RateError::user_error`].
#[derive(Error, Debug)]
pub enum RateError {
    /// The body was well-formed but held no usable rate for the target currency.
    #[error("no usable rate for {currency} in response")]
    Unavailable { currency: CurrencyCode },
    /// The service answered with a non-success HTTP status.
    #[error("rate service returned HTTP {0}")]
    Status(u16),
    /// The request never produced a response (DNS, TLS, CORS, offline, ...).
    #[error("rate request failed: {0}")]
    Transport(String),
    /// The body could not be decoded as JSON.
    #[error("malformed rate response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl RateError {
    /// Maps this error onto the category shown to the user.
    pub fn user_error(&self) -> UserError {
        match self {
            Self::Unavailable { .. } => UserError::RateUnavailable,
            Self::Status(_) | Self::Transport(_) | Self::Malformed(_) => UserError::FetchFailed,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for RateError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

/// The messages the converter can show beneath its fields.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserError {
    #[error("Rate unavailable right now. Try again later.")]
    RateUnavailable,
    #[error("Failed to fetch rates. Please try again.")]
    FetchFailed,
    /// Raised only by the explicit Convert action.
    #[error("Enter a valid number")]
    InvalidAmount,
}

impl From<&RateError> for UserError {
    fn from(e: &RateError) -> Self {
        e.user_error()
    }
}

/// An error in a configured preference value.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PrefsError {
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}
