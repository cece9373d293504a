//! This crate contains the platform-neutral converter domain: currencies,
//! pairs, rates, the rate service client, number formatting and preferences.

pub mod conversion_pair;
pub mod currency_code;
pub mod error;
mod http;
pub mod number_format;
pub mod prefs;
pub mod rate;
pub mod rate_providers;

pub use error::RateError;
pub use error::UserError;
