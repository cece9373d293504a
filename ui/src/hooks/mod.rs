pub mod use_converter;
pub mod use_live_conversion;
pub mod use_number_locale;
pub mod use_rate_fetcher;
pub mod use_theme;
