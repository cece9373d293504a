//! Shared building blocks of the converter view.
pub mod amount_field;
pub mod currency_select;
pub mod pico;
pub mod rate_display;
pub mod theme_toggle;
