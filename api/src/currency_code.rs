//! Defines the currencies the converter can select.

use serde::Deserialize;
use serde::Serialize;

/// A currency the converter supports, with its code, glyph and display rules.
///
/// The set is closed: only the variants below can ever be selected.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum CurrencyCode {
    EUR, // Euro
    INR, // Indian Rupee
}

impl CurrencyCode {
    /// Returns the graphical symbol for the currency (e.g., '€').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::EUR => "€",
            Self::INR => "₹",
        }
    }

    /// Returns the ISO 4217 string code for the currency (e.g., "EUR").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EUR => "Euro",
            Self::INR => "Indian Rupee",
        }
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
