//! The ordered (source, target) pair that keys a rate fetch.

use crate::currency_code::CurrencyCode;
use serde::Deserialize;
use serde::Serialize;

/// An ordered pair of currencies. Two pairs are the same fetch key exactly when
/// they compare equal.
///
/// Source and target may be the same currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversionPair {
    pub source: CurrencyCode,
    pub target: CurrencyCode,
}

impl ConversionPair {
    pub fn new(source: CurrencyCode, target: CurrencyCode) -> Self {
        Self { source, target }
    }

    /// The pair with source and target exchanged.
    pub fn swapped(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }

    pub fn with_source(self, source: CurrencyCode) -> Self {
        Self { source, ..self }
    }

    pub fn with_target(self, target: CurrencyCode) -> Self {
        Self { target, ..self }
    }

    pub fn is_identity(&self) -> bool {
        self.source == self.target
    }
}

impl Default for ConversionPair {
    fn default() -> Self {
        Self::new(CurrencyCode::EUR, CurrencyCode::INR)
    }
}

impl std::fmt::Display for ConversionPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.source, self.target)
    }
}
