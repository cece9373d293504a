//! Provides a checked type for a mid-market exchange rate.

use std::fmt;

use serde::Serialize;

use crate::conversion_pair::ConversionPair;

/// The price of one unit of the pair's source currency in its target currency.
///
/// A `Rate` is always finite and strictly positive. Values returned by the rate
/// service that do not meet this are treated as "no rate".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rate(f64);

impl Rate {
    /// Creates a rate from a raw service value, rejecting zero, negative and
    /// non-finite numbers.
    ///
    /// # Examples
    /// ```
    /// use api::rate::Rate;
    ///
    /// assert!(Rate::new(90.12).is_some());
    /// assert!(Rate::new(0.0).is_none());
    /// ```
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Multiplies an amount in the source currency into the target currency.
    pub fn apply(&self, amount: f64) -> f64 {
        amount * self.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rate together with the pair it was quoted for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    pub pair: ConversionPair,
    pub rate: Rate,
}
