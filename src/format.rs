//! Rounding and display precision helpers
//!
//! Derived run values are rounded to two decimals as part of their contract.
//! Everything else keeps full precision internally and is only rounded when
//! rendered through [`Precision`].

use serde::{Deserialize, Serialize, Serializer};

/// Round `value` to `decimals` places.
///
/// The exact binary value is rounded, with exact ties going to the even
/// digit, so `12.625` becomes `12.62`.
#[must_use]
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Serialize a figure rounded to two decimals.
///
/// # Errors
///
/// Propagates the serializer's error.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize_hundredths<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to(*value, Precision::Hundredths.decimals()))
}

/// Fixed display precision for a reported figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Precision {
    /// One decimal place (hours and energy totals)
    Tenths,
    /// Two decimal places (masses and per-run values)
    Hundredths,
}

impl Precision {
    /// Number of decimal places.
    #[must_use]
    pub const fn decimals(self) -> usize {
        match self {
            Self::Tenths => 1,
            Self::Hundredths => 2,
        }
    }

    /// Render a value at this precision.
    ///
    /// ```rust
    /// use degradation_ledger::format::Precision;
    ///
    /// assert_eq!(Precision::Tenths.format(58.283), "58.3");
    /// assert_eq!(Precision::Hundredths.format(-0.19), "-0.19");
    /// ```
    #[must_use]
    pub fn format(self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.decimals())
    }
}
