//! Dose value object (millilitres, two-decimal precision).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A liquid dose in millilitres, held as whole hundredths of a millilitre.
///
/// Storing hundredths keeps repeated step additions exact: eighteen 0.4 mL
/// steps on top of 0.4 mL land on 7.6 mL, not 7.6000000000000005.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Dose(u32);

impl Dose {
    /// No dose.
    pub const ZERO: Self = Self(0);

    /// Creates a dose from hundredths of a millilitre (`40` is 0.4 mL).
    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    /// Creates a dose from millilitres, rounding to two decimals.
    pub fn from_millilitres(ml: f64) -> Result<Self, ValidationError> {
        if !ml.is_finite() || ml < 0.0 {
            return Err(ValidationError::invalid_format(
                "dose",
                format!("{} is not a non-negative amount", ml),
            ));
        }
        let hundredths = (ml * 100.0).round();
        if hundredths > f64::from(u32::MAX) {
            return Err(ValidationError::invalid_format("dose", "amount too large"));
        }
        Ok(Self(hundredths as u32))
    }

    /// Returns the dose in hundredths of a millilitre.
    pub fn hundredths(&self) -> u32 {
        self.0
    }

    /// Returns the dose in millilitres.
    pub fn millilitres(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Returns `self + step * times`.
    pub fn plus_steps(&self, step: Dose, times: u32) -> Self {
        Self(self.0 + step.0 * times)
    }
}

impl TryFrom<f64> for Dose {
    type Error = ValidationError;

    fn try_from(ml: f64) -> Result<Self, Self::Error> {
        Self::from_millilitres(ml)
    }
}

impl From<Dose> for f64 {
    fn from(dose: Dose) -> Self {
        dose.millilitres()
    }
}

impl fmt::Display for Dose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac % 10 == 0 {
            write!(f, "{}.{}", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}", whole, frac)
        }
    }
}
