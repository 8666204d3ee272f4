//! Body weight value object (kilograms).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A strictly positive, finite body weight in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    /// Creates a Weight, returning error unless the value is finite and > 0.
    pub fn try_new(kg: f64) -> Result<Self, ValidationError> {
        if !kg.is_finite() {
            return Err(ValidationError::invalid_format(
                "weight",
                "must be a finite number",
            ));
        }
        if kg <= 0.0 {
            return Err(ValidationError::not_positive("weight", kg));
        }
        Ok(Self(kg))
    }

    /// Parses free-text user input such as `"70"` or `" 72.5 "`.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("weight"));
        }
        let kg: f64 = trimmed
            .parse()
            .map_err(|_| ValidationError::invalid_format("weight", "not a number"))?;
        Self::try_new(kg)
    }

    /// Returns the weight in kilograms.
    pub fn kg(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Weight {
    type Error = ValidationError;

    fn try_from(kg: f64) -> Result<Self, Self::Error> {
        Self::try_new(kg)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_integers_and_decimals() {
        assert_eq!(Weight::parse("70").unwrap().kg(), 70.0);
        assert_eq!(Weight::parse("72.5").unwrap().kg(), 72.5);
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(Weight::parse("  55 \n").unwrap().kg(), 55.0);
    }

    #[test]
    fn parse_rejects_non_numeric() {
        let err = Weight::parse("seventy").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(matches!(
            Weight::parse("   "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn parse_rejects_zero_and_negative() {
        assert!(matches!(
            Weight::parse("0"),
            Err(ValidationError::NotPositive { .. })
        ));
        assert!(matches!(
            Weight::parse("-5"),
            Err(ValidationError::NotPositive { .. })
        ));
    }

    #[test]
    fn parse_rejects_non_finite() {
        assert!(Weight::parse("inf").is_err());
        assert!(Weight::parse("NaN").is_err());
    }

    #[test]
    fn displays_with_one_decimal_for_whole_numbers() {
        assert_eq!(Weight::parse("70").unwrap().to_string(), "70.0");
        assert_eq!(Weight::parse("70.25").unwrap().to_string(), "70.25");
    }

    #[test]
    fn deserialize_validates() {
        assert!(serde_json::from_str::<Weight>("-1.0").is_err());
        let weight: Weight = serde_json::from_str("81.5").unwrap();
        assert_eq!(weight.kg(), 81.5);
    }
}
