//! Weight tiers and the dose bounds derived from them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Dose, Weight};

/// Weight bucket that selects the course's dose bounds.
///
/// | weight (kg) | min  | max | step |
/// |-------------|------|-----|------|
/// | < 60        | 0.1  | 4.0 | 0.1  |
/// | 60 ..= 80   | 0.2  | 7.0 | 0.2  |
/// | > 80        | 0.4  | 8.0 | 0.4  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightTier {
    /// Under 60 kg.
    Light,
    /// 60 to 80 kg inclusive.
    Standard,
    /// Over 80 kg.
    Heavy,
}

impl WeightTier {
    /// Selects the tier for a weight.
    pub fn for_weight(weight: Weight) -> Self {
        let kg = weight.kg();
        if kg < 60.0 {
            WeightTier::Light
        } else if kg <= 80.0 {
            WeightTier::Standard
        } else {
            WeightTier::Heavy
        }
    }

    /// Starting (and lowest) daily dose.
    pub fn min_dose(&self) -> Dose {
        match self {
            WeightTier::Light => Dose::from_hundredths(10),
            WeightTier::Standard => Dose::from_hundredths(20),
            WeightTier::Heavy => Dose::from_hundredths(40),
        }
    }

    /// Peak daily dose.
    pub fn max_dose(&self) -> Dose {
        match self {
            WeightTier::Light => Dose::from_hundredths(400),
            WeightTier::Standard => Dose::from_hundredths(700),
            WeightTier::Heavy => Dose::from_hundredths(800),
        }
    }

    /// Daily increment during ramp-up and decrement during ramp-down.
    pub fn step(&self) -> Dose {
        match self {
            WeightTier::Light => Dose::from_hundredths(10),
            WeightTier::Standard => Dose::from_hundredths(20),
            WeightTier::Heavy => Dose::from_hundredths(40),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WeightTier::Light => "under 60 kg",
            WeightTier::Standard => "60-80 kg",
            WeightTier::Heavy => "over 80 kg",
        }
    }
}

impl std::fmt::Display for WeightTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A user's weight together with the dose bounds of its tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    pub weight: Weight,
    pub min_dose: Dose,
    pub max_dose: Dose,
    pub step: Dose,
}

impl WeightProfile {
    /// Derives the profile from a validated weight.
    pub fn for_weight(weight: Weight) -> Self {
        let tier = WeightTier::for_weight(weight);
        Self {
            weight,
            min_dose: tier.min_dose(),
            max_dose: tier.max_dose(),
            step: tier.step(),
        }
    }

    /// Tier the weight falls in.
    pub fn tier(&self) -> WeightTier {
        WeightTier::for_weight(self.weight)
    }

    /// Number of step increments from the minimum to the peak dose.
    ///
    /// The quotient is taken on millilitre amounts and floored, so the
    /// heavy tier's `(8.0 - 0.4) / 0.4` lands on 18, not 19.
    pub fn days_to_max(&self) -> u32 {
        if self.step == Dose::ZERO || self.max_dose <= self.min_dose {
            return 0;
        }
        let span = self.max_dose.millilitres() - self.min_dose.millilitres();
        (span / self.step.millilitres()).floor() as u32
    }

    /// Total number of days in a course with these bounds.
    pub fn course_length(&self) -> u32 {
        2 * self.days_to_max() + 1
    }
}
