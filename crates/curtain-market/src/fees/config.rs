use serde::{Deserialize, Serialize};

use super::domain::UrgencyTier;
use crate::config::TableError;
use crate::grading::{GradeLevel, Locale};

/// Rate tables for the fee engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeConfig {
    pub locale: Locale,
    pub grade_discounts: GradeDiscounts,
    pub urgency_rates: UrgencyRates,
}

impl FeeConfig {
    pub fn validate(&self) -> Result<(), TableError> {
        self.grade_discounts.validate()?;
        self.urgency_rates.validate()
    }
}

/// Percent knocked off the fee percent at each grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeDiscounts {
    pub bronze: f64,
    pub silver: f64,
    pub gold: f64,
    pub platinum: f64,
    pub diamond: f64,
}

impl Default for GradeDiscounts {
    fn default() -> Self {
        Self {
            bronze: 0.0,
            silver: 5.0,
            gold: 10.0,
            platinum: 15.0,
            diamond: 20.0,
        }
    }
}

impl GradeDiscounts {
    pub fn percent_for(&self, level: GradeLevel) -> f64 {
        match level {
            GradeLevel::Bronze => self.bronze,
            GradeLevel::Silver => self.silver,
            GradeLevel::Gold => self.gold,
            GradeLevel::Platinum => self.platinum,
            GradeLevel::Diamond => self.diamond,
        }
    }

    fn validate(&self) -> Result<(), TableError> {
        if self.bronze != 0.0 {
            return Err(TableError::Discount {
                level: GradeLevel::Bronze,
                reason: "the baseline grade carries no discount".to_string(),
            });
        }

        let mut previous = self.bronze;
        for level in GradeLevel::ALL {
            let percent = self.percent_for(level);
            if !(0.0..=100.0).contains(&percent) {
                return Err(TableError::Discount {
                    level,
                    reason: format!("{percent} is outside 0..=100"),
                });
            }
            if percent < previous {
                return Err(TableError::Discount {
                    level,
                    reason: format!("{percent} is lower than the grade below ({previous})"),
                });
            }
            previous = percent;
        }
        Ok(())
    }
}

/// Base fee percent charged per urgency tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UrgencyRates {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
    pub urgent: f64,
    pub emergency: f64,
}

impl Default for UrgencyRates {
    fn default() -> Self {
        Self {
            low: 5.0,
            medium: 10.0,
            high: 15.0,
            urgent: 25.0,
            emergency: 35.0,
        }
    }
}

impl UrgencyRates {
    pub fn percent_for(&self, tier: UrgencyTier) -> f64 {
        match tier {
            UrgencyTier::Low => self.low,
            UrgencyTier::Medium => self.medium,
            UrgencyTier::High => self.high,
            UrgencyTier::Urgent => self.urgent,
            UrgencyTier::Emergency => self.emergency,
        }
    }

    fn validate(&self) -> Result<(), TableError> {
        match UrgencyTier::ALL.into_iter().find(|tier| {
            let rate = self.percent_for(*tier);
            !rate.is_finite() || rate < 0.0
        }) {
            Some(tier) => Err(TableError::UrgencyRate(tier)),
            None => Ok(()),
        }
    }
}
