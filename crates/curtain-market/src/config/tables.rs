use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::fees::{FeeConfig, UrgencyTier};
use crate::grading::{GradeLevel, GradingConfig, MetricKind};

/// Grading and fee tables, shipped as defaults or read from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTables {
    pub grading: GradingConfig,
    pub fees: FeeConfig,
}

impl PricingTables {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::TablesRead {
            path: path.to_path_buf(),
            source,
        })?;
        let tables: PricingTables =
            serde_json::from_str(&raw).map_err(|source| ConfigError::TablesParse {
                path: path.to_path_buf(),
                source,
            })?;
        tables.validate().map_err(ConfigError::InvalidTables)?;
        Ok(tables)
    }

    pub fn validate(&self) -> Result<(), TableError> {
        self.grading.validate()?;
        self.fees.validate()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("score weights must sum to 1.0, got {total}")]
    WeightsSum { total: f64 },
    #[error("weight for {0:?} must be a non-negative number")]
    NegativeWeight(MetricKind),
    #[error("normalization bound `{0}` is not usable")]
    InvalidBound(&'static str),
    #[error("improvement cut-off {improvement_below} is above strength cut-off {strength_min}")]
    Feedback {
        strength_min: f64,
        improvement_below: f64,
    },
    #[error("Bronze is the baseline grade and takes no threshold")]
    BronzeThreshold,
    #[error("no threshold configured for {0:?}")]
    MissingThreshold(GradeLevel),
    #[error("more than one threshold configured for {0:?}")]
    DuplicateThreshold(GradeLevel),
    #[error("{higher:?} threshold is looser than {lower:?}")]
    ThresholdsNotMonotonic {
        lower: GradeLevel,
        higher: GradeLevel,
    },
    #[error("discount for {level:?} rejected: {reason}")]
    Discount { level: GradeLevel, reason: String },
    #[error("base rate for {0} urgency must be a non-negative number")]
    UrgencyRate(UrgencyTier),
}
