use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;
use crate::grading::{GradeInfo, GradeLevel};

/// Service-speed class a seller picks for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    Low,
    Medium,
    High,
    Urgent,
    Emergency,
}

impl UrgencyTier {
    pub const ALL: [UrgencyTier; 5] = [
        UrgencyTier::Low,
        UrgencyTier::Medium,
        UrgencyTier::High,
        UrgencyTier::Urgent,
        UrgencyTier::Emergency,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UrgencyTier::Low => "low",
            UrgencyTier::Medium => "medium",
            UrgencyTier::High => "high",
            UrgencyTier::Urgent => "urgent",
            UrgencyTier::Emergency => "emergency",
        }
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrgencyTier {
    type Err = InvalidInput;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        UrgencyTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == normalized)
            .ok_or_else(|| InvalidInput::new("urgency", format!("unknown urgency tier '{value}'")))
    }
}

/// Currency amounts derived from a job total, in whole currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub base_fee: f64,
    pub final_fee: f64,
    pub discount_amount: f64,
    pub savings_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeCalculationResult {
    pub base_percent: f64,
    pub discount: f64,
    pub final_percent: f64,
    pub grade_info: GradeInfo,
    pub breakdown: FeeBreakdown,
}

/// Fee percent for an urgency tier after the grade discount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UrgentFeeQuote {
    pub urgency: UrgencyTier,
    pub level: GradeLevel,
    pub base_percent: f64,
    pub discount: f64,
    pub final_percent: f64,
}

/// Outcome of comparing fees at two grades.
///
/// `upgrade` is false when the target is not a higher valid grade, in which
/// case no further fields are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeBenefit {
    pub upgrade: bool,
    #[serde(flatten)]
    pub detail: Option<UpgradeDetail>,
}

impl UpgradeBenefit {
    pub fn not_applicable() -> Self {
        Self {
            upgrade: false,
            detail: None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        self.upgrade
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeDetail {
    pub current_grade: GradeInfo,
    pub target_grade: GradeInfo,
    pub current_fee_percent: f64,
    pub target_fee_percent: f64,
    /// Percentage points saved by reaching the target grade.
    pub fee_reduction: f64,
}

/// One row of the grade benefits table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeFeeTier {
    pub grade: GradeInfo,
    pub discount: f64,
}
