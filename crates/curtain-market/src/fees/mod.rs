mod config;
mod domain;

#[cfg(test)]
mod tests;

pub use config::{FeeConfig, GradeDiscounts, UrgencyRates};
pub use domain::{
    FeeBreakdown, FeeCalculationResult, GradeFeeTier, UpgradeBenefit, UpgradeDetail,
    UrgencyTier, UrgentFeeQuote,
};

use crate::config::TableError;
use crate::error::InvalidInput;
use crate::grading::GradeLevel;
use tracing::debug;

const PERCENT_DECIMALS: i32 = 4;

/// Applies grade discounts to fee percents and splits job totals into fees.
#[derive(Debug, Clone, Default)]
pub struct FeeEngine {
    config: FeeConfig,
}

impl FeeEngine {
    /// Builds an engine over tables the caller has already validated.
    pub fn new(config: FeeConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "fee tables must validate");
        Self { config }
    }

    pub fn try_new(config: FeeConfig) -> Result<Self, TableError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FeeConfig {
        &self.config
    }

    pub fn grade_discount(&self, level: GradeLevel) -> f64 {
        self.config
            .grade_discounts
            .percent_for(level)
            .clamp(0.0, 100.0)
    }

    /// Discount for an unchecked integer level; anything outside 1..=5 gets none.
    pub fn grade_discount_for_level(&self, level: i64) -> f64 {
        u8::try_from(level)
            .ok()
            .and_then(GradeLevel::from_level)
            .map(|level| self.grade_discount(level))
            .unwrap_or(0.0)
    }

    /// Discounted fee percent, never negative and never above `base_percent`.
    pub fn calculate_final_percent(&self, base_percent: f64, level: GradeLevel) -> f64 {
        let base = sanitize_percent(base_percent);
        let discount = self.grade_discount(level);
        let discounted = round_percent(base * (1.0 - discount / 100.0));
        discounted.clamp(0.0, base)
    }

    pub fn urgency_base_rate(&self, tier: UrgencyTier) -> f64 {
        sanitize_percent(self.config.urgency_rates.percent_for(tier))
    }

    pub fn calculate_urgent_fee_by_level(
        &self,
        tier: UrgencyTier,
        level: GradeLevel,
    ) -> UrgentFeeQuote {
        let base_percent = self.urgency_base_rate(tier);
        UrgentFeeQuote {
            urgency: tier,
            level,
            base_percent,
            discount: self.grade_discount(level),
            final_percent: self.calculate_final_percent(base_percent, level),
        }
    }

    pub fn calculate(
        &self,
        total_amount: f64,
        base_percent: f64,
        level: GradeLevel,
    ) -> Result<FeeCalculationResult, InvalidInput> {
        let total_amount = InvalidInput::ensure_finite("total_amount", total_amount)?;
        let base_percent =
            sanitize_percent(InvalidInput::ensure_finite("base_percent", base_percent)?);

        let discount = self.grade_discount(level);
        let final_percent = self.calculate_final_percent(base_percent, level);
        let breakdown = breakdown(total_amount, base_percent, final_percent);

        debug!(
            total_amount,
            base_percent,
            final_percent,
            level = level.level(),
            final_fee = breakdown.final_fee,
            "fee calculated"
        );

        Ok(FeeCalculationResult {
            base_percent,
            discount,
            final_percent,
            grade_info: level.info(self.config.locale),
            breakdown,
        })
    }

    pub fn calculate_urgency_grade_fee(
        &self,
        total_amount: f64,
        tier: UrgencyTier,
        level: GradeLevel,
    ) -> Result<FeeCalculationResult, InvalidInput> {
        self.calculate(total_amount, self.urgency_base_rate(tier), level)
    }

    /// Compares fee percents at `current` and `target_level`.
    ///
    /// Only a strictly higher grade no greater than Diamond is an upgrade.
    pub fn calculate_upgrade_benefit(
        &self,
        current: GradeLevel,
        target_level: u8,
        base_percent: f64,
    ) -> UpgradeBenefit {
        let target = match GradeLevel::from_level(target_level) {
            Some(target) if target > current => target,
            _ => return UpgradeBenefit::not_applicable(),
        };

        let current_fee_percent = self.calculate_final_percent(base_percent, current);
        let target_fee_percent = self.calculate_final_percent(base_percent, target);
        let locale = self.config.locale;

        UpgradeBenefit {
            upgrade: true,
            detail: Some(UpgradeDetail {
                current_grade: current.info(locale),
                target_grade: target.info(locale),
                current_fee_percent,
                target_fee_percent,
                fee_reduction: round_percent(current_fee_percent - target_fee_percent).max(0.0),
            }),
        }
    }

    pub fn grade_schedule(&self) -> Vec<GradeFeeTier> {
        GradeLevel::ALL
            .into_iter()
            .map(|level| GradeFeeTier {
                grade: level.info(self.config.locale),
                discount: self.grade_discount(level),
            })
            .collect()
    }
}

fn sanitize_percent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn round_percent(value: f64) -> f64 {
    let factor = 10f64.powi(PERCENT_DECIMALS);
    (value * factor).round() / factor
}

fn breakdown(total_amount: f64, base_percent: f64, final_percent: f64) -> FeeBreakdown {
    if total_amount <= 0.0 {
        return FeeBreakdown::default();
    }

    let base_fee = total_amount * base_percent / 100.0;
    let final_fee = (total_amount * final_percent / 100.0).min(base_fee);
    let discount_amount = base_fee - final_fee;
    let savings_percent = if base_fee > 0.0 {
        discount_amount / base_fee * 100.0
    } else {
        0.0
    };

    FeeBreakdown {
        base_fee,
        final_fee,
        discount_amount,
        savings_percent,
    }
}
