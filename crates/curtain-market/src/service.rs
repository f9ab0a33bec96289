use std::sync::Arc;

use crate::config::{PricingTables, TableError};
use crate::error::InvalidInput;
use crate::fees::{
    FeeCalculationResult, FeeEngine, GradeFeeTier, UpgradeBenefit, UrgencyTier, UrgentFeeQuote,
};
use crate::grading::{ContractorMetrics, GradeAnalysis, GradeLevel, GradingEngine};

/// Facade pairing the grading and fee engines built from one set of tables.
#[derive(Debug, Clone)]
pub struct PricingService {
    grading: Arc<GradingEngine>,
    fees: Arc<FeeEngine>,
}

impl Default for PricingService {
    fn default() -> Self {
        Self::from_tables(PricingTables::default())
    }
}

impl PricingService {
    pub fn new(grading: GradingEngine, fees: FeeEngine) -> Self {
        Self {
            grading: Arc::new(grading),
            fees: Arc::new(fees),
        }
    }

    pub fn from_tables(tables: PricingTables) -> Self {
        let PricingTables { grading, fees } = tables;
        Self::new(GradingEngine::new(grading), FeeEngine::new(fees))
    }

    pub fn try_from_tables(tables: PricingTables) -> Result<Self, TableError> {
        let PricingTables { grading, fees } = tables;
        Ok(Self::new(
            GradingEngine::try_new(grading)?,
            FeeEngine::try_new(fees)?,
        ))
    }

    pub fn grading(&self) -> &GradingEngine {
        &self.grading
    }

    pub fn fees(&self) -> &FeeEngine {
        &self.fees
    }

    pub fn analyze_contractor(
        &self,
        metrics: &ContractorMetrics,
    ) -> Result<GradeAnalysis, InvalidInput> {
        self.grading.analyze(metrics)
    }

    pub fn calculate_grade_fee(
        &self,
        total_amount: f64,
        base_percent: f64,
        level: GradeLevel,
    ) -> Result<FeeCalculationResult, InvalidInput> {
        self.fees.calculate(total_amount, base_percent, level)
    }

    pub fn calculate_urgency_grade_fee(
        &self,
        total_amount: f64,
        urgency: UrgencyTier,
        level: GradeLevel,
    ) -> Result<FeeCalculationResult, InvalidInput> {
        self.fees
            .calculate_urgency_grade_fee(total_amount, urgency, level)
    }

    pub fn urgent_fee_quote(&self, urgency: UrgencyTier, level: GradeLevel) -> UrgentFeeQuote {
        self.fees.calculate_urgent_fee_by_level(urgency, level)
    }

    pub fn upgrade_benefit(
        &self,
        current: GradeLevel,
        target_level: u8,
        base_percent: f64,
    ) -> UpgradeBenefit {
        self.fees
            .calculate_upgrade_benefit(current, target_level, base_percent)
    }

    pub fn grade_schedule(&self) -> Vec<GradeFeeTier> {
        self.fees.grade_schedule()
    }

    /// Grades a contractor and prices a job at the resulting level in one pass.
    pub fn quote_for_contractor(
        &self,
        metrics: &ContractorMetrics,
        total_amount: f64,
        urgency: UrgencyTier,
    ) -> Result<ContractorQuote, InvalidInput> {
        let analysis = self.grading.analyze(metrics)?;
        let fee = self.fees.calculate_urgency_grade_fee(
            total_amount,
            urgency,
            analysis.current_level,
        )?;
        Ok(ContractorQuote { analysis, fee })
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContractorQuote {
    pub analysis: GradeAnalysis,
    pub fee: FeeCalculationResult,
}
