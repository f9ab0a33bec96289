mod config;
mod domain;
mod feedback;
mod rules;

#[cfg(test)]
mod tests;

pub use config::{
    FeedbackThresholds, GradingConfig, LevelThreshold, NormalizationBounds, ScoreWeights,
};
pub use domain::{ContractorMetrics, GradeInfo, GradeLevel, Locale, MetricKind};
pub use rules::{GapBound, ThresholdGap};

use crate::config::TableError;
use crate::error::InvalidInput;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless classifier that applies the grading tables to contractor metrics.
#[derive(Debug, Clone)]
pub struct GradingEngine {
    config: GradingConfig,
}

impl Default for GradingEngine {
    fn default() -> Self {
        Self::new(GradingConfig::default())
    }
}

impl GradingEngine {
    /// Builds an engine over tables the caller has already validated.
    pub fn new(config: GradingConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "grading tables must validate");
        Self { config }
    }

    pub fn try_new(config: GradingConfig) -> Result<Self, TableError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GradingConfig {
        &self.config
    }

    /// Highest level whose every threshold holds, falling back to Bronze.
    pub fn determine_level(&self, metrics: &ContractorMetrics) -> GradeLevel {
        self.config
            .thresholds
            .iter()
            .filter(|threshold| rules::meets_threshold(metrics, threshold))
            .map(|threshold| threshold.level)
            .max()
            .unwrap_or(GradeLevel::Bronze)
    }

    pub fn calculate_weighted_score(&self, metrics: &ContractorMetrics) -> f64 {
        let scores = rules::sub_scores(metrics, &self.config.normalization);
        rules::weighted_score(&scores, &self.config.weights)
    }

    pub fn analyze(&self, metrics: &ContractorMetrics) -> Result<GradeAnalysis, InvalidInput> {
        metrics.validate()?;

        let locale = self.config.locale;
        let current_level = self.determine_level(metrics);
        let scores = rules::sub_scores(metrics, &self.config.normalization);
        let weighted_score = rules::weighted_score(&scores, &self.config.weights);
        let feedback = feedback::classify(&scores, &self.config.feedback, locale);

        let next_level = current_level.next();
        let next_level_gaps = next_level
            .and_then(|level| self.config.threshold_for(level))
            .map(|threshold| rules::unmet_requirements(metrics, threshold))
            .unwrap_or_default();

        debug!(
            level = current_level.level(),
            weighted_score,
            strengths = feedback.strengths.len(),
            improvements = feedback.improvements.len(),
            "contractor metrics graded"
        );

        Ok(GradeAnalysis {
            current_level,
            current_grade: current_level.info(locale),
            weighted_score,
            display_score: round_to_tenth(weighted_score),
            next_level,
            next_grade: next_level.map(|level| level.info(locale)),
            strengths: feedback.strengths,
            improvements: feedback.improvements,
            next_level_gaps,
        })
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Grade, composite score, and feedback for one set of metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeAnalysis {
    pub current_level: GradeLevel,
    pub current_grade: GradeInfo,
    pub weighted_score: f64,
    pub display_score: f64,
    pub next_level: Option<GradeLevel>,
    pub next_grade: Option<GradeInfo>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub next_level_gaps: Vec<ThresholdGap>,
}
