use serde::{Deserialize, Serialize};

use super::domain::{GradeLevel, Locale, MetricKind};
use crate::config::TableError;

/// Lookup tables that drive grade classification and feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    pub locale: Locale,
    /// Minimums per level above Bronze; Bronze is the baseline every contractor holds.
    pub thresholds: Vec<LevelThreshold>,
    pub weights: ScoreWeights,
    pub normalization: NormalizationBounds,
    pub feedback: FeedbackThresholds,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            thresholds: vec![
                LevelThreshold {
                    level: GradeLevel::Silver,
                    min_completed_jobs: 5,
                    min_average_rating: 3.5,
                    min_photo_quality: 3.0,
                    max_response_time_minutes: 120,
                    min_on_time_rate: 75.0,
                    min_satisfaction_rate: 70.0,
                },
                LevelThreshold {
                    level: GradeLevel::Gold,
                    min_completed_jobs: 20,
                    min_average_rating: 4.0,
                    min_photo_quality: 3.5,
                    max_response_time_minutes: 90,
                    min_on_time_rate: 85.0,
                    min_satisfaction_rate: 80.0,
                },
                LevelThreshold {
                    level: GradeLevel::Platinum,
                    min_completed_jobs: 50,
                    min_average_rating: 4.3,
                    min_photo_quality: 4.0,
                    max_response_time_minutes: 60,
                    min_on_time_rate: 90.0,
                    min_satisfaction_rate: 85.0,
                },
                LevelThreshold {
                    level: GradeLevel::Diamond,
                    min_completed_jobs: 100,
                    min_average_rating: 4.5,
                    min_photo_quality: 4.5,
                    max_response_time_minutes: 30,
                    min_on_time_rate: 95.0,
                    min_satisfaction_rate: 90.0,
                },
            ],
            weights: ScoreWeights::default(),
            normalization: NormalizationBounds::default(),
            feedback: FeedbackThresholds::default(),
        }
    }
}

impl GradingConfig {
    pub fn threshold_for(&self, level: GradeLevel) -> Option<&LevelThreshold> {
        self.thresholds
            .iter()
            .find(|threshold| threshold.level == level)
    }

    pub fn validate(&self) -> Result<(), TableError> {
        self.weights.validate()?;
        self.normalization.validate()?;

        if self.feedback.improvement_below > self.feedback.strength_min {
            return Err(TableError::Feedback {
                strength_min: self.feedback.strength_min,
                improvement_below: self.feedback.improvement_below,
            });
        }

        if self
            .thresholds
            .iter()
            .any(|threshold| threshold.level == GradeLevel::Bronze)
        {
            return Err(TableError::BronzeThreshold);
        }

        let mut previous: Option<&LevelThreshold> = None;
        for level in GradeLevel::ALL.into_iter().skip(1) {
            let mut matching = self
                .thresholds
                .iter()
                .filter(|threshold| threshold.level == level);
            let threshold = matching.next().ok_or(TableError::MissingThreshold(level))?;
            if matching.next().is_some() {
                return Err(TableError::DuplicateThreshold(level));
            }
            if let Some(lower) = previous {
                if !threshold.is_at_least_as_strict_as(lower) {
                    return Err(TableError::ThresholdsNotMonotonic {
                        lower: lower.level,
                        higher: level,
                    });
                }
            }
            previous = Some(threshold);
        }

        Ok(())
    }
}

/// Every condition a contractor must satisfy at once to hold `level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelThreshold {
    pub level: GradeLevel,
    pub min_completed_jobs: u32,
    pub min_average_rating: f64,
    pub min_photo_quality: f64,
    pub max_response_time_minutes: u32,
    pub min_on_time_rate: f64,
    pub min_satisfaction_rate: f64,
}

impl LevelThreshold {
    /// Lower bound for `metric`; response time is bounded from above instead.
    pub fn minimum(&self, metric: MetricKind) -> Option<f64> {
        match metric {
            MetricKind::CompletedJobs => Some(f64::from(self.min_completed_jobs)),
            MetricKind::AverageRating => Some(self.min_average_rating),
            MetricKind::PhotoQuality => Some(self.min_photo_quality),
            MetricKind::ResponseTime => None,
            MetricKind::OnTimeRate => Some(self.min_on_time_rate),
            MetricKind::SatisfactionRate => Some(self.min_satisfaction_rate),
        }
    }

    fn is_at_least_as_strict_as(&self, lower: &LevelThreshold) -> bool {
        self.min_completed_jobs >= lower.min_completed_jobs
            && self.min_average_rating >= lower.min_average_rating
            && self.min_photo_quality >= lower.min_photo_quality
            && self.max_response_time_minutes <= lower.max_response_time_minutes
            && self.min_on_time_rate >= lower.min_on_time_rate
            && self.min_satisfaction_rate >= lower.min_satisfaction_rate
    }
}

/// Blend of normalized sub-scores; the weights must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub completed_jobs: f64,
    pub average_rating: f64,
    pub photo_quality: f64,
    pub response_time: f64,
    pub on_time_rate: f64,
    pub satisfaction_rate: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            completed_jobs: 0.20,
            average_rating: 0.25,
            photo_quality: 0.20,
            response_time: 0.15,
            on_time_rate: 0.10,
            satisfaction_rate: 0.10,
        }
    }
}

impl ScoreWeights {
    const SUM_TOLERANCE: f64 = 1e-6;

    pub fn weight(&self, metric: MetricKind) -> f64 {
        match metric {
            MetricKind::CompletedJobs => self.completed_jobs,
            MetricKind::AverageRating => self.average_rating,
            MetricKind::PhotoQuality => self.photo_quality,
            MetricKind::ResponseTime => self.response_time,
            MetricKind::OnTimeRate => self.on_time_rate,
            MetricKind::SatisfactionRate => self.satisfaction_rate,
        }
    }

    pub fn total(&self) -> f64 {
        MetricKind::PRIORITY
            .iter()
            .map(|metric| self.weight(*metric))
            .sum()
    }

    fn validate(&self) -> Result<(), TableError> {
        if let Some(metric) = MetricKind::PRIORITY
            .into_iter()
            .find(|metric| !(self.weight(*metric) >= 0.0))
        {
            return Err(TableError::NegativeWeight(metric));
        }

        let total = self.total();
        if (total - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(TableError::WeightsSum { total });
        }
        Ok(())
    }
}

/// Scales used to bring each raw metric onto 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationBounds {
    /// Job count that earns a full experience sub-score.
    pub completed_jobs_cap: u32,
    pub rating_scale: f64,
    pub photo_quality_scale: f64,
    /// At or below this response time the sub-score is 100.
    pub best_response_minutes: u32,
    /// At or above this response time the sub-score is 0.
    pub worst_response_minutes: u32,
}

impl Default for NormalizationBounds {
    fn default() -> Self {
        Self {
            completed_jobs_cap: 100,
            rating_scale: 5.0,
            photo_quality_scale: 5.0,
            best_response_minutes: 10,
            worst_response_minutes: 180,
        }
    }
}

impl NormalizationBounds {
    fn validate(&self) -> Result<(), TableError> {
        if self.completed_jobs_cap == 0 {
            return Err(TableError::InvalidBound("completed_jobs_cap"));
        }
        if !(self.rating_scale > 0.0) || !self.rating_scale.is_finite() {
            return Err(TableError::InvalidBound("rating_scale"));
        }
        if !(self.photo_quality_scale > 0.0) || !self.photo_quality_scale.is_finite() {
            return Err(TableError::InvalidBound("photo_quality_scale"));
        }
        if self.worst_response_minutes <= self.best_response_minutes {
            return Err(TableError::InvalidBound("worst_response_minutes"));
        }
        Ok(())
    }
}

/// Sub-score cut-offs for strengths and improvement areas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedbackThresholds {
    pub strength_min: f64,
    pub improvement_below: f64,
}

impl Default for FeedbackThresholds {
    fn default() -> Self {
        Self {
            strength_min: 80.0,
            improvement_below: 60.0,
        }
    }
}
