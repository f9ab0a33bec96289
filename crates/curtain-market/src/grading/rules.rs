use serde::{Deserialize, Serialize};

use super::config::{LevelThreshold, NormalizationBounds, ScoreWeights};
use super::domain::{ContractorMetrics, MetricKind};

const FULL_SCORE: f64 = 100.0;

/// Normalized 0–100 score of one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SubScore {
    pub metric: MetricKind,
    pub score: f64,
}

/// Direction of a threshold a contractor still has to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapBound {
    AtLeast,
    AtMost,
}

/// Requirement of the next grade that the current metrics do not meet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdGap {
    pub metric: MetricKind,
    pub bound: GapBound,
    pub required: f64,
    pub actual: f64,
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn ratio_score(value: f64, scale: f64) -> f64 {
    (finite_or_zero(value) / scale * FULL_SCORE).clamp(0.0, FULL_SCORE)
}

fn response_score(minutes: u32, bounds: &NormalizationBounds) -> f64 {
    if minutes == 0 || minutes >= bounds.worst_response_minutes {
        return 0.0;
    }
    if minutes <= bounds.best_response_minutes {
        return FULL_SCORE;
    }
    let span = f64::from(bounds.worst_response_minutes - bounds.best_response_minutes);
    f64::from(bounds.worst_response_minutes - minutes) / span * FULL_SCORE
}

pub(crate) fn sub_score(
    metrics: &ContractorMetrics,
    metric: MetricKind,
    bounds: &NormalizationBounds,
) -> f64 {
    match metric {
        MetricKind::CompletedJobs => {
            let capped = metrics.completed_jobs_count.min(bounds.completed_jobs_cap);
            f64::from(capped) / f64::from(bounds.completed_jobs_cap) * FULL_SCORE
        }
        MetricKind::AverageRating => ratio_score(metrics.average_rating, bounds.rating_scale),
        MetricKind::PhotoQuality => {
            ratio_score(metrics.photo_quality_score, bounds.photo_quality_scale)
        }
        MetricKind::ResponseTime => response_score(metrics.response_time_minutes, bounds),
        MetricKind::OnTimeRate => ratio_score(metrics.on_time_rate, FULL_SCORE),
        MetricKind::SatisfactionRate => ratio_score(metrics.satisfaction_rate, FULL_SCORE),
    }
}

pub(crate) fn sub_scores(
    metrics: &ContractorMetrics,
    bounds: &NormalizationBounds,
) -> Vec<SubScore> {
    MetricKind::PRIORITY
        .iter()
        .map(|metric| SubScore {
            metric: *metric,
            score: sub_score(metrics, *metric, bounds),
        })
        .collect()
}

pub(crate) fn weighted_score(scores: &[SubScore], weights: &ScoreWeights) -> f64 {
    let total: f64 = scores
        .iter()
        .map(|sub| sub.score * weights.weight(sub.metric))
        .sum();
    finite_or_zero(total).clamp(0.0, FULL_SCORE)
}

/// A zero response time has never been measured and fails every maximum.
fn meets_response_limit(minutes: u32, limit: u32) -> bool {
    minutes != 0 && minutes <= limit
}

pub(crate) fn meets_threshold(metrics: &ContractorMetrics, threshold: &LevelThreshold) -> bool {
    unmet_requirements(metrics, threshold).is_empty()
}

pub(crate) fn unmet_requirements(
    metrics: &ContractorMetrics,
    threshold: &LevelThreshold,
) -> Vec<ThresholdGap> {
    let mut gaps = Vec::new();

    for metric in MetricKind::PRIORITY {
        let actual = finite_or_zero(metrics.raw_value(metric));
        let gap = match threshold.minimum(metric) {
            Some(required) => (actual < required).then_some((GapBound::AtLeast, required)),
            None => (!meets_response_limit(
                metrics.response_time_minutes,
                threshold.max_response_time_minutes,
            ))
            .then_some((
                GapBound::AtMost,
                f64::from(threshold.max_response_time_minutes),
            )),
        };

        if let Some((bound, required)) = gap {
            gaps.push(ThresholdGap {
                metric,
                bound,
                required,
                actual,
            });
        }
    }

    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(response_time_minutes: u32) -> ContractorMetrics {
        ContractorMetrics {
            completed_jobs_count: 0,
            average_rating: 0.0,
            photo_quality_score: 0.0,
            response_time_minutes,
            on_time_rate: 0.0,
            satisfaction_rate: 0.0,
        }
    }

    #[test]
    fn response_score_is_linear_between_bounds() {
        let bounds = NormalizationBounds::default();
        assert_eq!(response_score(10, &bounds), 100.0);
        assert_eq!(response_score(180, &bounds), 0.0);
        assert!((response_score(95, &bounds) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn unmeasured_response_time_scores_zero() {
        let bounds = NormalizationBounds::default();
        assert_eq!(sub_score(&metrics(0), MetricKind::ResponseTime, &bounds), 0.0);
    }

    #[test]
    fn non_finite_values_count_as_zero() {
        let bounds = NormalizationBounds::default();
        let mut input = metrics(30);
        input.average_rating = f64::NAN;
        assert_eq!(sub_score(&input, MetricKind::AverageRating, &bounds), 0.0);
    }
}
