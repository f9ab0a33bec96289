use crate::grading::{ContractorMetrics, GradingConfig, GradingEngine};

pub(super) fn grading_config() -> GradingConfig {
    GradingConfig::default()
}

pub(super) fn grading_engine() -> GradingEngine {
    GradingEngine::new(grading_config())
}

pub(super) fn diamond_metrics() -> ContractorMetrics {
    ContractorMetrics {
        completed_jobs_count: 120,
        average_rating: 4.7,
        photo_quality_score: 4.9,
        response_time_minutes: 25,
        on_time_rate: 98.0,
        satisfaction_rate: 95.0,
    }
}

pub(super) fn gold_metrics() -> ContractorMetrics {
    ContractorMetrics {
        completed_jobs_count: 30,
        average_rating: 4.1,
        photo_quality_score: 3.8,
        response_time_minutes: 45,
        on_time_rate: 88.0,
        satisfaction_rate: 82.0,
    }
}

pub(super) fn struggling_metrics() -> ContractorMetrics {
    ContractorMetrics {
        completed_jobs_count: 8,
        average_rating: 3.2,
        photo_quality_score: 2.8,
        response_time_minutes: 95,
        on_time_rate: 65.0,
        satisfaction_rate: 70.0,
    }
}

pub(super) fn zero_metrics() -> ContractorMetrics {
    ContractorMetrics {
        completed_jobs_count: 0,
        average_rating: 0.0,
        photo_quality_score: 0.0,
        response_time_minutes: 0,
        on_time_rate: 0.0,
        satisfaction_rate: 0.0,
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
