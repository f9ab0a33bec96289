use super::common::*;
use crate::grading::{GradeLevel, GradingConfig, GradingEngine};

#[test]
fn top_performer_reaches_diamond() {
    let engine = grading_engine();

    assert_eq!(engine.determine_level(&diamond_metrics()), GradeLevel::Diamond);
}

#[test]
fn metrics_exactly_on_diamond_thresholds_reach_diamond() {
    let engine = grading_engine();
    let threshold = engine
        .config()
        .threshold_for(GradeLevel::Diamond)
        .expect("diamond threshold configured")
        .clone();
    let mut metrics = zero_metrics();
    metrics.completed_jobs_count = threshold.min_completed_jobs;
    metrics.average_rating = threshold.min_average_rating;
    metrics.photo_quality_score = threshold.min_photo_quality;
    metrics.response_time_minutes = threshold.max_response_time_minutes;
    metrics.on_time_rate = threshold.min_on_time_rate;
    metrics.satisfaction_rate = threshold.min_satisfaction_rate;

    assert_eq!(engine.determine_level(&metrics), GradeLevel::Diamond);
}

#[test]
fn all_zero_metrics_stay_bronze() {
    let engine = grading_engine();

    assert_eq!(engine.determine_level(&zero_metrics()), GradeLevel::Bronze);
}

#[test]
fn struggling_contractor_stays_bronze() {
    let engine = grading_engine();

    assert_eq!(
        engine.determine_level(&struggling_metrics()),
        GradeLevel::Bronze
    );
}

#[test]
fn every_condition_must_hold_for_a_level() {
    let engine = grading_engine();
    let mut metrics = diamond_metrics();
    metrics.response_time_minutes = 35;

    assert_eq!(engine.determine_level(&metrics), GradeLevel::Platinum);
}

#[test]
fn mid_tier_contractor_lands_on_gold() {
    let engine = grading_engine();

    assert_eq!(engine.determine_level(&gold_metrics()), GradeLevel::Gold);
}

#[test]
fn unmeasured_response_time_blocks_every_upgrade() {
    let engine = grading_engine();
    let mut metrics = diamond_metrics();
    metrics.response_time_minutes = 0;

    assert_eq!(engine.determine_level(&metrics), GradeLevel::Bronze);
}

#[test]
fn injected_tables_change_classification() {
    let mut config = GradingConfig::default();
    for threshold in &mut config.thresholds {
        threshold.min_completed_jobs = 0;
        threshold.min_average_rating = 0.0;
        threshold.min_photo_quality = 0.0;
        threshold.max_response_time_minutes = u32::MAX;
        threshold.min_on_time_rate = 0.0;
        threshold.min_satisfaction_rate = 0.0;
    }
    let engine = GradingEngine::new(config);

    assert_eq!(
        engine.determine_level(&struggling_metrics()),
        GradeLevel::Diamond
    );
}

#[test]
fn grade_levels_are_ordered_and_chain_to_the_next() {
    assert!(GradeLevel::Bronze < GradeLevel::Diamond);
    assert_eq!(GradeLevel::Gold.next(), Some(GradeLevel::Platinum));
    assert_eq!(GradeLevel::Diamond.next(), None);
    assert_eq!(GradeLevel::clamped(9), GradeLevel::Diamond);
    assert_eq!(GradeLevel::clamped(-2), GradeLevel::Bronze);
    assert!(GradeLevel::try_from(0).is_err());
}
