use super::*;
use crate::grading::Locale;

fn engine() -> FeeEngine {
    FeeEngine::new(FeeConfig::default())
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn discount_is_zero_at_bronze_and_never_decreases() {
    let engine = engine();

    assert_eq!(engine.grade_discount(GradeLevel::Bronze), 0.0);
    let discounts: Vec<f64> = GradeLevel::ALL
        .into_iter()
        .map(|level| engine.grade_discount(level))
        .collect();
    assert!(discounts.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn out_of_range_level_gets_no_discount() {
    let engine = engine();

    assert_eq!(engine.grade_discount_for_level(0), 0.0);
    assert_eq!(engine.grade_discount_for_level(6), 0.0);
    assert_eq!(engine.grade_discount_for_level(-3), 0.0);
    assert_eq!(engine.grade_discount_for_level(3), 10.0);
}

#[test]
fn final_percent_never_exceeds_base() {
    let engine = engine();

    for base in [0.0, 0.5, 7.25, 15.0, 35.0, 99.9] {
        for level in GradeLevel::ALL {
            let final_percent = engine.calculate_final_percent(base, level);
            assert!(final_percent <= base, "{final_percent} > {base}");
            assert!(final_percent >= 0.0);
        }
    }
}

#[test]
fn negative_or_non_finite_base_percent_clamps_to_zero() {
    let engine = engine();

    assert_eq!(engine.calculate_final_percent(-10.0, GradeLevel::Gold), 0.0);
    assert_eq!(
        engine.calculate_final_percent(f64::INFINITY, GradeLevel::Gold),
        0.0
    );
}

#[test]
fn final_percent_is_rounded_to_four_decimals() {
    let engine = engine();

    assert_eq!(engine.calculate_final_percent(33.33333, GradeLevel::Gold), 30.0);
    assert_eq!(engine.calculate_final_percent(7.25, GradeLevel::Silver), 6.8875);
}

#[test]
fn emergency_at_bronze_keeps_full_rate() {
    let engine = engine();

    let quote = engine.calculate_urgent_fee_by_level(UrgencyTier::Emergency, GradeLevel::Bronze);

    assert_eq!(quote.base_percent, 35.0);
    assert_eq!(quote.discount, 0.0);
    assert_eq!(quote.final_percent, 35.0);
}

#[test]
fn emergency_at_diamond_applies_maximum_discount() {
    let engine = engine();

    let quote = engine.calculate_urgent_fee_by_level(UrgencyTier::Emergency, GradeLevel::Diamond);

    assert!(quote.final_percent < 35.0);
    assert_eq!(quote.final_percent, 28.0);
}

#[test]
fn breakdown_for_gold_contractor() {
    let engine = engine();

    let result = engine
        .calculate(1_000_000.0, 15.0, GradeLevel::Gold)
        .expect("valid inputs");

    let discount = engine.grade_discount(GradeLevel::Gold);
    assert_eq!(result.base_percent, 15.0);
    assert_eq!(result.discount, discount);
    assert_eq!(result.final_percent, 13.5);
    assert_eq!(result.breakdown.base_fee, 150_000.0);
    assert_eq!(result.breakdown.final_fee, 150_000.0 * (1.0 - discount / 100.0));
    assert_eq!(
        result.breakdown.discount_amount,
        150_000.0 - result.breakdown.final_fee
    );
    assert!((result.breakdown.savings_percent - discount).abs() < 1e-9);
    assert_eq!(result.grade_info.level, GradeLevel::Gold);
}

#[test]
fn breakdown_adds_back_up_to_base_fee() {
    let engine = engine();

    for total in [1.0, 3.0, 333.0, 999.99, 12_345.67, 1_234_567.0] {
        for base in [3.3, 7.25, 10.0, 17.5, 35.0] {
            for level in GradeLevel::ALL {
                let result = engine.calculate(total, base, level).expect("valid inputs");
                let breakdown = result.breakdown;
                assert_close(
                    breakdown.final_fee + breakdown.discount_amount,
                    breakdown.base_fee,
                );
                assert_close(breakdown.base_fee, total * base / 100.0);
                assert_close(breakdown.savings_percent, engine.grade_discount(level));
                assert!(breakdown.discount_amount >= 0.0);
            }
        }
    }
}

#[test]
fn breakdown_keeps_fractional_fees() {
    let engine = engine();

    let gold = engine
        .calculate(10.0, 15.0, GradeLevel::Gold)
        .expect("valid inputs")
        .breakdown;
    assert_eq!(gold.base_fee, 1.5);
    assert_close(gold.final_fee, 1.35);
    assert_close(gold.discount_amount, 0.15);
    assert_close(gold.savings_percent, 10.0);

    let diamond = engine
        .calculate(3.0, 15.0, GradeLevel::Diamond)
        .expect("valid inputs")
        .breakdown;
    assert_close(diamond.base_fee, 0.45);
    assert_close(diamond.final_fee, 0.36);
    assert_close(diamond.savings_percent, 20.0);
}

#[test]
fn zero_or_negative_total_yields_empty_breakdown() {
    let engine = engine();

    for total in [0.0, -50_000.0] {
        let result = engine
            .calculate(total, 15.0, GradeLevel::Diamond)
            .expect("valid inputs");
        assert_eq!(result.breakdown, FeeBreakdown::default());
        assert_eq!(result.final_percent, 12.0);
    }
}

#[test]
fn zero_base_fee_reports_zero_savings() {
    let engine = engine();

    let result = engine
        .calculate(500_000.0, 0.0, GradeLevel::Diamond)
        .expect("valid inputs");

    assert_eq!(result.breakdown.base_fee, 0.0);
    assert_eq!(result.breakdown.savings_percent, 0.0);
}

#[test]
fn non_finite_total_is_invalid_input() {
    let engine = engine();

    let err = engine
        .calculate(f64::NAN, 15.0, GradeLevel::Gold)
        .expect_err("nan total");

    assert_eq!(err.field, "total_amount");
}

#[test]
fn urgency_grade_fee_uses_tier_base_rate() {
    let engine = engine();

    let result = engine
        .calculate_urgency_grade_fee(200_000.0, UrgencyTier::Urgent, GradeLevel::Silver)
        .expect("valid inputs");

    assert_eq!(result.base_percent, 25.0);
    assert_eq!(result.final_percent, 23.75);
    assert_eq!(result.breakdown.base_fee, 50_000.0);
    assert_eq!(result.breakdown.final_fee, 47_500.0);
}

#[test]
fn downgrade_is_not_an_upgrade() {
    let engine = engine();

    let benefit = engine.calculate_upgrade_benefit(GradeLevel::Gold, 2, 20.0);

    assert!(!benefit.is_applicable());
    assert!(benefit.detail.is_none());
}

#[test]
fn same_level_or_beyond_diamond_is_not_an_upgrade() {
    let engine = engine();

    assert!(!engine
        .calculate_upgrade_benefit(GradeLevel::Gold, 3, 20.0)
        .is_applicable());
    assert!(!engine
        .calculate_upgrade_benefit(GradeLevel::Platinum, 6, 20.0)
        .is_applicable());
}

#[test]
fn upgrade_reports_fee_at_both_levels() {
    let engine = engine();

    let benefit = engine.calculate_upgrade_benefit(GradeLevel::Silver, 5, 20.0);

    assert!(benefit.is_applicable());
    let detail = benefit.detail.expect("detail present");
    assert_eq!(detail.current_fee_percent, 19.0);
    assert_eq!(detail.target_fee_percent, 16.0);
    assert_eq!(detail.fee_reduction, 3.0);
    assert_eq!(detail.target_grade.level, GradeLevel::Diamond);
}

#[test]
fn not_applicable_upgrade_serializes_only_the_flag() {
    let value = serde_json::to_value(UpgradeBenefit::not_applicable()).expect("serializes");

    assert_eq!(value, serde_json::json!({ "upgrade": false }));
}

#[test]
fn grade_schedule_lists_every_grade() {
    let engine = FeeEngine::new(FeeConfig {
        locale: Locale::En,
        ..FeeConfig::default()
    });

    let schedule = engine.grade_schedule();

    assert_eq!(schedule.len(), 5);
    assert_eq!(schedule[0].grade.name, "Bronze");
    assert_eq!(schedule[4].discount, 20.0);
}

#[test]
fn urgency_tier_parses_case_insensitively() {
    assert_eq!(
        "Emergency".parse::<UrgencyTier>(),
        Ok(UrgencyTier::Emergency)
    );
    assert!("asap".parse::<UrgencyTier>().is_err());
}

#[test]
fn default_tables_validate() {
    FeeConfig::default()
        .validate()
        .expect("built-in fee tables are consistent");
}

#[test]
fn checked_constructor_rejects_discount_at_bronze() {
    let config = FeeConfig {
        grade_discounts: GradeDiscounts {
            bronze: 10.0,
            ..GradeDiscounts::default()
        },
        ..FeeConfig::default()
    };

    assert!(matches!(
        FeeEngine::try_new(config),
        Err(TableError::Discount { .. })
    ));
    assert!(FeeEngine::try_new(FeeConfig::default()).is_ok());
}
