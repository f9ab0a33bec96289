use crate::infra::{load_pricing_service, parse_level, parse_urgency};
use clap::Args;
use curtain_market::error::AppError;
use curtain_market::fees::{FeeCalculationResult, UpgradeBenefit, UrgencyTier};
use curtain_market::grading::{ContractorMetrics, GapBound, GradeAnalysis, GradeLevel};
use curtain_market::service::PricingService;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Number of completed installation jobs
    #[arg(long)]
    pub(crate) jobs: u32,
    /// Average customer rating (0-5)
    #[arg(long)]
    pub(crate) rating: f64,
    /// Installation photo quality score (0-10)
    #[arg(long)]
    pub(crate) photo: f64,
    /// Typical response time in minutes (0 when not yet measured)
    #[arg(long)]
    pub(crate) response_minutes: u32,
    /// On-time arrival rate in percent
    #[arg(long)]
    pub(crate) on_time: f64,
    /// Customer satisfaction rate in percent
    #[arg(long)]
    pub(crate) satisfaction: f64,
}

#[derive(Args, Debug)]
pub(crate) struct FeeArgs {
    /// Job total in won
    #[arg(long)]
    pub(crate) total: f64,
    /// Fee percent before the grade discount
    #[arg(long)]
    pub(crate) base_percent: f64,
    /// Contractor grade (1-5)
    #[arg(long, value_parser = parse_level)]
    pub(crate) level: GradeLevel,
}

#[derive(Args, Debug)]
pub(crate) struct UrgencyFeeArgs {
    /// Job total in won
    #[arg(long)]
    pub(crate) total: f64,
    /// Urgency tier (low, medium, high, urgent, emergency)
    #[arg(long, value_parser = parse_urgency)]
    pub(crate) urgency: UrgencyTier,
    /// Contractor grade (1-5)
    #[arg(long, value_parser = parse_level)]
    pub(crate) level: GradeLevel,
}

#[derive(Args, Debug)]
pub(crate) struct UpgradeArgs {
    /// Current contractor grade (1-5)
    #[arg(long, value_parser = parse_level)]
    pub(crate) current: GradeLevel,
    /// Grade to compare against
    #[arg(long)]
    pub(crate) target: u8,
    /// Fee percent before the grade discount
    #[arg(long)]
    pub(crate) base_percent: f64,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let service = load_pricing_service()?;
    let metrics = ContractorMetrics {
        completed_jobs_count: args.jobs,
        average_rating: args.rating,
        photo_quality_score: args.photo,
        response_time_minutes: args.response_minutes,
        on_time_rate: args.on_time,
        satisfaction_rate: args.satisfaction,
    };

    let analysis = service.analyze_contractor(&metrics)?;
    print!("{}", render_analysis(&analysis));
    Ok(())
}

pub(crate) fn run_fee(args: FeeArgs) -> Result<(), AppError> {
    let service = load_pricing_service()?;
    let result = service.calculate_grade_fee(args.total, args.base_percent, args.level)?;
    print!("{}", render_fee(args.total, &result));
    Ok(())
}

pub(crate) fn run_urgency_fee(args: UrgencyFeeArgs) -> Result<(), AppError> {
    let service = load_pricing_service()?;
    let result = service.calculate_urgency_grade_fee(args.total, args.urgency, args.level)?;
    println!("Urgency: {}", args.urgency);
    print!("{}", render_fee(args.total, &result));
    Ok(())
}

pub(crate) fn run_upgrade(args: UpgradeArgs) -> Result<(), AppError> {
    let service = load_pricing_service()?;
    let benefit = service.upgrade_benefit(args.current, args.target, args.base_percent);
    print!("{}", render_upgrade(&benefit));
    Ok(())
}

pub(crate) fn run_grades() -> Result<(), AppError> {
    let service = load_pricing_service()?;
    print!("{}", render_grades(&service));
    Ok(())
}

pub(crate) fn render_analysis(analysis: &GradeAnalysis) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Grade: {} (level {})\n",
        analysis.current_grade.name,
        analysis.current_level.level()
    ));
    out.push_str(&format!("{}\n", analysis.current_grade.description));
    out.push_str(&format!("Weighted score: {:.1}\n", analysis.display_score));

    match &analysis.next_grade {
        Some(next) => out.push_str(&format!(
            "Next grade: {} (level {})\n",
            next.name,
            next.level.level()
        )),
        None => out.push_str("Next grade: none (top grade reached)\n"),
    }

    push_list(&mut out, "Strengths", &analysis.strengths);
    push_list(&mut out, "Improvements", &analysis.improvements);

    if !analysis.next_level_gaps.is_empty() {
        out.push_str("\nRequirements for next grade\n");
        for gap in &analysis.next_level_gaps {
            let comparison = match gap.bound {
                GapBound::AtLeast => "at least",
                GapBound::AtMost => "at most",
            };
            out.push_str(&format!(
                "- {:?}: {} {} (currently {})\n",
                gap.metric, comparison, gap.required, gap.actual
            ));
        }
    }

    out
}

fn push_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        out.push_str(&format!("\n{title}: none\n"));
        return;
    }
    out.push_str(&format!("\n{title}\n"));
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
}

pub(crate) fn render_fee(total: f64, result: &FeeCalculationResult) -> String {
    let breakdown = &result.breakdown;
    let mut out = String::new();
    out.push_str(&format!(
        "Grade: {} (level {})\n",
        result.grade_info.name,
        result.grade_info.level.level()
    ));
    out.push_str(&format!("Job total: {total:.0}\n"));
    out.push_str(&format!(
        "Fee percent: {:.2}% -> {:.2}% (discount {:.1}%)\n",
        result.base_percent, result.final_percent, result.discount
    ));
    out.push_str(&format!("Base fee: {:.0}\n", breakdown.base_fee));
    out.push_str(&format!("Final fee: {:.0}\n", breakdown.final_fee));
    out.push_str(&format!(
        "Discount: {:.0} ({:.1}% saved)\n",
        breakdown.discount_amount, breakdown.savings_percent
    ));
    out
}

pub(crate) fn render_upgrade(benefit: &UpgradeBenefit) -> String {
    match &benefit.detail {
        Some(detail) if benefit.upgrade => format!(
            "Upgrade {} -> {}: fee {:.2}% -> {:.2}% ({:.2} points lower)\n",
            detail.current_grade.name,
            detail.target_grade.name,
            detail.current_fee_percent,
            detail.target_fee_percent,
            detail.fee_reduction
        ),
        _ => "Upgrade not applicable: target must be a higher grade up to level 5\n".to_string(),
    }
}

pub(crate) fn render_grades(service: &PricingService) -> String {
    let mut out = String::from("Grade discounts\n");
    for tier in service.grade_schedule() {
        out.push_str(&format!(
            "- {} {}: {:.1}% off\n",
            tier.grade.level.level(),
            tier.grade.name,
            tier.discount
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PricingService {
        PricingService::default()
    }

    #[test]
    fn analysis_output_lists_gaps_for_next_grade() {
        let metrics = ContractorMetrics {
            completed_jobs_count: 8,
            average_rating: 3.2,
            photo_quality_score: 2.8,
            response_time_minutes: 95,
            on_time_rate: 65.0,
            satisfaction_rate: 70.0,
        };
        let analysis = service().analyze_contractor(&metrics).expect("valid");

        let output = render_analysis(&analysis);

        assert!(output.contains("Weighted score: 49.8"));
        assert!(output.contains("Requirements for next grade"));
        assert!(output.contains("Strengths: none"));
    }

    #[test]
    fn fee_output_shows_breakdown() {
        let result = service()
            .calculate_grade_fee(1_000_000.0, 15.0, GradeLevel::Gold)
            .expect("valid");

        let output = render_fee(1_000_000.0, &result);

        assert!(output.contains("Base fee: 150000"));
        assert!(output.contains("Final fee: 135000"));
        assert!(output.contains("Discount: 15000 (10.0% saved)"));
    }

    #[test]
    fn upgrade_output_explains_non_applicable_targets() {
        let benefit = service().upgrade_benefit(GradeLevel::Gold, 2, 20.0);

        assert!(render_upgrade(&benefit).starts_with("Upgrade not applicable"));
    }

    #[test]
    fn grades_output_has_a_line_per_grade() {
        let output = render_grades(&service());

        assert_eq!(output.lines().count(), 1 + GradeLevel::ALL.len());
    }
}
