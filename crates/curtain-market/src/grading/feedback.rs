use super::config::FeedbackThresholds;
use super::domain::Locale;
use super::rules::SubScore;

#[derive(Debug, Default, PartialEq)]
pub(crate) struct Feedback {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Labels each sub-score crossing a cut-off, keeping the order of `scores`.
pub(crate) fn classify(
    scores: &[SubScore],
    thresholds: &FeedbackThresholds,
    locale: Locale,
) -> Feedback {
    let mut feedback = Feedback::default();

    for sub in scores {
        if sub.score >= thresholds.strength_min {
            feedback
                .strengths
                .push(sub.metric.strength_label(locale).to_string());
        } else if sub.score < thresholds.improvement_below {
            feedback
                .improvements
                .push(sub.metric.improvement_label(locale).to_string());
        }
    }

    feedback
}
