use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// Raw performance figures pulled from a contractor record.
///
/// Every field is required; callers cannot hand in a partially filled record.
/// A `response_time_minutes` of zero means no response has been measured yet
/// and is graded as the slowest possible response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractorMetrics {
    pub completed_jobs_count: u32,
    pub average_rating: f64,
    pub photo_quality_score: f64,
    pub response_time_minutes: u32,
    pub on_time_rate: f64,
    pub satisfaction_rate: f64,
}

impl ContractorMetrics {
    pub const MAX_RATING: f64 = 5.0;
    pub const MAX_PHOTO_QUALITY: f64 = 10.0;
    pub const MAX_RATE: f64 = 100.0;

    /// Checks each real-valued field against its documented domain.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        InvalidInput::ensure_within("average_rating", self.average_rating, 0.0, Self::MAX_RATING)?;
        InvalidInput::ensure_within(
            "photo_quality_score",
            self.photo_quality_score,
            0.0,
            Self::MAX_PHOTO_QUALITY,
        )?;
        InvalidInput::ensure_within("on_time_rate", self.on_time_rate, 0.0, Self::MAX_RATE)?;
        InvalidInput::ensure_within(
            "satisfaction_rate",
            self.satisfaction_rate,
            0.0,
            Self::MAX_RATE,
        )?;
        Ok(())
    }

    pub(crate) fn raw_value(&self, metric: MetricKind) -> f64 {
        match metric {
            MetricKind::CompletedJobs => f64::from(self.completed_jobs_count),
            MetricKind::AverageRating => self.average_rating,
            MetricKind::PhotoQuality => self.photo_quality_score,
            MetricKind::ResponseTime => f64::from(self.response_time_minutes),
            MetricKind::OnTimeRate => self.on_time_rate,
            MetricKind::SatisfactionRate => self.satisfaction_rate,
        }
    }
}

/// Language used for grade names and feedback labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
}

/// Contractor tier, ordered from Bronze (1) to Diamond (5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GradeLevel {
    Bronze = 1,
    Silver = 2,
    Gold = 3,
    Platinum = 4,
    Diamond = 5,
}

impl GradeLevel {
    pub const ALL: [GradeLevel; 5] = [
        GradeLevel::Bronze,
        GradeLevel::Silver,
        GradeLevel::Gold,
        GradeLevel::Platinum,
        GradeLevel::Diamond,
    ];

    pub const MAX: GradeLevel = GradeLevel::Diamond;

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(GradeLevel::Bronze),
            2 => Some(GradeLevel::Silver),
            3 => Some(GradeLevel::Gold),
            4 => Some(GradeLevel::Platinum),
            5 => Some(GradeLevel::Diamond),
            _ => None,
        }
    }

    /// Snaps an arbitrary integer onto the nearest valid level.
    pub fn clamped(level: i64) -> Self {
        let bounded = level.clamp(1, i64::from(Self::MAX.level()));
        Self::from_level(bounded as u8).unwrap_or(GradeLevel::Bronze)
    }

    pub fn next(self) -> Option<Self> {
        Self::from_level(self.level() + 1)
    }

    pub fn name(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (GradeLevel::Bronze, Locale::Ko) => "브론즈",
            (GradeLevel::Silver, Locale::Ko) => "실버",
            (GradeLevel::Gold, Locale::Ko) => "골드",
            (GradeLevel::Platinum, Locale::Ko) => "플래티넘",
            (GradeLevel::Diamond, Locale::Ko) => "다이아몬드",
            (GradeLevel::Bronze, Locale::En) => "Bronze",
            (GradeLevel::Silver, Locale::En) => "Silver",
            (GradeLevel::Gold, Locale::En) => "Gold",
            (GradeLevel::Platinum, Locale::En) => "Platinum",
            (GradeLevel::Diamond, Locale::En) => "Diamond",
        }
    }

    pub fn description(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (GradeLevel::Bronze, Locale::Ko) => "활동을 시작한 신규 시공 파트너",
            (GradeLevel::Silver, Locale::Ko) => "안정적인 시공 경험을 쌓아가는 파트너",
            (GradeLevel::Gold, Locale::Ko) => "검증된 품질을 갖춘 숙련 파트너",
            (GradeLevel::Platinum, Locale::Ko) => "높은 만족도를 꾸준히 유지하는 우수 파트너",
            (GradeLevel::Diamond, Locale::Ko) => "최상위 성과를 보여주는 최고 등급 파트너",
            (GradeLevel::Bronze, Locale::En) => "New installation partner getting started",
            (GradeLevel::Silver, Locale::En) => "Partner building steady installation experience",
            (GradeLevel::Gold, Locale::En) => "Skilled partner with proven quality",
            (GradeLevel::Platinum, Locale::En) => "Top partner with consistently high satisfaction",
            (GradeLevel::Diamond, Locale::En) => "Highest tier partner with outstanding results",
        }
    }

    pub fn info(self, locale: Locale) -> GradeInfo {
        GradeInfo {
            level: self,
            name: self.name(locale).to_string(),
            description: self.description(locale).to_string(),
        }
    }
}

impl From<GradeLevel> for u8 {
    fn from(value: GradeLevel) -> Self {
        value.level()
    }
}

impl TryFrom<u8> for GradeLevel {
    type Error = InvalidInput;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        GradeLevel::from_level(value)
            .ok_or_else(|| InvalidInput::new("level", format!("{value} is not a grade between 1 and 5")))
    }
}

/// Display record for a grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeInfo {
    pub level: GradeLevel,
    pub name: String,
    pub description: String,
}

/// Graded metrics in the fixed order feedback is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    CompletedJobs,
    AverageRating,
    PhotoQuality,
    ResponseTime,
    OnTimeRate,
    SatisfactionRate,
}

impl MetricKind {
    pub const PRIORITY: [MetricKind; 6] = [
        MetricKind::CompletedJobs,
        MetricKind::AverageRating,
        MetricKind::PhotoQuality,
        MetricKind::ResponseTime,
        MetricKind::OnTimeRate,
        MetricKind::SatisfactionRate,
    ];

    pub fn strength_label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (MetricKind::CompletedJobs, Locale::Ko) => "풍부한 시공 경험",
            (MetricKind::AverageRating, Locale::Ko) => "높은 고객 평점",
            (MetricKind::PhotoQuality, Locale::Ko) => "우수한 시공 사진 품질",
            (MetricKind::ResponseTime, Locale::Ko) => "빠른 응답 속도",
            (MetricKind::OnTimeRate, Locale::Ko) => "철저한 일정 준수",
            (MetricKind::SatisfactionRate, Locale::Ko) => "높은 고객 만족도",
            (MetricKind::CompletedJobs, Locale::En) => "Extensive installation experience",
            (MetricKind::AverageRating, Locale::En) => "High customer rating",
            (MetricKind::PhotoQuality, Locale::En) => "Excellent installation photos",
            (MetricKind::ResponseTime, Locale::En) => "Fast response time",
            (MetricKind::OnTimeRate, Locale::En) => "Reliable on-time arrival",
            (MetricKind::SatisfactionRate, Locale::En) => "High customer satisfaction",
        }
    }

    pub fn improvement_label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (MetricKind::CompletedJobs, Locale::Ko) => "시공 실적을 더 쌓아야 합니다",
            (MetricKind::AverageRating, Locale::Ko) => "고객 평점 개선이 필요합니다",
            (MetricKind::PhotoQuality, Locale::Ko) => "시공 사진 품질 개선이 필요합니다",
            (MetricKind::ResponseTime, Locale::Ko) => "응답 시간을 단축해야 합니다",
            (MetricKind::OnTimeRate, Locale::Ko) => "정시 도착률 개선이 필요합니다",
            (MetricKind::SatisfactionRate, Locale::Ko) => "고객 만족도 개선이 필요합니다",
            (MetricKind::CompletedJobs, Locale::En) => "Complete more installation jobs",
            (MetricKind::AverageRating, Locale::En) => "Improve customer rating",
            (MetricKind::PhotoQuality, Locale::En) => "Improve installation photo quality",
            (MetricKind::ResponseTime, Locale::En) => "Respond to requests faster",
            (MetricKind::OnTimeRate, Locale::En) => "Improve on-time arrival rate",
            (MetricKind::SatisfactionRate, Locale::En) => "Improve customer satisfaction",
        }
    }
}
