use curtain_market::config::AppConfig;
use curtain_market::error::AppError;
use curtain_market::fees::UrgencyTier;
use curtain_market::grading::GradeLevel;
use curtain_market::PricingService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the engines from the configured tables, logging any override file.
pub(crate) fn pricing_service(config: &AppConfig) -> PricingService {
    if let Some(path) = &config.tables_path {
        info!(path = %path.display(), "pricing tables loaded from file");
    }
    PricingService::from_tables(config.tables.clone())
}

pub(crate) fn load_pricing_service() -> Result<PricingService, AppError> {
    let config = AppConfig::load()?;
    Ok(pricing_service(&config))
}

pub(crate) fn parse_level(raw: &str) -> Result<GradeLevel, String> {
    let level = raw
        .trim()
        .parse::<u8>()
        .map_err(|err| format!("failed to parse '{raw}' as a grade level ({err})"))?;
    GradeLevel::try_from(level).map_err(|err| err.to_string())
}

pub(crate) fn parse_urgency(raw: &str) -> Result<UrgencyTier, String> {
    raw.parse::<UrgencyTier>().map_err(|err| err.to_string())
}
