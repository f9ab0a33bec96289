use std::sync::Arc;

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::fees::{FeeCalculationResult, GradeFeeTier, UpgradeBenefit, UrgencyTier};
use crate::grading::{ContractorMetrics, GradeAnalysis, GradeLevel};
use crate::service::{ContractorQuote, PricingService};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeFeeRequest {
    pub total_amount: f64,
    pub base_percent: f64,
    pub level: GradeLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrgencyFeeRequest {
    pub total_amount: f64,
    pub urgency: UrgencyTier,
    pub level: GradeLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeRequest {
    pub current_level: GradeLevel,
    pub target_level: u8,
    pub base_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractorQuoteRequest {
    pub metrics: ContractorMetrics,
    pub total_amount: f64,
    pub urgency: UrgencyTier,
}

/// JSON body extractor whose rejections render as `AppError` payloads.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Router builder exposing the grading and fee calculators over HTTP.
pub fn pricing_router(service: Arc<PricingService>) -> Router {
    Router::new()
        .route("/api/v1/grading/analyze", post(analyze_handler))
        .route("/api/v1/grades", get(grade_schedule_handler))
        .route("/api/v1/fees/calculate", post(grade_fee_handler))
        .route("/api/v1/fees/urgency", post(urgency_fee_handler))
        .route("/api/v1/fees/upgrade", post(upgrade_handler))
        .route("/api/v1/quotes", post(quote_handler))
        .with_state(service)
}

pub(crate) async fn analyze_handler(
    State(service): State<Arc<PricingService>>,
    JsonBody(metrics): JsonBody<ContractorMetrics>,
) -> Result<Json<GradeAnalysis>, AppError> {
    Ok(Json(service.analyze_contractor(&metrics)?))
}

pub(crate) async fn grade_schedule_handler(
    State(service): State<Arc<PricingService>>,
) -> Json<Vec<GradeFeeTier>> {
    Json(service.grade_schedule())
}

pub(crate) async fn grade_fee_handler(
    State(service): State<Arc<PricingService>>,
    JsonBody(request): JsonBody<GradeFeeRequest>,
) -> Result<Json<FeeCalculationResult>, AppError> {
    let result =
        service.calculate_grade_fee(request.total_amount, request.base_percent, request.level)?;
    Ok(Json(result))
}

pub(crate) async fn urgency_fee_handler(
    State(service): State<Arc<PricingService>>,
    JsonBody(request): JsonBody<UrgencyFeeRequest>,
) -> Result<Json<FeeCalculationResult>, AppError> {
    let result =
        service.calculate_urgency_grade_fee(request.total_amount, request.urgency, request.level)?;
    Ok(Json(result))
}

pub(crate) async fn upgrade_handler(
    State(service): State<Arc<PricingService>>,
    JsonBody(request): JsonBody<UpgradeRequest>,
) -> Json<UpgradeBenefit> {
    Json(service.upgrade_benefit(
        request.current_level,
        request.target_level,
        request.base_percent,
    ))
}

pub(crate) async fn quote_handler(
    State(service): State<Arc<PricingService>>,
    JsonBody(request): JsonBody<ContractorQuoteRequest>,
) -> Result<Json<ContractorQuote>, AppError> {
    let quote =
        service.quote_for_contractor(&request.metrics, request.total_amount, request.urgency)?;
    Ok(Json(quote))
}
