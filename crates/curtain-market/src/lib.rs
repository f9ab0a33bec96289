//! Contractor grading and grade-discounted fee calculation for the curtain
//! installation marketplace.
//!
//! Both engines are immutable after construction and take their lookup tables
//! by injection, so callers can share them behind an `Arc` and tests can swap
//! in alternate tables.

pub mod config;
pub mod error;
pub mod fees;
pub mod grading;
pub mod router;
pub mod service;
pub mod telemetry;

pub use error::{AppError, InvalidInput};
pub use fees::{FeeCalculationResult, FeeConfig, FeeEngine, UrgencyTier};
pub use grading::{ContractorMetrics, GradeAnalysis, GradeLevel, GradingConfig, GradingEngine};
pub use service::PricingService;
