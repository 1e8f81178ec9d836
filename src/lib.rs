//! Credit Sentry Library
//!
//! Bad-debt prediction engine: turns a flat applicant credit record into a
//! binary Bad/Good decision plus an independent rule-based risk band, using
//! a pre-trained classifier bundled in an external model artifact.
//!
//! Pipeline: record → drop-first one-hot encoding → schema alignment →
//! standard scaling → logistic scoring → 0.3-threshold decision.

pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::config::EvaluatorConfig;
pub use crate::core::encoder::encode;
pub use crate::core::evaluator::RiskEvaluator;
pub use crate::core::risk_band::RiskBand;
pub use crate::models::artifact::{LogisticModel, ModelArtifact, StandardScaler};
pub use crate::models::errors::{AppError, AppResult, ErrorCode};
pub use crate::models::record::ApplicantRecord;
pub use crate::models::types::{Decision, Evaluation};
