//! Core Module - Business Logic
//!
//! The evaluation pipeline: feature encoding, scaling and scoring, plus
//! the rule-based score banding.

pub mod encoder;
pub mod evaluator;
pub mod risk_band;

pub use encoder::*;
pub use evaluator::*;
pub use risk_band::*;
