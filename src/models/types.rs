//! Type definitions for Credit Sentry
//! Core data structures for evaluation results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::risk_band::RiskBand;

/// Binary credit decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Acceptable risk
    Good,
    /// Flagged as likely bad debt
    Bad,
}

impl Decision {
    /// Apply the decision rule: Bad iff probability_bad >= threshold.
    /// The boundary value itself is Bad.
    pub fn from_probability(probability_bad: f64, threshold: f64) -> Self {
        if probability_bad >= threshold {
            Self::Bad
        } else {
            Self::Good
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Bad => "Bad",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Good => "✅",
            Self::Bad => "🔴",
        }
    }
}

/// Result of one applicant evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// Probability mass the classifier assigns to the bad class
    pub probability_bad: f64,
    /// Thresholded decision
    pub decision: Decision,
    /// Rule-based band from the raw credit score, independent of the model
    pub risk_band: RiskBand,
    /// Raw credit score the band was derived from
    pub credit_score: i64,
    /// Timestamp of evaluation
    pub timestamp: DateTime<Utc>,
}

impl Evaluation {
    /// Pretty print the evaluation result.
    ///
    /// Shows decision and band only; the raw probability is carried in the
    /// struct for logging/serialization but is not part of the display,
    /// matching the original interface.
    pub fn summary(&self) -> String {
        let mut output = format!(
            "\n{} Decision: {}\n",
            self.decision.emoji(),
            self.decision.as_str()
        );
        output.push_str(&format!(
            "   Credit Score Band: {} {} (score {})\n",
            self.risk_band.emoji(),
            self.risk_band.as_str(),
            self.credit_score
        ));
        output
    }
}
