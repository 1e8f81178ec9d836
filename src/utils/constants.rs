//! Constants Module - Single Source of Truth
//!
//! All thresholds, domains, and configuration defaults used across the
//! application are defined here. No hardcoded values in other modules.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "CreditSentry";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// MODEL ARTIFACT
// ============================================

/// Environment variable for the model artifact path
pub const ENV_ARTIFACT_PATH: &str = "MODEL_ARTIFACT_PATH";

/// Default model artifact location (next to the binary)
pub const DEFAULT_ARTIFACT_PATH: &str = "model_artifact.json";

// ============================================
// DECISION RULE
// ============================================

/// Classifier output index holding the bad-class probability.
/// Class order is fixed at training time: index 1 = "bad".
pub const BAD_CLASS_INDEX: usize = 1;

/// Probability threshold for calling an applicant "Bad".
/// Tuned below 0.5 on purpose: the system favors flagging risk.
pub const DECISION_THRESHOLD: f64 = 0.3;

// ============================================
// RISK BAND CUTOFFS (inclusive upper bounds)
// ============================================

/// Credit scores at or below this are Very High Risk
pub const VERY_HIGH_RISK_MAX: i64 = 500;

/// Credit scores at or below this (and above Very High) are High Risk
pub const HIGH_RISK_MAX: i64 = 607;

/// Credit scores at or below this (and above High) are Medium Risk
pub const MEDIUM_RISK_MAX: i64 = 715;

// ============================================
// NUMERIC FIELD DOMAINS
// ============================================

/// Declared [min, max] domain for a numeric record field.
/// Mirrors the input constraints of the original intake form.
pub fn numeric_domain(field: &str) -> Option<(i64, i64)> {
    match field {
        "SCORE_CR22" => Some((-300, 1200)),
        "DEROGATORIES" => Some((0, 20)),
        "CREDIT_CARD_CR22" => Some((0, 20)),
        "DEFAULT_CNT_CR22" => Some((0, 20)),
        "Late_Payment_30DPD_Last_12M" => Some((0, 50)),
        "Late_Payment_30DPD_Last_24M" => Some((0, 100)),
        "DEFAULT_OPEN_CNT_CR22" => Some((0, 20)),
        "Credit_Card_Payment_Failure_Count" => Some((0, 20)),
        "Recent_Payment_Irregularity_Flag" => Some((0, 25)),
        "Long_Term_Payment_Delinquency_Count" => Some((0, 100)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_below_half() {
        assert!(DECISION_THRESHOLD < 0.5);
    }

    #[test]
    fn test_band_cutoffs_ordered() {
        assert!(VERY_HIGH_RISK_MAX < HIGH_RISK_MAX);
        assert!(HIGH_RISK_MAX < MEDIUM_RISK_MAX);
    }

    #[test]
    fn test_numeric_domains() {
        assert_eq!(numeric_domain("SCORE_CR22"), Some((-300, 1200)));
        assert_eq!(numeric_domain("DEROGATORIES"), Some((0, 20)));
        assert_eq!(numeric_domain("NOT_A_FIELD"), None);
    }
}
