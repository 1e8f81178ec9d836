//! Configuration module for Credit Sentry
//! Handles the artifact location and the fixed decision rule parameters

use std::path::PathBuf;

use crate::utils::constants::{
    BAD_CLASS_INDEX, DECISION_THRESHOLD, DEFAULT_ARTIFACT_PATH, ENV_ARTIFACT_PATH,
};

/// Configuration for the evaluator context
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Location of the serialized model artifact
    pub artifact_path: PathBuf,
    /// Probability threshold for the Bad decision
    pub threshold: f64,
    /// Classifier output index of the bad class
    pub bad_class: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            artifact_path: std::env::var(ENV_ARTIFACT_PATH)
                .unwrap_or_else(|_| DEFAULT_ARTIFACT_PATH.to_string())
                .into(),
            threshold: DECISION_THRESHOLD,
            bad_class: BAD_CLASS_INDEX,
        }
    }
}

impl EvaluatorConfig {
    /// Environment-independent config with the trained decision rule.
    /// Used where the artifact is supplied directly (tests, embedding).
    pub fn fixed() -> Self {
        Self {
            artifact_path: DEFAULT_ARTIFACT_PATH.into(),
            threshold: DECISION_THRESHOLD,
            bad_class: BAD_CLASS_INDEX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_config_matches_trained_rule() {
        let config = EvaluatorConfig::fixed();
        assert_eq!(config.threshold, 0.3);
        assert_eq!(config.bad_class, 1);
    }
}
