//! Risk Band Classification
//!
//! Pure rule-based banding of the raw bureau credit score, independent of
//! the trained classifier. Displayed alongside the model decision as a
//! second interpretability signal.

use serde::{Deserialize, Serialize};

use crate::utils::constants::{HIGH_RISK_MAX, MEDIUM_RISK_MAX, VERY_HIGH_RISK_MAX};

/// Score-derived risk band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    /// score <= 500
    VeryHighRisk,
    /// score <= 607
    HighRisk,
    /// score <= 715
    MediumRisk,
    /// score > 715
    LowRisk,
}

impl RiskBand {
    /// Band for a raw credit score. Boundaries are closed on the upper side.
    pub fn from_score(score: i64) -> Self {
        if score <= VERY_HIGH_RISK_MAX {
            Self::VeryHighRisk
        } else if score <= HIGH_RISK_MAX {
            Self::HighRisk
        } else if score <= MEDIUM_RISK_MAX {
            Self::MediumRisk
        } else {
            Self::LowRisk
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryHighRisk => "Very High Risk",
            Self::HighRisk => "High Risk",
            Self::MediumRisk => "Medium Risk",
            Self::LowRisk => "Low Risk",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::VeryHighRisk => "💀",
            Self::HighRisk => "🔴",
            Self::MediumRisk => "🟠",
            Self::LowRisk => "✅",
        }
    }

    /// Color code for display surfaces
    pub fn color_code(&self) -> &'static str {
        match self {
            Self::VeryHighRisk => "#7c2d12",
            Self::HighRisk => "#ef4444",
            Self::MediumRisk => "#f97316",
            Self::LowRisk => "#22c55e",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_exact() {
        assert_eq!(RiskBand::from_score(500), RiskBand::VeryHighRisk);
        assert_eq!(RiskBand::from_score(501), RiskBand::HighRisk);
        assert_eq!(RiskBand::from_score(607), RiskBand::HighRisk);
        assert_eq!(RiskBand::from_score(608), RiskBand::MediumRisk);
        assert_eq!(RiskBand::from_score(715), RiskBand::MediumRisk);
        assert_eq!(RiskBand::from_score(716), RiskBand::LowRisk);
    }

    #[test]
    fn test_negative_scores_band_very_high() {
        // No explicit lower bound: the form's domain floor is -300
        assert_eq!(RiskBand::from_score(-300), RiskBand::VeryHighRisk);
        assert_eq!(RiskBand::from_score(0), RiskBand::VeryHighRisk);
    }

    #[test]
    fn test_band_labels() {
        assert_eq!(RiskBand::from_score(650).as_str(), "Medium Risk");
        assert_eq!(RiskBand::from_score(1200).as_str(), "Low Risk");
    }
}
