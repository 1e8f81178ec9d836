//! Risk Evaluator - the scoring pipeline
//!
//! Owns the loaded model artifact as an explicitly constructed, immutable
//! context and runs the full chain for one record: encode, scale, score,
//! threshold, band. No retries, no fallback: classifier failures propagate
//! as hard errors.

use chrono::Utc;
use tracing::debug;

use crate::config::EvaluatorConfig;
use crate::core::encoder::encode;
use crate::core::risk_band::RiskBand;
use crate::models::artifact::ModelArtifact;
use crate::models::errors::{AppError, AppResult};
use crate::models::record::ApplicantRecord;
use crate::models::types::{Decision, Evaluation};

/// Immutable evaluation context: artifact + decision configuration
pub struct RiskEvaluator {
    artifact: ModelArtifact,
    config: EvaluatorConfig,
}

impl RiskEvaluator {
    /// Build an evaluator over a validated artifact.
    ///
    /// Re-validates the artifact so contexts constructed from an in-memory
    /// artifact get the same shape guarantees as file-loaded ones.
    pub fn new(artifact: ModelArtifact, config: EvaluatorConfig) -> AppResult<Self> {
        artifact.validate()?;
        Ok(Self { artifact, config })
    }

    /// Feature schema the evaluator scores against
    pub fn features(&self) -> &[String] {
        &self.artifact.features
    }

    /// Steps 1-4 of feature preparation: encode against the schema, then
    /// standardize the designated columns in place.
    ///
    /// Assumes a structurally complete record (the typed struct guarantees
    /// it); does not re-validate field domains.
    pub fn prepare(&self, record: &ApplicantRecord) -> AppResult<Vec<f64>> {
        let mut vector = encode(record, &self.artifact.features);

        for (scaler_idx, col) in self.artifact.cols_to_scale.iter().enumerate() {
            // Membership was checked at artifact validation; a miss here
            // means the context was mutated, which the type forbids
            let feature_idx = self
                .artifact
                .feature_index(col)
                .ok_or_else(|| AppError::scaler_column_missing(col))?;
            vector[feature_idx] = self.artifact.scaler.transform_one(scaler_idx, vector[feature_idx]);
        }

        Ok(vector)
    }

    /// Score one applicant record.
    ///
    /// Deterministic: the artifact is read-only, so identical records give
    /// identical results.
    pub fn evaluate(&self, record: &ApplicantRecord) -> AppResult<Evaluation> {
        let vector = self.prepare(record)?;
        let proba = self.artifact.model.predict_proba(&vector)?;
        let probability_bad = proba[self.config.bad_class];

        let decision = Decision::from_probability(probability_bad, self.config.threshold);
        let risk_band = RiskBand::from_score(record.score_cr22);

        debug!(
            "Scored applicant: p_bad={:.4} decision={} band={}",
            probability_bad,
            decision.as_str(),
            risk_band.as_str()
        );

        Ok(Evaluation {
            probability_bad,
            decision,
            risk_band,
            credit_score: record.score_cr22,
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::artifact::{LogisticModel, StandardScaler};
    use crate::models::record::{
        AgeBand, BureauDefault, DocType, EmployedStatus, EnquiryBand, Occupation, Residential,
        Scorecard,
    };

    fn record(score: i64) -> ApplicantRecord {
        ApplicantRecord {
            score_cr22: score,
            derogatories: 0,
            credit_card_cr22: 1,
            default_cnt_cr22: 0,
            late_payment_30dpd_last_12m: 0,
            late_payment_30dpd_last_24m: 0,
            default_open_cnt_cr22: 0,
            credit_card_payment_failure_count: 0,
            recent_payment_irregularity_flag: 0,
            long_term_payment_delinquency_count: 0,
            residential: Residential::Owned,
            cd_occupation: Occupation::Employed,
            doc_type: DocType::AuPassport,
            employed_status: EmployedStatus::Employed,
            applicant_age: AgeBand::Age18To24,
            bureau_default: BureauDefault::Missing,
            scorecard: Scorecard::Tar1a,
            bureau_enquiries_12_months: EnquiryBand::OneToTwo,
        }
    }

    fn evaluator() -> RiskEvaluator {
        let artifact = ModelArtifact {
            model: LogisticModel {
                // Higher score lowers risk, rented residence raises it
                coefficients: vec![-1.2, 0.3, 0.8],
                intercept: -0.5,
            },
            features: vec![
                "SCORE_CR22".to_string(),
                "CREDIT_CARD_CR22".to_string(),
                "RESIDENTIAL_Rented".to_string(),
            ],
            scaler: StandardScaler {
                mean: vec![650.0],
                scale: vec![120.0],
            },
            cols_to_scale: vec!["SCORE_CR22".to_string()],
        };
        RiskEvaluator::new(artifact, EvaluatorConfig::fixed()).unwrap()
    }

    #[test]
    fn test_prepare_scales_designated_column_only() {
        let eval = evaluator();
        let vector = eval.prepare(&record(770)).unwrap();

        // (770 - 650) / 120 = 1.0 scaled; card count passes through raw
        assert!((vector[0] - 1.0).abs() < 1e-12);
        assert_eq!(vector[1], 1.0);
        assert_eq!(vector[2], 0.0);
    }

    #[test]
    fn test_evaluate_probability_in_unit_interval() {
        let eval = evaluator();
        let result = eval.evaluate(&record(650)).unwrap();
        assert!(result.probability_bad >= 0.0 && result.probability_bad <= 1.0);
        assert_eq!(result.risk_band, RiskBand::MediumRisk);
        assert_eq!(result.credit_score, 650);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let eval = evaluator();
        let a = eval.evaluate(&record(580)).unwrap();
        let b = eval.evaluate(&record(580)).unwrap();
        assert_eq!(a.probability_bad, b.probability_bad);
        assert_eq!(a.decision, b.decision);
        assert_eq!(a.risk_band, b.risk_band);
    }

    #[test]
    fn test_lower_score_means_higher_risk() {
        let eval = evaluator();
        let low = eval.evaluate(&record(300)).unwrap();
        let high = eval.evaluate(&record(1100)).unwrap();
        assert!(low.probability_bad > high.probability_bad);
    }

    #[test]
    fn test_band_independent_of_model() {
        let eval = evaluator();
        // Band comes from the raw score, whatever the classifier says
        assert_eq!(eval.evaluate(&record(480)).unwrap().risk_band, RiskBand::VeryHighRisk);
        assert_eq!(eval.evaluate(&record(716)).unwrap().risk_band, RiskBand::LowRisk);
    }
}
