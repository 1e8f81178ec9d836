//! Applicant Record - the flat input contract
//!
//! One record per evaluation request, no identity or persistence.
//! Wire field names are preserved exactly as the upstream training data
//! named them (mixed-case bureau extract columns), so a record serialized
//! here is byte-compatible with the original intake payload.
//!
//! Categorical fields are typed enums over their fixed enumerations. The
//! first listed variant of each enum is the drop-first reference category:
//! it encodes to no dummy column. Out-of-enumeration strings are rejected
//! at deserialization, not silently absorbed.

use serde::{Deserialize, Serialize};

use crate::models::errors::AppResult;
use crate::utils::constants::numeric_domain;

// ============================================
// CATEGORICAL ENUMERATIONS
// ============================================

/// Residential status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Residential {
    Owned,
    Rented,
    #[serde(rename = "Living_With_Family")]
    LivingWithFamily,
    Missing,
}

impl Residential {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owned => "Owned",
            Self::Rented => "Rented",
            Self::LivingWithFamily => "Living_With_Family",
            Self::Missing => "Missing",
        }
    }

    /// Dummy column under drop-first encoding (reference: Owned)
    pub fn dummy_column(&self) -> Option<String> {
        match self {
            Self::Owned => None,
            other => Some(format!("RESIDENTIAL_{}", other.as_str())),
        }
    }
}

/// Occupation as recorded by the bureau
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupation {
    #[serde(rename = "employed")]
    Employed,
    #[serde(rename = "self_employed")]
    SelfEmployed,
    #[serde(rename = "student")]
    Student,
    #[serde(rename = "retired")]
    Retired,
    #[serde(rename = "unemployed")]
    Unemployed,
    Missing,
}

impl Occupation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employed => "employed",
            Self::SelfEmployed => "self_employed",
            Self::Student => "student",
            Self::Retired => "retired",
            Self::Unemployed => "unemployed",
            Self::Missing => "Missing",
        }
    }

    /// Dummy column under drop-first encoding (reference: employed)
    pub fn dummy_column(&self) -> Option<String> {
        match self {
            Self::Employed => None,
            other => Some(format!("CD_OCCUPATION_{}", other.as_str())),
        }
    }
}

/// Identity document type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocType {
    #[serde(rename = "AU Passport")]
    AuPassport,
    #[serde(rename = "AU Driver Licence")]
    AuDriverLicence,
    Missing,
}

impl DocType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuPassport => "AU Passport",
            Self::AuDriverLicence => "AU Driver Licence",
            Self::Missing => "Missing",
        }
    }

    /// Dummy column under drop-first encoding (reference: AU Passport)
    pub fn dummy_column(&self) -> Option<String> {
        match self {
            Self::AuPassport => None,
            other => Some(format!("DOC_TYPE_{}", other.as_str())),
        }
    }
}

/// Employment status declared by the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployedStatus {
    #[serde(rename = "employed")]
    Employed,
    #[serde(rename = "self_employed")]
    SelfEmployed,
    #[serde(rename = "student")]
    Student,
    #[serde(rename = "retired")]
    Retired,
    #[serde(rename = "unemployed")]
    Unemployed,
    #[serde(rename = "benefits")]
    Benefits,
    Missing,
}

impl EmployedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employed => "employed",
            Self::SelfEmployed => "self_employed",
            Self::Student => "student",
            Self::Retired => "retired",
            Self::Unemployed => "unemployed",
            Self::Benefits => "benefits",
            Self::Missing => "Missing",
        }
    }

    /// Dummy column under drop-first encoding (reference: employed)
    pub fn dummy_column(&self) -> Option<String> {
        match self {
            Self::Employed => None,
            other => Some(format!("EMPLOYED_STATUS_{}", other.as_str())),
        }
    }
}

/// Applicant age band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "18-24")]
    Age18To24,
    #[serde(rename = "25-29")]
    Age25To29,
    #[serde(rename = "30-34")]
    Age30To34,
    #[serde(rename = "35-44")]
    Age35To44,
    #[serde(rename = "45-54")]
    Age45To54,
    #[serde(rename = "54+")]
    Age54Plus,
}

impl AgeBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age18To24 => "18-24",
            Self::Age25To29 => "25-29",
            Self::Age30To34 => "30-34",
            Self::Age35To44 => "35-44",
            Self::Age45To54 => "45-54",
            Self::Age54Plus => "54+",
        }
    }

    /// Dummy column under drop-first encoding (reference: 18-24)
    pub fn dummy_column(&self) -> Option<String> {
        match self {
            Self::Age18To24 => None,
            other => Some(format!("APPLICANT_AGE_{}", other.as_str())),
        }
    }
}

/// Bureau default amount band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BureauDefault {
    Missing,
    #[serde(rename = "1-1000")]
    UpTo1000,
    #[serde(rename = "1000+")]
    Over1000,
}

impl BureauDefault {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "Missing",
            Self::UpTo1000 => "1-1000",
            Self::Over1000 => "1000+",
        }
    }

    /// Dummy column under drop-first encoding (reference: Missing)
    pub fn dummy_column(&self) -> Option<String> {
        match self {
            Self::Missing => None,
            other => Some(format!("BUREAU_DEFAULT_{}", other.as_str())),
        }
    }
}

/// Scorecard the application was routed through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scorecard {
    #[serde(rename = "TAR1A")]
    Tar1a,
    #[serde(rename = "SFJR1A")]
    Sfjr1a,
    #[serde(rename = "HSHSOL")]
    Hshsol,
    #[serde(rename = "CTSDP")]
    Ctsdp,
    #[serde(rename = "INSLV")]
    Inslv,
}

impl Scorecard {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tar1a => "TAR1A",
            Self::Sfjr1a => "SFJR1A",
            Self::Hshsol => "HSHSOL",
            Self::Ctsdp => "CTSDP",
            Self::Inslv => "INSLV",
        }
    }

    /// Dummy column under drop-first encoding (reference: TAR1A)
    pub fn dummy_column(&self) -> Option<String> {
        match self {
            Self::Tar1a => None,
            other => Some(format!("SCORECARD_{}", other.as_str())),
        }
    }
}

/// Bureau enquiries in the last 12 months, banded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnquiryBand {
    #[serde(rename = "1-2")]
    OneToTwo,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4-5")]
    FourToFive,
    #[serde(rename = "6-7")]
    SixToSeven,
    #[serde(rename = "8-11")]
    EightToEleven,
    #[serde(rename = "12+")]
    TwelvePlus,
    #[serde(rename = "14+")]
    FourteenPlus,
}

impl EnquiryBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneToTwo => "1-2",
            Self::Three => "3",
            Self::FourToFive => "4-5",
            Self::SixToSeven => "6-7",
            Self::EightToEleven => "8-11",
            Self::TwelvePlus => "12+",
            Self::FourteenPlus => "14+",
        }
    }

    /// Dummy column under drop-first encoding (reference: 1-2)
    pub fn dummy_column(&self) -> Option<String> {
        match self {
            Self::OneToTwo => None,
            other => Some(format!("BUREAU_ENQUIRIES_12_MONTHS_{}", other.as_str())),
        }
    }
}

// ============================================
// APPLICANT RECORD
// ============================================

/// Flat applicant record, one per evaluation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    /// Bureau credit score (the only field allowed to go negative)
    #[serde(rename = "SCORE_CR22")]
    pub score_cr22: i64,
    #[serde(rename = "DEROGATORIES")]
    pub derogatories: i64,
    #[serde(rename = "CREDIT_CARD_CR22")]
    pub credit_card_cr22: i64,
    #[serde(rename = "DEFAULT_CNT_CR22")]
    pub default_cnt_cr22: i64,
    #[serde(rename = "Late_Payment_30DPD_Last_12M")]
    pub late_payment_30dpd_last_12m: i64,
    #[serde(rename = "Late_Payment_30DPD_Last_24M")]
    pub late_payment_30dpd_last_24m: i64,
    #[serde(rename = "DEFAULT_OPEN_CNT_CR22")]
    pub default_open_cnt_cr22: i64,
    #[serde(rename = "Credit_Card_Payment_Failure_Count")]
    pub credit_card_payment_failure_count: i64,
    #[serde(rename = "Recent_Payment_Irregularity_Flag")]
    pub recent_payment_irregularity_flag: i64,
    #[serde(rename = "Long_Term_Payment_Delinquency_Count")]
    pub long_term_payment_delinquency_count: i64,
    #[serde(rename = "RESIDENTIAL")]
    pub residential: Residential,
    #[serde(rename = "CD_OCCUPATION")]
    pub cd_occupation: Occupation,
    #[serde(rename = "DOC_TYPE")]
    pub doc_type: DocType,
    #[serde(rename = "EMPLOYED_STATUS")]
    pub employed_status: EmployedStatus,
    #[serde(rename = "APPLICANT_AGE")]
    pub applicant_age: AgeBand,
    #[serde(rename = "BUREAU_DEFAULT")]
    pub bureau_default: BureauDefault,
    #[serde(rename = "SCORECARD")]
    pub scorecard: Scorecard,
    #[serde(rename = "BUREAU_ENQUIRIES_12_MONTHS")]
    pub bureau_enquiries_12_months: EnquiryBand,
}

impl ApplicantRecord {
    /// Numeric fields as (wire name, value) pairs, in declaration order
    pub fn numeric_fields(&self) -> [(&'static str, i64); 10] {
        [
            ("SCORE_CR22", self.score_cr22),
            ("DEROGATORIES", self.derogatories),
            ("CREDIT_CARD_CR22", self.credit_card_cr22),
            ("DEFAULT_CNT_CR22", self.default_cnt_cr22),
            ("Late_Payment_30DPD_Last_12M", self.late_payment_30dpd_last_12m),
            ("Late_Payment_30DPD_Last_24M", self.late_payment_30dpd_last_24m),
            ("DEFAULT_OPEN_CNT_CR22", self.default_open_cnt_cr22),
            (
                "Credit_Card_Payment_Failure_Count",
                self.credit_card_payment_failure_count,
            ),
            (
                "Recent_Payment_Irregularity_Flag",
                self.recent_payment_irregularity_flag,
            ),
            (
                "Long_Term_Payment_Delinquency_Count",
                self.long_term_payment_delinquency_count,
            ),
        ]
    }

    /// Dummy columns emitted by the categorical fields under drop-first
    /// encoding. Reference categories emit nothing.
    pub fn dummy_columns(&self) -> Vec<String> {
        [
            self.residential.dummy_column(),
            self.cd_occupation.dummy_column(),
            self.doc_type.dummy_column(),
            self.employed_status.dummy_column(),
            self.applicant_age.dummy_column(),
            self.bureau_default.dummy_column(),
            self.scorecard.dummy_column(),
            self.bureau_enquiries_12_months.dummy_column(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Range-check numeric fields against their declared domains.
    ///
    /// The original intake form clamped these at the widget level; a JSON
    /// surface has no such guardrail, so the boundary enforces it instead.
    /// Called by the input surface, not by the evaluation path.
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in self.numeric_fields() {
            if let Some((min, max)) = numeric_domain(field) {
                if value < min || value > max {
                    return Err(crate::models::errors::AppError::record_out_of_range(
                        field, value, min, max,
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn baseline_record() -> ApplicantRecord {
        ApplicantRecord {
            score_cr22: 650,
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

    #[test]
    fn test_reference_categories_emit_no_dummies() {
        let record = baseline_record();
        assert!(record.dummy_columns().is_empty());
    }

    #[test]
    fn test_dummy_column_naming() {
        let mut record = baseline_record();
        record.residential = Residential::Rented;
        record.doc_type = DocType::AuDriverLicence;
        record.bureau_enquiries_12_months = EnquiryBand::TwelvePlus;

        let dummies = record.dummy_columns();
        assert_eq!(
            dummies,
            vec![
                "RESIDENTIAL_Rented".to_string(),
                "DOC_TYPE_AU Driver Licence".to_string(),
                "BUREAU_ENQUIRIES_12_MONTHS_12+".to_string(),
            ]
        );
    }

    #[test]
    fn test_wire_names_round_trip() {
        let record = baseline_record();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"SCORE_CR22\":650"));
        assert!(json.contains("\"RESIDENTIAL\":\"Owned\""));
        assert!(json.contains("\"APPLICANT_AGE\":\"18-24\""));

        let parsed: ApplicantRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_out_of_enumeration_rejected() {
        let mut value = serde_json::to_value(baseline_record()).unwrap();
        value["RESIDENTIAL"] = serde_json::Value::String("Houseboat".to_string());
        assert!(serde_json::from_value::<ApplicantRecord>(value).is_err());
    }

    #[test]
    fn test_validate_ranges() {
        let mut record = baseline_record();
        assert!(record.validate().is_ok());

        record.derogatories = 21;
        let err = record.validate().unwrap_err();
        assert_eq!(err.code_str(), "RECORD_OUT_OF_RANGE");

        record.derogatories = 0;
        record.score_cr22 = -301;
        assert!(record.validate().is_err());

        // Negative credit score inside the domain is fine
        record.score_cr22 = -300;
        assert!(record.validate().is_ok());
    }
}
