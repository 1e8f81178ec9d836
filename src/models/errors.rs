//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code so production logs can be
//! grepped and monitored without parsing free-form messages.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - ARTIFACT_xxx: model artifact load/validation errors
//! - RECORD_xxx: applicant record input errors
//! - SCALER_xxx: scaler/schema consistency errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Artifact Errors
    // ============================================
    /// Model artifact file missing at the configured path
    ArtifactNotFound,
    /// Model artifact could not be parsed
    ArtifactParse,
    /// Model artifact internal shapes are inconsistent
    ArtifactShape,

    // ============================================
    // Record Errors
    // ============================================
    /// Applicant record could not be parsed
    RecordParse,
    /// Numeric field outside its declared domain
    RecordOutOfRange,

    // ============================================
    // Scaler/Schema Errors
    // ============================================
    /// cols_to_scale names a column absent from the feature schema
    ScalerColumnMissing,

    // ============================================
    // Generic Errors
    // ============================================
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            // Artifact Errors
            Self::ArtifactNotFound => "ARTIFACT_NOT_FOUND",
            Self::ArtifactParse => "ARTIFACT_PARSE",
            Self::ArtifactShape => "ARTIFACT_SHAPE",

            // Record Errors
            Self::RecordParse => "RECORD_PARSE",
            Self::RecordOutOfRange => "RECORD_OUT_OF_RANGE",

            // Scaler/Schema Errors
            Self::ScalerColumnMissing => "SCALER_COLUMN_MISSING",

            // Generic
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Check if this error makes startup impossible (artifact-side failures)
    pub fn is_startup_fatal(&self) -> bool {
        matches!(
            self,
            Self::ArtifactNotFound
                | Self::ArtifactParse
                | Self::ArtifactShape
                | Self::ScalerColumnMissing
        )
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Artifact file missing
    pub fn artifact_not_found(path: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::ArtifactNotFound,
            format!("Model artifact not found at: {}", path),
        )
    }

    /// Artifact parse failure
    pub fn artifact_parse(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ArtifactParse, msg)
    }

    /// Artifact shape inconsistency
    pub fn artifact_shape(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ArtifactShape, msg)
    }

    /// Record parse failure
    pub fn record_parse(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::RecordParse, msg)
    }

    /// Numeric field outside its declared domain
    pub fn record_out_of_range(field: &str, value: i64, min: i64, max: i64) -> Self {
        Self::new(
            ErrorCode::RecordOutOfRange,
            format!("{} = {} outside domain [{}, {}]", field, value, min, max),
        )
    }

    /// cols_to_scale references a column missing from the schema
    pub fn scaler_column_missing(col: &str) -> Self {
        Self::new(
            ErrorCode::ScalerColumnMissing,
            format!("cols_to_scale column not in feature schema: {}", col),
        )
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        Self::new(ErrorCode::Unknown, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::with_source(ErrorCode::ArtifactNotFound, "File not found", err)
        } else {
            Self::with_source(ErrorCode::Unknown, "IO error", err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::artifact_shape("coefficients do not match schema");
        assert_eq!(err.code, ErrorCode::ArtifactShape);
        assert_eq!(err.code_str(), "ARTIFACT_SHAPE");
    }

    #[test]
    fn test_startup_fatal() {
        assert!(ErrorCode::ArtifactNotFound.is_startup_fatal());
        assert!(ErrorCode::ScalerColumnMissing.is_startup_fatal());
        assert!(!ErrorCode::RecordOutOfRange.is_startup_fatal());
    }

    #[test]
    fn test_display_includes_code() {
        let err = AppError::record_out_of_range("DEROGATORIES", 42, 0, 20);
        let text = err.to_string();
        assert!(text.contains("RECORD_OUT_OF_RANGE"));
        assert!(text.contains("DEROGATORIES"));
    }
}
