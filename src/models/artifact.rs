//! Model Artifact - the trained classifier bundle
//!
//! Produced by an external training pipeline and consumed here as an opaque
//! JSON file with four named fields: `model`, `features`, `scaler`,
//! `cols_to_scale`. Loaded exactly once at process start, immutable for the
//! process lifetime.
//!
//! Internal shapes are validated eagerly at load so that a retrained
//! artifact with a drifted schema fails at startup with a clear error code
//! instead of producing silently wrong predictions.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::errors::{AppError, AppResult};

// ============================================
// CLASSIFIER
// ============================================

/// Binary logistic-regression classifier.
///
/// Class order is fixed at training time: the probability operation returns
/// `[p_good, p_bad]` with the bad class at index 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    /// Weights aligned to the artifact's `features` list
    pub coefficients: Vec<f64>,
    /// Bias term
    pub intercept: f64,
}

impl LogisticModel {
    /// Per-class probability distribution for one feature vector.
    ///
    /// Hard error on shape mismatch, no fallback: a vector that does not
    /// match the trained width means the caller's schema has drifted.
    pub fn predict_proba(&self, features: &[f64]) -> AppResult<[f64; 2]> {
        if features.len() != self.coefficients.len() {
            return Err(AppError::artifact_shape(format!(
                "Feature vector width {} does not match trained width {}",
                features.len(),
                self.coefficients.len()
            )));
        }

        let z: f64 = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>();

        let p_bad = sigmoid(z);
        Ok([1.0 - p_bad, p_bad])
    }
}

#[inline]
fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

// ============================================
// SCALER
// ============================================

/// Fitted standard scaler for the `cols_to_scale` subset.
///
/// `mean` and `scale` are aligned index-for-index with the artifact's
/// `cols_to_scale` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Standardize one value: (x - mean) / scale
    #[inline]
    pub fn transform_one(&self, idx: usize, x: f64) -> f64 {
        (x - self.mean[idx]) / self.scale[idx]
    }

    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }
}

// ============================================
// ARTIFACT
// ============================================

/// The full trained bundle: classifier + feature schema + scaler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Trained binary classifier
    pub model: LogisticModel,
    /// Ordered post-encoding column names the classifier expects
    pub features: Vec<String>,
    /// Fitted scaler for the designated columns
    pub scaler: StandardScaler,
    /// Column names the scaler applies to
    pub cols_to_scale: Vec<String>,
}

impl ModelArtifact {
    /// Load and validate the artifact from a JSON file.
    ///
    /// Missing file or parse failure is fatal: the process cannot evaluate
    /// anything without the trained bundle.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::artifact_not_found(path.display())
            } else {
                AppError::from(e)
            }
        })?;

        let artifact: Self = serde_json::from_str(&raw).map_err(|e| {
            AppError::with_source(
                crate::models::errors::ErrorCode::ArtifactParse,
                format!("Failed to parse model artifact at {}", path.display()),
                e,
            )
        })?;

        artifact.validate()?;

        info!(
            "📦 Model artifact loaded: {} features, {} scaled columns",
            artifact.features.len(),
            artifact.cols_to_scale.len()
        );

        Ok(artifact)
    }

    /// Check internal shape consistency.
    ///
    /// Catches at startup what would otherwise surface mid-evaluation as a
    /// silent correctness hazard: coefficient width vs schema, scaler
    /// arrays vs cols_to_scale, and cols_to_scale membership in the schema.
    pub fn validate(&self) -> AppResult<()> {
        if self.model.coefficients.len() != self.features.len() {
            return Err(AppError::artifact_shape(format!(
                "{} coefficients for {} schema columns",
                self.model.coefficients.len(),
                self.features.len()
            )));
        }

        if self.scaler.mean.len() != self.scaler.scale.len() {
            return Err(AppError::artifact_shape(format!(
                "Scaler mean/scale length mismatch: {} vs {}",
                self.scaler.mean.len(),
                self.scaler.scale.len()
            )));
        }

        if self.scaler.len() != self.cols_to_scale.len() {
            return Err(AppError::artifact_shape(format!(
                "Scaler fitted on {} columns but cols_to_scale lists {}",
                self.scaler.len(),
                self.cols_to_scale.len()
            )));
        }

        for col in &self.cols_to_scale {
            if !self.features.contains(col) {
                return Err(AppError::scaler_column_missing(col));
            }
        }

        for (idx, s) in self.scaler.scale.iter().enumerate() {
            if *s == 0.0 || !s.is_finite() {
                return Err(AppError::artifact_shape(format!(
                    "Degenerate scale {} for column {}",
                    s, self.cols_to_scale[idx]
                )));
            }
        }

        Ok(())
    }

    /// Position of a column in the feature schema
    pub fn feature_index(&self, col: &str) -> Option<usize> {
        self.features.iter().position(|f| f == col)
    }
}
