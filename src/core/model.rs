use crate::core::{
    features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES},
    predictor::Regressor,
};
use crate::services::{load_artifact, ArtifactError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when building a model from an artifact
#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error("Invalid model shape: {0}")]
    Shape(String),
}

/// Pre-trained linear regressor
///
/// Serialized as `{ "coefficients": [..], "intercept": .., "feature_names": [..] }`.
/// `coefficients` must hold exactly one weight per feature. `feature_names` is
/// optional; when present it must list the features in the same order the
/// service assembles them. Decoding runs the same checks as [`LinearModel::load`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLinearModel")]
pub struct LinearModel {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    feature_names: Option<Vec<String>>,
}

/// Wire form of [`LinearModel`] before its parameters are checked
#[derive(Debug, Deserialize)]
struct RawLinearModel {
    coefficients: [f64; FEATURE_COUNT],
    #[serde(default)]
    intercept: f64,
    #[serde(default)]
    feature_names: Option<Vec<String>>,
}

impl TryFrom<RawLinearModel> for LinearModel {
    type Error = ModelError;

    fn try_from(raw: RawLinearModel) -> Result<Self, Self::Error> {
        let model = Self {
            coefficients: raw.coefficients,
            intercept: raw.intercept,
            feature_names: raw.feature_names,
        };
        model.check_shape()?;
        Ok(model)
    }
}

impl LinearModel {
    pub fn new(coefficients: [f64; FEATURE_COUNT], intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
            feature_names: None,
        }
    }

    /// Load a model artifact (`.json` or `.toml`)
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        Ok(load_artifact(path).await?)
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Reject non-finite parameters and mismatched feature names
    pub fn check_shape(&self) -> Result<(), ModelError> {
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::Shape("parameters must be finite".to_string()));
        }

        if let Some(names) = &self.feature_names {
            if names.iter().map(String::as_str).ne(FEATURE_NAMES.iter().copied()) {
                return Err(ModelError::Shape(format!(
                    "feature names {:?} do not match {:?}",
                    names, FEATURE_NAMES
                )));
            }
        }

        Ok(())
    }
}

impl Regressor for LinearModel {
    fn predict(&self, rows: &[FeatureVector]) -> Vec<f64> {
        rows.iter()
            .map(|row| row.dot(&self.coefficients) + self.intercept)
            .collect()
    }

    fn name(&self) -> &'static str {
        "model"
    }
}
