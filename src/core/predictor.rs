use crate::config::{PredictionSettings, Strategy};
use crate::core::{
    features::FeatureVector,
    formula::{FormulaWeights, WeightedFormula},
    model::LinearModel,
};
use crate::models::{PredictionRequest, PredictionResponse};
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

/// Errors surfaced by the prediction pipeline
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Prediction failed: {0}")]
    Computation(String),
}

/// Anything that maps feature rows to one value per row
///
/// Implementations are immutable once built and are shared read-only
/// across worker threads.
pub trait Regressor: Debug + Send + Sync {
    fn predict(&self, rows: &[FeatureVector]) -> Vec<f64>;

    /// Short label used in logs
    fn name(&self) -> &'static str;
}

/// Prediction pipeline orchestrator
///
/// # Pipeline Stages
/// 1. Input validation (field bounds)
/// 2. Feature vector assembly
/// 3. Regressor inference
/// 4. Response construction
#[derive(Debug, Clone)]
pub struct Predictor {
    regressor: Arc<dyn Regressor>,
}

impl Predictor {
    pub fn new<R: Regressor + 'static>(regressor: R) -> Self {
        Self {
            regressor: Arc::new(regressor),
        }
    }

    pub fn formula(weights: FormulaWeights) -> Self {
        Self::new(WeightedFormula::new(weights))
    }

    pub fn with_default_formula() -> Self {
        Self::new(WeightedFormula::with_default_weights())
    }

    /// Build the configured strategy
    ///
    /// For the model strategy the artifact is read here, once. Any failure
    /// is a `ModelUnavailable` error and the service must not start.
    pub async fn from_settings(settings: &PredictionSettings) -> Result<Self, PredictionError> {
        match settings.strategy {
            Strategy::Formula => {
                let weights = FormulaWeights::from(&settings.weights);
                tracing::info!("Using formula strategy with weights: {:?}", weights);
                Ok(Self::formula(weights))
            }
            Strategy::Model => {
                let path = settings.resolved_model_path();
                let model = LinearModel::load(&path).await.map_err(|e| {
                    PredictionError::ModelUnavailable(format!("{}: {}", path.display(), e))
                })?;
                tracing::info!(
                    "Using model strategy from {} (coefficients: {:?}, intercept: {})",
                    path.display(),
                    model.coefficients(),
                    model.intercept()
                );
                Ok(Self::new(model))
            }
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.regressor.name()
    }

    /// Validate one request and predict its total score
    pub fn predict(&self, req: &PredictionRequest) -> Result<PredictionResponse, PredictionError> {
        req.validate()
            .map_err(|errors| PredictionError::Validation(errors.to_string()))?;

        let features = FeatureVector::from(req);
        let output = self.regressor.predict(std::slice::from_ref(&features));

        let score = output.first().copied().ok_or_else(|| {
            PredictionError::Computation(format!("{} returned no output", self.regressor.name()))
        })?;

        if !score.is_finite() {
            return Err(PredictionError::Computation(format!(
                "{} returned non-finite value {}",
                self.regressor.name(),
                score
            )));
        }

        tracing::debug!(
            "Predicted {} for {:?} using {}",
            score,
            features.as_slice(),
            self.regressor.name()
        );

        Ok(PredictionResponse {
            predicted_total_score: score,
        })
    }
}
