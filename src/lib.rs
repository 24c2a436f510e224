//! Score Predict - student total score prediction service
//!
//! This library provides the prediction pipeline behind the HTTP service:
//! request validation, feature vector assembly, inference through either a
//! fixed formula or a pre-trained linear model, and response construction.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{FeatureVector, FormulaWeights, LinearModel, PredictionError, Predictor, Regressor};
pub use models::{PredictionRequest, PredictionResponse, HealthResponse, ErrorResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let predictor = Predictor::with_default_formula();
        let res = predictor.predict(&PredictionRequest::new(1.0, 1.0, 1.0)).unwrap();
        assert_eq!(res.predicted_total_score, 7.5);
    }
}
