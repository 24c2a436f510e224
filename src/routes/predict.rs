use actix_web::{web, HttpResponse, Responder};
use crate::core::{PredictionError, Predictor};
use crate::models::{HealthResponse, PredictionRequest};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub predictor: Predictor,
}

/// Configure prediction routes under `/api`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
///
/// The predictor is built before the server binds, so a live process can
/// always serve predictions.
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::ok())
}

/// Predict endpoint
///
/// POST /api/predict
///
/// Request body:
/// ```json
/// {
///   "weekly_self_study_hours": 10,
///   "attendance_percentage": 80,
///   "class_participation": 5
/// }
/// ```
///
/// Every client-side input failure is a 400 with an `ErrorResponse` body.
/// Missing fields, non-numeric values and malformed JSON are rejected by the
/// extractor and reported as `invalid_json`; out-of-range values are reported
/// as `validation_failed`.
pub async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictionRequest>,
) -> Result<HttpResponse, PredictionError> {
    match state.predictor.predict(&req) {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e @ PredictionError::Validation(_)) => {
            tracing::info!("Validation failed for predict request {:?}: {}", req.0, e);
            Err(e)
        }
        Err(e) => {
            tracing::error!(
                "Prediction failed using {} strategy: {}",
                state.predictor.strategy_name(),
                e
            );
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse::ok();
        assert_eq!(response.status, "ok");
    }
}
