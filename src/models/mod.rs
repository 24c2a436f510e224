// Model exports
pub mod requests;
pub mod responses;

pub use requests::PredictionRequest;
pub use responses::{PredictionResponse, HealthResponse, ErrorResponse};
