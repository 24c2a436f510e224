// Core prediction pipeline exports
pub mod features;
pub mod formula;
pub mod model;
pub mod predictor;

pub use features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use formula::{FormulaWeights, WeightedFormula};
pub use model::{LinearModel, ModelError};
pub use predictor::{PredictionError, Predictor, Regressor};
