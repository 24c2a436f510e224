use crate::core::{features::FeatureVector, predictor::Regressor};

/// Weights of the hand-written scoring formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaWeights {
    pub study_hours: f64,
    pub attendance: f64,
    pub participation: f64,
}

impl FormulaWeights {
    #[inline]
    fn as_row(&self) -> [f64; 3] {
        [self.study_hours, self.attendance, self.participation]
    }
}

impl Default for FormulaWeights {
    fn default() -> Self {
        Self {
            study_hours: 2.0,
            attendance: 0.5,
            participation: 5.0,
        }
    }
}

/// Closed-form predictor
///
/// score = study_hours * w1 + attendance * w2 + participation * w3
#[derive(Debug, Clone)]
pub struct WeightedFormula {
    weights: FormulaWeights,
}

impl WeightedFormula {
    pub fn new(weights: FormulaWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self::new(FormulaWeights::default())
    }
}

impl Regressor for WeightedFormula {
    fn predict(&self, rows: &[FeatureVector]) -> Vec<f64> {
        let weights = self.weights.as_row();
        rows.iter().map(|row| row.dot(&weights)).collect()
    }

    fn name(&self) -> &'static str {
        "formula"
    }
}
