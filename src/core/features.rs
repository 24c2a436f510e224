use crate::models::PredictionRequest;

/// Number of features the service feeds to a regressor
pub const FEATURE_COUNT: usize = 3;

/// Feature names in the order they appear in a [`FeatureVector`]
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "weekly_self_study_hours",
    "attendance_percentage",
    "class_participation",
];

/// Fixed-order numeric row: study hours, attendance, participation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(study_hours: f64, attendance: f64, participation: f64) -> Self {
        Self([study_hours, attendance, participation])
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Dot product with a weight row of the same length
    #[inline]
    pub fn dot(&self, weights: &[f64; FEATURE_COUNT]) -> f64 {
        self.0
            .iter()
            .zip(weights.iter())
            .map(|(x, w)| x * w)
            .sum()
    }
}

impl From<&PredictionRequest> for FeatureVector {
    fn from(req: &PredictionRequest) -> Self {
        Self::new(
            req.weekly_self_study_hours,
            req.attendance_percentage,
            req.class_participation,
        )
    }
}
