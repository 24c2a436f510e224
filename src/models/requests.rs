use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to predict a student's total score
///
/// All three fields are required. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct PredictionRequest {
    #[validate(range(min = 0.0, max = 40.0))]
    pub weekly_self_study_hours: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub attendance_percentage: f64,
    #[validate(range(min = 0.0, max = 10.0))]
    pub class_participation: f64,
}

impl PredictionRequest {
    pub fn new(weekly_self_study_hours: f64, attendance_percentage: f64, class_participation: f64) -> Self {
        Self {
            weekly_self_study_hours,
            attendance_percentage,
            class_participation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_within_bounds() {
        assert!(PredictionRequest::new(10.0, 80.0, 5.0).validate().is_ok());
        assert!(PredictionRequest::new(0.0, 0.0, 0.0).validate().is_ok());
        assert!(PredictionRequest::new(40.0, 100.0, 10.0).validate().is_ok());
    }

    #[test]
    fn test_request_out_of_bounds() {
        let errors = PredictionRequest::new(50.0, 80.0, 5.0).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("weekly_self_study_hours"));

        assert!(PredictionRequest::new(10.0, 100.5, 5.0).validate().is_err());
        assert!(PredictionRequest::new(10.0, 80.0, -1.0).validate().is_err());
    }

    #[test]
    fn test_missing_field_rejected_by_deserializer() {
        let result: Result<PredictionRequest, _> =
            serde_json::from_str(r#"{"weekly_self_study_hours": 10, "attendance_percentage": 80}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_integer_fields_accepted() {
        let req: PredictionRequest = serde_json::from_str(
            r#"{"weekly_self_study_hours": 10, "attendance_percentage": 80, "class_participation": 5}"#,
        )
        .unwrap();
        assert_eq!(req, PredictionRequest::new(10.0, 80.0, 5.0));
    }
}
