//! API request and response types

use crate::errors::BmiError;
use crate::health_metrics::{BmiCategory, BmiResult, Measurement};
use crate::validation::MISSING_FIELDS_MESSAGE;
use serde::{Deserialize, Serialize};

/// BMI calculation request
///
/// Fields are optional so a missing value reaches validation instead of
/// failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BmiRequest {
    /// Height in meters
    pub height: Option<f64>,
    /// Weight in kilograms
    pub weight: Option<f64>,
}

impl BmiRequest {
    pub fn new(height: f64, weight: f64) -> Self {
        Self {
            height: Some(height),
            weight: Some(weight),
        }
    }

    /// Validate the request into a measurement
    pub fn into_measurement(self) -> Result<Measurement, BmiError> {
        match (self.height, self.weight) {
            (Some(height), Some(weight)) => Measurement::new(height, weight),
            _ => Err(BmiError::invalid(MISSING_FIELDS_MESSAGE)),
        }
    }
}

/// BMI calculation response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResponse {
    pub bmi: f64,
    pub category: BmiCategory,
}

impl From<BmiResult> for BmiResponse {
    fn from(result: BmiResult) -> Self {
        Self {
            bmi: result.bmi,
            category: result.category,
        }
    }
}

/// API error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<BmiError> for ErrorResponse {
    fn from(err: BmiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_numbers() {
        let req: BmiRequest = serde_json::from_str(r#"{"height":1.75,"weight":70}"#).unwrap();
        assert_eq!(req.height, Some(1.75));
        assert_eq!(req.weight, Some(70.0));
    }

    #[test]
    fn test_request_missing_field_is_invalid_input() {
        let req: BmiRequest = serde_json::from_str(r#"{"height":1.75}"#).unwrap();
        let err = req.into_measurement().unwrap_err();
        assert_eq!(err.message(), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn test_request_rejects_non_numeric_field() {
        let result: Result<BmiRequest, _> =
            serde_json::from_str(r#"{"height":"tall","weight":70}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_zero_height_is_invalid_input() {
        let err = BmiRequest::new(0.0, 70.0).into_measurement().unwrap_err();
        assert!(matches!(err, BmiError::InvalidInput(_)));
    }

    #[test]
    fn test_response_wire_shape() {
        let measurement = BmiRequest::new(1.75, 70.0).into_measurement().unwrap();
        let response = BmiResponse::from(measurement.bmi());
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json, serde_json::json!({ "bmi": 22.9, "category": "Normal" }));
    }

    #[test]
    fn test_error_response_wire_shape() {
        let body = ErrorResponse::from(BmiError::invalid("Weight must be greater than 0"));
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Weight must be greater than 0" }));
    }
}
