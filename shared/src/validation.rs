//! Input validation functions
//!
//! Everything that reaches the BMI arithmetic has passed through here first.

use crate::errors::BmiError;
use crate::health_metrics::Measurement;

/// Shown when a form field is left empty
pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both height and weight.";
/// Shown when a form field is not a positive number
pub const INVALID_NUMBERS_MESSAGE: &str = "Please enter valid positive numbers.";

/// Validate height value (in meters)
pub fn validate_height_m(height_m: f64) -> Result<(), BmiError> {
    if !height_m.is_finite() {
        return Err(BmiError::invalid("Height must be a valid number"));
    }
    if height_m <= 0.0 {
        return Err(BmiError::invalid("Height must be greater than 0"));
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), BmiError> {
    if !weight_kg.is_finite() {
        return Err(BmiError::invalid("Weight must be a valid number"));
    }
    if weight_kg <= 0.0 {
        return Err(BmiError::invalid("Weight must be greater than 0"));
    }
    Ok(())
}

/// Parse raw form input into a validated measurement
///
/// Empty fields and unusable numbers get distinct messages, matching what
/// the form shows next to the submit button.
pub fn parse_measurement(height: &str, weight: &str) -> Result<Measurement, BmiError> {
    let (height, weight) = (height.trim(), weight.trim());
    if height.is_empty() || weight.is_empty() {
        return Err(BmiError::invalid(MISSING_FIELDS_MESSAGE));
    }

    let parse = |raw: &str| raw.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0);
    match (parse(height), parse(weight)) {
        (Some(height_m), Some(weight_kg)) => Measurement::new(height_m, weight_kg),
        _ => Err(BmiError::invalid(INVALID_NUMBERS_MESSAGE)),
    }
}
