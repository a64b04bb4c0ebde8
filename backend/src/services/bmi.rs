//! BMI service
//!
//! Validates a request and runs the shared BMI calculation. Holds no state,
//! so concurrent requests never coordinate.

use crate::error::ApiError;
use bmi_check_shared::{BmiRequest, BmiResponse};
use tracing::{debug, warn};

pub struct BmiService;

impl BmiService {
    /// Compute BMI and category for a request
    pub fn calculate(request: BmiRequest) -> Result<BmiResponse, ApiError> {
        let measurement = request.into_measurement().map_err(|err| {
            warn!(error = %err, "Invalid BMI input");
            ApiError::from(err)
        })?;

        let result = measurement.bmi();
        debug!(
            height_m = measurement.height_m(),
            weight_kg = measurement.weight_kg(),
            bmi = result.bmi,
            category = %result.category,
            "Computed BMI"
        );

        Ok(result.into())
    }
}
