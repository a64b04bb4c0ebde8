//! BMI Check WASM Module
//!
//! WebAssembly bindings so the form can validate its fields and compute BMI
//! in the browser without a round trip.

use bmi_check_shared::{
    classify_bmi, compute, healthy_weight_range_kg, scale_percent, validation, BmiCategory,
    BmiError, BmiResponse, BmiResult,
};
use validation::validate_height_m;
use wasm_bindgen::prelude::*;

/// Result handed back to JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct BmiOutcome {
    bmi: f64,
    category: BmiCategory,
}

#[wasm_bindgen]
impl BmiOutcome {
    /// BMI rounded to one decimal
    #[wasm_bindgen(getter)]
    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    /// Category label: Underweight, Normal, Overweight or Obese
    #[wasm_bindgen(getter)]
    pub fn category(&self) -> String {
        self.category.label().to_string()
    }

    /// Where the result sits on the 0-40 gauge, in percent
    #[wasm_bindgen(getter, js_name = scalePercent)]
    pub fn scale_percent(&self) -> f64 {
        scale_percent(self.bmi)
    }

    /// Same JSON the backend answers with
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> String {
        let response = BmiResponse {
            bmi: self.bmi,
            category: self.category,
        };
        serde_json::to_string(&response).unwrap_or_default()
    }
}

impl From<BmiResult> for BmiOutcome {
    fn from(result: BmiResult) -> Self {
        Self {
            bmi: result.bmi,
            category: result.category,
        }
    }
}

fn into_js(result: Result<BmiResult, BmiError>) -> Result<BmiOutcome, JsError> {
    result
        .map(BmiOutcome::from)
        .map_err(|err| JsError::new(err.message()))
}

/// Calculate BMI from height (m) and weight (kg)
///
/// Throws with the validation message when either value is not a positive
/// finite number.
#[wasm_bindgen(js_name = computeBmi)]
pub fn compute_bmi(height_m: f64, weight_kg: f64) -> Result<BmiOutcome, JsError> {
    into_js(compute(height_m, weight_kg))
}

/// Calculate BMI straight from the form's text fields
#[wasm_bindgen(js_name = calculateBmiFromForm)]
pub fn calculate_bmi_from_form(height: &str, weight: &str) -> Result<BmiOutcome, JsError> {
    into_js(validation::parse_measurement(height, weight).map(|m| m.bmi()))
}

/// Category label for an already computed BMI
#[wasm_bindgen(js_name = bmiCategoryLabel)]
pub fn bmi_category_label(bmi: f64) -> String {
    classify_bmi(bmi).label().to_string()
}

/// Gauge position for a BMI, in percent
#[wasm_bindgen(js_name = bmiScalePercent)]
pub fn bmi_scale_percent(bmi: f64) -> f64 {
    scale_percent(bmi)
}

/// Healthy weight range `[min, max]` in kg for a height in meters
///
/// Throws when the height is not a positive finite number.
#[wasm_bindgen(js_name = healthyWeightRange)]
pub fn healthy_weight_range(height_m: f64) -> Result<Vec<f64>, JsError> {
    validate_height_m(height_m).map_err(|err| JsError::new(err.message()))?;
    let (min, max) = healthy_weight_range_kg(height_m);
    Ok(vec![min, max])
}
