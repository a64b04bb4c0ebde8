//! BMI API routes

use crate::error::ApiResult;
use crate::services::BmiService;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use bmi_check_shared::{BmiRequest, BmiResponse};

/// Create BMI routes
pub fn bmi_routes() -> Router<AppState> {
    Router::new().route("/", post(calculate_bmi))
}

/// POST /api/bmi - Compute BMI and category
///
/// Body: `{ "height": meters, "weight": kilograms }`.
/// Any body problem, including a malformed payload, answers 400 with
/// `{ "error": message }`.
async fn calculate_bmi(
    payload: Result<Json<BmiRequest>, JsonRejection>,
) -> ApiResult<Json<BmiResponse>> {
    let Json(request) = payload?;
    let response = BmiService::calculate(request)?;
    Ok(Json(response))
}
