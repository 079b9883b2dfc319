use super::common::parse_id;
use crate::{
    errors::ServiceError,
    services::inventory::{threshold_from_json, ThresholdUpdate},
    AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetThresholdRequest {
    /// Non-negative integer
    #[serde(default)]
    #[schema(value_type = i32, example = 15)]
    pub threshold: Value,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetThresholdResponse {
    pub inventory: ThresholdUpdate,
}

/// Override the low-stock threshold of one inventory record
#[utoipa::path(
    put,
    path = "/api/v1/inventory/{inventory_id}/threshold",
    params(
        ("inventory_id" = String, Path, description = "Inventory record ID")
    ),
    request_body = SetThresholdRequest,
    responses(
        (status = 200, description = "Threshold updated", body = SetThresholdResponse,
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 400, description = "Malformed id or invalid threshold", body = crate::errors::ErrorResponse),
        (status = 404, description = "Inventory record not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn set_inventory_threshold(
    State(state): State<AppState>,
    Path(inventory_id): Path<String>,
    payload: Result<Json<SetThresholdRequest>, JsonRejection>,
) -> Result<Json<SetThresholdResponse>, ServiceError> {
    let inventory_id = parse_id(&inventory_id, "inventory")?;
    let Json(request) = payload?;
    let threshold = threshold_from_json(&request.threshold)?;

    let inventory = state
        .inventory
        .set_low_stock_threshold(inventory_id, threshold)
        .await?;

    Ok(Json(SetThresholdResponse { inventory }))
}
