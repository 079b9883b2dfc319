use super::common::parse_id;
use crate::{errors::ServiceError, services::low_stock::LowStockReport, AppState};
use axum::{
    extract::{Path, State},
    Json,
};

/// Low-stock report for one company, most urgent first
#[utoipa::path(
    get,
    path = "/api/v1/companies/{company_id}/alerts/low-stock",
    params(
        ("company_id" = String, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Low-stock alerts computed", body = LowStockReport,
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 400, description = "Malformed company id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Company not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "alerts"
)]
pub async fn get_low_stock_alerts(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Result<Json<LowStockReport>, ServiceError> {
    let company_id = parse_id(&company_id, "company")?;
    let report = state.low_stock.low_stock_alerts(company_id).await?;
    Ok(Json(report))
}
