use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stockwatch API",
        version = "0.1.0",
        description = r#"
# Stockwatch API

Low-stock alerting for multi-warehouse, multi-company inventory catalogs.

## Alerts

`GET /api/v1/companies/{company_id}/alerts/low-stock` returns every active product
stocked in an active warehouse of the company whose quantity is at or below its
threshold and which sold at least once in the trailing sales window. Each alert
carries a days-until-stockout projection and the product's primary supplier.
Alerts are ordered by urgency.

The threshold for a (product, warehouse) pair is the per-record override when set,
otherwise the product category's default, otherwise the configured fallback.

## Error Handling

Errors share one body:

```json
{
  "error": "Not Found",
  "message": "Not found: Company 8c0e... not found",
  "request_id": "5f1d...",
  "timestamp": "2024-01-01T00:00:00Z"
}
```
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "alerts", description = "Low-stock alerting"),
        (name = "inventory", description = "Inventory threshold overrides"),
        (name = "products", description = "Product catalog"),
        (name = "health", description = "Health check endpoints")
    ),
    paths(
        crate::handlers::alerts::get_low_stock_alerts,
        crate::handlers::inventory::set_inventory_threshold,
        crate::handlers::products::create_product,
        crate::handlers::health::liveness_check,
        crate::handlers::health::readiness_check,
    ),
    components(
        schemas(
            crate::services::low_stock::LowStockReport,
            crate::services::low_stock::LowStockAlert,
            crate::services::low_stock::SupplierContact,
            crate::services::inventory::ThresholdUpdate,
            crate::handlers::inventory::SetThresholdRequest,
            crate::handlers::inventory::SetThresholdResponse,
            crate::services::products::CreateProductRequest,
            crate::services::products::CreatedProduct,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

/// Serves the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDocV1::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route() {
        let json = serde_json::to_string_pretty(&ApiDocV1::openapi()).unwrap();
        assert!(json.contains("Stockwatch API"));
        assert!(json.contains("/api/v1/companies/{company_id}/alerts/low-stock"));
        assert!(json.contains("/api/v1/inventory/{inventory_id}/threshold"));
        assert!(json.contains("/api/v1/products"));
        assert!(json.contains("LowStockAlert"));
    }
}
