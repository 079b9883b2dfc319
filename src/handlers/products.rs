use super::common::created_response;
use crate::{
    errors::ServiceError,
    services::products::{CreateProductRequest, CreatedProduct, NewProduct},
    AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Response,
    Json,
};

/// Create a product and its initial stock in one warehouse
#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = CreatedProduct,
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 404, description = "Warehouse or category not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "SKU already exists", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let Json(request) = payload?;
    let new_product = NewProduct::try_from(request)?;
    let created = state.products.create_product(new_product).await?;
    Ok(created_response(created))
}
