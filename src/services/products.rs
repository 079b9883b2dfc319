use crate::{
    db::with_transaction,
    entities::{inventory, product, product_category, warehouse},
    errors::ServiceError,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, SqlErr,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{str::FromStr, sync::Arc};
use tracing::{info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// Product creation payload as received. Every field is optional here so that a
/// missing field produces a field-specific message instead of a generic parse error.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Steel Bolt M6")]
    pub name: Option<String>,
    #[schema(example = "bolt-m6")]
    pub sku: Option<String>,
    /// Number or numeric string, must be >= 0
    #[schema(value_type = String, example = "0.25")]
    pub price: Option<Value>,
    pub warehouse_id: Option<Uuid>,
    #[schema(value_type = i32, example = 500)]
    pub initial_quantity: Option<Value>,
    pub category_id: Option<Uuid>,
    pub is_bundle: Option<bool>,
}

/// A validated product creation request
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub price: Decimal,
    pub warehouse_id: Uuid,
    pub initial_quantity: i32,
    pub category_id: Option<Uuid>,
    pub is_bundle: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedProduct {
    #[schema(example = "Product created successfully")]
    pub message: String,
    pub product_id: Uuid,
    #[schema(example = "BOLT-M6")]
    pub sku: String,
}

fn missing(field: &str) -> ServiceError {
    ServiceError::InvalidInput(format!("Missing required field: {}", field))
}

fn parse_price(value: &Value) -> Result<Decimal, ServiceError> {
    let raw = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return Err(ServiceError::InvalidInput("Invalid price format".to_string())),
    };

    let price = Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|_| ServiceError::InvalidInput("Invalid price format".to_string()))?;

    if price.is_sign_negative() && !price.is_zero() {
        return Err(ServiceError::InvalidInput(
            "Price cannot be negative".to_string(),
        ));
    }
    Ok(price)
}

fn parse_quantity(value: &Value) -> Result<i32, ServiceError> {
    value
        .as_u64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| {
            ServiceError::InvalidInput("Initial quantity must be non-negative integer".to_string())
        })
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = ServiceError;

    fn try_from(request: CreateProductRequest) -> Result<Self, Self::Error> {
        let name = request.name.ok_or_else(|| missing("name"))?;
        let sku = request.sku.ok_or_else(|| missing("sku"))?;
        let price = request.price.ok_or_else(|| missing("price"))?;
        let warehouse_id = request.warehouse_id.ok_or_else(|| missing("warehouse_id"))?;
        let initial_quantity = request
            .initial_quantity
            .ok_or_else(|| missing("initial_quantity"))?;

        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ServiceError::InvalidInput(
                "Product name cannot be empty".to_string(),
            ));
        }
        let sku = sku.trim().to_uppercase();
        if sku.is_empty() {
            return Err(ServiceError::InvalidInput("SKU cannot be empty".to_string()));
        }

        Ok(Self {
            name,
            sku,
            price: parse_price(&price)?,
            warehouse_id,
            initial_quantity: parse_quantity(&initial_quantity)?,
            category_id: request.category_id,
            is_bundle: request.is_bundle.unwrap_or(false),
        })
    }
}

/// Unique violations on the SKU become a conflict; other constraint failures are bad input.
fn map_write_error(err: DbErr) -> ServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) if detail.to_lowercase().contains("sku") => {
            ServiceError::Conflict("SKU already exists".to_string())
        }
        Some(SqlErr::UniqueConstraintViolation(_)) | Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            ServiceError::InvalidInput("Database constraint violation".to_string())
        }
        _ => ServiceError::DatabaseError(err),
    }
}

#[derive(Clone)]
pub struct ProductService {
    db: Arc<DatabaseConnection>,
}

impl ProductService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Creates a product together with its inventory row in the given warehouse.
    ///
    /// The product is owned by the warehouse's company.
    #[instrument(skip(self, new_product), fields(sku = %new_product.sku))]
    pub async fn create_product(&self, new_product: NewProduct) -> Result<CreatedProduct, ServiceError> {
        let db = &*self.db;

        let warehouse = warehouse::Entity::find_by_id(new_product.warehouse_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Warehouse not found".to_string()))?;

        if let Some(category_id) = new_product.category_id {
            if product_category::Entity::find_by_id(category_id)
                .one(db)
                .await?
                .is_none()
            {
                return Err(ServiceError::NotFound("Category not found".to_string()));
            }
        }

        let company_id = warehouse.company_id;
        let created = with_transaction(db, move |txn| {
            Box::pin(async move {
                let taken = product::Entity::find()
                    .filter(product::Column::Sku.eq(new_product.sku.clone()))
                    .count(txn)
                    .await?;
                if taken > 0 {
                    return Err(ServiceError::Conflict("SKU already exists".to_string()));
                }

                let now = Utc::now();
                let product = product::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    company_id: Set(company_id),
                    name: Set(new_product.name),
                    sku: Set(new_product.sku),
                    price: Set(new_product.price),
                    category_id: Set(new_product.category_id),
                    is_active: Set(true),
                    is_bundle: Set(new_product.is_bundle),
                    created_at: Set(now),
                    updated_at: Set(Some(now)),
                }
                .insert(txn)
                .await
                .map_err(map_write_error)?;

                inventory::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    product_id: Set(product.id),
                    warehouse_id: Set(new_product.warehouse_id),
                    quantity: Set(new_product.initial_quantity),
                    low_stock_threshold: Set(None),
                    updated_at: Set(now),
                }
                .insert(txn)
                .await
                .map_err(map_write_error)?;

                Ok(product)
            })
        })
        .await
        .map_err(|e| {
            if e.is_internal() {
                warn!(error = %e, "product creation rolled back");
            }
            e
        })?;

        info!(product_id = %created.id, sku = %created.sku, "product created");

        Ok(CreatedProduct {
            message: "Product created successfully".to_string(),
            product_id: created.id,
            sku: created.sku,
        })
    }
}
