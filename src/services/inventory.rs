use crate::{entities::inventory, errors::ServiceError};
use chrono::Utc;
use metrics::counter;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

/// Result of a threshold override
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ThresholdUpdate {
    pub id: Uuid,
    pub threshold: i32,
}

/// Reads a threshold out of a raw JSON value.
///
/// Accepts non-negative integers (including integral floats such as `5.0`) that fit in
/// an `i32`. Anything else, including a missing value, is invalid input.
pub fn threshold_from_json(value: &Value) -> Result<i32, ServiceError> {
    let invalid = || {
        ServiceError::InvalidInput("Threshold must be a non-negative integer".to_string())
    };

    let Value::Number(number) = value else {
        return Err(invalid());
    };
    if let Some(n) = number.as_u64() {
        return i32::try_from(n).map_err(|_| invalid());
    }

    match number.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= f64::from(i32::MAX) => Ok(f as i32),
        _ => Err(invalid()),
    }
}

/// Service for inventory record writes
#[derive(Clone)]
pub struct InventoryService {
    db: Arc<DatabaseConnection>,
}

impl InventoryService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Sets the per-pair low-stock threshold of an inventory record.
    ///
    /// Last writer wins; `updated_at` is stamped with the current time.
    #[instrument(skip(self))]
    pub async fn set_low_stock_threshold(
        &self,
        inventory_id: Uuid,
        threshold: i32,
    ) -> Result<ThresholdUpdate, ServiceError> {
        if threshold < 0 {
            return Err(ServiceError::InvalidInput(
                "Threshold must be a non-negative integer".to_string(),
            ));
        }

        let db = &*self.db;
        let record = inventory::Entity::find_by_id(inventory_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Inventory record {} not found", inventory_id))
            })?;

        let mut active = record.into_active_model();
        active.low_stock_threshold = Set(Some(threshold));
        active.updated_at = Set(Utc::now());
        let updated = active.update(db).await?;

        counter!("stockwatch.inventory.threshold_updates", 1);
        info!(%inventory_id, threshold, "low-stock threshold updated");

        Ok(ThresholdUpdate {
            id: updated.id,
            threshold: updated.low_stock_threshold.unwrap_or(threshold),
        })
    }
}
