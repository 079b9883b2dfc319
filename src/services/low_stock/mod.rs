mod pipeline;

pub use pipeline::{
    admit_recent_sellers, aggregate_sales, assess_stock_levels, attach_suppliers,
    compute_low_stock_alerts, days_until_stockout, primary_suppliers, product_is_alertable,
    rank_alerts, resolve_threshold, select_candidates, warehouse_is_eligible, ActiveCandidate,
    AlertPolicy, Candidate, CatalogSnapshot, LowStockAlert, LowStockReport, SalesTotals,
    SalesVelocity, SalesWindow, StockAssessment, SupplierContact,
};

use crate::{
    entities::{company, inventory, product, product_category, product_supplier, sale, supplier, warehouse},
    errors::ServiceError,
    tracing::log_slow_operation,
};
use chrono::{DateTime, Utc};
use metrics::{counter, histogram};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
    time::{Duration, Instant},
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

const SLOW_REPORT_THRESHOLD: Duration = Duration::from_millis(500);

/// Computes low-stock alerts for a company from the catalog tables.
///
/// Each call is a read-only pass: products, inventory, warehouses and categories are
/// loaded first, the sales window is aggregated, and suppliers are only looked up for
/// rows that end up alerting.
#[derive(Clone)]
pub struct LowStockAlertService {
    db: Arc<DatabaseConnection>,
    policy: AlertPolicy,
}

impl LowStockAlertService {
    pub fn new(db: Arc<DatabaseConnection>, policy: AlertPolicy) -> Self {
        Self { db, policy }
    }

    pub fn policy(&self) -> &AlertPolicy {
        &self.policy
    }

    #[instrument(skip(self))]
    pub async fn low_stock_alerts(&self, company_id: Uuid) -> Result<LowStockReport, ServiceError> {
        self.low_stock_alerts_as_of(company_id, Utc::now()).await
    }

    /// Same as [`Self::low_stock_alerts`] with an explicit reference instant for the
    /// sales window.
    #[instrument(skip(self), fields(window_days = self.policy.sales_window_days))]
    pub async fn low_stock_alerts_as_of(
        &self,
        company_id: Uuid,
        as_of: DateTime<Utc>,
    ) -> Result<LowStockReport, ServiceError> {
        let started = Instant::now();
        let db = &*self.db;

        if company::Entity::find_by_id(company_id).one(db).await?.is_none() {
            return Err(ServiceError::NotFound(format!(
                "Company {} not found",
                company_id
            )));
        }

        let products = product::Entity::find()
            .filter(product::Column::CompanyId.eq(company_id))
            .filter(product::Column::IsActive.eq(true))
            .filter(product::Column::IsBundle.eq(false))
            .order_by_asc(product::Column::Sku)
            .all(db)
            .await?;

        if products.is_empty() {
            debug!(%company_id, "no alertable products");
            return Ok(self.finish(company_id, Vec::new(), started));
        }

        let product_ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();

        let inventory_rows = inventory::Entity::find()
            .filter(inventory::Column::ProductId.is_in(product_ids.clone()))
            .order_by_asc(inventory::Column::ProductId)
            .order_by_asc(inventory::Column::WarehouseId)
            .all(db)
            .await?;

        let warehouses = warehouse::Entity::find()
            .filter(warehouse::Column::CompanyId.eq(company_id))
            .filter(warehouse::Column::IsActive.eq(true))
            .all(db)
            .await?;

        let candidates = select_candidates(company_id, &products, &inventory_rows, &warehouses);
        if candidates.is_empty() {
            return Ok(self.finish(company_id, Vec::new(), started));
        }

        let window = self.policy.sales_window(as_of);
        let sales = sale::Entity::find()
            .filter(sale::Column::ProductId.is_in(product_ids))
            .filter(sale::Column::SaleDate.gte(window.start))
            .filter(sale::Column::SaleDate.lte(window.end))
            .all(db)
            .await?;
        let totals = aggregate_sales(&sales, &window);
        let active = admit_recent_sellers(candidates, &totals);

        let category_ids: BTreeSet<Uuid> = active
            .iter()
            .filter_map(|a| a.candidate.product.category_id)
            .collect();
        let categories: HashMap<Uuid, product_category::Model> = if category_ids.is_empty() {
            HashMap::new()
        } else {
            product_category::Entity::find()
                .filter(product_category::Column::Id.is_in(category_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        let assessments = assess_stock_levels(active, &categories, &self.policy);
        if assessments.is_empty() {
            return Ok(self.finish(company_id, Vec::new(), started));
        }
        for assessment in &assessments {
            debug!(
                sku = %assessment.candidate.product.sku,
                warehouse_id = %assessment.candidate.warehouse.id,
                threshold = assessment.threshold,
                daily_velocity = assessment.daily_velocity,
                days_until_stockout = assessment.days_until_stockout,
                "stock at or below threshold"
            );
        }

        let alerting_products: BTreeSet<Uuid> = assessments
            .iter()
            .map(|a| a.candidate.product.id)
            .collect();
        let links = product_supplier::Entity::find()
            .filter(product_supplier::Column::ProductId.is_in(alerting_products))
            .filter(product_supplier::Column::IsPrimary.eq(true))
            .all(db)
            .await?;
        let supplier_ids: BTreeSet<Uuid> = links.iter().map(|l| l.supplier_id).collect();
        let suppliers = if supplier_ids.is_empty() {
            Vec::new()
        } else {
            supplier::Entity::find()
                .filter(supplier::Column::Id.is_in(supplier_ids))
                .all(db)
                .await?
        };

        let primaries = primary_suppliers(&links, &suppliers);
        let alerts = rank_alerts(attach_suppliers(assessments, &primaries));

        Ok(self.finish(company_id, alerts, started))
    }

    fn finish(&self, company_id: Uuid, alerts: Vec<LowStockAlert>, started: Instant) -> LowStockReport {
        let elapsed = started.elapsed();
        counter!("stockwatch.alerts.generated", alerts.len() as u64);
        histogram!("stockwatch.alerts.duration", elapsed.as_secs_f64());
        log_slow_operation("low_stock_alerts", elapsed, SLOW_REPORT_THRESHOLD);

        info!(%company_id, total_alerts = alerts.len(), "low-stock report computed");
        LowStockReport::new(alerts)
    }
}
