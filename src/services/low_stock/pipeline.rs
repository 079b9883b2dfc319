//! Stages of the low-stock alert computation.
//!
//! Every stage is a plain function over typed records so it can be exercised without a
//! database:
//!
//! 1. [`select_candidates`]: alertable products joined to their inventory rows and to an
//!    eligible warehouse
//! 2. [`aggregate_sales`] + [`admit_recent_sellers`]: keep pairs that sold inside the window
//! 3. [`assess_stock_levels`]: threshold cascade, velocity and stockout projection
//! 4. [`primary_suppliers`] + [`attach_suppliers`]: supplier enrichment
//! 5. [`rank_alerts`]: most urgent first

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{
    DEFAULT_FALLBACK_THRESHOLD, DEFAULT_SALES_WINDOW_DAYS, DEFAULT_STOCKOUT_SENTINEL_DAYS,
};
use crate::entities::{inventory, product, product_category, product_supplier, sale, supplier, warehouse};

/// Units sold per (product_id, warehouse_id) inside a sales window
pub type SalesTotals = HashMap<(Uuid, Uuid), i64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertPolicy {
    pub fallback_threshold: i32,
    pub stockout_sentinel_days: i64,
    pub sales_window_days: i64,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            fallback_threshold: DEFAULT_FALLBACK_THRESHOLD,
            stockout_sentinel_days: DEFAULT_STOCKOUT_SENTINEL_DAYS,
            sales_window_days: DEFAULT_SALES_WINDOW_DAYS,
        }
    }
}

impl AlertPolicy {
    /// Sales window closing at `as_of`
    pub fn sales_window(&self, as_of: DateTime<Utc>) -> SalesWindow {
        SalesWindow::ending_at(as_of, self.sales_window_days)
    }
}

/// Closed interval `[start, end]` of sale dates that count towards velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SalesWindow {
    pub fn ending_at(end: DateTime<Utc>, days: i64) -> Self {
        Self {
            start: end - Duration::days(days),
            end,
        }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

/// An inventory row whose product is alertable and whose warehouse is eligible
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub product: &'a product::Model,
    pub warehouse: &'a warehouse::Model,
    pub inventory: &'a inventory::Model,
}

impl Candidate<'_> {
    pub fn key(&self) -> (Uuid, Uuid) {
        (self.product.id, self.warehouse.id)
    }
}

/// A candidate with sales inside the window
#[derive(Debug, Clone, Copy)]
pub struct ActiveCandidate<'a> {
    pub candidate: Candidate<'a>,
    pub units_sold: i64,
}

/// A candidate at or below its resolved threshold
#[derive(Debug, Clone, Copy)]
pub struct StockAssessment<'a> {
    pub candidate: Candidate<'a>,
    pub threshold: i32,
    pub daily_velocity: f64,
    pub days_until_stockout: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SupplierContact {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "contactEmail")]
    pub contact_email: Option<String>,
}

impl From<&supplier::Model> for SupplierContact {
    fn from(model: &supplier::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            contact_email: model.contact_email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LowStockAlert {
    pub product_id: Uuid,
    pub product_name: String,
    pub sku: String,
    pub warehouse_id: Uuid,
    pub warehouse_name: String,
    pub current_stock: i32,
    pub threshold: i32,
    pub days_until_stockout: i64,
    /// Primary supplier, `null` when the product has none
    pub supplier: Option<SupplierContact>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LowStockReport {
    pub alerts: Vec<LowStockAlert>,
    pub total_alerts: usize,
}

impl LowStockReport {
    pub fn new(alerts: Vec<LowStockAlert>) -> Self {
        let total_alerts = alerts.len();
        Self {
            alerts,
            total_alerts,
        }
    }
}

/// Average daily sales over the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesVelocity {
    units_sold: i64,
    window_days: i64,
}

impl SalesVelocity {
    pub fn new(units_sold: i64, window_days: i64) -> Self {
        Self {
            units_sold,
            window_days,
        }
    }

    fn is_moving(&self) -> bool {
        self.units_sold > 0 && self.window_days > 0
    }

    pub fn per_day(&self) -> f64 {
        if self.is_moving() {
            self.units_sold as f64 / self.window_days as f64
        } else {
            0.0
        }
    }

    /// `floor(stock / per_day)`, evaluated as `floor(stock * window / sold)` so the
    /// result is exact. `None` when nothing sold.
    pub fn days_until_stockout(&self, current_stock: i32) -> Option<i64> {
        if !self.is_moving() {
            return None;
        }
        Some((i64::from(current_stock) * self.window_days).div_euclid(self.units_sold))
    }
}

/// First non-null of: per-pair override, category default, fallback
pub fn resolve_threshold(custom: Option<i32>, category_default: Option<i32>, fallback: i32) -> i32 {
    custom.or(category_default).unwrap_or(fallback)
}

pub fn days_until_stockout(current_stock: i32, velocity: &SalesVelocity, sentinel: i64) -> i64 {
    velocity
        .days_until_stockout(current_stock)
        .unwrap_or(sentinel)
}

pub fn product_is_alertable(product: &product::Model, company_id: Uuid) -> bool {
    product.company_id == company_id && product.is_active && !product.is_bundle
}

/// Inner-join predicate: rows whose warehouse fails it are dropped without error
pub fn warehouse_is_eligible(warehouse: &warehouse::Model, company_id: Uuid) -> bool {
    warehouse.company_id == company_id && warehouse.is_active
}

/// Stage 1. Output order follows `products`, then `inventory` within a product.
pub fn select_candidates<'a>(
    company_id: Uuid,
    products: &'a [product::Model],
    inventory: &'a [inventory::Model],
    warehouses: &'a [warehouse::Model],
) -> Vec<Candidate<'a>> {
    let eligible_warehouses: HashMap<Uuid, &warehouse::Model> = warehouses
        .iter()
        .filter(|w| warehouse_is_eligible(w, company_id))
        .map(|w| (w.id, w))
        .collect();

    let mut rows_by_product: HashMap<Uuid, Vec<&inventory::Model>> = HashMap::new();
    for row in inventory {
        rows_by_product.entry(row.product_id).or_default().push(row);
    }

    products
        .iter()
        .filter(|p| product_is_alertable(p, company_id))
        .flat_map(|product| {
            rows_by_product
                .get(&product.id)
                .map(Vec::as_slice)
                .unwrap_or_default()
                .iter()
                .copied()
                .filter_map(|row| {
                    eligible_warehouses
                        .get(&row.warehouse_id)
                        .copied()
                        .map(|warehouse| Candidate {
                            product,
                            warehouse,
                            inventory: row,
                        })
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Sums sale quantities per (product, warehouse) for sales inside `window`
pub fn aggregate_sales<'s>(
    sales: impl IntoIterator<Item = &'s sale::Model>,
    window: &SalesWindow,
) -> SalesTotals {
    let mut totals = SalesTotals::new();
    for sale in sales {
        if window.contains(sale.sale_date) {
            *totals.entry((sale.product_id, sale.warehouse_id)).or_default() +=
                i64::from(sale.quantity);
        }
    }
    totals
}

/// Stage 2. Pairs with no sales (or a non-positive total) in the window are dropped.
pub fn admit_recent_sellers<'a>(
    candidates: Vec<Candidate<'a>>,
    sales: &SalesTotals,
) -> Vec<ActiveCandidate<'a>> {
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let units_sold = sales.get(&candidate.key()).copied().unwrap_or(0);
            (units_sold > 0).then_some(ActiveCandidate {
                candidate,
                units_sold,
            })
        })
        .collect()
}

/// Stage 3. Keeps rows with `current_stock <= threshold`.
pub fn assess_stock_levels<'a>(
    active: Vec<ActiveCandidate<'a>>,
    categories: &HashMap<Uuid, product_category::Model>,
    policy: &AlertPolicy,
) -> Vec<StockAssessment<'a>> {
    active
        .into_iter()
        .filter_map(|ActiveCandidate { candidate, units_sold }| {
            let category_default = candidate
                .product
                .category_id
                .and_then(|id| categories.get(&id))
                .and_then(|category| category.low_stock_threshold);
            let threshold = resolve_threshold(
                candidate.inventory.low_stock_threshold,
                category_default,
                policy.fallback_threshold,
            );

            let current_stock = candidate.inventory.quantity;
            if current_stock > threshold {
                return None;
            }

            let velocity = SalesVelocity::new(units_sold, policy.sales_window_days);
            Some(StockAssessment {
                candidate,
                threshold,
                daily_velocity: velocity.per_day(),
                days_until_stockout: days_until_stockout(
                    current_stock,
                    &velocity,
                    policy.stockout_sentinel_days,
                ),
            })
        })
        .collect()
}

/// One primary supplier per product. With several primary links the lowest supplier id
/// wins; links pointing at unknown suppliers are ignored.
pub fn primary_suppliers<'s>(
    links: &[product_supplier::Model],
    suppliers: &'s [supplier::Model],
) -> HashMap<Uuid, &'s supplier::Model> {
    let suppliers_by_id: HashMap<Uuid, &supplier::Model> =
        suppliers.iter().map(|s| (s.id, s)).collect();

    let mut primaries: HashMap<Uuid, &supplier::Model> = HashMap::new();
    for link in links.iter().filter(|link| link.is_primary) {
        let Some(supplier) = suppliers_by_id.get(&link.supplier_id).copied() else {
            continue;
        };
        primaries
            .entry(link.product_id)
            .and_modify(|current| {
                if supplier.id < current.id {
                    *current = supplier;
                }
            })
            .or_insert(supplier);
    }
    primaries
}

/// Stage 4
pub fn attach_suppliers(
    assessments: Vec<StockAssessment<'_>>,
    primaries: &HashMap<Uuid, &supplier::Model>,
) -> Vec<LowStockAlert> {
    assessments
        .into_iter()
        .map(|assessment| {
            let Candidate {
                product,
                warehouse,
                inventory,
            } = assessment.candidate;

            LowStockAlert {
                product_id: product.id,
                product_name: product.name.clone(),
                sku: product.sku.clone(),
                warehouse_id: warehouse.id,
                warehouse_name: warehouse.name.clone(),
                current_stock: inventory.quantity,
                threshold: assessment.threshold,
                days_until_stockout: assessment.days_until_stockout,
                supplier: primaries
                    .get(&product.id)
                    .map(|supplier| SupplierContact::from(*supplier)),
            }
        })
        .collect()
}

/// Stage 5. Stable, so ties keep selection order.
pub fn rank_alerts(mut alerts: Vec<LowStockAlert>) -> Vec<LowStockAlert> {
    alerts.sort_by_key(|alert| alert.days_until_stockout);
    alerts
}

/// Everything the pipeline reads, already loaded
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub products: Vec<product::Model>,
    pub inventory: Vec<inventory::Model>,
    pub warehouses: Vec<warehouse::Model>,
    pub categories: Vec<product_category::Model>,
    pub sales: Vec<sale::Model>,
    pub supplier_links: Vec<product_supplier::Model>,
    pub suppliers: Vec<supplier::Model>,
}

/// Runs all stages over an in-memory snapshot
pub fn compute_low_stock_alerts(
    company_id: Uuid,
    snapshot: &CatalogSnapshot,
    policy: &AlertPolicy,
    as_of: DateTime<Utc>,
) -> Vec<LowStockAlert> {
    let candidates = select_candidates(
        company_id,
        &snapshot.products,
        &snapshot.inventory,
        &snapshot.warehouses,
    );
    let totals = aggregate_sales(&snapshot.sales, &policy.sales_window(as_of));
    let active = admit_recent_sellers(candidates, &totals);

    let categories: HashMap<Uuid, product_category::Model> = snapshot
        .categories
        .iter()
        .map(|c| (c.id, c.clone()))
        .collect();
    let assessments = assess_stock_levels(active, &categories, policy);

    let primaries = primary_suppliers(&snapshot.supplier_links, &snapshot.suppliers);
    rank_alerts(attach_suppliers(assessments, &primaries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    fn company() -> Uuid {
        Uuid::from_u128(1)
    }

    fn product(id: u128, name: &str) -> product::Model {
        product::Model {
            id: Uuid::from_u128(id),
            company_id: company(),
            name: name.to_string(),
            sku: format!("SKU-{id}"),
            price: Decimal::new(999, 2),
            category_id: None,
            is_active: true,
            is_bundle: false,
            created_at: as_of(),
            updated_at: None,
        }
    }

    fn warehouse(id: u128, name: &str) -> warehouse::Model {
        warehouse::Model {
            id: Uuid::from_u128(id),
            company_id: company(),
            name: name.to_string(),
            location: None,
            is_active: true,
            created_at: as_of(),
        }
    }

    fn stock(id: u128, product: &product::Model, warehouse: &warehouse::Model, quantity: i32) -> inventory::Model {
        inventory::Model {
            id: Uuid::from_u128(id),
            product_id: product.id,
            warehouse_id: warehouse.id,
            quantity,
            low_stock_threshold: None,
            updated_at: as_of(),
        }
    }

    fn sold(product: &product::Model, warehouse: &warehouse::Model, quantity: i32, days_ago: i64) -> sale::Model {
        sale::Model {
            id: Uuid::new_v4(),
            product_id: product.id,
            warehouse_id: warehouse.id,
            quantity,
            sale_date: as_of() - Duration::days(days_ago),
        }
    }

    #[rstest]
    #[case(Some(5), Some(20), 5)]
    #[case(None, Some(20), 20)]
    #[case(None, None, 10)]
    #[case(Some(0), Some(20), 0)]
    fn threshold_cascade(
        #[case] custom: Option<i32>,
        #[case] category_default: Option<i32>,
        #[case] expected: i32,
    ) {
        assert_eq!(resolve_threshold(custom, category_default, 10), expected);
    }

    #[test]
    fn velocity_of_one_unit_a_day() {
        let velocity = SalesVelocity::new(30, 30);
        assert_eq!(velocity.per_day(), 1.0);
        assert_eq!(days_until_stockout(30, &velocity, 999), 30);
    }

    #[test]
    fn zero_velocity_yields_sentinel() {
        let velocity = SalesVelocity::new(0, 30);
        assert_eq!(velocity.per_day(), 0.0);
        assert_eq!(days_until_stockout(30, &velocity, 999), 999);
    }

    #[test]
    fn stockout_projection_floors() {
        // 45 units over 30 days = 1.5/day; 10 / 1.5 = 6.67
        assert_eq!(days_until_stockout(10, &SalesVelocity::new(45, 30), 999), 6);
        // 10 units over 30 days; 1 / (1/3) = 3 exactly
        assert_eq!(days_until_stockout(1, &SalesVelocity::new(10, 30), 999), 3);
        assert_eq!(days_until_stockout(0, &SalesVelocity::new(10, 30), 999), 0);
    }

    #[test]
    fn window_is_inclusive_at_both_ends() {
        let window = SalesWindow::ending_at(as_of(), 30);
        assert!(window.contains(as_of()));
        assert!(window.contains(as_of() - Duration::days(30)));
        assert!(!window.contains(as_of() - Duration::days(30) - Duration::seconds(1)));
        assert!(!window.contains(as_of() + Duration::seconds(1)));
    }

    #[test]
    fn candidates_skip_inactive_bundled_and_foreign_rows() {
        let active = product(10, "Widget");
        let mut retired = product(11, "Retired");
        retired.is_active = false;
        let mut bundle = product(12, "Bundle");
        bundle.is_bundle = true;

        let main = warehouse(20, "Main");
        let mut closed = warehouse(21, "Closed");
        closed.is_active = false;
        let mut foreign = warehouse(22, "Foreign");
        foreign.company_id = Uuid::from_u128(2);

        let products = vec![active.clone(), retired.clone(), bundle.clone()];
        let warehouses = vec![main.clone(), closed.clone(), foreign.clone()];
        let inventory = vec![
            stock(30, &active, &main, 1),
            stock(31, &active, &closed, 1),
            stock(32, &active, &foreign, 1),
            stock(33, &retired, &main, 1),
            stock(34, &bundle, &main, 1),
        ];

        let candidates = select_candidates(company(), &products, &inventory, &warehouses);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].inventory.id, Uuid::from_u128(30));
    }

    #[test]
    fn inventory_without_known_warehouse_is_dropped_silently() {
        let widget = product(10, "Widget");
        let ghost = warehouse(99, "Ghost");
        let inventory = vec![stock(30, &widget, &ghost, 1)];
        let products = vec![widget];

        let candidates = select_candidates(company(), &products, &inventory, &[]);
        assert!(candidates.is_empty());
    }

    #[test]
    fn sales_outside_window_do_not_admit() {
        let widget = product(10, "Widget");
        let main = warehouse(20, "Main");
        let other = warehouse(21, "Other");
        let inventory = vec![stock(30, &widget, &main, 1)];
        let warehouses = vec![main.clone(), other.clone()];
        let products = vec![widget.clone()];

        let sales = vec![
            sold(&widget, &main, 5, 31),
            // same product, different warehouse: does not count for `main`
            sold(&widget, &other, 5, 1),
        ];
        let totals = aggregate_sales(&sales, &SalesWindow::ending_at(as_of(), 30));
        let candidates = select_candidates(company(), &products, &inventory, &warehouses);

        assert!(admit_recent_sellers(candidates, &totals).is_empty());
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let widget = product(10, "Widget");
        let gadget = product(11, "Gadget");
        let main = warehouse(20, "Main");
        let products = vec![widget.clone(), gadget.clone()];
        let warehouses = vec![main.clone()];
        let inventory = vec![stock(30, &widget, &main, 10), stock(31, &gadget, &main, 11)];
        let sales = vec![sold(&widget, &main, 3, 2), sold(&gadget, &main, 3, 2)];

        let totals = aggregate_sales(&sales, &SalesWindow::ending_at(as_of(), 30));
        let active = admit_recent_sellers(
            select_candidates(company(), &products, &inventory, &warehouses),
            &totals,
        );
        let assessed = assess_stock_levels(active, &HashMap::new(), &AlertPolicy::default());

        assert_eq!(assessed.len(), 1);
        assert_eq!(assessed[0].candidate.product.id, widget.id);
        assert_eq!(assessed[0].threshold, 10);
    }

    #[test]
    fn category_default_applies_without_override() {
        let category = product_category::Model {
            id: Uuid::from_u128(40),
            name: "Fasteners".into(),
            low_stock_threshold: Some(20),
        };
        let mut widget = product(10, "Widget");
        widget.category_id = Some(category.id);
        let main = warehouse(20, "Main");
        let products = vec![widget.clone()];
        let warehouses = vec![main.clone()];
        let inventory = vec![stock(30, &widget, &main, 15)];
        let totals = SalesTotals::from([((widget.id, main.id), 15)]);

        let categories = HashMap::from([(category.id, category)]);
        let active = admit_recent_sellers(
            select_candidates(company(), &products, &inventory, &warehouses),
            &totals,
        );
        let assessed = assess_stock_levels(active, &categories, &AlertPolicy::default());

        assert_eq!(assessed.len(), 1);
        assert_eq!(assessed[0].threshold, 20);
        assert_eq!(assessed[0].daily_velocity, 0.5);
        assert_eq!(assessed[0].days_until_stockout, 30);
    }

    #[test]
    fn duplicate_primary_links_pick_lowest_supplier_id() {
        let widget = product(10, "Widget");
        let high = supplier::Model {
            id: Uuid::from_u128(90),
            name: "High".into(),
            contact_email: None,
        };
        let low = supplier::Model {
            id: Uuid::from_u128(80),
            name: "Low".into(),
            contact_email: Some("orders@low.example".into()),
        };
        let links = vec![
            product_supplier::Model {
                id: Uuid::from_u128(1),
                product_id: widget.id,
                supplier_id: high.id,
                is_primary: true,
            },
            product_supplier::Model {
                id: Uuid::from_u128(2),
                product_id: widget.id,
                supplier_id: low.id,
                is_primary: true,
            },
        ];
        let suppliers = vec![high, low];

        let primaries = primary_suppliers(&links, &suppliers);
        assert_eq!(primaries.len(), 1);
        assert_matches!(primaries.get(&widget.id), Some(s) if s.name == "Low");
    }

    #[test]
    fn non_primary_links_are_ignored() {
        let widget = product(10, "Widget");
        let supplier = supplier::Model {
            id: Uuid::from_u128(80),
            name: "Backup".into(),
            contact_email: None,
        };
        let links = vec![product_supplier::Model {
            id: Uuid::from_u128(1),
            product_id: widget.id,
            supplier_id: supplier.id,
            is_primary: false,
        }];

        assert!(primary_suppliers(&links, &[supplier]).is_empty());
    }

    #[test]
    fn full_pipeline_ranks_by_urgency_and_keeps_tie_order() {
        let a = product(10, "A");
        let b = product(11, "B");
        let c = product(12, "C");
        let main = warehouse(20, "Main");

        let snapshot = CatalogSnapshot {
            products: vec![a.clone(), b.clone(), c.clone()],
            warehouses: vec![main.clone()],
            inventory: vec![
                stock(30, &a, &main, 9),
                stock(31, &b, &main, 3),
                stock(32, &c, &main, 9),
            ],
            sales: vec![
                sold(&a, &main, 30, 1),
                sold(&b, &main, 30, 1),
                sold(&c, &main, 30, 1),
            ],
            ..Default::default()
        };

        let alerts = compute_low_stock_alerts(company(), &snapshot, &AlertPolicy::default(), as_of());
        let order: Vec<&str> = alerts.iter().map(|a| a.product_name.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
        assert_eq!(alerts[0].days_until_stockout, 3);
        assert!(alerts.iter().all(|a| a.supplier.is_none()));
    }

    #[test]
    fn equal_urgency_keeps_selection_order_regardless_of_volume() {
        let slow = product(10, "Slow");
        let busy = product(11, "Busy");
        let main = warehouse(20, "Main");

        let snapshot = CatalogSnapshot {
            products: vec![slow.clone(), busy.clone()],
            warehouses: vec![main.clone()],
            inventory: vec![stock(30, &slow, &main, 5), stock(31, &busy, &main, 10)],
            sales: vec![sold(&slow, &main, 30, 1), sold(&busy, &main, 60, 1)],
            ..Default::default()
        };

        let alerts = compute_low_stock_alerts(company(), &snapshot, &AlertPolicy::default(), as_of());
        let order: Vec<(&str, i64)> = alerts
            .iter()
            .map(|a| (a.product_name.as_str(), a.days_until_stockout))
            .collect();
        assert_eq!(order, vec![("Slow", 5), ("Busy", 5)]);
    }

    #[test]
    fn alert_serializes_null_supplier_and_camel_case_email() {
        let alert = LowStockAlert {
            product_id: Uuid::from_u128(1),
            product_name: "Widget".into(),
            sku: "WID-1".into(),
            warehouse_id: Uuid::from_u128(2),
            warehouse_name: "Main".into(),
            current_stock: 4,
            threshold: 10,
            days_until_stockout: 4,
            supplier: None,
        };
        let json = serde_json::to_value(&alert).unwrap();
        assert!(json.get("supplier").unwrap().is_null());

        let contact = SupplierContact {
            id: Uuid::from_u128(3),
            name: "Acme".into(),
            contact_email: Some("a@acme.example".into()),
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["contactEmail"], "a@acme.example");
    }
}
