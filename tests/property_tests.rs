//! Property-based tests for the low-stock alert pipeline.
//!
//! Random catalogs are pushed through the pure pipeline and checked against the
//! admission rules and the ranking order.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use stockwatch_api::{
    entities::{inventory, product, sale, warehouse},
    services::low_stock::{
        compute_low_stock_alerts, rank_alerts, resolve_threshold, AlertPolicy, CatalogSnapshot,
        LowStockAlert, SalesVelocity,
    },
};
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Row {
    stock: i32,
    custom_threshold: Option<i32>,
    units_sold: i32,
    sale_days_ago: i64,
    product_active: bool,
    is_bundle: bool,
    warehouse_active: bool,
}

fn row_strategy() -> impl Strategy<Value = Row> {
    (
        0i32..60,
        proptest::option::of(0i32..40),
        0i32..200,
        0i64..60,
        prop::bool::weighted(0.85),
        prop::bool::weighted(0.1),
        prop::bool::weighted(0.85),
    )
        .prop_map(
            |(stock, custom_threshold, units_sold, sale_days_ago, product_active, is_bundle, warehouse_active)| Row {
                stock,
                custom_threshold,
                units_sold,
                sale_days_ago,
                product_active,
                is_bundle,
                warehouse_active,
            },
        )
}

fn build_snapshot(company_id: Uuid, rows: &[Row]) -> CatalogSnapshot {
    let as_of = reference_time();
    let mut snapshot = CatalogSnapshot::default();

    for (i, row) in rows.iter().enumerate() {
        let warehouse_id = Uuid::new_v4();
        let product_id = Uuid::new_v4();

        snapshot.warehouses.push(warehouse::Model {
            id: warehouse_id,
            company_id,
            name: format!("WH-{i}"),
            location: None,
            is_active: row.warehouse_active,
            created_at: as_of,
        });
        snapshot.products.push(product::Model {
            id: product_id,
            company_id,
            name: format!("Product {i}"),
            sku: format!("SKU-{i:04}"),
            price: Decimal::ONE,
            category_id: None,
            is_active: row.product_active,
            is_bundle: row.is_bundle,
            created_at: as_of,
            updated_at: None,
        });
        snapshot.inventory.push(inventory::Model {
            id: Uuid::new_v4(),
            product_id,
            warehouse_id,
            quantity: row.stock,
            low_stock_threshold: row.custom_threshold,
            updated_at: as_of,
        });
        if row.units_sold > 0 {
            snapshot.sales.push(sale::Model {
                id: Uuid::new_v4(),
                product_id,
                warehouse_id,
                quantity: row.units_sold,
                sale_date: as_of - Duration::days(row.sale_days_ago),
            });
        }
    }

    snapshot
}

fn reference_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
}

fn expected_alert(row: &Row, policy: &AlertPolicy) -> bool {
    let threshold = resolve_threshold(row.custom_threshold, None, policy.fallback_threshold);
    row.product_active
        && !row.is_bundle
        && row.warehouse_active
        && row.units_sold > 0
        && row.sale_days_ago <= policy.sales_window_days
        && row.stock <= threshold
}

fn alert(days: i64, n: u128) -> LowStockAlert {
    LowStockAlert {
        product_id: Uuid::from_u128(n),
        product_name: format!("P{n}"),
        sku: format!("SKU-{n}"),
        warehouse_id: Uuid::from_u128(n + 1000),
        warehouse_name: "Main".into(),
        current_stock: 1,
        threshold: 10,
        days_until_stockout: days,
        supplier: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn alerts_match_admission_rules(rows in prop::collection::vec(row_strategy(), 0..25)) {
        let company_id = Uuid::new_v4();
        let policy = AlertPolicy::default();
        let snapshot = build_snapshot(company_id, &rows);

        let alerts = compute_low_stock_alerts(company_id, &snapshot, &policy, reference_time());

        let expected = rows.iter().filter(|r| expected_alert(r, &policy)).count();
        prop_assert_eq!(alerts.len(), expected);
        for alert in &alerts {
            prop_assert!(alert.current_stock <= alert.threshold);
        }
    }

    #[test]
    fn alerts_are_sorted_by_urgency(rows in prop::collection::vec(row_strategy(), 0..25)) {
        let company_id = Uuid::new_v4();
        let snapshot = build_snapshot(company_id, &rows);

        let alerts = compute_low_stock_alerts(company_id, &snapshot, &AlertPolicy::default(), reference_time());

        prop_assert!(alerts
            .windows(2)
            .all(|w| w[0].days_until_stockout <= w[1].days_until_stockout));
    }

    #[test]
    fn ranking_is_stable_for_ties(days in prop::collection::vec(0i64..5, 0..40)) {
        let alerts: Vec<LowStockAlert> = days
            .iter()
            .enumerate()
            .map(|(i, d)| alert(*d, i as u128))
            .collect();

        let ranked = rank_alerts(alerts);

        for pair in ranked.windows(2) {
            if pair[0].days_until_stockout == pair[1].days_until_stockout {
                prop_assert!(pair[0].product_id < pair[1].product_id);
            }
        }
    }

    #[test]
    fn stockout_projection_is_the_floor(stock in 0i32..100_000, sold in 1i64..10_000, window in 1i64..365) {
        let days = SalesVelocity::new(sold, window)
            .days_until_stockout(stock)
            .expect("moving stock has a projection");

        let scaled = i64::from(stock) * window;
        prop_assert!(days * sold <= scaled);
        prop_assert!(scaled < (days + 1) * sold);
    }
}
