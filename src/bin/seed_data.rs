//! Seed data script - populates the database with a demo catalog
//!
//! Run with: cargo run --bin seed-data
//!
//! This creates:
//! - 1 company with 2 active warehouses and 1 inactive one
//! - 3 product categories (one without a default threshold)
//! - 8 products, one of them a bundle
//! - Inventory for every product in every warehouse
//! - 30 days of sales history
//! - 3 suppliers with primary and backup links

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, DbErr, Set};
use std::time::Duration as StdDuration;
use tracing::info;
use uuid::Uuid;

use stockwatch_api::{
    db,
    entities::{company, inventory, product, product_category, product_supplier, sale, supplier, warehouse},
};

struct SeedProduct {
    name: &'static str,
    sku: &'static str,
    price: Decimal,
    category: Option<usize>,
    is_bundle: bool,
    /// Stock per warehouse, in warehouse order
    stock: [i32; 3],
    /// Units sold per day in the first warehouse
    daily_sales: i32,
}

const CATEGORIES: [(&str, Option<i32>); 3] = [
    ("Fasteners", Some(50)),
    ("Power Tools", Some(5)),
    ("Safety", None),
];

fn seed_products() -> Vec<SeedProduct> {
    vec![
        SeedProduct { name: "Steel Bolt M6", sku: "BOLT-M6", price: dec!(0.25), category: Some(0), is_bundle: false, stock: [40, 400, 10], daily_sales: 6 },
        SeedProduct { name: "Steel Nut M6", sku: "NUT-M6", price: dec!(0.10), category: Some(0), is_bundle: false, stock: [900, 20, 0], daily_sales: 10 },
        SeedProduct { name: "Cordless Drill", sku: "DRILL-18V", price: dec!(129.00), category: Some(1), is_bundle: false, stock: [3, 12, 1], daily_sales: 1 },
        SeedProduct { name: "Impact Driver", sku: "IMPACT-18V", price: dec!(149.00), category: Some(1), is_bundle: false, stock: [5, 0, 0], daily_sales: 0 },
        SeedProduct { name: "Safety Glasses", sku: "GLASSES-CLR", price: dec!(7.50), category: Some(2), is_bundle: false, stock: [8, 30, 5], daily_sales: 2 },
        SeedProduct { name: "Work Gloves", sku: "GLOVES-L", price: dec!(12.00), category: None, is_bundle: false, stock: [9, 9, 9], daily_sales: 1 },
        SeedProduct { name: "Ear Plugs", sku: "PLUGS-200", price: dec!(19.99), category: Some(2), is_bundle: false, stock: [250, 250, 0], daily_sales: 3 },
        SeedProduct { name: "Starter Kit", sku: "KIT-START", price: dec!(159.00), category: None, is_bundle: true, stock: [1, 1, 0], daily_sales: 1 },
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("=== Stockwatch Seed Data ===");

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://stockwatch.db?mode=rwc".to_string());

    let mut options = ConnectOptions::new(database_url.clone());
    options
        .max_connections(5)
        .min_connections(1)
        .connect_timeout(StdDuration::from_secs(10))
        .acquire_timeout(StdDuration::from_secs(10));

    info!("Connecting to database: {}", database_url);
    let conn = Database::connect(options).await?;
    db::run_migrations(&conn).await?;

    let company_id = create_company(&conn).await?;
    info!("  Created company {}", company_id);

    let warehouses = create_warehouses(&conn, company_id).await?;
    info!("  Created {} warehouses", warehouses.len());

    let categories = create_categories(&conn).await?;
    info!("  Created {} categories", categories.len());

    let suppliers = create_suppliers(&conn).await?;
    info!("  Created {} suppliers", suppliers.len());

    let mut sales_count = 0;
    let seeds = seed_products();
    for (index, seed) in seeds.iter().enumerate() {
        let product_id = create_product(&conn, company_id, seed, &categories).await?;
        for (warehouse_id, quantity) in warehouses.iter().zip(seed.stock) {
            create_inventory(&conn, product_id, *warehouse_id, quantity).await?;
        }
        sales_count += create_sales(&conn, product_id, warehouses[0], seed.daily_sales).await?;

        // Every other product gets a primary supplier; the first also has a backup
        if index % 2 == 0 {
            link_supplier(&conn, product_id, suppliers[index % suppliers.len()], true).await?;
        }
        if index == 0 {
            link_supplier(&conn, product_id, suppliers[1], false).await?;
        }
    }
    info!("  Created {} products and {} sales", seeds.len(), sales_count);

    info!("=== Seed Data Complete ===");
    info!("Try:");
    info!(
        "  curl http://localhost:8080/api/v1/companies/{}/alerts/low-stock",
        company_id
    );
    info!("  cargo run --bin stockwatch-cli -- alerts --company {}", company_id);

    Ok(())
}

async fn create_company(db: &DatabaseConnection) -> Result<Uuid, DbErr> {
    let model = company::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Northwind Hardware".to_string()),
        created_at: Set(Utc::now()),
    }
    .insert(db)
    .await?;
    Ok(model.id)
}

async fn create_warehouses(db: &DatabaseConnection, company_id: Uuid) -> Result<Vec<Uuid>, DbErr> {
    let sites = [
        ("Central DC", Some("Columbus, OH"), true),
        ("West Coast Hub", Some("Reno, NV"), true),
        ("Legacy Annex", None, false),
    ];

    let mut ids = Vec::with_capacity(sites.len());
    for (name, location, is_active) in sites {
        let model = warehouse::ActiveModel {
            id: Set(Uuid::new_v4()),
            company_id: Set(company_id),
            name: Set(name.to_string()),
            location: Set(location.map(str::to_string)),
            is_active: Set(is_active),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await?;
        ids.push(model.id);
    }
    Ok(ids)
}

async fn create_categories(db: &DatabaseConnection) -> Result<Vec<Uuid>, DbErr> {
    let mut ids = Vec::with_capacity(CATEGORIES.len());
    for (name, threshold) in CATEGORIES {
        let model = product_category::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            low_stock_threshold: Set(threshold),
        }
        .insert(db)
        .await?;
        ids.push(model.id);
    }
    Ok(ids)
}

async fn create_suppliers(db: &DatabaseConnection) -> Result<Vec<Uuid>, DbErr> {
    let rows = [
        ("Acme Fastening Co.", Some("orders@acme-fastening.example")),
        ("Volt Tools Ltd.", Some("sales@volttools.example")),
        ("SafeWorks", None),
    ];

    let mut ids = Vec::with_capacity(rows.len());
    for (name, email) in rows {
        let model = supplier::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            contact_email: Set(email.map(str::to_string)),
        }
        .insert(db)
        .await?;
        ids.push(model.id);
    }
    Ok(ids)
}

async fn create_product(
    db: &DatabaseConnection,
    company_id: Uuid,
    seed: &SeedProduct,
    categories: &[Uuid],
) -> Result<Uuid, DbErr> {
    let model = product::ActiveModel {
        id: Set(Uuid::new_v4()),
        company_id: Set(company_id),
        name: Set(seed.name.to_string()),
        sku: Set(seed.sku.to_string()),
        price: Set(seed.price),
        category_id: Set(seed.category.and_then(|i| categories.get(i).copied())),
        is_active: Set(true),
        is_bundle: Set(seed.is_bundle),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model.id)
}

async fn create_inventory(
    db: &DatabaseConnection,
    product_id: Uuid,
    warehouse_id: Uuid,
    quantity: i32,
) -> Result<(), DbErr> {
    inventory::ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(product_id),
        warehouse_id: Set(warehouse_id),
        quantity: Set(quantity),
        low_stock_threshold: Set(None),
        updated_at: Set(Utc::now()),
    }
    .insert(db)
    .await?;
    Ok(())
}

/// One sale per day for the last 29 days
async fn create_sales(
    db: &DatabaseConnection,
    product_id: Uuid,
    warehouse_id: Uuid,
    daily_units: i32,
) -> Result<usize, DbErr> {
    if daily_units <= 0 {
        return Ok(0);
    }

    let now = Utc::now();
    let mut created = 0;
    for day in 1..30 {
        sale::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(product_id),
            warehouse_id: Set(warehouse_id),
            quantity: Set(daily_units),
            sale_date: Set(now - Duration::days(day)),
        }
        .insert(db)
        .await?;
        created += 1;
    }
    Ok(created)
}

async fn link_supplier(
    db: &DatabaseConnection,
    product_id: Uuid,
    supplier_id: Uuid,
    is_primary: bool,
) -> Result<(), DbErr> {
    product_supplier::ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(product_id),
        supplier_id: Set(supplier_id),
        is_primary: Set(is_primary),
    }
    .insert(db)
    .await?;
    Ok(())
}
