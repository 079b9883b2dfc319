//! Stockwatch API library
//!
//! Low-stock alerting over a multi-company, multi-warehouse inventory catalog. The
//! alert engine lives in [`services::low_stock`]; everything else is the HTTP,
//! persistence and configuration plumbing around it.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod middleware_helpers;
pub mod migrator;
pub mod openapi;
pub mod services;
pub mod tracing;

use axum::{
    routing::{get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{
    inventory::InventoryService, low_stock::LowStockAlertService, products::ProductService,
};

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: AppConfig,
    pub low_stock: LowStockAlertService,
    pub inventory: InventoryService,
    pub products: ProductService,
}

impl AppState {
    /// Wires every service to the shared pool; the alert policy comes from `config.alerts`.
    pub fn new(db: Arc<DatabaseConnection>, config: AppConfig) -> Self {
        Self {
            low_stock: LowStockAlertService::new(db.clone(), config.alert_policy()),
            inventory: InventoryService::new(db.clone()),
            products: ProductService::new(db.clone()),
            db,
            config,
        }
    }
}

/// Versioned API routes, nested under `/api/v1`
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/companies/{company_id}/alerts/low-stock",
            get(handlers::alerts::get_low_stock_alerts),
        )
        .route(
            "/inventory/{inventory_id}/threshold",
            put(handlers::inventory::set_inventory_threshold),
        )
        .route("/products", post(handlers::products::create_product))
}

/// Full application router: API, health probes, OpenAPI document, request ids and
/// HTTP tracing. CORS and timeouts are left to the binary.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_v1_routes())
        .merge(handlers::health::health_routes())
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        // HTTP tracing layer for consistent request/response telemetry
        .layer(crate::tracing::configure_http_tracing())
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
        .with_state(state)
}
