#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use serde_json::Value;
use stockwatch_api::{
    config::AppConfig,
    db,
    entities::{company, inventory, product, product_category, product_supplier, sale, supplier, warehouse},
    AppState,
};
use tower::ServiceExt;
use uuid::Uuid;

/// Helper harness for spinning up the application backed by an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        Self::with_config(cfg).await
    }

    pub async fn with_config(cfg: AppConfig) -> Self {
        // A single long-lived connection keeps the in-memory database alive
        let mut options = ConnectOptions::new(cfg.database_url.clone());
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let pool = Database::connect(options)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), cfg);
        let router = stockwatch_api::app_router(state.clone());

        Self { router, state }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.state.db
    }

    /// Send a request against the router.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Send a prepared request.
    pub async fn send(&self, request: Request<Body>) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Send a raw body with a JSON content type.
    pub async fn request_raw(&self, method: Method, uri: &str, body: &str) -> axum::response::Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    pub async fn json(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let response = self.request(method, uri, body).await;
        let status = response.status();
        (status, response_json(response).await)
    }

    pub async fn low_stock(&self, company_id: impl std::fmt::Display) -> (StatusCode, Value) {
        self.json(
            Method::GET,
            &format!("/api/v1/companies/{}/alerts/low-stock", company_id),
            None,
        )
        .await
    }

    // Fixtures

    pub async fn company(&self, name: &str) -> Uuid {
        company::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            created_at: Set(Utc::now()),
        }
        .insert(self.db())
        .await
        .expect("insert company")
        .id
    }

    pub async fn warehouse(&self, company_id: Uuid, name: &str, is_active: bool) -> Uuid {
        warehouse::ActiveModel {
            id: Set(Uuid::new_v4()),
            company_id: Set(company_id),
            name: Set(name.to_string()),
            location: Set(None),
            is_active: Set(is_active),
            created_at: Set(Utc::now()),
        }
        .insert(self.db())
        .await
        .expect("insert warehouse")
        .id
    }

    pub async fn category(&self, name: &str, threshold: Option<i32>) -> Uuid {
        product_category::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            low_stock_threshold: Set(threshold),
        }
        .insert(self.db())
        .await
        .expect("insert category")
        .id
    }

    /// Active, non-bundle product without a category
    pub async fn product(&self, company_id: Uuid, sku: &str) -> Uuid {
        self.product_with(company_id, sku, None, true, false).await
    }

    pub async fn product_with(
        &self,
        company_id: Uuid,
        sku: &str,
        category_id: Option<Uuid>,
        is_active: bool,
        is_bundle: bool,
    ) -> Uuid {
        product::ActiveModel {
            id: Set(Uuid::new_v4()),
            company_id: Set(company_id),
            name: Set(format!("Product {}", sku)),
            sku: Set(sku.to_string()),
            price: Set(Decimal::new(1999, 2)),
            category_id: Set(category_id),
            is_active: Set(is_active),
            is_bundle: Set(is_bundle),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .expect("insert product")
        .id
    }

    pub async fn stock(
        &self,
        product_id: Uuid,
        warehouse_id: Uuid,
        quantity: i32,
        threshold: Option<i32>,
    ) -> Uuid {
        inventory::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(product_id),
            warehouse_id: Set(warehouse_id),
            quantity: Set(quantity),
            low_stock_threshold: Set(threshold),
            updated_at: Set(Utc::now() - Duration::days(3)),
        }
        .insert(self.db())
        .await
        .expect("insert inventory")
        .id
    }

    pub async fn sale(&self, product_id: Uuid, warehouse_id: Uuid, quantity: i32, days_ago: i64) {
        sale::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(product_id),
            warehouse_id: Set(warehouse_id),
            quantity: Set(quantity),
            sale_date: Set(Utc::now() - Duration::days(days_ago)),
        }
        .insert(self.db())
        .await
        .expect("insert sale");
    }

    pub async fn supplier(&self, name: &str, email: Option<&str>) -> Uuid {
        self.supplier_with_id(Uuid::new_v4(), name, email).await
    }

    pub async fn supplier_with_id(&self, id: Uuid, name: &str, email: Option<&str>) -> Uuid {
        supplier::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            contact_email: Set(email.map(str::to_string)),
        }
        .insert(self.db())
        .await
        .expect("insert supplier")
        .id
    }

    pub async fn link_supplier(&self, product_id: Uuid, supplier_id: Uuid, is_primary: bool) {
        product_supplier::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(product_id),
            supplier_id: Set(supplier_id),
            is_primary: Set(is_primary),
        }
        .insert(self.db())
        .await
        .expect("insert product supplier link");
    }
}

pub async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is not json")
    }
}
