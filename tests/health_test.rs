mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;

#[tokio::test]
async fn liveness_reports_up() {
    let app = TestApp::new().await;

    let (status, body) = app.json(Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "up");
}

#[tokio::test]
async fn readiness_pings_the_database() {
    let app = TestApp::new().await;

    let (status, body) = app.json(Method::GET, "/health/ready", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"]["status"], "up");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestApp::new().await;

    let (status, body) = app.json(Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Stockwatch API");
    assert!(body["paths"]
        .get("/api/v1/companies/{company_id}/alerts/low-stock")
        .is_some());
}
