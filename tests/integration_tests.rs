//! Integration tests for the public endpoints.
//!
//! These drive the complete application configuration (OpenAPI spec,
//! middleware stack, metrics) rather than individual handlers, so they
//! catch wiring regressions the unit tests cannot.

use actix_web::{http::StatusCode, test};
use merchant_api::create_base_app;

#[actix_web::test]
async fn test_health_endpoint_integration() {
    let app = test::init_service(create_base_app()).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK, "Expected 200 OK status");

    let content_type = resp.headers().get("content-type").unwrap();
    assert!(
        content_type.to_str().unwrap().contains("application/json"),
        "Expected JSON content type"
    );

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json, serde_json::json!({ "status": "healthy" }));
}

#[actix_web::test]
async fn test_version_endpoint_integration() {
    let app = test::init_service(create_base_app()).await;

    let req = test::TestRequest::get().uri("/api/version").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK, "Expected 200 OK status");

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert!(json.get("version").is_some(), "Response should contain 'version'");
    assert!(json.get("commit").is_some(), "Response should contain 'commit'");
    assert!(
        json.get("build_time").is_some(),
        "Response should contain 'build_time'"
    );
}

#[actix_web::test]
async fn test_metrics_endpoint_integration() {
    let app = test::init_service(create_base_app()).await;

    let req = test::TestRequest::get().uri("/api/metrics").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains("app_info"), "Expected app_info metric");
    assert!(
        body_str.contains("app_uptime_seconds"),
        "Expected uptime metric"
    );
}

#[actix_web::test]
async fn test_index_page_served() {
    let app = test::init_service(create_base_app()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp.headers().get("content-type").unwrap();
    assert!(
        content_type.to_str().unwrap().contains("text/html"),
        "Expected HTML content type"
    );

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains("Merchant API"), "Expected landing page title");
}

#[actix_web::test]
async fn test_security_headers_present() {
    let app = test::init_service(create_base_app()).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    let headers = resp.headers();
    assert_eq!(
        headers.get("x-content-type-options").unwrap(),
        "nosniff",
        "Expected nosniff header"
    );
    assert!(headers.get("x-frame-options").is_some());
    assert!(headers.get("referrer-policy").is_some());
}

#[actix_web::test]
async fn test_openapi_spec_served() {
    let app = test::init_service(create_base_app()).await;

    let req = test::TestRequest::get().uri("/api/spec/v2").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["info"]["title"], "Merchant API");
}

#[actix_web::test]
async fn test_protected_endpoint_rejects_unauthenticated() {
    let app = test::init_service(create_base_app()).await;

    let req = test::TestRequest::get().uri("/api/orders").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
