//! End-to-end route tests against the in-memory store

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use orderdesk_server::db::CompanyStore;
use orderdesk_server::models::{Company, CompanyFields, IdGenerator};
use orderdesk_server::{build_router, AppState, MemoryStore, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let state = Arc::new(AppState::new(Arc::new(MemoryStore::new())));
    build_router(state, &ServerConfig::default())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Send a raw body with an optional content type.
async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// === Companies ===

#[tokio::test]
async fn company_create_then_list_and_get() {
    let app = app();

    let (status, created) = send(
        &app,
        "POST",
        "/company",
        Some(json!({ "COMPANY_NAME": "Apple", "COMPANY_CITY": "Charlotte" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["COMPANY_NAME"], "Apple");
    assert_eq!(created["COMPANY_CITY"], "Charlotte");

    let id = created["COMPANY_ID"].as_str().unwrap().to_owned();
    assert_eq!(id.len(), 6);

    let (status, list) = send(&app, "GET", "/companies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([created.clone()]));

    let (status, fetched) = send(&app, "GET", &format!("/company/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn company_create_defaults_undefined_fields() {
    let app = app();

    let (status, created) = send(&app, "POST", "/company", Some(json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["COMPANY_NAME"], "");
    assert_eq!(created["COMPANY_CITY"], "");
}

#[tokio::test]
async fn company_patch_changes_only_named_fields() {
    let app = app();
    let (_, created) = send(
        &app,
        "POST",
        "/company",
        Some(json!({ "COMPANY_NAME": "Apple", "COMPANY_CITY": "Charlotte" })),
    )
    .await;
    let uri = format!("/company/{}", created["COMPANY_ID"].as_str().unwrap());

    let (status, patched) = send(&app, "PATCH", &uri, Some(json!({ "COMPANY_CITY": "Raleigh" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["COMPANY_NAME"], "Apple");
    assert_eq!(patched["COMPANY_CITY"], "Raleigh");

    // Empty patch is a no-op
    let (status, unchanged) = send(&app, "PATCH", &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged, patched);
}

#[tokio::test]
async fn company_put_overwrites_every_field() {
    let app = app();
    let (_, created) = send(
        &app,
        "POST",
        "/company",
        Some(json!({ "COMPANY_NAME": "Apple", "COMPANY_CITY": "Charlotte" })),
    )
    .await;
    let uri = format!("/company/{}", created["COMPANY_ID"].as_str().unwrap());

    let (status, replaced) = send(&app, "PUT", &uri, Some(json!({ "COMPANY_NAME": "Pear" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["COMPANY_ID"], created["COMPANY_ID"]);
    assert_eq!(replaced["COMPANY_NAME"], "Pear");
    assert_eq!(replaced["COMPANY_CITY"], "");
}

#[tokio::test]
async fn company_delete_removes_record() {
    let app = app();
    let (_, created) = send(&app, "POST", "/company", Some(json!({ "COMPANY_NAME": "Apple" }))).await;
    let uri = format!("/company/{}", created["COMPANY_ID"].as_str().unwrap());

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "deleted": true }));

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (_, list) = send(&app, "GET", "/companies", None).await;
    assert_eq!(list, json!([]));

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn company_update_unknown_id_is_404() {
    let app = app();

    let (status, _) = send(&app, "PUT", "/company/999999", Some(json!({ "COMPANY_NAME": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PATCH", "/company/999999", Some(json!({ "COMPANY_NAME": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PATCH", "/company/999999", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/company")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn wrong_field_type_is_400() {
    let app = app();
    let (status, body) = send(&app, "POST", "/order", Some(json!({ "ORD_AMOUNT": "lots" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn company_empty_body_patch_is_noop() {
    let app = app();
    let (_, created) = send(
        &app,
        "POST",
        "/company",
        Some(json!({ "COMPANY_NAME": "Apple", "COMPANY_CITY": "Charlotte" })),
    )
    .await;
    let uri = format!("/company/{}", created["COMPANY_ID"].as_str().unwrap());

    let (status, unchanged) = send_raw(&app, "PATCH", &uri, None, "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged, created);

    let (status, unchanged) = send_raw(&app, "PATCH", &uri, Some("application/json"), "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged, created);
}

#[tokio::test]
async fn company_empty_body_post_creates_defaults() {
    let app = app();

    let (status, created) = send_raw(&app, "POST", "/company", None, "").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["COMPANY_NAME"], "");
    assert_eq!(created["COMPANY_CITY"], "");
    assert_eq!(created["COMPANY_ID"].as_str().unwrap().len(), 6);
}

#[tokio::test]
async fn non_json_body_is_400() {
    let app = app();

    let (status, body) = send_raw(
        &app,
        "POST",
        "/company",
        Some("text/plain"),
        "COMPANY_NAME=Apple",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn company_create_with_taken_id_is_409() {
    let store = Arc::new(MemoryStore::new());
    store
        .create_company(Company::new(
            "123456",
            CompanyFields {
                company_name: "Apple".into(),
                company_city: "Charlotte".into(),
            },
        ))
        .await
        .unwrap();

    // Frozen clock: the first generated id is 123456, the next 123457
    let ids = IdGenerator::with_clock(|| 1_700_000_123_456);
    let state = Arc::new(AppState::with_ids(store, ids));
    let app = build_router(state, &ServerConfig::default());

    let (status, body) = send(&app, "POST", "/company", Some(json!({ "COMPANY_NAME": "Pear" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");

    let (_, existing) = send(&app, "GET", "/company/123456", None).await;
    assert_eq!(existing["COMPANY_NAME"], "Apple");

    let (status, created) = send(&app, "POST", "/company", Some(json!({ "COMPANY_NAME": "Pear" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["COMPANY_ID"], "123457");
}

// === Orders ===

#[tokio::test]
async fn order_create_then_fetch() {
    let app = app();

    let (status, created) = send(
        &app,
        "POST",
        "/order",
        Some(json!({
            "ORD_AMOUNT": 230,
            "ADVANCE_AMOUNT": 150,
            "ORD_DATE": "2008-01-08T00:00:00.000Z",
            "CUST_CODE": "C12315",
            "AGENT_CODE": "A123",
            "ORD_DESCRIPTION": "SOD"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["ORD_AMOUNT"], 230.0);
    assert_eq!(created["CUST_CODE"], "C12315");

    let ord_num = created["ORD_NUM"].as_i64().unwrap();
    assert!((0..1_000_000).contains(&ord_num));

    let (status, fetched) = send(&app, "GET", &format!("/order/{}", ord_num), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, list) = send(&app, "GET", "/orders", None).await;
    assert_eq!(list, json!([created]));
}

#[tokio::test]
async fn order_create_defaults_to_zero_and_empty() {
    let app = app();

    let (_, created) = send(&app, "POST", "/order", Some(json!({ "CUST_CODE": "C1" }))).await;
    assert_eq!(created["ORD_AMOUNT"], 0.0);
    assert_eq!(created["ADVANCE_AMOUNT"], 0.0);
    assert_eq!(created["ORD_DATE"], "");
    assert_eq!(created["AGENT_CODE"], "");
    assert_eq!(created["ORD_DESCRIPTION"], "");
    assert_eq!(created["CUST_CODE"], "C1");
}

#[tokio::test]
async fn order_patch_and_put() {
    let app = app();
    let (_, created) = send(
        &app,
        "POST",
        "/order",
        Some(json!({ "ORD_AMOUNT": 230, "AGENT_CODE": "A123", "ORD_DESCRIPTION": "SOD" })),
    )
    .await;
    let uri = format!("/order/{}", created["ORD_NUM"].as_i64().unwrap());

    let (status, patched) = send(
        &app,
        "PATCH",
        &uri,
        Some(json!({ "ADVANCE_AMOUNT": 50, "ORD_DESCRIPTION": "updated" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["ORD_AMOUNT"], 230.0);
    assert_eq!(patched["ADVANCE_AMOUNT"], 50.0);
    assert_eq!(patched["AGENT_CODE"], "A123");
    assert_eq!(patched["ORD_DESCRIPTION"], "updated");

    let (status, replaced) = send(&app, "PUT", &uri, Some(json!({ "ORD_AMOUNT": 10 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["ORD_NUM"], created["ORD_NUM"]);
    assert_eq!(replaced["ORD_AMOUNT"], 10.0);
    assert_eq!(replaced["ADVANCE_AMOUNT"], 0.0);
    assert_eq!(replaced["AGENT_CODE"], "");
}

#[tokio::test]
async fn order_delete_removes_record() {
    let app = app();
    let (_, created) = send(&app, "POST", "/order", Some(json!({ "ORD_AMOUNT": 1 }))).await;
    let uri = format!("/order/{}", created["ORD_NUM"].as_i64().unwrap());

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn order_unknown_number_is_404() {
    let app = app();

    let (status, body) = send(&app, "PUT", "/order/999999", Some(json!({ "ORD_AMOUNT": 1 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, body) = send(&app, "PATCH", "/order/999999", Some(json!({ "ORD_AMOUNT": 1 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, body) = send(&app, "DELETE", "/order/999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    // An empty patch still has to find the record
    let (status, _) = send(&app, "PATCH", "/order/999999", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn order_empty_body_post_creates_defaults() {
    let app = app();

    let (status, created) = send_raw(&app, "POST", "/order", Some("application/json"), "").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["ORD_AMOUNT"], 0.0);
    assert_eq!(created["CUST_CODE"], "");
}

#[tokio::test]
async fn non_numeric_order_number_is_400() {
    let app = app();

    let (status, body) = send(&app, "GET", "/order/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = send(&app, "DELETE", "/order/1%20OR%201=1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn back_to_back_creates_get_distinct_ids() {
    let app = app();

    let (_, a) = send(&app, "POST", "/order", Some(json!({}))).await;
    let (_, b) = send(&app, "POST", "/order", Some(json!({}))).await;
    assert_ne!(a["ORD_NUM"], b["ORD_NUM"]);

    let (_, list) = send(&app, "GET", "/orders", None).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}
