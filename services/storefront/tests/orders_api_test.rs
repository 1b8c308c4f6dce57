//! 订单 API 集成测试

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use storefront::api;
use storefront::state::AppState;

fn test_app() -> Router {
    api::routes().with_state(AppState::new())
}

async fn request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("valid request"),
        None => builder.body(Body::empty()).expect("valid request"),
    };

    let response = app.clone().oneshot(request).await.expect("request handled");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// 创建订单并读回，items 保持顺序
#[tokio::test]
async fn test_create_and_get_order() {
    let app = test_app();

    let (status, created) = request(
        &app,
        "POST",
        "/orders",
        Some(json!({"user_id": 1, "items": [3, 1, 2], "total": 42.5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        created,
        json!({"id": 1, "user_id": 1, "items": [3, 1, 2], "total": 42.5})
    );

    let (status, fetched) = request(&app, "GET", "/orders/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

/// user_id 不做存在性校验：引用不存在的用户也能下单
#[tokio::test]
async fn test_order_accepts_unknown_user_reference() {
    let app = test_app();

    let (status, created) = request(
        &app,
        "POST",
        "/orders",
        Some(json!({"user_id": 999, "items": [], "total": 0.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["user_id"], json!(999));
}

/// list 按创建顺序返回全部订单
#[tokio::test]
async fn test_list_orders_preserves_creation_order() {
    let app = test_app();

    request(
        &app,
        "POST",
        "/orders",
        Some(json!({"user_id": 1, "items": [1], "total": 10.0})),
    )
    .await;
    request(
        &app,
        "POST",
        "/orders",
        Some(json!({"user_id": 2, "items": [2], "total": 20.0})),
    )
    .await;

    let (status, orders) = request(&app, "GET", "/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders[0]["id"], json!(1));
    assert_eq!(orders[1]["id"], json!(2));
}

/// 订单支持完整的 update/delete
#[tokio::test]
async fn test_update_and_delete_order() {
    let app = test_app();
    request(
        &app,
        "POST",
        "/orders",
        Some(json!({"user_id": 1, "items": [1], "total": 10.0})),
    )
    .await;

    let (status, updated) = request(
        &app,
        "PUT",
        "/orders/1",
        Some(json!({"user_id": 1, "items": [1, 2], "total": 30.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], json!(1));
    assert_eq!(updated["items"], json!([1, 2]));

    let (status, body) = request(&app, "DELETE", "/orders/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"deleted": true}));

    let (status, problem) = request(&app, "GET", "/orders/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(problem["detail"], json!("Not found: Order 1 not found"));
}
