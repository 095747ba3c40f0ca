//! In-process router tests (no socket).

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use stockdesk_inventory::InventorySnapshot;

async fn call(req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let app = stockdesk_api::app::build_app(InventorySnapshot::seed());
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn view_over_fresh_router() {
    let req = Request::get("/inventory").body(Body::empty()).unwrap();
    let (status, body) = call(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["unique_products"], 5);
}

#[tokio::test]
async fn add_returns_created() {
    let req = Request::post("/inventory/items")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"name":"Sól","quantity":3}"#))
        .unwrap();
    let (status, body) = call(req).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["summary"]["total_units"], 306);
}

#[tokio::test]
async fn remove_missing_is_not_found() {
    let req = Request::delete("/inventory/items/Pieprz")
        .body(Body::empty())
        .unwrap();
    let (status, body) = call(req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let req = Request::get("/nope").body(Body::empty()).unwrap();
    let (status, _) = call(req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

fn post_items(body: &'static str) -> Request<Body> {
    Request::post("/inventory/items")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn malformed_add_bodies_use_json_error_contract() {
    for raw in [
        r#"{"name":"Kawa","quantity":"ten"}"#,
        r#"{"name":"Kawa","quantity":2.5}"#,
        r#"{"name":"Kawa","quantity":99999999999999999999}"#,
        r#"{"name":"Kawa""#,
    ] {
        let (status, body) = call(post_items(raw)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body={raw}");
        assert_eq!(body["error"], "invalid_input", "body={raw}");
        assert!(body["message"].is_string(), "body={raw}");
    }
}

#[tokio::test]
async fn add_without_content_type_is_invalid_input() {
    let req = Request::post("/inventory/items")
        .body(Body::from(r#"{"name":"Kawa"}"#))
        .unwrap();
    let (status, body) = call(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
}
