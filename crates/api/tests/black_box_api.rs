use reqwest::StatusCode;
use serde_json::json;

use stockdesk_inventory::InventorySnapshot;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(seed: InventorySnapshot) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = stockdesk_api::app::build_app(seed);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn get_inventory(client: &reqwest::Client, base_url: &str) -> serde_json::Value {
    let res = client
        .get(format!("{}/inventory", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn(InventorySnapshot::seed()).await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn view_reports_seed_tiers_and_summary() {
    let srv = TestServer::spawn(InventorySnapshot::seed()).await;
    let client = reqwest::Client::new();

    let body = get_inventory(&client, &srv.base_url).await;
    assert_eq!(body["summary"]["total_units"], 303);
    assert_eq!(body["summary"]["unique_products"], 5);
    assert_eq!(body["tiers"]["critical"][0]["name"], "Cukier");
    assert_eq!(body["tiers"]["caution"][0]["name"], "Mleko");
    assert_eq!(body["tiers"]["sufficient"].as_array().unwrap().len(), 3);
    assert_eq!(body["records"][0]["tier"], "critical");
    assert_eq!(body["notice"]["kind"], "info");
}

#[tokio::test]
async fn added_item_is_gone_on_next_request() {
    let srv = TestServer::spawn(InventorySnapshot::seed()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/inventory/items", srv.base_url))
        .json(&json!({ "name": "  Sól ", "quantity": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let added: serde_json::Value = res.json().await.unwrap();
    assert_eq!(added["summary"]["unique_products"], 6);
    assert_eq!(added["notice"]["kind"], "success");
    assert!(
        added["tiers"]["critical"]
            .as_array()
            .unwrap()
            .iter()
            .any(|r| r["name"] == "Sól")
    );

    // Every request starts from the seed again.
    let body = get_inventory(&client, &srv.base_url).await;
    assert_eq!(body["summary"]["unique_products"], 5);
    assert_eq!(body["summary"]["total_units"], 303);
}

#[tokio::test]
async fn add_existing_keeps_quantity() {
    let srv = TestServer::spawn(InventorySnapshot::seed()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/inventory/items", srv.base_url))
        .json(&json!({ "name": "Kawa", "quantity": 999 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["notice"]["kind"], "warning");
    assert_eq!(body["summary"]["total_units"], 303);
}

#[tokio::test]
async fn add_without_quantity_uses_default() {
    let srv = TestServer::spawn(InventorySnapshot::new()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/inventory/items", srv.base_url))
        .json(&json!({ "name": "Kawa" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["summary"]["total_units"], 10);
}

#[tokio::test]
async fn invalid_adds_are_rejected() {
    let srv = TestServer::spawn(InventorySnapshot::seed()).await;
    let client = reqwest::Client::new();

    for body in [
        json!({ "name": "   ", "quantity": 10 }),
        json!({ "quantity": 10 }),
        json!({ "name": "Kawa", "quantity": 0 }),
        json!({ "name": "Sól", "quantity": -3 }),
    ] {
        let res = client
            .post(format!("{}/inventory/items", srv.base_url))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body={body}");
        let err: serde_json::Value = res.json().await.unwrap();
        assert_eq!(err["error"], "invalid_input");
    }
}

#[tokio::test]
async fn remove_present_and_absent() {
    let srv = TestServer::spawn(InventorySnapshot::seed()).await;
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{}/inventory/items/Kawa", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["summary"]["total_units"], 253);
    assert_eq!(body["summary"]["unique_products"], 4);

    let res = client
        .delete(format!("{}/inventory/items/Pieprz", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["error"], "not_found");
    assert_eq!(err["message"], "not found: Pieprz");
}

#[tokio::test]
async fn remove_accepts_percent_encoded_names() {
    let seed = InventorySnapshot::from_signed_entries([("Earl Grey", 30_i64)]).unwrap();
    let srv = TestServer::spawn(seed).await;
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{}/inventory/items/Earl%20Grey", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["summary"]["unique_products"], 0);
}

#[tokio::test]
async fn report_is_plain_text() {
    let srv = TestServer::spawn(InventorySnapshot::seed()).await;
    let res = reqwest::get(format!("{}/inventory/report", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(
        res.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );
    let text = res.text().await.unwrap();
    assert!(text.contains("critical (order immediately):"));
    assert!(text.ends_with("total units: 303, unique products: 5\n"));
}

#[tokio::test]
async fn responses_carry_evaluation_id() {
    let srv = TestServer::spawn(InventorySnapshot::seed()).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/inventory", srv.base_url))
        .send()
        .await
        .unwrap();
    let header = res.headers()[stockdesk_api::middleware::EVALUATION_ID_HEADER]
        .to_str()
        .unwrap()
        .to_string();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["evaluation_id"], header.as_str());
}
