use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;

use stockroom_store::MemoryInventoryStore;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, in-memory store, ephemeral port.
        let store: stockroom_api::app::services::SharedStore =
            Arc::new(MemoryInventoryStore::new());
        let app = stockroom_api::app::build_app_with(store);
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

async fn add(client: &reqwest::Client, base: &str, name: &str, qty: i64) -> reqwest::Response {
    client
        .post(format!("{base}/documents/{name}/{qty}"))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_and_home_respond() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.get(&srv.base_url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["documents"], "/documents");
}

#[tokio::test]
async fn add_then_get_roundtrip() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = add(&client, &srv.base_url, "paper", 5).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["document"]["document_id"], 1);
    assert_eq!(body["document"]["document_name"], "paper");
    assert_eq!(body["document"]["quantity"], 5);

    // Same name increments, same id.
    let res = add(&client, &srv.base_url, "paper", 3).await;
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["document"]["document_id"], 1);
    assert_eq!(body["document"]["quantity"], 8);

    let res = client
        .get(format!("{}/documents/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["document"]["quantity"], 8);
}

#[tokio::test]
async fn add_rejects_non_positive_quantity() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = add(&client, &srv.base_url, "x", 0).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_quantity");

    let res = add(&client, &srv.base_url, "x", -2).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .post(format!("{}/documents/x/lots", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_returns_all_documents_sorted() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    add(&client, &srv.base_url, "pen", 10).await;
    add(&client, &srv.base_url, "ink", 2).await;

    let res = client
        .get(format!("{}/documents", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    let docs = body["documents"].as_array().unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0]["document_id"], 1);
    assert_eq!(docs[0]["document_name"], "pen");
    assert_eq!(docs[1]["document_id"], 2);
    assert_eq!(docs[1]["document_name"], "ink");
}

#[tokio::test]
async fn remove_decrements_then_deletes() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    add(&client, &srv.base_url, "pen", 10).await;

    let res = client
        .delete(format!("{}/documents/1/4", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["remaining"], 6);

    // Removing at least the remaining quantity deletes the record.
    let res = client
        .delete(format!("{}/documents/1/6", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["result"], "document deleted.");

    let res = client
        .get(format!("{}/documents/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn remove_rejects_bad_quantities() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    add(&client, &srv.base_url, "pen", 10).await;

    let res = client
        .delete(format!("{}/documents/1/0", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_quantity");

    let res = client
        .delete(format!("{}/documents/1/-3", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .delete(format!("{}/documents/1/lots", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_quantity");

    // The rejected removals left the record untouched.
    let res = client
        .get(format!("{}/documents/1", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["document"]["quantity"], 10);
}

#[tokio::test]
async fn delete_removes_document() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    add(&client, &srv.base_url, "ink", 2).await;

    let res = client
        .delete(format!("{}/documents/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .delete(format!("{}/documents/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn unknown_ids_and_malformed_ids() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/documents/99", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("{}/documents/not-a-number", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");

    let res = client
        .delete(format!("{}/documents/99/5", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
