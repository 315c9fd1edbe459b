use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use rollcall_api::app::{build_app, errors::GENERIC_FAILURE, services::AppServices};
use rollcall_core::RecordId;
use rollcall_infra::repository::InMemoryStore;
use rollcall_students::Student;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, backed by a fresh in-memory store, bound to
        // an ephemeral port.
        let services = Arc::new(AppServices::new(Arc::new(InMemoryStore::<Student>::new())));
        let app = build_app(services);
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

async fn create_student(
    client: &reqwest::Client,
    base_url: &str,
    email: &str,
    first: &str,
    last: &str,
) -> serde_json::Value {
    let res = client
        .post(format!("{}/students", base_url))
        .json(&json!({ "email": email, "firstName": first, "lastName": last }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

#[tokio::test]
async fn welcome_and_about_routes_respond() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(&srv.base_url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["msg"], "Welcome to the Student API");

    let res = client
        .get(format!("{}/about", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["msg"], "about endpoint");
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let res = reqwest::Client::new()
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_assigns_id_and_echoes_fields() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_student(&client, &srv.base_url, "a@x.com", "Ann", "Lee").await;
    assert_eq!(created["email"], "a@x.com");
    assert_eq!(created["firstName"], "Ann");
    assert_eq!(created["lastName"], "Lee");

    let id = created["id"].as_str().unwrap();
    assert!(id.parse::<RecordId>().is_ok());

    // The list now contains exactly that record.
    let res = client
        .get(format!("{}/students", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let listed: serde_json::Value = res.json().await.unwrap();
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn created_student_is_retrievable_by_id() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_student(&client, &srv.base_url, "a@x.com", "Ann", "Lee").await;
    let id = created["id"].as_str().unwrap();

    let res = client
        .get(format!("{}/students/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let found: serde_json::Value = res.json().await.unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
async fn unknown_id_is_a_null_success() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .get(format!("{}/students/{}", srv.base_url, RecordId::new()))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body.is_null());
}

#[tokio::test]
async fn malformed_id_is_rejected() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .get(format!("{}/students/not-a-uuid", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn update_patches_only_supplied_fields() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_student(&client, &srv.base_url, "a@x.com", "Ann", "Lee").await;
    let id = created["id"].as_str().unwrap();

    let res = client
        .patch(format!("{}/students/{}", srv.base_url, id))
        .json(&json!({ "email": "ann@y.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();

    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["email"], "ann@y.com");
    assert_eq!(updated["firstName"], "Ann");
    assert_eq!(updated["lastName"], "Lee");
}

#[tokio::test]
async fn update_unknown_id_answers_with_the_generic_failure() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .patch(format!("{}/students/{}", srv.base_url, RecordId::new()))
        .json(&json!({ "email": "ghost@x.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], GENERIC_FAILURE);
}

#[tokio::test]
async fn list_filters_by_name_case_insensitively() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create_student(&client, &srv.base_url, "a@x.com", "Ann", "Lee").await;
    create_student(&client, &srv.base_url, "b@x.com", "Bob", "Ray").await;

    let res = client
        .get(format!("{}/students?firstName=ann", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let listed: serde_json::Value = res.json().await.unwrap();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["email"], "a@x.com");

    // No match is an empty list, not an error.
    let res = client
        .get(format!("{}/students?email=nobody@x.com", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let listed: serde_json::Value = res.json().await.unwrap();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn empty_store_lists_an_empty_array() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .get(format!("{}/students", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let listed: serde_json::Value = res.json().await.unwrap();
    assert_eq!(listed, json!([]));
}
