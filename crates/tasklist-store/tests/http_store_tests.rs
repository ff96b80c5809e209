use mockito::Matcher;
use serde_json::json;

use tasklist_core::Task;
use tasklist_store::{DocumentStore, Error, HttpDocumentStore};

fn task(value: serde_json::Value) -> Task {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn test_fetch_all_parses_document_array() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/tasks")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"t1","title":"buy milk"},{"id":"t2","done":true}]"#)
        .create_async()
        .await;

    let store = HttpDocumentStore::new(server.url(), "tasks");
    let documents = store.fetch_all().await.unwrap();

    mock.assert_async().await;
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].id, "t1");
    assert_eq!(documents[0].fields["title"], json!("buy milk"));
    assert_eq!(documents[1].id, "t2");
}

#[tokio::test]
async fn test_fetch_one_absent_is_none() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/tasks/missing")
        .with_status(404)
        .create_async()
        .await;

    let store = HttpDocumentStore::new(server.url(), "tasks");
    assert_eq!(store.fetch_one("missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_put_sends_the_full_document() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/tasks/t1")
        .match_body(Matcher::Json(json!({"id": "t1", "title": "buy milk"})))
        .with_status(200)
        .create_async()
        .await;

    let store = HttpDocumentStore::new(server.url(), "tasks");
    let document = task(json!({"id": "t1", "title": "buy milk"}));

    store.put("t1", &document).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_merge_sends_only_the_patch() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/tasks/t1")
        .match_body(Matcher::Json(json!({"done": true})))
        .with_status(200)
        .create_async()
        .await;

    let store = HttpDocumentStore::new(server.url(), "tasks");
    let patch = json!({"done": true}).as_object().cloned().unwrap();

    store.merge("t1", &patch).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_merge_missing_target_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("PATCH", "/tasks/missing")
        .with_status(404)
        .create_async()
        .await;

    let store = HttpDocumentStore::new(server.url(), "tasks");
    let patch = json!({"done": true}).as_object().cloned().unwrap();

    let err = store.merge("missing", &patch).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(ref id) if id == "missing"));
}

#[tokio::test]
async fn test_remove_absent_document_succeeds() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("DELETE", "/tasks/missing")
        .with_status(404)
        .create_async()
        .await;

    let store = HttpDocumentStore::new(server.url(), "tasks");
    store.remove("missing").await.unwrap();
}

#[tokio::test]
async fn test_remote_failure_carries_the_store_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/tasks")
        .with_status(503)
        .with_body("collection offline")
        .create_async()
        .await;

    let store = HttpDocumentStore::new(server.url(), "tasks");
    let err = store.fetch_all().await.unwrap_err();

    match err {
        Error::Remote { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "collection offline");
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_key_is_sent_when_configured() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/tasks")
        .match_header("x-api-key", "secret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let store = HttpDocumentStore::new(server.url(), "tasks").with_api_key("secret");

    store.fetch_all().await.unwrap();
    mock.assert_async().await;
}
