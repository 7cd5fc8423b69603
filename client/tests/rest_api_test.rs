//! Wire-level tests for the REST client against a local mock server
//!
//! These exercise the full request/response path: method, path, request
//! body, JSON decoding, and the error taxonomy for non-success statuses.

use serde_json::json;
use taskpad_client::{ServiceError, TodoId, TodoRecord, TodoServiceClient};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TodoServiceClient {
    TodoServiceClient::new(format!("{}/todos", server.uri()))
}

#[tokio::test]
async fn list_all_decodes_records_in_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "1", "title": "first"},
            {"id": "2", "title": "second"},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let records = client.list_all().await.unwrap();

    assert_eq!(
        records,
        vec![
            TodoRecord::new("1", "first"),
            TodoRecord::new("2", "second"),
        ]
    );
}

#[tokio::test]
async fn create_posts_the_title_and_returns_the_assigned_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todos"))
        .and(body_json(json!({"title": "buy milk"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": "9", "title": "buy milk"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let record = client.create("buy milk").await.unwrap();

    assert_eq!(record, TodoRecord::new("9", "buy milk"));
}

#[tokio::test]
async fn create_trusts_the_response_over_the_request() {
    // The service is authoritative; it may normalize the submitted title.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/todos"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "3", "title": "Buy Milk"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let record = client.create("buy milk").await.unwrap();

    assert_eq!(record.title, "Buy Milk");
}

#[tokio::test]
async fn update_puts_to_the_item_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/todos/4"))
        .and(body_json(json!({"title": "renamed"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "4", "title": "renamed"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let record = client.update(&TodoId::from("4"), "renamed").await.unwrap();

    assert_eq!(record, TodoRecord::new("4", "renamed"));
}

#[tokio::test]
async fn remove_echoes_the_id_and_ignores_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/todos/6"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "6", "title": "gone"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let id = client.remove(TodoId::from("6")).await.unwrap();

    assert_eq!(id, TodoId::from("6"));
}

#[tokio::test]
async fn non_success_status_surfaces_code_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server exploded"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.list_all().await.unwrap_err();

    assert_eq!(
        err,
        ServiceError::Status {
            status: 500,
            body: "server exploded".to_string(),
        }
    );
}

#[tokio::test]
async fn update_of_missing_id_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/todos/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .update(&TodoId::from("404"), "anything")
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.list_all().await.unwrap_err();

    assert!(matches!(err, ServiceError::Decode(_)));
}

#[tokio::test]
async fn transport_failure_is_a_transport_error() {
    // Nothing is listening on this port.
    let client = TodoServiceClient::new("http://127.0.0.1:9/todos");
    let err = client.list_all().await.unwrap_err();

    assert!(matches!(err, ServiceError::Transport(_)));
}
