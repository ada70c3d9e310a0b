//! Endpoint tests driving the router in-process.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;
use taskpilot_enrich::ChatModel;
use taskpilot_server::AppState;
use taskpilot_store::TodoStore;
use taskpilot_test_utils::{FailingChatModel, FixedChatModel};
use tower::ServiceExt;

const BUY_MILK_REPLY: &str = r#"{
    "task": "Buy milk",
    "description": "Purchase 2 liters of whole milk",
    "category": "shopping",
    "priority": "medium",
    "due_date": null
}"#;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 29).expect("date")
}

fn test_app(model: Arc<dyn ChatModel>) -> Router {
    let store = TodoStore::open_in_memory().expect("store");
    let state = AppState::new(store, model).with_fixed_today(today());
    taskpilot_server::api_router(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

async fn create_from_text(app: &Router) -> Value {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/todos",
            json!({"natural_text": "Buy milk"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn create_without_natural_text_is_rejected_and_nothing_persists() {
    let app = test_app(Arc::new(FixedChatModel::new(BUY_MILK_REPLY)));

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/todos", json!({})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "natural_text field required");

    let list = app
        .clone()
        .oneshot(get_request("/api/todos"))
        .await
        .expect("response");
    assert_eq!(body_json(list).await, json!([]));
}

#[tokio::test]
async fn buy_milk_creates_the_expected_record() {
    let app = test_app(Arc::new(FixedChatModel::new(BUY_MILK_REPLY)));
    let created = create_from_text(&app).await;

    assert!(created["id"].as_i64().expect("id") > 0);
    assert_eq!(created["task"], "Buy milk");
    assert_eq!(created["category"], "shopping");
    assert_eq!(created["priority"], "medium");
    assert_eq!(created["due_date"], Value::Null);
}

#[tokio::test]
async fn created_record_round_trips_through_get() {
    let app = test_app(Arc::new(FixedChatModel::new(BUY_MILK_REPLY)));
    let created = create_from_text(&app).await;
    let id = created["id"].as_i64().expect("id");

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/todos/{id}")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn out_of_enum_model_output_fails_creation_without_persisting() {
    let reply = r#"{"task": "t", "category": "general", "priority": "medium"}"#;
    let app = test_app(Arc::new(FixedChatModel::new(reply)));

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/todos",
            json!({"natural_text": "do something"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let list = app
        .clone()
        .oneshot(get_request("/api/todos"))
        .await
        .expect("response");
    assert_eq!(body_json(list).await, json!([]));
}

#[tokio::test]
async fn enrichment_transport_failure_maps_to_bad_request() {
    let app = test_app(Arc::new(FailingChatModel::new("connection refused")));

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/todos",
            json!({"natural_text": "Buy milk"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "API Error: connection refused");
}

#[tokio::test]
async fn updating_priority_leaves_other_fields_unchanged() {
    let reply = r#"{"task": "X", "description": null, "category": "work", "priority": "low", "due_date": null}"#;
    let app = test_app(Arc::new(FixedChatModel::new(reply)));
    let created = create_from_text(&app).await;
    let id = created["id"].as_i64().expect("id");

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/todos/{id}"),
            json!({"priority": "high"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["id"].as_i64(), Some(id));
    assert_eq!(updated["task"], "X");
    assert_eq!(updated["category"], "work");
    assert_eq!(updated["priority"], "high");
    assert_eq!(updated["due_date"], Value::Null);
}

#[tokio::test]
async fn natural_text_update_overrides_structured_fields() {
    let app = test_app(Arc::new(FixedChatModel::new(BUY_MILK_REPLY)));
    let created = create_from_text(&app).await;
    let id = created["id"].as_i64().expect("id");

    // Structured priority submitted alongside natural_text loses to the
    // derived fields.
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/todos/{id}"),
            json!({"natural_text": "Buy milk", "priority": "high"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["priority"], "medium");
    assert_eq!(updated["task"], "Buy milk");
}

#[tokio::test]
async fn structured_past_due_date_is_rejected() {
    let app = test_app(Arc::new(FixedChatModel::new(BUY_MILK_REPLY)));
    let created = create_from_text(&app).await;
    let id = created["id"].as_i64().expect("id");

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/todos/{id}"),
            json!({"due_date": "2026-08-28"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "Due date cannot be in the past");

    // Record unchanged.
    let fetched = app
        .clone()
        .oneshot(get_request(&format!("/api/todos/{id}")))
        .await
        .expect("response");
    assert_eq!(body_json(fetched).await, created);
}

#[tokio::test]
async fn update_of_missing_id_is_not_found() {
    let app = test_app(Arc::new(FixedChatModel::new(BUY_MILK_REPLY)));
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/todos/999",
            json!({"priority": "high"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_of_missing_id_is_not_found() {
    let app = test_app(Arc::new(FixedChatModel::new(BUY_MILK_REPLY)));
    let response = app
        .clone()
        .oneshot(get_request("/api/todos/999"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "Todo not found");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = test_app(Arc::new(FixedChatModel::new(BUY_MILK_REPLY)));
    let created = create_from_text(&app).await;
    let id = created["id"].as_i64().expect("id");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/todos/{id}"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Todo deleted successfully");

    let fetched = app
        .clone()
        .oneshot(get_request(&format!("/api/todos/{id}")))
        .await
        .expect("response");
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_of_missing_id_is_not_found() {
    let app = test_app(Arc::new(FixedChatModel::new(BUY_MILK_REPLY)));
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/todos/999")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_returns_all_records_in_insertion_order() {
    let app = test_app(Arc::new(FixedChatModel::new(BUY_MILK_REPLY)));
    let first = create_from_text(&app).await;
    let second = create_from_text(&app).await;

    let response = app
        .clone()
        .oneshot(get_request("/api/todos"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list, json!([first, second]));
}
