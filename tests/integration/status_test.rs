//! Integration tests for status and confirmation endpoints.

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_status_is_waiting_after_create() {
    let app = TestApp::new();
    let id = app.create_notification(json!({"message": "请挪车"})).await;

    let response = app
        .request("GET", &format!("/api/notifications/{id}/status"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "waiting");
}

#[tokio::test]
async fn test_confirm_marks_confirmed() {
    let app = TestApp::new();
    let id = app.create_notification(json!({"message": "请挪车"})).await;

    let response = app
        .request("POST", &format!("/api/notifications/{id}/confirm"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "confirmed");

    let status = app
        .request("GET", &format!("/api/notifications/{id}/status"), None)
        .await;
    assert_eq!(status.body["data"]["status"], "confirmed");
}

#[tokio::test]
async fn test_confirm_is_idempotent() {
    let app = TestApp::new();
    let id = app.create_notification(json!({})).await;

    for _ in 0..2 {
        let response = app
            .request("POST", &format!("/api/notifications/{id}/confirm"), None)
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["data"]["status"], "confirmed");
    }
}

#[tokio::test]
async fn test_concurrent_confirms_both_succeed() {
    let app = TestApp::new();
    let id = app.create_notification(json!({})).await;
    let path = format!("/api/notifications/{id}/confirm");

    let (first, second) = tokio::join!(
        app.request("POST", &path, None),
        app.request("POST", &path, None)
    );

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(first.body["data"]["status"], "confirmed");
    assert_eq!(second.body["data"]["status"], "confirmed");
}

#[tokio::test]
async fn test_status_of_unknown_id_is_waiting() {
    let app = TestApp::new();

    let response = app
        .request(
            "GET",
            &format!("/api/notifications/{}/status", Uuid::new_v4()),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "waiting");
}

#[tokio::test]
async fn test_confirm_of_unknown_id_succeeds() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            &format!("/api/notifications/{}/confirm", Uuid::new_v4()),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "confirmed");
}
