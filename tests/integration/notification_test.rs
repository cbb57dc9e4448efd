//! Integration tests for the notification lifecycle endpoints.

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_and_fetch_round_trip() {
    let app = TestApp::new();

    let id = app
        .create_notification(json!({
            "message": "请挪车",
            "location": {"lat": 31.23, "lng": 121.47}
        }))
        .await;

    let response = app
        .request("GET", &format!("/api/notifications/{id}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["message"], "请挪车");
    assert_eq!(response.body["data"]["location"]["lat"], 31.23);
    assert_eq!(response.body["data"]["location"]["lng"], 121.47);
}

#[tokio::test]
async fn test_create_with_empty_body_uses_defaults() {
    let app = TestApp::new();

    let id = app.create_notification(json!({})).await;

    let response = app
        .request("GET", &format!("/api/notifications/{id}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["message"], "");
    assert!(response.body["data"].get("location").is_none());
}

#[tokio::test]
async fn test_fetch_unknown_id_returns_404() {
    let app = TestApp::new();

    let response = app
        .request(
            "GET",
            &format!("/api/notifications/{}", Uuid::new_v4()),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_fetch_malformed_id_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/notifications/not-a-uuid", None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_rejects_out_of_range_coordinates() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/notifications",
            Some(json!({"location": {"lat": 91.0, "lng": 0.0}})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_create_succeeds_when_push_fails() {
    let app = TestApp::new();
    app.gateway.set_failing(true);

    let response = app
        .request(
            "POST",
            "/api/notifications",
            Some(json!({"message": "请挪车"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["delivered"], false);
    assert!(response.body["data"]["warning"].is_string());

    // The record is fully usable despite the failed push.
    let id = response.body["data"]["id"].as_str().expect("id").to_string();
    let fetched = app
        .request("GET", &format!("/api/notifications/{id}"), None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["message"], "请挪车");
}

#[tokio::test]
async fn test_push_body_carries_message_location_and_link() {
    let app = TestApp::new();

    let id = app
        .create_notification(json!({
            "message": "请挪车",
            "location": {"lat": 31.23, "lng": 121.47}
        }))
        .await;

    let sent = app.gateway.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].title, "🚗 挪车请求");
    assert!(sent[0].body.contains("💬 留言: 请挪车"));
    assert!(sent[0].body.contains("📍 已附带位置信息，点击查看"));

    let link = format!("{}/receive?id={id}", app.config.notify.public_url);
    assert!(sent[0].body.contains(&link));
}

#[tokio::test]
async fn test_receive_link_confirms_the_notification() {
    let app = TestApp::new();
    let id = app.create_notification(json!({"message": "请挪车"})).await;

    let response = app.request("GET", &format!("/receive?id={id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "confirmed");

    let status = app
        .request("GET", &format!("/api/notifications/{id}/status"), None)
        .await;
    assert_eq!(status.body["data"]["status"], "confirmed");
}

#[tokio::test]
async fn test_receive_without_id_is_rejected() {
    let app = TestApp::new();

    let response = app.request("GET", "/receive", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = TestApp::new();

    let health = app.request("GET", "/api/health", None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["data"]["status"], "ok");
    assert!(health.body["data"]["version"].is_string());

    let detailed = app.request("GET", "/api/health/detailed", None).await;
    assert_eq!(detailed.status, StatusCode::OK);
    assert_eq!(detailed.body["data"]["status"], "ok");
    assert_eq!(detailed.body["data"]["store"], "connected");
}
