//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use movecar_api::AppState;
use movecar_core::config::AppConfig;
use movecar_core::traits::PushGateway;
use movecar_push::mock::MockPushGateway;
use movecar_service::NotifyService;
use movecar_store::StoreManager;
use movecar_store::memory::MemoryStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Push gateway double, for asserting deliveries
    pub gateway: Arc<MockPushGateway>,
    /// Application config the router was built from
    pub config: AppConfig,
}

/// Decoded response from a test request
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Create a test application backed by the in-memory store and a
    /// mock push gateway.
    pub fn new() -> Self {
        let config = AppConfig::default();

        let store = Arc::new(StoreManager::from_backend(Arc::new(MemoryStore::new(
            &config.store.memory,
        ))));
        let gateway = Arc::new(MockPushGateway::new());

        let notify = Arc::new(NotifyService::new(
            store.backend(),
            Arc::clone(&gateway) as Arc<dyn PushGateway>,
            config.notify.clone(),
        ));

        let state = AppState::new(Arc::new(config.clone()), Arc::clone(&store), notify);
        let router = movecar_api::build_router(state);

        Self {
            router,
            gateway,
            config,
        }
    }

    /// Send a request to the router and decode the response.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        let request = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                builder
                    .body(Body::from(json.to_string()))
                    .expect("Failed to build request")
            }
            None => builder.body(Body::empty()).expect("Failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router never fails");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        TestResponse { status, body }
    }

    /// Create a notification and return its id.
    pub async fn create_notification(&self, body: Value) -> String {
        let response = self.request("POST", "/api/notifications", Some(body)).await;
        assert_eq!(response.status, StatusCode::OK);
        response.body["data"]["id"]
            .as_str()
            .expect("create response carries an id")
            .to_string()
    }
}
