//! End-to-end tests driving the HTTP client and poller against a live server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use movecar_client::{NotifyClient, PollOutcome, StatusPoller};

use crate::helpers::TestApp;

/// Serves the test app on an ephemeral port and returns its address.
async fn spawn_server(app: &TestApp) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Listener has an address");

    let router = app.router.clone();
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server failed");
    });

    addr
}

#[tokio::test]
async fn test_poller_completes_after_owner_confirms() {
    let app = TestApp::new();
    let addr = spawn_server(&app).await;

    let client = NotifyClient::new(format!("http://{addr}")).expect("Failed to build client");
    let created = client
        .create("请挪车", None)
        .await
        .expect("Create should succeed");
    assert!(created.delivered);

    // The car owner confirms a moment later, from another task.
    let id = created.id;
    let confirmer = client.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        confirmer.confirm(id).await.expect("Confirm should succeed");
    });

    let poller =
        StatusPoller::new(Arc::new(client)).with_interval(Duration::from_millis(100));
    let outcome = poller
        .wait_until_confirmed(id, CancellationToken::new())
        .await;

    assert_eq!(outcome, PollOutcome::Confirmed);
}

#[tokio::test]
async fn test_poller_stops_on_cancellation() {
    let app = TestApp::new();
    let addr = spawn_server(&app).await;

    let client = NotifyClient::new(format!("http://{addr}")).expect("Failed to build client");
    let created = client
        .create("", None)
        .await
        .expect("Create should succeed");

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(250)).await;
            cancel.cancel();
        }
    });

    let poller =
        StatusPoller::new(Arc::new(client)).with_interval(Duration::from_millis(100));
    let outcome = poller.wait_until_confirmed(created.id, cancel).await;

    assert_eq!(outcome, PollOutcome::Cancelled);
}
