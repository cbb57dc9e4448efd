//! In-memory push gateway for tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use movecar_core::error::AppError;
use movecar_core::result::AppResult;
use movecar_core::traits::push::PushGateway;
use movecar_core::types::push::PushMessage;

/// Push gateway that records every message instead of sending it.
///
/// Flip `set_failing(true)` to make every send fail, which is how tests
/// exercise the stored-but-not-delivered path.
#[derive(Debug, Default)]
pub struct MockPushGateway {
    sent: Mutex<Vec<PushMessage>>,
    failing: AtomicBool,
}

impl MockPushGateway {
    /// Create a gateway that accepts every message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway that rejects every message.
    pub fn failing() -> Self {
        let gateway = Self::default();
        gateway.failing.store(true, Ordering::SeqCst);
        gateway
    }

    /// Make subsequent sends fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Messages accepted so far, in send order.
    pub fn sent(&self) -> Vec<PushMessage> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of messages accepted so far.
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl PushGateway for MockPushGateway {
    async fn send(&self, message: &PushMessage) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::delivery("Simulated push gateway failure"));
        }
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_sent_messages() {
        let gateway = MockPushGateway::new();
        gateway.send(&PushMessage::new("t1", "b1")).await.unwrap();
        gateway.send(&PushMessage::new("t2", "b2")).await.unwrap();
        let sent = gateway.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].title, "t1");
        assert_eq!(sent[1].body, "b2");
    }

    #[tokio::test]
    async fn failing_gateway_rejects_and_records_nothing() {
        let gateway = MockPushGateway::failing();
        assert!(gateway.send(&PushMessage::new("t", "b")).await.is_err());
        assert_eq!(gateway.sent_count(), 0);
    }
}
