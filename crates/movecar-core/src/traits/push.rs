//! Push gateway trait for outbound notification delivery.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::push::PushMessage;

/// Trait for push delivery backends (ServerChan in production, a mock
/// in tests).
///
/// Delivery is fire-and-forget from the lifecycle's point of view: a
/// failed send never unwinds writes that already happened.
#[async_trait]
pub trait PushGateway: Send + Sync + std::fmt::Debug + 'static {
    /// Deliver a message to the driver's push channel. Returns `Ok(())`
    /// only when the gateway accepted the message.
    async fn send(&self, message: &PushMessage) -> AppResult<()>;
}
