//! Status source trait consumed by the polling client.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::id::NotifyId;
use crate::types::status::NotifyStatus;

/// Anything that can report the current confirmation status of a
/// notification.
///
/// Implemented by the lifecycle service (for in-process polling) and by
/// the HTTP client (for polling a remote server). A poll may fail; the
/// poller treats failures as transient.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch the current status for `id`.
    async fn poll_status(&self, id: NotifyId) -> AppResult<NotifyStatus>;
}
