//! The notification lifecycle: create, read, confirm, check status.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use movecar_core::config::notify::NotifyConfig;
use movecar_core::error::AppError;
use movecar_core::result::AppResult;
use movecar_core::traits::kv::KvStore;
use movecar_core::traits::push::PushGateway;
use movecar_core::traits::status::StatusSource;
use movecar_core::types::id::NotifyId;
use movecar_core::types::push::PushMessage;
use movecar_core::types::record::NotificationRecord;
use movecar_core::types::status::NotifyStatus;

use crate::keys;
use crate::notify::outcome::CreateOutcome;

/// Headline used for every push alert.
const PUSH_TITLE: &str = "🚗 挪车请求";

/// Orchestrates the life of a notification.
///
/// The flow is forward-only: create writes the payload, then the
/// waiting status, then attempts push delivery. Nothing is ever rolled
/// back; a failed push leaves a fully usable record behind.
///
/// Error visibility is asymmetric. The requester's operations
/// (`create`, `read`) surface store failures. The driver's operations
/// (`confirm`, `check_status`) swallow them: confirm always reports
/// success, and a failed status read reads as waiting.
#[derive(Debug, Clone)]
pub struct NotifyService {
    /// KV store holding payloads and status records.
    store: Arc<dyn KvStore>,
    /// Push delivery channel to the blocking driver.
    gateway: Arc<dyn PushGateway>,
    /// TTLs and the public URL for confirm links.
    config: NotifyConfig,
}

impl NotifyService {
    /// Creates a new notification lifecycle service.
    pub fn new(
        store: Arc<dyn KvStore>,
        gateway: Arc<dyn PushGateway>,
        config: NotifyConfig,
    ) -> Self {
        Self {
            store,
            gateway,
            config,
        }
    }

    /// Create a notification: store the payload and waiting status, then
    /// try to alert the driver.
    ///
    /// Store failures surface as errors. A push failure does not: by the
    /// time we push, the record is already live, so the caller gets a
    /// [`CreateOutcome::CreatedButNotDelivered`] instead.
    pub async fn create(&self, record: NotificationRecord) -> AppResult<CreateOutcome> {
        let id = NotifyId::new();

        let payload = serde_json::to_string(&record)?;
        self.store
            .put(
                &keys::request_key(id),
                &payload,
                Some(Duration::from_secs(self.config.payload_ttl_seconds)),
            )
            .await?;

        self.store
            .put(
                &keys::confirm_key(id),
                NotifyStatus::Waiting.as_str(),
                Some(Duration::from_secs(self.config.status_ttl_seconds)),
            )
            .await?;

        info!(%id, "Notification stored");

        let message = self.build_push_message(id, &record);
        match self.gateway.send(&message).await {
            Ok(()) => Ok(CreateOutcome::Created { id }),
            Err(e) => {
                warn!(%id, error = %e, "Push delivery failed; notification remains usable");
                Ok(CreateOutcome::CreatedButNotDelivered {
                    id,
                    reason: e.message,
                })
            }
        }
    }

    /// Read back a stored notification payload.
    pub async fn read(&self, id: NotifyId) -> AppResult<NotificationRecord> {
        match self.store.get(&keys::request_key(id)).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Err(AppError::not_found(format!(
                "Notification '{id}' not found or expired"
            ))),
        }
    }

    /// Record that the driver is on the way.
    ///
    /// Unconditional and idempotent: no read, no precondition, works
    /// even when the payload has already expired. A store failure is
    /// logged and masked; the driver still gets a success.
    pub async fn confirm(&self, id: NotifyId) -> NotifyStatus {
        let write = self
            .store
            .put(
                &keys::confirm_key(id),
                NotifyStatus::Confirmed.as_str(),
                Some(Duration::from_secs(self.config.status_ttl_seconds)),
            )
            .await;

        match write {
            Ok(()) => info!(%id, "Notification confirmed"),
            Err(e) => warn!(%id, error = %e, "Confirm write failed; reporting success anyway"),
        }

        NotifyStatus::Confirmed
    }

    /// Current status of a notification.
    ///
    /// An absent record reads as waiting, whether the id was never
    /// created, the status expired, or the store misbehaved. Anything
    /// stored that is not exactly `confirmed` also reads as waiting.
    pub async fn check_status(&self, id: NotifyId) -> NotifyStatus {
        match self.store.get(&keys::confirm_key(id)).await {
            Ok(Some(raw)) => raw.parse().unwrap_or(NotifyStatus::Waiting),
            Ok(None) => NotifyStatus::Waiting,
            Err(e) => {
                warn!(%id, error = %e, "Status read failed; reporting waiting");
                NotifyStatus::Waiting
            }
        }
    }

    /// Build the push alert for a record, including the confirm link.
    fn build_push_message(&self, id: NotifyId, record: &NotificationRecord) -> PushMessage {
        let mut body = String::from(PUSH_TITLE);
        if !record.message.is_empty() {
            body.push_str("\n💬 留言: ");
            body.push_str(&record.message);
        }
        if record.location.is_some() {
            body.push_str("\n📍 已附带位置信息，点击查看");
        } else {
            body.push_str("\n⚠️ 未提供位置信息");
        }

        let confirm_url = format!(
            "{}/receive?id={id}",
            self.config.public_url.trim_end_matches('/')
        );
        body.push_str(&format!("\n\n[点击处理]({confirm_url})"));

        PushMessage::new(PUSH_TITLE, body)
    }
}

#[async_trait]
impl StatusSource for NotifyService {
    async fn poll_status(&self, id: NotifyId) -> AppResult<NotifyStatus> {
        Ok(self.check_status(id).await)
    }
}
