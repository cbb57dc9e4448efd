//! Response DTOs.

use serde::{Deserialize, Serialize};

use movecar_core::types::{GeoPoint, NotificationRecord, NotifyId, NotifyStatus};
use movecar_service::CreateOutcome;

/// Standard success envelope wrapping every successful response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always `true` for successful responses.
    pub success: bool,
    /// The payload.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wraps a payload in the success envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Response to a create request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotificationResponse {
    /// Token identifying the stored notification.
    pub id: NotifyId,
    /// Whether the push message reached the gateway.
    pub delivered: bool,
    /// Delivery failure detail, present only when `delivered` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<CreateOutcome> for CreateNotificationResponse {
    fn from(outcome: CreateOutcome) -> Self {
        match outcome {
            CreateOutcome::Created { id } => Self {
                id,
                delivered: true,
                warning: None,
            },
            CreateOutcome::CreatedButNotDelivered { id, reason } => Self {
                id,
                delivered: false,
                warning: Some(reason),
            },
        }
    }
}

/// Stored notification payload as returned to the car owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResponse {
    /// Free-form message from the blocked driver.
    pub message: String,
    /// Location of the blocked car, if one was attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

impl From<NotificationRecord> for NotificationResponse {
    fn from(record: NotificationRecord) -> Self {
        Self {
            message: record.message,
            location: record.location,
        }
    }
}

/// Current status of a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// `waiting` or `confirmed`.
    pub status: NotifyStatus,
}

/// Basic health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status, `ok` when the service is up.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since the server started.
    pub uptime_seconds: u64,
}

/// Detailed health check response including backend connectivity.
#[derive(Debug, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status, `ok` or `degraded`.
    pub status: String,
    /// Store connectivity, `connected` or `unreachable`.
    pub store: String,
    /// Seconds since the server started.
    pub uptime_seconds: u64,
}
