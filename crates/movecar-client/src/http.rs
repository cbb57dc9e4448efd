//! HTTP client for the Movecar REST API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use movecar_api::dto::request::{CreateNotificationRequest, GeoPointDto};
use movecar_api::dto::response::{
    ApiResponse, CreateNotificationResponse, NotificationResponse, StatusResponse,
};
use movecar_api::error::ApiErrorResponse;
use movecar_core::error::{AppError, ErrorKind};
use movecar_core::result::AppResult;
use movecar_core::traits::StatusSource;
use movecar_core::types::{GeoPoint, NotifyId, NotifyStatus};

/// Request timeout for all API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the Movecar REST API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct NotifyClient {
    http: reqwest::Client,
    base_url: String,
}

impl NotifyClient {
    /// Creates a client for the API server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Internal,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a notification and pushes it to the car owner.
    pub async fn create(
        &self,
        message: impl Into<String>,
        location: Option<GeoPoint>,
    ) -> AppResult<CreateNotificationResponse> {
        let url = format!("{}/api/notifications", self.base_url);
        let body = CreateNotificationRequest {
            message: message.into(),
            location: location.map(|p| GeoPointDto { lat: p.lat, lng: p.lng }),
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }

    /// Fetches the stored payload for a notification.
    pub async fn fetch(&self, id: NotifyId) -> AppResult<NotificationResponse> {
        let url = format!("{}/api/notifications/{id}", self.base_url);
        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        decode(response).await
    }

    /// Confirms a notification on behalf of the car owner.
    pub async fn confirm(&self, id: NotifyId) -> AppResult<StatusResponse> {
        let url = format!("{}/api/notifications/{id}/confirm", self.base_url);
        let response = self.http.post(&url).send().await.map_err(transport_error)?;
        decode(response).await
    }

    /// Reads the current status of a notification.
    pub async fn check_status(&self, id: NotifyId) -> AppResult<NotifyStatus> {
        let url = format!("{}/api/notifications/{id}/status", self.base_url);
        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        let status: StatusResponse = decode(response).await?;
        Ok(status.status)
    }
}

#[async_trait]
impl StatusSource for NotifyClient {
    async fn poll_status(&self, id: NotifyId) -> AppResult<NotifyStatus> {
        self.check_status(id).await
    }
}

/// Unwraps the success envelope or maps the error body to an [`AppError`].
async fn decode<T>(response: reqwest::Response) -> AppResult<T>
where
    T: DeserializeOwned + Serialize,
{
    let status = response.status();
    if status.is_success() {
        let envelope: ApiResponse<T> = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Failed to decode response body: {e}"),
                e,
            )
        })?;
        return Ok(envelope.data);
    }

    let body = response.text().await.unwrap_or_default();
    debug!(status = %status, body = %body, "API request failed");

    match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(err) => Err(AppError::new(kind_for_code(&err.error), err.message)),
        Err(_) => Err(AppError::new(
            kind_for_status(status),
            format!("Server returned {status}: {body}"),
        )),
    }
}

fn transport_error(err: reqwest::Error) -> AppError {
    AppError::with_source(
        ErrorKind::ServiceUnavailable,
        format!("Request failed: {err}"),
        err,
    )
}

/// Maps a wire error code back to the kind it was produced from.
fn kind_for_code(code: &str) -> ErrorKind {
    match code {
        "NOT_FOUND" => ErrorKind::NotFound,
        "VALIDATION" => ErrorKind::Validation,
        "CONFIGURATION" => ErrorKind::Configuration,
        "DELIVERY" => ErrorKind::Delivery,
        "STORE" => ErrorKind::Store,
        "SERVICE_UNAVAILABLE" => ErrorKind::ServiceUnavailable,
        _ => ErrorKind::Internal,
    }
}

fn kind_for_status(status: reqwest::StatusCode) -> ErrorKind {
    match status.as_u16() {
        404 => ErrorKind::NotFound,
        400 => ErrorKind::Validation,
        502 => ErrorKind::Delivery,
        503 => ErrorKind::ServiceUnavailable,
        _ => ErrorKind::Internal,
    }
}
