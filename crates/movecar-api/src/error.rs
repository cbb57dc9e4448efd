//! HTTP error responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use movecar_core::error::{AppError, ErrorKind};

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Stable machine-readable error code.
    pub error: String,
    /// Human-readable description.
    pub message: String,
}

/// Wrapper that renders an [`AppError`] as an HTTP response.
///
/// Handlers return `Result<_, ApiError>`; the `From` impl lets `?`
/// lift service errors into the HTTP layer.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match err.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Delivery => StatusCode::BAD_GATEWAY,
            ErrorKind::Store | ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Configuration | ErrorKind::Serialization | ErrorKind::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            error!(kind = %err.kind, message = %err.message, "Request failed");
        } else {
            warn!(kind = %err.kind, message = %err.message, "Request rejected");
        }

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}
