//! Notification lifecycle handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use movecar_core::error::AppError;
use movecar_core::types::NotifyId;

use crate::dto::request::{CreateNotificationRequest, ReceiveParams};
use crate::dto::response::{
    ApiResponse, CreateNotificationResponse, NotificationResponse, StatusResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/notifications
///
/// Stores the payload and pushes a notification to the car owner.
/// Returns 200 with `delivered: false` when the push gateway fails,
/// since the notification itself was stored.
pub async fn create_notification(
    State(state): State<AppState>,
    Json(payload): Json<CreateNotificationRequest>,
) -> Result<Json<ApiResponse<CreateNotificationResponse>>, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state.notify.create(payload.into_record()).await?;
    Ok(Json(ApiResponse::ok(outcome.into())))
}

/// GET /api/notifications/{id}
pub async fn get_notification(
    State(state): State<AppState>,
    Path(id): Path<NotifyId>,
) -> Result<Json<ApiResponse<NotificationResponse>>, ApiError> {
    let record = state.notify.read(id).await?;
    Ok(Json(ApiResponse::ok(record.into())))
}

/// POST /api/notifications/{id}/confirm
///
/// Always succeeds, even for unknown or expired ids.
pub async fn confirm_notification(
    State(state): State<AppState>,
    Path(id): Path<NotifyId>,
) -> Json<ApiResponse<StatusResponse>> {
    let status = state.notify.confirm(id).await;
    Json(ApiResponse::ok(StatusResponse { status }))
}

/// GET /api/notifications/{id}/status
///
/// Always succeeds; unknown ids read as `waiting`.
pub async fn check_status(
    State(state): State<AppState>,
    Path(id): Path<NotifyId>,
) -> Json<ApiResponse<StatusResponse>> {
    let status = state.notify.check_status(id).await;
    Json(ApiResponse::ok(StatusResponse { status }))
}

/// GET /receive?id={id}
///
/// Target of the confirmation link embedded in push messages. Confirms
/// the notification so the blocked driver's poll loop can complete.
pub async fn receive_confirm(
    State(state): State<AppState>,
    Query(params): Query<ReceiveParams>,
) -> Json<ApiResponse<StatusResponse>> {
    let status = state.notify.confirm(params.id).await;
    Json(ApiResponse::ok(StatusResponse { status }))
}
