use std::sync::Arc;

use axum::{
    extract::Path,
    middleware,
    response::IntoResponse,
    routing::{delete, get, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::notificationdb::NotificationExt,
    dtos::{NotificationListResponseDto, Response, UpdateActionStatusDto},
    error::HttpError,
    middleware::{auth, AuthSubject},
    AppState,
};

pub fn notifications_handler() -> Router {
    Router::new()
        .route("/", get(get_notifications))
        .route("/:id/read", put(mark_read))
        .route("/:id/status", put(update_action_status))
        .route("/:id", delete(delete_notification))
        .layer(middleware::from_fn(auth))
}

pub async fn get_notifications(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(subject): Extension<AuthSubject>,
) -> Result<impl IntoResponse, HttpError> {
    let notifications = app_state
        .db_client
        .get_notifications(subject.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(NotificationListResponseDto {
        success: true,
        notifications,
    }))
}

pub async fn mark_read(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(subject): Extension<AuthSubject>,
    Path(notification_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let updated = app_state
        .db_client
        .mark_notification_read(notification_id, subject.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if updated == 0 {
        return Err(HttpError::not_found("Notification not found"));
    }

    Ok(Json(Response {
        success: true,
        message: "Notification marked as read".to_string(),
    }))
}

pub async fn update_action_status(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(subject): Extension<AuthSubject>,
    Path(notification_id): Path<Uuid>,
    Json(body): Json<UpdateActionStatusDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let updated = app_state
        .db_client
        .update_notification_action_status(notification_id, subject.id, body.status)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if updated == 0 {
        return Err(HttpError::not_found("Notification not found"));
    }

    Ok(Json(Response {
        success: true,
        message: "Notification updated".to_string(),
    }))
}

pub async fn delete_notification(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(subject): Extension<AuthSubject>,
    Path(notification_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let deleted = app_state
        .db_client
        .delete_notification(notification_id, subject.id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if deleted == 0 {
        return Err(HttpError::not_found("Notification not found"));
    }

    Ok(Json(Response {
        success: true,
        message: "Notification deleted".to_string(),
    }))
}
