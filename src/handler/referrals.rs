use std::sync::Arc;

use axum::{
    middleware,
    extract::Path,
    response::IntoResponse,
    routing::{get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::referraldb::ReferralExt,
    dtos::{
        ReferralListResponseDto, ReferralResponseDto, ReferralStatsDto,
        ReferralStatsResponseDto, SubmitReferralDto, UpdateReferralDto,
    },
    error::HttpError,
    middleware::{auth, AuthSubject},
    models::referralmodel::ReferralStatus,
    AppState,
};

pub fn referrals_handler() -> Router {
    Router::new()
        .route("/create", post(submit_referral))
        .route("/pending", get(get_pending_referrals))
        .route("/stats", get(get_referral_stats))
        .route("/:id", put(update_referral))
        .layer(middleware::from_fn(auth))
}

pub async fn submit_referral(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(subject): Extension<AuthSubject>,
    Json(body): Json<SubmitReferralDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let referral = app_state
        .referral_service
        .submit_referral(subject.id, subject.role, body)
        .await?;

    Ok(Json(ReferralResponseDto {
        success: true,
        message: "Referral submitted successfully".to_string(),
        referral,
    }))
}

pub async fn get_pending_referrals(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(_subject): Extension<AuthSubject>,
) -> Result<impl IntoResponse, HttpError> {
    let referrals = app_state
        .db_client
        .get_pending_referrals()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(ReferralListResponseDto {
        success: true,
        referrals,
    }))
}

pub async fn update_referral(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(_subject): Extension<AuthSubject>,
    Path(referral_id): Path<Uuid>,
    Json(body): Json<UpdateReferralDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let status = ReferralStatus::from_str(&body.status)
        .ok_or_else(|| HttpError::bad_request("Invalid status"))?;

    let referral = app_state
        .db_client
        .update_referral_status(referral_id, status)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Referral not found"))?;

    Ok(Json(ReferralResponseDto {
        success: true,
        message: "Referral updated successfully".to_string(),
        referral,
    }))
}

pub async fn get_referral_stats(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(subject): Extension<AuthSubject>,
) -> Result<impl IntoResponse, HttpError> {
    let stats = app_state
        .referral_service
        .get_stats(subject.id, subject.role)
        .await?;

    Ok(Json(ReferralStatsResponseDto {
        success: true,
        stats: ReferralStatsDto {
            total_referrals: stats.total_referrals,
            successful_referrals: stats.successful_referrals,
            badges: stats.badges,
        },
    }))
}
