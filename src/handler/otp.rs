use std::sync::Arc;

use axum::{
    middleware,
    response::IntoResponse,
    routing::post,
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    dtos::{AuthResponseDto, AuthUserDto, ResetPasswordDto, Response, SendOtpDto, VerifyOtpDto},
    error::HttpError,
    mail::mails::send_otp_email,
    middleware::{auth, AuthSubject},
    utils::{password, sms::send_otp_sms, token},
    AppState,
};

pub fn otp_handler() -> Router {
    let public = Router::new()
        .route("/send", post(send_otp))
        .route("/verify", post(verify_otp));

    let protected = Router::new()
        .route("/reset-password", post(reset_password))
        .layer(middleware::from_fn(auth));

    public.merge(protected)
}

pub async fn send_otp(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<SendOtpDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let subject = app_state
        .otp_service
        .resolve_subject(&body.identifier)
        .await?;

    let code = app_state.otp_service.issue(&subject).await?;

    // Delivery follows the identifier the caller supplied: email gets mail, phone
    // gets SMS.
    let delivery = if body.identifier.contains('@') {
        send_otp_email(&app_state.env, &body.identifier, subject.name(), &code)
            .await
            .map_err(|e| e.to_string())
    } else {
        send_otp_sms(&app_state.env, subject.phone(), &code)
            .await
            .map_err(|e| e.to_string())
    };

    if let Err(e) = delivery {
        tracing::error!("OTP delivery to {} failed: {}", body.identifier, e);
        // An undeliverable code must not stay verifiable.
        if let Err(e) = app_state.otp_service.clear(&subject).await {
            tracing::error!("Failed to clear undelivered OTP: {}", e);
        }
        return Err(HttpError::server_error("Failed to send OTP"));
    }

    Ok(Json(Response {
        success: true,
        message: "OTP sent successfully".to_string(),
    }))
}

pub async fn verify_otp(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<VerifyOtpDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let subject = app_state
        .otp_service
        .verify(&body.identifier, &body.otp)
        .await?;

    let token = token::create_token(
        &subject.id().to_string(),
        subject.role().to_str(),
        app_state.env.jwt_secret.as_bytes(),
        app_state.env.jwt_maxage,
    )
    .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(AuthResponseDto {
        success: true,
        message: "OTP verified successfully".to_string(),
        token,
        user: AuthUserDto {
            id: subject.id().to_string(),
            phone: subject.phone().to_string(),
            role: subject.role().to_str().to_string(),
            is_profile_complete: None,
        },
    }))
}

pub async fn reset_password(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(subject): Extension<AuthSubject>,
    Json(body): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let hashed_password =
        password::hash(&body.new_password).map_err(|e| HttpError::server_error(e.to_string()))?;

    app_state
        .otp_service
        .reset_password(subject.id, subject.role, hashed_password)
        .await?;

    Ok(Json(Response {
        success: true,
        message: "Password has been successfully reset.".to_string(),
    }))
}
