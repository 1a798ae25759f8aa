use std::sync::Arc;

use axum::{response::IntoResponse, routing::get, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{
        auth::auth_handler, jobs::jobs_handler, notifications::notifications_handler,
        otp::otp_handler, referrals::referrals_handler,
    },
    AppState,
};

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "GetWork API running"
    }))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .nest("/auth", auth_handler())
        .nest("/otp", otp_handler())
        .nest("/jobs", jobs_handler())
        .nest("/referral", referrals_handler())
        .nest("/notifications", notifications_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_route)
}
