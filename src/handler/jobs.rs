use std::sync::Arc;

use axum::{
    extract::Path,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{jobdb::JobExt, workerdb::WorkerExt},
    dtos::{
        CreateJobDto, JobDetailResponseDto, JobListResponseDto, JobResponseDto,
        OrgJobListResponseDto, Response, UpdateApplicationStatusDto, UpdateJobDto,
    },
    error::{ErrorMessage, HttpError},
    middleware::{auth, AuthSubject},
    models::{jobmodel::ApplicationStatus, usermodel::SubjectRole},
    service::error::ServiceError,
    AppState,
};

pub fn jobs_handler() -> Router {
    let protected = Router::new()
        .route("/create-job", post(create_job))
        .route("/my-jobs", get(get_my_jobs))
        .route("/:id/apply", post(apply_to_job))
        .route("/:id/application/:worker_id", put(update_application_status))
        .layer(middleware::from_fn(auth));

    // Browsing jobs is public; everything that writes goes through auth. The /:id
    // methods are combined on one method router so the public GET and the protected
    // PUT/DELETE can share the path.
    Router::new()
        .route("/", get(get_jobs))
        .route(
            "/:id",
            get(get_job).merge(
                put(update_job)
                    .delete(delete_job)
                    .layer(middleware::from_fn(auth)),
            ),
        )
        .merge(protected)
}

fn require_organization(subject: &AuthSubject) -> Result<Uuid, HttpError> {
    if subject.role != SubjectRole::Organization {
        return Err(HttpError::forbidden(
            ErrorMessage::PermissionDenied.to_string(),
        ));
    }
    Ok(subject.id)
}

pub async fn create_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(subject): Extension<AuthSubject>,
    Json(body): Json<CreateJobDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let org_id = require_organization(&subject)?;

    let job = app_state
        .db_client
        .save_job(
            org_id,
            body.title,
            body.description,
            body.salary_range,
            body.location,
            body.category,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(JobResponseDto {
        success: true,
        message: "Job posted successfully".to_string(),
        job,
    }))
}

pub async fn get_jobs(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let jobs = app_state
        .db_client
        .get_jobs()
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(JobListResponseDto {
        success: true,
        jobs,
    }))
}

pub async fn get_my_jobs(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(subject): Extension<AuthSubject>,
) -> Result<impl IntoResponse, HttpError> {
    let org_id = require_organization(&subject)?;

    let jobs = app_state
        .db_client
        .get_org_jobs(org_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(OrgJobListResponseDto {
        success: true,
        jobs,
    }))
}

pub async fn get_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let job = app_state
        .db_client
        .get_job(job_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Job not found"))?;

    let applications = app_state
        .db_client
        .get_applications(job_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    Ok(Json(JobDetailResponseDto {
        success: true,
        job,
        applications,
    }))
}

pub async fn update_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(subject): Extension<AuthSubject>,
    Path(job_id): Path<Uuid>,
    Json(body): Json<UpdateJobDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let org_id = require_organization(&subject)?;

    let job = app_state
        .db_client
        .update_job(
            job_id,
            org_id,
            body.title,
            body.description,
            body.salary_range,
            body.location,
            body.category,
        )
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::not_found("Job not found"))?;

    Ok(Json(JobResponseDto {
        success: true,
        message: "Job updated successfully".to_string(),
        job,
    }))
}

pub async fn delete_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(subject): Extension<AuthSubject>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let org_id = require_organization(&subject)?;

    let deleted = app_state
        .db_client
        .delete_job(job_id, org_id)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?;

    if deleted == 0 {
        return Err(HttpError::not_found("Job not found"));
    }

    Ok(Json(Response {
        success: true,
        message: "Job deleted successfully".to_string(),
    }))
}

pub async fn apply_to_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(subject): Extension<AuthSubject>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    if subject.role != SubjectRole::Worker {
        return Err(ServiceError::NotAWorker.into());
    }

    let worker = app_state
        .db_client
        .get_worker(Some(subject.id), None, None)
        .await
        .map_err(|e| HttpError::server_error(e.to_string()))?
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::UserNoLongerExist.to_string()))?;

    app_state
        .application_service
        .apply_to_job(job_id, &worker)
        .await?;

    Ok(Json(Response {
        success: true,
        message: "Application submitted successfully".to_string(),
    }))
}

pub async fn update_application_status(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(subject): Extension<AuthSubject>,
    Path((job_id, worker_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<UpdateApplicationStatusDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let org_id = require_organization(&subject)?;

    let status = ApplicationStatus::from_str(&body.status)
        .ok_or_else(|| HttpError::bad_request("Invalid status"))?;

    app_state
        .application_service
        .update_application_status(org_id, job_id, worker_id, status)
        .await?;

    Ok(Json(Response {
        success: true,
        message: format!("Application {}", status.to_str()),
    }))
}
