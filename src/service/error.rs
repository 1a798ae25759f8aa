use thiserror::Error;
use uuid::Uuid;

use crate::error::HttpError;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Job not found")]
    JobNotFound(Uuid),

    #[error("Applicant not found")]
    ApplicationNotFound { job_id: Uuid, worker_id: Uuid },

    #[error("Already applied")]
    AlreadyApplied,

    #[error("Referral not found")]
    ReferralNotFound(Uuid),

    #[error("Only workers can apply for jobs")]
    NotAWorker,

    #[error("Referrer profile not found for subject {0}")]
    ReferrerNotFound(Uuid),

    #[error("User not found")]
    SubjectNotFound,

    #[error("Invalid or expired OTP")]
    InvalidOtp,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Password error: {0}")]
    Password(String),
}

impl From<ServiceError> for HttpError {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::JobNotFound(_)
            | ServiceError::ApplicationNotFound { .. }
            | ServiceError::ReferralNotFound(_)
            | ServiceError::ReferrerNotFound(_) => HttpError::not_found(error.to_string()),

            ServiceError::AlreadyApplied
            | ServiceError::Validation(_)
            | ServiceError::SubjectNotFound
            | ServiceError::InvalidOtp => HttpError::bad_request(error.to_string()),

            ServiceError::NotAWorker => HttpError::forbidden(error.to_string()),

            ServiceError::Database(_) | ServiceError::Password(_) => {
                HttpError::server_error(error.to_string())
            }
        }
    }
}
