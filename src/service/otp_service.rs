use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::{
    db::{db::DBClient, orgdb::OrganizationExt, workerdb::WorkerExt},
    models::{
        profilemodels::{Organization, Worker},
        usermodel::SubjectRole,
    },
    service::error::ServiceError,
    utils::otp_generator::generate_otp,
};

const OTP_TTL_MINUTES: i64 = 5;

/// The record an OTP is issued against. Workers are checked before organizations;
/// uniqueness is per-collection, so the same identifier could in principle exist in
/// both and the worker wins.
#[derive(Debug, Clone)]
pub enum OtpSubject {
    Worker(Worker),
    Organization(Organization),
}

impl OtpSubject {
    pub fn id(&self) -> Uuid {
        match self {
            OtpSubject::Worker(worker) => worker.id,
            OtpSubject::Organization(org) => org.id,
        }
    }

    pub fn role(&self) -> SubjectRole {
        match self {
            OtpSubject::Worker(_) => SubjectRole::Worker,
            OtpSubject::Organization(_) => SubjectRole::Organization,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            OtpSubject::Worker(worker) => &worker.name,
            OtpSubject::Organization(org) => &org.name,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            OtpSubject::Worker(worker) => worker.email.as_deref(),
            OtpSubject::Organization(org) => org.email.as_deref(),
        }
    }

    pub fn phone(&self) -> &str {
        match self {
            OtpSubject::Worker(worker) => &worker.phone,
            OtpSubject::Organization(org) => &org.phone,
        }
    }

    fn stored_otp(&self) -> (Option<&str>, Option<DateTime<Utc>>) {
        match self {
            OtpSubject::Worker(worker) => (worker.otp.as_deref(), worker.otp_expires),
            OtpSubject::Organization(org) => (org.otp.as_deref(), org.otp_expires),
        }
    }
}

/// Expired means strictly past the deadline; a verify at the exact expiry instant
/// still succeeds.
fn otp_matches(
    stored: Option<&str>,
    expires: Option<DateTime<Utc>>,
    submitted: &str,
    now: DateTime<Utc>,
) -> bool {
    match (stored, expires) {
        (Some(stored), Some(expires)) => stored == submitted && now <= expires,
        _ => false,
    }
}

/// Per-subject OTP state machine: none → issued(code, expiry) → consumed.
#[derive(Debug, Clone)]
pub struct OtpService {
    db_client: Arc<DBClient>,
}

impl OtpService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    pub async fn resolve_subject(&self, identifier: &str) -> Result<OtpSubject, ServiceError> {
        let is_email = identifier.contains('@');

        let worker = if is_email {
            self.db_client.get_worker(None, None, Some(identifier)).await?
        } else {
            self.db_client.get_worker(None, Some(identifier), None).await?
        };

        if let Some(worker) = worker {
            return Ok(OtpSubject::Worker(worker));
        }

        let organization = if is_email {
            self.db_client
                .get_organization(None, None, Some(identifier))
                .await?
        } else {
            self.db_client
                .get_organization(None, Some(identifier), None)
                .await?
        };

        organization
            .map(OtpSubject::Organization)
            .ok_or(ServiceError::SubjectNotFound)
    }

    /// Generates and persists a fresh code; returns it for delivery.
    pub async fn issue(&self, subject: &OtpSubject) -> Result<String, ServiceError> {
        let code = generate_otp();
        let expires_at = Utc::now() + Duration::minutes(OTP_TTL_MINUTES);

        match subject {
            OtpSubject::Worker(worker) => {
                self.db_client
                    .set_worker_otp(worker.id, &code, expires_at)
                    .await?
            }
            OtpSubject::Organization(org) => {
                self.db_client
                    .set_organization_otp(org.id, &code, expires_at)
                    .await?
            }
        }

        Ok(code)
    }

    /// Fails-closed cleanup used when delivery fails after issuance.
    pub async fn clear(&self, subject: &OtpSubject) -> Result<(), ServiceError> {
        match subject {
            OtpSubject::Worker(worker) => self.db_client.clear_worker_otp(worker.id).await?,
            OtpSubject::Organization(org) => {
                self.db_client.clear_organization_otp(org.id).await?
            }
        }

        Ok(())
    }

    /// Checks the submitted code and consumes it on success; at most one successful
    /// verify per issuance.
    pub async fn verify(&self, identifier: &str, submitted: &str) -> Result<OtpSubject, ServiceError> {
        let subject = self.resolve_subject(identifier).await?;

        let (stored, expires) = subject.stored_otp();
        if !otp_matches(stored, expires, submitted, Utc::now()) {
            return Err(ServiceError::InvalidOtp);
        }

        self.clear(&subject).await?;

        Ok(subject)
    }

    pub async fn reset_password(
        &self,
        subject_id: Uuid,
        role: SubjectRole,
        hashed_password: String,
    ) -> Result<(), ServiceError> {
        match role {
            SubjectRole::Worker => {
                self.db_client
                    .update_worker_password(subject_id, hashed_password)
                    .await?
            }
            SubjectRole::Organization => {
                self.db_client
                    .update_organization_password(subject_id, hashed_password)
                    .await?
            }
            _ => {
                return Err(ServiceError::Validation(
                    "Password reset requires a worker or organization session".to_string(),
                ))
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_code_before_expiry_is_valid() {
        let now = Utc::now();
        let expires = now + Duration::minutes(3);
        assert!(otp_matches(Some("123456"), Some(expires), "123456", now));
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let now = Utc::now();
        assert!(otp_matches(Some("123456"), Some(now), "123456", now));
    }

    #[test]
    fn expired_code_is_invalid() {
        let now = Utc::now();
        let expires = now - Duration::seconds(1);
        assert!(!otp_matches(Some("123456"), Some(expires), "123456", now));
    }

    #[test]
    fn wrong_code_is_invalid() {
        let now = Utc::now();
        let expires = now + Duration::minutes(3);
        assert!(!otp_matches(Some("123456"), Some(expires), "654321", now));
    }

    #[test]
    fn cleared_code_never_matches() {
        let now = Utc::now();
        assert!(!otp_matches(None, None, "123456", now));
        assert!(!otp_matches(Some("123456"), None, "123456", now));
    }
}
