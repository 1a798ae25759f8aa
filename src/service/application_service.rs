use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::{
        db::DBClient, jobdb::JobExt, partnerdb::PartnerExt, referraldb::ReferralExt,
    },
    models::{
        jobmodel::{ApplicationStatus, JobApplication, JobWithOrg},
        partnermodel::badges_for_success_count,
        profilemodels::Worker,
        referralmodel::{MirrorStatus, Referral, ReferralStatus, ReferrerKind},
    },
    service::{error::ServiceError, notification_service::NotificationService},
};

/// Job application lifecycle: apply, decide, and mirror decisions onto any linked
/// referral with partner badge/stat accounting.
#[derive(Debug, Clone)]
pub struct ApplicationService {
    db_client: Arc<DBClient>,
    notification_service: Arc<NotificationService>,
}

impl ApplicationService {
    pub fn new(db_client: Arc<DBClient>, notification_service: Arc<NotificationService>) -> Self {
        Self {
            db_client,
            notification_service,
        }
    }

    pub async fn apply_to_job(
        &self,
        job_id: Uuid,
        worker: &Worker,
    ) -> Result<JobApplication, ServiceError> {
        let job = self
            .db_client
            .get_job(job_id)
            .await?
            .ok_or(ServiceError::JobNotFound(job_id))?;

        let existing = self.db_client.get_application(job_id, worker.id).await?;
        if existing.is_some() {
            return Err(ServiceError::AlreadyApplied);
        }

        // The unique constraint backstops a concurrent duplicate that slipped past
        // the check above.
        let application = match self.db_client.save_application(job_id, worker.id).await {
            Ok(application) => application,
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(ServiceError::AlreadyApplied);
            }
            Err(e) => return Err(e.into()),
        };

        // Notification failures never roll back the application itself.
        if let Err(e) = self
            .notification_service
            .notify_application_received(&job, worker.id, &worker.name)
            .await
        {
            tracing::warn!(
                "Failed to create application notifications for job {}: {}",
                job_id,
                e
            );
        }

        Ok(application)
    }

    pub async fn update_application_status(
        &self,
        org_id: Uuid,
        job_id: Uuid,
        worker_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<JobApplication, ServiceError> {
        // Ownership by omission: the lookup is filtered on both id and owner.
        self.db_client
            .get_org_job(job_id, org_id)
            .await?
            .ok_or(ServiceError::JobNotFound(job_id))?;

        let job = self
            .db_client
            .get_job(job_id)
            .await?
            .ok_or(ServiceError::JobNotFound(job_id))?;

        let application = self
            .db_client
            .update_application_status(job_id, worker_id, status)
            .await?
            .ok_or(ServiceError::ApplicationNotFound { job_id, worker_id })?;

        if let Err(e) = self
            .notification_service
            .notify_application_decision(&job, worker_id, status.to_str())
            .await
        {
            tracing::warn!(
                "Failed to notify worker {} about application decision: {}",
                worker_id,
                e
            );
        }

        self.mirror_onto_referral(&job, worker_id, status).await;

        Ok(application)
    }

    /// Best-effort secondary write: mirrors the application decision onto any linked
    /// referral and records the outcome in mirror_status so a failed mirror is
    /// observable rather than silent. Never fails the primary status update.
    async fn mirror_onto_referral(
        &self,
        job: &JobWithOrg,
        worker_id: Uuid,
        status: ApplicationStatus,
    ) {
        let referral = match self
            .db_client
            .get_referral_for_application(job.id, worker_id)
            .await
        {
            Ok(Some(referral)) => referral,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(
                    "Referral lookup failed for job {} worker {}: {}",
                    job.id,
                    worker_id,
                    e
                );
                return;
            }
        };

        let mirrored = ReferralStatus::mirror_of(status);

        match self
            .db_client
            .update_referral_status(referral.id, mirrored)
            .await
        {
            Ok(Some(_)) => {
                if let Err(e) = self
                    .db_client
                    .set_mirror_status(referral.id, MirrorStatus::Mirrored)
                    .await
                {
                    tracing::warn!(
                        "Failed to record mirror outcome for referral {}: {}",
                        referral.id,
                        e
                    );
                }

                if mirrored == ReferralStatus::Hired {
                    self.credit_partner(&referral, job).await;
                }
            }
            Ok(None) => {
                tracing::warn!(
                    "Referral {} disappeared before mirror could apply",
                    referral.id
                );
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to mirror status onto referral {}: {}",
                    referral.id,
                    e
                );
                if let Err(e) = self
                    .db_client
                    .set_mirror_status(referral.id, MirrorStatus::MirrorFailed)
                    .await
                {
                    tracing::error!(
                        "Failed to record mirror failure for referral {}: {}",
                        referral.id,
                        e
                    );
                }
            }
        }
    }

    /// Counts a hire for a true referral partner and awards threshold badges.
    /// Worker-as-referrer submissions carry no persisted counters and are skipped.
    async fn credit_partner(&self, referral: &Referral, job: &JobWithOrg) {
        if referral.referrer_kind != ReferrerKind::Partner {
            return;
        }

        let partner = match self
            .db_client
            .increment_successful_referrals(referral.referrer_id)
            .await
        {
            Ok(partner) => partner,
            Err(e) => {
                tracing::warn!(
                    "Failed to credit partner {} for hire: {}",
                    referral.referrer_id,
                    e
                );
                return;
            }
        };

        for badge in badges_for_success_count(partner.successful_referrals) {
            if let Err(e) = self.db_client.award_badge(partner.id, badge).await {
                tracing::warn!("Failed to award badge '{}' to {}: {}", badge, partner.id, e);
            }
        }

        if let Err(e) = self
            .notification_service
            .notify_referral_hired(partner.id, job, &referral.worker_name)
            .await
        {
            tracing::warn!("Failed to notify partner {} about hire: {}", partner.id, e);
        }
    }
}
