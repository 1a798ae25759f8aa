use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::{
        db::DBClient, jobdb::JobExt, partnerdb::PartnerExt, referraldb::ReferralExt,
        workerdb::WorkerExt,
    },
    dtos::SubmitReferralDto,
    models::{
        partnermodel::ReferralPartner,
        profilemodels::Worker,
        referralmodel::{Referral, ReferrerKind},
        usermodel::SubjectRole,
    },
    service::{error::ServiceError, notification_service::NotificationService},
    utils::password,
};

/// Who submitted a referral. An explicit tagged result instead of sequential
/// fallback lookups, so the partner-vs-worker ambiguity stays visible.
#[derive(Debug, Clone)]
pub enum Referrer {
    Partner(ReferralPartner),
    Worker(Worker),
}

impl Referrer {
    pub fn id(&self) -> Uuid {
        match self {
            Referrer::Partner(partner) => partner.id,
            Referrer::Worker(worker) => worker.id,
        }
    }

    pub fn kind(&self) -> ReferrerKind {
        match self {
            Referrer::Partner(_) => ReferrerKind::Partner,
            Referrer::Worker(_) => ReferrerKind::Worker,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Referrer::Partner(partner) => &partner.name,
            Referrer::Worker(worker) => &worker.name,
        }
    }
}

#[derive(Debug)]
pub struct ReferrerStats {
    pub total_referrals: i64,
    pub successful_referrals: i64,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ReferralService {
    db_client: Arc<DBClient>,
    notification_service: Arc<NotificationService>,
}

impl ReferralService {
    pub fn new(db_client: Arc<DBClient>, notification_service: Arc<NotificationService>) -> Self {
        Self {
            db_client,
            notification_service,
        }
    }

    pub async fn resolve_referrer(
        &self,
        subject_id: Uuid,
        role: SubjectRole,
    ) -> Result<Referrer, ServiceError> {
        match role {
            SubjectRole::ReferralPartner => self
                .db_client
                .get_partner(Some(subject_id), None, None)
                .await?
                .map(Referrer::Partner)
                .ok_or(ServiceError::ReferrerNotFound(subject_id)),
            SubjectRole::Worker => self
                .db_client
                .get_worker(Some(subject_id), None, None)
                .await?
                .map(Referrer::Worker)
                .ok_or(ServiceError::ReferrerNotFound(subject_id)),
            _ => Err(ServiceError::Validation(
                "Only referral partners or workers can submit referrals".to_string(),
            )),
        }
    }

    pub async fn submit_referral(
        &self,
        subject_id: Uuid,
        role: SubjectRole,
        body: SubmitReferralDto,
    ) -> Result<Referral, ServiceError> {
        let referrer = self.resolve_referrer(subject_id, role).await?;

        let job = self
            .db_client
            .get_job(body.job_id)
            .await?
            .ok_or(ServiceError::JobNotFound(body.job_id))?;

        let worker = match self
            .db_client
            .get_worker(None, Some(&body.worker_phone), None)
            .await?
        {
            Some(worker) => worker,
            None => {
                let hashed_password = password::hash(&body.password)
                    .map_err(|e| ServiceError::Password(e.to_string()))?;

                self.db_client
                    .save_worker(
                        body.worker_name.clone(),
                        None,
                        Vec::new(),
                        None,
                        None,
                        body.worker_phone.clone(),
                        None,
                        None,
                        None,
                        hashed_password,
                        Some(referrer.name().to_string()),
                    )
                    .await?
            }
        };

        let referral = self
            .db_client
            .save_referral(
                referrer.id(),
                referrer.kind(),
                job.id,
                worker.id,
                body.worker_name,
                body.worker_phone,
                body.worker_details,
            )
            .await?;

        // The worker may already have applied on their own; the guarded insert keeps
        // the one-application-per-pair invariant either way.
        self.db_client
            .save_application_if_absent(job.id, worker.id)
            .await?;

        if let Err(e) = self
            .notification_service
            .notify_referral_submitted(&job, worker.id, &referral.worker_name)
            .await
        {
            tracing::warn!(
                "Failed to notify organization {} about referral: {}",
                job.org_id,
                e
            );
        }

        // Worker-as-referrer submissions are not counted; only true partners carry
        // the totals that feed badges.
        if let Referrer::Partner(partner) = &referrer {
            self.db_client.increment_total_referrals(partner.id).await?;
        }

        Ok(referral)
    }

    pub async fn get_stats(
        &self,
        subject_id: Uuid,
        role: SubjectRole,
    ) -> Result<ReferrerStats, ServiceError> {
        match self.resolve_referrer(subject_id, role).await? {
            Referrer::Partner(partner) => Ok(ReferrerStats {
                total_referrals: partner.total_referrals as i64,
                successful_referrals: partner.successful_referrals as i64,
                badges: partner.badges,
            }),
            // Workers acting as referrers have no persisted counters; derive the
            // numbers from their referral rows instead.
            Referrer::Worker(worker) => {
                let total = self
                    .db_client
                    .count_referrals_by_referrer(worker.id, ReferrerKind::Worker)
                    .await?;
                let successful = self
                    .db_client
                    .count_hired_referrals_by_referrer(worker.id, ReferrerKind::Worker)
                    .await?;

                Ok(ReferrerStats {
                    total_referrals: total,
                    successful_referrals: successful,
                    badges: Vec::new(),
                })
            }
        }
    }
}
