use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::{db::DBClient, notificationdb::NotificationExt},
    models::{
        jobmodel::JobWithOrg,
        notificationmodel::{NotificationType, RecipientKind},
    },
    service::error::ServiceError,
};

/// Creates recipient-addressed notification rows on workflow events. Append-only;
/// delivery beyond local persistence is out of scope.
#[derive(Debug, Clone)]
pub struct NotificationService {
    db_client: Arc<DBClient>,
}

impl NotificationService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    pub async fn notify_application_received(
        &self,
        job: &JobWithOrg,
        worker_id: Uuid,
        worker_name: &str,
    ) -> Result<(), ServiceError> {
        self.db_client
            .save_notification(
                job.org_id,
                RecipientKind::Organization,
                format!("{} applied for your job: {}", worker_name, job.title),
                NotificationType::Application,
                Some(job.id),
                Some(worker_id),
                Some(RecipientKind::Worker),
            )
            .await?;

        self.db_client
            .save_notification(
                worker_id,
                RecipientKind::Worker,
                format!("You successfully applied for: {}", job.title),
                NotificationType::Info,
                Some(job.id),
                None,
                None,
            )
            .await?;

        Ok(())
    }

    pub async fn notify_application_decision(
        &self,
        job: &JobWithOrg,
        worker_id: Uuid,
        status: &str,
    ) -> Result<(), ServiceError> {
        let org_name = job.org_name.as_deref().unwrap_or("the organization");
        let org_phone = job.org_phone.as_deref().unwrap_or("their listed contact");

        self.db_client
            .save_notification(
                worker_id,
                RecipientKind::Worker,
                format!(
                    "Your application for {} was {} by {}. You can contact them at {}",
                    job.title, status, org_name, org_phone
                ),
                NotificationType::Info,
                Some(job.id),
                Some(job.org_id),
                Some(RecipientKind::Organization),
            )
            .await?;

        Ok(())
    }

    pub async fn notify_referral_submitted(
        &self,
        job: &JobWithOrg,
        worker_id: Uuid,
        worker_name: &str,
    ) -> Result<(), ServiceError> {
        self.db_client
            .save_notification(
                job.org_id,
                RecipientKind::Organization,
                format!(
                    "{} was referred for your job: {}",
                    worker_name, job.title
                ),
                NotificationType::Application,
                Some(job.id),
                Some(worker_id),
                Some(RecipientKind::Worker),
            )
            .await?;

        Ok(())
    }

    pub async fn notify_referral_hired(
        &self,
        partner_id: Uuid,
        job: &JobWithOrg,
        worker_name: &str,
    ) -> Result<(), ServiceError> {
        self.db_client
            .save_notification(
                partner_id,
                RecipientKind::ReferralPartner,
                format!(
                    "Your referral {} was hired for: {}",
                    worker_name, job.title
                ),
                NotificationType::Info,
                Some(job.id),
                None,
                None,
            )
            .await?;

        Ok(())
    }
}
