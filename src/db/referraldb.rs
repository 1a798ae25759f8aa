use async_trait::async_trait;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::referralmodel::{
    MirrorStatus, Referral, ReferralStatus, ReferrerKind,
};

const REFERRAL_COLUMNS: &str = r#"
    id, referrer_id, referrer_kind, job_id, worker_id, worker_name, worker_phone,
    worker_details, status, mirror_status, created_at, updated_at
"#;

#[async_trait]
pub trait ReferralExt {
    #[allow(clippy::too_many_arguments)]
    async fn save_referral(
        &self,
        referrer_id: Uuid,
        referrer_kind: ReferrerKind,
        job_id: Uuid,
        worker_id: Uuid,
        worker_name: String,
        worker_phone: String,
        worker_details: Option<serde_json::Value>,
    ) -> Result<Referral, sqlx::Error>;

    async fn get_referral(&self, referral_id: Uuid) -> Result<Option<Referral>, sqlx::Error>;

    async fn get_referral_for_application(
        &self,
        job_id: Uuid,
        worker_id: Uuid,
    ) -> Result<Option<Referral>, sqlx::Error>;

    async fn get_pending_referrals(&self) -> Result<Vec<Referral>, sqlx::Error>;

    async fn update_referral_status(
        &self,
        referral_id: Uuid,
        status: ReferralStatus,
    ) -> Result<Option<Referral>, sqlx::Error>;

    async fn set_mirror_status(
        &self,
        referral_id: Uuid,
        mirror_status: MirrorStatus,
    ) -> Result<(), sqlx::Error>;

    async fn count_referrals_by_referrer(
        &self,
        referrer_id: Uuid,
        referrer_kind: ReferrerKind,
    ) -> Result<i64, sqlx::Error>;

    async fn count_hired_referrals_by_referrer(
        &self,
        referrer_id: Uuid,
        referrer_kind: ReferrerKind,
    ) -> Result<i64, sqlx::Error>;
}

#[async_trait]
impl ReferralExt for DBClient {
    async fn save_referral(
        &self,
        referrer_id: Uuid,
        referrer_kind: ReferrerKind,
        job_id: Uuid,
        worker_id: Uuid,
        worker_name: String,
        worker_phone: String,
        worker_details: Option<serde_json::Value>,
    ) -> Result<Referral, sqlx::Error> {
        sqlx::query_as::<_, Referral>(&format!(
            r#"
            INSERT INTO referrals
                (referrer_id, referrer_kind, job_id, worker_id,
                 worker_name, worker_phone, worker_details)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {REFERRAL_COLUMNS}
            "#
        ))
        .bind(referrer_id)
        .bind(referrer_kind)
        .bind(job_id)
        .bind(worker_id)
        .bind(worker_name)
        .bind(worker_phone)
        .bind(worker_details)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_referral(&self, referral_id: Uuid) -> Result<Option<Referral>, sqlx::Error> {
        sqlx::query_as::<_, Referral>(&format!(
            "SELECT {REFERRAL_COLUMNS} FROM referrals WHERE id = $1"
        ))
        .bind(referral_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_referral_for_application(
        &self,
        job_id: Uuid,
        worker_id: Uuid,
    ) -> Result<Option<Referral>, sqlx::Error> {
        sqlx::query_as::<_, Referral>(&format!(
            r#"
            SELECT {REFERRAL_COLUMNS}
            FROM referrals
            WHERE job_id = $1 AND worker_id = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#
        ))
        .bind(job_id)
        .bind(worker_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_pending_referrals(&self) -> Result<Vec<Referral>, sqlx::Error> {
        sqlx::query_as::<_, Referral>(&format!(
            r#"
            SELECT {REFERRAL_COLUMNS}
            FROM referrals
            WHERE status = 'pending'::referral_status
            ORDER BY created_at DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await
    }

    async fn update_referral_status(
        &self,
        referral_id: Uuid,
        status: ReferralStatus,
    ) -> Result<Option<Referral>, sqlx::Error> {
        sqlx::query_as::<_, Referral>(&format!(
            r#"
            UPDATE referrals
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {REFERRAL_COLUMNS}
            "#
        ))
        .bind(referral_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
    }

    async fn set_mirror_status(
        &self,
        referral_id: Uuid,
        mirror_status: MirrorStatus,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE referrals
            SET mirror_status = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(referral_id)
        .bind(mirror_status)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn count_referrals_by_referrer(
        &self,
        referrer_id: Uuid,
        referrer_kind: ReferrerKind,
    ) -> Result<i64, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM referrals
            WHERE referrer_id = $1 AND referrer_kind = $2
            "#,
        )
        .bind(referrer_id)
        .bind(referrer_kind)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn count_hired_referrals_by_referrer(
        &self,
        referrer_id: Uuid,
        referrer_kind: ReferrerKind,
    ) -> Result<i64, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM referrals
            WHERE referrer_id = $1 AND referrer_kind = $2
              AND status = 'hired'::referral_status
            "#,
        )
        .bind(referrer_id)
        .bind(referrer_kind)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
