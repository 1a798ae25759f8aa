use async_trait::async_trait;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::partnermodel::ReferralPartner;

const PARTNER_COLUMNS: &str = r#"
    id, name, email, phone, password, badges,
    total_referrals, successful_referrals, created_at, updated_at
"#;

#[async_trait]
pub trait PartnerExt {
    async fn get_partner(
        &self,
        partner_id: Option<Uuid>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<ReferralPartner>, sqlx::Error>;

    async fn save_partner(
        &self,
        name: String,
        email: String,
        phone: String,
        password: String,
    ) -> Result<ReferralPartner, sqlx::Error>;

    /// Atomic counter bump; avoids the read-modify-write race window.
    async fn increment_total_referrals(
        &self,
        partner_id: Uuid,
    ) -> Result<ReferralPartner, sqlx::Error>;

    async fn increment_successful_referrals(
        &self,
        partner_id: Uuid,
    ) -> Result<ReferralPartner, sqlx::Error>;

    /// Appends a badge only when absent, so the badge list behaves as a set.
    async fn award_badge(
        &self,
        partner_id: Uuid,
        badge: &str,
    ) -> Result<ReferralPartner, sqlx::Error>;
}

#[async_trait]
impl PartnerExt for DBClient {
    async fn get_partner(
        &self,
        partner_id: Option<Uuid>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<ReferralPartner>, sqlx::Error> {
        let mut partner: Option<ReferralPartner> = None;

        if let Some(partner_id) = partner_id {
            partner = sqlx::query_as::<_, ReferralPartner>(&format!(
                "SELECT {PARTNER_COLUMNS} FROM referral_partners WHERE id = $1"
            ))
            .bind(partner_id)
            .fetch_optional(&self.pool)
            .await?;
        } else if let Some(phone) = phone {
            partner = sqlx::query_as::<_, ReferralPartner>(&format!(
                "SELECT {PARTNER_COLUMNS} FROM referral_partners WHERE phone = $1"
            ))
            .bind(phone)
            .fetch_optional(&self.pool)
            .await?;
        } else if let Some(email) = email {
            partner = sqlx::query_as::<_, ReferralPartner>(&format!(
                "SELECT {PARTNER_COLUMNS} FROM referral_partners WHERE email = $1"
            ))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        }

        Ok(partner)
    }

    async fn save_partner(
        &self,
        name: String,
        email: String,
        phone: String,
        password: String,
    ) -> Result<ReferralPartner, sqlx::Error> {
        sqlx::query_as::<_, ReferralPartner>(&format!(
            r#"
            INSERT INTO referral_partners (name, email, phone, password)
            VALUES ($1, $2, $3, $4)
            RETURNING {PARTNER_COLUMNS}
            "#
        ))
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(password)
        .fetch_one(&self.pool)
        .await
    }

    async fn increment_total_referrals(
        &self,
        partner_id: Uuid,
    ) -> Result<ReferralPartner, sqlx::Error> {
        sqlx::query_as::<_, ReferralPartner>(&format!(
            r#"
            UPDATE referral_partners
            SET total_referrals = total_referrals + 1,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PARTNER_COLUMNS}
            "#
        ))
        .bind(partner_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn increment_successful_referrals(
        &self,
        partner_id: Uuid,
    ) -> Result<ReferralPartner, sqlx::Error> {
        sqlx::query_as::<_, ReferralPartner>(&format!(
            r#"
            UPDATE referral_partners
            SET successful_referrals = successful_referrals + 1,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PARTNER_COLUMNS}
            "#
        ))
        .bind(partner_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn award_badge(
        &self,
        partner_id: Uuid,
        badge: &str,
    ) -> Result<ReferralPartner, sqlx::Error> {
        sqlx::query_as::<_, ReferralPartner>(&format!(
            r#"
            UPDATE referral_partners
            SET badges = CASE
                    WHEN badges @> ARRAY[$2]::text[] THEN badges
                    ELSE array_append(badges, $2)
                END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PARTNER_COLUMNS}
            "#
        ))
        .bind(partner_id)
        .bind(badge)
        .fetch_one(&self.pool)
        .await
    }
}
