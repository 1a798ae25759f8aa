use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::db::DBClient;
use crate::models::profilemodels::Organization;

const ORG_COLUMNS: &str = r#"
    id, name, location, phone, email, password, verified,
    otp, otp_expires, created_at, updated_at
"#;

#[async_trait]
pub trait OrganizationExt {
    async fn get_organization(
        &self,
        org_id: Option<Uuid>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<Organization>, sqlx::Error>;

    async fn save_organization(
        &self,
        name: String,
        location: Option<String>,
        phone: String,
        email: Option<String>,
        password: String,
    ) -> Result<Organization, sqlx::Error>;

    async fn update_organization_profile(
        &self,
        org_id: Uuid,
        name: Option<String>,
        location: Option<String>,
        email: Option<String>,
    ) -> Result<Organization, sqlx::Error>;

    async fn set_organization_otp(
        &self,
        org_id: Uuid,
        otp: &str,
        otp_expires: DateTime<Utc>,
    ) -> Result<(), sqlx::Error>;

    async fn clear_organization_otp(&self, org_id: Uuid) -> Result<(), sqlx::Error>;

    async fn update_organization_password(
        &self,
        org_id: Uuid,
        password: String,
    ) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl OrganizationExt for DBClient {
    async fn get_organization(
        &self,
        org_id: Option<Uuid>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<Organization>, sqlx::Error> {
        let mut organization: Option<Organization> = None;

        if let Some(org_id) = org_id {
            organization = sqlx::query_as::<_, Organization>(&format!(
                "SELECT {ORG_COLUMNS} FROM organizations WHERE id = $1"
            ))
            .bind(org_id)
            .fetch_optional(&self.pool)
            .await?;
        } else if let Some(phone) = phone {
            organization = sqlx::query_as::<_, Organization>(&format!(
                "SELECT {ORG_COLUMNS} FROM organizations WHERE phone = $1"
            ))
            .bind(phone)
            .fetch_optional(&self.pool)
            .await?;
        } else if let Some(email) = email {
            organization = sqlx::query_as::<_, Organization>(&format!(
                "SELECT {ORG_COLUMNS} FROM organizations WHERE email = $1"
            ))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        }

        Ok(organization)
    }

    async fn save_organization(
        &self,
        name: String,
        location: Option<String>,
        phone: String,
        email: Option<String>,
        password: String,
    ) -> Result<Organization, sqlx::Error> {
        sqlx::query_as::<_, Organization>(&format!(
            r#"
            INSERT INTO organizations (name, location, phone, email, password)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {ORG_COLUMNS}
            "#
        ))
        .bind(name)
        .bind(location)
        .bind(phone)
        .bind(email)
        .bind(password)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_organization_profile(
        &self,
        org_id: Uuid,
        name: Option<String>,
        location: Option<String>,
        email: Option<String>,
    ) -> Result<Organization, sqlx::Error> {
        sqlx::query_as::<_, Organization>(&format!(
            r#"
            UPDATE organizations
            SET name = COALESCE($2, name),
                location = COALESCE($3, location),
                email = COALESCE($4, email),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {ORG_COLUMNS}
            "#
        ))
        .bind(org_id)
        .bind(name)
        .bind(location)
        .bind(email)
        .fetch_one(&self.pool)
        .await
    }

    async fn set_organization_otp(
        &self,
        org_id: Uuid,
        otp: &str,
        otp_expires: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE organizations
            SET otp = $2, otp_expires = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(org_id)
        .bind(otp)
        .bind(otp_expires)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn clear_organization_otp(&self, org_id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE organizations
            SET otp = NULL, otp_expires = NULL, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(org_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_organization_password(
        &self,
        org_id: Uuid,
        password: String,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE organizations
            SET password = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(org_id)
        .bind(password)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
