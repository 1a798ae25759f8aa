use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::db::DBClient;
use crate::models::profilemodels::Worker;

const WORKER_COLUMNS: &str = r#"
    id, name, age, skills, experience, location, phone, email,
    expected_salary, availability, password, referred_by,
    otp, otp_expires, verified, created_at, updated_at
"#;

#[async_trait]
pub trait WorkerExt {
    async fn get_worker(
        &self,
        worker_id: Option<Uuid>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<Worker>, sqlx::Error>;

    #[allow(clippy::too_many_arguments)]
    async fn save_worker(
        &self,
        name: String,
        age: Option<i32>,
        skills: Vec<String>,
        experience: Option<String>,
        location: Option<String>,
        phone: String,
        email: Option<String>,
        expected_salary: Option<String>,
        availability: Option<String>,
        password: String,
        referred_by: Option<String>,
    ) -> Result<Worker, sqlx::Error>;

    #[allow(clippy::too_many_arguments)]
    async fn update_worker_profile(
        &self,
        worker_id: Uuid,
        name: Option<String>,
        age: Option<i32>,
        skills: Option<Vec<String>>,
        experience: Option<String>,
        location: Option<String>,
        expected_salary: Option<String>,
        availability: Option<String>,
    ) -> Result<Worker, sqlx::Error>;

    async fn set_worker_otp(
        &self,
        worker_id: Uuid,
        otp: &str,
        otp_expires: DateTime<Utc>,
    ) -> Result<(), sqlx::Error>;

    async fn clear_worker_otp(&self, worker_id: Uuid) -> Result<(), sqlx::Error>;

    async fn update_worker_password(
        &self,
        worker_id: Uuid,
        password: String,
    ) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl WorkerExt for DBClient {
    async fn get_worker(
        &self,
        worker_id: Option<Uuid>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<Worker>, sqlx::Error> {
        let mut worker: Option<Worker> = None;

        if let Some(worker_id) = worker_id {
            worker = sqlx::query_as::<_, Worker>(&format!(
                "SELECT {WORKER_COLUMNS} FROM workers WHERE id = $1"
            ))
            .bind(worker_id)
            .fetch_optional(&self.pool)
            .await?;
        } else if let Some(phone) = phone {
            worker = sqlx::query_as::<_, Worker>(&format!(
                "SELECT {WORKER_COLUMNS} FROM workers WHERE phone = $1"
            ))
            .bind(phone)
            .fetch_optional(&self.pool)
            .await?;
        } else if let Some(email) = email {
            worker = sqlx::query_as::<_, Worker>(&format!(
                "SELECT {WORKER_COLUMNS} FROM workers WHERE email = $1"
            ))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        }

        Ok(worker)
    }

    async fn save_worker(
        &self,
        name: String,
        age: Option<i32>,
        skills: Vec<String>,
        experience: Option<String>,
        location: Option<String>,
        phone: String,
        email: Option<String>,
        expected_salary: Option<String>,
        availability: Option<String>,
        password: String,
        referred_by: Option<String>,
    ) -> Result<Worker, sqlx::Error> {
        sqlx::query_as::<_, Worker>(&format!(
            r#"
            INSERT INTO workers
                (name, age, skills, experience, location, phone, email,
                 expected_salary, availability, password, referred_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {WORKER_COLUMNS}
            "#
        ))
        .bind(name)
        .bind(age)
        .bind(skills)
        .bind(experience)
        .bind(location)
        .bind(phone)
        .bind(email)
        .bind(expected_salary)
        .bind(availability)
        .bind(password)
        .bind(referred_by)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_worker_profile(
        &self,
        worker_id: Uuid,
        name: Option<String>,
        age: Option<i32>,
        skills: Option<Vec<String>>,
        experience: Option<String>,
        location: Option<String>,
        expected_salary: Option<String>,
        availability: Option<String>,
    ) -> Result<Worker, sqlx::Error> {
        sqlx::query_as::<_, Worker>(&format!(
            r#"
            UPDATE workers
            SET name = COALESCE($2, name),
                age = COALESCE($3, age),
                skills = COALESCE($4, skills),
                experience = COALESCE($5, experience),
                location = COALESCE($6, location),
                expected_salary = COALESCE($7, expected_salary),
                availability = COALESCE($8, availability),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {WORKER_COLUMNS}
            "#
        ))
        .bind(worker_id)
        .bind(name)
        .bind(age)
        .bind(skills)
        .bind(experience)
        .bind(location)
        .bind(expected_salary)
        .bind(availability)
        .fetch_one(&self.pool)
        .await
    }

    async fn set_worker_otp(
        &self,
        worker_id: Uuid,
        otp: &str,
        otp_expires: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE workers
            SET otp = $2, otp_expires = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(worker_id)
        .bind(otp)
        .bind(otp_expires)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn clear_worker_otp(&self, worker_id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE workers
            SET otp = NULL, otp_expires = NULL, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(worker_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_worker_password(
        &self,
        worker_id: Uuid,
        password: String,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE workers
            SET password = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(worker_id)
        .bind(password)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
