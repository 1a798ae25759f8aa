use async_trait::async_trait;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::jobmodel::{ApplicationStatus, Job, JobApplication, JobWithOrg};

const JOB_COLUMNS: &str = r#"
    id, org_id, title, description, salary_range, location, category,
    created_at, updated_at
"#;

const JOB_WITH_ORG_COLUMNS: &str = r#"
    j.id, j.org_id, j.title, j.description, j.salary_range, j.location, j.category,
    o.name AS org_name, o.location AS org_location, o.phone AS org_phone,
    j.created_at, j.updated_at
"#;

#[async_trait]
pub trait JobExt {
    async fn save_job(
        &self,
        org_id: Uuid,
        title: String,
        description: Option<String>,
        salary_range: Option<String>,
        location: Option<String>,
        category: Option<String>,
    ) -> Result<Job, sqlx::Error>;

    async fn get_job(&self, job_id: Uuid) -> Result<Option<JobWithOrg>, sqlx::Error>;

    /// Ownership by omission: returns None unless the job belongs to the organization.
    async fn get_org_job(&self, job_id: Uuid, org_id: Uuid) -> Result<Option<Job>, sqlx::Error>;

    async fn get_jobs(&self) -> Result<Vec<JobWithOrg>, sqlx::Error>;

    async fn get_org_jobs(&self, org_id: Uuid) -> Result<Vec<Job>, sqlx::Error>;

    #[allow(clippy::too_many_arguments)]
    async fn update_job(
        &self,
        job_id: Uuid,
        org_id: Uuid,
        title: Option<String>,
        description: Option<String>,
        salary_range: Option<String>,
        location: Option<String>,
        category: Option<String>,
    ) -> Result<Option<Job>, sqlx::Error>;

    async fn delete_job(&self, job_id: Uuid, org_id: Uuid) -> Result<u64, sqlx::Error>;

    async fn get_application(
        &self,
        job_id: Uuid,
        worker_id: Uuid,
    ) -> Result<Option<JobApplication>, sqlx::Error>;

    async fn get_applications(&self, job_id: Uuid) -> Result<Vec<JobApplication>, sqlx::Error>;

    async fn save_application(
        &self,
        job_id: Uuid,
        worker_id: Uuid,
    ) -> Result<JobApplication, sqlx::Error>;

    /// Insert guarded by the (job_id, worker_id) unique constraint; returns the number
    /// of rows actually written so a racing duplicate is a clean no-op.
    async fn save_application_if_absent(
        &self,
        job_id: Uuid,
        worker_id: Uuid,
    ) -> Result<u64, sqlx::Error>;

    async fn update_application_status(
        &self,
        job_id: Uuid,
        worker_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<JobApplication>, sqlx::Error>;
}

#[async_trait]
impl JobExt for DBClient {
    async fn save_job(
        &self,
        org_id: Uuid,
        title: String,
        description: Option<String>,
        salary_range: Option<String>,
        location: Option<String>,
        category: Option<String>,
    ) -> Result<Job, sqlx::Error> {
        sqlx::query_as::<_, Job>(&format!(
            r#"
            INSERT INTO jobs (org_id, title, description, salary_range, location, category)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(org_id)
        .bind(title)
        .bind(description)
        .bind(salary_range)
        .bind(location)
        .bind(category)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_job(&self, job_id: Uuid) -> Result<Option<JobWithOrg>, sqlx::Error> {
        sqlx::query_as::<_, JobWithOrg>(&format!(
            r#"
            SELECT {JOB_WITH_ORG_COLUMNS}
            FROM jobs j
            LEFT JOIN organizations o ON o.id = j.org_id
            WHERE j.id = $1
            "#
        ))
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_org_job(&self, job_id: Uuid, org_id: Uuid) -> Result<Option<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1 AND org_id = $2"
        ))
        .bind(job_id)
        .bind(org_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_jobs(&self) -> Result<Vec<JobWithOrg>, sqlx::Error> {
        sqlx::query_as::<_, JobWithOrg>(&format!(
            r#"
            SELECT {JOB_WITH_ORG_COLUMNS}
            FROM jobs j
            LEFT JOIN organizations o ON o.id = j.org_id
            ORDER BY j.created_at DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await
    }

    async fn get_org_jobs(&self, org_id: Uuid) -> Result<Vec<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE org_id = $1 ORDER BY created_at DESC"
        ))
        .bind(org_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn update_job(
        &self,
        job_id: Uuid,
        org_id: Uuid,
        title: Option<String>,
        description: Option<String>,
        salary_range: Option<String>,
        location: Option<String>,
        category: Option<String>,
    ) -> Result<Option<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>(&format!(
            r#"
            UPDATE jobs
            SET title = COALESCE($3, title),
                description = COALESCE($4, description),
                salary_range = COALESCE($5, salary_range),
                location = COALESCE($6, location),
                category = COALESCE($7, category),
                updated_at = NOW()
            WHERE id = $1 AND org_id = $2
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(job_id)
        .bind(org_id)
        .bind(title)
        .bind(description)
        .bind(salary_range)
        .bind(location)
        .bind(category)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_job(&self, job_id: Uuid, org_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1 AND org_id = $2")
            .bind(job_id)
            .bind(org_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn get_application(
        &self,
        job_id: Uuid,
        worker_id: Uuid,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        sqlx::query_as::<_, JobApplication>(
            r#"
            SELECT id, job_id, worker_id, status, applied_at
            FROM job_applications
            WHERE job_id = $1 AND worker_id = $2
            "#,
        )
        .bind(job_id)
        .bind(worker_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_applications(&self, job_id: Uuid) -> Result<Vec<JobApplication>, sqlx::Error> {
        sqlx::query_as::<_, JobApplication>(
            r#"
            SELECT id, job_id, worker_id, status, applied_at
            FROM job_applications
            WHERE job_id = $1
            ORDER BY applied_at ASC
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn save_application(
        &self,
        job_id: Uuid,
        worker_id: Uuid,
    ) -> Result<JobApplication, sqlx::Error> {
        sqlx::query_as::<_, JobApplication>(
            r#"
            INSERT INTO job_applications (job_id, worker_id)
            VALUES ($1, $2)
            RETURNING id, job_id, worker_id, status, applied_at
            "#,
        )
        .bind(job_id)
        .bind(worker_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn save_application_if_absent(
        &self,
        job_id: Uuid,
        worker_id: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO job_applications (job_id, worker_id)
            VALUES ($1, $2)
            ON CONFLICT (job_id, worker_id) DO NOTHING
            "#,
        )
        .bind(job_id)
        .bind(worker_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn update_application_status(
        &self,
        job_id: Uuid,
        worker_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        sqlx::query_as::<_, JobApplication>(
            r#"
            UPDATE job_applications
            SET status = $3
            WHERE job_id = $1 AND worker_id = $2
            RETURNING id, job_id, worker_id, status, applied_at
            "#,
        )
        .bind(job_id)
        .bind(worker_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
    }
}
