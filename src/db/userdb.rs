use async_trait::async_trait;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::usermodel::{User, UserRole};

#[async_trait]
pub trait UserExt {
    async fn get_user(
        &self,
        user_id: Option<Uuid>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error>;

    async fn save_user<T: Into<String> + Send>(
        &self,
        email: Option<String>,
        phone: T,
        password: T,
    ) -> Result<User, sqlx::Error>;

    async fn attach_profile(
        &self,
        user_id: Uuid,
        role: UserRole,
        profile_id: Uuid,
    ) -> Result<User, sqlx::Error>;
}

#[async_trait]
impl UserExt for DBClient {
    async fn get_user(
        &self,
        user_id: Option<Uuid>,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error> {
        let mut user: Option<User> = None;

        if let Some(user_id) = user_id {
            user = sqlx::query_as::<_, User>(
                r#"
                SELECT id, email, phone, password, role, profile_id, created_at, updated_at
                FROM users
                WHERE id = $1
                "#,
            )
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        } else if let Some(phone) = phone {
            user = sqlx::query_as::<_, User>(
                r#"
                SELECT id, email, phone, password, role, profile_id, created_at, updated_at
                FROM users
                WHERE phone = $1
                "#,
            )
            .bind(phone)
            .fetch_optional(&self.pool)
            .await?;
        } else if let Some(email) = email {
            user = sqlx::query_as::<_, User>(
                r#"
                SELECT id, email, phone, password, role, profile_id, created_at, updated_at
                FROM users
                WHERE email = $1
                "#,
            )
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        }

        Ok(user)
    }

    async fn save_user<T: Into<String> + Send>(
        &self,
        email: Option<String>,
        phone: T,
        password: T,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, phone, password)
            VALUES ($1, $2, $3)
            RETURNING id, email, phone, password, role, profile_id, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(phone.into())
        .bind(password.into())
        .fetch_one(&self.pool)
        .await
    }

    async fn attach_profile(
        &self,
        user_id: Uuid,
        role: UserRole,
        profile_id: Uuid,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET role = $2,
                profile_id = $3,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, phone, password, role, profile_id, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(role)
        .bind(profile_id)
        .fetch_one(&self.pool)
        .await
    }
}
