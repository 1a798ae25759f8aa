use async_trait::async_trait;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::notificationmodel::{Notification, NotificationType, RecipientKind};

const NOTIFICATION_COLUMNS: &str = r#"
    id, recipient_id, recipient_kind, message, notif_type,
    related_id, related_user_id, related_user_kind,
    read, action_status, created_at, updated_at
"#;

#[async_trait]
pub trait NotificationExt {
    #[allow(clippy::too_many_arguments)]
    async fn save_notification(
        &self,
        recipient_id: Uuid,
        recipient_kind: RecipientKind,
        message: String,
        notif_type: NotificationType,
        related_id: Option<Uuid>,
        related_user_id: Option<Uuid>,
        related_user_kind: Option<RecipientKind>,
    ) -> Result<Notification, sqlx::Error>;

    async fn get_notifications(
        &self,
        recipient_id: Uuid,
    ) -> Result<Vec<Notification>, sqlx::Error>;

    async fn mark_notification_read(
        &self,
        notification_id: Uuid,
        recipient_id: Uuid,
    ) -> Result<u64, sqlx::Error>;

    async fn update_notification_action_status(
        &self,
        notification_id: Uuid,
        recipient_id: Uuid,
        action_status: String,
    ) -> Result<u64, sqlx::Error>;

    async fn delete_notification(
        &self,
        notification_id: Uuid,
        recipient_id: Uuid,
    ) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl NotificationExt for DBClient {
    async fn save_notification(
        &self,
        recipient_id: Uuid,
        recipient_kind: RecipientKind,
        message: String,
        notif_type: NotificationType,
        related_id: Option<Uuid>,
        related_user_id: Option<Uuid>,
        related_user_kind: Option<RecipientKind>,
    ) -> Result<Notification, sqlx::Error> {
        sqlx::query_as::<_, Notification>(&format!(
            r#"
            INSERT INTO notifications
                (recipient_id, recipient_kind, message, notif_type,
                 related_id, related_user_id, related_user_kind)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {NOTIFICATION_COLUMNS}
            "#
        ))
        .bind(recipient_id)
        .bind(recipient_kind)
        .bind(message)
        .bind(notif_type)
        .bind(related_id)
        .bind(related_user_id)
        .bind(related_user_kind)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_notifications(
        &self,
        recipient_id: Uuid,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        sqlx::query_as::<_, Notification>(&format!(
            r#"
            SELECT {NOTIFICATION_COLUMNS}
            FROM notifications
            WHERE recipient_id = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(recipient_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn mark_notification_read(
        &self,
        notification_id: Uuid,
        recipient_id: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE notifications
            SET read = TRUE, updated_at = NOW()
            WHERE id = $1 AND recipient_id = $2
            "#,
        )
        .bind(notification_id)
        .bind(recipient_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn update_notification_action_status(
        &self,
        notification_id: Uuid,
        recipient_id: Uuid,
        action_status: String,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE notifications
            SET action_status = $3, read = TRUE, updated_at = NOW()
            WHERE id = $1 AND recipient_id = $2
            "#,
        )
        .bind(notification_id)
        .bind(recipient_id)
        .bind(action_status)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_notification(
        &self,
        notification_id: Uuid,
        recipient_id: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM notifications
            WHERE id = $1 AND recipient_id = $2
            "#,
        )
        .bind(notification_id)
        .bind(recipient_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
