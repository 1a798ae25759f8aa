use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical recipient-kind tag. Used both for the notification's recipient and for
/// the optional related user, so partner-addressed rows are tagged consistently.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "recipient_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RecipientKind {
    Worker,
    Organization,
    ReferralPartner,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "notification_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Application,
    Info,
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub recipient_kind: RecipientKind,
    pub message: String,
    #[serde(rename = "type")]
    pub notif_type: NotificationType,
    pub related_id: Option<Uuid>,
    pub related_user_id: Option<Uuid>,
    pub related_user_kind: Option<RecipientKind>,
    pub read: bool,
    #[serde(rename = "actionStatus")]
    pub action_status: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}
