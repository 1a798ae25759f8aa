use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::notificationmodel::Notification;

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateActionStatusDto {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct NotificationListResponseDto {
    pub success: bool,
    pub notifications: Vec<Notification>,
}
