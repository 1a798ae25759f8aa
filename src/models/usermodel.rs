use chrono::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    None,
    Worker,
    Organization,
}

impl UserRole {
    pub fn to_str(&self) -> &str {
        match self {
            UserRole::None => "none",
            UserRole::Worker => "worker",
            UserRole::Organization => "organization",
        }
    }
}

/// Role carried by a bearer token. Unlike `UserRole` this includes referral partners,
/// which have their own accounts outside the users table.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SubjectRole {
    None,
    Worker,
    Organization,
    ReferralPartner,
}

impl SubjectRole {
    pub fn to_str(&self) -> &str {
        match self {
            SubjectRole::None => "none",
            SubjectRole::Worker => "worker",
            SubjectRole::Organization => "organization",
            SubjectRole::ReferralPartner => "referral_partner",
        }
    }

    pub fn from_str(value: &str) -> Option<SubjectRole> {
        match value {
            "none" => Some(SubjectRole::None),
            "worker" => Some(SubjectRole::Worker),
            "organization" => Some(SubjectRole::Organization),
            "referral_partner" => Some(SubjectRole::ReferralPartner),
            _ => None,
        }
    }
}

impl From<UserRole> for SubjectRole {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::None => SubjectRole::None,
            UserRole::Worker => SubjectRole::Worker,
            UserRole::Organization => SubjectRole::Organization,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct User {
    pub id: uuid::Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: UserRole,
    pub profile_id: Option<uuid::Uuid>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_role_string_round_trip() {
        for role in [
            SubjectRole::None,
            SubjectRole::Worker,
            SubjectRole::Organization,
            SubjectRole::ReferralPartner,
        ] {
            assert_eq!(SubjectRole::from_str(role.to_str()), Some(role));
        }
        assert_eq!(SubjectRole::from_str("admin"), None);
    }
}
