use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::jobmodel::ApplicationStatus;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "referral_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReferralStatus {
    Pending,
    Hired,
    Rejected,
}

impl ReferralStatus {
    pub fn to_str(&self) -> &str {
        match self {
            ReferralStatus::Pending => "pending",
            ReferralStatus::Hired => "hired",
            ReferralStatus::Rejected => "rejected",
        }
    }

    pub fn from_str(value: &str) -> Option<ReferralStatus> {
        match value {
            "pending" => Some(ReferralStatus::Pending),
            "hired" => Some(ReferralStatus::Hired),
            "rejected" => Some(ReferralStatus::Rejected),
            _ => None,
        }
    }

    /// Referral status tracking a job application status change:
    /// accepted maps to hired, rejected to rejected, anything else back to pending.
    pub fn mirror_of(status: ApplicationStatus) -> ReferralStatus {
        match status {
            ApplicationStatus::Accepted => ReferralStatus::Hired,
            ApplicationStatus::Rejected => ReferralStatus::Rejected,
            ApplicationStatus::Pending => ReferralStatus::Pending,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "referrer_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReferrerKind {
    Partner,
    Worker,
}

/// Outcome of the best-effort job-application → referral status mirror, recorded so
/// inconsistency is observable instead of silent.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "mirror_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MirrorStatus {
    None,
    Mirrored,
    MirrorFailed,
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Referral {
    pub id: Uuid,
    pub referrer_id: Uuid,
    pub referrer_kind: ReferrerKind,
    pub job_id: Uuid,
    pub worker_id: Uuid,
    pub worker_name: String,
    pub worker_phone: String,
    pub worker_details: Option<serde_json::Value>,
    pub status: ReferralStatus,
    pub mirror_status: MirrorStatus,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_mirrors_to_hired() {
        assert_eq!(
            ReferralStatus::mirror_of(ApplicationStatus::Accepted),
            ReferralStatus::Hired
        );
    }

    #[test]
    fn rejected_mirrors_to_rejected() {
        assert_eq!(
            ReferralStatus::mirror_of(ApplicationStatus::Rejected),
            ReferralStatus::Rejected
        );
    }

    #[test]
    fn anything_else_mirrors_to_pending() {
        assert_eq!(
            ReferralStatus::mirror_of(ApplicationStatus::Pending),
            ReferralStatus::Pending
        );
    }
}
