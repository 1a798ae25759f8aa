use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::referralmodel::Referral;

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReferralDto {
    #[serde(rename = "jobId")]
    pub job_id: Uuid,

    #[validate(length(min = 1, message = "Worker name is required"))]
    #[serde(rename = "workerName")]
    pub worker_name: String,

    #[validate(length(min = 1, message = "Worker phone is required"))]
    #[serde(rename = "workerPhone")]
    pub worker_phone: String,

    /// Starter password for the worker account created on the referred person's behalf.
    #[validate(
        length(min = 1, message = "Password is required"),
        length(min = 5, message = "Password must be at least 5 characters")
    )]
    pub password: String,

    #[serde(rename = "workerDetails")]
    pub worker_details: Option<serde_json::Value>,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateReferralDto {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ReferralResponseDto {
    pub success: bool,
    pub message: String,
    pub referral: Referral,
}

#[derive(Debug, Serialize)]
pub struct ReferralListResponseDto {
    pub success: bool,
    pub referrals: Vec<Referral>,
}

#[derive(Debug, Serialize)]
pub struct ReferralStatsDto {
    #[serde(rename = "totalReferrals")]
    pub total_referrals: i64,
    #[serde(rename = "successfulReferrals")]
    pub successful_referrals: i64,
    pub badges: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ReferralStatsResponseDto {
    pub success: bool,
    pub stats: ReferralStatsDto,
}
