use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::jobmodel::{Job, JobApplication, JobWithOrg};

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateJobDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    pub description: Option<String>,
    #[serde(rename = "salaryRange")]
    pub salary_range: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateJobDto {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "salaryRange")]
    pub salary_range: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateApplicationStatusDto {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct JobResponseDto {
    pub success: bool,
    pub message: String,
    pub job: Job,
}

#[derive(Debug, Serialize)]
pub struct JobListResponseDto {
    pub success: bool,
    pub jobs: Vec<JobWithOrg>,
}

#[derive(Debug, Serialize)]
pub struct OrgJobListResponseDto {
    pub success: bool,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Serialize)]
pub struct JobDetailResponseDto {
    pub success: bool,
    pub job: JobWithOrg,
    pub applications: Vec<JobApplication>,
}
