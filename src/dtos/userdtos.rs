use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{
    profilemodels::{Organization, Worker},
    usermodel::SubjectRole,
};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    pub message: String,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct RegisterUserDto {
    #[validate(email(message = "Email is invalid"))]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,

    #[validate(
        length(min = 1, message = "Password is required"),
        length(min = 6, message = "Password must be at least 6 characters")
    )]
    pub password: String,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct LoginUserDto {
    /// Phone number or email address; the presence of '@' decides which.
    #[validate(length(min = 1, message = "Phone/Email is required"))]
    pub identifier: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateProfileDto {
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    pub age: Option<i32>,
    /// Accepted as a JSON array of strings or a single comma-separated string.
    pub skills: Option<serde_json::Value>,
    pub experience: Option<String>,
    pub location: Option<String>,
    #[validate(email(message = "Email is invalid"))]
    pub email: Option<String>,
    pub expected_salary: Option<String>,
    pub availability: Option<String>,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub skills: Option<serde_json::Value>,
    pub experience: Option<String>,
    pub location: Option<String>,
    #[validate(email(message = "Email is invalid"))]
    pub email: Option<String>,
    pub expected_salary: Option<String>,
    pub availability: Option<String>,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct RegisterPartnerDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,

    #[validate(
        length(min = 1, message = "Password is required"),
        length(min = 6, message = "Password must be at least 6 characters")
    )]
    pub password: String,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct SendOtpDto {
    #[validate(length(min = 1, message = "Phone/Email is required"))]
    pub identifier: String,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct VerifyOtpDto {
    #[validate(length(min = 1, message = "Phone/Email is required"))]
    pub identifier: String,

    #[validate(length(min = 1, message = "OTP is required"))]
    pub otp: String,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct ResetPasswordDto {
    #[validate(
        length(min = 1, message = "New password is required"),
        length(min = 6, message = "Password must be at least 6 characters")
    )]
    pub new_password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthUserDto {
    pub id: String,
    pub phone: String,
    pub role: String,
    #[serde(rename = "isProfileComplete", skip_serializing_if = "Option::is_none")]
    pub is_profile_complete: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponseDto {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: AuthUserDto,
}

/// Profile payload for GET /auth/profile; the variant follows the subject's role.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProfileData {
    Worker(Worker),
    Organization(Organization),
}

#[derive(Debug, Serialize)]
pub struct ProfileResponseDto {
    pub success: bool,
    pub role: String,
    pub profile: Option<ProfileData>,
}

impl ProfileResponseDto {
    pub fn none() -> Self {
        ProfileResponseDto {
            success: true,
            role: SubjectRole::None.to_str().to_string(),
            profile: None,
        }
    }
}

/// The original accepted skills either as an array or as a comma-separated string.
pub fn parse_skills(skills: Option<&serde_json::Value>) -> Vec<String> {
    match skills {
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(serde_json::Value::String(joined)) => joined
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validator::Validate;

    #[test]
    fn skills_from_array() {
        let value = json!(["cooking", " cleaning "]);
        assert_eq!(parse_skills(Some(&value)), vec!["cooking", "cleaning"]);
    }

    #[test]
    fn skills_from_comma_string() {
        let value = json!("driving, welding,,plumbing");
        assert_eq!(
            parse_skills(Some(&value)),
            vec!["driving", "welding", "plumbing"]
        );
    }

    #[test]
    fn skills_from_nothing() {
        assert!(parse_skills(None).is_empty());
        assert!(parse_skills(Some(&json!(42))).is_empty());
    }

    #[test]
    fn register_requires_phone_and_password() {
        let dto = RegisterUserDto {
            email: None,
            phone: "".to_string(),
            password: "".to_string(),
        };
        assert!(dto.validate().is_err());

        let dto = RegisterUserDto {
            email: None,
            phone: "9999999999".to_string(),
            password: "pw1234".to_string(),
        };
        assert!(dto.validate().is_ok());
    }
}
