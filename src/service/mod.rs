pub mod application_service;
pub mod error;
pub mod notification_service;
pub mod otp_service;
pub mod referral_service;
