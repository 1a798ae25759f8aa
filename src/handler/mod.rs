pub mod auth;
pub mod jobs;
pub mod notifications;
pub mod otp;
pub mod referrals;
