pub mod otp_generator;
pub mod password;
pub mod sms;
pub mod token;
