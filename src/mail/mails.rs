use super::sendmail::send_email;
use crate::config::Config;

const OTP_TEMPLATE: &str = r#"
<html>
  <body style="font-family: sans-serif;">
    <h2>GetWork verification code</h2>
    <p>Hello {{name}},</p>
    <p>Your one-time verification code is:</p>
    <p style="font-size: 28px; letter-spacing: 4px;"><strong>{{otp_code}}</strong></p>
    <p>This code expires in 5 minutes. If you did not request it, you can ignore this email.</p>
  </body>
</html>
"#;

pub async fn send_otp_email(
    config: &Config,
    to_email: &str,
    name: &str,
    otp_code: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let subject = "Password Reset OTP";
    let placeholders = vec![
        ("{{name}}".to_string(), name.to_string()),
        ("{{otp_code}}".to_string(), otp_code.to_string()),
    ];

    send_email(config, to_email, subject, OTP_TEMPLATE, &placeholders).await
}
