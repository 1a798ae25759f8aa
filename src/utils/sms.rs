use serde_json::json;

use crate::config::Config;

/// Sends the OTP code through the configured SMS gateway. The gateway is a plain
/// JSON-over-HTTP provider; without SMS_GATEWAY_URL set, sending fails so the caller
/// can fall back to its fail-closed path.
pub async fn send_otp_sms(
    config: &Config,
    to_phone: &str,
    otp_code: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if to_phone.is_empty() {
        return Err("SMS recipient cannot be empty".into());
    }

    let gateway_url = config
        .sms_gateway_url
        .as_deref()
        .ok_or("SMS_GATEWAY_URL environment variable not set")?;

    let client = reqwest::Client::new();
    let request_body = json!({
        "to": to_phone,
        "message": format!("Your GetWork verification code is {}. It expires in 5 minutes.", otp_code),
    });

    let response = client
        .post(gateway_url)
        .header("Authorization", format!("Bearer {}", config.sms_api_key))
        .header("Content-Type", "application/json")
        .json(&request_body)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let status = response.status();
    if status.is_success() {
        tracing::info!("✓ OTP SMS sent to {}", to_phone);
        Ok(())
    } else {
        let response_text = response
            .text()
            .await
            .unwrap_or_else(|_| "No response body".to_string());
        tracing::error!("✗ SMS gateway error for {}: {} {}", to_phone, status, response_text);
        Err(format!("SMS gateway returned {}: {}", status, response_text).into())
    }
}
