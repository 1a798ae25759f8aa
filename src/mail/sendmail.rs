use lettre::{
    message::header::ContentType,
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::config::Config;

pub async fn send_email(
    config: &Config,
    to_email: &str,
    subject: &str,
    html_template: &str,
    placeholders: &[(String, String)],
) -> Result<(), Box<dyn std::error::Error>> {
    if to_email.is_empty() {
        return Err("Email recipient cannot be empty".into());
    }
    if !to_email.contains('@') {
        return Err(format!("Invalid email address: {}", to_email).into());
    }

    let mut html_body = html_template.to_string();
    for (key, value) in placeholders {
        html_body = html_body.replace(key, value);
    }

    let email = Message::builder()
        .from(config.smtp_from.parse()?)
        .to(to_email.parse()?)
        .subject(subject)
        .header(ContentType::TEXT_HTML)
        .body(html_body)?;

    let creds = Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

    let mailer: AsyncSmtpTransport<Tokio1Executor> =
        AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(creds)
            .build();

    match mailer.send(email).await {
        Ok(_) => {
            tracing::info!("✓ Email sent successfully to {}", to_email);
            Ok(())
        }
        Err(e) => {
            tracing::error!("✗ Email failed for {}: {}", to_email, e);
            Err(e.into())
        }
    }
}
