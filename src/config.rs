#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_maxage: i64,
    pub port: u16,
    // Email delivery (OTP)
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub smtp_from: String,
    // SMS delivery (OTP)
    pub sms_gateway_url: Option<String>,
    pub sms_api_key: String,
}

impl Config {
    pub fn init() -> Config {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let jwt_secret = std::env::var("JWT_SECRET_KEY").expect("JWT_SECRET_KEY must be set");
        // minutes; 10080 = 7 days
        let jwt_maxage = std::env::var("JWT_MAXAGE")
            .unwrap_or_else(|_| "10080".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string());

        let smtp_host = std::env::var("SMTP_HOST")
            .unwrap_or_else(|_| "localhost".to_string());
        let smtp_port = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string());
        let smtp_username = std::env::var("SMTP_USERNAME")
            .unwrap_or_else(|_| "".to_string());
        let smtp_password = std::env::var("SMTP_PASSWORD")
            .unwrap_or_else(|_| "".to_string());
        let smtp_from = std::env::var("SMTP_FROM")
            .unwrap_or_else(|_| "GetWork Support <noreply@getwork.app>".to_string());

        let sms_gateway_url = std::env::var("SMS_GATEWAY_URL").ok();
        let sms_api_key = std::env::var("SMS_API_KEY")
            .unwrap_or_else(|_| "".to_string());

        Config {
            database_url,
            jwt_secret,
            jwt_maxage: jwt_maxage.parse::<i64>().unwrap(),
            port: port.parse::<u16>().unwrap(),
            smtp_host,
            smtp_port: smtp_port.parse::<u16>().unwrap(),
            smtp_username,
            smtp_password,
            smtp_from,
            sms_gateway_url,
            sms_api_key,
        }
    }
}
