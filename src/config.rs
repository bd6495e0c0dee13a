use chrono_tz::Tz;
use std::env;

#[derive(Clone, Debug)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
}

#[derive(Clone, Debug)]
pub struct WhatsAppConfig {
    pub api_url: String,
    pub api_token: String,
    pub operator_number: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub admin_password: String,
    pub session_duration_hours: i64,
    pub cookie_secure: bool,
    pub business_timezone: Tz,
    pub cache_ttl_seconds: u64,
    pub operator_email: Option<String>,
    pub smtp: Option<SmtpConfig>,
    pub whatsapp: Option<WhatsAppConfig>,
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_port: u16,
}

/// Longest admin session a deployment may configure (30 days)
pub const MAX_SESSION_HOURS: i64 = 24 * 30;

const DEFAULT_SESSION_HOURS: i64 = 12;

fn non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Session lifetime in hours, defaulting to 12 and bounded to 1..=MAX_SESSION_HOURS
fn parse_session_hours(raw: Option<&str>) -> Result<i64, ConfigError> {
    let raw = match raw.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => raw,
        None => return Ok(DEFAULT_SESSION_HOURS),
    };

    match raw.parse::<i64>() {
        Ok(hours) if (1..=MAX_SESSION_HOURS).contains(&hours) => Ok(hours),
        _ => Err(ConfigError::InvalidSessionDuration(raw.to_string())),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://renodesk.db?mode=rwc".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let admin_password =
            non_empty("ADMIN_PASSWORD").ok_or(ConfigError::MissingAdminPassword)?;

        let session_duration_hours =
            parse_session_hours(env::var("SESSION_DURATION_HOURS").ok().as_deref())?;

        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let timezone_name =
            env::var("BUSINESS_TIMEZONE").unwrap_or_else(|_| "Europe/Brussels".to_string());
        let business_timezone = timezone_name
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(timezone_name.clone()))?;

        let cache_ttl_seconds = env::var("CACHE_TTL_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        let operator_email = non_empty("OPERATOR_EMAIL");

        let smtp = match non_empty("SMTP_HOST") {
            Some(host) => Some(SmtpConfig {
                host,
                port: env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "587".to_string())
                    .parse()
                    .map_err(|_| ConfigError::InvalidPort)?,
                username: non_empty("SMTP_USERNAME"),
                password: non_empty("SMTP_PASSWORD"),
                from: non_empty("SMTP_FROM").ok_or(ConfigError::MissingSmtpFrom)?,
            }),
            None => None,
        };

        let whatsapp = match (
            non_empty("WHATSAPP_API_URL"),
            non_empty("WHATSAPP_API_TOKEN"),
            non_empty("WHATSAPP_OPERATOR_NUMBER"),
        ) {
            (Some(api_url), Some(api_token), Some(operator_number)) => Some(WhatsAppConfig {
                api_url,
                api_token,
                operator_number,
            }),
            _ => None,
        };

        let otel_exporter_endpoint = env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok();

        let service_name = env::var("SERVICE_NAME").unwrap_or_else(|_| "renodesk".to_string());

        let metrics_port = env::var("METRICS_PORT")
            .unwrap_or_else(|_| "9000".to_string())
            .parse()
            .unwrap_or(9000);

        Ok(Config {
            database_url,
            server_host,
            server_port,
            admin_password,
            session_duration_hours,
            cookie_secure,
            business_timezone,
            cache_ttl_seconds,
            operator_email,
            smtp,
            whatsapp,
            otel_exporter_endpoint,
            service_name,
            metrics_port,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("ADMIN_PASSWORD environment variable not set")]
    MissingAdminPassword,

    #[error("SMTP_FROM must be set when SMTP_HOST is configured")]
    MissingSmtpFrom,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Unknown time zone: {0}")]
    InvalidTimezone(String),

    #[error("SESSION_DURATION_HOURS must be between 1 and {max}, got {0}", max = MAX_SESSION_HOURS)]
    InvalidSessionDuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_hours_default() {
        assert_eq!(parse_session_hours(None).unwrap(), 12);
        assert_eq!(parse_session_hours(Some("  ")).unwrap(), 12);
    }

    #[test]
    fn test_session_hours_within_bounds() {
        assert_eq!(parse_session_hours(Some("1")).unwrap(), 1);
        assert_eq!(parse_session_hours(Some("720")).unwrap(), MAX_SESSION_HOURS);
    }

    #[test]
    fn test_session_hours_out_of_range_is_rejected() {
        for raw in ["0", "-3", "721", "9223372036854775807", "twelve"] {
            assert!(
                matches!(
                    parse_session_hours(Some(raw)),
                    Err(ConfigError::InvalidSessionDuration(_))
                ),
                "{} should be rejected",
                raw
            );
        }
    }
}
