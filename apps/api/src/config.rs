use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the Resend transactional email service.
    pub resend_api_key: String,
    /// Sender address for contact notifications.
    pub resend_from: String,
    /// Notification recipients, parsed from a comma-separated list.
    pub contact_to: Vec<String>,
    /// hCaptcha shared secret. `None` disables verification entirely.
    pub hcaptcha_secret: Option<String>,
    /// Public site URL embedded in notification emails.
    pub site_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            resend_api_key: require_env("RESEND_API_KEY")?,
            resend_from: std::env::var("RESEND_FROM")
                .unwrap_or_else(|_| "portfolio@resend.dev".to_string()),
            contact_to: parse_recipients(
                &std::env::var("CONTACT_TO")
                    .unwrap_or_else(|_| "contact@manudequevedo.com".to_string()),
            ),
            hcaptcha_secret: std::env::var("HCAPTCHA_SECRET_KEY")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            site_url: std::env::var("SITE_URL")
                .unwrap_or_else(|_| "https://www.manudequevedo.com".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Splits a comma-separated recipient list, dropping empty segments.
fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recipients_single() {
        assert_eq!(parse_recipients("a@b.com"), vec!["a@b.com"]);
    }

    #[test]
    fn test_parse_recipients_multiple_with_spaces() {
        assert_eq!(
            parse_recipients("a@b.com, c@d.com ,e@f.com"),
            vec!["a@b.com", "c@d.com", "e@f.com"]
        );
    }

    #[test]
    fn test_parse_recipients_drops_empty_segments() {
        assert_eq!(parse_recipients("a@b.com,,"), vec!["a@b.com"]);
    }
}
