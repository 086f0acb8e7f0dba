//! Captcha verification seam and the hCaptcha siteverify client.
//!
//! The server-to-server verify call carries the shared secret and the token
//! the invisible widget produced in the browser, and must bypass any
//! response caching. Exactly one verify call happens per submission that
//! reaches this stage.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

const SITEVERIFY_URL: &str = "https://hcaptcha.com/siteverify";
const VERIFY_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum CaptchaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Verification service returned status {0}")]
    Status(u16),
}

/// Pluggable verification seam. Production: `HcaptchaVerifier`.
/// Tests inject fakes to script accept/reject/error outcomes.
#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    /// Returns whether the service accepted the token. Transport failures
    /// surface as `Err`; the pipeline treats both rejection and error as a
    /// captcha failure.
    async fn verify(&self, token: &str) -> Result<bool, CaptchaError>;
}

#[derive(Debug, Deserialize)]
struct SiteverifyResponse {
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

pub struct HcaptchaVerifier {
    client: Client,
    secret: String,
}

impl HcaptchaVerifier {
    pub fn new(secret: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(VERIFY_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            secret,
        }
    }
}

#[async_trait]
impl CaptchaVerifier for HcaptchaVerifier {
    async fn verify(&self, token: &str) -> Result<bool, CaptchaError> {
        let response = self
            .client
            .post(SITEVERIFY_URL)
            .header(header::CACHE_CONTROL, "no-store")
            .form(&[("secret", self.secret.as_str()), ("response", token)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CaptchaError::Status(status.as_u16()));
        }

        let body: SiteverifyResponse = response.json().await?;
        if !body.success {
            warn!("Captcha rejected: {:?}", body.error_codes);
        } else {
            debug!("Captcha token accepted");
        }
        Ok(body.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_siteverify_response_parses_success() {
        let body: SiteverifyResponse =
            serde_json::from_str(r#"{"success": true, "hostname": "example.com"}"#).unwrap();
        assert!(body.success);
        assert!(body.error_codes.is_empty());
    }

    #[test]
    fn test_siteverify_response_parses_error_codes() {
        let body: SiteverifyResponse = serde_json::from_str(
            r#"{"success": false, "error-codes": ["invalid-input-response"]}"#,
        )
        .unwrap();
        assert!(!body.success);
        assert_eq!(body.error_codes, vec!["invalid-input-response"]);
    }
}
