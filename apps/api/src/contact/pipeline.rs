//! Server stage of the contact submission pipeline.
//!
//! Order of operations: honeypot check, structural validation, captcha
//! verification, email dispatch. The two outbound calls run sequentially.
//! Everything unexpected is caught at this boundary and normalized to
//! `ServerFailure`; no internal detail reaches the caller.

use anyhow::Result;
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::contact::captcha::CaptchaVerifier;
use crate::contact::email::{self, Mailer};
use crate::contact::form::{self, ContactForm, FieldError};
use crate::content::model::Locale;

/// Discriminated submission outcome. Exactly one variant per invocation.
#[derive(Debug)]
pub enum SubmissionResult {
    Success,
    ValidationFailure(Vec<FieldError>),
    CaptchaFailure,
    ServerFailure,
}

/// Runs the full server stage for one submission.
///
/// `verifier` is `None` when no captcha secret is configured; verification
/// is then skipped and no token is required.
pub async fn process_submission(
    form: &ContactForm,
    locale: Locale,
    verifier: Option<&dyn CaptchaVerifier>,
    mailer: &dyn Mailer,
    config: &Config,
) -> SubmissionResult {
    // Honeypot: report success without processing. Automated fillers must
    // not learn they were detected.
    if !form.website.trim().is_empty() {
        debug!("Honeypot field populated; dropping submission silently");
        return SubmissionResult::Success;
    }

    match run_stages(form, locale, verifier, mailer, config).await {
        Ok(result) => result,
        Err(e) => {
            error!("Contact pipeline failed: {e:?}");
            SubmissionResult::ServerFailure
        }
    }
}

async fn run_stages(
    form: &ContactForm,
    locale: Locale,
    verifier: Option<&dyn CaptchaVerifier>,
    mailer: &dyn Mailer,
    config: &Config,
) -> Result<SubmissionResult> {
    let submission = match form::validate(form, verifier.is_some()) {
        Ok(sub) => sub,
        Err(errors) => return Ok(SubmissionResult::ValidationFailure(errors)),
    };

    if let Some(verifier) = verifier {
        match verifier.verify(form.captcha.trim()).await {
            Ok(true) => {}
            Ok(false) => return Ok(SubmissionResult::CaptchaFailure),
            Err(e) => {
                // An erroring verification counts as a failed challenge;
                // the submitter retries with a fresh token.
                warn!("Captcha verification errored: {e}");
                return Ok(SubmissionResult::CaptchaFailure);
            }
        }
    }

    let message = email::compose(&submission, locale, config);
    mailer.send(&message).await?;

    Ok(SubmissionResult::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::captcha::CaptchaError;
    use crate::contact::email::{MailError, OutboundEmail};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct ScriptedVerifier {
        outcome: Result<bool, ()>,
        calls: AtomicUsize,
    }

    impl ScriptedVerifier {
        fn accepting() -> Self {
            Self { outcome: Ok(true), calls: AtomicUsize::new(0) }
        }

        fn rejecting() -> Self {
            Self { outcome: Ok(false), calls: AtomicUsize::new(0) }
        }

        fn erroring() -> Self {
            Self { outcome: Err(()), calls: AtomicUsize::new(0) }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CaptchaVerifier for ScriptedVerifier {
        async fn verify(&self, _token: &str) -> Result<bool, CaptchaError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcome {
                Ok(accepted) => Ok(accepted),
                Err(()) => Err(CaptchaError::Status(500)),
            }
        }
    }

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<OutboundEmail>>,
        fail: bool,
    }

    impl RecordingMailer {
        fn failing() -> Self {
            Self { sent: Mutex::new(Vec::new()), fail: true }
        }

        fn sent(&self) -> Vec<OutboundEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
            if self.fail {
                return Err(MailError::Api {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    fn test_config() -> Config {
        Config {
            resend_api_key: "re_test".to_string(),
            resend_from: "portfolio@resend.dev".to_string(),
            contact_to: vec!["owner@example.com".to_string()],
            hcaptcha_secret: Some("secret".to_string()),
            site_url: "https://example.com".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            purpose: "project".to_string(),
            summary: "website".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            org: String::new(),
            phone: String::new(),
            message: "I would like to discuss a new website project.".to_string(),
            website: String::new(),
            captcha: "token-123".to_string(),
            locale: "en".to_string(),
        }
    }

    #[tokio::test]
    async fn test_honeypot_is_silent_success_with_no_outbound_calls() {
        let mut form = valid_form();
        form.website = "spam".to_string();
        let verifier = ScriptedVerifier::accepting();
        let mailer = RecordingMailer::default();

        let result =
            process_submission(&form, Locale::En, Some(&verifier), &mailer, &test_config()).await;

        assert!(matches!(result, SubmissionResult::Success));
        assert_eq!(verifier.call_count(), 0);
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_payload_stops_before_verification() {
        let mut form = valid_form();
        form.full_name = "J".to_string();
        form.email = "bad".to_string();
        form.message = "short".to_string();
        let verifier = ScriptedVerifier::accepting();
        let mailer = RecordingMailer::default();

        let result =
            process_submission(&form, Locale::En, Some(&verifier), &mailer, &test_config()).await;

        match result {
            SubmissionResult::ValidationFailure(errors) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field.name()).collect();
                assert_eq!(fields, vec!["fullName", "email", "message"]);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert_eq!(verifier.call_count(), 0);
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_token_is_captcha_failure() {
        let verifier = ScriptedVerifier::rejecting();
        let mailer = RecordingMailer::default();

        let result = process_submission(
            &valid_form(),
            Locale::En,
            Some(&verifier),
            &mailer,
            &test_config(),
        )
        .await;

        assert!(matches!(result, SubmissionResult::CaptchaFailure));
        assert_eq!(verifier.call_count(), 1);
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_erroring_verification_is_captcha_failure() {
        let verifier = ScriptedVerifier::erroring();
        let mailer = RecordingMailer::default();

        let result = process_submission(
            &valid_form(),
            Locale::En,
            Some(&verifier),
            &mailer,
            &test_config(),
        )
        .await;

        assert!(matches!(result, SubmissionResult::CaptchaFailure));
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_accepted_submission_sends_exactly_one_email() {
        let verifier = ScriptedVerifier::accepting();
        let mailer = RecordingMailer::default();

        let result = process_submission(
            &valid_form(),
            Locale::En,
            Some(&verifier),
            &mailer,
            &test_config(),
        )
        .await;

        assert!(matches!(result, SubmissionResult::Success));
        assert_eq!(verifier.call_count(), 1);
        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].reply_to, "ada@example.com");
        assert!(sent[0].subject.contains("project"));
        assert!(sent[0].subject.contains("Ada Lovelace"));
    }

    #[tokio::test]
    async fn test_send_failure_is_server_failure() {
        let verifier = ScriptedVerifier::accepting();
        let mailer = RecordingMailer::failing();

        let result = process_submission(
            &valid_form(),
            Locale::En,
            Some(&verifier),
            &mailer,
            &test_config(),
        )
        .await;

        assert!(matches!(result, SubmissionResult::ServerFailure));
    }

    #[tokio::test]
    async fn test_bypass_mode_skips_verification_and_token_requirement() {
        let mut form = valid_form();
        form.captcha = String::new();
        let mailer = RecordingMailer::default();

        let result = process_submission(&form, Locale::En, None, &mailer, &test_config()).await;

        assert!(matches!(result, SubmissionResult::Success));
        assert_eq!(mailer.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_spanish_locale_reaches_subject() {
        let verifier = ScriptedVerifier::accepting();
        let mailer = RecordingMailer::default();

        let result = process_submission(
            &valid_form(),
            Locale::Es,
            Some(&verifier),
            &mailer,
            &test_config(),
        )
        .await;

        assert!(matches!(result, SubmissionResult::Success));
        assert!(mailer.sent()[0].subject.starts_with("Nueva consulta"));
    }
}
