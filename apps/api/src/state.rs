use std::sync::Arc;

use crate::config::Config;
use crate::contact::captcha::CaptchaVerifier;
use crate::contact::email::Mailer;
use crate::content::overlay::TranslationSet;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Per-locale translation overlays, loaded and validated at startup.
    pub translations: Arc<TranslationSet>,
    /// Captcha verification seam. `None` means verification is bypassed
    /// (no secret configured — dev/local mode).
    pub verifier: Option<Arc<dyn CaptchaVerifier>>,
    /// Outbound email seam. Production: Resend HTTP API.
    pub mailer: Arc<dyn Mailer>,
}
