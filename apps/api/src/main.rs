mod config;
mod contact;
mod content;
mod errors;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::captcha::{CaptchaVerifier, HcaptchaVerifier};
use crate::contact::email::ResendMailer;
use crate::content::overlay;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Load and validate the bundled translation overlays
    let translations = overlay::load_default().context("loading translation overlays")?;
    info!("Translation overlays loaded (en, es)");

    // Captcha verifier: an absent secret disables verification (dev/local mode)
    let verifier: Option<Arc<dyn CaptchaVerifier>> = match &config.hcaptcha_secret {
        Some(secret) => {
            info!("hCaptcha verifier initialized");
            Some(Arc::new(HcaptchaVerifier::new(secret.clone())))
        }
        None => {
            warn!("HCAPTCHA_SECRET_KEY not set — captcha verification disabled");
            None
        }
    };

    // Transactional email client
    let mailer = Arc::new(ResendMailer::new(config.resend_api_key.clone()));
    info!(
        "Resend mailer initialized ({} recipient(s))",
        config.contact_to.len()
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        translations: Arc::new(translations),
        verifier,
        mailer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
