//! Notification email composition and the Resend dispatch client.
//!
//! One message per accepted submission: configured sender and recipient
//! list, reply-to set to the submitter, subject and body in the resolved
//! locale, plain-text body plus a small HTML rendering.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::contact::form::ValidSubmission;
use crate::content::model::Locale;

const RESEND_API_URL: &str = "https://api.resend.com/emails";
const SEND_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Email API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// A fully composed message ready for dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub reply_to: String,
    pub text: String,
    pub html: String,
}

/// Outbound email seam. Production: `ResendMailer`. Tests record sends.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

#[derive(Debug, Deserialize)]
struct ResendError {
    message: String,
}

pub struct ResendMailer {
    client: Client,
    api_key: String,
}

impl ResendMailer {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(SEND_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ResendError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(MailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Notification email dispatched to {} recipient(s)", email.to.len());
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Composition
// ────────────────────────────────────────────────────────────────────────────

struct Labels {
    subject_prefix: &'static str,
    title: &'static str,
    from_form: &'static str,
    purpose: &'static str,
    summary: &'static str,
    name: &'static str,
    email: &'static str,
    org: &'static str,
    phone: &'static str,
    sent_from: &'static str,
}

fn labels(locale: Locale) -> Labels {
    match locale {
        Locale::En => Labels {
            subject_prefix: "New inquiry",
            title: "New Inquiry",
            from_form: "From your portfolio contact form",
            purpose: "Purpose",
            summary: "Summary",
            name: "Name",
            email: "Email",
            org: "Organization",
            phone: "Phone",
            sent_from: "Sent from",
        },
        Locale::Es => Labels {
            subject_prefix: "Nueva consulta",
            title: "Nueva consulta",
            from_form: "Desde el formulario de contacto de tu portafolio",
            purpose: "Motivo",
            summary: "Resumen",
            name: "Nombre",
            email: "Correo",
            org: "Organización",
            phone: "Teléfono",
            sent_from: "Enviado desde",
        },
    }
}

/// Composes the notification message for an accepted submission.
pub fn compose(submission: &ValidSubmission, locale: Locale, config: &Config) -> OutboundEmail {
    let l = labels(locale);
    let org = submission.org.as_deref().unwrap_or("-");
    let phone = submission.phone.as_deref().unwrap_or("-");

    let subject = format!(
        "{}: {} — {}",
        l.subject_prefix,
        submission.purpose.as_str(),
        submission.full_name
    );

    let text = [
        format!("{}: {}", l.purpose, submission.purpose.as_str()),
        format!("{}: {}", l.summary, submission.summary.as_str()),
        format!("{}: {}", l.name, submission.full_name),
        format!("{}: {}", l.email, submission.email),
        format!("{}: {org}", l.org),
        format!("{}: {phone}", l.phone),
        String::new(),
        submission.message.clone(),
    ]
    .join("\n");

    let html = format!(
        "<h2>{title}</h2>\
         <p>{from_form}</p>\
         <p><strong>{lp}:</strong> {purpose}<br/>\
         <strong>{ls}:</strong> {summary}<br/>\
         <strong>{ln}:</strong> {name}<br/>\
         <strong>{le}:</strong> {email}<br/>\
         <strong>{lo}:</strong> {org}<br/>\
         <strong>{lt}:</strong> {phone}</p>\
         <hr/>\
         <p>{message}</p>\
         <p><em>{sent_from} {site_url}</em></p>",
        title = l.title,
        from_form = l.from_form,
        lp = l.purpose,
        purpose = submission.purpose.as_str(),
        ls = l.summary,
        summary = submission.summary.as_str(),
        ln = l.name,
        name = html_escape(&submission.full_name),
        le = l.email,
        email = html_escape(&submission.email),
        lo = l.org,
        org = html_escape(org),
        lt = l.phone,
        phone = html_escape(phone),
        message = html_escape(&submission.message),
        sent_from = l.sent_from,
        site_url = html_escape(&config.site_url),
    );

    OutboundEmail {
        from: config.resend_from.clone(),
        to: config.contact_to.clone(),
        subject,
        reply_to: submission.email.clone(),
        text,
        html,
    }
}

fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
