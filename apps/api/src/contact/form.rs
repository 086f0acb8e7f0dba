//! Contact form payload and structural validation.
//!
//! Validation produces structured error codes, one per offending field
//! (first violation wins). Human-readable phrasing is a presentation
//! concern resolved in `contact::messages` by code and locale; nothing
//! downstream inspects message text.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Wire payload
// ────────────────────────────────────────────────────────────────────────────

/// Raw form-encoded submission as the browser sends it. Every field is
/// optional at the wire level; validation decides what is missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub purpose: String,
    pub summary: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub org: String,
    pub phone: String,
    pub message: String,
    /// Honeypot. Legitimate users never populate it.
    pub website: String,
    #[serde(rename = "h-captcha-response")]
    pub captcha: String,
    pub locale: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Project,
    Nonprofit,
    Collab,
    Other,
}

impl Purpose {
    pub fn parse(s: &str) -> Option<Purpose> {
        match s {
            "project" => Some(Purpose::Project),
            "nonprofit" => Some(Purpose::Nonprofit),
            "collab" => Some(Purpose::Collab),
            "other" => Some(Purpose::Other),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Purpose::Project => "project",
            Purpose::Nonprofit => "nonprofit",
            Purpose::Collab => "collab",
            Purpose::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryTopic {
    Branding,
    Website,
    Audit,
    Advice,
}

impl SummaryTopic {
    pub fn parse(s: &str) -> Option<SummaryTopic> {
        match s {
            "branding" => Some(SummaryTopic::Branding),
            "website" => Some(SummaryTopic::Website),
            "audit" => Some(SummaryTopic::Audit),
            "advice" => Some(SummaryTopic::Advice),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SummaryTopic::Branding => "branding",
            SummaryTopic::Website => "website",
            SummaryTopic::Audit => "audit",
            SummaryTopic::Advice => "advice",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 10;
pub const MIN_PHONE_CHARS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Purpose,
    Summary,
    FullName,
    Email,
    Phone,
    Message,
    Captcha,
}

impl Field {
    /// Wire name used in the `fieldErrors` response map.
    pub fn name(self) -> &'static str {
        match self {
            Field::Purpose => "purpose",
            Field::Summary => "summary",
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
            Field::Captcha => "captcha",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Required,
    InvalidOption,
    TooShort,
    InvalidEmail,
    InvalidPhone,
    CaptchaFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub code: ErrorCode,
}

/// A submission that passed structural validation. Optional fields are
/// normalized: empty strings become `None`.
#[derive(Debug, Clone)]
pub struct ValidSubmission {
    pub purpose: Purpose,
    pub summary: SummaryTopic,
    pub full_name: String,
    pub email: String,
    pub org: Option<String>,
    pub phone: Option<String>,
    pub message: String,
}

/// Validates the raw form. A payload is either fully valid or rejected
/// with one error per offending field; there is no partial acceptance.
///
/// `captcha_required` is false when no verification secret is configured
/// (the challenge widget never ran, so no token exists).
pub fn validate(form: &ContactForm, captcha_required: bool) -> Result<ValidSubmission, Vec<FieldError>> {
    let mut errors: Vec<FieldError> = Vec::new();
    let mut push = |field: Field, code: ErrorCode| errors.push(FieldError { field, code });

    let purpose = match form.purpose.trim() {
        "" => {
            push(Field::Purpose, ErrorCode::Required);
            None
        }
        raw => match Purpose::parse(raw) {
            Some(p) => Some(p),
            None => {
                push(Field::Purpose, ErrorCode::InvalidOption);
                None
            }
        },
    };

    let summary = match form.summary.trim() {
        "" => {
            push(Field::Summary, ErrorCode::Required);
            None
        }
        raw => match SummaryTopic::parse(raw) {
            Some(s) => Some(s),
            None => {
                push(Field::Summary, ErrorCode::InvalidOption);
                None
            }
        },
    };

    let full_name = form.full_name.trim();
    if full_name.is_empty() {
        push(Field::FullName, ErrorCode::Required);
    } else if full_name.chars().count() < MIN_NAME_CHARS {
        push(Field::FullName, ErrorCode::TooShort);
    }

    let email = form.email.trim();
    if !is_email_shaped(email) {
        push(Field::Email, ErrorCode::InvalidEmail);
    }

    let phone = form.phone.trim();
    if !phone.is_empty() && !is_phone_shaped(phone) {
        push(Field::Phone, ErrorCode::InvalidPhone);
    }

    let message = form.message.trim();
    if message.is_empty() {
        push(Field::Message, ErrorCode::Required);
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        push(Field::Message, ErrorCode::TooShort);
    }

    if captcha_required && form.captcha.trim().is_empty() {
        push(Field::Captcha, ErrorCode::Required);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let org = form.org.trim();
    Ok(ValidSubmission {
        purpose: purpose.expect("validated"),
        summary: summary.expect("validated"),
        full_name: full_name.to_string(),
        email: email.to_string(),
        org: (!org.is_empty()).then(|| org.to_string()),
        phone: (!phone.is_empty()).then(|| phone.to_string()),
        message: message.to_string(),
    })
}

/// Simple `local@domain.tld` shape check. Deliverability is not our
/// problem; the notification email carries this as reply-to only.
fn is_email_shaped(email: &str) -> bool {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    let mut labels = domain.rsplit('.');
    let tld = labels.next().unwrap_or("");
    let rest_nonempty = labels.clone().count() > 0 && labels.all(|l| !l.is_empty());
    !tld.is_empty() && rest_nonempty && !domain.chars().any(char::is_whitespace)
}

/// Loose phone pattern: digits plus `+()-. ` separators, at least six chars.
fn is_phone_shaped(phone: &str) -> bool {
    phone.chars().count() >= MIN_PHONE_CHARS
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '(' | ')' | '-' | '.' | ' '))
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn codes_for(errors: &[FieldError], field: Field) -> Vec<ErrorCode> {
        errors.iter().filter(|e| e.field == field).map(|e| e.code).collect()
    }

    #[test]
    fn test_valid_form_passes() {
        let sub = validate(&valid_form(), true).unwrap();
        assert_eq!(sub.purpose, Purpose::Project);
        assert_eq!(sub.summary, SummaryTopic::Website);
        assert_eq!(sub.email, "ada@example.com");
        assert_eq!(sub.org, None);
        assert_eq!(sub.phone, None);
    }

    #[test]
    fn test_optional_fields_normalized() {
        let mut form = valid_form();
        form.org = "  Initech  ".to_string();
        form.phone = "+52 (555) 123-4567".to_string();
        let sub = validate(&form, true).unwrap();
        assert_eq!(sub.org.as_deref(), Some("Initech"));
        assert_eq!(sub.phone.as_deref(), Some("+52 (555) 123-4567"));
    }

    #[test]
    fn test_missing_selects_are_required() {
        let mut form = valid_form();
        form.purpose = String::new();
        form.summary = "  ".to_string();
        let errors = validate(&form, true).unwrap_err();
        assert_eq!(codes_for(&errors, Field::Purpose), vec![ErrorCode::Required]);
        assert_eq!(codes_for(&errors, Field::Summary), vec![ErrorCode::Required]);
    }

    #[test]
    fn test_unknown_select_value_is_invalid_option() {
        let mut form = valid_form();
        form.purpose = "consulting".to_string();
        let errors = validate(&form, true).unwrap_err();
        assert_eq!(codes_for(&errors, Field::Purpose), vec![ErrorCode::InvalidOption]);
    }

    #[test]
    fn test_two_char_name_is_accepted() {
        let mut form = valid_form();
        form.full_name = "Jo".to_string();
        assert!(validate(&form, true).is_ok());
    }

    #[test]
    fn test_one_char_name_is_too_short() {
        let mut form = valid_form();
        form.full_name = "J".to_string();
        let errors = validate(&form, true).unwrap_err();
        assert_eq!(codes_for(&errors, Field::FullName), vec![ErrorCode::TooShort]);
    }

    #[test]
    fn test_email_without_at_is_invalid() {
        let mut form = valid_form();
        form.email = "bad".to_string();
        let errors = validate(&form, true).unwrap_err();
        assert_eq!(codes_for(&errors, Field::Email), vec![ErrorCode::InvalidEmail]);
    }

    #[test]
    fn test_email_without_tld_is_invalid() {
        let mut form = valid_form();
        form.email = "ada@example".to_string();
        assert!(validate(&form, true).is_err());
    }

    #[test]
    fn test_email_with_two_ats_is_invalid() {
        let mut form = valid_form();
        form.email = "a@b@c.com".to_string();
        assert!(validate(&form, true).is_err());
    }

    #[test]
    fn test_short_message_is_too_short() {
        let mut form = valid_form();
        form.message = "short".to_string();
        let errors = validate(&form, true).unwrap_err();
        assert_eq!(codes_for(&errors, Field::Message), vec![ErrorCode::TooShort]);
    }

    #[test]
    fn test_phone_with_letters_is_invalid() {
        let mut form = valid_form();
        form.phone = "call me".to_string();
        let errors = validate(&form, true).unwrap_err();
        assert_eq!(codes_for(&errors, Field::Phone), vec![ErrorCode::InvalidPhone]);
    }

    #[test]
    fn test_phone_too_few_chars_is_invalid() {
        let mut form = valid_form();
        form.phone = "12345".to_string();
        assert!(validate(&form, true).is_err());
    }

    #[test]
    fn test_captcha_required_when_configured() {
        let mut form = valid_form();
        form.captcha = String::new();
        let errors = validate(&form, true).unwrap_err();
        assert_eq!(codes_for(&errors, Field::Captcha), vec![ErrorCode::Required]);
    }

    #[test]
    fn test_captcha_not_required_when_bypassed() {
        let mut form = valid_form();
        form.captcha = String::new();
        assert!(validate(&form, false).is_ok());
    }

    #[test]
    fn test_one_error_per_field_conforming_fields_untouched() {
        let mut form = valid_form();
        form.full_name = "J".to_string();
        form.email = "bad".to_string();
        form.message = "short".to_string();
        let errors = validate(&form, true).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(codes_for(&errors, Field::Purpose).is_empty());
        assert!(codes_for(&errors, Field::Summary).is_empty());
        assert!(codes_for(&errors, Field::Phone).is_empty());
    }
}
