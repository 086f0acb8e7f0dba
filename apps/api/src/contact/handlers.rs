use axum::{
    extract::State,
    http::{header, HeaderMap},
    Form, Json,
};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::contact::form::{ContactForm, ErrorCode, Field, FieldError};
use crate::contact::messages::field_message;
use crate::contact::pipeline::{process_submission, SubmissionResult};
use crate::content::model::Locale;
use crate::state::AppState;

/// Wire contract returned to the form. Always HTTP 200; the caller
/// branches on `ok`/`error`, not on status codes.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    #[serde(rename = "fieldErrors", skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<BTreeMap<&'static str, &'static str>>,
}

/// POST /api/v1/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ContactForm>,
) -> Json<ContactResponse> {
    let locale = resolve_locale(&form, &headers);

    let result = process_submission(
        &form,
        locale,
        state.verifier.as_deref(),
        state.mailer.as_ref(),
        &state.config,
    )
    .await;

    Json(to_response(result, locale))
}

/// Notification language: explicit payload locale, else the request's
/// `Accept-Language`, else English.
fn resolve_locale(form: &ContactForm, headers: &HeaderMap) -> Locale {
    if let Some(locale) = Locale::parse(&form.locale) {
        return locale;
    }
    headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .and_then(Locale::from_accept_language)
        .unwrap_or(Locale::En)
}

fn to_response(result: SubmissionResult, locale: Locale) -> ContactResponse {
    match result {
        SubmissionResult::Success => ContactResponse {
            ok: true,
            error: None,
            field_errors: None,
        },
        SubmissionResult::ValidationFailure(errors) => ContactResponse {
            ok: false,
            error: Some("validation"),
            field_errors: Some(localize(&errors, locale)),
        },
        SubmissionResult::CaptchaFailure => {
            let errors = [FieldError {
                field: Field::Captcha,
                code: ErrorCode::CaptchaFailed,
            }];
            ContactResponse {
                ok: false,
                error: Some("captcha"),
                field_errors: Some(localize(&errors, locale)),
            }
        }
        SubmissionResult::ServerFailure => ContactResponse {
            ok: false,
            error: Some("server"),
            field_errors: None,
        },
    }
}

/// One localized message per field; the first violation wins.
fn localize(errors: &[FieldError], locale: Locale) -> BTreeMap<&'static str, &'static str> {
    let mut map = BTreeMap::new();
    for e in errors {
        map.entry(e.field.name())
            .or_insert_with(|| field_message(e.field, e.code, locale));
    }
    map
}
