//! Localized phrasing for structured validation codes.
//!
//! The pipeline never emits prose; it emits `(field, code)` pairs and the
//! response boundary looks the wording up here in the resolved locale.

use crate::contact::form::{ErrorCode, Field};
use crate::content::model::Locale;

pub fn field_message(field: Field, code: ErrorCode, locale: Locale) -> &'static str {
    let es = locale == Locale::Es;
    match (field, code) {
        (Field::Purpose, ErrorCode::Required) => {
            if es { "Selecciona un propósito." } else { "Please select a purpose." }
        }
        (Field::Summary, ErrorCode::Required) => {
            if es { "Selecciona un resumen." } else { "Please select a summary." }
        }
        (Field::Purpose, ErrorCode::InvalidOption) => {
            if es { "Selecciona un propósito válido." } else { "Please select a valid purpose." }
        }
        (Field::Summary, ErrorCode::InvalidOption) => {
            if es { "Selecciona una opción válida." } else { "Please select a valid option." }
        }
        (_, ErrorCode::InvalidOption) => {
            if es { "Opción inválida." } else { "Invalid option." }
        }
        (Field::Message, ErrorCode::TooShort) => {
            if es { "Cuéntame un poco más." } else { "Tell me a little more." }
        }
        (_, ErrorCode::TooShort) => {
            if es { "Demasiado corto." } else { "Too short." }
        }
        (_, ErrorCode::InvalidEmail) => {
            if es { "Email inválido." } else { "Invalid email." }
        }
        (_, ErrorCode::InvalidPhone) => {
            if es { "Teléfono inválido." } else { "Invalid phone." }
        }
        (_, ErrorCode::CaptchaFailed) => {
            if es { "Error al verificar el captcha." } else { "Captcha verification failed." }
        }
        (_, ErrorCode::Required) => {
            if es { "Campo obligatorio." } else { "Required field." }
        }
    }
}
