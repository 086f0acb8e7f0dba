use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::content::data::static_content;
use crate::content::export::{cv_filename, render_cv_text};
use crate::content::merge::resolve_content;
use crate::content::model::{Locale, MergedContent};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

/// GET /api/v1/resume?locale=en|es
/// Returns the merged, locale-correct content model.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Query(params): Query<LocaleQuery>,
) -> Result<Json<MergedContent>, AppError> {
    let locale = match &params.locale {
        Some(tag) => Locale::parse(tag)
            .ok_or_else(|| AppError::Validation(format!("Unsupported locale '{tag}'")))?,
        None => Locale::En,
    };

    let statics = static_content();
    let overlay = state.translations.for_locale(locale);
    Ok(Json(resolve_content(&statics, overlay, locale)))
}

/// GET /api/v1/cv
/// Plain-text resume export. Always rendered in English.
pub async fn handle_cv_export(State(state): State<AppState>) -> Response {
    let statics = static_content();
    let merged = resolve_content(&statics, &state.translations.en, Locale::En);
    let body = render_cv_text(&merged);
    let filename = cv_filename(&merged.name);

    (
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
            (header::CACHE_CONTROL, "no-store".to_string()),
        ],
        body,
    )
        .into_response()
}
