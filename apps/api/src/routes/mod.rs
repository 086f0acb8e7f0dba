pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact;
use crate::content;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Contact submission pipeline
        .route("/api/v1/contact", post(contact::handlers::handle_contact))
        // Content resolution
        .route("/api/v1/resume", get(content::handlers::handle_get_resume))
        .route("/api/v1/cv", get(content::handlers::handle_cv_export))
        .with_state(state)
}
