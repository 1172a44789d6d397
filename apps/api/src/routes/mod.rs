pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::config::MAX_UPLOAD_BYTES;
use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/upload-resume", post(handlers::handle_upload_resume))
        .route(
            "/api/get-questions/:resume_id",
            get(handlers::handle_get_questions),
        )
        .route("/api/resumes", get(handlers::handle_list_resumes))
        .route(
            "/api/submit-responses",
            post(handlers::handle_submit_responses),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
