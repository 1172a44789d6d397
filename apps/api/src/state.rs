use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::GeminiClient;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Résumé records (own database).
    pub resumes_db: PgPool,
    /// Submitted answer sets (own database, no link to `resumes_db`).
    pub responses_db: PgPool,
    /// `None` when GEMINI_API_KEY is unset; the generator then serves the
    /// static fallback questions.
    pub llm: Option<GeminiClient>,
    pub config: Config,
}
