use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted résumé: sanitized upload name, full extracted text, and the
/// generated questions. Immutable after creation; there is no delete
/// endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub filename: String,
    pub content: String,
    /// At most 4 questions, in generation order. Set once at creation.
    pub questions: Vec<String>,
    pub upload_date: DateTime<Utc>,
}
