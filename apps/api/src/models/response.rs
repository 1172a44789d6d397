use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted answer set. `resume_filename` and `resume_upload_time` are a
/// denormalized copy of the originating résumé's identity at submission time,
/// not a foreign key: responses live in their own database and are unaffected
/// by the résumé collection.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResponseRow {
    pub id: Uuid,
    pub resume_filename: String,
    pub resume_upload_time: DateTime<Utc>,
    pub submit_time: DateTime<Utc>,
    /// Ordered array of `{question, answer}` pairs, set once.
    pub answers: Value,
}

/// A single question/answer pair as submitted by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerPair {
    pub question: String,
    pub answer: String,
}
