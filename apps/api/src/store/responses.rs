use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::response::ResponseRow;

/// Input for answer-set creation. Carries the originating résumé's filename
/// and upload time by value; nothing in this database references the résumé
/// store.
#[derive(Debug)]
pub struct NewResponse {
    pub resume_filename: String,
    pub resume_upload_time: DateTime<Utc>,
    pub answers: Value,
}

pub async fn create_response(pool: &PgPool, new: NewResponse) -> Result<ResponseRow, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO responses (id, resume_filename, resume_upload_time, answers)
        VALUES ($1, $2, $3, $4)
        RETURNING id, resume_filename, resume_upload_time, submit_time, answers
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new.resume_filename)
    .bind(new.resume_upload_time)
    .bind(&new.answers)
    .fetch_one(pool)
    .await
}
