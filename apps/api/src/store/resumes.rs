use sqlx::PgPool;
use uuid::Uuid;

use crate::models::resume::ResumeRow;

/// Input for résumé creation. The id and upload date are assigned by the
/// store; a row is only created after extraction and generation have both
/// completed.
#[derive(Debug)]
pub struct NewResume {
    pub filename: String,
    pub content: String,
    pub questions: Vec<String>,
}

pub async fn create_resume(pool: &PgPool, new: NewResume) -> Result<ResumeRow, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO resumes (id, filename, content, questions)
        VALUES ($1, $2, $3, $4)
        RETURNING id, filename, content, questions, upload_date
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new.filename)
    .bind(&new.content)
    .bind(&new.questions)
    .fetch_one(pool)
    .await
}

pub async fn get_resume(pool: &PgPool, id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, filename, content, questions, upload_date FROM resumes WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// All résumés, newest upload first.
pub async fn list_resumes(pool: &PgPool) -> Result<Vec<ResumeRow>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, filename, content, questions, upload_date FROM resumes \
         ORDER BY upload_date DESC",
    )
    .fetch_all(pool)
    .await
}
