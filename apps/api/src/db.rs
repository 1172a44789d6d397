use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Ensures the résumé table exists in the résumé database. Schema is created
/// at startup; there is no migration tooling in scope.
pub async fn init_resumes_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS resumes (
            id UUID PRIMARY KEY,
            filename TEXT NOT NULL,
            content TEXT NOT NULL,
            questions TEXT[] NOT NULL,
            upload_date TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Resume schema ready");
    Ok(())
}

/// Ensures the response table exists in the response database. The
/// resume_filename/resume_upload_time columns are plain values, not foreign
/// keys; the two databases are fully independent.
pub async fn init_responses_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS responses (
            id UUID PRIMARY KEY,
            resume_filename TEXT NOT NULL,
            resume_upload_time TIMESTAMPTZ NOT NULL,
            submit_time TIMESTAMPTZ NOT NULL DEFAULT now(),
            answers JSONB NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Response schema ready");
    Ok(())
}
