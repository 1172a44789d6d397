use anyhow::{Context, Result};

/// Maximum accepted upload size (16 MiB), enforced at the router layer.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// The only file extension accepted for résumé uploads.
pub const ALLOWED_EXTENSION: &str = "pdf";

/// Application configuration loaded from environment variables.
/// Constructed once at startup and injected into handlers via `AppState`;
/// no other module reads the environment directly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres database holding résumé records.
    pub database_url: String,
    /// Separate Postgres database holding submitted answer sets.
    pub responses_database_url: String,
    /// Gemini API key. `None` when unset or blank — the generator then
    /// serves the static fallback questions without any outbound call.
    pub gemini_api_key: Option<String>,
    /// Directory for transient uploaded files (deleted after extraction).
    pub upload_dir: String,
    /// Session-signing secret. Carried for parity with deployment config;
    /// no in-scope endpoint uses sessions.
    #[allow(dead_code)]
    pub secret_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            responses_database_url: require_env("RESPONSES_DATABASE_URL")?,
            gemini_api_key,
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            secret_key: std::env::var("SECRET_KEY")
                .unwrap_or_else(|_| "dev-secret-key-change-in-production".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
