/// LLM Client — the single point of entry for Gemini API calls.
///
/// No other module may call the generation endpoint directly; the question
/// generator goes through `GeminiClient::generate`.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";
/// Request timeout for the single outbound generation call. There is no
/// retry policy: a timeout means the caller falls back to static questions.
const REQUEST_TIMEOUT_SECS: u64 = 30;
const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("response contained no candidates")]
    NoCandidates,

    #[error("candidate contained no extractable text")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    #[serde(rename = "responseModalities")]
    response_modalities: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Extracts the text of the first candidate: first part's text when parts
    /// are present, otherwise the content-level text field.
    pub fn text(&self) -> Option<&str> {
        let content = self.candidates.first()?.content.as_ref()?;
        content
            .parts
            .iter()
            .find_map(|p| p.text.as_deref())
            .or(content.text.as_deref())
    }
}

/// Thin wrapper over the Gemini `generateContent` REST endpoint.
///
/// The key travels in the `x-goog-api-key` header, never in the URL:
/// `reqwest::Error` messages embed the request URL, and those messages end
/// up in warning logs when the generator falls back.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

// Manual Debug so the credential can never leak through log formatting.
impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"[redacted]")
            .finish()
    }
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, GEMINI_API_URL.to_string())
    }

    fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url,
        }
    }

    /// Issues a single generation call and returns the first candidate's text.
    /// Any failure (transport, non-2xx, blocked/empty response) is an error;
    /// the generator decides whether to substitute the fallback set.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
                response_modalities: vec!["TEXT"],
            },
        };

        let response = self
            .client
            .post(&self.base_url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json().await?;

        if body.candidates.is_empty() {
            return Err(LlmError::NoCandidates);
        }

        let text = body.text().ok_or(LlmError::EmptyContent)?;
        debug!(
            "Gemini response received ({} chars): {:.200}",
            text.len(),
            text
        );
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_prefers_parts() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "from parts"}],
                    "text": "from content"
                }
            }]
        }"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("from parts"));
    }

    #[test]
    fn response_text_falls_back_to_content_text() {
        let json = r#"{
            "candidates": [{
                "content": { "text": "plain text body" }
            }]
        }"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("plain text body"));
    }

    #[test]
    fn zero_candidates_yields_no_text() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(response.text().is_none());

        // A blocked response may omit the field entirely.
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_empty());
    }

    #[test]
    fn candidate_without_content_yields_no_text() {
        let json = r#"{"candidates": [{"content": null}]}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert!(response.text().is_none());
    }

    #[tokio::test]
    async fn failed_call_error_never_contains_api_key() {
        // Port 9 (discard) refuses the connection; the resulting transport
        // error message embeds the request URL, which must not carry the key.
        let client = GeminiClient::with_base_url(
            "sk-test-secret-key".to_string(),
            "http://127.0.0.1:9/v1beta/models/gemini-2.5-flash:generateContent".to_string(),
        );
        let err = client.generate("some resume text").await.unwrap_err();
        let rendered = format!("{err} / {err:?}");
        assert!(!rendered.contains("sk-test-secret-key"));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let client = GeminiClient::new("sk-very-secret".to_string());
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("sk-very-secret"));
        assert!(rendered.contains("redacted"));
    }
}
