//! Question Generator — orchestrates the model call, parsing, and the
//! static fallback policy. The public entry point never fails: every
//! failure mode collapses to the fallback set at this boundary.

use thiserror::Error;
use tracing::{info, warn};

use crate::generation::parser::parse_questions;
use crate::generation::prompts::{QUESTION_PROMPT_TEMPLATE, RESUME_PROMPT_CHARS};
use crate::llm_client::{GeminiClient, LlmError};

/// At most this many questions are returned. No padding is performed: if the
/// model produced only 2 or 3 acceptable lines, that is what the caller gets.
const MAX_QUESTIONS: usize = 4;

/// Fewer parsed questions than this counts as a generation failure.
const MIN_PARSED_QUESTIONS: usize = 2;

/// Domain-generic behavioral questions served whenever remote generation is
/// unavailable or insufficient.
const FALLBACK_QUESTIONS: [&str; 4] = [
    "Can you describe the most technically challenging project you've worked on? What made it challenging and how did you approach solving those challenges?",
    "Tell me about a time when you had to learn a new technology or framework quickly for a project. How did you go about learning it?",
    "Describe a specific bug or technical issue in one of your projects that took significant time to resolve. What was your debugging process?",
    "Walk me through a project where you had to make important architectural or design decisions. What factors did you consider?",
];

/// Internal failure reasons. These never escape `generate_questions`; they
/// exist so the fallback decision is typed and testable rather than a
/// catch-all.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("model call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("only {0} questions parsed from model output")]
    TooFewQuestions(usize),
}

pub fn fallback_set() -> Vec<String> {
    FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect()
}

/// Generates 1..=4 behavioral interview questions for the given résumé text.
///
/// `llm` is `None` when no API key is configured; the fallback set is then
/// returned without any outbound call. All remote or parsing failures are
/// absorbed here and logged, never surfaced to the client.
pub async fn generate_questions(llm: Option<&GeminiClient>, resume_text: &str) -> Vec<String> {
    let Some(llm) = llm else {
        warn!("GEMINI_API_KEY is not configured; serving fallback questions");
        return fallback_set();
    };

    match try_generate(llm, resume_text).await {
        Ok(questions) => {
            info!(
                "Generated {} resume-specific questions",
                questions.len()
            );
            questions
        }
        Err(e) => {
            warn!("Question generation failed ({e}); serving fallback questions");
            fallback_set()
        }
    }
}

async fn try_generate(
    llm: &GeminiClient,
    resume_text: &str,
) -> Result<Vec<String>, GenerationError> {
    let prompt = build_prompt(resume_text);
    info!(
        "Requesting questions for resume ({} chars)",
        resume_text.chars().count()
    );

    let raw = llm.generate(&prompt).await?;
    let questions = accept_parsed(parse_questions(&raw))?;
    Ok(questions)
}

/// Applies the acceptance policy to parser output: fewer than 2 questions is
/// a failure, more than 4 are truncated.
fn accept_parsed(parsed: Vec<String>) -> Result<Vec<String>, GenerationError> {
    if parsed.len() < MIN_PARSED_QUESTIONS {
        return Err(GenerationError::TooFewQuestions(parsed.len()));
    }
    Ok(parsed.into_iter().take(MAX_QUESTIONS).collect())
}

/// Builds the generation prompt, truncating the résumé to its first 2000
/// characters (on a char boundary) to bound prompt size.
fn build_prompt(resume_text: &str) -> String {
    let truncated: String = resume_text.chars().take(RESUME_PROMPT_CHARS).collect();
    QUESTION_PROMPT_TEMPLATE.replace("{resume_text}", &truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_credential_returns_exact_fallback_set() {
        let questions = generate_questions(None, "any resume text").await;
        assert_eq!(questions, FALLBACK_QUESTIONS.map(String::from).to_vec());

        // Input text does not influence the fallback.
        let questions = generate_questions(None, "").await;
        assert_eq!(questions.len(), 4);
        assert!(questions[0].starts_with("Can you describe the most technically challenging"));
    }

    #[test]
    fn fewer_than_two_parsed_questions_is_a_failure() {
        let result = accept_parsed(vec![]);
        assert!(matches!(result, Err(GenerationError::TooFewQuestions(0))));

        let result = accept_parsed(vec!["Only one acceptable question was parsed".to_string()]);
        assert!(matches!(result, Err(GenerationError::TooFewQuestions(1))));
    }

    #[test]
    fn two_or_three_questions_are_returned_without_padding() {
        let parsed = vec![
            "Tell me about your first big project".to_string(),
            "Tell me about your second big project".to_string(),
        ];
        let accepted = accept_parsed(parsed.clone()).unwrap();
        assert_eq!(accepted, parsed);
    }

    #[test]
    fn more_than_four_questions_are_truncated_to_four() {
        let parsed: Vec<String> = (1..=6)
            .map(|i| format!("Question number {i} about a specific project"))
            .collect();
        let accepted = accept_parsed(parsed.clone()).unwrap();
        assert_eq!(accepted, parsed[..4].to_vec());
    }

    #[test]
    fn prompt_embeds_resume_and_truncates_to_2000_chars() {
        let long_resume = "r".repeat(5000);
        let prompt = build_prompt(&long_resume);
        assert!(prompt.contains(&"r".repeat(2000)));
        assert!(!prompt.contains(&"r".repeat(2001)));
        assert!(prompt.starts_with("Based on this resume"));
        assert!(prompt.ends_with("Generate 4 numbered questions (1., 2., 3., 4.):"));
    }

    #[test]
    fn prompt_truncation_respects_char_boundaries() {
        // Multi-byte chars: byte-indexed truncation would panic or split.
        let resume = "é".repeat(3000);
        let prompt = build_prompt(&resume);
        assert!(prompt.contains(&"é".repeat(2000)));
        assert!(!prompt.contains(&"é".repeat(2001)));
    }

    #[test]
    fn fallback_set_is_fixed_and_ordered() {
        let set = fallback_set();
        assert_eq!(set.len(), 4);
        assert!(set[1].starts_with("Tell me about a time when you had to learn"));
        assert!(set[2].starts_with("Describe a specific bug"));
        assert!(set[3].starts_with("Walk me through a project"));
    }
}
