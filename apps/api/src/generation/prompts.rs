// Prompt constants for the question generation module.

/// Question generation prompt template. Replace `{resume_text}` with the
/// résumé text (truncated to `RESUME_PROMPT_CHARS` characters) before sending.
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"Based on this resume, generate exactly 4 behavioral interview questions. Each question must reference a specific project or technology from the resume.

Resume:
{resume_text}

Generate 4 numbered questions (1., 2., 3., 4.):"#;

/// Résumé text is truncated to this many characters to bound prompt size.
pub const RESUME_PROMPT_CHARS: usize = 2000;
