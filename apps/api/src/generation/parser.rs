//! Question Parser — cleans numbered question lines out of raw model output.
//!
//! This is a best-effort heuristic, kept deliberately lossy: lines numbered
//! 20 or higher keep their numbering, and a cleaned line of 20 characters or
//! fewer is discarded even if it is a legitimate question.

/// Cleaned lines of this many characters or fewer are discarded as
/// fragments; only strictly longer lines survive.
const MIN_QUESTION_CHARS: usize = 20;

/// Highest question number whose prefix is stripped (exclusive bound).
const MAX_NUMBERING: usize = 20;

/// Extracts cleaned question strings from raw model output, in input order.
///
/// A line survives when, after trimming, it starts with an ASCII digit or a
/// bold marker (`**`), and its cleaned form is longer than 20 characters.
pub fn parse_questions(raw: &str) -> Vec<String> {
    let mut questions = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        let starts_numbered = line
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
            || line.starts_with("**");
        if !starts_numbered {
            continue;
        }

        let mut question = line.to_string();
        for n in 1..MAX_NUMBERING {
            for pattern in [
                format!("{n}."),
                format!("{n})"),
                format!("**{n}.**"),
                format!("**{n})"),
            ] {
                question = question.replacen(&pattern, "", 1);
            }
        }
        let question = question.replace("**", "").trim().to_string();

        if question.chars().count() > MIN_QUESTION_CHARS {
            questions.push(question);
        }
    }

    questions
}
