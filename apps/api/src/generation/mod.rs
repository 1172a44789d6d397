//! Question generation pipeline: prompt construction, the external model
//! call, response parsing, and the static fallback policy.

pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
