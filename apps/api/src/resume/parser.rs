//! Resume Parser: pluggable, trait-based conversion of resume text into profile fields.
//!
//! Default: `LlmResumeParser` (Cerebras chat completion).
//! `AppState` holds an `Arc<dyn ResumeParser>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::resume::prompts::RESUME_PARSE_PROMPT;

/// Longest resume text sent to the model, in characters.
pub const MAX_RESUME_CHARS: usize = 7000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
}

/// Profile fields extracted from a resume. Missing fields come back empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub full_name: String,
    pub email: String,
    pub job_role: String,
    pub bio: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub projects: Vec<ResumeProject>,
}

#[async_trait]
pub trait ResumeParser: Send + Sync {
    async fn parse(&self, resume_text: &str) -> Result<ResumeData, AppError>;
}

pub struct LlmResumeParser(pub LlmClient);

#[async_trait]
impl ResumeParser for LlmResumeParser {
    async fn parse(&self, resume_text: &str) -> Result<ResumeData, AppError> {
        let prompt = build_prompt(resume_text);
        let data: ResumeData = self
            .0
            .call_json(&prompt)
            .await
            .map_err(|e| AppError::Llm(e.to_string()))?;
        info!(
            "Parsed resume: role='{}', {} projects",
            data.job_role,
            data.projects.len()
        );
        Ok(data)
    }
}

fn build_prompt(resume_text: &str) -> String {
    RESUME_PARSE_PROMPT
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{resume_text}", truncate_chars(resume_text, MAX_RESUME_CHARS))
}

/// Cuts `text` to at most `max` characters without splitting a code point.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
