// Resume ingestion: download a PDF, extract its text, and have the LLM turn it
// into profile fields a candidate can review before saving.

pub mod handlers;
pub mod parser;
pub mod pdf;
pub mod prompts;
