//! Axum route handlers for resume ingestion.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::resume::parser::ResumeData;
use crate::resume::pdf::{extract_text, fetch_pdf};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    #[serde(default)]
    pub url: String,
}

/// POST /api/v1/parse-resume
///
/// Downloads the PDF at `url`, extracts its text, and returns the parsed profile fields.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(request): Json<ParseResumeRequest>,
) -> Result<Json<ResumeData>, AppError> {
    if request.url.trim().is_empty() {
        return Err(AppError::Validation("URL is required".to_string()));
    }

    let pdf = fetch_pdf(&state.http, &request.url).await?;
    let text = extract_text(pdf).await?;
    if text.trim().is_empty() {
        return Err(AppError::Pdf("no text found in PDF".to_string()));
    }

    let data = state.resume_parser.parse(&text).await?;
    Ok(Json(data))
}
