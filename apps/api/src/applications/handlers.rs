//! Axum route handlers for job applications.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::applications::queries::{
    delete_application, insert_application, list_applications_for_candidate, NewApplication,
};
use crate::db::is_unique_violation;
use crate::errors::AppError;
use crate::jobs::queries::find_job;
use crate::matching::screener::screen_application;
use crate::models::application::{ApplicationRow, CandidateApplicationRow};
use crate::state::AppState;
use crate::users::queries::find_user_by_id;
use crate::validation::{non_blank, parse_uuid};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApplyRequest {
    pub job_id: String,
    pub candidate_id: String,
    pub gateway_answer: Option<String>,
}

/// POST /api/v1/applications
///
/// The match score is computed here by the application screener; clients
/// cannot supply one.
pub async fn handle_apply(
    State(state): State<AppState>,
    Json(request): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<ApplicationRow>), AppError> {
    let job_id = parse_uuid(&request.job_id, "Invalid Job ID")?;
    let candidate_id = parse_uuid(&request.candidate_id, "Invalid Candidate ID")?;

    let job = find_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    let candidate = find_user_by_id(&state.db, candidate_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))?;

    let screening = screen_application(job.requirements.as_deref(), candidate.skills.as_deref());

    let application = insert_application(
        &state.db,
        NewApplication {
            job_id,
            candidate_id,
            match_score: screening.score,
            gateway_answer: non_blank(request.gateway_answer.as_deref()),
        },
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Conflict("Candidate has already applied to this job".to_string())
        } else {
            AppError::Database(e)
        }
    })?;

    info!(
        "Candidate {candidate_id} applied to job {job_id} (score {}, {:?})",
        screening.score, screening.method
    );
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/v1/applications/:id
///
/// `id` is the candidate id.
pub async fn handle_candidate_applications(
    State(state): State<AppState>,
    Path(candidate_id): Path<String>,
) -> Result<Json<Vec<CandidateApplicationRow>>, AppError> {
    let candidate_id = parse_uuid(&candidate_id, "Invalid User ID")?;
    Ok(Json(
        list_applications_for_candidate(&state.db, candidate_id).await?,
    ))
}

/// DELETE /api/v1/applications/:id
///
/// `id` is the application id.
pub async fn handle_withdraw_application(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let application_id = parse_uuid(&application_id, "Invalid Application ID")?;
    if !delete_application(&state.db, application_id).await? {
        return Err(AppError::NotFound(format!(
            "Application {application_id} not found"
        )));
    }
    info!("Application {application_id} withdrawn");
    Ok(Json(json!({ "message": "Application withdrawn successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_such_as_match_score_are_ignored() {
        let req: ApplyRequest = serde_json::from_str(
            r#"{"job_id":"j","candidate_id":"c","match_score":100,"gateway_answer":"Because."}"#,
        )
        .unwrap();
        assert_eq!(req.gateway_answer.as_deref(), Some("Because."));
    }
}
