//! Axum route handlers for job postings and the ranked job feed.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::PgPool;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::db::is_foreign_key_violation;
use crate::errors::AppError;
use crate::jobs::queries::{
    application_counts_for_recruiter, insert_job, list_jobs_by_recruiter, list_open_jobs,
    set_job_status, NewJob,
};
use crate::matching::feed::{rank_feed, FeedJob};
use crate::matching::CandidateProfile;
use crate::models::job::{JobApplicationCountRow, JobRow, STATUS_CLOSED, STATUS_OPEN};
use crate::state::AppState;
use crate::users::queries::find_user_by_id;
use crate::validation::{non_blank, parse_uuid, require_email, require_non_empty};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateJobRequest {
    pub recruiter_id: String,
    pub recruiter_email: String,
    pub title: String,
    pub job_summary: Option<String>,
    pub description: String,
    pub education_requirements: Option<String>,
    pub skills_requirements: Option<String>,
    pub requirements: Option<String>,
    pub experience_min: Option<i32>,
    pub experience_max: Option<i32>,
    pub is_unpaid: bool,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub currency: Option<String>,
    pub benefits: Option<String>,
    pub job_type: Option<String>,
    pub location_type: Option<String>,
    pub location_city: Option<String>,
}

impl CreateJobRequest {
    fn validate(&self) -> Result<Uuid, AppError> {
        let recruiter_id = parse_uuid(&self.recruiter_id, "Invalid Recruiter ID")?;
        require_email(&self.recruiter_email, "recruiter_email")?;
        require_non_empty(&self.title, "title")?;
        require_non_empty(&self.description, "description")?;
        check_range(self.salary_min, self.salary_max, "salary")?;
        check_range(self.experience_min, self.experience_max, "experience")?;
        Ok(recruiter_id)
    }
}

fn check_range(min: Option<i32>, max: Option<i32>, field: &str) -> Result<(), AppError> {
    if min.is_some_and(|v| v < 0) || max.is_some_and(|v| v < 0) {
        return Err(AppError::Validation(format!("{field} cannot be negative")));
    }
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(AppError::Validation(format!(
                "{field}_min cannot exceed {field}_max"
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub candidate_id: Option<String>,
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobRow>), AppError> {
    let recruiter_id = request.validate()?;

    let job = insert_job(
        &state.db,
        NewJob {
            recruiter_id,
            recruiter_email: request.recruiter_email.trim(),
            title: request.title.trim(),
            description: &request.description,
            job_summary: request.job_summary.as_deref(),
            education_requirements: request.education_requirements.as_deref(),
            skills_requirements: request.skills_requirements.as_deref(),
            requirements: request.requirements.as_deref(),
            is_unpaid: request.is_unpaid,
            job_type: non_blank(request.job_type.as_deref()),
            location_type: non_blank(request.location_type.as_deref()),
            location_city: non_blank(request.location_city.as_deref()),
            salary_min: request.salary_min,
            salary_max: request.salary_max,
            currency: non_blank(request.currency.as_deref()),
            experience_min: request.experience_min,
            experience_max: request.experience_max,
            benefits: request.benefits.as_deref(),
        },
    )
    .await
    .map_err(|e| {
        if is_foreign_key_violation(&e) {
            AppError::NotFound(format!("Recruiter {recruiter_id} not found"))
        } else {
            AppError::Database(e)
        }
    })?;

    info!("Recruiter {recruiter_id} posted job {}", job.id);
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/v1/jobs?candidate_id=
///
/// Open jobs. With a resolvable `candidate_id` every job carries a
/// `match_score` and the list is sorted by it; otherwise the plain listing
/// is returned. Candidate resolution never fails the request.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Vec<FeedJob>>, AppError> {
    let jobs = list_open_jobs(&state.db).await?;
    let candidate = resolve_candidate(&state.db, query.candidate_id.as_deref()).await;
    Ok(Json(rank_feed(&state.scorer, candidate.as_ref(), jobs)))
}

async fn resolve_candidate(pool: &PgPool, candidate_id: Option<&str>) -> Option<CandidateProfile> {
    let raw = non_blank(candidate_id)?;

    let Ok(id) = Uuid::parse_str(raw) else {
        debug!("Ignoring malformed candidate_id '{raw}' for feed ranking");
        return None;
    };

    match find_user_by_id(pool, id).await {
        Ok(Some(user)) => Some(CandidateProfile::from(&user)),
        Ok(None) => {
            debug!("Candidate {id} not found; serving unranked feed");
            None
        }
        Err(e) => {
            warn!("Candidate lookup failed for {id}: {e}; serving unranked feed");
            None
        }
    }
}

/// GET /api/v1/recruiters/:id/jobs
pub async fn handle_list_recruiter_jobs(
    State(state): State<AppState>,
    Path(recruiter_id): Path<String>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    let recruiter_id = parse_uuid(&recruiter_id, "Invalid Recruiter ID format")?;
    Ok(Json(list_jobs_by_recruiter(&state.db, recruiter_id).await?))
}

/// GET /api/v1/recruiters/:id/stats
pub async fn handle_recruiter_stats(
    State(state): State<AppState>,
    Path(recruiter_id): Path<String>,
) -> Result<Json<Vec<JobApplicationCountRow>>, AppError> {
    let recruiter_id = parse_uuid(&recruiter_id, "Invalid Recruiter ID")?;
    Ok(Json(
        application_counts_for_recruiter(&state.db, recruiter_id).await?,
    ))
}

/// PATCH /api/v1/jobs/:id/close
pub async fn handle_close_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    change_status(&state.db, &job_id, STATUS_CLOSED).await?;
    Ok(Json(json!({ "message": "Job closed successfully" })))
}

/// PATCH /api/v1/jobs/:id/reopen
pub async fn handle_reopen_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    change_status(&state.db, &job_id, STATUS_OPEN).await?;
    Ok(Json(json!({ "message": "Job reopened successfully" })))
}

async fn change_status(pool: &PgPool, job_id: &str, status: &str) -> Result<(), AppError> {
    let job_id = parse_uuid(job_id, "Invalid Job ID")?;
    if !set_job_status(pool, job_id, status).await? {
        return Err(AppError::NotFound(format!("Job {job_id} not found")));
    }
    info!("Job {job_id} is now {status}");
    Ok(())
}
