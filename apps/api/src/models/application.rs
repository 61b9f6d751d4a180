use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const STATUS_SENT: &str = "SENT";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub candidate_id: Uuid,
    pub status: String,
    pub match_score: i32,
    pub gateway_answer: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An application joined with the job it was sent to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateApplicationRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub status: String,
    pub match_score: i32,
    pub gateway_answer: Option<String>,
    pub created_at: DateTime<Utc>,
    pub job_title: String,
    pub recruiter_email: Option<String>,
    pub job_type: Option<String>,
    pub location_type: Option<String>,
    pub job_status: String,
}
