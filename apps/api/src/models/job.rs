use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const STATUS_OPEN: &str = "OPEN";
pub const STATUS_CLOSED: &str = "CLOSED";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub recruiter_id: Uuid,
    pub recruiter_email: Option<String>,
    pub title: String,
    pub description: String,
    pub job_summary: Option<String>,
    pub education_requirements: Option<String>,
    pub skills_requirements: Option<String>,
    pub requirements: Option<String>,
    pub is_unpaid: bool,
    pub job_type: Option<String>,
    pub location_type: Option<String>,
    pub location_city: Option<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub currency: Option<String>,
    pub experience_min: Option<i32>,
    pub experience_max: Option<i32>,
    pub benefits: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Application volume per job, for the recruiter dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobApplicationCountRow {
    pub job_id: Uuid,
    pub title: String,
    pub status: String,
    pub application_count: i64,
}
