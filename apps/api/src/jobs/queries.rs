use sqlx::PgPool;
use uuid::Uuid;

use crate::models::job::{JobApplicationCountRow, JobRow, STATUS_OPEN};

pub struct NewJob<'a> {
    pub recruiter_id: Uuid,
    pub recruiter_email: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub job_summary: Option<&'a str>,
    pub education_requirements: Option<&'a str>,
    pub skills_requirements: Option<&'a str>,
    pub requirements: Option<&'a str>,
    pub is_unpaid: bool,
    pub job_type: Option<&'a str>,
    pub location_type: Option<&'a str>,
    pub location_city: Option<&'a str>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub currency: Option<&'a str>,
    pub experience_min: Option<i32>,
    pub experience_max: Option<i32>,
    pub benefits: Option<&'a str>,
}

pub async fn insert_job(pool: &PgPool, job: NewJob<'_>) -> Result<JobRow, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs
            (recruiter_id, recruiter_email, title, description, job_summary,
             education_requirements, skills_requirements, requirements, is_unpaid,
             job_type, location_type, location_city, salary_min, salary_max, currency,
             experience_min, experience_max, benefits, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
        RETURNING *
        "#,
    )
    .bind(job.recruiter_id)
    .bind(job.recruiter_email)
    .bind(job.title)
    .bind(job.description)
    .bind(job.job_summary)
    .bind(job.education_requirements)
    .bind(job.skills_requirements)
    .bind(job.requirements)
    .bind(job.is_unpaid)
    .bind(job.job_type)
    .bind(job.location_type)
    .bind(job.location_city)
    .bind(job.salary_min)
    .bind(job.salary_max)
    .bind(job.currency)
    .bind(job.experience_min)
    .bind(job.experience_max)
    .bind(job.benefits)
    .bind(STATUS_OPEN)
    .fetch_one(pool)
    .await
}

/// Open jobs, newest first. This order is the feed's tie-break.
pub async fn list_open_jobs(pool: &PgPool) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        "SELECT * FROM jobs WHERE status = $1 ORDER BY created_at DESC, id",
    )
    .bind(STATUS_OPEN)
    .fetch_all(pool)
    .await
}

pub async fn find_job(pool: &PgPool, id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_jobs_by_recruiter(
    pool: &PgPool,
    recruiter_id: Uuid,
) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        "SELECT * FROM jobs WHERE recruiter_id = $1 ORDER BY created_at DESC, id",
    )
    .bind(recruiter_id)
    .fetch_all(pool)
    .await
}

/// Returns false when no job has this id.
pub async fn set_job_status(pool: &PgPool, id: Uuid, status: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE jobs SET status = $2 WHERE id = $1")
        .bind(id)
        .bind(status)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn application_counts_for_recruiter(
    pool: &PgPool,
    recruiter_id: Uuid,
) -> Result<Vec<JobApplicationCountRow>, sqlx::Error> {
    sqlx::query_as::<_, JobApplicationCountRow>(
        r#"
        SELECT j.id AS job_id, j.title, j.status, COUNT(a.id) AS application_count
        FROM jobs j
        LEFT JOIN applications a ON a.job_id = j.id
        WHERE j.recruiter_id = $1
        GROUP BY j.id, j.title, j.status, j.created_at
        ORDER BY j.created_at DESC
        "#,
    )
    .bind(recruiter_id)
    .fetch_all(pool)
    .await
}
