use sqlx::PgPool;
use uuid::Uuid;

use crate::models::application::{ApplicationRow, CandidateApplicationRow, STATUS_SENT};

pub struct NewApplication<'a> {
    pub job_id: Uuid,
    pub candidate_id: Uuid,
    pub match_score: i32,
    pub gateway_answer: Option<&'a str>,
}

pub async fn insert_application(
    pool: &PgPool,
    application: NewApplication<'_>,
) -> Result<ApplicationRow, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        INSERT INTO applications (job_id, candidate_id, status, match_score, gateway_answer)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(application.job_id)
    .bind(application.candidate_id)
    .bind(STATUS_SENT)
    .bind(application.match_score)
    .bind(application.gateway_answer)
    .fetch_one(pool)
    .await
}

pub async fn list_applications_for_candidate(
    pool: &PgPool,
    candidate_id: Uuid,
) -> Result<Vec<CandidateApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, CandidateApplicationRow>(
        r#"
        SELECT a.id, a.job_id, a.status, a.match_score, a.gateway_answer, a.created_at,
               j.title AS job_title, j.recruiter_email, j.job_type, j.location_type,
               j.status AS job_status
        FROM applications a
        JOIN jobs j ON j.id = a.job_id
        WHERE a.candidate_id = $1
        ORDER BY a.created_at DESC
        "#,
    )
    .bind(candidate_id)
    .fetch_all(pool)
    .await
}

/// Returns false when no application has this id.
pub async fn delete_application(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM applications WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
