use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::UserRow;

pub struct NewUser<'a> {
    pub wallet_address: &'a str,
    pub email: &'a str,
    pub role: &'a str,
    pub full_name: &'a str,
    pub password_hash: &'a str,
}

/// Profile fields to overwrite. `None` keeps the stored value.
#[derive(Default)]
pub struct ProfileUpdate<'a> {
    pub full_name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub job_role: Option<&'a str>,
    pub bio: Option<&'a str>,
    pub skills: Option<&'a str>,
    pub experience: Option<&'a str>,
    pub education: Option<&'a str>,
    pub projects: Option<&'a serde_json::Value>,
}

pub async fn insert_user(pool: &PgPool, user: NewUser<'_>) -> Result<UserRow, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (wallet_address, email, role, full_name, password_hash)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(user.wallet_address)
    .bind(user.email)
    .bind(user.role)
    .bind(user.full_name)
    .bind(user.password_hash)
    .fetch_one(pool)
    .await
}

pub async fn find_user_by_wallet(
    pool: &PgPool,
    wallet_address: &str,
) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE wallet_address = $1")
        .bind(wallet_address)
        .fetch_optional(pool)
        .await
}

pub async fn find_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update_profile(
    pool: &PgPool,
    id: Uuid,
    update: ProfileUpdate<'_>,
) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users SET
            full_name  = COALESCE($2, full_name),
            email      = COALESCE($3, email),
            job_role   = COALESCE($4, job_role),
            bio        = COALESCE($5, bio),
            skills     = COALESCE($6, skills),
            experience = COALESCE($7, experience),
            education  = COALESCE($8, education),
            projects   = COALESCE($9, projects)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(update.full_name)
    .bind(update.email)
    .bind(update.job_role)
    .bind(update.bio)
    .bind(update.skills)
    .bind(update.experience)
    .bind(update.education)
    .bind(update.projects)
    .fetch_optional(pool)
    .await
}
