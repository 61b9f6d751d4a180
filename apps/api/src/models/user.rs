use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

pub const ROLE_CANDIDATE: &str = "CANDIDATE";
pub const ROLE_RECRUITER: &str = "RECRUITER";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub wallet_address: String,
    pub email: String,
    pub role: String,
    pub full_name: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub job_role: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub projects: Option<Value>,
    pub education: Option<String>,
    pub created_at: DateTime<Utc>,
}
