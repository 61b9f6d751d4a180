//! Axum route handlers for user accounts and candidate profiles.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::db::is_unique_violation;
use crate::errors::AppError;
use crate::models::user::{UserRow, ROLE_CANDIDATE, ROLE_RECRUITER};
use crate::resume::parser::ResumeProject;
use crate::state::AppState;
use crate::users::queries::{
    find_user_by_wallet, insert_user, update_profile, NewUser, ProfileUpdate,
};
use crate::validation::{non_blank, parse_uuid, require_email, require_min_chars, require_non_empty};

const MIN_PASSWORD_CHARS: usize = 6;
const MIN_FULL_NAME_CHARS: usize = 2;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub wallet_address: String,
    pub email: String,
    pub role: String,
    pub full_name: String,
    pub password: String,
}

impl CreateUserRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_non_empty(&self.wallet_address, "wallet_address")?;
        require_email(&self.email, "email")?;
        if self.role != ROLE_CANDIDATE && self.role != ROLE_RECRUITER {
            return Err(AppError::Validation(format!(
                "role must be one of {ROLE_CANDIDATE}, {ROLE_RECRUITER}"
            )));
        }
        require_min_chars(&self.full_name, "full_name", MIN_FULL_NAME_CHARS)?;
        // Passwords are not trimmed.
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AppError::Validation(format!(
                "password must be at least {MIN_PASSWORD_CHARS} characters"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub job_role: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub projects: Option<Vec<ResumeProject>>,
}

/// POST /api/v1/users
pub async fn handle_create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserRow>), AppError> {
    request.validate()?;

    let password = request.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || {
        bcrypt::hash(password, bcrypt::DEFAULT_COST)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("password hashing task failed: {e}")))?
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to hash password: {e}")))?;

    let user = insert_user(
        &state.db,
        NewUser {
            wallet_address: request.wallet_address.trim(),
            email: request.email.trim(),
            role: &request.role,
            full_name: request.full_name.trim(),
            password_hash: &password_hash,
        },
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Conflict("A user with this wallet address already exists".to_string())
        } else {
            AppError::Database(e)
        }
    })?;

    info!("Created {} user {}", user.role, user.id);
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users/:key
///
/// `key` is the wallet address. Answers whether an account exists for it.
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(wallet): Path<String>,
) -> Result<Response, AppError> {
    require_non_empty(&wallet, "Wallet address")?;

    let response = match find_user_by_wallet(&state.db, wallet.trim()).await? {
        Some(user) => Json(json!({ "exists": true, "user": user })).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "exists": false }))).into_response(),
    };
    Ok(response)
}

/// PUT /api/v1/users/:key
///
/// `key` is the user id. Blank fields keep their stored value; `projects`
/// replaces the stored list when present.
pub async fn handle_update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserRow>, AppError> {
    let id = parse_uuid(&id, "Invalid User ID")?;

    let email = non_blank(request.email.as_deref());
    if let Some(email) = email {
        require_email(email, "email")?;
    }

    let projects = request
        .projects
        .as_ref()
        .map(serde_json::to_value)
        .transpose()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to process projects: {e}")))?;

    let update = ProfileUpdate {
        full_name: non_blank(request.full_name.as_deref()),
        email,
        job_role: non_blank(request.job_role.as_deref()),
        bio: non_blank(request.bio.as_deref()),
        skills: non_blank(request.skills.as_deref()),
        experience: non_blank(request.experience.as_deref()),
        education: non_blank(request.education.as_deref()),
        projects: projects.as_ref(),
    };

    let user = update_profile(&state.db, id, update)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;

    info!("Updated profile for user {id}");
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            wallet_address: "0xabc123".to_string(),
            email: "dev@grindlink.io".to_string(),
            role: ROLE_CANDIDATE.to_string(),
            full_name: "Ada Lovelace".to_string(),
            password: "hunter22".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_unknown_role_rejected() {
        let mut req = valid_request();
        req.role = "ADMIN".to_string();
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_short_password_rejected() {
        let mut req = valid_request();
        req.password = "12345".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_short_name_rejected() {
        let mut req = valid_request();
        req.full_name = " A ".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_missing_wallet_rejected() {
        let mut req = valid_request();
        req.wallet_address = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_accepts_partial_body() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"skills":"rust, sql","projects":[{"title":"Ledger"}]}"#)
                .unwrap();
        assert_eq!(req.skills.as_deref(), Some("rust, sql"));
        assert!(req.job_role.is_none());
        assert_eq!(req.projects.unwrap()[0].title, "Ledger");
    }
}
