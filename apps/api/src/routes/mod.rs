pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::jobs::handlers as jobs;
use crate::resume::handlers as resume;
use crate::state::AppState;
use crate::users::handlers as users;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/health", get(health::health_handler))
        // Users
        .route("/api/v1/users", post(users::handle_create_user))
        .route(
            "/api/v1/users/:key",
            get(users::handle_get_user).put(users::handle_update_user),
        )
        // Jobs & feed
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route("/api/v1/jobs/:id/close", patch(jobs::handle_close_job))
        .route("/api/v1/jobs/:id/reopen", patch(jobs::handle_reopen_job))
        .route(
            "/api/v1/recruiters/:id/jobs",
            get(jobs::handle_list_recruiter_jobs),
        )
        .route(
            "/api/v1/recruiters/:id/stats",
            get(jobs::handle_recruiter_stats),
        )
        // Applications
        .route("/api/v1/applications", post(applications::handle_apply))
        .route(
            "/api/v1/applications/:id",
            get(applications::handle_candidate_applications)
                .delete(applications::handle_withdraw_application),
        )
        // Resume ingestion
        .route("/api/v1/parse-resume", post(resume::handle_parse_resume))
        .with_state(state)
}
