use axum::extract::State;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use tablemates_core::domain::{
    feedback::ports::FeedbackRepository, profile::ports::ProfileRepository,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SyncResponse {
    pub profile_count: usize,
    pub feedback_count: usize,
    pub synced_at: chrono::DateTime<chrono::Utc>,
}

#[utoipa::path(
    post,
    path = "/admin/sync",
    tag = "admin",
    summary = "Pull the full store",
    description = "Fetches the entire profile and feedback tables, replaces the dashboard's buckets, and clears anything pending review",
    responses(
        (status = 200, body = SyncResponse),
        (status = 401, description = "Invalid dashboard password"),
        (status = 503, description = "Dashboard disabled")
    )
)]
pub async fn sync(State(state): State<AppState>) -> Result<Response<SyncResponse>, ApiError> {
    // Two independent reads; no transaction spans them, so feedback can be
    // observed from a slightly later moment than profiles.
    let profiles = state.profile_repository.fetch_all().await.map_err(|e| {
        tracing::error!("Failed to fetch profiles: {}", e);
        ApiError::from(e)
    })?;
    let feedback = state.feedback_repository.fetch_all().await.map_err(|e| {
        tracing::error!("Failed to fetch feedback: {}", e);
        ApiError::from(e)
    })?;

    let synced_at = Utc::now();
    let mut dashboard = state.dashboard.write().await;
    dashboard.apply_sync(profiles, feedback, synced_at);

    Ok(Response::OK(SyncResponse {
        profile_count: dashboard.profiles().len(),
        feedback_count: dashboard.feedback().len(),
        synced_at,
    }))
}
