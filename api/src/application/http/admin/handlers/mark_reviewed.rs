use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MarkReviewedResponse {
    pub profile_count: usize,
    pub feedback_count: usize,
}

#[utoipa::path(
    post,
    path = "/admin/profiles/mark-reviewed",
    tag = "admin",
    summary = "Mark new rows reviewed",
    description = "Merges the new-since-sync buckets to the front of the main buckets and clears them",
    responses(
        (status = 200, body = MarkReviewedResponse),
        (status = 401, description = "Invalid dashboard password")
    )
)]
pub async fn mark_reviewed(
    State(state): State<AppState>,
) -> Result<Response<MarkReviewedResponse>, ApiError> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.mark_reviewed();

    Ok(Response::OK(MarkReviewedResponse {
        profile_count: dashboard.profiles().len(),
        feedback_count: dashboard.feedback().len(),
    }))
}
