use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ResetMatchingGroupsResponse {
    pub max_group: u32,
}

#[utoipa::path(
    post,
    path = "/admin/matching-groups/reset",
    tag = "admin",
    summary = "Reset matching groups",
    description = "Clears every assignment and resets the group counter",
    responses(
        (status = 200, body = ResetMatchingGroupsResponse),
        (status = 401, description = "Invalid dashboard password")
    )
)]
pub async fn reset_matching_groups(
    State(state): State<AppState>,
) -> Result<Response<ResetMatchingGroupsResponse>, ApiError> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.matching.reset();

    Ok(Response::OK(ResetMatchingGroupsResponse {
        max_group: dashboard.matching.max_group(),
    }))
}
