use std::collections::HashMap;

use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use tablemates_core::domain::dashboard::MatchingGroups;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GroupColor {
    pub group: u32,
    pub color: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetMatchingGroupsResponse {
    pub assignments: HashMap<Uuid, u32>,
    pub max_group: u32,
    /// Legend for every group in use, palette cycled by modulo
    pub colors: Vec<GroupColor>,
}

#[utoipa::path(
    get,
    path = "/admin/matching-groups",
    tag = "admin",
    summary = "Get matching-group assignments",
    responses(
        (status = 200, body = GetMatchingGroupsResponse),
        (status = 401, description = "Invalid dashboard password")
    )
)]
pub async fn get_matching_groups(
    State(state): State<AppState>,
) -> Result<Response<GetMatchingGroupsResponse>, ApiError> {
    let dashboard = state.dashboard.read().await;
    let matching = &dashboard.matching;

    let colors = (1..=matching.max_group())
        .map(|group| GroupColor {
            group,
            color: MatchingGroups::color_for(group).to_string(),
        })
        .collect();

    Ok(Response::OK(GetMatchingGroupsResponse {
        assignments: matching.assignments().clone(),
        max_group: matching.max_group(),
        colors,
    }))
}
