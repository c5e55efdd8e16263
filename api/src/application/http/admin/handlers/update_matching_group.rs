use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateMatchingGroupRequest {
    /// Raw admin input; anything that is not a non-negative integer floors
    /// to 0
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateMatchingGroupResponse {
    pub profile_id: Uuid,
    pub group: u32,
    pub max_group: u32,
}

#[utoipa::path(
    put,
    path = "/admin/matching-groups/{profile_id}",
    tag = "admin",
    summary = "Assign a matching group",
    params(
        ("profile_id" = Uuid, Path, description = "Profile id"),
    ),
    request_body = UpdateMatchingGroupRequest,
    responses(
        (status = 200, body = UpdateMatchingGroupResponse),
        (status = 401, description = "Invalid dashboard password")
    )
)]
pub async fn update_matching_group(
    Path(profile_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(request): Json<UpdateMatchingGroupRequest>,
) -> Result<Response<UpdateMatchingGroupResponse>, ApiError> {
    let mut dashboard = state.dashboard.write().await;
    let group = dashboard.matching.assign(profile_id, &request.value);

    Ok(Response::OK(UpdateMatchingGroupResponse {
        profile_id,
        group,
        max_group: dashboard.matching.max_group(),
    }))
}
