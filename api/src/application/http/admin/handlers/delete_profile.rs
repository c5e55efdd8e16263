use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteProfileResponse {
    pub id: Uuid,
    pub remaining: usize,
}

#[utoipa::path(
    delete,
    path = "/admin/profiles/{profile_id}",
    tag = "admin",
    summary = "Remove a profile from the view",
    description = "View-local removal only; the store row is never deleted",
    params(
        ("profile_id" = Uuid, Path, description = "Profile id"),
    ),
    responses(
        (status = 200, body = DeleteProfileResponse),
        (status = 404, description = "Profile not in the view"),
        (status = 401, description = "Invalid dashboard password")
    )
)]
pub async fn delete_profile(
    Path(profile_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteProfileResponse>, ApiError> {
    let mut dashboard = state.dashboard.write().await;

    if !dashboard.remove_profile(profile_id) {
        return Err(ApiError::NotFound(format!(
            "profile '{}' is not in the view",
            profile_id
        )));
    }

    Ok(Response::OK(DeleteProfileResponse {
        id: profile_id,
        remaining: dashboard.profiles().len() + dashboard.new_profiles().len(),
    }))
}
