use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use tablemates_core::domain::dashboard::{SortKey, SortState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SelectSortRequest {
    pub key: SortKey,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SelectSortResponse {
    pub sort: SortState,
}

#[utoipa::path(
    post,
    path = "/admin/view/sort",
    tag = "admin",
    summary = "Select a sort key",
    description = "Selecting the active key again toggles direction; a different key resets to ascending",
    request_body = SelectSortRequest,
    responses(
        (status = 200, body = SelectSortResponse),
        (status = 401, description = "Invalid dashboard password")
    )
)]
pub async fn select_sort(
    State(state): State<AppState>,
    Json(request): Json<SelectSortRequest>,
) -> Result<Response<SelectSortResponse>, ApiError> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.select_sort(request.key);

    Ok(Response::OK(SelectSortResponse {
        sort: dashboard.sort,
    }))
}
