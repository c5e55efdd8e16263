use std::collections::HashMap;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use tablemates_core::domain::dashboard::{FilterField, SortState, ViewMode};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateViewRequest {
    pub mode: Option<ViewMode>,
    pub search: Option<String>,
    /// Replaces the whole filter map when present
    pub filters: Option<HashMap<FilterField, String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ViewSettingsResponse {
    pub mode: ViewMode,
    pub search: String,
    pub filters: HashMap<FilterField, String>,
    pub sort: SortState,
}

#[utoipa::path(
    put,
    path = "/admin/view",
    tag = "admin",
    summary = "Update view settings",
    description = "Updates the dashboard's mode, search query, and exact-match filters",
    request_body = UpdateViewRequest,
    responses(
        (status = 200, body = ViewSettingsResponse),
        (status = 401, description = "Invalid dashboard password")
    )
)]
pub async fn update_view(
    State(state): State<AppState>,
    Json(request): Json<UpdateViewRequest>,
) -> Result<Response<ViewSettingsResponse>, ApiError> {
    let mut dashboard = state.dashboard.write().await;

    if let Some(mode) = request.mode {
        dashboard.mode = mode;
    }
    if let Some(search) = request.search {
        dashboard.search = search;
    }
    if let Some(filters) = request.filters {
        dashboard.filters = filters;
    }

    Ok(Response::OK(ViewSettingsResponse {
        mode: dashboard.mode,
        search: dashboard.search.clone(),
        filters: dashboard.filters.clone(),
        sort: dashboard.sort,
    }))
}
