use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    query_extractor::ViewQueryExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use tablemates_core::domain::{dashboard::SortState, profile::entities::Profile};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetProfilesResponse {
    pub items: Vec<Profile>,
    pub count: usize,
    pub new_count: usize,
    pub last_synced_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[utoipa::path(
    get,
    path = "/admin/profiles",
    tag = "admin",
    summary = "Get displayed profiles",
    description = "Returns the profile projection for the dashboard's view settings; query parameters (mode, filter[field], search, sort) override them for this request only",
    responses(
        (status = 200, body = GetProfilesResponse),
        (status = 401, description = "Invalid dashboard password")
    )
)]
pub async fn get_profiles(
    State(state): State<AppState>,
    ViewQueryExtractor(query): ViewQueryExtractor,
) -> Result<Response<GetProfilesResponse>, ApiError> {
    let dashboard = state.dashboard.read().await;

    let filters = (!query.filter.is_empty()).then(|| query.filter.to_map());
    let sort = query.sort.map(|spec| SortState {
        key: spec.key,
        direction: spec.direction,
    });

    let items: Vec<Profile> = dashboard
        .displayed_with(query.mode, filters.as_ref(), query.search.as_deref(), sort)
        .into_iter()
        .cloned()
        .collect();

    Ok(Response::OK(GetProfilesResponse {
        count: items.len(),
        new_count: dashboard.new_profiles().len(),
        last_synced_at: dashboard.last_synced_at(),
        items,
    }))
}
