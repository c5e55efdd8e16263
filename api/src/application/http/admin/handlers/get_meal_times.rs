use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use tablemates_core::domain::dashboard::DayAggregate;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetMealTimesResponse {
    pub days: Vec<DayAggregate>,
}

#[utoipa::path(
    get,
    path = "/admin/meal-times",
    tag = "admin",
    summary = "Get the scheduling-overlap tree",
    description = "Aggregates every profile's availability into day, meal, and time-slot counts; profiles with unreadable availability are skipped",
    responses(
        (status = 200, body = GetMealTimesResponse),
        (status = 401, description = "Invalid dashboard password")
    )
)]
pub async fn get_meal_times(
    State(state): State<AppState>,
) -> Result<Response<GetMealTimesResponse>, ApiError> {
    let dashboard = state.dashboard.read().await;

    Ok(Response::OK(GetMealTimesResponse {
        days: dashboard.meal_times(),
    }))
}
