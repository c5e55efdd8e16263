use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use tablemates_core::domain::feedback::entities::Feedback;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetFeedbackResponse {
    pub items: Vec<Feedback>,
    pub new_items: Vec<Feedback>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/admin/feedback",
    tag = "admin",
    summary = "Get feedback entries",
    description = "Returns reviewed feedback plus anything new since the last sync",
    responses(
        (status = 200, body = GetFeedbackResponse),
        (status = 401, description = "Invalid dashboard password")
    )
)]
pub async fn get_feedback(
    State(state): State<AppState>,
) -> Result<Response<GetFeedbackResponse>, ApiError> {
    let dashboard = state.dashboard.read().await;

    let items = dashboard.feedback().to_vec();
    let new_items = dashboard.new_feedback().to_vec();

    Ok(Response::OK(GetFeedbackResponse {
        count: items.len() + new_items.len(),
        items,
        new_items,
    }))
}
