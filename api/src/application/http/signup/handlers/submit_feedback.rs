use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    signup::validators::SubmitFeedbackRequest,
};
use tablemates_core::domain::{
    dashboard::StoreEvent,
    feedback::{entities::Feedback, ports::FeedbackRepository},
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SubmitFeedbackResponse {
    pub id: uuid::Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[utoipa::path(
    post,
    path = "/signup/feedback",
    tag = "signup",
    summary = "Submit feedback",
    description = "Inserts one free-text feedback entry",
    request_body = SubmitFeedbackRequest,
    responses(
        (status = 201, body = SubmitFeedbackResponse, description = "Feedback created"),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<SubmitFeedbackRequest>,
) -> Result<Response<SubmitFeedbackResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let text = request.text.trim().to_string();
    if text.is_empty() {
        return Err(ApiError::BadRequest("text must not be empty".to_string()));
    }

    let created = state
        .feedback_repository
        .insert(Feedback::new(text))
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert feedback: {}", e);
            ApiError::from(e)
        })?;

    if state
        .events
        .send(StoreEvent::feedback_inserted(created.clone()))
        .is_err()
    {
        tracing::warn!("Store event channel closed; dashboard will miss this insert");
    }

    Ok(Response::Created(SubmitFeedbackResponse {
        id: created.id,
        created_at: created.created_at,
    }))
}
