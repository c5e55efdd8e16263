use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::RelayState;

#[derive(Debug, Serialize, Deserialize)]
pub struct SendEmailRequest {
    pub to: String,
    pub subject: String,
    pub text: String,
}

/// `POST /api/emails/send`: forwards one `{to, subject, text}` triple.
/// `200 {message}` on success, `500 {error, details}` carrying the
/// provider's error otherwise.
pub async fn send_email(
    State(state): State<RelayState>,
    Json(request): Json<SendEmailRequest>,
) -> impl IntoResponse {
    match state
        .provider
        .send(&request.to, &request.subject, &request.text)
        .await
    {
        Ok(id) => (
            StatusCode::OK,
            Json(json!({ "message": format!("Email sent ({})", id) })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to send email",
                "details": e.to_string(),
            })),
        ),
    }
}
