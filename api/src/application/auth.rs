use axum::{extract::Request, extract::State, middleware::Next, response::Response};
use tablemates_core::domain::common::AdminAccess;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Shared-password gate for the admin dashboard routes.
///
/// This is a UI gate, not an access-control boundary: anyone holding the
/// store credentials bypasses it entirely. With no password configured the
/// dashboard stays disabled rather than falling back to prompting.
pub async fn admin_gate(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let AdminAccess::Enabled { password } = &state.admin_access else {
        return Err(ApiError::ServiceUnavailable(
            "admin dashboard is disabled: no dashboard password is configured".to_string(),
        ));
    };

    let provided = req
        .headers()
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if provided != password {
        return Err(ApiError::Unauthorized(
            "invalid dashboard password".to_string(),
        ));
    }

    Ok(next.run(req).await)
}
