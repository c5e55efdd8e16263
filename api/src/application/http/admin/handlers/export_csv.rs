use axum::{
    extract::State,
    http::{StatusCode, header},
};
use chrono::Utc;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};
use tablemates_core::domain::{
    common::entities::app_errors::CoreError,
    export::{export_filename, export_profiles_csv},
};

#[utoipa::path(
    get,
    path = "/admin/export",
    tag = "admin",
    summary = "Export profiles as CSV",
    description = "Serializes the full in-memory profile set; the header row is the union of observed field names",
    responses(
        (status = 200, description = "CSV document", content_type = "text/csv"),
        (status = 400, description = "No profiles to export"),
        (status = 401, description = "Invalid dashboard password")
    )
)]
pub async fn export_csv(
    State(state): State<AppState>,
) -> Result<axum::response::Response, ApiError> {
    let dashboard = state.dashboard.read().await;

    let csv = export_profiles_csv(dashboard.profiles()).map_err(|e| match e {
        CoreError::EmptyExport => {
            ApiError::BadRequest("there are no profiles to export yet".to_string())
        }
        other => ApiError::from(other),
    })?;

    let filename = export_filename(Utc::now().date_naive());

    axum::response::Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(csv.into())
        .map_err(|e| ApiError::InternalServerError(format!("failed to build export: {}", e)))
}
