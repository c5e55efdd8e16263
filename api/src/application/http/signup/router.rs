use super::handlers::{
    submit_feedback::{__path_submit_feedback, submit_feedback},
    submit_profile::{__path_submit_profile, submit_profile},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(submit_profile, submit_feedback))]
pub struct SignupApiDoc;

pub fn signup_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/signup/profiles", state.args.server.root_path),
            post(submit_profile),
        )
        .route(
            &format!("{}/signup/feedback", state.args.server.root_path),
            post(submit_feedback),
        )
}
