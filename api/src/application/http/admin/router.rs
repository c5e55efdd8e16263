use super::handlers::{
    delete_profile::{__path_delete_profile, delete_profile},
    export_csv::{__path_export_csv, export_csv},
    get_feedback::{__path_get_feedback, get_feedback},
    get_matching_groups::{__path_get_matching_groups, get_matching_groups},
    get_meal_times::{__path_get_meal_times, get_meal_times},
    get_profiles::{__path_get_profiles, get_profiles},
    mark_reviewed::{__path_mark_reviewed, mark_reviewed},
    reset_matching_groups::{__path_reset_matching_groups, reset_matching_groups},
    select_sort::{__path_select_sort, select_sort},
    sync::{__path_sync, sync},
    update_matching_group::{__path_update_matching_group, update_matching_group},
    update_view::{__path_update_view, update_view},
};
use crate::application::{auth::admin_gate, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    sync,
    get_profiles,
    mark_reviewed,
    delete_profile,
    get_feedback,
    get_meal_times,
    update_view,
    select_sort,
    get_matching_groups,
    update_matching_group,
    reset_matching_groups,
    export_csv
))]
pub struct AdminApiDoc;

pub fn admin_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/admin/sync", root_path), post(sync))
        .route(&format!("{}/admin/profiles", root_path), get(get_profiles))
        .route(
            &format!("{}/admin/profiles/mark-reviewed", root_path),
            post(mark_reviewed),
        )
        .route(
            &format!("{}/admin/profiles/{{profile_id}}", root_path),
            axum::routing::delete(delete_profile),
        )
        .route(&format!("{}/admin/feedback", root_path), get(get_feedback))
        .route(
            &format!("{}/admin/meal-times", root_path),
            get(get_meal_times),
        )
        .route(&format!("{}/admin/view", root_path), put(update_view))
        .route(&format!("{}/admin/view/sort", root_path), post(select_sort))
        .route(
            &format!("{}/admin/matching-groups", root_path),
            get(get_matching_groups),
        )
        .route(
            &format!("{}/admin/matching-groups/reset", root_path),
            post(reset_matching_groups),
        )
        .route(
            &format!("{}/admin/matching-groups/{{profile_id}}", root_path),
            put(update_matching_group),
        )
        .route(&format!("{}/admin/export", root_path), get(export_csv))
        .layer(middleware::from_fn_with_state(state.clone(), admin_gate))
}
