use std::sync::Arc;

use crate::application::http::admin::router::admin_routes;
use crate::application::http::health::health_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::application::http::signup::router::signup_routes;
use crate::args::Args;

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use tablemates_core::{
    domain::{
        common::{AdminAccess, TablematesConfig},
        dashboard::StoreEvent,
    },
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        feedback::PostgresFeedbackRepository,
        health::PostgresHealthCheckRepository,
        notification::RelayMailer,
        profile::PostgresProfileRepository,
    },
};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub async fn state(
    args: Arc<Args>,
) -> Result<(AppState, UnboundedReceiver<StoreEvent>), anyhow::Error> {
    let config: TablematesConfig = TablematesConfig::from(args.as_ref().clone());

    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;
    let profile_repository = PostgresProfileRepository::new(postgres.get_db());
    let feedback_repository = PostgresFeedbackRepository::new(postgres.get_db());
    let health_repository = PostgresHealthCheckRepository::new(postgres.get_db());
    let mailer = RelayMailer::new(config.relay.base_url.clone());

    let admin_access = AdminAccess::from_configured(args.admin.dashboard_password.clone());
    if !admin_access.is_enabled() {
        warn!("no dashboard password configured; admin routes will answer 503");
    }

    let (events_tx, events_rx) = mpsc::unbounded_channel();

    let state = AppState::new(
        args,
        admin_access,
        profile_repository,
        feedback_repository,
        health_repository,
        mailer,
        events_tx,
    );

    Ok((state, events_rx))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("ignoring unparseable origin: {}", origin);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            LOCATION,
        ])
        .allow_credentials(true);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(SwaggerUi::new(format!("{}/swagger-ui", root_path)).url(api_docs_url, openapi))
        .merge(signup_routes(state.clone()))
        .merge(admin_routes(state.clone()))
        .merge(health_routes(state.clone()))
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}
