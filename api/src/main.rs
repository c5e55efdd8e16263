use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::application::events::apply_store_events;
use crate::application::http::server::http_server;
use crate::args::Args;

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Arc::new(Args::parse());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if args.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let (state, store_events) = http_server::state(args.clone()).await?;

    // Single reducer task: the only writer of the dashboard's "new" buckets.
    tokio::spawn(apply_store_events(state.dashboard.clone(), store_events));

    let router = http_server::router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}
