use std::sync::Arc;

use anyhow::Result;
use axum::{Router, routing::post};
use clap::Parser;
use tracing::info;

use crate::args::Args;
use crate::handlers::send_email;
use crate::provider::ProviderClient;

mod args;
mod handlers;
mod provider;

#[derive(Clone)]
pub struct RelayState {
    pub provider: Arc<ProviderClient>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if args.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let provider = ProviderClient::new(
        args.provider_url.clone(),
        args.provider_api_key.clone(),
        args.sender.clone(),
    );
    let state = RelayState {
        provider: Arc::new(provider),
    };

    let router = Router::new()
        .route("/api/emails/send", post(send_email))
        .with_state(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("relay listening on {}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}
