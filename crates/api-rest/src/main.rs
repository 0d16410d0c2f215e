//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the reports REST/HTML server on its own.
//!
//! ## Intended use
//! Useful for development when you want the server without the workspace runner. The
//! workspace's `swasthya-run` binary serves the same router and also probes the reports endpoint
//! at startup.

use std::sync::Arc;
use swasthya_core::{config::rest_addr_from_env, CoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("swasthya_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = rest_addr_from_env();
    let cfg = Arc::new(CoreConfig::from_env()?);

    tracing::info!(
        "-- Starting SwasthyaSetu reports API on {} (reports from {})",
        addr,
        cfg.reports_url()
    );

    let state = api_rest::AppState::new(cfg)?;
    api_rest::serve(&addr, api_rest::router(state)).await
}
