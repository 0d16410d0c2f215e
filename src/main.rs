use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swasthya_core::{
    CoreConfig, DisplayZone, HttpReportSource, ViewState, config::rest_addr_from_env, load_once,
};

/// Main entry point for the SwasthyaSetu reports application
///
/// Runs two things concurrently:
/// - the REST/HTML server (configurable via SWASTHYA_REST_ADDR)
/// - a single startup probe of the reports endpoint, which only logs its outcome
///
/// # Environment Variables
/// - `SWASTHYA_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `SWASTHYA_REPORTS_URL`: reports endpoint (default: the field deployment)
/// - `SWASTHYA_FETCH_TIMEOUT_SECS`: optional request timeout
/// - `SWASTHYA_DISPLAY_TZ`: `utc` or `local`
///
/// # Returns
/// * `Ok(())` - If the server shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration is invalid or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("swasthya_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("swasthya_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = rest_addr_from_env();
    let cfg = Arc::new(CoreConfig::from_env()?);

    tracing::info!("++ Starting SwasthyaSetu REST on {}", rest_addr);
    tracing::info!("++ Reports endpoint {}", cfg.reports_url());

    let probe_source = Arc::new(HttpReportSource::from_config(&cfg)?);
    let zone = cfg.display_zone();
    let rest_app = api_rest::router(api_rest::AppState::new(cfg)?);

    let (rest_result, ()) = tokio::join!(
        api_rest::serve(&rest_addr, rest_app),
        probe(probe_source, zone)
    );
    rest_result
}

/// Fetch the reports once and log what came back.
///
/// A failing endpoint is not fatal: pages render the error panel until it recovers.
async fn probe(source: Arc<HttpReportSource>, zone: DisplayZone) {
    match load_once(source.clone(), zone).await {
        ViewState::Loaded(reports) => {
            tracing::info!(
                "reports endpoint {} reachable ({} reports)",
                source.url(),
                reports.len()
            );
        }
        ViewState::Error(message) => {
            tracing::warn!("reports endpoint {} failed: {}", source.url(), message);
        }
        ViewState::Loading => {}
    }
}
