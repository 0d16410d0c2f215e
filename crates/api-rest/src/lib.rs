//! # API REST
//!
//! HTTP surface for the reports view.
//!
//! Handles:
//! - the HTML reports page, mounting one view per request inside the page shell
//! - the JSON view-state endpoint
//! - OpenAPI/Swagger documentation, CORS
//!
//! Uses `api-shared` for response types and `swasthya-core` for everything else.

#![warn(rust_2018_idioms)]

use api_shared::{HealthRes, HealthService, ViewStateRes};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
    routing::get,
    Router,
};
use std::sync::Arc;
use swasthya_core::{
    load_once, render::html, ConfigResult, CoreConfig, HttpReportSource, PageShell, ViewState,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across handlers.
///
/// Every request mounts its own view over the shared source, so nothing here caches reports.
#[derive(Clone)]
pub struct AppState {
    cfg: Arc<CoreConfig>,
    source: Arc<HttpReportSource>,
    shell: Arc<PageShell>,
}

impl AppState {
    /// Build state from resolved configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(cfg: Arc<CoreConfig>) -> ConfigResult<Self> {
        let source = Arc::new(HttpReportSource::from_config(&cfg)?);
        Ok(Self {
            cfg,
            source,
            shell: Arc::new(PageShell::default()),
        })
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, reports_page, reports_json),
    components(schemas(
        api_shared::HealthRes,
        api_shared::ViewStateRes,
        api_shared::ReportRes,
        api_shared::PatientDetailRes,
        api_shared::GpsRes,
    ))
)]
pub struct ApiDoc;

/// Build the REST router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/reports", get(reports_page))
        .route("/api/reports", get(reports_json))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr` and serve `app` until Ctrl-C.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails while running.
pub async fn serve(addr: &str, app: Router) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("-- Serving reports on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("failed to listen for shutdown signal: {e}");
            }
        })
        .await?;

    tracing::info!("reports server stopped");
    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint.
///
/// Liveness of this process only; the reports endpoint is not contacted.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/reports",
    responses(
        (status = 200, description = "Rendered reports page", content_type = "text/html", body = String)
    )
)]
/// Render the reports page.
///
/// Mounts a fresh view for this request, waits for it to settle, and renders it inside the
/// page shell. Fetch failures are shown as the page's error panel, so the status is always
/// `200`. If the client disconnects first, the view is dropped and its fetch cancelled.
#[axum::debug_handler]
async fn reports_page(State(state): State<AppState>) -> Html<String> {
    let zone = state.cfg.display_zone();
    let view = load_once(state.source.clone(), zone).await;
    let fragment = html::render_view(&view, zone);
    Html(state.shell.wrap(&fragment))
}

#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "Reports loaded", body = ViewStateRes),
        (status = 502, description = "Reports endpoint failed", body = ViewStateRes)
    )
)]
/// Settled view state as JSON.
///
/// # Returns
/// * `200` with `state = "loaded"` and the normalised reports
/// * `502` with `state = "error"` and the error message
#[axum::debug_handler]
async fn reports_json(State(state): State<AppState>) -> (StatusCode, Json<ViewStateRes>) {
    let zone = state.cfg.display_zone();
    let view = load_once(state.source.clone(), zone).await;
    let status = match view {
        ViewState::Error(ref message) => {
            tracing::error!("Reports fetch error: {}", message);
            StatusCode::BAD_GATEWAY
        }
        _ => StatusCode::OK,
    };
    (
        status,
        Json(ViewStateRes::from_state(&view, zone)),
    )
}
