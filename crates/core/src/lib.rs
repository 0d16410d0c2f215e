//! # Swasthya Core
//!
//! Core logic for the health-report view of the SwasthyaSetu dashboard.
//!
//! This crate contains:
//! - startup configuration (`CoreConfig`)
//! - report sources (HTTP endpoint, local file)
//! - the mounted view and its state machine
//! - HTML and text renderers plus the page shell
//!
//! **No API concerns**: HTTP servers, routing and CLI parsing belong in `api-rest`, the root
//! runner, or `swasthya-cli`.

pub mod config;
pub mod constants;
pub mod error;
pub mod render;
pub mod sources;
pub mod view;

pub use config::CoreConfig;
pub use constants::{DEFAULT_REPORTS_URL, DEFAULT_REST_ADDR};
pub use error::{ConfigError, ConfigResult, LoadError, LoadResult};
pub use render::{PageShell, RenderFormat};
pub use sources::{FileReportSource, HttpReportSource, ReportSource};
pub use view::{MountedView, ViewState};

// Re-export the field and wire types so downstream crates need only one dependency.
pub use reports_wire::{HealthReport, PatientDetail, ReportPayload};
pub use swasthya_types::{DisplayTimestamp, DisplayZone, GpsPoint, Severity};

use std::sync::Arc;

/// Mount a view over `source`, wait for it to settle, and tear it down.
///
/// Convenience for one-shot consumers (CLI commands, page requests). The view is torn down
/// when the returned future completes or is dropped.
pub async fn load_once<S>(source: Arc<S>, zone: DisplayZone) -> ViewState
where
    S: ReportSource + 'static,
{
    let mut view = MountedView::mount(source, zone);
    let state = view.settled().await;
    view.teardown();
    state
}
