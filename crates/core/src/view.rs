//! Reports view lifecycle.
//!
//! Mounting a view starts exactly one fetch and publishes the view state through a
//! `tokio::sync::watch` channel:
//!
//! ```text
//! mount ──► Loading ──► Loaded(reports)
//!                   └─► Error(message)
//! ```
//!
//! `Loaded` and `Error` are terminal for a mounted view; a fresh fetch needs a fresh mount.
//! The fetch is bound to the [`MountedView`] that started it: tearing the view down (explicitly
//! or by dropping it) aborts the in-flight fetch and guarantees that a completion racing the
//! teardown is never published.

use crate::error::LoadError;
use crate::sources::ReportSource;
use reports_wire::HealthReport;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use swasthya_types::{DisplayTimestamp, DisplayZone};
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};

/// What the reports page currently shows. Exactly one state is active at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState {
    /// The fetch is in flight.
    Loading,
    /// The fetch failed; the message is shown on the error panel.
    Error(String),
    /// The fetch succeeded. An empty list is a valid, distinct rendering.
    Loaded(Vec<HealthReport>),
}

impl ViewState {
    /// Whether the state is terminal for the current mount.
    pub fn is_settled(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }

    /// Short state name, used in logs and JSON responses.
    pub fn kind(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::Error(_) => "error",
            ViewState::Loaded(_) => "loaded",
        }
    }

    fn from_load_error(err: &LoadError) -> Self {
        ViewState::Error(err.to_string())
    }
}

/// A reports view bound to one fetch.
///
/// Must be created from within a tokio runtime.
#[derive(Debug)]
pub struct MountedView {
    sender: Arc<watch::Sender<ViewState>>,
    receiver: watch::Receiver<ViewState>,
    alive: Arc<AtomicBool>,
    fetch: AbortHandle,
    publisher: Option<JoinHandle<()>>,
}

impl MountedView {
    /// Mount a view: enter `Loading` and start the single fetch for this mount.
    ///
    /// `zone` is the zone report dates will be displayed in; it decides which dates are logged
    /// as unrecognised.
    pub fn mount<S>(source: Arc<S>, zone: DisplayZone) -> Self
    where
        S: ReportSource + 'static,
    {
        let (sender, receiver) = watch::channel(ViewState::Loading);
        let sender = Arc::new(sender);
        let alive = Arc::new(AtomicBool::new(true));

        let description = source.describe();
        tracing::info!(source = %description, "mounting reports view");

        let fetch = tokio::spawn(async move { source.fetch().await });
        let fetch_abort = fetch.abort_handle();

        let publisher = {
            let sender = sender.clone();
            let alive = alive.clone();
            tokio::spawn(async move {
                let next = match fetch.await {
                    Ok(Ok(payload)) => {
                        let reports = payload.into_reports();
                        let _ = report_degraded_fields(&reports, zone);
                        tracing::info!(source = %description, count = reports.len(), "reports loaded");
                        ViewState::Loaded(reports)
                    }
                    Ok(Err(err)) => {
                        tracing::error!(source = %description, error = %err, "failed to load reports");
                        ViewState::from_load_error(&err)
                    }
                    Err(join_err) => {
                        let err = LoadError::Task(join_err.to_string());
                        if join_err.is_panic() {
                            tracing::error!(source = %description, error = %err, "report fetch panicked");
                        }
                        ViewState::from_load_error(&err)
                    }
                };

                // The liveness check happens under the channel's write lock, which teardown
                // also takes, so a torn-down view can never observe a late result.
                let published = sender.send_if_modified(|state| {
                    if !alive.load(Ordering::Acquire) {
                        return false;
                    }
                    *state = next;
                    true
                });
                if !published {
                    tracing::debug!(source = %description, "discarding reports result after teardown");
                }
            })
        };

        Self {
            sender,
            receiver,
            alive,
            fetch: fetch_abort,
            publisher: Some(publisher),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.receiver.borrow().clone()
    }

    /// Wait until the view leaves `Loading` and return the settled state.
    pub async fn settled(&mut self) -> ViewState {
        if let Ok(state) = self.receiver.wait_for(ViewState::is_settled).await {
            return state.clone();
        }
        // The sender lives as long as `self`, so the channel cannot close here.
        self.state()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.sender.subscribe()
    }

    /// Whether the view is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Tear the view down, cancelling the fetch if it is still in flight.
    pub fn teardown(mut self) {
        self.invalidate();
    }

    fn invalidate(&mut self) {
        if !self.alive.load(Ordering::Acquire) {
            return;
        }

        self.sender.send_if_modified(|_| {
            self.alive.store(false, Ordering::Release);
            false
        });
        self.fetch.abort();
        if let Some(publisher) = self.publisher.take() {
            publisher.abort();
        }
        tracing::debug!("reports view torn down");
    }
}

impl Drop for MountedView {
    fn drop(&mut self) {
        self.invalidate();
    }
}

/// Log field-level oddities. They are displayed as sent, never corrected.
///
/// Returns the number of warnings emitted.
fn report_degraded_fields(reports: &[HealthReport], zone: DisplayZone) -> usize {
    let mut warnings = 0;
    for (index, report) in reports.iter().enumerate() {
        if !report.patient_count_matches() {
            tracing::warn!(
                index,
                village = %report.village,
                household_id = %report.household_id,
                patient_count = report.patient_count,
                patient_details = report.patient_details.len(),
                "patientCount does not match patientDetails"
            );
            warnings += 1;
        }
        if !DisplayTimestamp::is_valid(&report.report_date, zone) {
            tracing::warn!(
                index,
                report_date = %report.report_date,
                zone = ?zone,
                "reportDate is not a recognised timestamp"
            );
            warnings += 1;
        }
    }
    warnings
}
