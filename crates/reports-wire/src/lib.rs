//! Wire/boundary support for health reports published by the symptom endpoint.
//!
//! This crate provides **wire models** and **translation helpers** for the JSON body returned
//! by the remote reports endpoint:
//! - strict-enough decoding with a JSON path on every schema mismatch
//! - explicit discrimination of the two accepted body shapes (one report, or a list)
//! - translation into domain-level [`HealthReport`] values
//!
//! Field-level leniency (optional notes, missing GPS, empty symptom lists) is applied here so
//! that downstream code only ever sees fully-populated domain values.

pub mod payload;
pub mod report;

pub use payload::ReportPayload;
pub use report::{HealthReport, PatientDetail};

/// Errors returned while decoding a reports body.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("unexpected payload shape: expected a report object or a list of reports, got {0}")]
    UnexpectedShape(&'static str),

    #[error("{0}")]
    Schema(String),
}

/// Type alias for Results that can fail with a [`WireError`].
pub type WireResult<T> = Result<T, WireError>;
