//! # Swasthya Types
//!
//! Small, total conversions for individual report fields.
//!
//! Every function in this crate accepts any input and degrades to a safe default instead of
//! failing. Field-level defects (an unknown severity, an unparseable date, a missing location)
//! are a display concern and must never escalate into a view-level error.

pub mod gps;
pub mod severity;
pub mod timestamp;

pub use gps::GpsPoint;
pub use severity::Severity;
pub use timestamp::{DisplayTimestamp, DisplayZone, INVALID_DATE};

/// Errors raised when parsing configuration values into field types.
#[derive(Debug, thiserror::Error)]
pub enum TypesError {
    /// The display zone name was not recognised.
    #[error("unknown display zone '{0}' (expected 'utc' or 'local')")]
    UnknownDisplayZone(String),
}
