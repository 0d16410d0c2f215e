//! Where reports come from.
//!
//! A [`ReportSource`] performs exactly one retrieval per call and returns the decoded payload.
//! Sources do not cache, retry, or de-duplicate; the view decides when to call them.

mod file;
mod http;

pub use file::FileReportSource;
pub use http::HttpReportSource;

use crate::error::LoadResult;
use reports_wire::ReportPayload;
use std::future::Future;

/// One-shot provider of a reports payload.
pub trait ReportSource: Send + Sync {
    /// Retrieve and decode the current reports payload.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::LoadError`] for transport, status, I/O or decode failures.
    fn fetch(&self) -> impl Future<Output = LoadResult<ReportPayload>> + Send;

    /// Human-readable description used in logs.
    fn describe(&self) -> String;
}
