//! Local file report source, for offline rendering of a saved endpoint response.

use super::ReportSource;
use crate::error::LoadResult;
use reports_wire::ReportPayload;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Reads a reports body from a JSON file on disk.
#[derive(Clone, Debug)]
pub struct FileReportSource {
    path: PathBuf,
}

impl FileReportSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSource for FileReportSource {
    fn fetch(&self) -> impl Future<Output = LoadResult<ReportPayload>> + Send {
        async move {
            let body = tokio::fs::read(&self.path).await?;
            Ok(ReportPayload::from_slice(&body)?)
        }
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
