//! Reports body decoding.
//!
//! The endpoint answers with either a single report object or a list of report objects. The
//! shape is decided once, at the boundary, and kept explicit as [`ReportPayload`].

use crate::report::{wire_to_domain, HealthReportWire};
use crate::{HealthReport, WireError, WireResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A decoded reports body.
#[derive(Clone, Debug, PartialEq)]
pub enum ReportPayload {
    /// The body was a single report object.
    Single(HealthReport),
    /// The body was a list of reports, in producer order.
    Many(Vec<HealthReport>),
}

impl ReportPayload {
    /// Decode a reports body from raw bytes.
    ///
    /// Schema mismatches report the failing JSON path (e.g. `[1].patientDetails[0].age`) using
    /// `serde_path_to_error`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError`] if:
    /// - the body is not valid JSON,
    /// - the JSON root is neither an object nor an array,
    /// - any report does not match the wire schema.
    pub fn from_slice(body: &[u8]) -> WireResult<Self> {
        let root: Value = serde_json::from_slice(body)?;
        Self::from_value(root)
    }

    /// Decode a reports body from text. See [`ReportPayload::from_slice`].
    pub fn parse(body: &str) -> WireResult<Self> {
        Self::from_slice(body.as_bytes())
    }

    /// Decode an already-parsed JSON value.
    pub fn from_value(root: Value) -> WireResult<Self> {
        match root {
            Value::Array(_) => {
                let wires: Vec<HealthReportWire> = decode(root)?;
                Ok(ReportPayload::Many(
                    wires.into_iter().map(wire_to_domain).collect(),
                ))
            }
            Value::Object(_) => {
                let wire: HealthReportWire = decode(root)?;
                Ok(ReportPayload::Single(wire_to_domain(wire)))
            }
            Value::Null => Err(WireError::UnexpectedShape("null")),
            Value::Bool(_) => Err(WireError::UnexpectedShape("a boolean")),
            Value::Number(_) => Err(WireError::UnexpectedShape("a number")),
            Value::String(_) => Err(WireError::UnexpectedShape("a string")),
        }
    }

    /// Normalise into an ordered sequence of reports.
    ///
    /// A list is returned as-is; a single report becomes a one-element list.
    pub fn into_reports(self) -> Vec<HealthReport> {
        match self {
            ReportPayload::Single(report) => vec![report],
            ReportPayload::Many(reports) => reports,
        }
    }

    /// Number of reports the payload normalises to.
    pub fn len(&self) -> usize {
        match self {
            ReportPayload::Single(_) => 1,
            ReportPayload::Many(reports) => reports.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn decode<T: DeserializeOwned>(root: Value) -> WireResult<T> {
    serde_path_to_error::deserialize::<_, T>(root).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        let path = if path.is_empty() || path == "." {
            "<root>"
        } else {
            path.as_str()
        };
        WireError::Schema(format!("report schema mismatch at {path}: {source}"))
    })
}
