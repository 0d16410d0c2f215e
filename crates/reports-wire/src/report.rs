//! Health report wire models and translation helpers.
//!
//! Responsibilities:
//! - Define the public domain-level report types used by the view and renderers
//! - Define the wire model matching the producer's camelCase JSON
//! - Translate wire values into domain values, applying field defaults
//!
//! Notes:
//! - Unknown keys are ignored; the producer is an external service and may add fields
//! - `patientCount` is carried as sent and never reconciled with `patientDetails`

use serde::Deserialize;
use swasthya_types::{GpsPoint, Severity};

// ============================================================================
// Public domain-level types
// ============================================================================

/// One submitted health-incident record for a household in a village.
#[derive(Clone, Debug, PartialEq)]
pub struct HealthReport {
    /// Display name of the reporting village.
    pub village: String,

    /// Opaque household identifier. Not unique across reports.
    pub household_id: String,

    /// Patient count as reported by the producer.
    pub patient_count: u32,

    /// Per-patient details in display order.
    pub patient_details: Vec<PatientDetail>,

    /// Report-level symptoms, independent of the per-patient lists.
    pub symptoms: Vec<String>,

    /// Onset date, displayed verbatim.
    pub onset_date: String,

    /// Raw severity value.
    pub severity: String,

    /// Free-text notes. `None` when absent or null.
    pub notes: Option<String>,

    /// Report date, parsed only for display.
    pub report_date: String,

    /// Report location; [`GpsPoint::ORIGIN`] when none was provided.
    pub gps: GpsPoint,
}

/// A single patient within a report.
#[derive(Clone, Debug, PartialEq)]
pub struct PatientDetail {
    pub age: f64,
    pub gender: String,
    pub symptoms: Vec<String>,
}

impl HealthReport {
    /// Severity category of this report.
    pub fn severity_category(&self) -> Severity {
        Severity::classify(&self.severity)
    }

    /// Notes to display, if any. Empty notes are treated as absent.
    pub fn notes_text(&self) -> Option<&str> {
        self.notes.as_deref().filter(|notes| !notes.is_empty())
    }

    /// Whether `patient_count` agrees with the number of patient detail entries.
    pub fn patient_count_matches(&self) -> bool {
        usize::try_from(self.patient_count)
            .map(|count| count == self.patient_details.len())
            .unwrap_or(false)
    }

    /// `"1 patient"` / `"3 patients"`. Counts of zero and one take the singular form.
    pub fn patient_count_label(&self) -> String {
        let suffix = if self.patient_count > 1 { "s" } else { "" };
        format!("{} patient{}", self.patient_count, suffix)
    }
}

impl PatientDetail {
    /// Age as displayed: integral ages have no fractional part.
    pub fn age_label(&self) -> String {
        let magnitude = self.age.abs();
        if magnitude >= 1e21 || (magnitude > 0.0 && magnitude < 1e-6) {
            // Exponent form with an explicit sign, e.g. `1e+21`, `1.5e-7`.
            let exp = format!("{:e}", self.age);
            match exp.split_once('e') {
                Some((mantissa, power)) if !power.starts_with('-') => {
                    format!("{mantissa}e+{power}")
                }
                _ => exp,
            }
        } else {
            // `Display` for f64 already omits the fractional part of integral values.
            format!("{}", self.age)
        }
    }
}

// ============================================================================
// Wire types (internal to the crate)
// ============================================================================

/// Wire representation of one report as published by the producer.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HealthReportWire {
    pub village: String,

    pub household_id: String,

    pub patient_count: u32,

    #[serde(default)]
    pub patient_details: Option<Vec<PatientDetailWire>>,

    #[serde(default)]
    pub symptoms: Option<Vec<String>>,

    pub onset_date: String,

    pub severity: String,

    #[serde(default)]
    pub notes: Option<String>,

    pub report_date: String,

    #[serde(default)]
    pub gps: Option<GpsWire>,
}

/// Wire representation of a patient.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct PatientDetailWire {
    pub age: f64,

    pub gender: String,

    #[serde(default)]
    pub symptoms: Option<Vec<String>>,
}

/// Wire representation of a location.
#[derive(Clone, Copy, Debug, Deserialize)]
pub(crate) struct GpsWire {
    pub lat: f64,
    pub lng: f64,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

/// Convert a wire report to the domain type.
pub(crate) fn wire_to_domain(wire: HealthReportWire) -> HealthReport {
    HealthReport {
        village: wire.village,
        household_id: wire.household_id,
        patient_count: wire.patient_count,
        patient_details: wire
            .patient_details
            .unwrap_or_default()
            .into_iter()
            .map(|p| PatientDetail {
                age: p.age,
                gender: p.gender,
                symptoms: p.symptoms.unwrap_or_default(),
            })
            .collect(),
        symptoms: wire.symptoms.unwrap_or_default(),
        onset_date: wire.onset_date,
        severity: wire.severity,
        notes: wire.notes,
        report_date: wire.report_date,
        gps: wire
            .gps
            .map(|g| GpsPoint::new(g.lat, g.lng))
            .unwrap_or(GpsPoint::ORIGIN),
    }
}
