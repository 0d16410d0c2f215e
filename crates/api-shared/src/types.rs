//! JSON response types.
//!
//! These mirror the domain report types in the producer's camelCase shape, plus the derived
//! presentation values (severity category, formatted report date, GPS presence) so API clients
//! do not have to re-implement them.

use serde::{Deserialize, Serialize};
use swasthya_core::{
    DisplayTimestamp, DisplayZone, HealthReport, PatientDetail, Severity, ViewState,
};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GpsRes {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientDetailRes {
    pub age: f64,
    pub gender: String,
    pub symptoms: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportRes {
    pub village: String,
    pub household_id: String,
    pub patient_count: u32,
    pub patient_details: Vec<PatientDetailRes>,
    pub symptoms: Vec<String>,
    pub onset_date: String,
    pub severity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub report_date: String,
    pub gps: GpsRes,

    /// `mild`, `moderate`, `severe` or `unknown`.
    pub severity_category: String,
    /// Report date as displayed, or `Invalid Date`.
    pub report_date_display: String,
    /// False for the `(0, 0)` sentinel.
    pub gps_present: bool,
    pub patient_count_matches: bool,
}

/// The settled state of one reports view mount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ViewStateRes {
    /// `loading`, `error` or `loaded`.
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub reports: Vec<ReportRes>,
}

impl From<&PatientDetail> for PatientDetailRes {
    fn from(patient: &PatientDetail) -> Self {
        Self {
            age: patient.age,
            gender: patient.gender.clone(),
            symptoms: patient.symptoms.clone(),
        }
    }
}

impl ReportRes {
    pub fn from_report(report: &HealthReport, zone: DisplayZone) -> Self {
        Self {
            village: report.village.clone(),
            household_id: report.household_id.clone(),
            patient_count: report.patient_count,
            patient_details: report.patient_details.iter().map(Into::into).collect(),
            symptoms: report.symptoms.clone(),
            onset_date: report.onset_date.clone(),
            severity: report.severity.clone(),
            notes: report.notes.clone(),
            report_date: report.report_date.clone(),
            gps: GpsRes {
                lat: report.gps.lat,
                lng: report.gps.lng,
            },
            severity_category: Severity::classify(&report.severity).as_str().to_string(),
            report_date_display: DisplayTimestamp::format(&report.report_date, zone),
            gps_present: report.gps.is_present(),
            patient_count_matches: report.patient_count_matches(),
        }
    }
}

impl ViewStateRes {
    pub fn from_state(state: &ViewState, zone: DisplayZone) -> Self {
        let (message, reports) = match state {
            ViewState::Loading => (None, Vec::new()),
            ViewState::Error(message) => (Some(message.clone()), Vec::new()),
            ViewState::Loaded(reports) => (
                None,
                reports
                    .iter()
                    .map(|r| ReportRes::from_report(r, zone))
                    .collect(),
            ),
        };

        Self {
            state: state.kind().to_string(),
            message,
            reports,
        }
    }
}
