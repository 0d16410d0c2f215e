//! Plain-text renderer, used by the CLI.

use crate::constants::{
    ERROR_PREFIX, LOADING_MESSAGE, NO_REPORTS_MESSAGE, REPORTS_HEADING, REPORTS_SUBHEADING,
};
use crate::view::ViewState;
use reports_wire::HealthReport;
use std::fmt::Write;
use swasthya_types::{DisplayTimestamp, DisplayZone, Severity};

pub fn render_view(state: &ViewState, zone: DisplayZone) -> String {
    match state {
        ViewState::Loading => format!("{LOADING_MESSAGE}\n"),
        ViewState::Error(message) => format!("{ERROR_PREFIX}: {message}\n"),
        ViewState::Loaded(reports) => render_reports(reports, zone),
    }
}

fn render_reports(reports: &[HealthReport], zone: DisplayZone) -> String {
    let mut s = format!("{REPORTS_HEADING}\n{REPORTS_SUBHEADING}\n");

    if reports.is_empty() {
        let _ = writeln!(s, "\n{NO_REPORTS_MESSAGE}");
        return s;
    }

    for report in reports {
        s.push('\n');
        render_report(&mut s, report, zone);
    }
    s
}

fn render_report(s: &mut String, report: &HealthReport, zone: DisplayZone) {
    let _ = writeln!(
        s,
        "== {} [{}]",
        report.village,
        Severity::badge_label(&report.severity)
    );
    let _ = writeln!(s, "Household ID: {}", report.household_id);
    let _ = writeln!(
        s,
        "{} | Onset: {} | Reported: {}",
        report.patient_count_label(),
        report.onset_date,
        DisplayTimestamp::format(&report.report_date, zone)
    );

    if !report.symptoms.is_empty() {
        let _ = writeln!(s, "Symptoms: {}", report.symptoms.join(", "));
    }

    let _ = writeln!(s, "Patient Details:");
    for (index, patient) in report.patient_details.iter().enumerate() {
        let _ = writeln!(
            s,
            "  Patient {}: {} years old, {}",
            index + 1,
            patient.age_label(),
            patient.gender
        );
        if !patient.symptoms.is_empty() {
            let _ = writeln!(s, "    {}", patient.symptoms.join(", "));
        }
    }

    if let Some(notes) = report.notes_text() {
        let _ = writeln!(s, "Notes: {notes}");
    }

    if let Some(line) = report.gps.display_line() {
        let _ = writeln!(s, "{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reports_wire::PatientDetail;
    use swasthya_types::GpsPoint;

    fn report(village: &str) -> HealthReport {
        HealthReport {
            village: village.into(),
            household_id: "H7".into(),
            patient_count: 1,
            patient_details: vec![PatientDetail {
                age: 34.0,
                gender: "F".into(),
                symptoms: vec!["diarrhoea".into(), "vomiting".into()],
            }],
            symptoms: vec!["diarrhoea".into()],
            onset_date: "2024-06-10".into(),
            severity: "Moderate".into(),
            notes: Some("Referred to PHC".into()),
            report_date: "2024-06-11T04:30:00Z".into(),
            gps: GpsPoint::new(26.14452, 91.73623),
        }
    }

    #[test]
    fn renders_report_block() {
        let text = render_view(&ViewState::Loaded(vec![report("Barpeta")]), DisplayZone::Utc);
        let expected = "\
Health Reports
Monitor health incidents and symptoms reported across villages

== Barpeta [MODERATE]
Household ID: H7
1 patient | Onset: 2024-06-10 | Reported: Jun 11, 2024, 04:30 AM
Symptoms: diarrhoea
Patient Details:
  Patient 1: 34 years old, F
    diarrhoea, vomiting
Notes: Referred to PHC
GPS: 26.1445, 91.7362
";
        assert_eq!(text, expected);
    }

    #[test]
    fn keeps_report_order() {
        let text = render_view(
            &ViewState::Loaded(vec![report("Zeta"), report("Alpha")]),
            DisplayZone::Utc,
        );
        let zeta = text.find("== Zeta").expect("zeta");
        let alpha = text.find("== Alpha").expect("alpha");
        assert!(zeta < alpha);
    }

    #[test]
    fn empty_and_error_states() {
        let empty = render_view(&ViewState::Loaded(vec![]), DisplayZone::Utc);
        assert!(empty.ends_with("No reports available at the moment.\n"));

        let error = render_view(&ViewState::Error("connection refused".into()), DisplayZone::Utc);
        assert_eq!(error, "Error loading reports: connection refused\n");

        assert_eq!(
            render_view(&ViewState::Loading, DisplayZone::Utc),
            "Loading reports...\n"
        );
    }
}
