//! HTML fragment renderer for the reports view.

use crate::constants::{
    ERROR_PREFIX, LOADING_MESSAGE, NO_REPORTS_MESSAGE, REPORTS_HEADING, REPORTS_SUBHEADING,
};
use crate::view::ViewState;
use reports_wire::{HealthReport, PatientDetail};
use std::fmt::Write;
use swasthya_types::{DisplayTimestamp, DisplayZone, Severity};

/// Render the view state as an HTML fragment.
pub fn render_view(state: &ViewState, zone: DisplayZone) -> String {
    match state {
        ViewState::Loading => render_loading(),
        ViewState::Error(message) => render_error(message),
        ViewState::Loaded(reports) => render_reports(reports, zone),
    }
}

fn render_loading() -> String {
    format!(
        "<div class=\"p-6\" data-view-state=\"loading\"><div class=\"flex items-center justify-center h-64\">\
         <div class=\"spinner\" role=\"status\" aria-label=\"{LOADING_MESSAGE}\"></div></div></div>"
    )
}

fn render_error(message: &str) -> String {
    format!(
        "<div class=\"p-6\" data-view-state=\"error\"><div class=\"card border-red-200\"><div class=\"card-content pt-6\">\
         <div class=\"flex items-center space-x-2 text-red-600\">\
         <span class=\"icon icon-alert\" aria-hidden=\"true\">&#9888;</span>\
         <span>{ERROR_PREFIX}: {}</span></div></div></div></div>",
        escape_html(message)
    )
}

fn render_reports(reports: &[HealthReport], zone: DisplayZone) -> String {
    let mut s = String::new();
    s.push_str("<div class=\"p-6 space-y-6\" data-view-state=\"loaded\">");
    let _ = write!(
        s,
        "<div><h1 class=\"text-3xl font-bold tracking-tight\">{REPORTS_HEADING}</h1>\
         <p class=\"text-muted-foreground\">{REPORTS_SUBHEADING}</p></div>"
    );

    s.push_str("<div class=\"grid gap-6\">");
    for report in reports {
        render_report_card(&mut s, report, zone);
    }
    s.push_str("</div>");

    if reports.is_empty() {
        let _ = write!(
            s,
            "<div class=\"card\"><div class=\"card-content pt-6\">\
             <div class=\"text-center text-gray-500\">{NO_REPORTS_MESSAGE}</div></div></div>"
        );
    }

    s.push_str("</div>");
    s
}

fn render_report_card(s: &mut String, report: &HealthReport, zone: DisplayZone) {
    let severity = Severity::classify(&report.severity);

    s.push_str("<div class=\"card report-card w-full\">");

    // Header: village, household, severity badge.
    let _ = write!(
        s,
        "<div class=\"card-header\"><div class=\"flex items-center justify-between\"><div>\
         <h3 class=\"card-title\"><span class=\"icon icon-pin\" aria-hidden=\"true\">&#128205;</span>\
         <span>{}</span></h3>\
         <p class=\"card-description\">Household ID: {}</p></div>\
         <span class=\"badge {}\" data-severity=\"{}\">{}</span></div></div>",
        escape_html(&report.village),
        escape_html(&report.household_id),
        severity.style_class(),
        severity.as_str(),
        escape_html(&Severity::badge_label(&report.severity)),
    );

    s.push_str("<div class=\"card-content space-y-4\">");

    let _ = write!(
        s,
        "<div class=\"grid grid-cols-3 gap-4\">\
         <span class=\"text-sm\">{}</span>\
         <span class=\"text-sm\">Onset: {}</span>\
         <span class=\"text-sm\">Reported: {}</span></div>",
        escape_html(&report.patient_count_label()),
        escape_html(&report.onset_date),
        escape_html(&DisplayTimestamp::format(&report.report_date, zone)),
    );

    s.push_str("<hr class=\"separator\">");

    if !report.symptoms.is_empty() {
        s.push_str("<div class=\"report-symptoms\"><h4 class=\"font-semibold text-sm mb-2\">Symptoms:</h4>");
        push_symptom_badges(s, &report.symptoms);
        s.push_str("</div>");
    }

    s.push_str("<div class=\"space-y-3\"><h4 class=\"font-semibold text-sm\">Patient Details:</h4>");
    for (index, patient) in report.patient_details.iter().enumerate() {
        render_patient(s, index, patient);
    }
    s.push_str("</div>");

    if let Some(notes) = report.notes_text() {
        let _ = write!(
            s,
            "<hr class=\"separator\"><div class=\"report-notes\"><h4 class=\"font-semibold text-sm mb-2\">Notes:</h4>\
             <p class=\"text-sm text-gray-600\">{}</p></div>",
            escape_html(notes)
        );
    }

    if let Some(line) = report.gps.display_line() {
        let _ = write!(
            s,
            "<hr class=\"separator\"><div class=\"report-gps text-xs text-gray-500\">{line}</div>"
        );
    }

    s.push_str("</div></div>");
}

fn render_patient(s: &mut String, index: usize, patient: &PatientDetail) {
    let _ = write!(
        s,
        "<div class=\"patient bg-gray-50 rounded-lg p-3\"><div class=\"mb-2\">\
         <span class=\"text-sm font-medium\">Patient {}: {} years old, {}</span></div>",
        index + 1,
        escape_html(&patient.age_label()),
        escape_html(&patient.gender),
    );
    push_symptom_badges(s, &patient.symptoms);
    s.push_str("</div>");
}

fn push_symptom_badges(s: &mut String, symptoms: &[String]) {
    s.push_str("<div class=\"flex flex-wrap gap-1\">");
    for symptom in symptoms {
        let _ = write!(
            s,
            "<span class=\"badge badge-secondary text-xs\">{}</span>",
            escape_html(symptom)
        );
    }
    s.push_str("</div>");
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use reports_wire::ReportPayload;

    const RAMPUR: &str = r#"{"village": "Rampur", "householdId": "H1", "patientCount": 2,
        "patientDetails": [
            {"age": 5, "gender": "M", "symptoms": ["fever"]},
            {"age": 7, "gender": "F", "symptoms": ["cough", "fever"]}
        ],
        "symptoms": ["fever", "cough"], "onsetDate": "2024-01-01", "severity": "severe",
        "notes": "", "reportDate": "2024-01-02T10:00:00Z", "gps": {"lat": 0, "lng": 0}}"#;

    fn loaded(body: &str) -> ViewState {
        ViewState::Loaded(ReportPayload::parse(body).expect("decode").into_reports())
    }

    #[test]
    fn renders_rampur_report() {
        let html = render_view(&loaded(RAMPUR), DisplayZone::Utc);

        assert_eq!(html.matches("class=\"card report-card").count(), 1);
        assert!(html.contains("<span>Rampur</span>"));
        assert!(html.contains("Household ID: H1"));
        assert!(html.contains(
            "<span class=\"badge bg-red-100 text-red-800\" data-severity=\"severe\">SEVERE</span>"
        ));
        assert!(html.contains("2 patients"));
        assert!(html.contains("Onset: 2024-01-01"));
        assert!(html.contains("Reported: Jan 2, 2024, 10:00 AM"));
        assert_eq!(html.matches("class=\"patient ").count(), 2);
        assert!(html.contains("Patient 1: 5 years old, M"));
        assert!(html.contains("Patient 2: 7 years old, F"));
        assert_eq!(html.matches("badge-secondary").count(), 5);
        assert!(!html.contains("Notes:"));
        assert!(!html.contains("GPS:"));
        assert!(!html.contains(ERROR_PREFIX));
        assert!(!html.contains(NO_REPORTS_MESSAGE));
    }

    #[test]
    fn renders_notes_and_gps_when_present() {
        let body = RAMPUR
            .replace("\"notes\": \"\"", "\"notes\": \"Water source <well> contaminated\"")
            .replace("{\"lat\": 0, \"lng\": 0}", "{\"lat\": 28.61390, \"lng\": 77.209}");
        let html = render_view(&loaded(&body), DisplayZone::Utc);

        assert!(html.contains("Notes:"));
        assert!(html.contains("Water source &lt;well&gt; contaminated"));
        assert!(html.contains("GPS: 28.6139, 77.2090"));
    }

    #[test]
    fn empty_list_renders_no_reports_message() {
        let html = render_view(&ViewState::Loaded(vec![]), DisplayZone::Utc);
        assert!(html.contains(NO_REPORTS_MESSAGE));
        assert!(html.contains(REPORTS_HEADING));
        assert!(!html.contains("spinner"));
        assert!(!html.contains(ERROR_PREFIX));
    }

    #[test]
    fn error_state_renders_only_error_panel() {
        let html = render_view(
            &ViewState::Error("HTTP error! status: 500".into()),
            DisplayZone::Utc,
        );
        assert!(html.contains("Error loading reports: HTTP error! status: 500"));
        assert!(html.contains("icon-alert"));
        assert!(!html.contains("report-card"));
        assert!(!html.contains(REPORTS_HEADING));
    }

    #[test]
    fn loading_state_renders_spinner_only() {
        let html = render_view(&ViewState::Loading, DisplayZone::Utc);
        assert!(html.contains("spinner"));
        assert!(html.contains("data-view-state=\"loading\""));
        assert!(!html.contains(NO_REPORTS_MESSAGE));
    }

    #[test]
    fn invalid_date_and_unknown_severity_degrade() {
        let body = RAMPUR
            .replace("2024-01-02T10:00:00Z", "not-a-date")
            .replace("\"severity\": \"severe\"", "\"severity\": \"Watch\"");
        let html = render_view(&loaded(&body), DisplayZone::Utc);
        assert!(html.contains("Reported: Invalid Date"));
        assert!(html.contains("bg-gray-100 text-gray-800"));
        assert!(html.contains(">WATCH<"));
    }

    #[test]
    fn escapes_markup_in_fields() {
        let body = RAMPUR.replace("Rampur", "<script>alert('x')</script>");
        let html = render_view(&loaded(&body), DisplayZone::Utc);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }
}
