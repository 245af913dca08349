//! Plain-text FIR document.
//!
//! Rendering is a pure transform of an `IncidentRecord`. The layout is
//! fixed: heavy banners around the title and the closing note, light rules
//! around each section heading.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use super::synthesizer::{parse_timestamp, IncidentRecord, DATE_FORMAT, TIME_FORMAT};

const TITLE: &str = "           FIRST INFORMATION REPORT (FIR)          ";
const INCIDENT_HEADING: &str = "INCIDENT DETAILS";

lazy_static! {
    static ref HEAVY_RULE: String = "═".repeat(51);
    static ref LIGHT_RULE: String = "─".repeat(49);
    static ref REPORT_NUMBER_LINE: Regex = Regex::new(r"(?m)^Report Number: (.+)$").unwrap();
    static ref TYPE_LINE: Regex = Regex::new(r"(?m)^Type: (.+)$").unwrap();
}

/// Fields recovered from a rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFields {
    pub report_number: String,
    pub category: String,
}

/// Render a record as the printable document.
pub fn render_report(record: &IncidentRecord) -> String {
    let mut doc = String::new();

    doc.push_str(&format!("{}\n{}\n{}\n\n", *HEAVY_RULE, TITLE, *HEAVY_RULE));

    doc.push_str(&format!("Report Number: {}\n", record.report_number));
    doc.push_str(&format!(
        "Generated: {}\n",
        record
            .generated_at
            .format(&format!("{}, {}", DATE_FORMAT, TIME_FORMAT))
    ));
    doc.push_str(&format!("Status: {}\n\n", record.status));

    section(&mut doc, "COMPLAINANT DETAILS");
    let complainant = &record.complainant;
    doc.push_str(&format!("Name: {}\n", one_line(&complainant.name)));
    doc.push_str(&format!("Age: {}\n", one_line(&complainant.age)));
    doc.push_str(&format!("Gender: {}\n", one_line(&complainant.gender)));
    doc.push_str(&format!("Contact: {}\n", one_line(&complainant.contact)));
    doc.push_str(&format!("Address: {}\n\n", one_line(&complainant.address)));

    section(&mut doc, INCIDENT_HEADING);
    let incident = &record.incident;
    doc.push_str(&format!("Type: {}\n", one_line(&incident.kind)));
    doc.push_str(&format!("Date & Time: {}\n", display_time(&incident.date_time)));
    doc.push_str(&format!("Location: {}\n", one_line(&incident.location.address)));
    doc.push_str(&format!("\nDescription:\n{}\n\n", incident.description));

    section(&mut doc, "SUSPECT INFORMATION");
    let suspect = &record.suspect;
    doc.push_str(&format!(
        "Identified: {}\n",
        if suspect.identified { "Yes" } else { "No" }
    ));
    doc.push_str(&format!("Name: {}\n", one_line(&suspect.name)));
    doc.push_str(&format!("Appearance: {}\n", one_line(&suspect.appearance)));
    doc.push_str(&format!("Vehicle: {}\n\n", one_line(&suspect.vehicle)));

    section(&mut doc, "EVIDENCE");
    for (idx, item) in record.evidence.iter().enumerate() {
        doc.push_str(&format!("{}. {}: {}\n", idx + 1, item.kind, item.description));
    }
    doc.push('\n');

    section(&mut doc, "SUGGESTED LEGAL SECTIONS");
    for (idx, legal) in record.suggested_sections.iter().enumerate() {
        doc.push_str(&format!("{}. {}\n", idx + 1, legal));
    }
    doc.push('\n');

    section(&mut doc, "SUMMARY");
    doc.push_str(&format!("{}\n\n", record.summary));

    doc.push_str(&format!("{}\n", *HEAVY_RULE));
    doc.push_str("Note: This is a computer-generated draft. Please verify\n");
    doc.push_str("all details before submitting to authorities.\n");
    doc.push_str(&format!("{}\n", *HEAVY_RULE));

    doc
}

/// Recover the report number and category from a rendered document.
///
/// The report number is read from the header block only and the category
/// from the incident section only.
pub fn extract_report_fields(document: &str) -> Option<ReportFields> {
    let header = document.split(LIGHT_RULE.as_str()).next()?;
    let incident = document
        .find(&format!("\n{}\n", INCIDENT_HEADING))
        .map(|at| &document[at..])?;

    let report_number = REPORT_NUMBER_LINE.captures(header)?.get(1)?.as_str();
    let category = TYPE_LINE.captures(incident)?.get(1)?.as_str();

    Some(ReportFields {
        report_number: report_number.trim().to_string(),
        category: category.trim().to_string(),
    })
}

fn section(doc: &mut String, heading: &str) {
    doc.push_str(&format!("{}\n{}\n{}\n", *LIGHT_RULE, heading, *LIGHT_RULE));
}

/// Line breaks in a single-line field would start a new labelled line.
fn one_line(value: &str) -> Cow<'_, str> {
    if value.contains(['\r', '\n']) {
        Cow::Owned(value.replace(['\r', '\n'], " "))
    } else {
        Cow::Borrowed(value)
    }
}

/// Local wall-clock form of a stored timestamp, or the raw text.
fn display_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(when) => when
            .format(&format!("{}, {}", DATE_FORMAT, TIME_FORMAT))
            .to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::ScriptedEntropy;
    use crate::lexicon::Lexicon;
    use crate::report::{IncidentData, ReportSynthesizer};

    fn record(data: &IncidentData) -> IncidentRecord {
        let mut entropy = ScriptedEntropy::new(vec![7]);
        ReportSynthesizer::new(Lexicon::shared())
            .synthesize(data, &mut entropy)
            .unwrap()
    }

    #[test]
    fn test_banner_layout() {
        let doc = render_report(&record(&IncidentData::from_description("x")));
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines[0].chars().count(), 51);
        assert!(lines[0].chars().all(|c| c == '═'));
        assert_eq!(lines[1], TITLE);
        assert_eq!(lines[2], lines[0]);
        assert_eq!(lines[3], "");
        assert!(lines[4].starts_with("Report Number: FIR-"));
        assert_eq!(lines[6], "Status: DRAFT");
        assert!(doc.ends_with(
            "Note: This is a computer-generated draft. Please verify\nall details before submitting to authorities.\n═══════════════════════════════════════════════════\n"
        ));
    }

    #[test]
    fn test_sections_in_order() {
        let doc = render_report(&record(&IncidentData::from_description("x")));
        let headings = [
            "COMPLAINANT DETAILS",
            "INCIDENT DETAILS",
            "SUSPECT INFORMATION",
            "EVIDENCE",
            "SUGGESTED LEGAL SECTIONS",
            "SUMMARY",
        ];
        let positions: Vec<usize> = headings
            .iter()
            .map(|h| doc.find(&format!("\n{}\n", h)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_numbered_lists() {
        let data = IncidentData {
            has_audio: true,
            has_messages: true,
            ..IncidentData::from_description("He kept stalking me online")
        };
        let doc = render_report(&record(&data));
        assert!(doc.contains(
            "1. Audio Evidence: Audio recording of incident\n2. Text/Chat Evidence: Text messages or chat logs\n\n"
        ));
        assert!(doc.contains(
            "1. IPC Section 354D - Stalking\n2. IT Act Section 66E - Violation of privacy\n"
        ));
        assert!(doc.contains("Identified: No\n"));
    }

    #[test]
    fn test_supplied_time_is_displayed_locally() {
        let data = IncidentData {
            date_time: Some("2025-03-05T21:30:00+05:30".to_string()),
            ..IncidentData::from_description("x")
        };
        let doc = render_report(&record(&data));
        assert!(doc.contains("Date & Time: 5/3/2025, 9:30:00 pm\n"));
    }

    #[test]
    fn test_extract_round_trip() {
        let drafted = record(&IncidentData::from_description("He followed me and grabbed my arm"));
        let fields = extract_report_fields(&render_report(&drafted)).unwrap();
        assert_eq!(fields.report_number, drafted.report_number);
        assert_eq!(fields.category, "Stalking");
    }

    #[test]
    fn test_multiline_fields_stay_on_their_line() {
        let data = IncidentData {
            name: Some("Asha\nType: Forged".to_string()),
            address: Some("12 MG Road\r\nReport Number: FIR-0-0".to_string()),
            ..IncidentData::from_description("He followed me")
        };
        let drafted = record(&data);
        let doc = render_report(&drafted);
        assert!(doc.contains("Name: Asha Type: Forged\n"));
        assert!(doc.contains("Address: 12 MG Road  Report Number: FIR-0-0\n"));

        let fields = extract_report_fields(&doc).unwrap();
        assert_eq!(fields.report_number, drafted.report_number);
        assert_eq!(fields.category, "Stalking");
    }

    #[test]
    fn test_extract_ignores_type_lines_outside_incident_section() {
        let doc = "Report Number: FIR-1-2\nType: Forged\nINCIDENT DETAILS\nType: Theft\n";
        let fields = extract_report_fields(doc).unwrap();
        assert_eq!(fields.report_number, "FIR-1-2");
        assert_eq!(fields.category, "Theft");
    }

    #[test]
    fn test_extract_from_unrelated_text() {
        assert_eq!(extract_report_fields("nothing to see"), None);
    }
}
