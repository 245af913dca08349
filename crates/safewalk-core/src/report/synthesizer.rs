//! Report synthesizer: drafts an FIR from incident fields.
//!
//! Only the description is mandatory. Everything else is filled from the
//! caller's fields or a placeholder, and several sections are read from the
//! description itself:
//!
//! 1. Category: first category table entry with a hit
//! 2. Suspect appearance: fixed cues, unless the caller supplied one
//! 3. Legal sections: every rule with a hit contributes
//!
//! The record starts as `DRAFT`; nothing here moves it on.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use super::incident::{present, IncidentData};
use crate::entropy::Entropy;
use crate::lenses::patterns::contains_any;
use crate::lexicon::Lexicon;
use crate::types::Tier;
use crate::TriageError;

/// Category when no table entry matched.
pub const FALLBACK_CATEGORY: &str = "General Safety Concern";

const NO_SECTIONS: &str = "To be determined based on investigation";
const NO_APPEARANCE: &str = "No clear description available";
const SUMMARY_EXCERPT_CHARS: usize = 150;

/// Display format for dates in drafted and rendered reports.
pub(crate) const DATE_FORMAT: &str = "%-d/%-m/%Y";
pub(crate) const TIME_FORMAT: &str = "%-I:%M:%S %P";

/// Appearance cues: any keyword present appends the phrase.
const APPEARANCE_CUES: [(&[&str], &str); 8] = [
    (&["tall"], "Tall build"),
    (&["short"], "Short build"),
    (&["black shirt", "dark clothes"], "Dark clothing"),
    (&["helmet"], "Wearing helmet"),
    (&["mask"], "Face covered"),
    (&["young"], "Approximately 20-30 years"),
    (&["middle aged"], "Approximately 35-50 years"),
    (&["old"], "Approximately 50+ years"),
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportStatus {
    Draft,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportStatus::Draft => f.write_str("DRAFT"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Complainant {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub contact: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncidentLocation {
    pub address: String,
    pub landmark: String,
    pub area: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncidentDetails {
    /// Incident category
    #[serde(rename = "type")]
    pub kind: String,

    /// As supplied, or the drafting time in RFC 3339
    pub date_time: String,

    pub location: IncidentLocation,

    /// Narrative built from time, place, description and context
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuspectProfile {
    pub identified: bool,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub appearance: String,
    pub vehicle: String,
    pub weapons: String,
    pub additional_info: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvidenceItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub available: bool,
}

impl EvidenceItem {
    fn available(kind: &str, description: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            description: description.into(),
            available: true,
        }
    }
}

/// A suggested legal citation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct LegalSection(pub String);

impl fmt::Display for LegalSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A drafted First Information Report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    /// `FIR-<unix millis>-<0..999>`
    pub report_number: String,
    pub generated_at: DateTime<Utc>,
    pub status: ReportStatus,
    pub complainant: Complainant,
    pub incident: IncidentDetails,
    pub suspect: SuspectProfile,
    pub evidence: Vec<EvidenceItem>,
    pub witnesses: Vec<String>,
    pub injuries: String,
    pub suggested_sections: Vec<LegalSection>,
    pub summary: String,
    pub actions_taken: Vec<String>,
    pub additional_notes: String,
}

/// Drafts FIRs against a set of lexicon tables.
pub struct ReportSynthesizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> ReportSynthesizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Draft a record. Fails only when the description is missing or blank.
    pub fn synthesize(
        &self,
        data: &IncidentData,
        entropy: &mut dyn Entropy,
    ) -> Result<IncidentRecord, TriageError> {
        let description = data
            .description()
            .ok_or_else(|| TriageError::MissingField("description".to_string()))?;
        let content = description.to_lowercase();

        let generated_at = Utc::now();
        let report_number = format!(
            "FIR-{}-{}",
            generated_at.timestamp_millis(),
            entropy.below(1000)
        );
        let category = self.categorize(&content);

        let record = IncidentRecord {
            report_number,
            generated_at,
            status: ReportStatus::Draft,
            complainant: Complainant {
                name: or_placeholder(&data.name, "[Name]"),
                age: or_placeholder(&data.age, "[Age]"),
                gender: or_placeholder(&data.gender, "Female"),
                contact: or_placeholder(&data.contact, "[Contact Number]"),
                address: or_placeholder(&data.address, "[Address]"),
            },
            incident: IncidentDetails {
                kind: category.to_string(),
                date_time: present(&data.date_time)
                    .map(str::to_string)
                    .unwrap_or_else(|| generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
                location: IncidentLocation {
                    address: or_placeholder(&data.location, "[Location]"),
                    landmark: or_placeholder(&data.landmark, "N/A"),
                    area: or_placeholder(&data.area, "N/A"),
                    city: or_placeholder(&data.city, "N/A"),
                    state: or_placeholder(&data.state, "N/A"),
                    pincode: or_placeholder(&data.pincode, "N/A"),
                },
                description: narrative(data, description),
            },
            suspect: suspect_profile(data, &content),
            evidence: compile_evidence(data),
            witnesses: data.witnesses.clone(),
            injuries: or_placeholder(&data.injuries, "None reported"),
            suggested_sections: self.suggest_sections(&content),
            summary: summary(data, description, category),
            actions_taken: data.actions_taken.clone(),
            additional_notes: or_placeholder(&data.notes, "None"),
        };

        info!(
            report_number = %record.report_number,
            category = %record.incident.kind,
            sections = record.suggested_sections.len(),
            "report drafted"
        );

        Ok(record)
    }

    /// First category with a hit, or the fallback.
    pub fn categorize(&self, content: &str) -> &'a str {
        let lexicon: &'a Lexicon = self.lexicon;
        lexicon
            .categories
            .iter()
            .find(|rule| contains_any(content, &rule.keywords))
            .map(|rule| rule.category.as_str())
            .unwrap_or(FALLBACK_CATEGORY)
    }

    /// Sections from every legal rule with a hit, in table order.
    pub fn suggest_sections(&self, content: &str) -> Vec<LegalSection> {
        let sections: Vec<LegalSection> = self
            .lexicon
            .legal
            .iter()
            .filter(|rule| contains_any(content, &rule.keywords))
            .flat_map(|rule| rule.sections.iter().cloned().map(LegalSection))
            .collect();

        if sections.is_empty() {
            vec![LegalSection(NO_SECTIONS.to_string())]
        } else {
            sections
        }
    }
}

fn or_placeholder(field: &Option<String>, placeholder: &str) -> String {
    present(field).unwrap_or(placeholder).to_string()
}

/// Parse a caller-supplied timestamp into its local wall-clock time.
pub(crate) fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

fn narrative(data: &IncidentData, description: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(raw) = present(&data.date_time) {
        match parse_timestamp(raw) {
            Some(when) => parts.push(format!(
                "On {} at approximately {}",
                when.format(DATE_FORMAT),
                when.format(TIME_FORMAT)
            )),
            None => parts.push(format!("On {}", raw)),
        }
    }

    if let Some(location) = present(&data.location) {
        parts.push(format!("at {}", location));
    }

    parts.push(format!("\n\nIncident Description:\n{}", description));

    if data.is_night {
        parts.push("\n\nNote: Incident occurred during night hours.".to_string());
    }
    if data.is_isolated {
        parts.push("Location was isolated with minimal public presence.".to_string());
    }
    if !data.witnesses.is_empty() {
        parts.push(format!(
            "\n\nWitnesses present: {} person(s).",
            data.witnesses.len()
        ));
    }
    if !data.actions_taken.is_empty() {
        parts.push(format!(
            "\n\nImmediate Actions Taken:\n- {}",
            data.actions_taken.join("\n- ")
        ));
    }

    parts.join(" ")
}

/// Appearance cues read from the description.
pub fn appearance_from_description(content: &str) -> String {
    let cues: Vec<&str> = APPEARANCE_CUES
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|k| content.contains(k)))
        .map(|(_, phrase)| *phrase)
        .collect();

    if cues.is_empty() {
        NO_APPEARANCE.to_string()
    } else {
        cues.join(", ")
    }
}

fn suspect_profile(data: &IncidentData, content: &str) -> SuspectProfile {
    SuspectProfile {
        identified: data.suspect_identified,
        name: or_placeholder(&data.suspect_name, "Unknown"),
        age: or_placeholder(&data.suspect_age, "Unknown"),
        gender: or_placeholder(&data.suspect_gender, "Unknown"),
        appearance: present(&data.suspect_appearance)
            .map(str::to_string)
            .unwrap_or_else(|| appearance_from_description(content)),
        vehicle: or_placeholder(&data.suspect_vehicle, "N/A"),
        weapons: or_placeholder(&data.suspect_weapons, "None reported"),
        additional_info: or_placeholder(&data.suspect_additional_info, "N/A"),
    }
}

fn compile_evidence(data: &IncidentData) -> Vec<EvidenceItem> {
    let mut evidence = Vec::new();

    if data.has_photos {
        evidence.push(EvidenceItem::available(
            "Visual Evidence",
            "Photographs/images of incident scene or suspect",
        ));
    }
    if data.has_audio {
        evidence.push(EvidenceItem::available(
            "Audio Evidence",
            "Audio recording of incident",
        ));
    }
    if data.has_messages {
        evidence.push(EvidenceItem::available(
            "Text/Chat Evidence",
            "Text messages or chat logs",
        ));
    }
    if data.has_cctv {
        evidence.push(EvidenceItem::available(
            "CCTV Footage",
            "Available from location/nearby cameras",
        ));
    }
    if data.has_medical_report {
        evidence.push(EvidenceItem::available(
            "Medical Report",
            "Medical examination report documenting injuries",
        ));
    }
    if let Some(location) = present(&data.location) {
        evidence.push(EvidenceItem::available(
            "Location Data",
            format!("GPS coordinates: {}", location),
        ));
    }

    if evidence.is_empty() {
        evidence.push(EvidenceItem {
            kind: "None".to_string(),
            description: "No physical evidence available at this time".to_string(),
            available: false,
        });
    }
    evidence
}

fn summary(data: &IncidentData, description: &str, category: &str) -> String {
    let severity = data.severity.unwrap_or(Tier::Medium);
    let location = present(&data.location).unwrap_or("undisclosed location");

    let excerpt: String = description.chars().take(SUMMARY_EXCERPT_CHARS).collect();
    let ellipsis = if description.chars().count() > SUMMARY_EXCERPT_CHARS {
        "..."
    } else {
        ""
    };

    let mut summary = format!(
        "This is a {} severity incident of {} that occurred at {}. \
         The complainant has reported: {}{}. ",
        severity, category, location, excerpt, ellipsis
    );

    if !data.actions_taken.is_empty() {
        summary.push_str(&format!(
            "Immediate actions taken include: {}. ",
            data.actions_taken.join(", ")
        ));
    }

    summary.push_str("Further investigation required.");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::ScriptedEntropy;

    fn draft(data: &IncidentData) -> IncidentRecord {
        let mut entropy = ScriptedEntropy::new(vec![42]);
        ReportSynthesizer::new(Lexicon::shared())
            .synthesize(data, &mut entropy)
            .unwrap()
    }

    #[test]
    fn test_description_only_uses_placeholders() {
        let record = draft(&IncidentData::from_description("Someone shouted at me"));
        assert_eq!(record.status, ReportStatus::Draft);
        assert_eq!(record.complainant.name, "[Name]");
        assert_eq!(record.complainant.gender, "Female");
        assert_eq!(record.incident.location.address, "[Location]");
        assert_eq!(record.incident.location.pincode, "N/A");
        assert_eq!(record.injuries, "None reported");
        assert_eq!(record.additional_notes, "None");
        assert_eq!(record.suspect.weapons, "None reported");
        assert_eq!(record.incident.kind, FALLBACK_CATEGORY);
        assert_eq!(record.evidence.len(), 1);
        assert!(!record.evidence[0].available);
        assert_eq!(record.suggested_sections, vec![LegalSection(NO_SECTIONS.to_string())]);
        assert!(record.report_number.starts_with("FIR-"));
        assert!(record.report_number.ends_with("-42"));
    }

    #[test]
    fn test_missing_description_fails() {
        let mut entropy = ScriptedEntropy::new(vec![0]);
        let result = ReportSynthesizer::new(Lexicon::shared())
            .synthesize(&IncidentData::default(), &mut entropy);
        match result {
            Err(TriageError::MissingField(field)) => assert_eq!(field, "description"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_followed_and_grabbed_is_stalking() {
        let record = draft(&IncidentData::from_description("He followed me and grabbed my arm"));
        assert_eq!(record.incident.kind, "Stalking");
        assert_eq!(
            record.suggested_sections,
            vec![LegalSection("IPC Section 354D - Stalking".to_string())]
        );
    }

    #[test]
    fn test_multiple_legal_rules_fire() {
        let synthesizer = ReportSynthesizer::new(Lexicon::shared());
        let sections = synthesizer.suggest_sections("he harassed me online and followed me");
        assert_eq!(sections.len(), 5);
        assert_eq!(sections[0].0, "IPC Section 354A - Sexual Harassment");
        assert_eq!(sections[4].0, "IPC Section 354C - Voyeurism");
    }

    #[test]
    fn test_appearance_cues() {
        assert_eq!(
            appearance_from_description("a tall man in a black shirt wearing a helmet"),
            "Tall build, Dark clothing, Wearing helmet"
        );
        assert_eq!(appearance_from_description("someone"), NO_APPEARANCE);
    }

    #[test]
    fn test_supplied_appearance_wins() {
        let data = IncidentData {
            suspect_appearance: Some("Red jacket".to_string()),
            ..IncidentData::from_description("a tall man")
        };
        assert_eq!(draft(&data).suspect.appearance, "Red jacket");
    }

    #[test]
    fn test_narrative_segments() {
        let data = IncidentData {
            date_time: Some("2025-03-05T21:30:00+05:30".to_string()),
            location: Some("MG Road".to_string()),
            is_night: true,
            is_isolated: true,
            witnesses: vec!["Ravi".to_string(), "Meena".to_string()],
            actions_taken: vec!["Called 112".to_string(), "Took photos".to_string()],
            ..IncidentData::from_description("A man blocked my way")
        };
        let record = draft(&data);
        assert_eq!(
            record.incident.description,
            "On 5/3/2025 at approximately 9:30:00 pm at MG Road \n\nIncident Description:\nA man blocked my way \
             \n\nNote: Incident occurred during night hours. Location was isolated with minimal public presence. \
             \n\nWitnesses present: 2 person(s). \n\nImmediate Actions Taken:\n- Called 112\n- Took photos"
        );
    }

    #[test]
    fn test_unparseable_date_kept_raw() {
        let data = IncidentData {
            date_time: Some("last Tuesday evening".to_string()),
            ..IncidentData::from_description("x")
        };
        let record = draft(&data);
        assert_eq!(record.incident.date_time, "last Tuesday evening");
        assert!(record.incident.description.starts_with("On last Tuesday evening \n\n"));
    }

    #[test]
    fn test_evidence_items_in_order() {
        let data = IncidentData {
            has_photos: true,
            has_cctv: true,
            location: Some("Park Street".to_string()),
            ..IncidentData::from_description("x")
        };
        let kinds: Vec<String> = draft(&data).evidence.into_iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec!["Visual Evidence", "CCTV Footage", "Location Data"]);
    }

    #[test]
    fn test_summary_truncates_long_description() {
        let long = "a".repeat(200);
        let data = IncidentData {
            actions_taken: vec!["Informed family".to_string()],
            severity: Some(Tier::High),
            ..IncidentData::from_description(long)
        };
        let summary = draft(&data).summary;
        assert!(summary.starts_with(
            "This is a HIGH severity incident of General Safety Concern that occurred at undisclosed location."
        ));
        assert!(summary.contains(&format!("{}...", "a".repeat(150))));
        assert!(summary.ends_with(
            "Immediate actions taken include: Informed family. Further investigation required."
        ));
    }

    #[test]
    fn test_summary_defaults_to_medium() {
        let summary = draft(&IncidentData::from_description("short note")).summary;
        assert!(summary.starts_with("This is a MEDIUM severity incident"));
        assert!(summary.contains("reported: short note. Further"));
    }
}
