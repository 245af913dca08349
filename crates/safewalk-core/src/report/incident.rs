//! Caller-supplied incident fields.

use serde::{Deserialize, Serialize};

use super::schema::validate_incident_schema;
use crate::types::Tier;
use crate::TriageError;

/// Incident fields for drafting an FIR.
///
/// Only `description` is required; every other field falls back to a
/// placeholder in the drafted record. Blank strings count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct IncidentData {
    // Complainant
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub contact: Option<String>,
    pub address: Option<String>,

    // When and where
    pub date_time: Option<String>,
    pub location: Option<String>,
    pub landmark: Option<String>,
    pub area: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,

    // What happened
    pub description: Option<String>,
    pub is_night: bool,
    pub is_isolated: bool,
    pub witnesses: Vec<String>,
    pub injuries: Option<String>,
    pub actions_taken: Vec<String>,
    pub notes: Option<String>,

    /// Defaults to MEDIUM in the summary
    pub severity: Option<Tier>,

    // Suspect
    pub suspect_identified: bool,
    pub suspect_name: Option<String>,
    pub suspect_age: Option<String>,
    pub suspect_gender: Option<String>,
    /// Overrides appearance cues read from the description
    pub suspect_appearance: Option<String>,
    pub suspect_vehicle: Option<String>,
    pub suspect_weapons: Option<String>,
    pub suspect_additional_info: Option<String>,

    // Evidence on hand
    #[serde(alias = "photos")]
    pub has_photos: bool,
    #[serde(alias = "audio")]
    pub has_audio: bool,
    #[serde(alias = "messages")]
    pub has_messages: bool,
    #[serde(rename = "hasCCTV", alias = "cctv")]
    pub has_cctv: bool,
    #[serde(alias = "medicalReport")]
    pub has_medical_report: bool,
}

impl IncidentData {
    /// Incident with only a description.
    pub fn from_description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    /// Parse incident JSON, validating it against the incident schema first.
    pub fn from_json(json: &str) -> Result<Self, TriageError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| TriageError::InvalidIncident(e.to_string()))?;
        Self::from_value(value)
    }

    /// Deserialize an already-parsed JSON value after schema validation.
    pub fn from_value(value: serde_json::Value) -> Result<Self, TriageError> {
        validate_incident_schema(&value)
            .map_err(|errors| TriageError::InvalidIncident(errors.join("; ")))?;

        serde_json::from_value(value).map_err(|e| TriageError::InvalidIncident(e.to_string()))
    }

    /// The description, if present and not blank.
    pub fn description(&self) -> Option<&str> {
        present(&self.description)
    }
}

/// A field's value unless it is absent or blank.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_aliases() {
        let data = IncidentData::from_json(
            r#"{"description": "He grabbed me", "photos": true, "hasCCTV": true, "medicalReport": true}"#,
        )
        .unwrap();
        assert!(data.has_photos);
        assert!(data.has_cctv);
        assert!(data.has_medical_report);
        assert!(!data.has_audio);
        assert_eq!(data.description(), Some("He grabbed me"));
    }

    #[test]
    fn test_schema_rejects_unknown_field() {
        let result = IncidentData::from_json(r#"{"description": "x", "colour": "red"}"#);
        assert!(matches!(result, Err(TriageError::InvalidIncident(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            IncidentData::from_json("{not json"),
            Err(TriageError::InvalidIncident(_))
        ));
    }

    #[test]
    fn test_blank_counts_as_absent() {
        let data = IncidentData {
            description: Some("   ".to_string()),
            ..IncidentData::default()
        };
        assert_eq!(data.description(), None);
    }

    #[test]
    fn test_severity_parsed() {
        let data = IncidentData::from_json(r#"{"description": "x", "severity": "HIGH"}"#).unwrap();
        assert_eq!(data.severity, Some(Tier::High));
    }
}
