//! Evidence Lens
//!
//! **Question**: What evidence and incident types does the message mention?
//!
//! Runs independently of severity. Every marker group with a hit
//! contributes its label, so one message can carry several.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::lexicon::Lexicon;
use crate::types::{IncidentText, Tier};

use super::patterns::contains_any;
use super::{Lens, LensKind};

/// Attached to every HIGH analysis.
pub const IMMEDIATE_ACTION_LABEL: &str = "immediate_action_required";

/// Attached when the caller reports a location fix.
pub const LOCATION_LABEL: &str = "location_data";

/// Human-readable description of a known label.
pub fn describe_label(label: &str) -> Option<&'static str> {
    match label {
        "visual_evidence" => {
            Some("Visual evidence available - photograph/image of incident scene or suspect")
        }
        "audio_evidence" => Some(
            "Audio evidence available - recording of incident or threatening communication",
        ),
        "text_evidence" => {
            Some("Text evidence available - messages, emails, or written communication")
        }
        "witness_account" => {
            Some("Witness testimony available - corroborating account from observer")
        }
        LOCATION_LABEL => Some("Location data available - GPS coordinates and timestamp"),
        _ => None,
    }
}

/// Evidentiary weight of a known evidence label.
pub fn label_weight(label: &str) -> Option<f64> {
    match label {
        "visual_evidence" => Some(0.9),
        "audio_evidence" => Some(0.85),
        "text_evidence" => Some(0.8),
        "witness_account" => Some(0.75),
        LOCATION_LABEL => Some(0.7),
        _ => None,
    }
}

/// Description and weight of one evidence label.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LabelDetail {
    pub label: String,
    pub description: &'static str,
    pub weight: f64,
}

/// Details for the evidence labels in a set. Incident-type and marker
/// labels carry no weight and are skipped.
pub fn label_details(labels: &BTreeSet<String>) -> Vec<LabelDetail> {
    labels
        .iter()
        .filter_map(|label| {
            Some(LabelDetail {
                label: label.clone(),
                description: describe_label(label)?,
                weight: label_weight(label)?,
            })
        })
        .collect()
}

/// The evidence lens.
pub struct EvidenceLens<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> EvidenceLens<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Marker labels plus the time-sensitive marker for HIGH messages.
    pub fn labels(&self, text: &IncidentText, severity: Tier) -> BTreeSet<String> {
        let mut labels = self.evaluate(text);
        if severity == Tier::High {
            labels.insert(IMMEDIATE_ACTION_LABEL.to_string());
        }
        labels
    }
}

impl Lens for EvidenceLens<'_> {
    type Finding = BTreeSet<String>;

    fn kind(&self) -> LensKind {
        LensKind::Evidence
    }

    fn evaluate(&self, text: &IncidentText) -> BTreeSet<String> {
        let content = text.normalized();

        let labels: BTreeSet<String> = self
            .lexicon
            .evidence
            .iter()
            .chain(self.lexicon.incidents.iter())
            .filter(|rule| contains_any(content, &rule.keywords))
            .map(|rule| rule.label.clone())
            .collect();

        debug!(labels = labels.len(), "evidence labeled");
        labels
    }
}
