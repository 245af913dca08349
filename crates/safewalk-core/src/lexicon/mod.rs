//! Lexicon tables.
//!
//! Every keyword table the pipeline matches against lives here as plain
//! data. Ordered tables (topics, categories, legal rules) are `Vec`s and are
//! always iterated in declaration order: first match wins where a lens
//! resolves to a single tag, so table order is part of the behavior.
//!
//! The built-in tables are loaded once into a shared read-only instance.
//! Callers may load their own tables from YAML or JSON and pass them by
//! reference instead.

mod builtin;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::types::Topic;

lazy_static! {
    static ref BUILTIN: Lexicon = Lexicon::builtin();
}

/// Errors that can occur when loading lexicon tables.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Failed to read lexicon file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Lexicon validation failed: {0}")]
    ValidationError(String),
}

/// Keyword tiers for severity scoring. Tiers are disjoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SeverityTiers {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    #[serde(default)]
    pub low: Vec<String>,
}

/// A label attached when any keyword is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelRule {
    pub label: String,
    pub keywords: Vec<String>,
}

/// A chatbot topic bucket and its canned reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopicRule {
    pub topic: Topic,
    pub keywords: Vec<String>,
    pub template: String,
}

/// Emotional-need triggers and the sub-keywords that pick a coping script.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EmotionalLexicon {
    pub triggers: Vec<String>,
    #[serde(default)]
    pub grounding: Vec<String>,
    #[serde(default)]
    pub reassurance: Vec<String>,
}

/// An incident category for report drafting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRule {
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Legal citations suggested when any keyword is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LegalRule {
    pub keywords: Vec<String>,
    pub sections: Vec<String>,
}

/// The full set of tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lexicon {
    pub severity: SeverityTiers,

    /// Evidence-type markers (visual, audio, text, witness)
    #[serde(default)]
    pub evidence: Vec<LabelRule>,

    /// Incident-type markers (physical, verbal, cyber)
    #[serde(default)]
    pub incidents: Vec<LabelRule>,

    /// Checked before any topic; a hit short-circuits the coach
    pub emergency: Vec<String>,

    /// Routing order is declaration order
    #[serde(default)]
    pub topics: Vec<TopicRule>,

    #[serde(default)]
    pub emotional: EmotionalLexicon,

    /// First category with a hit wins
    #[serde(default)]
    pub categories: Vec<CategoryRule>,

    /// Every rule with a hit contributes its sections
    #[serde(default)]
    pub legal: Vec<LegalRule>,

    #[serde(default)]
    pub acknowledgments: Vec<String>,

    #[serde(default)]
    pub greetings: Vec<String>,
}

impl Lexicon {
    /// The process-wide built-in tables.
    pub fn shared() -> &'static Lexicon {
        &BUILTIN
    }

    /// Parse tables from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, LexiconError> {
        let lexicon: Lexicon = serde_yaml::from_str(yaml)?;
        lexicon.into_validated()
    }

    /// Parse tables from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let lexicon: Lexicon = serde_json::from_str(json)?;
        lexicon.into_validated()
    }

    /// Parse tables from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse tables from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Serialize the tables to YAML.
    pub fn to_yaml(&self) -> Result<String, LexiconError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Case-fold every keyword and check table structure.
    fn into_validated(mut self) -> Result<Self, LexiconError> {
        self.fold_keywords();
        self.validate()?;
        Ok(self)
    }

    fn fold_keywords(&mut self) {
        let fold = |words: &mut Vec<String>| {
            for word in words.iter_mut() {
                *word = word.to_lowercase();
            }
        };

        fold(&mut self.severity.high);
        fold(&mut self.severity.medium);
        fold(&mut self.severity.low);
        fold(&mut self.emergency);
        fold(&mut self.emotional.triggers);
        fold(&mut self.emotional.grounding);
        fold(&mut self.emotional.reassurance);
        self.evidence.iter_mut().for_each(|r| fold(&mut r.keywords));
        self.incidents.iter_mut().for_each(|r| fold(&mut r.keywords));
        self.topics.iter_mut().for_each(|r| fold(&mut r.keywords));
        self.categories.iter_mut().for_each(|r| fold(&mut r.keywords));
        self.legal.iter_mut().for_each(|r| fold(&mut r.keywords));
    }

    /// Validate table structure.
    fn validate(&self) -> Result<(), LexiconError> {
        if self.severity.high.is_empty() || self.severity.medium.is_empty() {
            return Err(LexiconError::ValidationError(
                "severity.high and severity.medium must not be empty".to_string(),
            ));
        }

        if self.emergency.is_empty() {
            return Err(LexiconError::ValidationError(
                "emergency lexicon must not be empty".to_string(),
            ));
        }

        let high: HashSet<&String> = self.severity.high.iter().collect();
        if let Some(word) = self
            .severity
            .medium
            .iter()
            .chain(self.severity.low.iter())
            .find(|w| high.contains(w))
        {
            return Err(LexiconError::ValidationError(format!(
                "Keyword '{}' appears in more than one severity tier",
                word
            )));
        }

        let mut seen = HashSet::new();
        for rule in &self.topics {
            if matches!(rule.topic, Topic::General | Topic::Error) {
                return Err(LexiconError::ValidationError(format!(
                    "Topic '{}' is reserved and cannot have a bucket",
                    rule.topic
                )));
            }
            if !seen.insert(rule.topic) {
                return Err(LexiconError::ValidationError(format!(
                    "Duplicate topic bucket: {}",
                    rule.topic
                )));
            }
        }

        if self.categories.iter().any(|c| c.category.trim().is_empty()) {
            return Err(LexiconError::ValidationError(
                "Category labels must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
severity:
  high: [Knife, gun]
  medium: [following]
emergency: [help me]
topics:
  - topic: stalking
    keywords: [following]
    template: "Stay where people are."
"#;

    #[test]
    fn test_builtin_is_valid() {
        assert!(Lexicon::builtin().validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_yaml() {
        let lexicon = Lexicon::from_yaml(MINIMAL).unwrap();
        assert_eq!(lexicon.severity.high, vec!["knife", "gun"]);
        assert!(lexicon.severity.low.is_empty());
        assert_eq!(lexicon.topics[0].topic, Topic::Stalking);
        assert!(lexicon.acknowledgments.is_empty());
    }

    #[test]
    fn test_yaml_round_trip_of_builtin() {
        let yaml = Lexicon::builtin().to_yaml().unwrap();
        let parsed = Lexicon::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, Lexicon::builtin());
    }

    #[test]
    fn test_overlapping_tiers_rejected() {
        let yaml = r#"
severity:
  high: [threatening]
  medium: [threatening]
emergency: [help me]
"#;
        assert!(matches!(
            Lexicon::from_yaml(yaml),
            Err(LexiconError::ValidationError(_))
        ));
    }

    #[test]
    fn test_duplicate_topic_rejected() {
        let yaml = r#"
severity:
  high: [knife]
  medium: [dark]
emergency: [help me]
topics:
  - topic: cyber
    keywords: [online]
    template: "a"
  - topic: cyber
    keywords: [leak]
    template: "b"
"#;
        assert!(matches!(
            Lexicon::from_yaml(yaml),
            Err(LexiconError::ValidationError(_))
        ));
    }

    #[test]
    fn test_general_topic_reserved() {
        let json = r#"{
            "severity": {"high": ["knife"], "medium": ["dark"]},
            "emergency": ["help me"],
            "topics": [{"topic": "general", "keywords": ["x"], "template": "y"}]
        }"#;
        assert!(Lexicon::from_json(json).is_err());
    }

    #[test]
    fn test_empty_emergency_rejected() {
        let yaml = r#"
severity:
  high: [knife]
  medium: [dark]
emergency: []
"#;
        assert!(Lexicon::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_shared_matches_builtin() {
        assert_eq!(*Lexicon::shared(), Lexicon::builtin());
    }
}
