//! Lenses over incident text.
//!
//! Each lens answers one question about a message by matching the
//! normalized text against lexicon tables. Lenses are independent: none
//! sees another's finding, so they can run in any order or in parallel on
//! the same `IncidentText`.

mod emotion;
mod evidence;
pub mod patterns;
mod router;
mod severity;

pub use emotion::EmotionLens;
pub use evidence::{
    describe_label, label_details, label_weight, EvidenceLens, LabelDetail, IMMEDIATE_ACTION_LABEL,
    LOCATION_LABEL,
};
pub use router::{Route, TopicRouter};
pub use severity::{analysis_recommendations, SeverityFinding, SeverityLens, TierCounts};

use serde::{Deserialize, Serialize};

use crate::types::IncidentText;

/// The four lenses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum LensKind {
    Severity,
    Evidence,
    Route,
    Emotion,
}

impl LensKind {
    /// The question this lens answers.
    pub fn question(&self) -> &'static str {
        match self {
            LensKind::Severity => "How much danger does this message describe?",
            LensKind::Evidence => "What evidence and incident types does it mention?",
            LensKind::Route => "Is this an emergency, and if not, what is it about?",
            LensKind::Emotion => "Does the person need emotional support?",
        }
    }
}

/// Trait implemented by all lenses.
pub trait Lens {
    /// What the lens produces for one message.
    type Finding;

    /// The lens kind.
    fn kind(&self) -> LensKind;

    /// The question this lens answers.
    fn question(&self) -> &'static str {
        self.kind().question()
    }

    /// Evaluate one message.
    fn evaluate(&self, text: &IncidentText) -> Self::Finding;
}
