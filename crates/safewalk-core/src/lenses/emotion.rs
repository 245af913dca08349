//! Emotion Lens
//!
//! **Question**: Does the person need emotional support?
//!
//! Uses its own trigger lexicon, separate from severity and topics. When a
//! trigger matches, sub-keywords pick the coping script: grounding for
//! panic, reassurance for fear, self-care otherwise.

use crate::lexicon::Lexicon;
use crate::types::{CopingTechnique, IncidentText};

use super::patterns::contains_any;
use super::{Lens, LensKind};

/// The emotion lens.
pub struct EmotionLens<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> EmotionLens<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }
}

impl Lens for EmotionLens<'_> {
    /// `None` when no support is needed.
    type Finding = Option<CopingTechnique>;

    fn kind(&self) -> LensKind {
        LensKind::Emotion
    }

    fn evaluate(&self, text: &IncidentText) -> Option<CopingTechnique> {
        let content = text.normalized();
        let emotional = &self.lexicon.emotional;

        if !contains_any(content, &emotional.triggers) {
            return None;
        }

        let technique = if contains_any(content, &emotional.grounding) {
            CopingTechnique::Grounding
        } else if contains_any(content, &emotional.reassurance) {
            CopingTechnique::SafetyReassurance
        } else {
            CopingTechnique::SelfCare
        };

        Some(technique)
    }
}
