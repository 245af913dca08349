//! Conversation aggregator: folds per-message severity into one verdict.
//!
//! Policy:
//! 1. Every message is classified; there is no early exit on HIGH
//! 2. Overall severity is the maximum tier seen
//! 3. Total risks are the union of every message's risk factors
//!
//! The fold is commutative and associative, so message order never changes
//! the verdict.

use std::collections::BTreeSet;
use tracing::info;

use crate::lenses::{Lens, SeverityLens};
use crate::lexicon::Lexicon;
use crate::types::{ConversationMessage, ConversationResult, IncidentText, Tier};
use crate::TriageError;

/// Aggregates a conversation into a single verdict.
pub struct ConversationAggregator<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> ConversationAggregator<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Classify every message and fold the results.
    ///
    /// Fails when the conversation is empty or any message text is blank.
    pub fn aggregate(
        &self,
        messages: &[ConversationMessage],
    ) -> Result<ConversationResult, TriageError> {
        if messages.is_empty() {
            return Err(TriageError::MissingField("messages".to_string()));
        }

        let lens = SeverityLens::new(self.lexicon);
        let mut overall_severity = Tier::Low;
        let mut total_risks = BTreeSet::new();

        for (index, message) in messages.iter().enumerate() {
            let text = IncidentText::new(message.text.as_str(), message.context);
            if text.is_blank() {
                return Err(TriageError::MissingField(format!("messages[{}].text", index)));
            }

            let finding = lens.evaluate(&text);
            overall_severity = overall_severity.max(finding.tier);
            total_risks.extend(finding.risk_factors);
        }

        info!(
            messages = messages.len(),
            severity = %overall_severity,
            "conversation aggregated"
        );

        Ok(ConversationResult {
            overall_severity,
            total_risks,
            message_count: messages.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(texts: &[&str]) -> Result<ConversationResult, TriageError> {
        let messages: Vec<ConversationMessage> = texts
            .iter()
            .map(|t| ConversationMessage::new(*t, None))
            .collect();
        ConversationAggregator::new(Lexicon::shared()).aggregate(&messages)
    }

    #[test]
    fn test_overall_is_maximum() {
        let result = aggregate(&[
            "I have a question about routes",
            "He had a knife",
            "Now it is quiet",
        ])
        .unwrap();
        assert_eq!(result.overall_severity, Tier::High);
        assert_eq!(result.message_count, 3);
    }

    #[test]
    fn test_risks_are_unioned_across_messages() {
        let result =
            aggregate(&["A creepy stranger", "He had a knife", "the creepy man again"]).unwrap();
        let risks: Vec<&str> = result.total_risks.iter().map(String::as_str).collect();
        assert_eq!(risks, vec!["creepy", "knife", "stranger"]);
    }

    #[test]
    fn test_order_does_not_change_verdict() {
        let forward = aggregate(&["It was dark and I was alone", "A gun"]).unwrap();
        let reverse = aggregate(&["A gun", "It was dark and I was alone"]).unwrap();
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_night_context_applies_per_message() {
        let messages = vec![ConversationMessage::new(
            "A creepy man near the gate",
            Some(crate::types::Context {
                is_night: true,
                ..Default::default()
            }),
        )];
        let result = ConversationAggregator::new(Lexicon::shared())
            .aggregate(&messages)
            .unwrap();
        assert_eq!(result.overall_severity, Tier::Medium);
    }

    #[test]
    fn test_empty_conversation_rejected() {
        assert!(matches!(aggregate(&[]), Err(TriageError::MissingField(_))));
    }

    #[test]
    fn test_blank_message_rejected() {
        match aggregate(&["fine", " "]) {
            Err(TriageError::MissingField(field)) => assert_eq!(field, "messages[1].text"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
