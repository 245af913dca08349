//! Safety coach: composes chat replies.
//!
//! An emergency keyword ends composition immediately with the fixed
//! emergency reply. Otherwise the question is scored and routed, and the
//! reply is assembled from:
//!
//! - an acknowledgment phrase, except on the first turn,
//! - the topic template, or general guidance when no topic matched,
//! - the tier's coach recommendations and the topic's resources,
//! - an emotional-support block when the emotion lens fires.
//!
//! Composition faults are logged and replaced by a fallback reply; they
//! never reach the caller.

mod resources;
mod templates;

pub use resources::{emergency_resources, professional_help, reply_resources};
pub use templates::{coach_recommendations, FALLBACK_REPLY};

use chrono::Utc;
use tracing::{info, warn};

use crate::entropy::Entropy;
use crate::lenses::{EmotionLens, Lens, Route, SeverityLens, TopicRouter};
use crate::lexicon::Lexicon;
use crate::types::{
    CoachResponse, ConversationSummary, CopingTechnique, EmotionalSupport, HistoryTurn,
    IncidentText, Tier, Topic,
};
use crate::TriageError;

const SATISFACTION_KEYWORDS: [&str; 7] =
    ["thank", "thanks", "helpful", "got it", "understand", "okay", "ok"];
const NEEDS_MORE_KEYWORDS: [&str; 5] = ["but", "what if", "also", "another", "more"];

/// Length of the random suffix in conversation ids.
const CONVERSATION_TOKEN_LEN: usize = 9;

/// The safety coach.
pub struct Coach<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Coach<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Answer a question given the turns so far.
    ///
    /// Only a blank question is an error.
    pub fn respond(
        &self,
        question: &str,
        history: &[HistoryTurn],
        entropy: &mut dyn Entropy,
    ) -> Result<CoachResponse, TriageError> {
        let text = IncidentText::new(question, None);
        if text.is_blank() {
            return Err(TriageError::MissingField("question".to_string()));
        }

        match self.compose(&text, history, entropy) {
            Ok(response) => Ok(response),
            Err(err) => {
                warn!(error = %err, "coach reply failed, sending fallback");
                Ok(fallback_response(entropy))
            }
        }
    }

    fn compose(
        &self,
        text: &IncidentText,
        history: &[HistoryTurn],
        entropy: &mut dyn Entropy,
    ) -> Result<CoachResponse, TriageError> {
        let (topic, template) = match TopicRouter::new(self.lexicon).evaluate(text) {
            Route::Emergency { keyword } => {
                info!(keyword, "emergency reply");
                return Ok(emergency_response(entropy));
            }
            Route::Topic { topic, template } => (topic, template),
        };

        let tier = SeverityLens::new(self.lexicon).evaluate(text).tier;

        let mut reply = String::new();
        if !history.is_empty() {
            reply.push_str(pick(&self.lexicon.acknowledgments, "acknowledgment", entropy)?);
            reply.push_str("\n\n");
        }

        match template {
            Some(template) => reply.push_str(template),
            None => reply.push_str(&templates::general_guidance(text.normalized(), tier)),
        }

        let emotional_support = EmotionLens::new(self.lexicon)
            .evaluate(text)
            .map(emotional_support);

        info!(topic = %topic, severity = %tier, "coach reply composed");

        Ok(CoachResponse {
            text: reply,
            topic,
            severity: Some(tier),
            recommendations: coach_recommendations(tier),
            resources: reply_resources(topic, tier),
            emotional_support,
            conversation_id: conversation_id(entropy),
            is_emergency: false,
            generated_at: Utc::now(),
        })
    }
}

/// Opening line for a new conversation.
pub fn greeting(lexicon: &Lexicon, entropy: &mut dyn Entropy) -> Result<String, TriageError> {
    pick(&lexicon.greetings, "greeting", entropy).map(str::to_string)
}

/// Message count and distinct topics of the conversation so far.
pub fn summarize_history(history: &[HistoryTurn]) -> ConversationSummary {
    let mut topics: Vec<Topic> = Vec::new();
    for topic in history.iter().filter_map(|turn| turn.topic) {
        if !topics.contains(&topic) {
            topics.push(topic);
        }
    }

    ConversationSummary {
        message_count: history.len(),
        topics,
        is_new: history.is_empty(),
    }
}

/// Whether the person still wants help after a reply.
///
/// A thank-you or acknowledgment closes the thread unless it also asks for more.
pub fn needs_follow_up(message: &str) -> bool {
    let content = message.to_lowercase();
    let satisfied = SATISFACTION_KEYWORDS.iter().any(|k| content.contains(k));
    let needs_more = NEEDS_MORE_KEYWORDS.iter().any(|k| content.contains(k));
    !satisfied || needs_more
}

fn pick<'p>(
    pool: &'p [String],
    what: &str,
    entropy: &mut dyn Entropy,
) -> Result<&'p str, TriageError> {
    if pool.is_empty() {
        return Err(TriageError::Composition(format!("no {} phrases configured", what)));
    }
    let index = entropy.below(pool.len());
    pool.get(index).map(String::as_str).ok_or_else(|| {
        TriageError::Composition(format!("{} index {} out of range", what, index))
    })
}

fn conversation_id(entropy: &mut dyn Entropy) -> String {
    format!(
        "coach-{}-{}",
        Utc::now().timestamp_millis(),
        entropy.token(CONVERSATION_TOKEN_LEN)
    )
}

fn emotional_support(technique: CopingTechnique) -> EmotionalSupport {
    EmotionalSupport {
        immediate_comfort: templates::IMMEDIATE_COMFORT.to_string(),
        technique,
        coping_technique: templates::coping_script(technique).to_string(),
        professional_help: professional_help(),
    }
}

fn emergency_response(entropy: &mut dyn Entropy) -> CoachResponse {
    CoachResponse {
        text: templates::EMERGENCY_TEXT.to_string(),
        topic: Topic::Emergency,
        severity: Some(Tier::High),
        recommendations: templates::EMERGENCY_RECOMMENDATIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        resources: emergency_resources(),
        emotional_support: None,
        conversation_id: conversation_id(entropy),
        is_emergency: true,
        generated_at: Utc::now(),
    }
}

fn fallback_response(entropy: &mut dyn Entropy) -> CoachResponse {
    CoachResponse {
        text: FALLBACK_REPLY.to_string(),
        topic: Topic::Error,
        severity: None,
        recommendations: Vec::new(),
        resources: Vec::new(),
        emotional_support: None,
        conversation_id: conversation_id(entropy),
        is_emergency: false,
        generated_at: Utc::now(),
    }
}
