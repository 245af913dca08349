//! Topic & Emergency Router
//!
//! **Question**: Is this an emergency, and if not, what is it about?
//!
//! The emergency lexicon is consulted first and is not one of the topic
//! buckets. A hit ends routing. Otherwise topic buckets are tried in
//! declaration order and the first bucket with a hit wins; later buckets
//! are never consulted.

use tracing::debug;

use crate::lexicon::Lexicon;
use crate::types::{IncidentText, Topic};

use super::patterns::contains_any;
use super::{Lens, LensKind};

/// Where a message is routed.
#[derive(Debug, Clone, PartialEq)]
pub enum Route<'a> {
    /// An emergency keyword matched
    Emergency { keyword: &'a str },

    /// A topic bucket matched, or `General` with no template
    Topic {
        topic: Topic,
        template: Option<&'a str>,
    },
}

impl Route<'_> {
    pub fn is_emergency(&self) -> bool {
        matches!(self, Route::Emergency { .. })
    }

    /// Topic reported to callers.
    pub fn topic(&self) -> Topic {
        match self {
            Route::Emergency { .. } => Topic::Emergency,
            Route::Topic { topic, .. } => *topic,
        }
    }
}

/// The router.
pub struct TopicRouter<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> TopicRouter<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Check the emergency lexicon alone.
    pub fn detect_emergency(&self, text: &IncidentText) -> Option<&'a str> {
        let lexicon: &'a Lexicon = self.lexicon;
        let content = text.normalized();

        lexicon
            .emergency
            .iter()
            .map(String::as_str)
            .find(|k| content.contains(k))
    }

    /// Resolve the topic bucket, ignoring the emergency lexicon.
    pub fn detect_topic(&self, text: &IncidentText) -> (Topic, Option<&'a str>) {
        let lexicon: &'a Lexicon = self.lexicon;
        let content = text.normalized();

        lexicon
            .topics
            .iter()
            .find(|rule| contains_any(content, &rule.keywords))
            .map(|rule| (rule.topic, Some(rule.template.as_str())))
            .unwrap_or((Topic::General, None))
    }
}

impl<'a> Lens for TopicRouter<'a> {
    type Finding = Route<'a>;

    fn kind(&self) -> LensKind {
        LensKind::Route
    }

    fn evaluate(&self, text: &IncidentText) -> Route<'a> {
        if let Some(keyword) = self.detect_emergency(text) {
            debug!(keyword, "emergency keyword matched");
            return Route::Emergency { keyword };
        }

        let (topic, template) = self.detect_topic(text);
        debug!(topic = %topic, "topic routed");
        Route::Topic { topic, template }
    }
}
