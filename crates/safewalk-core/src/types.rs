//! Core types for safewalk triage.
//!
//! These are the value objects that flow through the pipeline: the
//! normalized incident text, per-message analysis, conversation verdicts
//! and coach responses. Every value is built fresh per request and never
//! mutated after construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// Ordinal severity classification.
///
/// Declaration order is the severity order: `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    #[default]
    Low,
    Medium,
    High,
}

impl Tier {
    /// Wire label (`LOW`, `MEDIUM`, `HIGH`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Low => "LOW",
            Tier::Medium => "MEDIUM",
            Tier::High => "HIGH",
        }
    }

    /// Briefing block shown alongside an analysis of this tier.
    pub fn briefing(&self) -> &'static str {
        match self {
            Tier::High => {
                "HIGH SEVERITY INCIDENT DETECTED\n\n\
                 Risk Level: CRITICAL\n\
                 Recommended Action: IMMEDIATE RESPONSE REQUIRED\n\n\
                 This incident involves:\n\
                 - Immediate threat to personal safety\n\
                 - Physical violence or assault\n\
                 - Weapons or dangerous situations\n\
                 - Need for emergency services\n\n\
                 IMMEDIATE STEPS:\n\
                 1. Call 112 (National Emergency) or 100 (Police)\n\
                 2. Move to safe location if possible\n\
                 3. Alert trusted contacts\n\
                 4. Preserve evidence\n\
                 5. Seek medical attention if injured"
            }
            Tier::Medium => {
                "MEDIUM SEVERITY INCIDENT DETECTED\n\n\
                 Risk Level: ELEVATED\n\
                 Recommended Action: TAKE PRECAUTIONARY MEASURES\n\n\
                 This incident involves:\n\
                 - Harassment or threatening behavior\n\
                 - Stalking or following\n\
                 - Uncomfortable or unsafe situations\n\
                 - Potential escalation risk\n\n\
                 RECOMMENDED STEPS:\n\
                 1. Alert trusted contacts immediately\n\
                 2. Move to well-lit, public area\n\
                 3. Document incident details\n\
                 4. Consider calling Women Helpline 1091\n\
                 5. File police complaint if necessary"
            }
            Tier::Low => {
                "LOW SEVERITY - PREVENTIVE GUIDANCE\n\n\
                 Risk Level: PRECAUTIONARY\n\
                 Recommended Action: AWARENESS AND PREPARATION\n\n\
                 This appears to be:\n\
                 - General safety inquiry\n\
                 - Preventive measures needed\n\
                 - Awareness request\n\
                 - Planning for safety\n\n\
                 RECOMMENDED STEPS:\n\
                 1. Review safety guidelines\n\
                 2. Share location with trusted contacts\n\
                 3. Plan safe routes\n\
                 4. Keep emergency numbers ready\n\
                 5. Stay alert and trust instincts"
            }
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Situational flags supplied alongside a message.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Context {
    pub is_night: bool,
    pub is_isolated: bool,
    pub has_location: bool,
    /// Carried for callers; does not affect scoring.
    pub has_witness: bool,
}

/// Incident text, case-folded once at ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentText {
    raw: String,
    normalized: String,
    context: Context,
}

impl IncidentText {
    /// Ingest text with an optional context. Absent context means every flag is false.
    pub fn new(raw: impl Into<String>, context: Option<Context>) -> Self {
        let raw = raw.into();
        let normalized = raw.to_lowercase();
        Self {
            raw,
            normalized,
            context: context.unwrap_or_default(),
        }
    }

    /// The text as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The case-folded text every lens matches against.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

/// Triage verdict for a single message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub severity: Tier,

    /// Confidence in the tier, within `[0, 1]`
    pub confidence: f64,

    /// HIGH and MEDIUM keywords that matched, verbatim
    pub risk_factors: BTreeSet<String>,

    /// Evidence and incident labels
    pub evidence_labels: BTreeSet<String>,

    /// Fixed advice list for the tier
    pub recommendations: Vec<String>,

    pub generated_at: DateTime<Utc>,
}

/// One message of a conversation to aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationMessage {
    pub text: String,

    #[serde(default)]
    pub context: Option<Context>,
}

impl ConversationMessage {
    pub fn new(text: impl Into<String>, context: Option<Context>) -> Self {
        Self {
            text: text.into(),
            context,
        }
    }
}

/// Conversation-level verdict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResult {
    /// Maximum tier observed across all messages
    pub overall_severity: Tier,

    /// Union of every message's risk factors
    pub total_risks: BTreeSet<String>,

    pub message_count: usize,
}

/// Chatbot topic buckets, in routing order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Topic {
    Emergency,
    Stalking,
    Harassment,
    NightSafety,
    Transport,
    Cyber,
    Legal,
    Emotional,
    /// No bucket matched
    General,
    /// Fallback reply after a composition fault
    Error,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Emergency => "emergency",
            Topic::Stalking => "stalking",
            Topic::Harassment => "harassment",
            Topic::NightSafety => "nightSafety",
            Topic::Transport => "transport",
            Topic::Cyber => "cyber",
            Topic::Legal => "legal",
            Topic::Emotional => "emotional",
            Topic::General => "general",
            Topic::Error => "error",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a resource is reached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Contact {
    Number(String),
    Url(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Emergency,
    Reporting,
    Support,
    Legal,
    MentalHealth,
}

/// A helpline or portal offered with a coach reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    pub name: String,

    #[serde(flatten)]
    pub contact: Contact,

    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

impl Resource {
    pub fn number(name: impl Into<String>, number: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            name: name.into(),
            contact: Contact::Number(number.into()),
            kind,
        }
    }

    pub fn url(name: impl Into<String>, url: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            name: name.into(),
            contact: Contact::Url(url.into()),
            kind,
        }
    }
}

/// Coping script attached to emotional support.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CopingTechnique {
    /// 5-4-3-2-1 grounding plus box breathing
    Grounding,
    SafetyReassurance,
    SelfCare,
}

/// A professional-help line offered with emotional support.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupportContact {
    pub name: String,
    pub number: String,
    pub note: String,
}

/// Psychological first-aid block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalSupport {
    pub immediate_comfort: String,
    pub technique: CopingTechnique,
    pub coping_technique: String,
    pub professional_help: Vec<SupportContact>,
}

/// A reply from the safety coach.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachResponse {
    pub text: String,

    pub topic: Topic,

    /// `None` only for the fallback reply, serialized as `UNKNOWN`
    #[serde(serialize_with = "serialize_severity")]
    pub severity: Option<Tier>,

    pub recommendations: Vec<String>,

    pub resources: Vec<Resource>,

    pub emotional_support: Option<EmotionalSupport>,

    pub conversation_id: String,

    pub is_emergency: bool,

    pub generated_at: DateTime<Utc>,
}

fn serialize_severity<S: Serializer>(
    severity: &Option<Tier>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match severity {
        Some(tier) => tier.serialize(serializer),
        None => serializer.serialize_str("UNKNOWN"),
    }
}

/// A previous turn of the conversation, as the transport layer keeps it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryTurn {
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub topic: Option<Topic>,
}

/// Shape of a conversation so far.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub message_count: usize,

    /// Distinct topics, in first-seen order
    pub topics: Vec<Topic>,

    pub is_new: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Low < Tier::Medium);
        assert!(Tier::Medium < Tier::High);
        assert_eq!(Tier::Low.max(Tier::High), Tier::High);
    }

    #[test]
    fn test_tier_wire_format() {
        assert_eq!(serde_json::to_string(&Tier::Medium).unwrap(), "\"MEDIUM\"");
        let tier: Tier = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(tier, Tier::High);
    }

    #[test]
    fn test_context_defaults_when_missing() {
        let ctx: Context = serde_json::from_str(r#"{"isNight": true}"#).unwrap();
        assert!(ctx.is_night);
        assert!(!ctx.is_isolated);
        assert!(!ctx.has_location);
    }

    #[test]
    fn test_incident_text_normalizes_once() {
        let text = IncidentText::new("Help ME Now", None);
        assert_eq!(text.raw(), "Help ME Now");
        assert_eq!(text.normalized(), "help me now");
        assert_eq!(*text.context(), Context::default());
    }

    #[test]
    fn test_resource_serializes_contact_inline() {
        let value =
            serde_json::to_value(Resource::number("Police", "100", ResourceKind::Emergency)).unwrap();
        assert_eq!(value["name"], "Police");
        assert_eq!(value["number"], "100");
        assert_eq!(value["type"], "emergency");

        let value = serde_json::to_value(Resource::url(
            "Cyber Crime Portal",
            "https://cybercrime.gov.in",
            ResourceKind::Reporting,
        ))
        .unwrap();
        assert_eq!(value["url"], "https://cybercrime.gov.in");
        assert!(value.get("number").is_none());
    }

    #[test]
    fn test_topic_wire_names() {
        assert_eq!(serde_json::to_string(&Topic::NightSafety).unwrap(), "\"nightSafety\"");
        assert_eq!(Topic::General.to_string(), "general");
    }
}
