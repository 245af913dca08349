//! # safewalk-core
//!
//! Deterministic incident triage engine for a personal-safety assistant.
//!
//! This crate turns free-text incident reports into:
//! - a severity verdict with risk factors and evidence labels,
//! - a conversation-level verdict across several messages,
//! - a safety-coach reply with resources and emotional support,
//! - a draft First Information Report (FIR) and its printable form.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input and entropy always produce the same output
//! 2. **No model calls**: All decisions are keyword rules over lexicon tables
//! 3. **Emergency first**: An emergency keyword always bypasses topic routing
//! 4. **Parallel-safe**: Lenses share only the read-only lexicon
//!
//! ## Example
//!
//! ```rust,ignore
//! use safewalk_core::{analyze, Context, Tier};
//!
//! let result = analyze("Someone is attacking me with a knife! Help!", None)?;
//! assert_eq!(result.severity, Tier::High);
//! assert!(result.risk_factors.contains("knife"));
//! ```

pub mod coach;
pub mod conversation;
pub mod entropy;
pub mod lenses;
pub mod lexicon;
pub mod report;
pub mod types;

// Re-export main types at crate root
pub use coach::{greeting, needs_follow_up, summarize_history, Coach};
pub use conversation::ConversationAggregator;
pub use entropy::{Entropy, ScriptedEntropy, SeededEntropy, SystemEntropy};
pub use lenses::{
    label_details, EmotionLens, EvidenceLens, LabelDetail, Lens, LensKind, Route, SeverityFinding,
    SeverityLens, TopicRouter,
};
pub use lexicon::{Lexicon, LexiconError};
pub use report::{
    extract_report_fields, IncidentData, IncidentRecord, ReportFields, ReportSynthesizer,
};
pub use types::{
    AnalysisResult, CoachResponse, Context, ConversationMessage, ConversationResult,
    ConversationSummary, CopingTechnique, EmotionalSupport, HistoryTurn, IncidentText, Resource,
    ResourceKind, Tier, Topic,
};

use chrono::Utc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during triage
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid incident: {0}")]
    InvalidIncident(String),

    #[error("Response composition failed: {0}")]
    Composition(String),

    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
}

/// Classify one message against the built-in tables.
///
/// # Arguments
///
/// * `text` - The message as the person wrote it
/// * `context` - Optional situational flags; absent means all false
///
/// # Returns
///
/// An `AnalysisResult` containing:
/// - `severity`: LOW, MEDIUM or HIGH
/// - `confidence`: how strongly the keywords support the tier
/// - `risk_factors`: HIGH and MEDIUM keywords that matched
/// - `evidence_labels`: evidence and incident markers
/// - `recommendations`: fixed advice for the tier
pub fn analyze(text: &str, context: Option<Context>) -> Result<AnalysisResult, TriageError> {
    analyze_with_lexicon(Lexicon::shared(), text, context)
}

/// Classify one message against caller-supplied tables.
pub fn analyze_with_lexicon(
    lexicon: &Lexicon,
    text: &str,
    context: Option<Context>,
) -> Result<AnalysisResult, TriageError> {
    let text = IncidentText::new(text, context);
    if text.is_blank() {
        return Err(TriageError::MissingField("text".to_string()));
    }

    // The two lenses are independent over the same normalized text
    let finding = SeverityLens::new(lexicon).evaluate(&text);
    let mut evidence_labels = EvidenceLens::new(lexicon).labels(&text, finding.tier);

    if text.context().has_location {
        evidence_labels.insert(lenses::LOCATION_LABEL.to_string());
    }

    info!(severity = %finding.tier, confidence = finding.confidence, "message analyzed");

    Ok(AnalysisResult {
        severity: finding.tier,
        confidence: finding.confidence,
        risk_factors: finding.risk_factors,
        evidence_labels,
        recommendations: lenses::analysis_recommendations(finding.tier),
        generated_at: Utc::now(),
    })
}

/// Fold several messages into one conversation verdict.
pub fn analyze_conversation(
    messages: &[ConversationMessage],
) -> Result<ConversationResult, TriageError> {
    ConversationAggregator::new(Lexicon::shared()).aggregate(messages)
}

/// Answer a question as the safety coach, drawing randomness from the OS.
///
/// Composition faults never surface here; they become the fallback reply.
pub fn chat(question: &str, history: &[HistoryTurn]) -> Result<CoachResponse, TriageError> {
    Coach::new(Lexicon::shared()).respond(question, history, &mut SystemEntropy::new())
}

/// Draft an FIR from incident fields.
pub fn synthesize_report(data: &IncidentData) -> Result<IncidentRecord, TriageError> {
    ReportSynthesizer::new(Lexicon::shared()).synthesize(data, &mut SystemEntropy::new())
}

/// Render an FIR as the printable plain-text document.
pub fn render_report(record: &IncidentRecord) -> String {
    report::render_report(record)
}
