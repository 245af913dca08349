//! Severity Lens
//!
//! **Question**: How much danger does this message describe?
//!
//! Counts substring hits against three disjoint keyword tiers and applies a
//! fixed decision policy, evaluated in order:
//!
//! | Tier | Condition | Confidence |
//! |------|-----------|------------|
//! | **HIGH** | at least one HIGH hit | `min(0.7 + 0.1·high, 0.95)` |
//! | **MEDIUM** | two MEDIUM hits, or one at night | `0.6 + 0.05·medium` |
//! | **LOW** | otherwise | `0.5` |
//!
//! Night and isolation each add 0.05 afterwards. HIGH and MEDIUM hits are
//! recorded as risk factors; LOW hits are only counted.

use std::collections::BTreeSet;
use tracing::debug;

use crate::lexicon::Lexicon;
use crate::types::{IncidentText, Tier};

use super::patterns::{count_matches, matching};
use super::{Lens, LensKind};

const NIGHT_WEIGHT: f64 = 0.05;
const ISOLATION_WEIGHT: f64 = 0.05;

const HIGH_RECOMMENDATIONS: [&str; 4] = [
    "Contact emergency services immediately (112/100)",
    "Share live location with trusted contacts",
    "Activate SOS alert",
    "Document evidence if safe to do so",
];

const MEDIUM_RECOMMENDATIONS: [&str; 4] = [
    "Alert trusted contacts",
    "Move to well-lit public area",
    "Call safety helpline",
    "Document incident details",
];

const LOW_RECOMMENDATIONS: [&str; 4] = [
    "Review safety guidelines",
    "Plan safe routes",
    "Keep emergency contacts ready",
    "Consider safety coaching",
];

/// Fixed advice list attached to an analysis of the given tier.
pub fn analysis_recommendations(tier: Tier) -> Vec<String> {
    let list: &[&str] = match tier {
        Tier::High => &HIGH_RECOMMENDATIONS,
        Tier::Medium => &MEDIUM_RECOMMENDATIONS,
        Tier::Low => &LOW_RECOMMENDATIONS,
    };
    list.iter().map(|s| s.to_string()).collect()
}

/// Keyword hits per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// What the severity lens observed.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityFinding {
    pub tier: Tier,
    pub confidence: f64,
    pub risk_factors: BTreeSet<String>,
    pub counts: TierCounts,
}

/// The severity lens.
pub struct SeverityLens<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SeverityLens<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Apply the decision policy to tier counts.
    fn decide(counts: TierCounts, is_night: bool) -> (Tier, f64) {
        if counts.high >= 1 {
            let confidence = (0.7 + 0.1 * counts.high as f64).min(0.95);
            (Tier::High, confidence)
        } else if counts.medium >= 2 || (counts.medium >= 1 && is_night) {
            (Tier::Medium, 0.6 + 0.05 * counts.medium as f64)
        } else {
            (Tier::Low, 0.5)
        }
    }
}

impl Lens for SeverityLens<'_> {
    type Finding = SeverityFinding;

    fn kind(&self) -> LensKind {
        LensKind::Severity
    }

    fn evaluate(&self, text: &IncidentText) -> SeverityFinding {
        let content = text.normalized();
        let context = text.context();
        let tiers = &self.lexicon.severity;

        let mut risk_factors = BTreeSet::new();
        let mut counts = TierCounts::default();

        for keyword in matching(content, &tiers.high) {
            counts.high += 1;
            risk_factors.insert(keyword.to_string());
        }

        for keyword in matching(content, &tiers.medium) {
            counts.medium += 1;
            risk_factors.insert(keyword.to_string());
        }

        counts.low = count_matches(content, &tiers.low);

        let (tier, mut confidence) = Self::decide(counts, context.is_night);

        if context.is_night {
            confidence += NIGHT_WEIGHT;
        }
        if context.is_isolated {
            confidence += ISOLATION_WEIGHT;
        }

        debug!(
            high = counts.high,
            medium = counts.medium,
            low = counts.low,
            tier = %tier,
            "severity scored"
        );

        SeverityFinding {
            tier,
            confidence: confidence.min(1.0),
            risk_factors,
            counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Context;

    fn score(message: &str, context: Option<Context>) -> SeverityFinding {
        let lexicon = Lexicon::builtin();
        SeverityLens::new(&lexicon).evaluate(&IncidentText::new(message, context))
    }

    fn night() -> Option<Context> {
        Some(Context {
            is_night: true,
            ..Context::default()
        })
    }

    #[test]
    fn test_high_keyword_yields_high() {
        let finding = score("Someone is attacking me with a knife! Help!", None);
        assert_eq!(finding.tier, Tier::High);
        assert!(finding.risk_factors.contains("knife"));
        assert!(finding.confidence >= 0.7 && finding.confidence <= 0.95);
    }

    #[test]
    fn test_high_confidence_caps_at_095() {
        let finding = score("assault with a knife and a gun, I am bleeding and injured", None);
        assert_eq!(finding.tier, Tier::High);
        assert!(finding.counts.high >= 5);
        assert!((finding.confidence - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_two_medium_hits_yield_medium() {
        let finding = score("A stranger touched me inappropriately and made lewd comments", None);
        assert_eq!(finding.tier, Tier::Medium);
        assert!(finding.risk_factors.contains("touched"));
        assert!(finding.risk_factors.contains("lewd"));
        assert!(finding.confidence >= 0.6);
    }

    #[test]
    fn test_single_medium_hit_by_day_is_low() {
        let finding = score("There is a creepy man near the gate", None);
        assert_eq!(finding.counts.medium, 1);
        assert_eq!(finding.tier, Tier::Low);
        assert!((finding.confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_single_medium_hit_at_night_is_medium() {
        let finding = score("There is a creepy man near the gate", night());
        assert_eq!(finding.tier, Tier::Medium);
        // 0.6 + 0.05 for the hit + 0.05 for night
        assert!((finding.confidence - 0.70).abs() < 1e-9);
    }

    #[test]
    fn test_low_hits_are_not_risk_factors() {
        let finding = score("I am worried, what if it happens again?", None);
        assert_eq!(finding.tier, Tier::Low);
        assert_eq!(finding.counts.low, 2);
        assert!(finding.risk_factors.is_empty());
    }

    #[test]
    fn test_context_adjustments_are_additive() {
        let context = Some(Context {
            is_night: true,
            is_isolated: true,
            ..Context::default()
        });
        let finding = score("nothing notable", context);
        assert_eq!(finding.tier, Tier::Low);
        assert!((finding.confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_never_exceeds_one() {
        let context = Some(Context {
            is_night: true,
            is_isolated: true,
            has_location: true,
            has_witness: false,
        });
        let finding = score("knife gun weapon assault rape", context);
        assert!(finding.confidence <= 1.0);
    }

    #[test]
    fn test_recommendation_tables() {
        assert_eq!(analysis_recommendations(Tier::High)[2], "Activate SOS alert");
        assert_eq!(analysis_recommendations(Tier::Medium)[2], "Call safety helpline");
        assert_eq!(analysis_recommendations(Tier::Low)[3], "Consider safety coaching");
    }
}
