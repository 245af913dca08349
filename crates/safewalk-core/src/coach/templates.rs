//! Canned reply texts.

use crate::lenses::analysis_recommendations;
use crate::types::{CopingTechnique, Tier};

pub const FALLBACK_REPLY: &str = "I'm here to help, but I encountered an issue. Could you rephrase your question? If this is urgent, please call 112 or 100 immediately.";

pub const EMERGENCY_TEXT: &str = "🚨 **EMERGENCY DETECTED**\n\n\
    Your safety is at immediate risk. Please take these actions RIGHT NOW:\n\n\
    **IMMEDIATE ACTIONS:**\n\
    1. ☎️ Call 112 (National Emergency) or 100 (Police) IMMEDIATELY\n\
    2. 📍 Share your live location with trusted contacts\n\
    3. 🏃 Move to a safe, public place if possible\n\
    4. 📱 Keep your phone accessible\n\
    5. 🎥 Start recording audio/video if safe to do so\n\n\
    **Emergency Numbers:**\n\
    - Police: 100\n\
    - National Emergency: 112\n\
    - Women Helpline: 1091\n\
    - Ambulance: 108\n\n\
    I'm here to support you, but please prioritize calling emergency services RIGHT NOW. Your safety is the top priority.\n\n\
    Are you able to call for help? Let me know if you need guidance on next steps.";

pub const EMERGENCY_RECOMMENDATIONS: [&str; 4] = [
    "Call emergency services immediately",
    "Move to safe location",
    "Alert trusted contacts",
    "Preserve evidence",
];

const SAFETY_TIPS: &str = "Here are general safety guidelines to keep you protected:\n\n\
    **Personal Safety:**\n\
    - Trust your instincts - if something feels wrong, it probably is\n\
    - Stay alert and aware of your surroundings\n\
    - Keep your phone charged and accessible\n\
    - Share your location with trusted contacts\n\
    - Avoid isolated areas, especially at night\n\n\
    **Emergency Preparedness:**\n\
    - Save emergency numbers on speed dial\n\
    - Know the location of nearby police stations\n\
    - Keep important contacts readily available\n\
    - Learn basic self-defense techniques\n\n\
    **Digital Safety:**\n\
    - Be cautious with personal information online\n\
    - Use strong privacy settings\n\
    - Don't share location publicly in real-time\n\
    - Report any online harassment immediately\n\n\
    Is there a specific situation you'd like guidance on?";

const CAPABILITY_MENU: &str = "I'm here to help! I can assist you with:\n\n\
    ✓ Emergency response guidance\n\
    ✓ Safety tips for specific situations\n\
    ✓ Information about your legal rights\n\
    ✓ How to report incidents\n\
    ✓ Transport and travel safety\n\
    ✓ Online/cyber safety\n\
    ✓ Dealing with harassment or stalking\n\
    ✓ Self-defense strategies\n\
    ✓ Support resources\n\n\
    What specific situation would you like help with?";

const SAFETY_CUES: [&str; 3] = ["safe", "protect", "prevent"];
const QUESTION_CUES: [&str; 3] = ["what", "how", "should"];

const HIGH_RECOMMENDATIONS: [&str; 6] = [
    "Contact emergency services immediately (112/100)",
    "Share live location with trusted contacts",
    "Move to well-lit, crowded area if possible",
    "Document everything - photos, videos, messages",
    "Seek medical attention if injured",
    "File police complaint as soon as safe",
];

const MEDIUM_RECOMMENDATIONS: [&str; 6] = [
    "Alert trusted contacts about the situation",
    "Move to a safe, public location",
    "Call Women Helpline 1091 for guidance",
    "Document incident details immediately",
    "Consider filing police complaint",
    "Avoid being alone until situation resolves",
];

const LOW_RECOMMENDATIONS: [&str; 6] = [
    "Stay alert and trust your instincts",
    "Share your plans with someone you trust",
    "Keep emergency contacts accessible",
    "Review safety guidelines for your situation",
    "Consider taking self-defense training",
    "Join community safety groups",
];

pub const IMMEDIATE_COMFORT: &str = "💚 I want you to know:\n\n\
    - You are safe right now\n\
    - What you're feeling is completely normal\n\
    - Your reaction is valid\n\
    - You are not alone\n\
    - It's okay to ask for help\n\
    - This is not your fault\n\n\
    Take a moment to breathe. You've been brave by reaching out.";

const GROUNDING_SCRIPT: &str = "**Grounding Technique (Try this now):**\n\n\
    Look around and name:\n\
    - 5 things you can see\n\
    - 4 things you can touch\n\
    - 3 things you can hear\n\
    - 2 things you can smell\n\
    - 1 thing you can taste\n\n\
    **Breathing Exercise:**\n\
    1. Breathe in slowly for 4 counts\n\
    2. Hold for 4 counts\n\
    3. Breathe out slowly for 4 counts\n\
    4. Repeat 4 times\n\n\
    This can help calm your nervous system.";

const REASSURANCE_SCRIPT: &str = "**Safety Reassurance:**\n\n\
    Right now, in this moment:\n\
    - You are in a safe space\n\
    - You have taken action by reaching out\n\
    - You have control over your next steps\n\
    - Help is available to you\n\n\
    **What might help:**\n\
    - Talk to someone you trust\n\
    - Focus on what you can control\n\
    - Take things one step at a time\n\
    - Be gentle with yourself";

const SELF_CARE_SCRIPT: &str = "**Self-Care Reminders:**\n\n\
    - Your feelings are valid - allow yourself to feel them\n\
    - Healing is not linear - take your time\n\
    - Small steps are still progress\n\
    - You deserve support and care\n\
    - It's okay to not be okay right now\n\n\
    **Things that might help:**\n\
    - Talk to a trusted friend or family member\n\
    - Write down your feelings\n\
    - Engage in activities that comfort you\n\
    - Get adequate rest\n\
    - Reach out to professional support";

/// Six-item advice list for a coach reply of the given tier.
pub fn coach_recommendations(tier: Tier) -> Vec<String> {
    let list: &[&str] = match tier {
        Tier::High => &HIGH_RECOMMENDATIONS,
        Tier::Medium => &MEDIUM_RECOMMENDATIONS,
        Tier::Low => &LOW_RECOMMENDATIONS,
    };
    list.iter().map(|s| s.to_string()).collect()
}

/// Reply body when no topic bucket matched.
///
/// `content` is the normalized question.
pub fn general_guidance(content: &str, tier: Tier) -> String {
    if SAFETY_CUES.iter().any(|cue| content.contains(cue)) {
        return SAFETY_TIPS.to_string();
    }
    if QUESTION_CUES.iter().any(|cue| content.contains(cue)) {
        return CAPABILITY_MENU.to_string();
    }

    let numbered: Vec<String> = analysis_recommendations(tier)
        .iter()
        .enumerate()
        .map(|(i, rec)| format!("{}. {}", i + 1, rec))
        .collect();

    format!(
        "I understand you're concerned about your safety. I'm here to help with any situation you're facing.\n\n\
         Based on what you've shared, here are some things to consider:\n\n\
         {}\n\n\
         Would you like to tell me more about your specific concern so I can provide more targeted guidance?",
        numbered.join("\n")
    )
}

pub fn coping_script(technique: CopingTechnique) -> &'static str {
    match technique {
        CopingTechnique::Grounding => GROUNDING_SCRIPT,
        CopingTechnique::SafetyReassurance => REASSURANCE_SCRIPT,
        CopingTechnique::SelfCare => SELF_CARE_SCRIPT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_cue_wins_over_question_cue() {
        let text = general_guidance("how do i stay safe", Tier::Low);
        assert!(text.starts_with("Here are general safety guidelines"));
    }

    #[test]
    fn test_question_cue_gives_menu() {
        let text = general_guidance("what can you do", Tier::Low);
        assert!(text.contains("✓ Support resources"));
    }

    #[test]
    fn test_fallback_numbers_analysis_advice() {
        let text = general_guidance("hello there", Tier::Medium);
        assert!(text.contains("1. Alert trusted contacts\n2. Move to well-lit public area"));
        assert!(text.ends_with("more targeted guidance?"));
    }

    #[test]
    fn test_emergency_text_lists_numbers() {
        assert!(EMERGENCY_TEXT.contains("- Ambulance: 108\n\nI'm here to support you"));
    }

    #[test]
    fn test_coach_tables_have_six_items() {
        for tier in [Tier::Low, Tier::Medium, Tier::High] {
            assert_eq!(coach_recommendations(tier).len(), 6);
        }
    }
}
