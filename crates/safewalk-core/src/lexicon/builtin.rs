//! Built-in tables.

use super::{
    CategoryRule, EmotionalLexicon, LabelRule, LegalRule, Lexicon, SeverityTiers, TopicRule,
};
use crate::types::Topic;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn label(label: &str, keywords: &[&str]) -> LabelRule {
    LabelRule {
        label: label.to_string(),
        keywords: words(keywords),
    }
}

fn topic(topic: Topic, keywords: &[&str], template: &str) -> TopicRule {
    TopicRule {
        topic,
        keywords: words(keywords),
        template: template.to_string(),
    }
}

fn category(category: &str, keywords: &[&str]) -> CategoryRule {
    CategoryRule {
        category: category.to_string(),
        keywords: words(keywords),
    }
}

fn legal(keywords: &[&str], sections: &[&str]) -> LegalRule {
    LegalRule {
        keywords: words(keywords),
        sections: words(sections),
    }
}

const STALKING_TEMPLATE: &str = "Being followed is serious. Here's what to do:\n\n1. Stay in well-lit, public areas\n2. Don't go home - go to a police station, shop, or crowded place\n3. Call a trusted contact and share your live location\n4. Vary your route if this happens regularly\n5. Document everything - times, locations, descriptions\n6. File a police complaint under IPC Section 354D (Stalking)\n\nAre you being followed right now?";

const HARASSMENT_TEMPLATE: &str = "I'm sorry you're experiencing harassment. You have the right to feel safe. Here's what you can do:\n\n1. Firmly say 'NO' or 'STOP' if safe to do so\n2. Move to a crowded area\n3. Document the incident (date, time, location, description)\n4. Report to local police or use women's helpline 1091\n5. Tell trusted people about the situation\n\nThis can be reported under IPC Section 354A (Sexual Harassment). Would you like help documenting this incident?";

const NIGHT_SAFETY_TEMPLATE: &str = "Nighttime safety is important. Here are key tips:\n\n1. Share your live location with trusted contacts\n2. Stay in well-lit areas with people around\n3. Keep phone charged and accessible\n4. Use trusted transport - avoid empty buses/autos\n5. Walk confidently and stay alert\n6. Have emergency numbers on speed dial\n7. Trust your instincts - if something feels wrong, it probably is\n\nAre you traveling somewhere right now? I can give specific advice.";

const TRANSPORT_TEMPLATE: &str = "Transport safety checklist:\n\n1. Share trip details with trusted contacts\n2. Check driver photo and vehicle number\n3. Sit in back seat, never front\n4. Keep one window slightly open\n5. Stay alert, don't sleep\n6. Have emergency contact ready\n7. Trust your gut - cancel if something feels off\n\nFor suspicious behavior, call 112 immediately. Are you in a vehicle now?";

const CYBER_TEMPLATE: &str = "Online safety is crucial. Here's what to do:\n\n1. Don't engage with the harasser\n2. Take screenshots of everything\n3. Block and report the account\n4. Don't share personal information online\n5. Report to Cyber Crime Portal: cybercrime.gov.in\n6. File FIR under IT Act Section 66E or 67\n\nFor blackmail/threats, contact police immediately. Need help documenting cyber evidence?";

const LEGAL_TEMPLATE: &str = "You have strong legal rights. Key information:\n\n**Important Laws:**\n- IPC 354A: Sexual Harassment\n- IPC 354D: Stalking\n- IPC 509: Insulting modesty\n- IPC 375/376: Rape\n- IPC 354: Assault on woman\n\n**Your Rights:**\n- Zero FIR - file anywhere in India\n- Women police stations available\n- Right to free legal aid\n- Cannot be detained at police station\n\n**Helplines:**\n- Women Helpline: 1091\n- Police: 100\n- National Emergency: 112\n\nWould you like help preparing an FIR?";

const EMOTIONAL_TEMPLATE: &str = "Your feelings are completely valid. What you're experiencing is real, and you deserve support.\n\n**Immediate comfort:**\n- Take slow, deep breaths\n- You are not alone\n- This is not your fault\n- Your safety matters most\n\n**Support resources:**\n- National Women Helpline: 1091\n- Mental Health Helpline: 9152987821\n- Talk to trusted friends/family\n\nWould you like to talk through what happened? Or would practical safety steps help right now?";

const EMERGENCY_TOPIC_TEMPLATE: &str = "This sounds like an emergency. Please call 112 (National Emergency) or 100 (Police) immediately. Stay in a safe location if possible. Would you like me to guide you through immediate safety steps?";

impl Lexicon {
    /// The built-in tables.
    pub fn builtin() -> Self {
        Self {
            severity: SeverityTiers {
                high: words(&[
                    "assault", "attacked", "rape", "kidnap", "weapon", "knife", "gun",
                    "bleeding", "injured", "unconscious", "emergency", "help me",
                    "chasing", "grabbed", "forced", "threatening", "violence",
                ]),
                // "threatening" is HIGH only; tiers stay disjoint
                medium: words(&[
                    "following", "stalking", "harass", "uncomfortable", "scared",
                    "suspicious", "alone", "dark", "unsafe", "stranger", "touched",
                    "catcall", "lewd", "inappropriate", "creepy",
                ]),
                low: words(&[
                    "concerned", "worried", "advice", "precaution", "question",
                    "feeling unsafe", "not sure", "should i", "what if",
                ]),
            },

            evidence: vec![
                label("visual_evidence", &["photo", "picture", "image"]),
                label("audio_evidence", &["recording", "audio", "voice"]),
                label("text_evidence", &["message", "text", "chat"]),
                label("witness_account", &["witness", "saw", "people"]),
            ],

            incidents: vec![
                label("physical_incident", &["physical", "touch", "grab"]),
                label("verbal_harassment", &["verbal", "said", "comment"]),
                label("cyber_incident", &["online", "social media", "internet"]),
            ],

            emergency: words(&[
                "help me", "help!", "emergency", "danger", "attacking", "assault", "rape",
                "weapon", "knife", "gun", "bleeding", "injured", "kidnap", "being attacked",
                "right now",
            ]),

            topics: vec![
                topic(
                    Topic::Emergency,
                    &[
                        "help", "emergency", "danger", "attack", "assault", "now", "immediate",
                        "urgent",
                    ],
                    EMERGENCY_TOPIC_TEMPLATE,
                ),
                topic(
                    Topic::Stalking,
                    &["following", "stalking", "watching", "tracking", "chase"],
                    STALKING_TEMPLATE,
                ),
                topic(
                    Topic::Harassment,
                    &["harass", "comment", "catcall", "stare", "uncomfortable", "inappropriate"],
                    HARASSMENT_TEMPLATE,
                ),
                topic(
                    Topic::NightSafety,
                    &["night", "dark", "late", "alone", "evening"],
                    NIGHT_SAFETY_TEMPLATE,
                ),
                topic(
                    Topic::Transport,
                    &["cab", "taxi", "auto", "rickshaw", "uber", "ola", "bus", "metro", "ride"],
                    TRANSPORT_TEMPLATE,
                ),
                topic(
                    Topic::Cyber,
                    &["online", "social media", "messages", "photos", "cyber", "blackmail", "leak"],
                    CYBER_TEMPLATE,
                ),
                topic(
                    Topic::Legal,
                    &["fir", "police", "complaint", "report", "legal", "law", "rights", "section"],
                    LEGAL_TEMPLATE,
                ),
                topic(
                    Topic::Emotional,
                    &[
                        "scared", "afraid", "anxious", "worried", "panic", "stress", "fear",
                        "traumatized",
                    ],
                    EMOTIONAL_TEMPLATE,
                ),
            ],

            emotional: EmotionalLexicon {
                triggers: words(&[
                    "scared", "afraid", "terrified", "anxious", "worried", "panic", "stress",
                    "fear", "traumatized", "upset", "crying", "shaking", "can't sleep",
                    "nightmare", "depressed", "helpless", "alone",
                ]),
                grounding: words(&["panic", "anxious", "shaking"]),
                reassurance: words(&["scared", "afraid", "terrified"]),
            },

            categories: vec![
                category(
                    "Sexual Harassment",
                    &["harass", "touch", "inappropriate", "molest", "grope", "catcall", "lewd"],
                ),
                category(
                    "Physical Assault",
                    &["assault", "hit", "punch", "kick", "beat", "attack", "injured"],
                ),
                category("Stalking", &["stalk", "follow", "chase", "watching", "trailing"]),
                category(
                    "Threat/Intimidation",
                    &["threat", "intimidat", "blackmail", "coerce", "force"],
                ),
                category("Rape/Attempt to Rape", &["rape", "sexual assault", "forced"]),
                category("Domestic Violence", &["husband", "family", "domestic", "home violence"]),
                category("Cybercrime", &["online", "social media", "cyber", "internet", "digital"]),
                category("Eve Teasing", &["eve teas", "comment", "whistle", "gesture"]),
                category(
                    "Kidnapping/Abduction",
                    &["kidnap", "abduct", "taken", "forced into vehicle"],
                ),
                category("Other", &[]),
            ],

            legal: vec![
                legal(
                    &["harass", "touch", "inappropriate"],
                    &[
                        "IPC Section 354A - Sexual Harassment",
                        "IPC Section 509 - Word, gesture or act intended to insult modesty of a woman",
                    ],
                ),
                legal(
                    &["assault", "attack", "hit"],
                    &[
                        "IPC Section 354 - Assault or criminal force to woman with intent to outrage her modesty",
                        "IPC Section 323 - Punishment for voluntarily causing hurt",
                    ],
                ),
                legal(&["stalk", "follow"], &["IPC Section 354D - Stalking"]),
                legal(
                    &["rape", "sexual assault"],
                    &[
                        "IPC Section 375/376 - Rape",
                        "IPC Section 354 - Assault on woman with intent to outrage her modesty",
                    ],
                ),
                legal(
                    &["kidnap", "abduct"],
                    &[
                        "IPC Section 363 - Kidnapping",
                        "IPC Section 366 - Kidnapping, abducting or inducing woman to compel her marriage",
                    ],
                ),
                legal(
                    &["domestic", "husband", "family"],
                    &["Protection of Women from Domestic Violence Act, 2005"],
                ),
                legal(
                    &["online", "cyber", "social media"],
                    &[
                        "IT Act Section 66E - Violation of privacy",
                        "IPC Section 354C - Voyeurism",
                    ],
                ),
            ],

            acknowledgments: words(&[
                "I understand. Let me help you with that.",
                "Thank you for sharing. I'm here to support you.",
                "I hear you. Let's work through this together.",
            ]),

            greetings: words(&[
                "Hello! I'm your safety coach. I'm here to help you stay safe and answer any safety-related questions. How can I assist you today?",
                "Hi! I'm here to support you with any safety concerns or questions. What would you like to know?",
                "Welcome! I'm your personal safety advisor. Feel free to ask me anything about staying safe.",
            ]),
        }
    }
}
