//! Helplines and portals attached to coach replies.

use crate::types::{Resource, ResourceKind, SupportContact, Tier, Topic};

/// Fixed resources on the emergency branch.
pub fn emergency_resources() -> Vec<Resource> {
    vec![
        Resource::number("Police", "100", ResourceKind::Emergency),
        Resource::number("National Emergency", "112", ResourceKind::Emergency),
        Resource::number("Women Helpline", "1091", ResourceKind::Emergency),
    ]
}

/// Resources for a routed reply: emergency lines first when HIGH, then the
/// topic's own lines.
pub fn reply_resources(topic: Topic, tier: Tier) -> Vec<Resource> {
    let mut resources = Vec::new();

    if tier == Tier::High {
        resources.extend([
            Resource::number("Police Emergency", "100", ResourceKind::Emergency),
            Resource::number("National Emergency", "112", ResourceKind::Emergency),
            Resource::number("Women Helpline", "1091", ResourceKind::Emergency),
            Resource::number("Ambulance", "108", ResourceKind::Emergency),
        ]);
    }

    match topic {
        Topic::Cyber => resources.extend([
            Resource::url(
                "Cyber Crime Portal",
                "https://cybercrime.gov.in",
                ResourceKind::Reporting,
            ),
            Resource::number("Women Helpline", "1091", ResourceKind::Support),
        ]),
        Topic::Legal => resources.extend([
            Resource::number("Legal Services Authority", "15100", ResourceKind::Legal),
            Resource::url("Women Commission", "https://ncw.nic.in", ResourceKind::Legal),
        ]),
        Topic::Emotional => resources.extend([
            Resource::number("Vandrevala Foundation", "1860-2662-345", ResourceKind::MentalHealth),
            Resource::number("iCall Helpline", "9152987821", ResourceKind::MentalHealth),
            Resource::number("NIMHANS", "080-46110007", ResourceKind::MentalHealth),
        ]),
        _ => resources.extend([
            Resource::number("Women Helpline", "1091", ResourceKind::Support),
            Resource::number("Police", "100", ResourceKind::Emergency),
        ]),
    }

    resources
}

/// Professional-help lines offered with emotional support.
pub fn professional_help() -> Vec<SupportContact> {
    [
        ("Vandrevala Foundation (24/7)", "1860-2662-345", "Free mental health support"),
        ("iCall Psychological Helpline", "9152987821", "Mon-Sat, 8am-10pm"),
        ("NIMHANS Helpline", "080-46110007", "Mental health emergency"),
    ]
    .into_iter()
    .map(|(name, number, note)| SupportContact {
        name: name.to_string(),
        number: number.to_string(),
        note: note.to_string(),
    })
    .collect()
}
