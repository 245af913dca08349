//! Keyword matching shared by every lens.
//!
//! Matching is plain substring containment on case-folded text: "harass"
//! matches "harassed" and "harassment". Keywords are folded when a lexicon
//! is loaded, text when it is ingested, so nothing here folds again.

/// Check if any keyword occurs in the text.
pub fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| text.contains(k.as_str()))
}

/// Keywords that occur in the text, in table order.
pub fn matching<'a>(text: &'a str, keywords: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
    keywords
        .iter()
        .map(String::as_str)
        .filter(move |k| text.contains(k))
}

/// Number of distinct keywords that occur in the text.
pub fn count_matches(text: &str, keywords: &[String]) -> usize {
    matching(text, keywords).count()
}
