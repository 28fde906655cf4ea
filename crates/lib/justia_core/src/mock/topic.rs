//! Keyword topic classification.

/// Legal topics the offline responder can answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Rental,
    Labour,
    Consumer,
    DomesticViolence,
    /// No keyword matched: greet and ask for the issue.
    Welcome,
}

/// Keyword sets in priority order. Earlier entries win when a message
/// mentions several topics.
const KEYWORDS: &[(Topic, &[&str])] = &[
    (
        Topic::Rental,
        &["deposit", "rent", "landlord", "tenant", "किराया", "வாடகை", "అద్దె", "ভাড়া"],
    ),
    (
        Topic::Labour,
        &["salary", "wage", "job", "employer", "labour", "वेतन", "ஊதியம்", "జీతం", "মজুরি"],
    ),
    (
        Topic::Consumer,
        &["consumer", "product", "refund", "defect", "ecommerce", "उत्पाद", "பொருள்"],
    ),
    (
        Topic::DomesticViolence,
        &["violence", "domestic", "husband", "wife", "घरेलू", "வன்முறை"],
    ),
];

/// Pick the first topic whose keyword set has a substring hit in the
/// lowercased message.
pub fn classify(message: &str) -> Topic {
    let msg = message.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| msg.contains(w)))
        .map(|(topic, _)| *topic)
        .unwrap_or(Topic::Welcome)
}
