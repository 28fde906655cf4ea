//! Offline responder used when no AI provider is configured or the provider
//! call fails.
//!
//! Classification and rendering are pure: the same (message, language,
//! state) always produces byte-identical text.

pub mod templates;
pub mod topic;

use crate::data::ReferenceData;
use crate::language::Language;

pub use topic::{Topic, classify};

/// Classify `message` and render the matching template.
///
/// `language` is a raw request code; codes without an authored template for
/// the detected topic get the English text. An unknown `state` id is ignored.
pub fn generate(data: &ReferenceData, message: &str, language: &str, state: Option<&str>) -> String {
    let topic = classify(message);
    render(data, topic, language, state)
}

/// Render a known topic.
pub fn render(data: &ReferenceData, topic: Topic, language: &str, state: Option<&str>) -> String {
    let lang = templates::served_language(topic, Language::from_code(language));
    match topic {
        Topic::Rental => {
            let state = state.and_then(|id| data.state(id).ok());
            templates::rental(lang, state)
        }
        Topic::Labour => templates::labour(lang).to_string(),
        Topic::Consumer => templates::consumer(lang).to_string(),
        Topic::DomesticViolence => templates::domestic_violence(lang).to_string(),
        Topic::Welcome => templates::welcome(lang).to_string(),
    }
}
