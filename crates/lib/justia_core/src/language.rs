//! Supported response languages.

use std::fmt;

/// Languages with pre-authored content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Hindi,
    Tamil,
    Telugu,
    Bengali,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Hindi,
        Language::Tamil,
        Language::Telugu,
        Language::Bengali,
    ];

    /// Parse an ISO 639-1 code. Matching is exact; unknown codes are `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::English),
            "hi" => Some(Language::Hindi),
            "ta" => Some(Language::Tamil),
            "te" => Some(Language::Telugu),
            "bn" => Some(Language::Bengali),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::Bengali => "bn",
        }
    }

    /// Instruction appended to the model's system prompt.
    pub fn directive(self) -> &'static str {
        match self {
            Language::English => "Respond in clear, simple English.",
            Language::Hindi => "Respond ENTIRELY in Hindi (Devanagari script).",
            Language::Tamil => "Respond ENTIRELY in Tamil script.",
            Language::Telugu => "Respond ENTIRELY in Telugu script.",
            Language::Bengali => "Respond ENTIRELY in Bengali script.",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
