use serde::{Deserialize, Serialize};

/// Detected article language. The closed set reflects the audiences
/// this pipeline serves; anything outside the Hebrew and Arabic scripts
/// is treated as English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    He,
    Ar,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::He => "he",
            Self::Ar => "ar",
            Self::En => "en",
        }
    }
}

/// How much of the body joins the title in the detection sample.
/// Scanning the whole body would be wasted work; script shows up in the
/// first few hundred characters.
const SAMPLE_BODY_CHARS: usize = 500;

/// Detect by Unicode block, in order: any Hebrew code point wins, then
/// any Arabic code point, then the English default.
pub fn detect(sample: &str) -> Language {
    if sample.chars().any(|c| ('\u{0590}'..='\u{05FF}').contains(&c)) {
        Language::He
    } else if sample.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c)) {
        Language::Ar
    } else {
        Language::En
    }
}

/// Build the sample `detect` looks at: title plus the start of the body.
pub fn detection_sample(title: &str, body: &str) -> String {
    let head: String = body.chars().take(SAMPLE_BODY_CHARS).collect();
    format!("{title} {head}")
}
