use crate::extractor::language::Language;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Which extraction strategy produced the article. The serde labels
/// match [`ExtractionMethod::as_str`] so logs and serialized records
/// share one vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionMethod {
    /// Whole-document readability parse.
    #[serde(rename = "structured")]
    Structured,
    /// CSS-selector heuristics over known title/content containers.
    #[serde(rename = "selector-based")]
    Selector,
    /// Concatenation of substantial `<p>` elements.
    #[serde(rename = "paragraph-fallback")]
    Paragraphs,
}

impl ExtractionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::Selector => "selector-based",
            Self::Paragraphs => "paragraph-fallback",
        }
    }
}

/// The result of a successful extraction. Created once per fetch and
/// immutable afterward; a failed extraction produces nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedArticle {
    pub title: String,
    pub body: String,
    pub language: Language,
    pub method: ExtractionMethod,
}

/// Truncation caps applied after whichever strategy succeeded.
#[derive(Debug, Clone, Copy)]
pub struct ExtractLimits {
    pub max_title_chars: usize,
    pub max_body_chars: usize,
}

impl Default for ExtractLimits {
    fn default() -> Self {
        Self {
            max_title_chars: 200,
            max_body_chars: 8000,
        }
    }
}

/// An untrimmed candidate produced by one strategy.
#[derive(Debug)]
pub struct Draft {
    pub title: String,
    pub body: String,
    pub method: ExtractionMethod,
}

static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static NEWLINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n+").unwrap());

/// Collapse space/tab runs to one space and blank-line runs to one
/// paragraph break.
pub fn normalize_whitespace(text: &str) -> String {
    let spaced = SPACE_RUNS.replace_all(text.trim(), " ");
    NEWLINE_RUNS.replace_all(&spaced, "\n\n").to_string()
}

/// Truncate to at most `max_chars` characters, replacing the tail with
/// an ellipsis marker when anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_runs() {
        assert_eq!(
            normalize_whitespace("  Hello    world  \n\n\n  Test  "),
            "Hello world \n\n Test"
        );
    }

    #[test]
    fn truncate_is_char_based() {
        // Hebrew characters are multi-byte; the cap counts characters
        let long: String = "א".repeat(50);
        let cut = truncate_chars(&long, 20);
        assert_eq!(cut.chars().count(), 20);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate_chars("short", 20), "short");
    }

    #[test]
    fn method_serde_labels_match_as_str() {
        for method in [
            ExtractionMethod::Structured,
            ExtractionMethod::Selector,
            ExtractionMethod::Paragraphs,
        ] {
            assert_eq!(serde_json::to_value(method).unwrap(), method.as_str());
        }
    }
}
