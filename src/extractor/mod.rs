pub mod language;
pub mod model;
pub mod selectors;
pub mod structured;

#[cfg(test)]
mod tests;

pub use language::Language;
pub use model::{ExtractLimits, ExtractedArticle, ExtractionMethod};

use model::{Draft, normalize_whitespace, truncate_chars};
use tracing::debug;
use url::Url;

/// A body at or below this length (after trimming) is not an article.
const MIN_BODY_CHARS: usize = 100;

type Strategy = fn(&str, &Url) -> Option<Draft>;

/// Ordered fallback chain; the first strategy producing both a title
/// and a large-enough body wins.
const STRATEGIES: &[Strategy] = &[
    structured::extract,
    selectors::extract,
    selectors::paragraph_fallback,
];

/// Extract `(title, body, language)` from raw HTML, or `None` when the
/// page has no extractable article. `None` is a normal outcome, not an
/// error.
pub fn extract(html: &str, url: &Url, limits: &ExtractLimits) -> Option<ExtractedArticle> {
    for strategy in STRATEGIES {
        let Some(draft) = strategy(html, url) else {
            continue;
        };

        let title = normalize_whitespace(&draft.title);
        let body = normalize_whitespace(&draft.body);
        if title.is_empty() || body.chars().count() <= MIN_BODY_CHARS {
            debug!(method = draft.method.as_str(), "candidate below thresholds");
            continue;
        }

        let title = truncate_chars(&title, limits.max_title_chars);
        let body = truncate_chars(&body, limits.max_body_chars);
        let language = language::detect(&language::detection_sample(&title, &body));

        return Some(ExtractedArticle {
            title,
            body,
            language,
            method: draft.method,
        });
    }

    None
}
