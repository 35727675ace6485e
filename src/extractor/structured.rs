use crate::extractor::model::{Draft, ExtractionMethod};
use readability::extractor;
use url::Url;

/// Whole-document readability parse. Failure here is silent; the next
/// strategy in the chain gets its turn.
pub fn extract(html: &str, url: &Url) -> Option<Draft> {
    let article = extractor::extract(&mut html.as_bytes(), url).ok()?;

    let title = article.title.trim();
    let body = article.text.trim();
    if title.is_empty() || body.is_empty() {
        return None;
    }

    Some(Draft {
        title: title.to_string(),
        body: body.to_string(),
        method: ExtractionMethod::Structured,
    })
}
