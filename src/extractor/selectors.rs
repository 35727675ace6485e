//! CSS-selector extraction heuristics: an ordered list of known title
//! selectors, an ordered list of content containers, and the last-resort
//! paragraph concatenation.

use crate::extractor::model::{Draft, ExtractionMethod};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

/// Most-specific first; `title` is the last resort.
const TITLE_SELECTORS: &[&str] = &[
    "h1.entry-title",
    "h1.post-title",
    "h1.article-title",
    ".headline",
    ".title",
    "h1",
    "title",
];

const CONTENT_SELECTORS: &[&str] = &[
    "article",
    ".entry-content",
    ".post-content",
    ".article-content",
    ".story-body",
    ".content",
    ".article-body",
    "main",
    ".post-body",
    r#"[itemprop="articleBody"]"#,
];

/// Tags whose text never belongs to the article.
const NOISE_TAGS: &[&str] = &[
    "script", "style", "nav", "header", "footer", "aside", "iframe", "noscript",
];

/// Class tokens marking ads and share widgets nested inside content
/// containers.
const NOISE_CLASSES: &[&str] = &["ad", "ads", "advertisement", "social-share", "share-buttons"];

/// A container must carry more text than this to be believed.
const MIN_CONTAINER_CHARS: usize = 100;

/// Paragraphs at or below this length are labels and captions, not prose.
const MIN_PARAGRAPH_CHARS: usize = 20;

/// Literal markers of boilerplate paragraphs, per supported language.
const BOILERPLATE_MARKERS: &[&str] = &[
    "advertisement",
    "read more",
    "share this",
    "comments",
    "פרסומת",
    "קרא עוד",
    "שתף",
    "תגובות",
];

static TITLE_PARSED: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    TITLE_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("static selector"))
        .collect()
});

static CONTENT_PARSED: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    CONTENT_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("static selector"))
        .collect()
});

static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("static selector"));

/// Selector-based extraction: first title selector with text, first
/// content container with enough cleaned text. Candidates sitting
/// inside page chrome (nav, header, footer and friends) are never
/// considered, as if those subtrees had been removed before selection.
pub fn extract(html: &str, _url: &Url) -> Option<Draft> {
    let document = Html::parse_document(html);

    let title = extract_title(&document)?;
    let body = find_container_text(&document)?;

    Some(Draft {
        title,
        body,
        method: ExtractionMethod::Selector,
    })
}

fn find_container_text(document: &Html) -> Option<String> {
    for selector in CONTENT_PARSED.iter() {
        for container in document.select(selector) {
            if in_noise_subtree(container) {
                continue;
            }
            let text = clean_text(container);
            let trimmed = text.trim();
            if trimmed.chars().count() > MIN_CONTAINER_CHARS {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

/// Paragraph fallback: join every substantial, non-boilerplate `<p>`.
pub fn paragraph_fallback(html: &str, _url: &Url) -> Option<Draft> {
    let document = Html::parse_document(html);

    let title = extract_title(&document)?;

    let mut parts: Vec<String> = Vec::new();
    for p in document.select(&PARAGRAPH) {
        if in_noise_subtree(p) {
            continue;
        }
        let text = p.text().collect::<String>().trim().to_string();
        if text.chars().count() <= MIN_PARAGRAPH_CHARS {
            continue;
        }
        let lowered = text.to_lowercase();
        if BOILERPLATE_MARKERS.iter().any(|m| lowered.contains(m)) {
            continue;
        }
        parts.push(text);
    }

    if parts.is_empty() {
        return None;
    }

    Some(Draft {
        title,
        body: parts.join(" "),
        method: ExtractionMethod::Paragraphs,
    })
}

fn extract_title(document: &Html) -> Option<String> {
    for selector in TITLE_PARSED.iter() {
        for element in document.select(selector) {
            if in_noise_subtree(element) {
                continue;
            }
            let text = element.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

/// Whether a candidate element is itself noise or lives under a noise
/// ancestor anywhere up to the document root.
fn in_noise_subtree(el: ElementRef) -> bool {
    is_noise(&el)
        || el
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|ancestor| is_noise(&ancestor))
}

/// Collect the text of a container, skipping text that sits inside
/// noise tags or ad/share widgets nested within it.
fn clean_text(root: ElementRef) -> String {
    let mut out = String::new();
    for node in root.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let mut noisy = false;
        for ancestor in node.ancestors() {
            if ancestor.id() == root.id() {
                break;
            }
            if let Some(el) = ElementRef::wrap(ancestor)
                && is_noise(&el)
            {
                noisy = true;
                break;
            }
        }
        if !noisy {
            out.push_str(text);
        }
    }
    out
}

fn is_noise(el: &ElementRef) -> bool {
    NOISE_TAGS.contains(&el.value().name())
        || el.value().classes().any(|c| NOISE_CLASSES.contains(&c))
}
