//! Extractive summarization: split the body into sentences, score them
//! by term frequency with positional and length adjustments, select a
//! bounded subset, and reassemble in document order. Summarization must
//! never block saving an article, so every internal dead end degrades
//! to a leading-sentence truncation instead of an error.

pub mod stopwords;

use crate::extractor::Language;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::warn;

/// Fragments at or below this many characters are headers and labels,
/// not sentences.
const MIN_SENTENCE_CHARS: usize = 10;

/// Tokens must be longer than this to enter the frequency table.
const MIN_TOKEN_CHARS: usize = 2;

/// Headroom kept while greedily adding sentences so the joined result
/// rarely needs a hard cut.
const SELECTION_BUFFER_CHARS: usize = 50;

const MAX_SUMMARY_SENTENCES: usize = 3;

/// Sentences in the leading fraction of the document get this weight;
/// news writing front-loads the substance (inverted pyramid).
const LEAD_FRACTION: f64 = 0.3;
const LEAD_BONUS: f64 = 1.5;

/// Weight for sentences in the natural length band: not a fragment, not
/// a run-on.
const NATURAL_MIN_CHARS: usize = 20;
const NATURAL_MAX_CHARS: usize = 150;
const LENGTH_BONUS: f64 = 1.2;

/// Weight for sentences carrying a digit or a lead-in word.
const SIGNAL_BONUS: f64 = 1.3;

/// When hard-truncating, a sentence boundary within the last fraction
/// of the budget is preferred over a mid-word cut.
const BOUNDARY_WINDOW: f64 = 0.3;

static SENTENCE_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+\s+").unwrap());
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Produce a summary of at most `max_chars` characters. Deterministic:
/// the same body and constants always give the same text.
pub fn summarize(body: &str, language: Language, max_chars: usize) -> String {
    match summarize_inner(body, language, max_chars) {
        Some(summary) => summary,
        None => {
            warn!("summary scoring produced nothing, using leading sentences");
            fallback(body, max_chars)
        }
    }
}

fn summarize_inner(body: &str, language: Language, max_chars: usize) -> Option<String> {
    let sentences: Vec<&str> = SENTENCE_SPLIT
        .split(body)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .collect();

    if sentences.is_empty() {
        return None;
    }

    // Degenerate short-article case: nothing to rank
    if sentences.len() <= 2 {
        return Some(fit_to_budget(&sentences.join(". "), max_chars));
    }

    let frequencies = term_frequencies(body, language);
    let scored = score_sentences(&sentences, &frequencies, language);
    if scored.iter().all(|&(_, score)| score <= 0.0) {
        return None;
    }

    let selected = select_sentences(&sentences, scored, max_chars);

    Some(fit_to_budget(&selected.join(". "), max_chars))
}

fn term_frequencies(body: &str, language: Language) -> HashMap<String, f64> {
    let stop = stopwords::for_language(language);
    let lowered = body.to_lowercase();

    let mut freq = HashMap::new();
    for token in WORD.find_iter(&lowered) {
        let word = token.as_str();
        if word.chars().count() > MIN_TOKEN_CHARS && !stop.contains(word) {
            *freq.entry(word.to_string()).or_insert(0.0) += 1.0;
        }
    }
    freq
}

/// Score = sum of term frequencies, then multiplicative position,
/// length and signal adjustments. Returns `(position, score)` pairs.
fn score_sentences(
    sentences: &[&str],
    frequencies: &HashMap<String, f64>,
    language: Language,
) -> Vec<(usize, f64)> {
    let lead_cutoff = (sentences.len() as f64 * LEAD_FRACTION).ceil() as usize;
    let signals = stopwords::signal_words(language);

    sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            let lowered = sentence.to_lowercase();

            let mut score: f64 = WORD
                .find_iter(&lowered)
                .filter_map(|t| frequencies.get(t.as_str()))
                .sum();

            if i < lead_cutoff {
                score *= LEAD_BONUS;
            }

            let chars = sentence.chars().count();
            if chars > NATURAL_MIN_CHARS && chars < NATURAL_MAX_CHARS {
                score *= LENGTH_BONUS;
            }

            if lowered.chars().any(|c| c.is_ascii_digit())
                || signals.iter().any(|w| lowered.contains(w))
            {
                score *= SIGNAL_BONUS;
            }

            (i, score)
        })
        .collect()
}

/// Greedy pick by descending score (ties go to the earlier sentence),
/// bounded by the character budget and a sentence cap, then reordered
/// into document order.
fn select_sentences<'a>(
    sentences: &[&'a str],
    mut scored: Vec<(usize, f64)>,
    max_chars: usize,
) -> Vec<&'a str> {
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    let budget = max_chars.saturating_sub(SELECTION_BUFFER_CHARS);
    let mut picked: Vec<usize> = Vec::new();
    let mut total = 0usize;

    for &(position, _) in &scored {
        let len = sentences[position].chars().count();
        if total + len <= budget {
            picked.push(position);
            total += len;
            if picked.len() >= MAX_SUMMARY_SENTENCES {
                break;
            }
        }
    }

    // Nothing fit under the buffered budget: keep the single best
    // sentence and let the final truncation trim it
    if picked.is_empty() {
        picked.push(scored[0].0);
    }

    picked.sort_unstable();
    picked.iter().map(|&i| sentences[i]).collect()
}

/// Enforce the budget, preferring a cut at the last sentence boundary
/// within the final window of the budget over a raw character cut.
fn fit_to_budget(text: &str, max_chars: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return text.to_string();
    }

    let floor = (max_chars as f64 * (1.0 - BOUNDARY_WINDOW)) as usize;
    let boundary = chars[..max_chars]
        .iter()
        .rposition(|&c| c == '.')
        .filter(|&i| i >= floor);

    match boundary {
        Some(i) => chars[..=i].iter().collect(),
        None => {
            let mut out: String = chars[..max_chars.saturating_sub(3)].iter().collect();
            out.push_str("...");
            out
        }
    }
}

/// Degraded output: the first two raw sentences, truncated to budget.
fn fallback(body: &str, max_chars: usize) -> String {
    let lead = body
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(2)
        .collect::<Vec<_>>()
        .join(". ");

    if lead.is_empty() {
        return String::new();
    }
    fit_to_budget(&format!("{lead}."), max_chars)
}
