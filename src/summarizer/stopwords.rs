//! Static stop-word sets per supported language. These are function
//! words that would otherwise dominate the term-frequency table.

use crate::extractor::Language;
use std::collections::HashSet;
use std::sync::LazyLock;

static HEBREW: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "של", "את", "על", "אל", "עם", "כל", "כי", "אם", "לא", "או", "גם", "רק", "אבל", "אך",
        "כך", "כן", "לכן", "אז", "שם", "פה", "זה", "זו", "הוא", "היא", "אני", "אתה", "אנחנו",
        "אתם", "הם", "הן", "יש", "יהיה", "היה", "להיות",
    ])
});

static ARABIC: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "من", "في", "على", "إلى", "عن", "أن", "إن", "كان", "كانت", "هذا", "هذه", "ذلك", "التي",
        "الذي", "ما", "لا", "لم", "لن", "قد", "كل", "بعد", "قبل", "بين", "حتى", "إذا", "ثم",
        "أو", "هو", "هي",
    ])
});

static ENGLISH: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "the", "and", "for", "that", "with", "this", "from", "was", "are", "has", "have", "had",
        "not", "but", "you", "all", "can", "her", "his", "she", "him", "its", "one", "our",
        "out", "who", "get", "will", "been", "were", "they", "their", "there", "about", "which",
        "when", "what", "would", "could", "should", "into", "more", "some", "such", "than",
        "then", "these", "those", "only", "over", "also", "after", "before", "while",
    ])
});

pub fn for_language(language: Language) -> &'static HashSet<&'static str> {
    match language {
        Language::He => &HEBREW,
        Language::Ar => &ARABIC,
        Language::En => &ENGLISH,
    }
}

/// Words whose presence marks a sentence as carrying the article's main
/// point: superlatives and lead-in markers in the source language.
pub fn signal_words(language: Language) -> &'static [&'static str] {
    match language {
        Language::He => &["ראשון", "עיקרי", "חשוב", "מרכזי"],
        Language::Ar => &["أول", "رئيسي", "مهم"],
        Language::En => &["first", "main", "important", "key"],
    }
}
