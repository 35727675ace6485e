//! Keyword-table categorization. The tables are static configuration,
//! not data discovered at runtime; scoring is case-insensitive
//! substring counting with a higher weight for title hits.

use serde::{Deserialize, Serialize};

/// The closed category set. `General` is the no-match default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Health,
    Economy,
    Politics,
    Sports,
    Culture,
    Inspiration,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Health => "health",
            Self::Economy => "economy",
            Self::Politics => "politics",
            Self::Sports => "sports",
            Self::Culture => "culture",
            Self::Inspiration => "inspiration",
            Self::General => "general",
        }
    }
}

/// Occurrences in the title count this many times an occurrence in the
/// body prefix.
const TITLE_WEIGHT: usize = 3;

/// Only this much of the body participates in scoring; category signal
/// lives near the top of an article.
const BODY_PREFIX_CHARS: usize = 1000;

/// Ordered keyword table: ties between categories resolve to the one
/// declared first. Hebrew-first lists with the English loanwords the
/// source articles actually use.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Technology,
        &[
            "טכנולוגיה", "אפליקציה", "סמארטפון", "מחשב", "אינטרנט", "סייבר", "בינה מלאכותית",
            "blockchain", "crypto", "פיתוח", "תוכנה", "גוגל", "אפל", "מיקרוסופט", "פייסבוק",
            "אמזון", "נטפליקס",
        ],
    ),
    (
        Category::Health,
        &[
            "בריאות", "רפואה", "מחקר", "טיפול", "תזונה", "כושר", "פסיכולוגיה", "נפש", "דיאטה",
            "ויטמין", "חיסון", "קורונה", "רופא", "בית חולים", "תרופה", "מחלה",
        ],
    ),
    (
        Category::Economy,
        &[
            "כלכלה", "כספים", "השקעות", "בורסה", "עסקים", "חברה", "סטארטאפ", "מניות", "ביטקוין",
            "bitcoin", "בנק", "אינפלציה", "משכורת", "מס", "נדלן", "הלוואה", "חוב",
        ],
    ),
    (
        Category::Politics,
        &[
            "פוליטיקה", "ממשלה", "כנסת", "בחירות", "מדינה", "חוק", "מדיניות", "שר", "ראש ממשלה",
            "נשיא", "מפלגה", "קואליציה", "אופוזיציה",
        ],
    ),
    (
        Category::Sports,
        &[
            "ספורט", "כדורגל", "כדורסל", "טניס", "שחייה", "ריצה", "אימון", "אולימפיאדה",
            "מונדיאל", "ליגה", "קבוצה", "שחקן", "מאמן",
        ],
    ),
    (
        Category::Culture,
        &[
            "תרבות", "מוזיקה", "קולנוע", "ספר", "אמנות", "תיאטרון", "מוזיאון", "פסטיבל", "זמר",
            "במאי", "סופר", "ציור",
        ],
    ),
    (
        Category::Inspiration,
        &[
            "השראה", "מוטיבציה", "אישיות", "הצלחה", "חלומות", "מטרות", "פיתוח אישי", "מנהיגות",
            "יזמות", "כישורים", "למידה",
        ],
    ),
];

/// Pick the category whose keywords score highest against the title and
/// the body prefix. All-zero scores give [`Category::General`].
pub fn categorize(title: &str, body: &str) -> Category {
    let title_lower = title.to_lowercase();
    let body_prefix: String = body.chars().take(BODY_PREFIX_CHARS).collect();
    let body_lower = body_prefix.to_lowercase();

    let mut best = Category::General;
    let mut best_score = 0usize;

    for &(category, keywords) in CATEGORY_KEYWORDS {
        let mut score = 0usize;
        for keyword in keywords {
            score += title_lower.matches(keyword).count() * TITLE_WEIGHT;
            score += body_lower.matches(keyword).count();
        }
        // strict comparison keeps the first-declared category on ties
        if score > best_score {
            best = category;
            best_score = score;
        }
    }

    best
}
