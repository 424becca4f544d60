use super::types::IntentFlags;

// Keyword vocabularies for the five intent detectors. Matching is substring
// containment over the lowercased query, not word-boundary matching, so
// unrelated words can trigger a flag ("laptop" contains "top").
const RATING_KEYWORDS: &[&str] = &["rating", "rated", "ratings", "star", "stars", "review"];
const HIGH_KEYWORDS: &[&str] = &["higher", "high", "above", "more", "greater", "over", "than"];
const LOW_KEYWORDS: &[&str] = &[
    "lower", "low", "below", "less", "lesser", "under", "cheaper", "budget",
];
const BEST_KEYWORDS: &[&str] = &["best", "top", "highest", "excellent", "premium", "flagship"];
const RANGE_KEYWORDS: &[&str] = &["between", "range", "from", "to"];

/// True if the query mentions ratings or reviews.
pub fn has_rating_keyword(query: &str) -> bool {
    contains_any(query, RATING_KEYWORDS)
}

/// True if the query asks for values above a threshold.
pub fn has_high_keyword(query: &str) -> bool {
    contains_any(query, HIGH_KEYWORDS)
}

/// True if the query asks for values below a threshold.
pub fn has_low_keyword(query: &str) -> bool {
    contains_any(query, LOW_KEYWORDS)
}

/// True if the query asks for the best/top products.
pub fn has_best_keyword(query: &str) -> bool {
    contains_any(query, BEST_KEYWORDS)
}

/// True if the query mentions a range.
pub fn has_range_keyword(query: &str) -> bool {
    contains_any(query, RANGE_KEYWORDS)
}

/// Runs all five detectors. The detectors are independent; any combination of
/// flags can be set for a single query.
pub fn detect_flags(query: &str) -> IntentFlags {
    IntentFlags {
        rating_mention: has_rating_keyword(query),
        high: has_high_keyword(query),
        low: has_low_keyword(query),
        best: has_best_keyword(query),
        range: has_range_keyword(query),
    }
}

fn contains_any(query: &str, keywords: &[&str]) -> bool {
    let lowered = query.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}
