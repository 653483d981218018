//! Keyword tables and regex patterns for clause detection
//!
//! All patterns are matched against lower-cased sentence text.

use lazy_static::lazy_static;
use regex::Regex;

/// Any of these marks a sentence as a liability/indemnity clause
pub const LIABILITY_KEYWORDS: &[&str] = &[
    "liability",
    "indemnify",
    "indemnification",
    "hold harmless",
    "consequential damages",
    "indirect damages",
    "unlimited",
    "cap on liability",
];

/// Literal markers of uncapped exposure
pub const UNLIMITED_MARKER: &str = "unlimited";

/// Literal marker of an explicit cap
pub const CAP_MARKER: &str = "cap on liability";

lazy_static! {
    /// "without limit", "without   limitation", ...
    pub static ref WITHOUT_LIMIT_PATTERN: Regex = Regex::new(r"without\s+limit").unwrap();

    /// "no cap", "no\ncap", ...
    pub static ref NO_CAP_PATTERN: Regex = Regex::new(r"no\s+cap").unwrap();

    /// "liability" followed anywhere later in the same sentence by a cap phrase.
    /// Dot matches newlines so a wrapped line inside one sentence still counts.
    pub static ref CAPPED_LIABILITY_PATTERN: Regex =
        Regex::new(r"(?s)liability.*(shall not exceed|is limited to)").unwrap();
}

/// True if the lower-cased text contains any of the keywords
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Sentence suggests liability without an upper bound
pub fn has_unlimited_language(lower: &str) -> bool {
    lower.contains(UNLIMITED_MARKER)
        || WITHOUT_LIMIT_PATTERN.is_match(lower)
        || NO_CAP_PATTERN.is_match(lower)
}

/// Sentence states a cap on liability
pub fn has_cap_language(lower: &str) -> bool {
    lower.contains(CAP_MARKER) || CAPPED_LIABILITY_PATTERN.is_match(lower)
}
