//! Field extraction from free-text job postings
//!
//! All functions are pure and total: text without a salary, keyword or
//! sponsorship mention simply yields `None` / `false`.

use std::sync::OnceLock;

use regex::Regex;

/// Terms that suggest an employer may sponsor a work visa.
/// This is a heuristic and must be presented as one.
pub const SPONSORSHIP_HINTS: &[&str] = &[
    "visa",
    "sponsor",
    "sponsorship",
    "skilled worker",
    "tier 2",
    "work permit",
];

/// "£65,000", "£ 60000", "£120,000": pound sign, an optional space, then 5-6 digits
/// with an optional thousands separator
fn salary_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"£\s?(\d{2,3},?\d{3})").expect("salary pattern is a valid regex")
    })
}

/// Largest GBP figure mentioned in the text, or `None` if there is none
pub fn extract_salary(text: &str) -> Option<u64> {
    salary_pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().replace(',', "").parse::<u64>().ok())
        .max()
}

/// Whether the text contains any of the focus keywords (case-insensitive substring).
/// An empty keyword list, or one made only of blank entries, matches everything.
pub fn matches_focus<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    let mut terms = keywords
        .iter()
        .map(|k| k.as_ref().trim())
        .filter(|k| !k.is_empty())
        .peekable();

    if terms.peek().is_none() {
        return true;
    }

    let haystack = text.to_lowercase();
    terms.any(|term| haystack.contains(&term.to_lowercase()))
}

/// Whether the text mentions visa sponsorship or work permits
pub fn has_sponsorship_hint(text: &str) -> bool {
    let haystack = text.to_lowercase();
    SPONSORSHIP_HINTS.iter().any(|hint| haystack.contains(hint))
}
