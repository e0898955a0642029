//! Line classification heuristics.
//!
//! Pure predicates over a single line of extracted text. None of these touch
//! the section tracker; they take a string and return plain values, so every
//! line can be classified independently of document state.

use regex::Regex;

/// Keywords that mark a line as belonging to a financial table.
const FINANCIAL_KEYWORDS: [&str; 6] = [
    "net asset",
    "return",
    "risk",
    "volatility",
    "yield",
    "performance",
];

/// Keywords that mark a line as a chart or figure reference.
const CHART_KEYWORDS: [&str; 5] = ["chart", "figure", "graph", "as of", "performance since"];

/// Maximum token count for a section heading.
const SECTION_MAX_TOKENS: usize = 10;

/// Maximum token count for a subsection heading.
const SUBSECTION_MAX_TOKENS: usize = 8;

/// Report whether a line looks like part of a financial table.
///
/// True when the lowercased text contains any financial keyword, or when the
/// text contains a number with an optional decimal fraction and optional
/// trailing percent sign.
pub fn detect_financial_table(text: &str) -> bool {
    let lower = text.to_lowercase();
    if FINANCIAL_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return true;
    }
    let numeric = Regex::new(r"\d+(\.\d+)?%?").unwrap();
    numeric.is_match(text)
}

/// Report whether a line references a chart, figure, or graph.
pub fn detect_chart_indicator(text: &str) -> bool {
    let lower = text.to_lowercase();
    CHART_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Extract an optional section or subsection heading from a line.
///
/// A short all-uppercase line is a section heading; a short line ending in
/// `:` is a subsection heading. The uppercase check runs first, so uppercase
/// text ending in `:` is a section heading. At most one of the two results is
/// `Some`.
pub fn detect_headings(text: &str) -> (Option<String>, Option<String>) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return (None, None);
    }

    let tokens = trimmed.split_whitespace().count();

    if tokens <= SECTION_MAX_TOKENS && is_uppercase(trimmed) {
        return (Some(trimmed.to_string()), None);
    }

    if trimmed.ends_with(':') && tokens <= SUBSECTION_MAX_TOKENS {
        return (None, Some(trimmed.to_string()));
    }

    (None, None)
}

/// Casing test for section headings: at least one uppercase character and no
/// lowercase ones. Digits and punctuation are ignored, but a string with no
/// cased characters at all does not qualify.
fn is_uppercase(text: &str) -> bool {
    let mut has_upper = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_upper = true;
        }
    }
    has_upper
}
