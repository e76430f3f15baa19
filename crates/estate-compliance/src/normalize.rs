//! Translate descriptive jurisdiction names into state codes
//!
//! Registration forms offer entries like "California, USA". This adapter maps
//! them to a [`State`] at the boundary; the compliance service itself only
//! accepts codes.

use lazy_static::lazy_static;
use regex::Regex;

use crate::jurisdiction::State;

lazy_static! {
    /// Trailing country qualifier, e.g. ", USA" or " United States of America"
    static ref US_SUFFIX_PATTERN: Regex =
        Regex::new(r"(?i)\s*,?\s*\b(?:u\.?s\.?a?\.?|united\s+states(?:\s+of\s+america)?)\s*$").unwrap();

    /// Any other trailing ", Country" qualifier
    static ref FOREIGN_SUFFIX_PATTERN: Regex = Regex::new(r",\s*[^,]+$").unwrap();
}

/// Resolve a name such as "California, USA", "new york" or "TX" to a state.
///
/// Returns `None` for entries outside the US ("Ontario, Canada", "Germany")
/// and for placeholders such as "Other".
pub fn normalize_jurisdiction(input: &str) -> Option<State> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let stripped = US_SUFFIX_PATTERN.replace(trimmed, "");
    let candidate = stripped.trim();

    // "Ontario, Canada" keeps its foreign qualifier and never matches a state
    if FOREIGN_SUFFIX_PATTERN.is_match(candidate) {
        return None;
    }

    State::parse_code(candidate).or_else(|| State::from_name(candidate))
}
