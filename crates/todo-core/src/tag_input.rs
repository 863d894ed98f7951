//! Tag Input Helpers
//!
//! Text handling behind the chip inputs: batch entry and suggestions.

use std::collections::HashSet;

/// Split chip input on `;` or `,` into distinct, trimmed tags
pub fn parse_tag_input(input: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    input
        .split([';', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(*s))
        .map(str::to_string)
        .collect()
}

/// Simple fuzzy match: check if query chars appear in order in the target
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    let mut target_chars = target.chars();
    query
        .chars()
        .all(|query_char| target_chars.any(|c| c == query_char))
}

/// Up to `limit` known tags matching `query`, skipping ones in `exclude`
pub fn suggest_tags<'a>(
    known: &'a [String],
    query: &str,
    exclude: &[String],
    limit: usize,
) -> Vec<&'a str> {
    let query = query.trim();
    if query.is_empty() {
        return vec![];
    }
    known
        .iter()
        .filter(|tag| !exclude.contains(*tag))
        .filter(|tag| fuzzy_match(query, tag))
        .take(limit)
        .map(String::as_str)
        .collect()
}
