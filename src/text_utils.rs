use std::collections::HashSet;

// @module: Text normalization utilities

/// Lowercase text and strip every character that is not a letter, digit or
/// whitespace. The result is suitable for token comparison.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Normalize text and split it on whitespace into a set of tokens.
/// Duplicates collapse; token order is irrelevant. Empty input yields an
/// empty set.
pub fn token_set(text: &str) -> HashSet<String> {
    normalize(text)
        .split_whitespace()
        .map(|token| token.to_string())
        .collect()
}
