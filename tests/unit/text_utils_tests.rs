/*!
 * Tests for text normalization
 */

use std::collections::HashSet;
use topicseek::text_utils::{normalize, token_set};

fn set_of(tokens: &[&str]) -> HashSet<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

/// Test lowercasing and punctuation stripping
#[test]
fn test_normalize_withPunctuation_shouldLowercaseAndStrip() {
    assert_eq!(normalize("Hello, World!!"), "hello world");
    assert_eq!(normalize("What's up?"), "whats up");
}

/// Test the canonical tokenization example
#[test]
fn test_token_set_withPunctuatedText_shouldYieldCleanTokens() {
    assert_eq!(token_set("Hello, World!!"), set_of(&["hello", "world"]));
}

/// Test that digits survive normalization
#[test]
fn test_token_set_withDigits_shouldKeepDigits() {
    assert_eq!(token_set("Rust 2024 edition"), set_of(&["rust", "2024", "edition"]));
}

/// Test that duplicate tokens collapse
#[test]
fn test_token_set_withDuplicates_shouldCollapse() {
    let tokens = token_set("the the THE the");
    assert_eq!(tokens, set_of(&["the"]));
    assert_eq!(tokens.len(), 1);
}

/// Test empty and whitespace-only input
#[test]
fn test_token_set_withEmptyInput_shouldYieldEmptySet() {
    assert!(token_set("").is_empty());
    assert!(token_set("   \t\n  ").is_empty());
    assert!(token_set("!!! ... ???").is_empty());
}

/// Test that underscores are stripped like any other punctuation,
/// fusing the surrounding characters into one token
#[test]
fn test_token_set_withUnderscores_shouldStripThem() {
    assert_eq!(token_set("snake_case"), set_of(&["snakecase"]));
}
