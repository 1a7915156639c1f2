use std::collections::HashSet;
use log::debug;

use crate::app_config::MatchPolicy;
use crate::caption_parser::CaptionDocument;
use crate::text_utils;

// @module: Topic matching over parsed caption documents

// @const: Minimum shared tokens for an overlap match
pub const MIN_OVERLAP_TOKENS: usize = 3;

/// A topic phrase prepared for matching: the raw trimmed phrase plus its
/// normalized token set. Derived once per lookup and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicQuery {
    raw: String,
    tokens: HashSet<String>,
}

impl TopicQuery {
    /// Build a query from a raw topic phrase
    pub fn new(topic: &str) -> Self {
        TopicQuery {
            raw: topic.trim().to_string(),
            tokens: text_utils::token_set(topic),
        }
    }

    /// The trimmed topic phrase as given by the caller
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized topic tokens
    pub fn tokens(&self) -> &HashSet<String> {
        &self.tokens
    }

    /// Whether the topic carries nothing to match against
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty() || self.tokens.is_empty()
    }
}

/// Outcome of matching a topic against a caption document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// Index of the first qualifying cue in document order
    Found(usize),
    /// No cue qualified under the active policy
    NotFound,
}

/// Find the first cue matching the topic under the given policy.
///
/// Cues are tested in document order and the first qualifying cue wins —
/// this is deliberately first-match, not best-match. An empty topic can
/// never qualify under either policy.
pub fn find_match(document: &CaptionDocument, query: &TopicQuery, policy: MatchPolicy) -> MatchResult {
    if query.is_empty() {
        return MatchResult::NotFound;
    }

    match policy {
        MatchPolicy::Substring => find_substring_match(document, query),
        MatchPolicy::Overlap => find_overlap_match(document, query),
    }
}

/// Number of shared tokens required for a topic with `token_count` tokens
/// to qualify under the overlap policy: `max(3, ceil(0.5 * token_count))`
pub fn overlap_threshold(token_count: usize) -> usize {
    MIN_OVERLAP_TOKENS.max(token_count.div_ceil(2))
}

/// Case-insensitive literal substring search over cue text
fn find_substring_match(document: &CaptionDocument, query: &TopicQuery) -> MatchResult {
    let needle = query.raw().to_lowercase();

    for (index, cue) in document.cues.iter().enumerate() {
        if cue.text().to_lowercase().contains(&needle) {
            debug!("Substring match for '{}' at cue {}", query.raw(), index);
            return MatchResult::Found(index);
        }
    }

    MatchResult::NotFound
}

/// Token-overlap search over normalized cue text
fn find_overlap_match(document: &CaptionDocument, query: &TopicQuery) -> MatchResult {
    let threshold = overlap_threshold(query.tokens().len());

    for (index, cue) in document.cues.iter().enumerate() {
        let cue_tokens = text_utils::token_set(&cue.text());
        let common = query.tokens().intersection(&cue_tokens).count();

        if common >= threshold {
            debug!(
                "Overlap match for '{}' at cue {} ({} of {} tokens shared)",
                query.raw(),
                index,
                common,
                query.tokens().len()
            );
            return MatchResult::Found(index);
        }
    }

    MatchResult::NotFound
}
