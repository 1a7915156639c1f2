/*!
 * Tests for the lookup orchestrator
 */

use topicseek::app_config::MatchPolicy;
use topicseek::errors::LookupError;
use topicseek::lookup::lookup;
use crate::common;

/// Test the end-to-end lookup resolving the second cue's timestamp exactly
#[test]
fn test_lookup_withTopicInSecondCue_shouldReturnSecondCueTimestamp() {
    let result = lookup(common::sample_vtt(), "machine learning basics", MatchPolicy::Overlap);
    assert_eq!(result.unwrap(), "00:01:10");
}

/// Test the substring policy through the orchestrator
#[test]
fn test_lookup_withSubstringPolicy_shouldReturnMatchingCueTimestamp() {
    let result = lookup(common::sample_vtt(), "neural network", MatchPolicy::Substring);
    assert_eq!(result.unwrap(), "00:01:10");
}

/// Test that empty caption content always yields TopicNotFound
#[test]
fn test_lookup_withEmptyCaptions_shouldReturnTopicNotFound() {
    let result = lookup("", "machine learning basics", MatchPolicy::Overlap);

    assert_eq!(
        result.unwrap_err(),
        LookupError::TopicNotFound {
            topic: "machine learning basics".to_string()
        }
    );
}

/// Test that an empty topic is a distinct configuration error
#[test]
fn test_lookup_withEmptyTopic_shouldReturnEmptyTopicError() {
    assert_eq!(
        lookup(common::sample_vtt(), "", MatchPolicy::Overlap).unwrap_err(),
        LookupError::EmptyTopic
    );
    assert_eq!(
        lookup(common::sample_vtt(), "   ", MatchPolicy::Substring).unwrap_err(),
        LookupError::EmptyTopic
    );
    assert_eq!(
        lookup(common::sample_vtt(), "?!...", MatchPolicy::Overlap).unwrap_err(),
        LookupError::EmptyTopic
    );
}

/// Test that an unmatched topic reports TopicNotFound with the phrase
#[test]
fn test_lookup_withUnmatchedTopic_shouldReturnTopicNotFound() {
    let result = lookup(common::sample_vtt(), "quantum chromodynamics lattice simulations", MatchPolicy::Overlap);

    assert!(matches!(
        result.unwrap_err(),
        LookupError::TopicNotFound { topic } if topic == "quantum chromodynamics lattice simulations"
    ));
}
