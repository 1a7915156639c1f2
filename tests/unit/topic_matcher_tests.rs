/*!
 * Tests for topic matching policies
 */

use topicseek::app_config::MatchPolicy;
use topicseek::topic_matcher::{MatchResult, TopicQuery, find_match, overlap_threshold};
use crate::common::{cue, document};

/// Test the overlap policy qualifying on enough shared tokens
#[test]
fn test_find_match_withOverlapAndSharedTokens_shouldQualify() {
    let doc = document(vec![
        cue(0, 4_000, "an unrelated opening remark"),
        cue(5_000, 9_000, "machine learning basics for beginners"),
    ]);
    let query = TopicQuery::new("machine learning basics");

    // 3 shared tokens >= max(3, ceil(0.5 * 3)) = 3
    assert_eq!(find_match(&doc, &query, MatchPolicy::Overlap), MatchResult::Found(1));
}

/// Test the overlap policy rejecting a cue sharing only one token
#[test]
fn test_find_match_withOverlapAndOneSharedToken_shouldNotQualify() {
    let doc = document(vec![cue(0, 4_000, "learning to cook pasta at home")]);
    let query = TopicQuery::new("machine learning basics");

    assert_eq!(find_match(&doc, &query, MatchPolicy::Overlap), MatchResult::NotFound);
}

/// Test the substring policy matching case-insensitively at the right index
#[test]
fn test_find_match_withSubstringDifferentCase_shouldMatchCue() {
    let doc = document(vec![
        cue(0, 4_000, "introduction and housekeeping"),
        cue(5_000, 9_000, "today we discuss NEURAL network design"),
    ]);
    let query = TopicQuery::new("neural network");

    assert_eq!(find_match(&doc, &query, MatchPolicy::Substring), MatchResult::Found(1));
}

/// Test that the first qualifying cue wins, not the best-scoring one
#[test]
fn test_find_match_withMultipleQualifyingCues_shouldReturnFirst() {
    let doc = document(vec![
        cue(0, 1_000, "nothing relevant here"),
        cue(2_000, 3_000, "still nothing relevant"),
        cue(4_000, 5_000, "rust ownership and borrowing rules"),
        cue(6_000, 7_000, "a short aside"),
        cue(8_000, 9_000, "more on that later"),
        cue(10_000, 11_000, "rust ownership and borrowing rules explained again in full"),
    ]);
    let query = TopicQuery::new("rust ownership borrowing rules");

    // Cues 2 and 5 both qualify; document order decides
    assert_eq!(find_match(&doc, &query, MatchPolicy::Overlap), MatchResult::Found(2));
}

/// Test that an empty topic never qualifies under either policy
#[test]
fn test_find_match_withEmptyTopic_shouldReturnNotFound() {
    let doc = document(vec![cue(0, 4_000, "any cue text at all")]);

    for topic in ["", "   ", "!!! ???"] {
        let query = TopicQuery::new(topic);
        assert_eq!(find_match(&doc, &query, MatchPolicy::Overlap), MatchResult::NotFound);
        assert_eq!(find_match(&doc, &query, MatchPolicy::Substring), MatchResult::NotFound);
    }
}

/// Test that matching an empty document finds nothing
#[test]
fn test_find_match_withEmptyDocument_shouldReturnNotFound() {
    let doc = document(Vec::new());
    let query = TopicQuery::new("machine learning basics");

    assert_eq!(find_match(&doc, &query, MatchPolicy::Overlap), MatchResult::NotFound);
    assert_eq!(find_match(&doc, &query, MatchPolicy::Substring), MatchResult::NotFound);
}

/// Test the overlap threshold floor and ceiling arithmetic
#[test]
fn test_overlap_threshold_withVariousTokenCounts_shouldApplyFloorAndCeil() {
    assert_eq!(overlap_threshold(0), 3);
    assert_eq!(overlap_threshold(1), 3);
    assert_eq!(overlap_threshold(3), 3);
    assert_eq!(overlap_threshold(6), 3);
    assert_eq!(overlap_threshold(7), 4);
    assert_eq!(overlap_threshold(10), 5);
}

/// Test the documented substring limitation: the policy is not
/// word-boundary-aware, so a topic can match inside a larger word
#[test]
fn test_find_match_withSubstringInsideLargerWord_shouldStillMatch() {
    let doc = document(vec![cue(0, 4_000, "let us start the demo")]);
    let query = TopicQuery::new("art");

    assert_eq!(find_match(&doc, &query, MatchPolicy::Substring), MatchResult::Found(0));
}

/// Test topic query construction and normalization
#[test]
fn test_topic_query_withMixedCaseTopic_shouldNormalizeTokens() {
    let query = TopicQuery::new("  Machine LEARNING, basics!  ");

    assert_eq!(query.raw(), "Machine LEARNING, basics!");
    assert_eq!(query.tokens().len(), 3);
    assert!(query.tokens().contains("machine"));
    assert!(query.tokens().contains("learning"));
    assert!(query.tokens().contains("basics"));
    assert!(!query.is_empty());
}
