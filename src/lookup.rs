/*!
 * Lookup orchestrator: composes parsing, matching and timestamp resolution
 * into a single call over in-memory caption text.
 *
 * The miss policy (fail vs. sentinel) is deliberately not applied here —
 * this function always reports `TopicNotFound` and leaves the deployment
 * choice to the controller.
 */

use log::{debug, info};

use crate::app_config::MatchPolicy;
use crate::caption_parser::CaptionDocument;
use crate::errors::LookupError;
use crate::topic_matcher::{self, MatchResult, TopicQuery};

/// Find the first mention of `topic` in caption text and return its cue's
/// start timestamp as HH:MM:SS.
///
/// An empty caption document is not an error; it simply yields
/// `TopicNotFound`. A topic that normalizes to nothing is a caller mistake
/// and yields `EmptyTopic` instead.
pub fn lookup(caption_text: &str, topic: &str, policy: MatchPolicy) -> Result<String, LookupError> {
    let query = TopicQuery::new(topic);
    if query.is_empty() {
        return Err(LookupError::EmptyTopic);
    }

    let document = CaptionDocument::parse(caption_text);
    debug!("Parsed {}", document);

    match topic_matcher::find_match(&document, &query, policy) {
        MatchResult::Found(cue_index) => match document.resolve_timestamp(cue_index) {
            Some(timestamp) => {
                info!(
                    "Topic '{}' first mentioned at {} (cue {}, {} policy)",
                    query.raw(),
                    timestamp,
                    cue_index,
                    policy
                );
                Ok(timestamp)
            }
            None => Err(LookupError::TopicNotFound {
                topic: query.raw().to_string(),
            }),
        },
        MatchResult::NotFound => {
            debug!("No cue qualified for topic '{}'", query.raw());
            Err(LookupError::TopicNotFound {
                topic: query.raw().to_string(),
            })
        }
    }
}
