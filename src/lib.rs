/*!
 * # topicseek - find when a video first mentions a topic
 *
 * A Rust library and CLI that, given a video URL and a topic phrase, returns
 * the timestamp at which the topic is first mentioned in the video's spoken
 * content, by matching against its caption track.
 *
 * ## Features
 *
 * - Parse WebVTT caption documents into structured, timestamped cues
 * - Two selectable matching policies:
 *   - substring: literal case-insensitive phrase match
 *   - overlap: token-set overlap with a minimum shared-token threshold
 * - Configurable miss behavior: fail, or fall back to a sentinel timestamp
 * - Caption acquisition via yt-dlp, behind a fetcher trait
 * - Offline mode over already-downloaded caption files
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `caption_parser`: WebVTT parsing into cues and timestamps
 * - `text_utils`: Text normalization and tokenization
 * - `topic_matcher`: Matching policies over parsed documents
 * - `lookup`: The parse → match → resolve orchestrator
 * - `fetchers`: Caption acquisition collaborators:
 *   - `fetchers::ytdlp`: yt-dlp subprocess fetcher
 *   - `fetchers::mock`: scripted fetcher for tests
 * - `app_controller`: End-to-end run and miss-policy application
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod caption_parser;
pub mod errors;
pub mod fetchers;
pub mod file_utils;
pub mod lookup;
pub mod text_utils;
pub mod topic_matcher;

// Re-export main types for easier usage
pub use app_config::{Config, MatchPolicy, MissPolicy};
pub use app_controller::{Controller, LookupOutcome};
pub use caption_parser::{CaptionCue, CaptionDocument};
pub use errors::{AppError, FetchError, LookupError};
pub use lookup::lookup;
pub use topic_matcher::{MatchResult, TopicQuery};
