/*!
 * Error types for the topicseek application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while fetching a caption track
#[derive(Error, Debug)]
pub enum FetchError {
    /// The downloader process could not be run or reported a failure
    #[error("Caption download failed: {0}")]
    CommandFailed(String),

    /// The downloader did not finish within the configured timeout
    #[error("Caption download timed out after {0} seconds")]
    TimedOut(u64),

    /// The download succeeded but produced no caption file for the language
    #[error("No caption track found for language '{language}'")]
    NoCaptionTrack {
        /// Language code that was requested
        language: String,
    },

    /// I/O error while handling the downloaded files
    #[error("Caption file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during topic lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The topic contained no usable tokens after normalization
    #[error("Topic is empty after normalization")]
    EmptyTopic,

    /// No cue satisfied the active match policy
    #[error("Topic not found in captions: '{topic}'")]
    TopicNotFound {
        /// The topic phrase that was searched for
        topic: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// The video URL could not be parsed
    #[error("Invalid video URL: {0}")]
    InvalidUrl(String),

    /// Error from the caption fetcher
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Error from topic lookup
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
