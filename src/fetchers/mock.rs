/*!
 * Mock caption fetcher for testing.
 *
 * Simulates the fetcher collaborator without touching the network:
 * - `MockCaptionFetcher::working(content)` - writes the given caption text
 * - `MockCaptionFetcher::missing_track()` - reports no caption track
 * - `MockCaptionFetcher::failing()` - reports a downloader failure
 */

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::errors::FetchError;
use crate::fetchers::CaptionFetcher;

/// Behavior mode for the mock fetcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Writes the scripted caption content and succeeds
    Working,
    /// Succeeds running but produces no caption track
    MissingTrack,
    /// Fails as if the downloader itself errored
    Failing,
}

/// Scripted fetcher for exercising the lookup pipeline in tests
#[derive(Debug, Clone)]
pub struct MockCaptionFetcher {
    behavior: MockBehavior,
    content: String,
}

impl MockCaptionFetcher {
    /// Fetcher that always yields the given caption content
    pub fn working(content: impl Into<String>) -> Self {
        MockCaptionFetcher {
            behavior: MockBehavior::Working,
            content: content.into(),
        }
    }

    /// Fetcher that reports a missing caption track
    pub fn missing_track() -> Self {
        MockCaptionFetcher {
            behavior: MockBehavior::MissingTrack,
            content: String::new(),
        }
    }

    /// Fetcher that always fails with a downloader error
    pub fn failing() -> Self {
        MockCaptionFetcher {
            behavior: MockBehavior::Failing,
            content: String::new(),
        }
    }
}

#[async_trait]
impl CaptionFetcher for MockCaptionFetcher {
    async fn fetch_captions(
        &self,
        _video_url: &str,
        language: &str,
        output_dir: &Path,
    ) -> Result<PathBuf, FetchError> {
        match self.behavior {
            MockBehavior::Working => {
                let path = output_dir.join(format!("captions.{}.vtt", language));
                std::fs::write(&path, &self.content)?;
                Ok(path)
            }
            MockBehavior::MissingTrack => Err(FetchError::NoCaptionTrack {
                language: language.to_string(),
            }),
            MockBehavior::Failing => {
                Err(FetchError::CommandFailed("mock downloader failure".to_string()))
            }
        }
    }
}
