/*!
 * Application controller: runs one end-to-end topic lookup.
 *
 * Fetch captions into a temporary working directory, run the lookup engine
 * over the resulting text, then apply the configured miss policy. The
 * working directory is dropped with the request, so fetched files never
 * leak. Every run is self-contained; nothing is shared between requests.
 */

use anyhow::Result;
use log::{debug, info, warn};
use serde::Serialize;
use std::path::Path;
use tempfile::TempDir;
use url::Url;

use crate::app_config::{Config, MissPolicy};
use crate::errors::{AppError, LookupError};
use crate::fetchers::CaptionFetcher;
use crate::fetchers::ytdlp::YtDlpFetcher;
use crate::file_utils::FileManager;
use crate::lookup;

/// Result of one lookup run, in the shape callers receive it:
/// the resolved (or sentinel) timestamp echoed with the request fields.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LookupOutcome {
    /// First-mention timestamp (HH:MM:SS), or the sentinel on a miss
    pub timestamp: String,

    /// The video URL (or caption file path in offline mode) searched
    pub video_url: String,

    /// The topic phrase searched for
    pub topic: String,

    /// Whether a cue actually matched, as opposed to the sentinel fallback
    pub matched: bool,
}

// @struct: Application controller
pub struct Controller {
    config: Config,
}

impl Controller {
    /// Create a controller with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a controller with the given, validated configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Controller { config })
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run a full lookup: download captions for `video_url` and locate the
    /// first mention of `topic`
    pub async fn run(&self, video_url: &str, topic: &str) -> Result<LookupOutcome, AppError> {
        let fetcher = YtDlpFetcher::from_config(&self.config.fetcher);
        self.run_with_fetcher(&fetcher, video_url, topic).await
    }

    /// Run a full lookup through a caller-supplied fetcher
    pub async fn run_with_fetcher(
        &self,
        fetcher: &dyn CaptionFetcher,
        video_url: &str,
        topic: &str,
    ) -> Result<LookupOutcome, AppError> {
        Url::parse(video_url)
            .map_err(|e| AppError::InvalidUrl(format!("{}: {}", video_url, e)))?;

        // RAII working directory: removed when this run ends, success or not
        let workdir = TempDir::new()?;

        info!(
            "Fetching '{}' captions for {}",
            self.config.subtitle_language, video_url
        );
        let caption_path = fetcher
            .fetch_captions(video_url, &self.config.subtitle_language, workdir.path())
            .await?;
        debug!("Caption file ready: {}", caption_path.display());

        let content = FileManager::read_to_string(&caption_path)?;
        self.lookup_in_text(&content, video_url, topic)
    }

    /// Run the lookup over an existing caption file, skipping the fetcher
    pub fn lookup_in_file<P: AsRef<Path>>(
        &self,
        caption_path: P,
        topic: &str,
    ) -> Result<LookupOutcome, AppError> {
        let caption_path = caption_path.as_ref();
        let content = FileManager::read_to_string(caption_path)?;
        self.lookup_in_text(&content, &caption_path.display().to_string(), topic)
    }

    /// Run the lookup engine over caption text and apply the miss policy.
    ///
    /// Only `TopicNotFound` is subject to the policy switch; an empty topic
    /// is a configuration mistake and always surfaces as an error.
    pub fn lookup_in_text(
        &self,
        caption_text: &str,
        source: &str,
        topic: &str,
    ) -> Result<LookupOutcome, AppError> {
        match lookup::lookup(caption_text, topic, self.config.match_policy) {
            Ok(timestamp) => Ok(LookupOutcome {
                timestamp,
                video_url: source.to_string(),
                topic: topic.trim().to_string(),
                matched: true,
            }),
            Err(LookupError::TopicNotFound { topic }) => match self.config.on_miss {
                MissPolicy::Sentinel => {
                    warn!(
                        "Topic '{}' not found; returning sentinel timestamp {}",
                        topic, self.config.sentinel_timestamp
                    );
                    Ok(LookupOutcome {
                        timestamp: self.config.sentinel_timestamp.clone(),
                        video_url: source.to_string(),
                        topic,
                        matched: false,
                    })
                }
                MissPolicy::Fail => Err(AppError::Lookup(LookupError::TopicNotFound { topic })),
            },
            Err(err) => Err(AppError::Lookup(err)),
        }
    }
}
