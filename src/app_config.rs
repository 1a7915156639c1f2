use anyhow::{Result, anyhow};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::caption_parser::CaptionCue;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Topic matching policy
    #[serde(default)]
    pub match_policy: MatchPolicy,

    /// Behavior when no cue matches the topic
    #[serde(default)]
    pub on_miss: MissPolicy,

    /// Timestamp returned instead of an error under the sentinel miss policy
    #[serde(default = "default_sentinel_timestamp")]
    pub sentinel_timestamp: String,

    /// Caption language code requested from the downloader
    #[serde(default = "default_subtitle_language")]
    pub subtitle_language: String,

    /// Caption fetcher config
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Topic matching policy
///
/// `Substring` tests the lowercased topic as a literal substring of each
/// cue's text. It is not word-boundary-aware, so a short topic can match
/// inside a larger word (e.g. "art" inside "start") — a known limitation of
/// the heuristic, kept deliberately simple.
///
/// `Overlap` normalizes topic and cue text into token sets and requires at
/// least `max(3, ceil(0.5 * topic_tokens))` shared tokens.
///
/// Under both policies the first qualifying cue in document order wins.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    // @policy: Literal substring match
    Substring,
    // @policy: Token-overlap match
    #[default]
    Overlap,
}

impl MatchPolicy {
    // @returns: Capitalized policy name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Substring => "Substring",
            Self::Overlap => "Overlap",
        }
    }

    // @returns: Lowercase policy identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Substring => "substring".to_string(),
            Self::Overlap => "overlap".to_string(),
        }
    }
}

// Implement Display trait for MatchPolicy
impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for MatchPolicy
impl std::str::FromStr for MatchPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "overlap" => Ok(Self::Overlap),
            _ => Err(anyhow!("Invalid match policy: {}", s)),
        }
    }
}

/// Behavior when the topic is not found in the captions
///
/// This is the single explicit switch between the two legitimate deployment
/// choices: fail the lookup, or fall back to a sentinel timestamp.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissPolicy {
    // @policy: Surface TopicNotFound to the caller
    Fail,
    // @policy: Return the configured sentinel timestamp
    #[default]
    Sentinel,
}

impl MissPolicy {
    // @returns: Lowercase policy identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Fail => "fail".to_string(),
            Self::Sentinel => "sentinel".to_string(),
        }
    }
}

impl std::fmt::Display for MissPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for MissPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "sentinel" => Ok(Self::Sentinel),
            _ => Err(anyhow!("Invalid miss policy: {}", s)),
        }
    }
}

/// Caption downloader configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FetcherConfig {
    // @field: Downloader binary name or path
    #[serde(default = "default_fetcher_binary")]
    pub binary: String,

    // @field: Download timeout in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            binary: default_fetcher_binary(),
            timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_sentinel_timestamp() -> String {
    "00:00:00".to_string()
}

fn default_subtitle_language() -> String {
    "en".to_string()
}

fn default_fetcher_binary() -> String {
    "yt-dlp".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    120
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| anyhow!("Failed to serialize config: {}", e))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // The sentinel must itself be a parseable HH:MM:SS timestamp
        CaptionCue::parse_timestamp(&self.sentinel_timestamp)
            .map_err(|e| anyhow!("Invalid sentinel timestamp: {}", e))?;

        if self.subtitle_language.trim().is_empty() {
            return Err(anyhow!("Subtitle language must not be empty"));
        }

        if self.fetcher.binary.trim().is_empty() {
            return Err(anyhow!("Fetcher binary must not be empty"));
        }

        if self.fetcher.timeout_secs == 0 {
            return Err(anyhow!("Fetcher timeout must be greater than zero"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            match_policy: MatchPolicy::default(),
            on_miss: MissPolicy::default(),
            sentinel_timestamp: default_sentinel_timestamp(),
            subtitle_language: default_subtitle_language(),
            fetcher: FetcherConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
