/*!
 * Caption fetcher backed by the yt-dlp downloader.
 */

use async_trait::async_trait;
use log::{debug, error};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

use crate::app_config::FetcherConfig;
use crate::errors::FetchError;
use crate::fetchers::CaptionFetcher;
use crate::file_utils::FileManager;

/// Fetcher that invokes yt-dlp to download a WebVTT caption track
/// (authored or auto-generated) without downloading the video itself.
#[derive(Debug, Clone)]
pub struct YtDlpFetcher {
    binary: String,
    timeout: Duration,
}

impl YtDlpFetcher {
    /// Create a fetcher with an explicit binary and timeout
    pub fn new(binary: impl Into<String>, timeout_secs: u64) -> Self {
        YtDlpFetcher {
            binary: binary.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Create a fetcher from the application fetcher config
    pub fn from_config(config: &FetcherConfig) -> Self {
        Self::new(config.binary.clone(), config.timeout_secs)
    }
}

#[async_trait]
impl CaptionFetcher for YtDlpFetcher {
    async fn fetch_captions(
        &self,
        video_url: &str,
        language: &str,
        output_dir: &Path,
    ) -> Result<PathBuf, FetchError> {
        let output_template = output_dir.join("%(title)s.%(ext)s");

        debug!("Requesting '{}' captions via {}", language, self.binary);

        let download_future = Command::new(&self.binary)
            .args([
                "--write-subs",
                "--write-auto-subs",
                "--sub-langs", language,
                "--sub-format", "vtt",
                "--skip-download",
                "--quiet",
                "-o", output_template.to_str().unwrap_or_default(),
                video_url,
            ])
            .output();

        // Guard against the downloader hanging on an unreachable source
        let output = tokio::select! {
            result = download_future => {
                result.map_err(|e| {
                    FetchError::CommandFailed(format!("Failed to execute {}: {}", self.binary, e))
                })?
            },
            _ = tokio::time::sleep(self.timeout) => {
                return Err(FetchError::TimedOut(self.timeout.as_secs()));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("Caption download failed: {}", stderr.trim());
            return Err(FetchError::CommandFailed(stderr.trim().to_string()));
        }

        // yt-dlp names the file after the video title, so scan for the result
        FileManager::find_files(output_dir, "vtt")
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NoCaptionTrack {
                language: language.to_string(),
            })
    }
}
