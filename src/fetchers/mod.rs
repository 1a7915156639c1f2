/*!
 * Caption fetcher implementations.
 *
 * Fetchers are the external collaborators that acquire a caption file for a
 * video. The core lookup only ever sees the resulting file's text, after the
 * fetch has fully completed:
 * - `ytdlp`: shells out to the yt-dlp downloader
 * - `mock`: scripted fetcher for the test suite
 */

use async_trait::async_trait;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

use crate::errors::FetchError;

/// Common trait for caption fetchers
///
/// Implementations download (or otherwise produce) the caption track for a
/// video into `output_dir` and return the path of the resulting file. The
/// file is stable on disk by the time the call returns.
#[async_trait]
pub trait CaptionFetcher: Send + Sync + Debug {
    /// Fetch the caption track for `video_url` in the given language
    ///
    /// # Arguments
    /// * `video_url` - Source video locator
    /// * `language` - Caption language code to request (e.g. "en")
    /// * `output_dir` - Directory the caption file is written into
    ///
    /// # Returns
    /// * `Result<PathBuf, FetchError>` - Path of the caption file, or why no
    ///   track could be produced
    async fn fetch_captions(
        &self,
        video_url: &str,
        language: &str,
        output_dir: &Path,
    ) -> Result<PathBuf, FetchError>;
}

pub mod ytdlp;
pub mod mock;
