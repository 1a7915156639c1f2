/*!
 * Common test utilities for the topicseek test suite
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use tempfile::TempDir;
use topicseek::caption_parser::{CaptionCue, CaptionDocument};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A well-formed WebVTT caption document with cues starting at
/// 00:00:05, 00:01:10 and 00:02:00
pub fn sample_vtt() -> &'static str {
    r#"WEBVTT
Kind: captions
Language: en

00:00:05.000 --> 00:00:09.500 align:start position:0%
welcome back to the channel
everyone watching today

00:01:10.250 --> 00:01:15.000
today we discuss neural network design
and machine learning basics in detail

00:02:00.000 --> 00:02:04.000
thanks for watching and see you next time
"#
}

/// Creates a sample caption file for testing
pub fn create_test_captions(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, sample_vtt())
}

/// Builds a single cue with text split on newlines
pub fn cue(start_time_ms: u64, end_time_ms: u64, text: &str) -> CaptionCue {
    let mut cue = CaptionCue::new(start_time_ms, end_time_ms);
    cue.lines = text.lines().map(|line| line.to_string()).collect();
    cue
}

/// Builds a caption document from cues
pub fn document(cues: Vec<CaptionCue>) -> CaptionDocument {
    CaptionDocument { cues }
}
