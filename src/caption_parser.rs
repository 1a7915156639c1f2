use std::fmt;
use std::path::Path;
use anyhow::{Context, Result, anyhow};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

// @module: WebVTT caption parsing

// @const: VTT cue timing regex
static CUE_TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}):(\d{2}):(\d{2})\.(\d{3})\s*-->\s*(\d{2}):(\d{2}):(\d{2})\.(\d{3})").unwrap()
});

// @struct: Single caption cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionCue {
    // @field: Start time in ms
    pub start_time_ms: u64,

    // @field: End time in ms
    pub end_time_ms: u64,

    // @field: Raw caption text lines
    pub lines: Vec<String>,
}

impl CaptionCue {
    /// Creates a new cue with no text lines yet
    pub fn new(start_time_ms: u64, end_time_ms: u64) -> Self {
        CaptionCue {
            start_time_ms,
            end_time_ms,
            lines: Vec::new(),
        }
    }

    /// All text lines of the cue joined into one string
    pub fn text(&self) -> String {
        self.lines.join(" ")
    }

    /// Start time truncated to whole seconds, formatted as HH:MM:SS
    pub fn start_timestamp(&self) -> String {
        Self::format_timestamp(self.start_time_ms)
    }

    /// Parse an HH:MM:SS or HH:MM:SS.mmm timestamp to milliseconds
    pub fn parse_timestamp(timestamp: &str) -> Result<u64> {
        let (clock, millis) = match timestamp.split_once('.') {
            Some((clock, frac)) => {
                let millis: u64 = frac.parse().context("Failed to parse milliseconds")?;
                (clock, millis)
            }
            None => (timestamp, 0),
        };

        let parts: Vec<&str> = clock.split(':').collect();
        if parts.len() != 3 {
            return Err(anyhow!("Invalid timestamp format: {}", timestamp));
        }

        let hours: u64 = parts[0].parse().context("Failed to parse hours")?;
        let minutes: u64 = parts[1].parse().context("Failed to parse minutes")?;
        let seconds: u64 = parts[2].parse().context("Failed to parse seconds")?;

        if minutes >= 60 || seconds >= 60 || millis >= 1000 {
            return Err(anyhow!("Invalid time components in timestamp: {}", timestamp));
        }

        Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
    }

    /// Format a timestamp in milliseconds as HH:MM:SS, truncating sub-second
    /// precision
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;

        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Ordered collection of caption cues parsed from one document
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CaptionDocument {
    /// Cues in document order
    pub cues: Vec<CaptionCue>,
}

impl CaptionDocument {
    /// Parse WebVTT-style caption content into a document.
    ///
    /// A line matching the cue timing pattern opens a new cue; the non-empty
    /// lines that follow it, up to the next blank line or timing line, become
    /// the cue's text. Header and preamble lines before the first timing line
    /// are discarded, as are cue identifier lines between blocks. A timing
    /// line that contains `-->` but does not match the pattern is skipped and
    /// the text that follows it merges into the nearest preceding valid cue.
    ///
    /// Parsing never fails: unrecognized input is dropped and empty content
    /// yields an empty document.
    pub fn parse(content: &str) -> Self {
        let mut cues: Vec<CaptionCue> = Vec::new();
        let mut current: Option<CaptionCue> = None;
        let mut accepting_text = false;

        for line in content.lines() {
            let trimmed = line.trim();

            if trimmed.is_empty() {
                // A blank line ends the current cue's text block
                accepting_text = false;
                continue;
            }

            if trimmed.contains("-->") {
                if let Some(caps) = CUE_TIMING_REGEX.captures(trimmed) {
                    if let Some(cue) = current.take() {
                        cues.push(cue);
                    }

                    let start_ms = Self::capture_to_ms(&caps, 1);
                    let end_ms = Self::capture_to_ms(&caps, 5);
                    current = Some(CaptionCue::new(start_ms, end_ms));
                    accepting_text = true;
                } else {
                    // Malformed timing line: skip it and let the text that
                    // follows attach to the preceding valid cue, if any
                    debug!("Skipping malformed cue timing line: {}", trimmed);
                    accepting_text = current.is_some();
                }
                continue;
            }

            if accepting_text {
                if let Some(cue) = current.as_mut() {
                    cue.lines.push(trimmed.to_string());
                }
            }
        }

        if let Some(cue) = current.take() {
            cues.push(cue);
        }

        CaptionDocument { cues }
    }

    /// Read a caption file and parse its contents
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read caption file: {:?}", path.as_ref()))?;

        Ok(Self::parse(&content))
    }

    /// Number of cues in the document
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Whether the document contains no cues
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Start timestamp (HH:MM:SS) of the cue at `cue_index`, if it exists.
    /// Cues carry their own start time, so resolution is a direct index.
    pub fn resolve_timestamp(&self, cue_index: usize) -> Option<String> {
        self.cues.get(cue_index).map(|cue| cue.start_timestamp())
    }

    /// Convert a timing-regex capture group quadruple to milliseconds
    fn capture_to_ms(caps: &regex::Captures, start_idx: usize) -> u64 {
        let hours: u64 = caps.get(start_idx)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));
        let minutes: u64 = caps.get(start_idx + 1)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));
        let seconds: u64 = caps.get(start_idx + 2)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));
        let millis: u64 = caps.get(start_idx + 3)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));

        (hours * 3600 + minutes * 60 + seconds) * 1000 + millis
    }
}

impl fmt::Display for CaptionDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CaptionDocument with {} cues", self.cues.len())
    }
}
