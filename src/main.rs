// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};
use std::io::Write;
use std::path::PathBuf;

use crate::app_config::{Config, MatchPolicy, MissPolicy};
use app_controller::Controller;
use file_utils::FileManager;

mod app_config;
mod app_controller;
mod caption_parser;
mod errors;
mod fetchers;
mod file_utils;
mod lookup;
mod text_utils;
mod topic_matcher;

/// CLI Wrapper for MatchPolicy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliMatchPolicy {
    Substring,
    Overlap,
}

impl From<CliMatchPolicy> for MatchPolicy {
    fn from(cli_policy: CliMatchPolicy) -> Self {
        match cli_policy {
            CliMatchPolicy::Substring => MatchPolicy::Substring,
            CliMatchPolicy::Overlap => MatchPolicy::Overlap,
        }
    }
}

/// CLI Wrapper for MissPolicy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliMissPolicy {
    Fail,
    Sentinel,
}

impl From<CliMissPolicy> for MissPolicy {
    fn from(cli_policy: CliMissPolicy) -> Self {
        match cli_policy {
            CliMissPolicy::Fail => MissPolicy::Fail,
            CliMissPolicy::Sentinel => MissPolicy::Sentinel,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for topicseek
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// topicseek - find when a video first mentions a topic
///
/// Downloads a video's caption track and returns the timestamp at which the
/// given topic phrase is first mentioned in the spoken content.
#[derive(Parser, Debug)]
#[command(name = "topicseek")]
#[command(version = "0.1.0")]
#[command(about = "Find the timestamp where a video first mentions a topic")]
#[command(long_about = "topicseek downloads a video's caption track (via yt-dlp) and searches it for
the first mention of a topic phrase, printing the matching timestamp as JSON.

EXAMPLES:
    topicseek \"machine learning basics\" https://youtu.be/xyz   # Download captions and search
    topicseek -p substring \"neural network\" https://youtu.be/xyz
    topicseek -m fail \"rust traits\" https://youtu.be/xyz        # Error instead of 00:00:00 fallback
    topicseek -f talk.en.vtt \"ownership\"                        # Search a local caption file
    topicseek --log-level debug \"borrow checker\" https://youtu.be/xyz
    topicseek completions bash > topicseek.bash                  # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

MATCH POLICIES:
    overlap   - topic and cue text share enough normalized tokens (default)
    substring - topic occurs literally in the cue text, case-insensitive")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Topic phrase to locate
    #[arg(value_name = "TOPIC")]
    topic: Option<String>,

    /// Video URL to download captions for
    #[arg(value_name = "VIDEO_URL")]
    video_url: Option<String>,

    /// Search an existing caption file instead of downloading
    #[arg(short = 'f', long, value_name = "CAPTION_FILE", conflicts_with = "video_url")]
    caption_file: Option<PathBuf>,

    /// Topic matching policy
    #[arg(short, long, value_enum)]
    policy: Option<CliMatchPolicy>,

    /// Behavior when the topic is not found
    #[arg(short = 'm', long, value_enum)]
    on_miss: Option<CliMissPolicy>,

    /// Caption language code to request (e.g. 'en', 'es', 'fr')
    #[arg(short, long)]
    subtitle_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Load the config file, creating a default one when it is missing
fn load_or_create_config(path: &str) -> Result<Config> {
    if FileManager::file_exists(path) {
        return Config::from_file(path);
    }

    let config = Config::default();
    FileManager::write_to_file(path, &config.to_json()?)?;
    info!("Created default configuration at {}", path);
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "topicseek", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = load_or_create_config(&cli.config_path)?;

    // Command line options override the config file
    if let Some(policy) = cli.policy {
        config.match_policy = policy.into();
    }
    if let Some(on_miss) = cli.on_miss {
        config.on_miss = on_miss.into();
    }
    if let Some(language) = cli.subtitle_language {
        config.subtitle_language = language;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    let topic = cli
        .topic
        .ok_or_else(|| anyhow!("TOPIC is required when no subcommand is specified"))?;

    let controller = Controller::with_config(config)?;

    let outcome = if let Some(caption_file) = cli.caption_file {
        controller.lookup_in_file(&caption_file, &topic)?
    } else {
        let video_url = cli
            .video_url
            .ok_or_else(|| anyhow!("Either VIDEO_URL or --caption-file is required"))?;
        controller.run(&video_url, &topic).await?
    };

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
