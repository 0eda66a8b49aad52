// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Centralized logging utilities for the startup back office
//!
//! Every binary initializes `tracing` through this crate so that levels,
//! formats and log file locations behave the same everywhere.
//!
//! Console output goes to stderr. Commands print their JSON results on
//! stdout and the two must not interleave.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bo_config_types::ui;

// Re-export Level for convenience
pub use tracing::Level;

/// Output format for log messages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable plaintext format
    #[default]
    Plaintext,
    /// Structured JSON format
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Plaintext => write!(f, "plaintext"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl From<ui::LogFormat> for LogFormat {
    fn from(format: ui::LogFormat) -> Self {
        match format {
            ui::LogFormat::Plaintext => LogFormat::Plaintext,
            ui::LogFormat::Json => LogFormat::Json,
        }
    }
}

/// Log level as accepted on the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CliLogLevel {
    /// Only error conditions
    Error,
    /// Errors and warnings
    #[default]
    Warn,
    /// Errors, warnings, and informational messages
    Info,
    /// All above plus debug information
    Debug,
    /// All above plus detailed tracing
    Trace,
}

impl From<CliLogLevel> for Level {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
            CliLogLevel::Trace => Level::TRACE,
        }
    }
}

impl From<ui::LogLevel> for CliLogLevel {
    fn from(level: ui::LogLevel) -> Self {
        match level {
            ui::LogLevel::Error => CliLogLevel::Error,
            ui::LogLevel::Warn => CliLogLevel::Warn,
            ui::LogLevel::Info => CliLogLevel::Info,
            ui::LogLevel::Debug => CliLogLevel::Debug,
            ui::LogLevel::Trace => CliLogLevel::Trace,
        }
    }
}

impl std::fmt::Display for CliLogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliLogLevel::Error => write!(f, "error"),
            CliLogLevel::Warn => write!(f, "warn"),
            CliLogLevel::Info => write!(f, "info"),
            CliLogLevel::Debug => write!(f, "debug"),
            CliLogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Logging flags shared by every binary
///
/// Use with `#[command(flatten)]`. Logs go to the console unless `--log-file`
/// or `--log-dir` is given.
#[derive(Clone, Debug, Default, clap::Args, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CliLoggingArgs {
    #[arg(long, value_enum, global = true, help = "Log verbosity level (default: warn)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<CliLogLevel>,

    #[arg(long, value_enum, global = true, help = "Log output format (default: plaintext)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_format: Option<LogFormat>,

    #[arg(long, global = true, help = "Directory for log files")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,

    #[arg(long, global = true, help = "Log filename")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

impl CliLoggingArgs {
    /// Fill unset flags from the resolved configuration
    ///
    /// Flags given on the command line keep priority.
    pub fn with_config_defaults(mut self, config: &ui::UiRoot) -> Self {
        if self.log_level.is_none() {
            self.log_level = config.log_level.map(CliLogLevel::from);
        }
        if self.log_format.is_none() {
            self.log_format = config.log_format.map(LogFormat::from);
        }
        self
    }

    pub fn log_to_file(&self) -> bool {
        self.log_file.is_some() || self.log_dir.is_some()
    }

    /// Install the global subscriber
    pub fn init(self, component: &str) -> anyhow::Result<()> {
        let level = self.log_level.unwrap_or_default().into();
        let format = self.log_format.unwrap_or_default();

        if self.log_to_file() {
            let log_path = self.resolve_log_path(component);
            init_to_file(component, level, format, &log_path)
        } else {
            init(component, level, format)
        }
    }

    /// Resolve the log file path
    ///
    /// 1. An absolute `log_file` is used as-is
    /// 2. A relative `log_file` is placed under `log_dir` when one is given
    /// 3. `log_dir` alone gets `<component>.log`
    /// 4. Otherwise the platform standard location is used
    pub fn resolve_log_path(&self, component: &str) -> PathBuf {
        match (&self.log_file, &self.log_dir) {
            (Some(file), _) if Path::new(file).is_absolute() => PathBuf::from(file),
            (Some(file), Some(dir)) => Path::new(dir).join(file),
            (Some(file), None) => PathBuf::from(file),
            (None, Some(dir)) => Path::new(dir).join(format!("{}.log", component)),
            (None, None) => get_standard_log_path_for_component(component),
        }
    }
}

/// Standard log file path for a component
///
/// - Linux: ~/.local/share/startup-backoffice/<component>.log
/// - macOS: ~/Library/Logs/startup-backoffice/<component>.log
/// - Windows: %APPDATA%\startup-backoffice\<component>.log
pub fn get_standard_log_path_for_component(component: &str) -> PathBuf {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("Library")
            .join("Logs")
    } else {
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("/tmp"))
    };
    base.join("startup-backoffice").join(format!("{}.log", component))
}

/// Initialize console logging (stderr)
pub fn init(component: &str, default_level: Level, format: LogFormat) -> anyhow::Result<()> {
    init_with_writer(component, default_level, format, io::stderr)
}

/// Initialize logging appended to `log_path`, creating parent directories
pub fn init_to_file(
    component: &str,
    default_level: Level,
    format: LogFormat,
    log_path: &Path,
) -> anyhow::Result<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = std::fs::OpenOptions::new().create(true).append(true).open(log_path)?;

    init_with_writer(component, default_level, format, std::sync::Mutex::new(log_file))
}

/// Initialize logging with a custom writer
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_with_writer<W>(
    component: &str,
    default_level: Level,
    format: LogFormat,
    writer: W,
) -> anyhow::Result<()>
where
    W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(component, default_level)));

    match format {
        LogFormat::Json => {
            let layer = tracing_subscriber::fmt::layer().with_writer(writer).json();
            tracing_subscriber::registry().with(filter).with(layer).try_init()?;
        }
        LogFormat::Plaintext => {
            let layer = tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false);
            tracing_subscriber::registry().with(filter).with(layer).try_init()?;
        }
    }

    Ok(())
}

fn default_directive(component: &str, level: Level) -> String {
    // crate targets use underscores
    format!("{},{}={}", level, component.replace('-', "_"), level)
}
