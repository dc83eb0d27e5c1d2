//! Generator configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! CLI arguments.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (`ANSTABLE_*`)
//! 3. Config file
//! 4. Default values

use anstable_core::builder::GeneratorParams;
use anstable_core::types::TableError;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable names read by [`GeneratorConfig::apply_env`].
pub mod env {
    /// Alphabet size override
    pub const ALPHABET_SIZE: &str = "ANSTABLE_ALPHABET_SIZE";
    /// Table count override
    pub const NUM_HISTOGRAMS: &str = "ANSTABLE_NUM_HISTOGRAMS";
    /// Precision override
    pub const PRECISION: &str = "ANSTABLE_PRECISION";
    /// Seed override
    pub const SEED: &str = "ANSTABLE_SEED";
    /// Log level override
    pub const LOG_LEVEL: &str = "ANSTABLE_LOG_LEVEL";
    /// Output format override
    pub const FORMAT: &str = "ANSTABLE_FORMAT";
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid generator parameters: {0}")]
    InvalidParameter(#[from] TableError),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: json, csv, table")]
    InvalidFormat(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, ConfigError> {
        s.parse()
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Batch output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputFormat {
    /// `{"alphabet_size", "precision", "tables"}` document
    #[default]
    Json,
    /// One `table,slot,symbol` row per slot
    Csv,
    /// Human-readable per-table summary
    Table,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "table" => Ok(OutputFormat::Table),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, ConfigError> {
        s.parse()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

/// Generator configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of distinct symbols per table
    pub alphabet_size: usize,
    /// Number of tables per batch
    pub num_histograms: usize,
    /// Number of slots per table
    pub precision: usize,
    /// Random Source seed
    pub seed: u64,
    /// Log level
    pub log_level: LogLevel,
    /// Output format for `generate`
    pub format: OutputFormat,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let params = GeneratorParams::default();
        Self {
            alphabet_size: params.alphabet_size,
            num_histograms: params.num_histograms,
            precision: params.precision,
            seed: params.seed,
            log_level: LogLevel::Info,
            format: OutputFormat::Json,
        }
    }
}

impl GeneratorConfig {
    /// Create a new GeneratorConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file without checking the generator parameters
    pub fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from environment variables looked up through `lookup`.
    ///
    /// Unset variables leave the field untouched.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(env::ALPHABET_SIZE) {
            self.alphabet_size = parse_env(env::ALPHABET_SIZE, &value)?;
        }
        if let Some(value) = lookup(env::NUM_HISTOGRAMS) {
            self.num_histograms = parse_env(env::NUM_HISTOGRAMS, &value)?;
        }
        if let Some(value) = lookup(env::PRECISION) {
            self.precision = parse_env(env::PRECISION, &value)?;
        }
        if let Some(value) = lookup(env::SEED) {
            self.seed = parse_env(env::SEED, &value)?;
        }
        if let Some(value) = lookup(env::LOG_LEVEL) {
            self.log_level = value.parse()?;
        }
        if let Some(value) = lookup(env::FORMAT) {
            self.format = value.parse()?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(alphabet_size) = cli.alphabet_size {
            self.alphabet_size = alphabet_size;
        }
        if let Some(num_histograms) = cli.num_histograms {
            self.num_histograms = num_histograms;
        }
        if let Some(precision) = cli.precision {
            self.precision = precision;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = log_level.parse()?;
        }
        if let Some(format) = &cli.format {
            self.format = format.parse()?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.params().validate()?;
        Ok(())
    }

    /// The library parameter value for one batch.
    pub fn params(&self) -> GeneratorParams {
        GeneratorParams::new(
            self.alphabet_size,
            self.num_histograms,
            self.precision,
            self.seed,
        )
    }
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} is not a valid number", name, value)))
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Alphabet size override
    pub alphabet_size: Option<usize>,
    /// Table count override
    pub num_histograms: Option<usize>,
    /// Precision override
    pub precision: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub format: Option<String>,
}

/// Build configuration from all sources, reading the process environment
pub fn build_config(cli: &CliArgs) -> Result<GeneratorConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// Build configuration from all sources with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<GeneratorConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Start with defaults or file config
    let mut config = match &cli.config_file {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

/// Resolve only the log level, for commands that never build a batch.
///
/// Same precedence as [`build_config_with`]. Generator parameters in the
/// file or environment are ignored.
pub fn resolve_log_level_with<F>(cli: &CliArgs, lookup: F) -> Result<LogLevel, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut log_level = match &cli.config_file {
        Some(path) => GeneratorConfig::read_file(path)?.log_level,
        None => LogLevel::default(),
    };
    if let Some(value) = lookup(env::LOG_LEVEL) {
        log_level = value.parse()?;
    }
    if let Some(value) = &cli.log_level {
        log_level = value.parse()?;
    }
    Ok(log_level)
}

/// Resolve only the log level, reading the process environment
pub fn resolve_log_level(cli: &CliArgs) -> Result<LogLevel, ConfigError> {
    resolve_log_level_with(cli, |key| std::env::var(key).ok())
}
