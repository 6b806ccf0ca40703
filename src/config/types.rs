//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_ASN_DB_PATH, DEFAULT_GEO_DB_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_STORE_PATH,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exit-code policy for runs that complete but skipped records.
///
/// Skipped records never fail the run by themselves; this lets a caller opt in
/// to a distinct exit code when they happen.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 after a completed run
    Never,
    /// Exit 2 if any record was skipped for an unparseable IP address
    AnySkipped,
}

impl FailOn {
    /// Returns the process exit code for a completed run with `skipped` records dropped.
    pub fn exit_code(&self, skipped: usize) -> i32 {
        match self {
            FailOn::Never => 0,
            FailOn::AnySkipped if skipped > 0 => crate::config::EXIT_CODE_POLICY_FAILURE,
            FailOn::AnySkipped => 0,
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// Holds the four file locations a run touches plus logging options. The
/// defaults are the paths the crawler deployment has always used.
///
/// # Examples
///
/// ```no_run
/// use node_enrich::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     store_path: PathBuf::from("/var/lib/crawler/crawler.db"),
///     output_path: PathBuf::from("/srv/www/nodes.json"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite node store (opened read-only, never created)
    pub store_path: PathBuf,

    /// MaxMind City index (.mmdb)
    pub geo_db_path: PathBuf,

    /// MaxMind ASN index (.mmdb)
    pub asn_db_path: PathBuf,

    /// JSON artifact destination (overwritten atomically)
    pub output_path: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Exit-code policy for skipped records
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            geo_db_path: PathBuf::from(DEFAULT_GEO_DB_PATH),
            asn_db_path: PathBuf::from(DEFAULT_ASN_DB_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fail_on: FailOn::Never,
        }
    }
}
