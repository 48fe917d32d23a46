//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_EMAILS_PATH, DEFAULT_USER_AGENT, FETCH_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
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
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Pipeline configuration, doubling as the CLI surface.
///
/// Can be constructed programmatically via [`Config::default`] for library
/// use, or parsed from the command line in the binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seo_audit",
    about = "Fetches a webpage and scores its on-page SEO signals"
)]
pub struct Config {
    /// Per-request timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Path of the append-only captured-email log
    #[arg(long, default_value = DEFAULT_EMAILS_PATH)]
    pub emails_path: PathBuf,

    /// Accept invalid TLS certificates on the body fetch.
    ///
    /// Enabled by default to tolerate sites with broken certificate chains.
    /// This weakens transport security (the body fetch can be intercepted);
    /// pass `--accept-invalid-certs false` to validate certificates.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub accept_invalid_certs: bool,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Emit the report as JSON instead of the plain summary
    #[arg(long)]
    pub json: bool,

    /// Opaque client identity used for the daily request quota
    /// (e.g., a network address)
    #[arg(long, default_value = "local")]
    pub identity: String,

    /// URL of the page to analyze
    pub url: String,

    /// Email address of the requester (recorded to the capture log)
    pub email: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_seconds: FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            emails_path: PathBuf::from(DEFAULT_EMAILS_PATH),
            accept_invalid_certs: true,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            json: false,
            identity: String::from("local"),
            url: String::new(),
            email: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(config.accept_invalid_certs);
        assert_eq!(config.identity, "local");
        assert!(!config.json);
    }

    #[test]
    fn test_config_parses_cli_arguments() {
        let config = Config::try_parse_from([
            "seo_audit",
            "--identity",
            "203.0.113.9",
            "--timeout-seconds",
            "5",
            "https://example.com",
            "user@example.com",
        ])
        .expect("arguments should parse");
        assert_eq!(config.url, "https://example.com");
        assert_eq!(config.email, "user@example.com");
        assert_eq!(config.identity, "203.0.113.9");
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_config_requires_url_and_email() {
        assert!(Config::try_parse_from(["seo_audit"]).is_err());
        assert!(Config::try_parse_from(["seo_audit", "https://example.com"]).is_err());
    }
}
