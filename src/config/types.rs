//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_PORT, DEFAULT_USER_AGENT, DOH_ENDPOINT, HTTP_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
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
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration, parsed from the command line.
///
/// With a positional domain the binary runs a one-shot lookup and prints the
/// result as JSON; without one it starts the HTTP API server.
///
/// # Examples
///
/// ```no_run
/// use domain_digger::Config;
///
/// let config = Config {
///     domain: Some("example.com".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "domain_digger", version, about = "Looks up DNS records and WHOIS registration data for any domain")]
pub struct Config {
    /// Domain to look up once; omit to start the HTTP API server
    pub domain: Option<String>,

    /// Address to bind the HTTP API server to
    #[arg(long, default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// Port for the HTTP API server
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// DNS-over-HTTPS resolve endpoint
    #[arg(long, default_value = DOH_ENDPOINT)]
    pub doh_endpoint: String,

    /// Per-request timeout for DNS-over-HTTPS queries in seconds
    #[arg(long, default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            bind: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            doh_endpoint: DOH_ENDPOINT.to_string(),
            timeout_seconds: HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
