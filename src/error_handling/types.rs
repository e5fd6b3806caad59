//! Error types used across the crate.

use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Errors that can occur during application startup.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum InitializationError {
    /// Logger initialization failed
    #[error("Failed to initialize logger: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    /// HTTP client construction failed
    #[error("Failed to build HTTP client: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Categories of lookup failures tracked by [`LookupStats`](crate::LookupStats).
///
/// DNS categories mirror the failure modes of an HTTP request to the
/// DNS-over-HTTPS endpoint; WHOIS categories cover the TCP probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::EnumIter)]
pub enum ErrorType {
    /// Could not connect to the DNS-over-HTTPS endpoint
    DnsConnectError,
    /// DNS-over-HTTPS request timed out
    DnsTimeoutError,
    /// DNS-over-HTTPS endpoint returned a non-success status
    DnsStatusError,
    /// DNS-over-HTTPS response body could not be decoded
    DnsDecodeError,
    /// Any other DNS lookup failure
    DnsOtherError,
    /// WHOIS probe exceeded its overall deadline
    WhoisTimeoutError,
    /// WHOIS probe failed before the deadline
    WhoisProbeError,
}
