//! Maps lookup failures onto [`ErrorType`] categories.

use crate::error_handling::types::ErrorType;

/// Categorizes a DNS lookup failure by walking the error chain for a
/// [`reqwest::Error`].
///
/// Falls back to [`ErrorType::DnsOtherError`] when no reqwest error is found
/// in the chain.
pub fn categorize_dns_failure(error: &anyhow::Error) -> ErrorType {
    for cause in error.chain() {
        if let Some(reqwest_error) = cause.downcast_ref::<reqwest::Error>() {
            return categorize_reqwest_error(reqwest_error);
        }
    }
    ErrorType::DnsOtherError
}

fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_timeout() {
        ErrorType::DnsTimeoutError
    } else if error.is_connect() {
        ErrorType::DnsConnectError
    } else if error.is_status() {
        ErrorType::DnsStatusError
    } else if error.is_decode() {
        ErrorType::DnsDecodeError
    } else {
        ErrorType::DnsOtherError
    }
}

/// Categorizes a WHOIS probe failure.
///
/// A [`tokio::time::error::Elapsed`] anywhere in the chain means the probe hit
/// its overall deadline; anything else is a probe error.
pub fn categorize_whois_failure(error: &anyhow::Error) -> ErrorType {
    for cause in error.chain() {
        if cause.downcast_ref::<tokio::time::error::Elapsed>().is_some() {
            return ErrorType::WhoisTimeoutError;
        }
    }
    ErrorType::WhoisProbeError
}
