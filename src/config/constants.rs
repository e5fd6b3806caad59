//! Configuration constants.
//!
//! This module defines the fixed operational parameters used throughout the
//! application: upstream endpoints, timeouts, WHOIS probe limits, and domain
//! syntax bounds.

use std::time::Duration;

// Upstream endpoints
/// Default DNS-over-HTTPS resolve endpoint (JSON API).
pub const DOH_ENDPOINT: &str = "https://dns.google.com/resolve";
/// IANA WHOIS server used to discover the registry server for a TLD.
pub const IANA_WHOIS_SERVER: &str = "whois.iana.org";
/// Default WHOIS port, appended when a server identifier carries no port.
pub const WHOIS_PORT: u16 = 43;

// Timeouts
/// Per-request deadline for DNS-over-HTTPS queries, in seconds.
///
/// This is the shared HTTP client's own timeout; the resolver adds no
/// per-type deadline on top of it.
pub const HTTP_TIMEOUT_SECS: u64 = 10;
/// Whole-probe WHOIS timeout. The probe fails as a unit when it elapses;
/// there is no retry.
pub const WHOIS_TIMEOUT: Duration = Duration::from_millis(5000);

// WHOIS probe limits
/// Maximum number of WHOIS servers queried per domain (registry plus one
/// registrar referral).
pub const WHOIS_MAX_FOLLOW: usize = 2;

// Domain syntax bounds
/// Maximum total length of a domain name in characters.
pub const MAX_DOMAIN_LENGTH: usize = 253;
/// Maximum length of a single domain label in characters.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Display format for WHOIS creation dates: US-style M/D/YYYY without zero
/// padding (`1/1/2001`). Fixed regardless of deployment locale; changing it
/// changes observable API output.
pub const WHOIS_DATE_DISPLAY_FORMAT: &str = "%-m/%-d/%Y";

// HTTP API server defaults
/// Default address the API server binds to.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
/// Default port the API server listens on.
pub const DEFAULT_PORT: u16 = 3000;

/// Default User-Agent header value for DNS-over-HTTPS requests.
pub const DEFAULT_USER_AGENT: &str = concat!("domain_digger/", env!("CARGO_PKG_VERSION"));
