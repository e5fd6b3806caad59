//! domain_digger library: DNS and WHOIS lookups for domains
//!
//! This library answers two questions about a domain: what DNS records does
//! it have, and what does WHOIS say about its registration. DNS queries go
//! through a DNS-over-HTTPS endpoint; WHOIS queries go over TCP port 43,
//! following the registry's registrar referral. Both degrade instead of
//! failing: unreachable upstreams produce empty record sets and null summary
//! fields.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use domain_digger::{summarize_whois, Config, DohResolver, LookupStats, WhoisClient};
//! use domain_digger::initialization::init_http_client;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = init_http_client(&config)?;
//! let resolver = DohResolver::new(client);
//! let whois = WhoisClient::new();
//! let stats = LookupStats::new();
//!
//! let records = resolver.resolve_all("example.com", &stats).await;
//! let summary = summarize_whois("example.com", &whois, &stats).await;
//! println!("{} record types, registrar {:?}", records.len(), summary.registrar);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod dns;
mod domain;
mod error_handling;
pub mod initialization;
mod server;
mod whois;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use dns::{DohResolver, RawRecord, RecordType, ResolvedRecords};
pub use domain::is_valid_domain;
pub use error_handling::{ErrorType, InitializationError, LookupStats};
pub use server::{router, start_server, AppState};
pub use whois::{summarize_whois, ServerReply, WhoisClient, WhoisSummary};
