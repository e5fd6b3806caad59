//! Error types, failure categorization, and lookup statistics.

mod categorization;
mod stats;
mod types;

pub use categorization::{categorize_dns_failure, categorize_whois_failure};
pub use stats::LookupStats;
pub use types::{ErrorType, InitializationError};
