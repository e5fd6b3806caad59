//! DNS resolution over DNS-over-HTTPS.
//!
//! This module queries a fixed set of record types for a domain through the
//! DNS-over-HTTPS JSON API and filters the answers down to the queried name.

mod filter;
mod resolver;
mod types;

pub use resolver::DohResolver;
pub use types::{RawRecord, RecordType, ResolvedRecords};
