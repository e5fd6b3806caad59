//! WHOIS lookups over TCP port 43.
//!
//! A lookup bootstraps from the IANA root server, queries the registry for
//! the domain's TLD, and follows the registrar referral when one is listed.
//! The probe output is then condensed into a three-field summary.

mod parse;
mod probe;
mod summary;
mod types;

pub use probe::WhoisClient;
pub use summary::summarize_whois;
pub use types::{ServerReply, WhoisSummary};
