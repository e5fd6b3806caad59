//! Answer filtering.
//!
//! DNS-over-HTTPS answers for a CNAME'd name include records for the chain
//! targets. Only records whose owner name matches the queried domain are
//! kept, so resolved aliases do not leak into the per-type results.

use crate::dns::types::RawRecord;

/// Strips leading and trailing dots so `example.com.` compares equal to
/// `example.com`.
pub(crate) fn trim_periods(input: &str) -> &str {
    input.trim_matches('.')
}

/// Keeps only records whose owner name matches the queried domain.
pub(crate) fn filter_records(domain: &str, records: Vec<RawRecord>) -> Vec<RawRecord> {
    let domain = trim_periods(domain);
    records
        .into_iter()
        .filter(|record| trim_periods(&record.name) == domain)
        .collect()
}
