//! DNS lookups over the DNS-over-HTTPS JSON API.

use anyhow::{Context, Result};
use futures::future::join_all;
use strum::IntoEnumIterator;

use crate::config::DOH_ENDPOINT;
use crate::dns::filter::filter_records;
use crate::dns::types::{DohResponse, RawRecord, RecordType, ResolvedRecords};
use crate::error_handling::{categorize_dns_failure, LookupStats};

/// Resolves DNS records through a DNS-over-HTTPS endpoint.
///
/// One instance is shared across all lookups; the underlying `reqwest::Client`
/// pools connections to the endpoint.
pub struct DohResolver {
    client: reqwest::Client,
    endpoint: String,
}

impl DohResolver {
    /// Creates a resolver against the default endpoint.
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_endpoint(client, DOH_ENDPOINT.to_string())
    }

    /// Creates a resolver against a custom endpoint.
    ///
    /// The endpoint must accept `name` and `type` query parameters and answer
    /// with the DNS-over-HTTPS JSON format.
    pub fn with_endpoint(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    async fn fetch_records(&self, domain: &str, record_type: RecordType) -> Result<Vec<RawRecord>> {
        log::debug!("Querying {record_type} records for {domain}");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("name", domain), ("type", record_type.as_str())])
            .send()
            .await
            .with_context(|| format!("{record_type} query for {domain} failed"))?;
        let response = response
            .error_for_status()
            .with_context(|| format!("{record_type} query for {domain} was rejected"))?;
        let body: DohResponse = response
            .json()
            .await
            .with_context(|| format!("{record_type} response for {domain} was not valid JSON"))?;
        Ok(body.answer)
    }

    /// Queries every [`RecordType`] for the domain concurrently.
    ///
    /// All queries are dispatched at once and awaited together, so the overall
    /// latency is that of the slowest query. A failed query logs a warning,
    /// bumps the matching error counter, and contributes an empty vector; it
    /// never affects the other record types.
    ///
    /// # Arguments
    ///
    /// * `domain` - The domain to resolve
    /// * `stats` - Counters to record categorized failures in
    ///
    /// # Returns
    ///
    /// A map with one entry per record type. Only records whose owner name
    /// matches the queried domain are included.
    pub async fn resolve_all(&self, domain: &str, stats: &LookupStats) -> ResolvedRecords {
        let queries = RecordType::iter().map(|record_type| self.fetch_records(domain, record_type));
        let outcomes = join_all(queries).await;

        let mut records = ResolvedRecords::new();
        for (record_type, outcome) in RecordType::iter().zip(outcomes) {
            let answers = match outcome {
                Ok(answers) => answers,
                Err(e) => {
                    log::warn!("{record_type} lookup for {domain} failed: {e:#}");
                    stats.increment_error(categorize_dns_failure(&e));
                    Vec::new()
                }
            };
            records.insert(record_type, filter_records(domain, answers));
        }
        records
    }
}
