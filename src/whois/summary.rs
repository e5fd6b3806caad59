//! Condenses WHOIS probe replies into a registration summary.

use std::collections::HashMap;

use crate::config::WHOIS_TIMEOUT;
use crate::domain::is_valid_domain;
use crate::error_handling::{categorize_whois_failure, LookupStats};
use crate::whois::parse::{format_whois_date, parse_whois_date};
use crate::whois::probe::WhoisClient;
use crate::whois::types::{ServerReply, WhoisSummary};

/// Produces a registration summary for a domain.
///
/// Syntactically invalid input short-circuits to an all-null summary without
/// any network traffic. A failed probe degrades the same way after logging
/// and counting the failure, so this function always returns a summary.
///
/// All three fields come from the first server whose reply parsed; later
/// replies are never mixed in, and a field the reply lacks stays `None`.
///
/// # Arguments
///
/// * `domain` - The domain to summarize
/// * `client` - WHOIS client to probe with
/// * `stats` - Counters to record categorized failures in
pub async fn summarize_whois(
    domain: &str,
    client: &WhoisClient,
    stats: &LookupStats,
) -> WhoisSummary {
    // TODO: support bare TLD lookups; a TLD alone fails the syntax gate today
    if !is_valid_domain(domain) {
        log::debug!("Skipping WHOIS probe for syntactically invalid domain {domain:?}");
        return WhoisSummary::default();
    }

    let replies = match client.query(domain, WHOIS_TIMEOUT).await {
        Ok(replies) => replies,
        Err(e) => {
            log::warn!("WHOIS probe for {domain} failed: {e:#}");
            stats.increment_error(categorize_whois_failure(&e));
            return WhoisSummary::default();
        }
    };

    let Some(fields) = first_usable_reply(&replies) else {
        log::warn!("No WHOIS server gave a usable reply for {domain}");
        return WhoisSummary::default();
    };

    WhoisSummary {
        registrar: fields.get("Registrar").cloned(),
        created_at: fields
            .get("Created Date")
            .and_then(|value| parse_whois_date(value))
            .map(format_whois_date),
        dnssec: fields.get("DNSSEC").cloned(),
    }
}

/// Returns the fields of the first non-error reply, in server order.
pub(crate) fn first_usable_reply(
    replies: &[(String, ServerReply)],
) -> Option<&HashMap<String, String>> {
    replies.iter().find_map(|(_, reply)| match reply {
        ServerReply::Fields(fields) => Some(fields),
        ServerReply::Error(_) => None,
    })
}
