//! WHOIS result types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// What one WHOIS server answered during a probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerReply {
    /// Parsed key-value fields from a successful response
    Fields(HashMap<String, String>),
    /// Why this server could not be queried
    Error(String),
}

impl ServerReply {
    /// Returns `true` if this reply records a failure instead of fields.
    pub fn is_error(&self) -> bool {
        matches!(self, ServerReply::Error(_))
    }
}

/// Registration details condensed from a WHOIS probe.
///
/// Every field is independently optional; a field is `None` when no usable
/// reply carried it. All three are `None` for invalid domains and failed
/// probes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoisSummary {
    /// Sponsoring registrar name
    pub registrar: Option<String>,
    /// Registration date, rendered as `M/D/YYYY`
    pub created_at: Option<String>,
    /// DNSSEC provisioning status, e.g. `signedDelegation` or `unsigned`
    pub dnssec: Option<String>,
}
