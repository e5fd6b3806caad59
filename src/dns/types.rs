//! DNS record types and wire structures.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter as EnumIterMacro;

/// The record types queried for every lookup.
///
/// Every [`resolve_all`](crate::DohResolver::resolve_all) result contains one
/// entry per variant, in this declaration order. The variants sort
/// alphabetically, which keeps serialized output stable.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIterMacro,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address
    A,
    /// IPv6 address
    Aaaa,
    /// Certification authority authorization
    Caa,
    /// Canonical name
    Cname,
    /// DNSSEC public key
    Dnskey,
    /// Delegation signer
    Ds,
    /// Mail exchanger
    Mx,
    /// Naming authority pointer
    Naptr,
    /// Nameserver
    Ns,
    /// Reverse-lookup pointer
    Ptr,
    /// Start of authority
    Soa,
    /// Service locator
    Srv,
    /// Text
    Txt,
}

impl RecordType {
    /// Returns the record type mnemonic as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Caa => "CAA",
            RecordType::Cname => "CNAME",
            RecordType::Dnskey => "DNSKEY",
            RecordType::Ds => "DS",
            RecordType::Mx => "MX",
            RecordType::Naptr => "NAPTR",
            RecordType::Ns => "NS",
            RecordType::Ptr => "PTR",
            RecordType::Soa => "SOA",
            RecordType::Srv => "SRV",
            RecordType::Txt => "TXT",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One answer record as returned by the DNS-over-HTTPS endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Owner name the record belongs to
    pub name: String,
    /// Numeric record type from the wire
    #[serde(rename = "type")]
    pub record_type: u16,
    /// Time to live in seconds
    #[serde(rename = "TTL")]
    pub ttl: u32,
    /// Record data in presentation format
    pub data: String,
}

/// Records for a domain, keyed by record type.
///
/// Always contains every [`RecordType`]; types with no answers map to an
/// empty vector.
pub type ResolvedRecords = BTreeMap<RecordType, Vec<RawRecord>>;

/// Response body of the DNS-over-HTTPS JSON API.
///
/// Only the `Answer` field matters here; it is absent when the queried type
/// has no records.
#[derive(Debug, Deserialize)]
pub(crate) struct DohResponse {
    #[serde(rename = "Answer", default)]
    pub(crate) answer: Vec<RawRecord>,
}
