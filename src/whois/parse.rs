//! WHOIS response parsing.
//!
//! Server responses are free-form `Label: value` text with comment and footer
//! noise. Labels vary between registries, so the ones we read downstream are
//! normalized to canonical spellings.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::config::WHOIS_DATE_DISPLAY_FORMAT;

// Datetime formats seen before the date-only fallbacks are tried
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d-%b-%Y", "%d/%m/%Y", "%Y.%m.%d"];

/// Parses a raw WHOIS response into normalized key-value fields.
///
/// Comment lines (`%`, `#`) and the `>>>` footer are skipped. When a label
/// repeats, the first value wins.
pub(crate) fn parse_fields(response: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for line in response.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('%') || line.starts_with('#') {
            continue;
        }
        if line.starts_with(">>>") {
            continue;
        }
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        fields
            .entry(normalize_label(label.trim()))
            .or_insert_with(|| value.to_string());
    }
    fields
}

/// Maps the label spellings used by different registries onto one canonical
/// form. Unknown labels pass through unchanged.
fn normalize_label(label: &str) -> String {
    match label.to_lowercase().as_str() {
        "registrar" | "sponsoring registrar" | "registrar name" => "Registrar".to_string(),
        "created date"
        | "creation date"
        | "created"
        | "created on"
        | "registered"
        | "registered on"
        | "registration date"
        | "registration time"
        | "domain registration date" => "Created Date".to_string(),
        "dnssec" | "dnssec status" => "DNSSEC".to_string(),
        "registrar whois server" | "whois server" | "registrar whois" => {
            "Registrar WHOIS Server".to_string()
        }
        _ => label.to_string(),
    }
}

/// Cleans a referral hostname read from a WHOIS field.
///
/// Strips the `whois://` scheme and trailing slashes, rejects values that are
/// empty or contain whitespace, and lowercases the rest. A `host:port` value
/// passes through with its port.
pub(crate) fn clean_referral(value: &str) -> Option<String> {
    let mut host = value.trim();
    if host
        .get(..8)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("whois://"))
    {
        host = &host[8..];
    }
    let host = host.trim_end_matches('/');
    if host.is_empty() || host.contains(char::is_whitespace) {
        return None;
    }
    Some(host.to_lowercase())
}

/// Parses the many date shapes WHOIS servers emit into a calendar date.
pub(crate) fn parse_whois_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    None
}

/// Renders a date the way the summary reports it, as unpadded `M/D/YYYY`.
pub(crate) fn format_whois_date(date: NaiveDate) -> String {
    date.format(WHOIS_DATE_DISPLAY_FORMAT).to_string()
}
