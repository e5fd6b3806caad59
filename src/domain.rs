//! Domain name validation.
//!
//! This module provides the syntax gate used before any lookup work is
//! scheduled. Inputs that fail it never reach the network.

use crate::config::{MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH};

/// Checks whether the input looks like a registrable domain name.
///
/// A valid domain has at least two dot-separated labels, stays within the
/// DNS length limits, and ends in a plausible TLD. Each label may contain
/// ASCII letters, digits, and interior hyphens. The last label must be at
/// least two characters and either all alphabetic or a punycode label
/// (`xn--` prefix), which rules out bare hostnames like `localhost` and
/// IPv4 addresses.
///
/// # Arguments
///
/// * `input` - The candidate domain name
///
/// # Returns
///
/// `true` if the input is syntactically a domain name.
pub fn is_valid_domain(input: &str) -> bool {
    if input.is_empty() || input.len() > MAX_DOMAIN_LENGTH {
        return false;
    }

    let labels: Vec<&str> = input.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    for label in &labels {
        if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
            return false;
        }
        if !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return false;
        }
        if label.starts_with('-') || label.ends_with('-') {
            return false;
        }
    }

    let tld = labels[labels.len() - 1];
    tld.len() >= 2 && (tld.starts_with("xn--") || tld.chars().all(|c| c.is_ascii_alphabetic()))
}
