//! Thread-safe counters for lookups and their failures.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use crate::error_handling::types::ErrorType;

/// Tracks lookup activity and error counts across concurrent requests.
///
/// Each [`ErrorType`] gets its own atomic counter so categorized failures can
/// be incremented from any task without locking.
pub struct LookupStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    dns_lookups: AtomicUsize,
    whois_lookups: AtomicUsize,
}

impl LookupStats {
    /// Creates a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error_type in ErrorType::iter() {
            errors.insert(error_type, AtomicUsize::new(0));
        }
        LookupStats {
            errors,
            dns_lookups: AtomicUsize::new(0),
            whois_lookups: AtomicUsize::new(0),
        }
    }

    /// Increments the counter for the given error type.
    pub fn increment_error(&self, error_type: ErrorType) {
        if let Some(counter) = self.errors.get(&error_type) {
            counter.fetch_add(1, Ordering::SeqCst);
        } else {
            log::error!("Attempted to increment unknown error type: {error_type:?}");
        }
    }

    /// Returns the current count for the given error type.
    pub fn get_error_count(&self, error_type: ErrorType) -> usize {
        self.errors
            .get(&error_type)
            .map(|counter| counter.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Returns the sum of all error counters.
    pub fn total_errors(&self) -> usize {
        self.errors
            .values()
            .map(|counter| counter.load(Ordering::SeqCst))
            .sum()
    }

    /// Records one DNS lookup request.
    pub fn record_dns_lookup(&self) {
        self.dns_lookups.fetch_add(1, Ordering::SeqCst);
    }

    /// Returns the number of DNS lookups recorded so far.
    pub fn dns_lookups(&self) -> usize {
        self.dns_lookups.load(Ordering::SeqCst)
    }

    /// Records one WHOIS lookup request.
    pub fn record_whois_lookup(&self) {
        self.whois_lookups.fetch_add(1, Ordering::SeqCst);
    }

    /// Returns the number of WHOIS lookups recorded so far.
    pub fn whois_lookups(&self) -> usize {
        self.whois_lookups.load(Ordering::SeqCst)
    }
}

impl Default for LookupStats {
    fn default() -> Self {
        Self::new()
    }
}
