//! HTTP API server for domain lookups.
//!
//! Provides three endpoints:
//! - `/lookup/{domain}/records` - DNS records grouped by record type
//! - `/lookup/{domain}/whois-summary` - condensed WHOIS registration data
//! - `/status` - JSON status endpoint with lookup and error counters
//!
//! Lookup failures never surface as HTTP errors; they degrade to empty
//! record sets or null summary fields so one slow upstream cannot fail the
//! whole response.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::dns::DohResolver;
use crate::error_handling::{ErrorType, LookupStats};
use crate::whois::{summarize_whois, WhoisClient};

/// Shared state for the API server
#[derive(Clone)]
pub struct AppState {
    /// DNS resolver shared across requests
    pub resolver: Arc<DohResolver>,
    /// WHOIS client shared across requests
    pub whois: Arc<WhoisClient>,
    /// Lookup and error counters
    pub stats: Arc<LookupStats>,
    /// Server start time for uptime reporting
    pub start_time: Arc<Instant>,
}

/// JSON payload for client and server failures
#[derive(Serialize)]
struct ErrorResponse {
    error: bool,
    message: String,
}

/// JSON response for `/status` endpoint
#[derive(Serialize)]
struct StatusResponse {
    dns_lookups: usize,
    whois_lookups: usize,
    uptime_seconds: f64,
    errors: ErrorCounts,
}

#[derive(Serialize)]
struct ErrorCounts {
    total: usize,
    dns_connect: usize,
    dns_timeout: usize,
    dns_status: usize,
    dns_decode: usize,
    dns_other: usize,
    whois_timeout: usize,
    whois_probe: usize,
}

/// Builds the API router.
///
/// Exposed separately from [`start_server`] so tests can serve the router on
/// an ephemeral port.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/lookup/{domain}/records", get(records_handler))
        .route("/lookup/{domain}/whois-summary", get(whois_handler))
        .route("/status", get(status_handler))
        .with_state(state)
}

/// Creates and starts the API server.
///
/// Runs until the process exits.
///
/// # Arguments
///
/// * `bind` - Address to bind to
/// * `port` - Port to listen on
/// * `state` - Shared resolver, WHOIS client, and counters
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn start_server(bind: &str, port: u16, state: AppState) -> Result<(), anyhow::Error> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(format!("{bind}:{port}"))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {bind}:{port}: {e}"))?;

    log::info!("API server listening on http://{bind}:{port}/");
    log::info!("  - DNS records: http://{bind}:{port}/lookup/example.com/records");
    log::info!("  - WHOIS summary: http://{bind}:{port}/lookup/example.com/whois-summary");
    log::info!("  - Status: http://{bind}:{port}/status");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {e}"))?;

    Ok(())
}

/// DNS records endpoint
async fn records_handler(State(state): State<AppState>, Path(domain): Path<String>) -> Response {
    let domain = domain.trim();
    if domain.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No domain provided");
    }

    state.stats.record_dns_lookup();
    let records = state.resolver.resolve_all(domain, &state.stats).await;
    json_response(&records)
}

/// WHOIS summary endpoint
async fn whois_handler(State(state): State<AppState>, Path(domain): Path<String>) -> Response {
    let domain = domain.trim();
    if domain.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No domain provided");
    }

    state.stats.record_whois_lookup();
    let summary = summarize_whois(domain, &state.whois, &state.stats).await;
    json_response(&summary)
}

/// JSON status endpoint with lookup counters and categorized errors
async fn status_handler(State(state): State<AppState>) -> Response {
    let response = StatusResponse {
        dns_lookups: state.stats.dns_lookups(),
        whois_lookups: state.stats.whois_lookups(),
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        errors: ErrorCounts {
            total: state.stats.total_errors(),
            dns_connect: state.stats.get_error_count(ErrorType::DnsConnectError),
            dns_timeout: state.stats.get_error_count(ErrorType::DnsTimeoutError),
            dns_status: state.stats.get_error_count(ErrorType::DnsStatusError),
            dns_decode: state.stats.get_error_count(ErrorType::DnsDecodeError),
            dns_other: state.stats.get_error_count(ErrorType::DnsOtherError),
            whois_timeout: state.stats.get_error_count(ErrorType::WhoisTimeoutError),
            whois_probe: state.stats.get_error_count(ErrorType::WhoisProbeError),
        },
    };
    json_response(&response)
}

fn json_response<T: Serialize>(payload: &T) -> Response {
    let json = match serde_json::to_string_pretty(payload) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize response: {e}");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    };

    (StatusCode::OK, [("content-type", "application/json")], json).into_response()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let body = ErrorResponse {
        error: true,
        message: message.to_string(),
    };
    let json = serde_json::to_string(&body)
        .unwrap_or_else(|_| r#"{"error":true,"message":"Internal server error"}"#.to_string());
    (status, [("content-type", "application/json")], json).into_response()
}
