//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_digger` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! With a positional domain the binary performs one lookup and prints JSON;
//! without one it starts the HTTP API server. All core functionality is
//! implemented in the library crate.

use std::process;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use domain_digger::initialization::{init_http_client, init_logger_with};
use domain_digger::{
    start_server, summarize_whois, AppState, Config, DohResolver, LookupStats, WhoisClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let client = match init_http_client(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("domain_digger error: {e:#}");
            process::exit(1);
        }
    };

    let resolver = Arc::new(DohResolver::with_endpoint(
        client,
        config.doh_endpoint.clone(),
    ));
    let whois = Arc::new(WhoisClient::new());
    let stats = Arc::new(LookupStats::new());

    match config.domain {
        Some(ref domain) => {
            if let Err(e) = lookup_domain(domain, &resolver, &whois, &stats).await {
                eprintln!("domain_digger error: {e:#}");
                process::exit(1);
            }
            Ok(())
        }
        None => {
            let state = AppState {
                resolver,
                whois,
                stats,
                start_time: Arc::new(Instant::now()),
            };
            if let Err(e) = start_server(&config.bind, config.port, state).await {
                eprintln!("domain_digger error: {e:#}");
                process::exit(1);
            }
            Ok(())
        }
    }
}

/// Runs both lookups for one domain and prints the combined result as JSON.
async fn lookup_domain(
    domain: &str,
    resolver: &DohResolver,
    whois: &WhoisClient,
    stats: &LookupStats,
) -> Result<()> {
    let (records, summary) = tokio::join!(
        resolver.resolve_all(domain, stats),
        summarize_whois(domain, whois, stats)
    );

    let output = serde_json::json!({
        "domain": domain,
        "records": records,
        "whois": summary,
    });
    let rendered =
        serde_json::to_string_pretty(&output).context("Failed to render lookup result")?;
    println!("{rendered}");
    Ok(())
}
