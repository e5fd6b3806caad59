//! WHOIS probing over TCP.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::config::{IANA_WHOIS_SERVER, WHOIS_MAX_FOLLOW, WHOIS_PORT};
use crate::whois::parse::{clean_referral, parse_fields};
use crate::whois::types::ServerReply;

/// Queries WHOIS servers over TCP port 43.
///
/// A probe starts at the IANA root to discover the registry server for the
/// domain's TLD, then follows at most one `Registrar WHOIS Server` referral.
pub struct WhoisClient {
    iana_server: String,
    max_follow: usize,
}

impl WhoisClient {
    /// Creates a client that bootstraps from the IANA WHOIS server.
    pub fn new() -> Self {
        Self::with_iana_server(IANA_WHOIS_SERVER.to_string())
    }

    /// Creates a client that bootstraps from a custom server.
    ///
    /// The server may carry an explicit `host:port`; without one, port 43 is
    /// assumed.
    pub fn with_iana_server(iana_server: String) -> Self {
        Self {
            iana_server,
            max_follow: WHOIS_MAX_FOLLOW,
        }
    }

    /// Caps how many servers one probe may query after the bootstrap.
    ///
    /// Defaults to [`WHOIS_MAX_FOLLOW`](crate::config::WHOIS_MAX_FOLLOW), the
    /// registry plus one registrar referral.
    pub fn with_max_follow(mut self, max_follow: usize) -> Self {
        self.max_follow = max_follow;
        self
    }

    /// Probes the WHOIS servers responsible for a domain.
    ///
    /// The whole probe shares one deadline; there are no per-server retries.
    /// Servers are queried in referral order and each contributes one entry,
    /// either its parsed fields or the error that ended the chain.
    ///
    /// # Arguments
    ///
    /// * `domain` - The domain to query
    /// * `timeout` - Deadline for the entire probe, bootstrap included
    ///
    /// # Returns
    ///
    /// Replies in query order. Fails when the deadline passes or no registry
    /// server could be discovered for the TLD.
    pub async fn query(
        &self,
        domain: &str,
        timeout: Duration,
    ) -> Result<Vec<(String, ServerReply)>> {
        tokio::time::timeout(timeout, self.query_servers(domain))
            .await
            .with_context(|| {
                format!(
                    "WHOIS probe for {domain} exceeded {}ms",
                    timeout.as_millis()
                )
            })?
    }

    async fn query_servers(&self, domain: &str) -> Result<Vec<(String, ServerReply)>> {
        let mut server = self.registry_server(domain).await?;
        let mut replies: Vec<(String, ServerReply)> = Vec::new();

        for _ in 0..self.max_follow {
            match self.query_server(&server, domain).await {
                Ok(response) => {
                    let fields = parse_fields(&response);
                    let referral = fields
                        .get("Registrar WHOIS Server")
                        .and_then(|value| clean_referral(value));
                    replies.push((server.clone(), ServerReply::Fields(fields)));

                    let already_queried = |next: &str| {
                        replies
                            .iter()
                            .any(|(queried, _)| queried.eq_ignore_ascii_case(next))
                    };
                    match referral {
                        Some(next) if !already_queried(&next) => server = next,
                        _ => break,
                    }
                }
                Err(e) => {
                    log::debug!("WHOIS query to {server} for {domain} failed: {e:#}");
                    replies.push((server.clone(), ServerReply::Error(format!("{e:#}"))));
                    break;
                }
            }
        }
        Ok(replies)
    }

    /// Asks the IANA root which server is authoritative for the domain's TLD.
    async fn registry_server(&self, domain: &str) -> Result<String> {
        let tld = domain.rsplit('.').next().unwrap_or(domain);
        let response = self
            .query_server(&self.iana_server, tld)
            .await
            .with_context(|| format!("IANA bootstrap for .{tld} failed"))?;
        parse_fields(&response)
            .get("whois")
            .and_then(|value| clean_referral(value))
            .ok_or_else(|| anyhow!("IANA lists no WHOIS server for .{tld}"))
    }

    async fn query_server(&self, server: &str, query: &str) -> Result<String> {
        let address = server_address(server);
        let mut stream = TcpStream::connect(&address)
            .await
            .with_context(|| format!("Failed to connect to {address}"))?;
        stream
            .write_all(query.as_bytes())
            .await
            .with_context(|| format!("Failed to send query to {address}"))?;
        stream
            .write_all(b"\r\n")
            .await
            .with_context(|| format!("Failed to send query to {address}"))?;

        // Servers answer and close; read until EOF
        let mut response = Vec::new();
        stream
            .read_to_end(&mut response)
            .await
            .with_context(|| format!("Failed to read response from {address}"))?;
        Ok(String::from_utf8_lossy(&response).into_owned())
    }
}

impl Default for WhoisClient {
    fn default() -> Self {
        Self::new()
    }
}

fn server_address(server: &str) -> String {
    if server.contains(':') {
        server.to_string()
    } else {
        format!("{server}:{WHOIS_PORT}")
    }
}
