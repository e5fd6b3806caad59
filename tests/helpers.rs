// Shared test helpers for mock DNS-over-HTTPS and WHOIS servers.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds one answer record in the DNS-over-HTTPS JSON shape.
#[allow(dead_code)] // Used by other test files
pub fn doh_answer(name: &str, record_type: u16, ttl: u32, data: &str) -> Value {
    json!({ "name": name, "type": record_type, "TTL": ttl, "data": data })
}

/// Builds a DNS-over-HTTPS response body. An empty answer list omits the
/// `Answer` field entirely, matching the live API.
#[allow(dead_code)] // Used by other test files
pub fn doh_body(answers: &[Value]) -> Value {
    if answers.is_empty() {
        json!({ "Status": 0 })
    } else {
        json!({ "Status": 0, "Answer": answers })
    }
}

/// Mounts a mock that answers one record type with the given answers.
#[allow(dead_code)] // Used by other test files
pub async fn mount_doh_records(server: &MockServer, record_type: &str, answers: &[Value]) {
    Mock::given(method("GET"))
        .and(path("/resolve"))
        .and(query_param("type", record_type))
        .respond_with(ResponseTemplate::new(200).set_body_json(doh_body(answers)))
        .mount(server)
        .await;
}

/// Mounts a low-priority catch-all that answers every record type with no
/// records, so specific mocks mounted at default priority win.
#[allow(dead_code)] // Used by other test files
pub async fn mount_doh_empty(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/resolve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(doh_body(&[])))
        .with_priority(10)
        .mount(server)
        .await;
}

/// A WHOIS server on an ephemeral local port that answers every connection
/// with a canned reply and counts connections.
#[allow(dead_code)] // Used by other test files
pub struct MockWhoisServer {
    address: String,
    connections: Arc<AtomicUsize>,
}

#[allow(dead_code)] // Used by other test files
impl MockWhoisServer {
    /// Spawns a server that reads the query, writes `reply`, and closes.
    pub async fn spawn(reply: String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock WHOIS server");
        let address = listener
            .local_addr()
            .expect("Failed to read mock server address")
            .to_string();
        let connections = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&connections);
        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                counter.fetch_add(1, Ordering::SeqCst);
                let reply = reply.clone();
                tokio::spawn(async move {
                    let mut query = [0u8; 512];
                    let _ = stream.read(&mut query).await;
                    let _ = stream.write_all(reply.as_bytes()).await;
                    // Close the write side so the client sees EOF
                    let _ = stream.shutdown().await;
                });
            }
        });

        Self {
            address,
            connections,
        }
    }

    /// Spawns a server that accepts connections but never replies, for
    /// exercising the probe deadline.
    pub async fn spawn_stalling() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock WHOIS server");
        let address = listener
            .local_addr()
            .expect("Failed to read mock server address")
            .to_string();
        let connections = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&connections);
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::spawn(async move {
                    // Hold the connection open well past any test deadline
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    drop(stream);
                });
            }
        });

        Self {
            address,
            connections,
        }
    }

    /// The server's `host:port` address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Number of connections accepted so far.
    pub fn connection_count(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }
}

/// Builds an IANA-style bootstrap reply pointing at `registry_address`.
#[allow(dead_code)] // Used by other test files
pub fn iana_reply(registry_address: &str) -> String {
    format!(
        "% IANA WHOIS server\n\
         % for more information on IANA, visit http://www.iana.org\n\
         \n\
         domain:       COM\n\
         organisation: VeriSign Global Registry Services\n\
         \n\
         whois:        {registry_address}\n\
         \n\
         status:       ACTIVE\n"
    )
}

/// Builds a registry-style reply for `domain`, optionally listing a
/// registrar WHOIS server referral.
#[allow(dead_code)] // Used by other test files
pub fn registry_reply(domain: &str, registrar_address: Option<&str>) -> String {
    let mut reply = format!(
        "   Domain Name: {}\n   Registry Domain ID: 2336799_DOMAIN_COM-VRSN\n",
        domain.to_uppercase()
    );
    if let Some(address) = registrar_address {
        reply.push_str(&format!("   Registrar WHOIS Server: {address}\n"));
    }
    reply.push_str(
        "   Registrar: Example Registrar\n\
         \x20  Creation Date: 2001-01-01T00:00:00Z\n\
         \x20  DNSSEC: unsigned\n\
         \n\
         >>> Last update of whois database: 2024-01-01T00:00:00Z <<<\n",
    );
    reply
}
