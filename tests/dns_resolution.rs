//! Integration tests for DNS resolution against a mock DNS-over-HTTPS endpoint
//!
//! These tests verify the core resolution behavior:
//! - Every record type is present in every result
//! - Failures are isolated per record type
//! - Answers for other owner names are filtered out
//! - Queries run concurrently

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use strum::IntoEnumIterator;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use domain_digger::{DohResolver, ErrorType, LookupStats, RecordType};

mod helpers;
use helpers::{doh_answer, doh_body, mount_doh_empty, mount_doh_records};

/// Builds a resolver pointed at a mock server.
fn test_resolver(mock_uri: &str) -> DohResolver {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build test client");
    DohResolver::with_endpoint(client, format!("{mock_uri}/resolve"))
}

#[tokio::test]
async fn test_resolve_all_contains_every_record_type() {
    let mock_server = MockServer::start().await;
    mount_doh_records(
        &mock_server,
        "A",
        &[doh_answer("example.com.", 1, 3600, "93.184.216.34")],
    )
    .await;
    mount_doh_empty(&mock_server).await;

    let resolver = test_resolver(&mock_server.uri());
    let stats = LookupStats::new();
    let records = resolver.resolve_all("example.com", &stats).await;

    assert_eq!(records.len(), 13, "every record type must be present");
    for record_type in RecordType::iter() {
        assert!(
            records.contains_key(&record_type),
            "missing entry for {record_type}"
        );
    }
    assert_eq!(records[&RecordType::A].len(), 1);
    assert_eq!(records[&RecordType::A][0].data, "93.184.216.34");
    assert!(records[&RecordType::Txt].is_empty());
    assert_eq!(stats.total_errors(), 0);
}

#[tokio::test]
async fn test_resolve_all_returns_all_empty_when_every_query_fails() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resolve"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&mock_server)
        .await;

    let resolver = test_resolver(&mock_server.uri());
    let stats = LookupStats::new();
    let records = resolver.resolve_all("example.com", &stats).await;

    assert_eq!(records.len(), 13);
    for (record_type, answers) in &records {
        assert!(answers.is_empty(), "{record_type} should be empty");
    }
    assert_eq!(stats.total_errors(), 13, "one recorded failure per type");
    assert_eq!(stats.get_error_count(ErrorType::DnsStatusError), 13);
}

#[tokio::test]
async fn test_resolve_all_filters_answers_for_other_names() {
    let mock_server = MockServer::start().await;
    // A CNAME'd name resolves through the chain target; the target's A
    // record comes back in the same answer section
    mount_doh_records(
        &mock_server,
        "A",
        &[
            doh_answer("www.example.com.", 5, 300, "example.com."),
            doh_answer("example.com.", 1, 300, "93.184.216.34"),
        ],
    )
    .await;
    mount_doh_empty(&mock_server).await;

    let resolver = test_resolver(&mock_server.uri());
    let stats = LookupStats::new();
    let records = resolver.resolve_all("www.example.com", &stats).await;

    assert_eq!(records[&RecordType::A].len(), 1);
    assert_eq!(records[&RecordType::A][0].name, "www.example.com.");
}

/// One good answer must come through filtered even when every other type
/// fails, and the map must still carry all thirteen keys.
#[tokio::test]
async fn test_partial_failure_keeps_filtered_answers_and_full_map() {
    let mock_server = MockServer::start().await;
    mount_doh_records(
        &mock_server,
        "A",
        &[
            doh_answer("www.example.com.", 5, 300, "example.com."),
            doh_answer("example.com.", 1, 300, "93.184.216.34"),
        ],
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/resolve"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .with_priority(10)
        .mount(&mock_server)
        .await;

    let resolver = test_resolver(&mock_server.uri());
    let stats = LookupStats::new();
    let records = resolver.resolve_all("www.example.com", &stats).await;

    assert_eq!(records.len(), 13);
    assert_eq!(records[&RecordType::A].len(), 1);
    assert_eq!(records[&RecordType::A][0].name, "www.example.com.");
    assert_eq!(stats.get_error_count(ErrorType::DnsStatusError), 12);
    assert_eq!(stats.total_errors(), 12);
}

#[tokio::test]
async fn test_resolve_all_ignores_trailing_dot_differences() {
    let mock_server = MockServer::start().await;
    mount_doh_records(
        &mock_server,
        "NS",
        &[doh_answer("example.com", 2, 86400, "ns1.example.com.")],
    )
    .await;
    mount_doh_empty(&mock_server).await;

    let resolver = test_resolver(&mock_server.uri());
    let stats = LookupStats::new();

    // Queried with a trailing dot, answered without one
    let records = resolver.resolve_all("example.com.", &stats).await;
    assert_eq!(records[&RecordType::Ns].len(), 1);
}

#[tokio::test]
async fn test_resolve_all_queries_each_type_once() {
    let mock_server = MockServer::start().await;
    let request_count = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&request_count);
    Mock::given(method("GET"))
        .and(path("/resolve"))
        .respond_with(move |_req: &wiremock::Request| {
            counter.fetch_add(1, Ordering::SeqCst);
            ResponseTemplate::new(200).set_body_json(doh_body(&[]))
        })
        .mount(&mock_server)
        .await;

    let resolver = test_resolver(&mock_server.uri());
    let stats = LookupStats::new();
    resolver.resolve_all("example.com", &stats).await;

    assert_eq!(request_count.load(Ordering::SeqCst), 13);
}

#[tokio::test]
async fn test_resolve_all_is_idempotent() {
    let mock_server = MockServer::start().await;
    mount_doh_records(
        &mock_server,
        "MX",
        &[doh_answer("example.com.", 15, 3600, "10 mail.example.com.")],
    )
    .await;
    mount_doh_empty(&mock_server).await;

    let resolver = test_resolver(&mock_server.uri());
    let stats = LookupStats::new();

    let first = resolver.resolve_all("example.com", &stats).await;
    let second = resolver.resolve_all("example.com", &stats).await;
    assert_eq!(first, second);
}

/// With every record type delayed, concurrent dispatch finishes in roughly
/// one delay while serial dispatch would take thirteen.
#[tokio::test]
async fn test_resolve_all_queries_types_concurrently() {
    let delay = Duration::from_millis(750);

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resolve"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(doh_body(&[]))
                .set_delay(delay),
        )
        .mount(&mock_server)
        .await;

    let resolver = test_resolver(&mock_server.uri());
    let stats = LookupStats::new();

    let start = Instant::now();
    resolver.resolve_all("example.com", &stats).await;
    let elapsed = start.elapsed();

    assert!(elapsed >= delay, "cannot finish before the slowest query");
    assert!(
        elapsed < Duration::from_secs(4),
        "queries appear to run serially: took {elapsed:?}"
    );
}

#[tokio::test]
async fn test_missing_answer_field_yields_empty_records() {
    let mock_server = MockServer::start().await;
    // NXDOMAIN-style body: success status, no Answer field
    Mock::given(method("GET"))
        .and(path("/resolve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "Status": 3 })))
        .mount(&mock_server)
        .await;

    let resolver = test_resolver(&mock_server.uri());
    let stats = LookupStats::new();
    let records = resolver.resolve_all("no-such-domain.example", &stats).await;

    for answers in records.values() {
        assert!(answers.is_empty());
    }
    assert_eq!(stats.total_errors(), 0, "absent answers are not failures");
}

#[tokio::test]
async fn test_malformed_body_only_affects_that_type() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resolve"))
        .and(query_param("type", "A"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;
    mount_doh_records(
        &mock_server,
        "NS",
        &[doh_answer("example.com.", 2, 86400, "ns1.example.com.")],
    )
    .await;
    mount_doh_empty(&mock_server).await;

    let resolver = test_resolver(&mock_server.uri());
    let stats = LookupStats::new();
    let records = resolver.resolve_all("example.com", &stats).await;

    assert!(records[&RecordType::A].is_empty());
    assert_eq!(records[&RecordType::Ns].len(), 1);
    assert_eq!(stats.get_error_count(ErrorType::DnsDecodeError), 1);
    assert_eq!(stats.total_errors(), 1);
}
