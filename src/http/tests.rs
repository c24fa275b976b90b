//! Tests for the HTTP client module

use super::*;
use crate::config::{LoggingConfig, RetryConfig};
use crate::error::Error;
use crate::pagination::{Page, PageRequest, Paginated, PaginationStyle};
use crate::types::BackoffType;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use test_case::test_case;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn quick_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        max_retries,
        backoff_type: BackoffType::Constant,
        initial_backoff_ms: 10,
        max_backoff_ms: 100,
    }
}

fn client(config: HttpClientConfig) -> HttpClient {
    HttpClient::with_config(config).unwrap()
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.retry.is_none());
    assert!(config.circuit_breaker.is_none());
    assert!(!config.strict_validation);
    assert!(config.logging.enabled);
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(60))
        .user_agent("test-agent/1.0")
        .strict_validation(true)
        .logging(LoggingConfig {
            enabled: true,
            verbose: true,
        })
        .retry(quick_retry(5))
        .circuit_breaker(CircuitBreakerConfig::default())
        .build();

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.user_agent, "test-agent/1.0");
    assert!(config.strict_validation);
    assert!(config.logging.verbose);
    assert_eq!(config.retry.map(|r| r.max_retries), Some(5));
    assert!(config.circuit_breaker.is_some());
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new().unwrap();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("owns_transport: true"));
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_http_client_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": 42
        })))
        .mount(&mock_server)
        .await;

    let client = client(HttpClientConfig::default());
    let data: serde_json::Value = client
        .get_json(&format!("{}/api/data", mock_server.uri()), &Query::new(), None)
        .await
        .unwrap();

    assert_eq!(data["value"], 42);
}

#[tokio::test]
async fn test_http_client_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "test"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(HttpClientConfig::default());
    let query = Query::new().with("q", "test").with("page", 2);
    let result: Vec<u32> = client
        .get_json(&format!("{}/api/search", mock_server.uri()), &query, None)
        .await
        .unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_http_client_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "parliament-test/9.9"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .user_agent("parliament-test/9.9")
        .build();

    let owned = client(config.clone());
    owned.get(&mock_server.uri(), &Query::new(), None).await.unwrap();

    // shared transports get the user agent per request
    let shared = HttpClient::with_client(reqwest::Client::new(), config);
    shared.get(&mock_server.uri(), &Query::new(), None).await.unwrap();
}

#[test_case(404 ; "not found")]
#[test_case(500 ; "server error")]
#[tokio::test]
async fn test_http_client_status_error(status: u16) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(status).set_body_string("upstream says no"))
        .mount(&mock_server)
        .await;

    let client = client(HttpClientConfig::default());
    let err = client
        .get(&format!("{}/api/status", mock_server.uri()), &Query::new(), None)
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status: got, body } => {
            assert_eq!(got, status);
            assert_eq!(body, "upstream says no");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

// ============================================================================
// Retry Tests
// ============================================================================

#[tokio::test]
async fn test_http_client_retry_on_503() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().retry(quick_retry(3)).build();
    let client = client(config);
    let body: serde_json::Value = client
        .get_json(&format!("{}/api/flaky", mock_server.uri()), &Query::new(), None)
        .await
        .unwrap();

    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_http_client_no_retry_by_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(HttpClientConfig::default());
    let err = client
        .get(&format!("{}/api/flaky", mock_server.uri()), &Query::new(), None)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_http_client_does_not_retry_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().retry(quick_retry(3)).build();
    let err = client(config)
        .get(&mock_server.uri(), &Query::new(), None)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_http_client_max_retries_exceeded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/always-fail"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Server error"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().retry(quick_retry(2)).build();
    let client = client(config);
    let err = client
        .get(&format!("{}/api/always-fail", mock_server.uri()), &Query::new(), None)
        .await
        .unwrap_err();

    assert!(err.is_server_error());
}

// ============================================================================
// Timeout, Cancellation and Circuit Breaker Tests
// ============================================================================

#[tokio::test]
async fn test_http_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .timeout(Duration::from_millis(100))
        .build();
    let err = client(config)
        .get(&mock_server.uri(), &Query::new(), None)
        .await
        .unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert!(!err.is_cancelled());
}

#[tokio::test]
async fn test_http_client_cancelled_before_send() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let token = CancellationToken::new();
    token.cancel();

    let err = client(HttpClientConfig::default())
        .get(&mock_server.uri(), &Query::new(), Some(&token))
        .await
        .unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn test_http_client_cancelled_in_flight() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let err = client(HttpClientConfig::default())
        .get(&mock_server.uri(), &Query::new(), Some(&token))
        .await
        .unwrap_err();
    assert!(err.is_cancelled());
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn test_http_client_circuit_breaker_opens() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .circuit_breaker(CircuitBreakerConfig {
            failure_threshold: 2,
            open_timeout_ms: 60_000,
        })
        .build();
    let client = client(config);

    for _ in 0..2 {
        let err = client
            .get(&mock_server.uri(), &Query::new(), None)
            .await
            .unwrap_err();
        assert!(err.is_server_error());
    }

    let err = client
        .get(&mock_server.uri(), &Query::new(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::CircuitOpen { .. }));
    assert_eq!(
        client.circuit_breaker().map(CircuitBreaker::state),
        Some(CircuitState::Open)
    );
}

#[tokio::test]
async fn test_http_client_half_open_sends_one_probe() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .circuit_breaker(CircuitBreakerConfig {
            failure_threshold: 1,
            open_timeout_ms: 50,
        })
        .build();
    let client = client(config);
    let url = mock_server.uri();

    assert!(client.get(&url, &Query::new(), None).await.is_err());
    tokio::time::sleep(Duration::from_millis(80)).await;

    let probe_query = Query::new();
    let (probe, refused) = tokio::join!(client.get(&url, &probe_query, None), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        client.get(&url, &Query::new(), None).await
    });

    assert!(probe.is_ok());
    assert!(matches!(refused, Err(Error::CircuitOpen { .. })));
    assert_eq!(
        client.circuit_breaker().map(CircuitBreaker::state),
        Some(CircuitState::Closed)
    );
}

// ============================================================================
// Decoding Tests
// ============================================================================

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Member {
    id: u32,
    name_display_as: String,
}

#[test]
fn test_decode_lenient_ignores_unknown_fields() {
    let body = br#"{"id": 1, "nameDisplayAs": "Ms Example", "nickname": "Ex"}"#;
    let member: Member = decode_json(body, false).unwrap();
    assert_eq!(member.id, 1);
}

#[test]
fn test_decode_strict_names_unknown_field() {
    let body = br#"{"id": 1, "nameDisplayAs": "Ms Example", "nickname": "Ex"}"#;
    let err = decode_json::<Member>(body, true).unwrap_err();
    match err {
        Error::Deserialize { field, message } => {
            assert_eq!(field.as_deref(), Some("nickname"));
            assert!(message.contains("nickname"));
        }
        other => panic!("expected Deserialize, got {other:?}"),
    }
}

#[test]
fn test_decode_strict_accepts_exact_shape() {
    let body = br#"{"id": 1, "nameDisplayAs": "Ms Example"}"#;
    let member: Member = decode_json(body, true).unwrap();
    assert_eq!(
        member,
        Member {
            id: 1,
            name_display_as: "Ms Example".to_string()
        }
    );
}

#[test]
fn test_decode_strict_reports_nested_path() {
    let body = br#"[{"id": 1, "nameDisplayAs": "A"}, {"id": 2, "nameDisplayAs": "B", "extra": true}]"#;
    let err = decode_json::<Vec<Member>>(body, true).unwrap_err();
    let Error::Deserialize { field, .. } = err else {
        panic!("expected Deserialize");
    };
    let field = field.unwrap();
    assert!(field.contains("extra"));
    assert!(field.contains('1'), "path should include the array index: {field}");
}

#[test]
fn test_decode_shape_mismatch() {
    let err = decode_json::<Member>(br#"{"id": "one"}"#, false).unwrap_err();
    assert!(matches!(err, Error::Deserialize { field: None, .. }));
}

// ============================================================================
// Endpoint and Query Tests
// ============================================================================

#[test]
fn test_endpoint_render() {
    let endpoint = Endpoint::get("members.contact", "/Members/{}/Contact");
    assert_eq!(endpoint.arity(), 1);
    assert_eq!(endpoint.render(&["172"]).unwrap(), "/Members/172/Contact");
}

#[test]
fn test_endpoint_render_encodes_arguments() {
    let endpoint = Endpoint::get("search", "/Search/ParagraphSearchResults/{}");
    assert_eq!(
        endpoint.render(&["money bill/supply"]).unwrap(),
        "/Search/ParagraphSearchResults/money%20bill%2Fsupply"
    );
}

#[test]
fn test_endpoint_render_checks_arity() {
    let endpoint = Endpoint::get("bills.stages", "/Bills/{}/Stages");
    assert!(matches!(
        endpoint.render(&[]),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(endpoint.render(&["1", "2"]).is_err());
    assert!(endpoint.render(&[""]).is_err());
}

#[test]
fn test_endpoint_paged() {
    const SEARCH: Endpoint = Endpoint::get("members.search", "/Members/Search")
        .paged(PaginationStyle::skip_take("skip", "take"));
    assert!(SEARCH.paging.is_paged());
    assert_eq!(SEARCH.arity(), 0);
}

#[test]
fn test_query_builder() {
    let mut query = Query::new();
    query
        .push("House", 1)
        .push_opt("Name", Some("Smith"))
        .push_opt::<u32>("PartyId", None)
        .push_all("Ids", [3, 4]);

    assert_eq!(
        query.pairs(),
        &[
            ("House".to_string(), "1".to_string()),
            ("Name".to_string(), "Smith".to_string()),
            ("Ids".to_string(), "3".to_string()),
            ("Ids".to_string(), "4".to_string()),
        ]
    );

    query.set("Ids", 9);
    assert_eq!(query.get("Ids"), Some("9"));
    assert_eq!(query.len(), 3);
}

// ============================================================================
// ServiceClient Tests
// ============================================================================

#[derive(Debug, Deserialize)]
struct NumberPage {
    items: Vec<u32>,
    total: u64,
}

impl Paginated for NumberPage {
    type Item = u32;

    fn into_page(self, _request: &PageRequest) -> Page<u32> {
        Page::with_total(self.items, self.total)
    }
}

#[tokio::test]
async fn test_service_client_invoke() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/things/7"))
        .and(query_param("verbose", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(7)))
        .mount(&mock_server)
        .await;

    let http = Arc::new(client(HttpClientConfig::default()));
    let service = ServiceClient::new(http, "things", &format!("{}/api/", mock_server.uri()));
    let value: u32 = service
        .invoke(
            &Endpoint::get("things.get", "/things/{}"),
            &["7"],
            &Query::new().with("verbose", true),
        )
        .await
        .unwrap();
    assert_eq!(value, 7);
}

#[tokio::test]
async fn test_service_client_paginate() {
    let mock_server = MockServer::start().await;

    for (skip, items) in [("0", vec![1, 2]), ("2", vec![3, 4]), ("4", vec![5])] {
        Mock::given(method("GET"))
            .and(path("/things"))
            .and(query_param("filter", "odd"))
            .and(query_param("skip", skip))
            .and(query_param("take", "2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"items": items, "total": 5})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    const LIST: Endpoint =
        Endpoint::get("things.list", "/things").paged(PaginationStyle::skip_take("skip", "take"));

    let http = Arc::new(client(HttpClientConfig::default()));
    let service = ServiceClient::new(http, "things", &mock_server.uri());
    let items = service
        .paginate::<NumberPage>(
            LIST,
            Vec::new(),
            Query::new().with("filter", "odd"),
            PageRequest::first(2),
        )
        .collect()
        .await
        .unwrap();

    assert_eq!(items, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_service_client_cancellation_reaches_stream() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": [1], "total": 9})))
        .expect(0)
        .mount(&mock_server)
        .await;

    const LIST: Endpoint =
        Endpoint::get("things.list", "/things").paged(PaginationStyle::skip_take("skip", "take"));

    let token = CancellationToken::new();
    token.cancel();
    let http = Arc::new(client(HttpClientConfig::default()));
    let service =
        ServiceClient::new(http, "things", &mock_server.uri()).with_cancellation(token);

    let mut stream =
        service.paginate::<NumberPage>(LIST, Vec::new(), Query::new(), PageRequest::first(1));
    assert!(stream.next().await.unwrap_err().is_cancelled());
    assert_eq!(stream.pages_fetched(), 0);
}
