//! Integration tests for `RegistryClient` using wiremock HTTP mocks.

use std::collections::BTreeMap;
use std::time::Duration;

use plcap_core::LocationRecord;
use plcap_registry::{
    submit_all, OutcomeStatus, ProxyRequest, RegistryClient, RegistryError, SubmissionPayload,
    SubmissionSource,
};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> RegistryClient {
    RegistryClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

fn source() -> SubmissionSource {
    SubmissionSource::new(
        "OS Hub Chrome Extension",
        Some("LinkedIn"),
        "https://www.linkedin.com/company/acme/about/",
    )
}

fn record(name: &str) -> LocationRecord {
    let mut record = LocationRecord::named(name, "100 Main Street, Springfield, IL 62701");
    record.country = "US".to_string();
    record
}

fn payload(name: &str) -> SubmissionPayload {
    SubmissionPayload::from_record(&record(name), &source()).expect("valid record")
}

// ---------------------------------------------------------------------------
// submit_location
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_location_returns_receipt_with_numeric_moderation_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/production-locations/"))
        .and(header("Authorization", "Token test-key"))
        .and(body_partial_json(serde_json::json!({
            "name": "Acme",
            "country": "US",
            "source_name": "OS Hub Chrome Extension - LinkedIn"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "moderation_id": 42,
            "os_id": "US2024123ABC"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let receipt = client
        .submit_location(&payload("Acme"))
        .await
        .expect("should submit");

    assert_eq!(receipt.moderation_id.as_deref(), Some("42"));
    assert_eq!(receipt.os_id.as_deref(), Some("US2024123ABC"));
    assert_eq!(
        receipt.summary(),
        "Location submitted successfully! Moderation ID: 42 OS ID: US2024123ABC"
    );
}

#[tokio::test]
async fn submit_location_tolerates_empty_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/production-locations/"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let receipt = client.submit_location(&payload("Acme")).await.unwrap();
    assert_eq!(receipt.summary(), "Location submitted successfully!");
}

#[tokio::test]
async fn submit_location_surfaces_detail_on_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/production-locations/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "detail": "Invalid country code" })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.submit_location(&payload("Acme")).await.unwrap_err();

    assert!(err.is_remote());
    assert!(
        matches!(err, RegistryError::Remote { status: 400, ref detail } if detail == "Invalid country code"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn submit_location_falls_back_to_status_for_non_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/production-locations/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.submit_location(&payload("Acme")).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error 500");
}

// ---------------------------------------------------------------------------
// search_parent_companies
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_parent_companies_requests_ten_suggestions() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/parent-companies/"))
        .and(query_param("name", "Acme Hold"))
        .and(query_param("size", "10"))
        .and(header("Authorization", "Token test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "name": "Acme Holdings" },
            { "name": "Acme Holdings Europe" }
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let suggestions = client
        .search_parent_companies("Acme Hold")
        .await
        .expect("should parse suggestions");

    let names: Vec<_> = suggestions.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Acme Holdings", "Acme Holdings Europe"]);
}

#[tokio::test]
async fn search_parent_companies_skips_short_queries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(client.search_parent_companies("A").await.unwrap().is_empty());
    assert!(client.search_parent_companies("  ").await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// proxy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn proxy_forwards_method_headers_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/echo"))
        .and(header("X-Test", "yes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut headers = BTreeMap::new();
    headers.insert("X-Test".to_string(), "yes".to_string());
    let response = client
        .proxy(&ProxyRequest {
            url: format!("{}/echo", server.uri()),
            method: Some("put".to_string()),
            headers,
            body: Some("{}".to_string()),
        })
        .await;

    assert!(response.success);
    assert_eq!(response.data, Some(serde_json::json!({ "ok": true })));
}

#[tokio::test]
async fn proxy_reports_failure_instead_of_erroring() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(serde_json::json!({ "detail": "Forbidden" })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client
        .proxy(&ProxyRequest {
            url: format!("{}/anything", server.uri()),
            ..ProxyRequest::default()
        })
        .await;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("Forbidden"));
}

// ---------------------------------------------------------------------------
// submit_all
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_all_continues_past_a_rejected_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({ "name": "Beta" })))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({ "detail": "Duplicate" })),
        )
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "moderation_id": 1
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = vec![record("Alpha"), record("Beta"), record("Gamma")];
    let report = submit_all(&client, &records, &source(), Duration::ZERO).await;

    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.outcomes.len(), 3);
    assert!(!report.is_complete_success());
    assert!(matches!(
        report.outcomes[1].status,
        OutcomeStatus::Failed { ref reason } if reason == "Duplicate"
    ));
    assert!(report.outcomes[2].succeeded());

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn submit_all_never_sends_invalid_records() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = vec![LocationRecord::named("No Address", ""), record("Alpha")];
    let report = submit_all(&client, &records, &source(), Duration::ZERO).await;

    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed, 1);
    assert!(matches!(
        report.outcomes[0].status,
        OutcomeStatus::Failed { ref reason } if reason.contains("address")
    ));
}

#[tokio::test]
async fn submit_all_on_all_valid_records_is_a_complete_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "moderation_id": "m-1"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = vec![record("Alpha"), record("Beta")];
    let report = submit_all(&client, &records, &source(), Duration::from_millis(5)).await;

    assert!(report.is_complete_success());
    assert_eq!(report.summary(), "Submitted 2 of 2 locations");
}
