//! Behavior-driven tests for the HTTP transport
//!
//! These tests drive the production reqwest client against a local mock
//! server to verify headers, URL shape, status pass-through and failure
//! tiers end to end.

use std::net::TcpListener;

use fsregister_core::{ClientConfig, Credentials, ErrorTier, RegisterClient, ResourceType};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USERNAME: &str = "analyst@example.test";
const API_KEY: &str = "test-key";

fn client_for(base_url: &str) -> RegisterClient {
    let credentials = Credentials::new(USERNAME, API_KEY).expect("valid credentials");
    let config = ClientConfig::default()
        .with_base_url(base_url)
        .expect("valid base url")
        .with_timeout_ms(2_000);
    RegisterClient::with_config(credentials, config).expect("valid transport")
}

// =============================================================================
// Transport: Request Shape
// =============================================================================

#[tokio::test]
async fn when_fetching_firm_names_system_sends_auth_headers_to_versioned_path() {
    // Given: A register that only answers authenticated JSON requests
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/V0.1/Firm/113849/Names"))
        .and(header("x-auth-email", USERNAME))
        .and(header("x-auth-key", API_KEY))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"Status":"FSR-API-02-02-00","Message":"Ok. Firm Names Found","Data":[{"Current Names":[{"Name":"Hiscox Insurance Company Limited"}]}]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    // When: The firm names are fetched
    let response = client.get_firm_names("113849").await.expect("response");

    // Then: The envelope is decoded from the matched request
    assert_eq!(response.http_status(), 200);
    assert_eq!(response.status(), Some("FSR-API-02-02-00"));
    assert!(response.has_data());
}

#[tokio::test]
async fn when_searching_system_encodes_query_and_type_filter() {
    // Given: A register answering one firm search
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/V0.1/Search"))
        .and(query_param("q", "hiscox insurance company"))
        .and(query_param("type", "firm"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"Status":"FSR-API-04-01-00","Message":"Ok. Search successful","Data":[{"Reference Number":"113849"}]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    // When: The firm name is resolved
    let frn = client
        .resolve_reference("hiscox insurance company", ResourceType::Firm)
        .await
        .expect("unique match");

    // Then: The decoded reference number matches
    assert_eq!(frn.as_str(), "113849");
}

// =============================================================================
// Transport: Status Pass-Through
// =============================================================================

#[tokio::test]
async fn when_identifier_is_unknown_system_returns_response_without_data() {
    // Given: A register that reports an unknown firm in the envelope
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/V0.1/Firm/0000000"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"Status":"FSR-API-02-01-11","Message":"Firm not found","Data":null}"#,
        ))
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    // When: Details are requested for the unknown identifier
    let response = client.get_firm("0000000").await.expect("response");

    // Then: The call succeeds and the payload is absent
    assert!(response.is_success());
    assert!(!response.has_data());
    assert_eq!(response.message(), Some("Firm not found"));
}

#[tokio::test]
async fn when_register_rejects_credentials_system_returns_the_status() {
    // Given: A register that refuses the key
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string(""))
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    // When: Any resource is fetched
    let response = client.get_individual("MXC29012").await.expect("response");

    // Then: The status is exposed rather than raised
    assert_eq!(response.http_status(), 401);
    assert!(!response.is_success());
    assert!(response.status().is_none());
}

// =============================================================================
// Transport: Failure Tiers
// =============================================================================

#[tokio::test]
async fn when_body_is_not_json_system_reports_response_failure() {
    // Given: A gateway that answers with HTML
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;
    let client = client_for(&server.uri());

    // When: A fund is fetched
    let err = client.get_fund("185045").await.expect_err("unparseable");

    // Then: The failure belongs to the response tier
    assert_eq!(err.tier(), ErrorTier::Response);
    assert_eq!(err.code(), "response.unparseable_body");
}

#[tokio::test]
async fn when_register_is_unreachable_system_reports_request_failure() {
    // Given: A local port with nothing listening on it
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let address = listener.local_addr().expect("local address");
    drop(listener);
    let client = client_for(&format!("http://{address}"));

    // When: A name is resolved
    let err = client
        .search_frn("Barclays Bank Plc")
        .await
        .expect_err("connection refused");

    // Then: The failure is a request failure, not a no-match
    assert_eq!(err.tier(), ErrorTier::Request);
    assert_eq!(err.code(), "request.failed");
}
