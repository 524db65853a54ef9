//! Integration tests for the HTTP client core.
//!
//! These tests drive [`SellyClient`] against a local mock server and verify
//! URL construction, header injection, response decoding, and the two
//! status-handling modes.

use selly_api::{
    AccountEmail, ApiError, ApiKey, ApiRoot, HttpMethod, Payload, SellyClient, SellyConfig,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// base64("merchant@example.com:test-api-key")
const EXPECTED_AUTHORIZATION: &str = "Basic bWVyY2hhbnRAZXhhbXBsZS5jb206dGVzdC1hcGkta2V5";

/// Creates a client whose API root points at the mock server, mirroring the
/// production layout of `https://selly.gg/api/v2`.
fn create_mock_client(server: &MockServer) -> SellyClient {
    let config = SellyConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .email(AccountEmail::new("merchant@example.com").unwrap())
        .api_root(ApiRoot::new(format!("{}/api/v2", server.uri())).unwrap())
        .build()
        .unwrap();

    SellyClient::with_config(&config)
}

fn create_strict_mock_client(server: &MockServer) -> SellyClient {
    let config = SellyConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .email(AccountEmail::new("merchant@example.com").unwrap())
        .api_root(ApiRoot::new(format!("{}/api/v2", server.uri())).unwrap())
        .strict_status(true)
        .build()
        .unwrap();

    SellyClient::with_config(&config)
}

// ============================================================================
// URL Construction Tests
// ============================================================================

#[tokio::test]
async fn test_request_targets_api_root_plus_path_verbatim() {
    let server = MockServer::start().await;
    let client = create_mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/coupons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"coupons": []})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.get("/coupons").await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.json(), Some(&json!({"coupons": []})));
}

#[tokio::test]
async fn test_duplicate_slashes_are_not_normalized() {
    let server = MockServer::start().await;
    let client = create_mock_client(&server);

    // The client concatenates root and path verbatim, so a duplicated
    // slash must reach the wire unchanged.
    Mock::given(method("GET"))
        .and(path("/api/v2//coupons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"coupons": []})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.get("//coupons").await.unwrap();
    assert!(response.is_ok());
}

// ============================================================================
// Header Tests
// ============================================================================

#[tokio::test]
async fn test_authorization_header_sent_on_every_method() {
    let server = MockServer::start().await;
    let client = create_mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/orders"))
        .and(header("Authorization", EXPECTED_AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v2/coupons"))
        .and(header("Authorization", EXPECTED_AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": 200})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/coupons/c1"))
        .and(header("Authorization", EXPECTED_AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": 200})))
        .expect(1)
        .mount(&server)
        .await;

    client.get("/orders").await.unwrap();
    client.post("/coupons", json!({"coupon": {}})).await.unwrap();
    client.delete("/coupons/c1").await.unwrap();
}

#[tokio::test]
async fn test_json_content_type_and_body_sent_on_post() {
    let server = MockServer::start().await;
    let client = create_mock_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/v2/coupons"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"coupon": {"code": "TEST"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": 200})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .post("/coupons", json!({"coupon": {"code": "TEST"}}))
        .await
        .unwrap();

    assert!(response.is_ok());
}

// ============================================================================
// Verb Wrapper Tests
// ============================================================================

#[tokio::test]
async fn test_verb_wrappers_map_to_matching_http_methods() {
    let server = MockServer::start().await;
    let client = create_mock_client(&server);

    for verb in ["GET", "POST", "PUT", "DELETE"] {
        Mock::given(method(verb))
            .and(path("/api/v2/probe"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"verb": verb})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let get = client.get("/probe").await.unwrap();
    let post = client.post("/probe", json!({})).await.unwrap();
    let put = client.put("/probe", json!({})).await.unwrap();
    let delete = client.delete("/probe").await.unwrap();

    assert_eq!(get.json(), Some(&json!({"verb": "GET"})));
    assert_eq!(post.json(), Some(&json!({"verb": "POST"})));
    assert_eq!(put.json(), Some(&json!({"verb": "PUT"})));
    assert_eq!(delete.json(), Some(&json!({"verb": "DELETE"})));
}

#[tokio::test]
async fn test_generic_request_accepts_explicit_method() {
    let server = MockServer::start().await;
    let client = create_mock_client(&server);

    Mock::given(method("PUT"))
        .and(path("/api/v2/products/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": 200})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .request(HttpMethod::Put, "/products/p1", Some(json!({"product": {}})))
        .await
        .unwrap();

    assert!(response.is_ok());
}

// ============================================================================
// Response Decoding Tests
// ============================================================================

#[tokio::test]
async fn test_error_status_returns_decoded_body_in_compat_mode() {
    let server = MockServer::start().await;
    let client = create_mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/coupons/x"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.get_coupon("x").await.unwrap();

    assert_eq!(response.status, 404);
    assert!(!response.is_ok());
    assert_eq!(response.json(), Some(&json!({"error": "not found"})));
}

#[tokio::test]
async fn test_non_json_body_returns_raw_text() {
    let server = MockServer::start().await;
    let client = create_mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/orders"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.list_orders().await.unwrap();

    assert_eq!(response.status, 503);
    assert_eq!(response.payload, Payload::Text("Service Unavailable".to_string()));
}

#[tokio::test]
async fn test_empty_body_is_kept_as_empty_text() {
    let server = MockServer::start().await;
    let client = create_mock_client(&server);

    Mock::given(method("DELETE"))
        .and(path("/api/v2/coupons/c1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.delete_coupon("c1").await.unwrap();

    assert_eq!(response.status, 204);
    assert_eq!(response.payload, Payload::Text(String::new()));
}

// ============================================================================
// Transport Failure Tests
// ============================================================================

#[tokio::test]
async fn test_transport_failure_surfaces_distinct_error_with_reason() {
    // Nothing listens on port 1, so the connection is refused before any
    // HTTP exchange happens.
    let config = SellyConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .email(AccountEmail::new("merchant@example.com").unwrap())
        .api_root(ApiRoot::new("http://127.0.0.1:1/api/v2").unwrap())
        .build()
        .unwrap();
    let client = SellyClient::with_config(&config);

    let error = client.list_coupons().await.unwrap_err();

    match &error {
        ApiError::Transport(e) => assert!(e.is_connect() || e.is_request()),
        other => panic!("expected transport error, got: {other:?}"),
    }
    assert!(error.to_string().starts_with("Network error:"));
}

// ============================================================================
// Strict Mode Tests
// ============================================================================

#[tokio::test]
async fn test_strict_mode_surfaces_non_2xx_as_status_error() {
    let server = MockServer::start().await;
    let client = create_strict_mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/coupons/x"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let error = client.get_coupon("x").await.unwrap_err();

    match error {
        ApiError::Status { status, payload } => {
            assert_eq!(status, 404);
            assert_eq!(payload, Payload::Json(json!({"error": "not found"})));
        }
        other => panic!("expected status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_strict_mode_passes_2xx_through() {
    let server = MockServer::start().await;
    let client = create_strict_mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/v2/coupons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"coupons": []})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.list_coupons().await.unwrap();
    assert!(response.is_ok());
}
