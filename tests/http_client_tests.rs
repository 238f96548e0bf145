//! Integration tests for the HTTP client functionality.
//!
//! These tests verify authentication, default headers, retry handling and
//! error decoding against a mock server.

use serde_json::json;
use twilio_api::clients::{HttpClient, HttpMethod, HttpRequest, RequestBody};
use twilio_api::{AccountSid, AuthToken, HttpError, TwilioConfig};
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client making `tries` attempts per request.
fn create_client(tries: u32) -> HttpClient {
    let config = TwilioConfig::builder()
        .account_sid(AccountSid::new("AC123").unwrap())
        .auth_token(AuthToken::new("secret").unwrap())
        .user_agent_prefix("my-app/1.0")
        .tries(tries)
        .build()
        .unwrap();
    HttpClient::new(&config)
}

// ============================================================================
// Request shape
// ============================================================================

#[tokio::test]
async fn test_requests_carry_basic_auth_and_defaults() {
    let server = MockServer::start().await;

    // base64("AC123:secret")
    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("authorization", "Basic QUMxMjM6c2VjcmV0"))
        .and(header("accept", "application/json"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(1);
    let request = HttpRequest::builder(HttpMethod::Get, format!("{}/ping", server.uri()))
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body["ok"], json!(true));

    let requests = server.received_requests().await.unwrap();
    let user_agent = requests[0].headers.get("user-agent").unwrap().to_str().unwrap();
    assert!(user_agent.starts_with("my-app/1.0 "));
}

#[tokio::test]
async fn test_empty_body_is_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = create_client(1);
    let request = HttpRequest::builder(HttpMethod::Post, format!("{}/empty", server.uri()))
        .body(RequestBody::Form(vec![("A".to_string(), "1".to_string())]))
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();

    assert_eq!(response.code, 204);
    assert_eq!(response.body, json!({}));
}

// ============================================================================
// Retries
// ============================================================================

#[tokio::test]
async fn test_rate_limited_request_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/limited"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "0")
                .set_body_json(json!({"code": 20429, "message": "Too Many Requests"})),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/limited"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let client = create_client(2);
    let request = HttpRequest::builder(HttpMethod::Get, format!("{}/limited", server.uri()))
        .tries(client.tries())
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_retries_exhausted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/limited"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "0")
                .set_body_json(json!({"code": 20429, "message": "Too Many Requests"})),
        )
        .expect(3)
        .mount(&server)
        .await;

    let client = create_client(3);
    let request = HttpRequest::builder(HttpMethod::Get, format!("{}/limited", server.uri()))
        .tries(client.tries())
        .build()
        .unwrap();

    match client.request(request).await {
        Err(HttpError::MaxRetries(e)) => {
            assert_eq!(e.code, 429);
            assert_eq!(e.tries, 3);
            assert_eq!(e.message, "Too Many Requests");
        }
        other => panic!("Expected MaxRetries, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bad"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 21211,
            "message": "The 'To' number is not a valid phone number.",
            "more_info": "https://www.twilio.com/docs/errors/21211",
            "status": 400
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(3);
    let request = HttpRequest::builder(HttpMethod::Get, format!("{}/bad", server.uri()))
        .tries(client.tries())
        .build()
        .unwrap();

    match client.request(request).await {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.code, 400);
            assert_eq!(e.error_code, Some(21211));
            assert_eq!(e.message, "The 'To' number is not a valid phone number.");
        }
        other => panic!("Expected a response error, got {other:?}"),
    }
}
