//! Integration tests for resource lists, contexts and instances.
//!
//! These tests verify create/fetch/update/remove against a mock server,
//! client-side validation, and how path parameters flow from lists to
//! contexts and sub-resources.

use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use twilio_api::rest::resources::v2010::{
    CallCreateParams, FeedbackCreateParams, MessageCreateParams, MessageUpdateParams,
    TokenCreateParams,
};
use twilio_api::rest::{ReadOptions, ResourceError};
use twilio_api::{AccountSid, AuthToken, HostUrl, HttpError, Twilio, TwilioConfig};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT_SID: &str = "AC0123456789abcdef0123456789abcdef";
const ACCOUNT_PATH: &str = "/2010-04-01/Accounts/AC0123456789abcdef0123456789abcdef";

/// Creates a client routed to the mock server.
fn create_client(server: &MockServer) -> Twilio {
    let config = TwilioConfig::builder()
        .account_sid(AccountSid::new(ACCOUNT_SID).unwrap())
        .auth_token(AuthToken::new("test-token").unwrap())
        .host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    Twilio::new(config)
}

fn message_json(sid: &str, body: &str) -> serde_json::Value {
    json!({
        "sid": sid,
        "account_sid": ACCOUNT_SID,
        "body": body,
        "status": "queued",
        "direction": "outbound-api",
        "date_created": "Thu, 30 Jul 2015 20:12:31 +0000",
        "date_sent": null,
        "price": null,
        "uri": format!("/2010-04-01/Accounts/{ACCOUNT_SID}/Messages/{sid}.json")
    })
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_sends_form_and_returns_instance() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{ACCOUNT_PATH}/Messages.json")))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "To=%2B15558675309&From=%2B15017250604&Body=Ahoy&MediaUrl=https%3A%2F%2Fa.example%2F1.png&MediaUrl=https%3A%2F%2Fa.example%2F2.png",
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(message_json("SM1", "Ahoy")))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let message = client
        .messages()
        .create(&MessageCreateParams {
            to: Some("+15558675309".to_string()),
            from: Some("+15017250604".to_string()),
            body: Some("Ahoy".to_string()),
            media_url: vec![
                "https://a.example/1.png".to_string(),
                "https://a.example/2.png".to_string(),
            ],
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(message.sid.as_deref(), Some("SM1"));
    assert_eq!(message.body.as_deref(), Some("Ahoy"));
    assert!(message.date_sent.is_none());
    assert_eq!(message.solution().sid(), Some("SM1"));
}

#[tokio::test]
async fn test_create_validates_before_any_request() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    let result = client
        .messages()
        .create(&MessageCreateParams {
            to: Some("+15558675309".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(ResourceError::MissingRequiredField {
            resource: "Message",
            field: "From"
        })
    ));

    let result = client
        .calls()
        .create(&CallCreateParams {
            to: Some("+15558675309".to_string()),
            from: Some("+15017250604".to_string()),
            ..Default::default()
        })
        .await;
    assert!(matches!(
        result,
        Err(ResourceError::MissingRequiredField { field: "Url", .. })
    ));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_token_create_has_no_context() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{ACCOUNT_PATH}/Tokens.json")))
        .and(body_string("Ttl=3600"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "account_sid": ACCOUNT_SID,
            "ice_servers": [{"url": "stun:global.stun.twilio.com:3478?transport=udp"}],
            "password": "secret",
            "ttl": "3600",
            "username": "user"
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let token = client
        .tokens()
        .create(&TokenCreateParams { ttl: Some(3600) })
        .await
        .unwrap();

    assert_eq!(token.ttl, Some(3600));
    assert!(matches!(
        token.context(),
        Err(ResourceError::PathResolutionFailed { .. })
    ));
}

// ============================================================================
// Fetch, update, remove
// ============================================================================

#[tokio::test]
async fn test_explicit_sid_wins_over_payload_sid() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_PATH}/Messages/SMexplicit.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(message_json("SMpayload", "hi")))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{ACCOUNT_PATH}/Messages/SMexplicit.json")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let message = client.messages().get("SMexplicit").unwrap().fetch().await.unwrap();

    assert_eq!(message.sid.as_deref(), Some("SMpayload"));
    assert_eq!(message.solution().sid(), Some("SMexplicit"));
    assert!(message.remove().await.unwrap());
}

#[tokio::test]
async fn test_empty_sid_cannot_address_a_resource() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    let result = client.messages().get("");
    assert!(matches!(
        result,
        Err(ResourceError::PathResolutionFailed {
            resource: "Message",
            ..
        })
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_returns_new_instance() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{ACCOUNT_PATH}/Messages/SM1.json")))
        .and(body_string("Body="))
        .respond_with(ResponseTemplate::new(200).set_body_json(message_json("SM1", "")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_PATH}/Messages.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messages": [message_json("SM1", "secret")],
            "next_page_uri": null
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let original = client.messages().list(ReadOptions::default()).await.unwrap().remove(0);
    let redacted = original
        .update(&MessageUpdateParams {
            body: Some(String::new()),
        })
        .await
        .unwrap();

    assert_eq!(original.body.as_deref(), Some("secret"));
    assert_eq!(redacted.body.as_deref(), Some(""));
}

#[tokio::test]
async fn test_remove_reports_no_content_only() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{ACCOUNT_PATH}/Calls/CA1.json")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{ACCOUNT_PATH}/Calls/CA2.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let calls = client.calls();
    assert!(assert_ok!(calls.get("CA1").unwrap().remove().await));
    assert!(!assert_ok!(calls.get("CA2").unwrap().remove().await));
}

#[tokio::test]
async fn test_not_found_decodes_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_PATH}/Calls/CAmissing.json")))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("Twilio-Request-Id", "RQ123")
                .set_body_json(json!({
                    "code": 20404,
                    "message": "The requested resource was not found",
                    "more_info": "https://www.twilio.com/docs/errors/20404",
                    "status": 404
                })),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = assert_err!(client.calls().get("CAmissing").unwrap().fetch().await);

    assert_eq!(error.status(), Some(404));
    assert_eq!(error.request_id(), Some("RQ123"));
    match error {
        ResourceError::Http(HttpError::Response(e)) => {
            assert_eq!(e.error_code, Some(20404));
            assert_eq!(e.message, "The requested resource was not found");
            assert_eq!(
                e.more_info.as_deref(),
                Some("https://www.twilio.com/docs/errors/20404")
            );
        }
        other => panic!("Expected an HTTP response error, got {other:?}"),
    }
}

// ============================================================================
// Sub-resources
// ============================================================================

#[tokio::test]
async fn test_call_feedback_create() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{ACCOUNT_PATH}/Calls/CA1/Feedback.json")))
        .and(body_string("QualityScore=3&Issue=dropped-call"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "account_sid": ACCOUNT_SID,
            "issues": ["dropped-call"],
            "quality_score": 3,
            "sid": "FB1",
            "date_created": "Thu, 20 Aug 2015 21:45:46 +0000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let feedback = client
        .calls()
        .get("CA1")
        .unwrap()
        .feedback()
        .unwrap()
        .create(&FeedbackCreateParams {
            quality_score: Some(3),
            issue: vec!["dropped-call".to_string()],
        })
        .await
        .unwrap();

    assert_eq!(feedback.quality_score, Some(3));
    assert_eq!(feedback.issues.as_deref(), Some(&["dropped-call".to_string()][..]));
}

#[tokio::test]
async fn test_message_media_is_nested_under_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_PATH}/Messages/SM1/Media.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "media_list": [{
                "sid": "ME1",
                "account_sid": ACCOUNT_SID,
                "parent_sid": "SM1",
                "content_type": "image/png"
            }],
            "next_page_uri": null,
            "page": 0,
            "page_size": 50
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let media = client
        .messages()
        .get("SM1")
        .unwrap()
        .media()
        .list(ReadOptions::default())
        .await
        .unwrap();

    assert_eq!(media.len(), 1);
    assert_eq!(media[0].content_type.as_deref(), Some("image/png"));
    assert_eq!(media[0].solution().get("message_sid"), Some("SM1"));
    assert_eq!(media[0].solution().sid(), Some("ME1"));
}
