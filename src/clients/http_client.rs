//! HTTP client for Twilio API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests with automatic retry handling.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::config::{AccountSid, AuthToken, TwilioConfig};

/// Fixed retry wait time in seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the API.
///
/// The client handles:
/// - HTTP basic authentication with the account SID and auth token
/// - Default headers including User-Agent
/// - Form and JSON request bodies
/// - Automatic retry logic for 429 and 500 responses
///
/// One client is shared by every domain and version of a
/// [`Twilio`](crate::Twilio) root client.
///
/// # Example
///
/// ```rust
/// use twilio_api::{TwilioConfig, AccountSid, AuthToken};
/// use twilio_api::clients::HttpClient;
///
/// let config = TwilioConfig::builder()
///     .account_sid(AccountSid::new("AC123").unwrap())
///     .auth_token(AuthToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// assert_eq!(client.default_headers().get("Accept").map(String::as_str), Some("application/json"));
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    account_sid: AccountSid,
    auth_token: AuthToken,
    default_headers: HashMap<String, String>,
    tries: u32,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &TwilioConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}twilio-api-rust v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            account_sid: config.account_sid().clone(),
            auth_token: config.auth_token().clone(),
            default_headers,
            tries: config.tries(),
        }
    }

    /// Returns the account SID used for authentication.
    #[must_use]
    pub const fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the configured number of attempts per request.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Sends an HTTP request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - Max retries exceeded (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&request.url),
                HttpMethod::Post => self.client.post(&request.url),
                HttpMethod::Put => self.client.put(&request.url),
                HttpMethod::Delete => self.client.delete(&request.url),
            };

            req_builder = req_builder.basic_auth(
                self.account_sid.as_ref(),
                Some(self.auth_token.as_ref()),
            );

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if !request.query.is_empty() {
                req_builder = req_builder.query(&request.query);
            }

            req_builder = match &request.body {
                Some(RequestBody::Form(pairs)) => req_builder.form(pairs),
                Some(RequestBody::Json(value)) => req_builder.json(value),
                None => req_builder,
            };

            tracing::debug!(
                method = %request.http_method,
                url = %request.url,
                attempt = tries,
                "Sending request"
            );

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();

            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text).unwrap_or_else(|_| {
                    if code >= 500 {
                        serde_json::json!({ "raw_body": body_text })
                    } else {
                        serde_json::json!({})
                    }
                })
            };

            let response = HttpResponse::new(code, res_headers, body);

            if response.is_ok() {
                return Ok(response);
            }

            let error_message = Self::error_message(&response);

            let should_retry = code == 429 || code == 500;
            if !should_retry || (tries >= request.tries && request.tries == 1) {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: error_message,
                    error_code: response.error_code(),
                    more_info: response.more_info().map(String::from),
                    error_reference: response.request_id().map(String::from),
                }));
            }

            if tries >= request.tries {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message: error_message,
                    error_reference: response.request_id().map(String::from),
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::warn!(
                url = %request.url,
                status = code,
                attempt = tries,
                "Retrying request in {:?}",
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> std::time::Duration {
        // Retry-After is only honored for 429
        if status == 429 {
            if let Some(retry_after) = response.retry_request_after {
                return std::time::Duration::from_secs_f64(retry_after);
            }
        }
        std::time::Duration::from_secs(RETRY_WAIT_TIME)
    }

    fn error_message(response: &HttpResponse) -> String {
        response.error_message().map_or_else(
            || {
                response.body.get("raw_body").and_then(serde_json::Value::as_str).map_or_else(
                    || format!("Request failed with status {}", response.code),
                    String::from,
                )
            },
            String::from,
        )
    }
}
