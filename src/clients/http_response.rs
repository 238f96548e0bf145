//! HTTP response types.

use std::collections::HashMap;

/// Header carrying the service-assigned request identifier.
pub const REQUEST_ID_HEADER: &str = "twilio-request-id";

/// An HTTP response from the API.
///
/// Header names are lower-cased; a header may carry several values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body (`{}` when the body was empty).
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `Retry-After` header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `Twilio-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get(REQUEST_ID_HEADER)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the service error code from an error body, if present.
    #[must_use]
    pub fn error_code(&self) -> Option<u32> {
        self.body
            .get("code")
            .and_then(serde_json::Value::as_u64)
            .and_then(|code| u32::try_from(code).ok())
    }

    /// Returns the human readable error message from an error body, if present.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.body
            .get("message")
            .or_else(|| self.body.get("detail"))
            .and_then(serde_json::Value::as_str)
    }

    /// Returns the documentation link from an error body, if present.
    #[must_use]
    pub fn more_info(&self) -> Option<&str> {
        self.body.get("more_info").and_then(serde_json::Value::as_str)
    }
}
