//! HTTP-specific error types.
//!
//! These are the transport failures of the client. They are produced by
//! [`HttpClient`](crate::clients::HttpClient) and propagate unchanged through
//! every resource operation, including each page of a paginated read.
//!
//! - [`HttpResponseError`]: non-2xx HTTP responses from the API
//! - [`MaxHttpRetriesExceededError`]: retry attempts exhausted
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error type encompassing all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {} ({:?}): {}", e.code, e.error_code, e.message);
//!     }
//!     Err(HttpError::MaxRetries(e)) => println!("Gave up after {} tries", e.tries),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response,
/// or when a successful response body cannot be decoded.
///
/// # Example
///
/// ```rust
/// use twilio_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "The requested resource was not found".to_string(),
///     error_code: Some(20404),
///     more_info: Some("https://www.twilio.com/docs/errors/20404".to_string()),
///     error_reference: None,
/// };
///
/// assert!(error.to_string().contains("20404"));
/// ```
#[derive(Debug, Error)]
#[error("[HTTP {code}] {message}{}", .error_code.map(|c| format!(" (error {c})")).unwrap_or_default())]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human readable message, taken from the error body when present.
    pub message: String,
    /// Service-specific error code from the response body.
    pub error_code: Option<u32>,
    /// Documentation link for the error code.
    pub more_info: Option<String>,
    /// Request identifier (from the `Twilio-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error returned when maximum retry attempts have been exhausted.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Message from the last response.
    pub message: String,
    /// Request identifier of the last response.
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use twilio_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request URL is not an absolute http(s) URL.
    #[error("Invalid request URL '{url}'.")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
    },

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code or undecodable body).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code associated with the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_display_includes_status_and_code() {
        let error = HttpResponseError {
            code: 400,
            message: "A 'To' phone number is required.".to_string(),
            error_code: Some(21604),
            more_info: None,
            error_reference: None,
        };
        assert_eq!(
            error.to_string(),
            "[HTTP 400] A 'To' phone number is required. (error 21604)"
        );
    }

    #[test]
    fn test_http_response_error_display_without_error_code() {
        let error = HttpResponseError {
            code: 502,
            message: "Bad Gateway".to_string(),
            error_code: None,
            more_info: None,
            error_reference: Some("RQ123".to_string()),
        };
        assert_eq!(error.to_string(), "[HTTP 502] Bad Gateway");
        assert_eq!(error.error_reference.as_deref(), Some("RQ123"));
    }

    #[test]
    fn test_max_retries_error_includes_retry_count() {
        let error = MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: "Too Many Requests".to_string(),
            error_reference: None,
        };
        let message = error.to_string();
        assert!(message.contains('3'));
        assert!(message.contains("Exceeded maximum retry count"));
    }

    #[test]
    fn test_invalid_request_error_messages() {
        let error = InvalidHttpRequestError::InvalidUrl {
            url: "/relative".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid request URL '/relative'.");
    }

    #[test]
    fn test_http_error_status() {
        let error = HttpError::Response(HttpResponseError {
            code: 404,
            message: "missing".to_string(),
            error_code: None,
            more_info: None,
            error_reference: None,
        });
        assert_eq!(error.status(), Some(404));

        let error = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        });
        assert_eq!(error.status(), None);
    }
}
