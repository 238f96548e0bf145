//! HTTP request types.
//!
//! This module provides the [`HttpRequest`] type and its builder. Requests
//! always carry an absolute URL: the [`Version`](crate::clients::Version)
//! resolves resource URIs against its domain before anything reaches the
//! transport.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating and updating resources.
    Post,
    /// HTTP PUT method.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// Form content type (`application/x-www-form-urlencoded`).
    Form,
    /// JSON content type (`application/json`).
    Json,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Form => "application/x-www-form-urlencoded",
            Self::Json => "application/json",
        }
    }
}

/// A request body.
///
/// Form bodies are ordered key/value pairs; a key may repeat (for example
/// several `MediaUrl` entries).
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// Form-encoded pairs.
    Form(Vec<(String, String)>),
    /// A JSON document.
    Json(serde_json::Value),
}

impl RequestBody {
    /// Returns the content type of this body.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Form(_) => DataType::Form,
            Self::Json(_) => DataType::Json,
        }
    }
}

/// An HTTP request to be sent to the API.
///
/// # Example
///
/// ```rust
/// use twilio_api::clients::{HttpRequest, HttpMethod, RequestBody};
///
/// let request = HttpRequest::builder(
///     HttpMethod::Post,
///     "https://api.twilio.com/2010-04-01/Accounts/AC123/Messages.json",
/// )
/// .body(RequestBody::Form(vec![
///     ("To".to_string(), "+15558675309".to_string()),
///     ("From".to_string(), "+15017250604".to_string()),
/// ]))
/// .build()
/// .unwrap();
///
/// assert!(request.body.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL of this request.
    pub url: String,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Ordered query parameters to append to the URL.
    pub query: Vec<(String, String)>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Number of times to attempt the request (default: 1).
    pub tries: u32,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `url` is not an absolute `http`/`https` URL
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if !(self.url.starts_with("https://") || self.url.starts_with("http://")) {
            return Err(InvalidHttpRequestError::InvalidUrl {
                url: self.url.clone(),
            });
        }

        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    body: Option<RequestBody>,
    query: Vec<(String, String)>,
    extra_headers: Option<HashMap<String, String>>,
    tries: u32,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            body: None,
            query: Vec::new(),
            extra_headers: None,
            tries: 1,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Replaces all query parameters.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the number of times to attempt the request.
    ///
    /// Default is 1 (no retries).
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
            tries: self.tries,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://api.twilio.com/2010-04-01/Accounts/AC123/Messages.json";

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_body_content_types() {
        assert_eq!(
            RequestBody::Form(vec![]).data_type().as_content_type(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(
            RequestBody::Json(json!({})).data_type().as_content_type(),
            "application/json"
        );
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, URL).build().unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.url, URL);
        assert!(request.body.is_none());
        assert!(request.query.is_empty());
        assert_eq!(request.tries, 1);
    }

    #[test]
    fn test_post_requires_body() {
        let result = HttpRequest::builder(HttpMethod::Post, URL).build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));
    }

    #[test]
    fn test_post_accepts_empty_form() {
        let request = HttpRequest::builder(HttpMethod::Post, URL)
            .body(RequestBody::Form(Vec::new()))
            .build();
        assert!(request.is_ok());
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Get, "/Accounts/AC123/Messages.json").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_query_params_keep_order_and_repeats() {
        let request = HttpRequest::builder(HttpMethod::Get, URL)
            .query_param("To", "+1555")
            .query_param("MediaUrl", "a")
            .query_param("MediaUrl", "b")
            .build()
            .unwrap();

        assert_eq!(
            request.query,
            vec![
                ("To".to_string(), "+1555".to_string()),
                ("MediaUrl".to_string(), "a".to_string()),
                ("MediaUrl".to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_builder_with_extra_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, URL)
            .header("X-Custom-Header", "custom-value")
            .tries(3)
            .build()
            .unwrap();

        let headers = request.extra_headers.unwrap();
        assert_eq!(
            headers.get("X-Custom-Header"),
            Some(&"custom-value".to_string())
        );
        assert_eq!(request.tries, 3);
    }
}
