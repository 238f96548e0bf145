//! HTTP transport and version plumbing.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client (basic auth, retries)
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response from the API
//! - [`HttpMethod`]: supported HTTP methods
//! - [`RequestBody`] / [`DataType`]: form or JSON bodies
//! - [`rest::Domain`] / [`rest::Version`]: URL resolution and the
//!   `page`/`fetch`/`create`/`update`/`remove` primitives used by resources
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: retried using the `Retry-After` header value, or 1 second if absent
//! - **500 (Server Error)**: retried with a fixed 1-second delay
//! - **Other errors**: returned immediately
//!
//! The default number of tries is 1, meaning no automatic retries. Configure
//! it with [`TwilioConfigBuilder::tries`](crate::TwilioConfigBuilder::tries).

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody};
pub use http_response::{HttpResponse, REQUEST_ID_HEADER};

pub use rest::{Domain, RestError, Version};
