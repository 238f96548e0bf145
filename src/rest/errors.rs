//! Resource-specific error types for REST API operations.
//!
//! This module contains error types for resource operations, extending
//! the base [`RestError`](crate::clients::RestError) with resource-specific
//! semantics like `MissingRequiredField` and `Cancelled`.
//!
//! # Error Kinds
//!
//! - [`ResourceError::MissingRequiredField`]: client-side validation failed
//!   before any request was sent
//! - [`ResourceError::InvalidArgument`]: the caller passed an unusable
//!   argument (for example `page_size = 0`)
//! - [`ResourceError::Http`]: the transport failed, or a response could not be
//!   decoded
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::ResourceError;
//!
//! match twilio.messages().create(&params).await {
//!     Ok(message) => println!("Queued: {:?}", message.sid),
//!     Err(ResourceError::MissingRequiredField { field, .. }) => {
//!         println!("Fill in {field} first");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::{HttpError, HttpResponseError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use twilio_api::rest::ResourceError;
///
/// let error = ResourceError::MissingRequiredField {
///     resource: "Message",
///     field: "To",
/// };
/// assert!(error.to_string().contains("Required parameter"));
/// assert!(error.to_string().contains("To"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A required parameter was not supplied.
    ///
    /// Raised synchronously by `create` before any request is issued.
    #[error("Required parameter \"{field}\" missing for {resource}")]
    MissingRequiredField {
        /// The type name of the resource (e.g., "Message").
        resource: &'static str,
        /// The wire name of the missing parameter.
        field: &'static str,
    },

    /// An argument supplied by the caller cannot be used.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the problem.
        message: String,
    },

    /// No valid path matches the provided solution and operation.
    ///
    /// This error is returned when attempting an operation the resource does
    /// not support, or without the path parameters it requires.
    #[error("Cannot resolve path for {resource}::{operation} with provided solution")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "fetch", "read", "remove").
        operation: &'static str,
    },

    /// Iteration was stopped through its cancellation token.
    #[error("Iteration was cancelled")]
    Cancelled,

    /// An HTTP-level error occurred.
    ///
    /// This variant also carries response decode failures so callers see a
    /// single failure kind for "page fetch failed" and "page decode failed".
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    ///
    /// This variant wraps [`RestError`] for URI resolution errors. Transport
    /// failures raised by the REST layer are reported as [`Self::Http`].
    #[error(transparent)]
    Rest(RestError),
}

impl From<RestError> for ResourceError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Http(e) => Self::Http(e),
            other => Self::Rest(other),
        }
    }
}

impl ResourceError {
    /// Builds the error reported when a response payload cannot be decoded.
    #[must_use]
    pub fn decode(code: u16, resource: &'static str, error: &serde_json::Error) -> Self {
        Self::Http(HttpError::Response(HttpResponseError {
            code,
            message: format!("Failed to deserialize {resource}: {error}"),
            error_code: None,
            more_info: None,
            error_reference: None,
        }))
    }

    /// Builds the error reported when request parameters cannot be serialized.
    #[must_use]
    pub fn serialize(resource: &'static str, error: &serde_json::Error) -> Self {
        Self::InvalidArgument {
            message: format!("Failed to serialize {resource} params: {error}"),
        }
    }

    /// Returns the request ID if available.
    ///
    /// Useful for debugging and error reporting.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Http(HttpError::Response(e))
            | Self::Rest(RestError::Http(HttpError::Response(e))) => e.error_reference.as_deref(),
            Self::Http(HttpError::MaxRetries(e))
            | Self::Rest(RestError::Http(HttpError::MaxRetries(e))) => e.error_reference.as_deref(),
            _ => None,
        }
    }

    /// Returns the HTTP status code if the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) | Self::Rest(RestError::Http(e)) => e.status(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
