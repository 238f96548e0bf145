//! Error types for domain/version level operations.
//!
//! - [`RestError::InvalidPath`]: a resource URI failed validation
//! - [`RestError::InvalidUrl`]: a continuation URL could not be parsed
//! - [`RestError::Http`]: wraps underlying transport errors

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for [`Version`](super::Version) operations.
///
/// # Example
///
/// ```rust
/// use twilio_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The resource URI is invalid (for example empty).
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// A continuation URL returned by the service could not be parsed.
    #[error("Invalid page URL: {url}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}
