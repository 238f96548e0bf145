//! Error types for client configuration.
//!
//! This module contains error types used when building a
//! [`TwilioConfig`](crate::TwilioConfig) and its validated newtypes.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::{AccountSid, ConfigError};
//!
//! let result = AccountSid::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccountSid)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant carries enough context to produce an actionable message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Account SID cannot be empty.
    #[error("Account SID cannot be empty. Please provide a valid Twilio account SID.")]
    EmptyAccountSid,

    /// Account SID does not look like an account identifier.
    #[error("Invalid account SID '{sid}'. Account SIDs start with 'AC'.")]
    InvalidAccountSid {
        /// The invalid SID that was provided.
        sid: String,
    },

    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Please provide a valid Twilio auth token.")]
    EmptyAuthToken,

    /// A required field was not set on the builder.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The number of request attempts must be at least one.
    #[error("Invalid tries value {tries}. At least one attempt is required.")]
    InvalidTries {
        /// The rejected value.
        tries: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_account_sid_error_message() {
        let message = ConfigError::EmptyAccountSid.to_string();
        assert!(message.contains("Account SID cannot be empty"));
    }

    #[test]
    fn test_invalid_account_sid_includes_value() {
        let error = ConfigError::InvalidAccountSid {
            sid: "XX123".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("XX123"));
        assert!(message.contains("AC"));
    }

    #[test]
    fn test_missing_required_field_names_field() {
        let error = ConfigError::MissingRequiredField {
            field: "auth_token",
        };
        assert!(error.to_string().contains("'auth_token'"));
    }

    #[test]
    fn test_invalid_host_url_includes_url() {
        let error = ConfigError::InvalidHostUrl {
            url: "not a url".to_string(),
        };
        assert!(error.to_string().contains("not a url"));
    }

    #[test]
    fn test_config_error_is_std_error() {
        let error: &dyn std::error::Error = &ConfigError::EmptyAuthToken;
        let _ = error;
    }
}
