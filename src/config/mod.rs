//! Configuration types for the Twilio API client.
//!
//! # Overview
//!
//! - [`TwilioConfig`]: credentials and transport settings
//! - [`TwilioConfigBuilder`]: a builder for constructing [`TwilioConfig`] instances
//! - [`AccountSid`]: a validated account identifier
//! - [`AuthToken`]: a validated auth token with masked debug output
//! - [`HostUrl`]: a validated host override
//!
//! # Example
//!
//! ```rust
//! use twilio_api::{TwilioConfig, AccountSid, AuthToken};
//!
//! let config = TwilioConfig::builder()
//!     .account_sid(AccountSid::new("AC123").unwrap())
//!     .auth_token(AuthToken::new("token").unwrap())
//!     .tries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.tries(), 3);
//! ```

mod newtypes;

pub use newtypes::{AccountSid, AuthToken, HostUrl};

use crate::error::ConfigError;

/// Configuration for the Twilio API client.
///
/// `TwilioConfig` is `Clone + Send + Sync` and is passed explicitly to
/// [`Twilio::new`](crate::Twilio::new); there is no global configuration.
#[derive(Clone, Debug)]
pub struct TwilioConfig {
    account_sid: AccountSid,
    auth_token: AuthToken,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    tries: u32,
}

impl TwilioConfig {
    /// Creates a new builder for constructing a `TwilioConfig`.
    #[must_use]
    pub fn builder() -> TwilioConfigBuilder {
        TwilioConfigBuilder::new()
    }

    /// Returns the account SID used for authentication and as the default account.
    #[must_use]
    pub const fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    /// Returns the auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the host override, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the number of attempts made for each request.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }
}

// Verify TwilioConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TwilioConfig>();
};

/// Builder for constructing [`TwilioConfig`] instances.
///
/// # Defaults
///
/// - `host`: `None` (each domain uses its public base URL)
/// - `user_agent_prefix`: `None`
/// - `tries`: `1` (no retries)
#[derive(Debug, Default)]
pub struct TwilioConfigBuilder {
    account_sid: Option<AccountSid>,
    auth_token: Option<AuthToken>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
}

impl TwilioConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account SID (required).
    #[must_use]
    pub fn account_sid(mut self, sid: AccountSid) -> Self {
        self.account_sid = Some(sid);
        self
    }

    /// Sets the auth token (required).
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Routes every domain through the given host.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the number of attempts for requests answered with 429 or 500.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Builds the [`TwilioConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `account_sid` or
    /// `auth_token` are not set, and [`ConfigError::InvalidTries`] when
    /// `tries` is zero.
    pub fn build(self) -> Result<TwilioConfig, ConfigError> {
        let account_sid = self.account_sid.ok_or(ConfigError::MissingRequiredField {
            field: "account_sid",
        })?;
        let auth_token = self.auth_token.ok_or(ConfigError::MissingRequiredField {
            field: "auth_token",
        })?;

        let tries = self.tries.unwrap_or(1);
        if tries == 0 {
            return Err(ConfigError::InvalidTries { tries });
        }

        Ok(TwilioConfig {
            account_sid,
            auth_token,
            host: self.host,
            user_agent_prefix: self.user_agent_prefix,
            tries,
        })
    }
}
