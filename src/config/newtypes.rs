//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction so that a
//! [`TwilioConfig`](super::TwilioConfig) can never hold an empty credential
//! or a relative host.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use url::Url;

/// A validated Twilio account SID.
///
/// The SID must be non-empty and start with `AC`.
///
/// # Example
///
/// ```rust
/// use twilio_api::AccountSid;
///
/// let sid = AccountSid::new("AC123").unwrap();
/// assert_eq!(sid.as_ref(), "AC123");
/// assert!(AccountSid::new("MM123").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountSid(String);

impl AccountSid {
    const PREFIX: &'static str = "AC";

    /// Creates a new validated account SID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccountSid`] for an empty value and
    /// [`ConfigError::InvalidAccountSid`] when the `AC` prefix is missing.
    pub fn new(sid: impl Into<String>) -> Result<Self, ConfigError> {
        let sid = sid.into().trim().to_string();
        if sid.is_empty() {
            return Err(ConfigError::EmptyAccountSid);
        }
        if !sid.starts_with(Self::PREFIX) {
            return Err(ConfigError::InvalidAccountSid { sid });
        }
        Ok(Self(sid))
    }
}

impl AsRef<str> for AccountSid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountSid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AccountSid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountSid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Twilio auth token.
///
/// The `Debug` implementation masks the value so tokens never end up in logs.
///
/// # Example
///
/// ```rust
/// use twilio_api::AuthToken;
///
/// let token = AuthToken::new("secret").unwrap();
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// A validated absolute host URL.
///
/// When configured, the host replaces the base URL of every domain. Only the
/// scheme, host and port are kept; any path is discarded.
///
/// # Example
///
/// ```rust
/// use twilio_api::HostUrl;
///
/// let host = HostUrl::new("http://127.0.0.1:8080/ignored").unwrap();
/// assert_eq!(host.as_ref(), "http://127.0.0.1:8080");
/// assert_eq!(host.host_name(), Some("127.0.0.1"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: Url,
    origin: String,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL cannot be parsed,
    /// is not `http`/`https`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let trimmed = raw.trim();
        let invalid = || ConfigError::InvalidHostUrl {
            url: trimmed.to_string(),
        };

        let url = Url::parse(trimmed).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(invalid());
        }

        let origin = url.origin().ascii_serialization();
        Ok(Self { url, origin })
    }

    /// Returns the URL scheme.
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Returns the host name.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.url.host_str()
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.origin
    }
}
