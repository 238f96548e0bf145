//! The `api` domain and its 2010-04-01 version.

use std::sync::{Arc, OnceLock};

use crate::clients::{Domain, HttpClient, Version};
use crate::config::HostUrl;
use crate::rest::resources::v2010::{Call, Message, SmsMessage, Token};
use crate::rest::{Resource, ResourceList, Solution};

/// The `api.twilio.com` domain.
#[derive(Debug)]
pub struct Api {
    domain: Domain,
    v2010: OnceLock<V2010>,
}

impl Api {
    /// Default base URL of this domain.
    pub const BASE_URL: &'static str = "https://api.twilio.com";

    pub(crate) fn new(http_client: Arc<HttpClient>, host: Option<&HostUrl>) -> Self {
        Self {
            domain: Domain::new(http_client, Self::BASE_URL, host),
            v2010: OnceLock::new(),
        }
    }

    /// Returns the underlying domain.
    #[must_use]
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Returns the 2010-04-01 version, created on first use.
    #[must_use]
    pub fn v2010(&self) -> &V2010 {
        self.v2010.get_or_init(|| V2010 {
            version: Arc::new(Version::new(self.domain.clone(), V2010::VERSION)),
        })
    }
}

/// API version 2010-04-01.
#[derive(Debug)]
pub struct V2010 {
    version: Arc<Version>,
}

impl V2010 {
    /// The version path segment.
    pub const VERSION: &'static str = "2010-04-01";

    /// Returns the shared version used by every resource of this version.
    #[must_use]
    pub const fn version(&self) -> &Arc<Version> {
        &self.version
    }

    /// Returns the resources of one account.
    #[must_use]
    pub fn account(&self, account_sid: impl Into<String>) -> Account {
        Account {
            version: Arc::clone(&self.version),
            solution: Solution::new().with("account_sid", account_sid),
        }
    }
}

/// The account-scoped resource lists of API version 2010-04-01.
#[derive(Clone, Debug)]
pub struct Account {
    version: Arc<Version>,
    solution: Solution,
}

impl Account {
    /// Returns the account sid every path of this scope is rooted on.
    #[must_use]
    pub fn sid(&self) -> &str {
        self.solution.get("account_sid").unwrap_or_default()
    }

    /// Messages of this account.
    #[must_use]
    pub fn messages(&self) -> ResourceList<Message> {
        self.list()
    }

    /// Legacy SMS messages of this account.
    #[must_use]
    pub fn sms_messages(&self) -> ResourceList<SmsMessage> {
        self.list()
    }

    /// Calls of this account.
    #[must_use]
    pub fn calls(&self) -> ResourceList<Call> {
        self.list()
    }

    /// Network traversal tokens of this account.
    #[must_use]
    pub fn tokens(&self) -> ResourceList<Token> {
        self.list()
    }

    fn list<R: Resource>(&self) -> ResourceList<R> {
        ResourceList::new(Arc::clone(&self.version), self.solution.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccountSid, AuthToken, TwilioConfig};

    fn api(host: Option<&HostUrl>) -> Api {
        let config = TwilioConfig::builder()
            .account_sid(AccountSid::new("AC1").unwrap())
            .auth_token(AuthToken::new("token").unwrap())
            .build()
            .unwrap();
        Api::new(Arc::new(HttpClient::new(&config)), host)
    }

    #[test]
    fn test_v2010_is_memoized() {
        let api = api(None);
        assert!(Arc::ptr_eq(api.v2010().version(), api.v2010().version()));
        assert_eq!(api.v2010().version().version(), "2010-04-01");
        assert_eq!(api.domain().base_url(), "https://api.twilio.com");
    }

    #[test]
    fn test_account_scope_roots_lists() {
        let account = api(None).v2010().account("AC9");
        assert_eq!(account.sid(), "AC9");
        assert_eq!(account.messages().solution().get("account_sid"), Some("AC9"));
        assert_eq!(account.calls().solution().get("account_sid"), Some("AC9"));
    }

    #[test]
    fn test_host_override() {
        let host = HostUrl::new("http://localhost:8080").unwrap();
        let api = api(Some(&host));
        assert_eq!(
            api.v2010().version().absolute_url("/Accounts/AC1/Messages.json").unwrap(),
            "http://localhost:8080/2010-04-01/Accounts/AC1/Messages.json"
        );
    }
}
