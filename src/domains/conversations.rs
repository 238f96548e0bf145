//! The `conversations` domain and its `v1` version.

use std::sync::{Arc, OnceLock};

use crate::clients::{Domain, HttpClient, Version};
use crate::config::HostUrl;
use crate::rest::resources::conversations_v1::Conversation;
use crate::rest::{ResourceList, Solution};

/// The `conversations.twilio.com` domain.
#[derive(Debug)]
pub struct Conversations {
    domain: Domain,
    v1: OnceLock<V1>,
}

impl Conversations {
    /// Default base URL of this domain.
    pub const BASE_URL: &'static str = "https://conversations.twilio.com";

    pub(crate) fn new(http_client: Arc<HttpClient>, host: Option<&HostUrl>) -> Self {
        Self {
            domain: Domain::new(http_client, Self::BASE_URL, host),
            v1: OnceLock::new(),
        }
    }

    /// Returns the underlying domain.
    #[must_use]
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Returns version `v1`, created on first use.
    #[must_use]
    pub fn v1(&self) -> &V1 {
        self.v1.get_or_init(|| V1 {
            version: Arc::new(Version::new(self.domain.clone(), V1::VERSION)),
        })
    }

    /// Shortcut for `self.v1().conversations()`.
    #[must_use]
    pub fn conversations(&self) -> ResourceList<Conversation> {
        self.v1().conversations()
    }
}

/// Conversations API version `v1`.
#[derive(Debug)]
pub struct V1 {
    version: Arc<Version>,
}

impl V1 {
    /// The version path segment.
    pub const VERSION: &'static str = "v1";

    /// Returns the shared version used by every resource of this version.
    #[must_use]
    pub const fn version(&self) -> &Arc<Version> {
        &self.version
    }

    /// All conversations of the authenticated account.
    #[must_use]
    pub fn conversations(&self) -> ResourceList<Conversation> {
        ResourceList::new(Arc::clone(&self.version), Solution::new())
    }
}
