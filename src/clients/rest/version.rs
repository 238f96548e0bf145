//! [`Domain`] and [`Version`]: URL resolution and HTTP primitives for resources.

use std::sync::Arc;

use url::Url;

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse, RequestBody};
use crate::config::HostUrl;
use crate::rest::{ReadLimits, ResourceError};

/// A product area of the API reachable under one base URL.
///
/// Cloning a `Domain` is cheap; the HTTP client is shared.
#[derive(Clone, Debug)]
pub struct Domain {
    http_client: Arc<HttpClient>,
    base_url: String,
}

impl Domain {
    /// Creates a domain.
    ///
    /// When `host` is set it replaces `default_base_url`, which routes the
    /// domain through a proxy or a local test server.
    #[must_use]
    pub fn new(http_client: Arc<HttpClient>, default_base_url: &str, host: Option<&HostUrl>) -> Self {
        let base_url = host.map_or_else(
            || default_base_url.trim_end_matches('/').to_string(),
            |host| {
                tracing::debug!(
                    "Routing domain {} through host override {}",
                    default_base_url,
                    host.as_ref()
                );
                host.as_ref().to_string()
            },
        );

        Self {
            http_client,
            base_url,
        }
    }

    /// Returns the base URL of this domain.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the shared HTTP client.
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Resolves a domain-relative URI (or an absolute URL returned by the
    /// service) against this domain's base URL.
    ///
    /// Absolute URLs keep their path and query but are re-rooted on this
    /// domain, so continuation links follow a host override.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] for an empty URI and
    /// [`RestError::InvalidUrl`] for an absolute URL that cannot be parsed.
    pub fn absolute_url(&self, uri: &str) -> Result<String, RestError> {
        if uri.starts_with("https://") || uri.starts_with("http://") {
            let parsed = Url::parse(uri).map_err(|_| RestError::InvalidUrl {
                url: uri.to_string(),
            })?;
            let mut relative = parsed.path().to_string();
            if let Some(query) = parsed.query() {
                relative.push('?');
                relative.push_str(query);
            }
            return Ok(format!("{}{relative}", self.base_url));
        }

        let uri = normalize_uri(uri)?;
        Ok(format!("{}{uri}", self.base_url))
    }
}

/// A versioned slice of a [`Domain`].
///
/// This is the collaborator every resource list, context and page talks to.
#[derive(Clone, Debug)]
pub struct Version {
    domain: Domain,
    version: String,
}

// Verify Version is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Version>();
};

impl Version {
    /// Creates a version of `domain` identified by `version` (e.g. `2010-04-01`).
    #[must_use]
    pub fn new(domain: Domain, version: impl Into<String>) -> Self {
        Self {
            domain,
            version: version.into().trim_matches('/').to_string(),
        }
    }

    /// Returns the version segment.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the owning domain.
    #[must_use]
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Resolves a version-relative URI to an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if `uri` is empty.
    pub fn absolute_url(&self, uri: &str) -> Result<String, RestError> {
        let uri = normalize_uri(uri)?;
        self.domain.absolute_url(&format!("/{}{uri}", self.version))
    }

    /// Resolves the pagination limits for one `each`/`list` invocation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] for a zero `limit` or `page_size`.
    pub fn read_limits(
        &self,
        limit: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<ReadLimits, ResourceError> {
        ReadLimits::resolve(limit, page_size)
    }

    /// Requests one page of a collection.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the URI is invalid or the request fails.
    pub async fn page(
        &self,
        method: HttpMethod,
        uri: &str,
        params: Vec<(String, String)>,
    ) -> Result<HttpResponse, RestError> {
        let url = self.absolute_url(uri)?;
        self.send(method, url, params, None).await
    }

    /// Requests a page by the continuation URL the service returned.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the URL is invalid or the request fails.
    pub async fn page_by_url(&self, url: &str) -> Result<HttpResponse, RestError> {
        let url = self.domain.absolute_url(url)?;
        self.send(HttpMethod::Get, url, Vec::new(), None).await
    }

    /// Fetches a single record and returns its payload.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the URI is invalid or the request fails.
    pub async fn fetch(
        &self,
        uri: &str,
        params: Vec<(String, String)>,
    ) -> Result<serde_json::Value, RestError> {
        let url = self.absolute_url(uri)?;
        let response = self.send(HttpMethod::Get, url, params, None).await?;
        Ok(response.body)
    }

    /// Creates a record from form data and returns its payload.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the URI is invalid or the request fails.
    pub async fn create(
        &self,
        uri: &str,
        data: Vec<(String, String)>,
    ) -> Result<serde_json::Value, RestError> {
        let url = self.absolute_url(uri)?;
        let response = self
            .send(HttpMethod::Post, url, Vec::new(), Some(RequestBody::Form(data)))
            .await?;
        Ok(response.body)
    }

    /// Updates a record from form data and returns its payload.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the URI is invalid or the request fails.
    pub async fn update(
        &self,
        uri: &str,
        data: Vec<(String, String)>,
    ) -> Result<serde_json::Value, RestError> {
        let url = self.absolute_url(uri)?;
        let response = self
            .send(HttpMethod::Post, url, Vec::new(), Some(RequestBody::Form(data)))
            .await?;
        Ok(response.body)
    }

    /// Removes a record. Returns `true` when the service answered `204 No Content`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the URI is invalid or the request fails.
    pub async fn remove(&self, uri: &str) -> Result<bool, RestError> {
        let url = self.absolute_url(uri)?;
        let response = self.send(HttpMethod::Delete, url, Vec::new(), None).await?;
        Ok(response.code == 204)
    }

    async fn send(
        &self,
        method: HttpMethod,
        url: String,
        query: Vec<(String, String)>,
        body: Option<RequestBody>,
    ) -> Result<HttpResponse, RestError> {
        let http_client = self.domain.http_client();

        let mut builder = HttpRequest::builder(method, url)
            .query(query)
            .tries(http_client.tries());
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;
        http_client.request(request).await.map_err(Into::into)
    }
}

/// Ensures a URI is non-empty and rooted at `/`.
fn normalize_uri(uri: &str) -> Result<String, RestError> {
    let trimmed = uri.trim_start_matches('/');
    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: uri.to_string(),
        });
    }
    Ok(format!("/{trimmed}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccountSid, AuthToken, TwilioConfig};

    fn http_client() -> Arc<HttpClient> {
        let config = TwilioConfig::builder()
            .account_sid(AccountSid::new("AC123").unwrap())
            .auth_token(AuthToken::new("token").unwrap())
            .build()
            .unwrap();
        Arc::new(HttpClient::new(&config))
    }

    fn api_version(host: Option<&HostUrl>) -> Version {
        let domain = Domain::new(http_client(), "https://api.twilio.com", host);
        Version::new(domain, "2010-04-01")
    }

    #[test]
    fn test_normalize_uri_adds_leading_slash() {
        assert_eq!(normalize_uri("Accounts/AC1.json").unwrap(), "/Accounts/AC1.json");
        assert_eq!(normalize_uri("//Accounts").unwrap(), "/Accounts");
    }

    #[test]
    fn test_normalize_uri_rejects_empty() {
        assert!(matches!(normalize_uri(""), Err(RestError::InvalidPath { .. })));
        assert!(matches!(normalize_uri("/"), Err(RestError::InvalidPath { .. })));
    }

    #[test]
    fn test_version_absolute_url() {
        let version = api_version(None);
        assert_eq!(
            version.absolute_url("/Accounts/AC1/Messages.json").unwrap(),
            "https://api.twilio.com/2010-04-01/Accounts/AC1/Messages.json"
        );
    }

    #[test]
    fn test_domain_host_override() {
        let host = HostUrl::new("http://127.0.0.1:9000").unwrap();
        let version = api_version(Some(&host));
        assert_eq!(version.domain().base_url(), "http://127.0.0.1:9000");
        assert_eq!(
            version.absolute_url("/Accounts/AC1/Tokens.json").unwrap(),
            "http://127.0.0.1:9000/2010-04-01/Accounts/AC1/Tokens.json"
        );
    }

    #[test]
    fn test_domain_resolves_relative_continuation_uri() {
        let version = api_version(None);
        let url = version
            .domain()
            .absolute_url("/2010-04-01/Accounts/AC1/Messages.json?PageSize=50&Page=1&PageToken=PA1")
            .unwrap();
        assert_eq!(
            url,
            "https://api.twilio.com/2010-04-01/Accounts/AC1/Messages.json?PageSize=50&Page=1&PageToken=PA1"
        );
    }

    #[test]
    fn test_domain_reroots_absolute_continuation_url() {
        let host = HostUrl::new("http://localhost:8080").unwrap();
        let domain = Domain::new(http_client(), "https://conversations.twilio.com", Some(&host));
        let url = domain
            .absolute_url("https://conversations.twilio.com/v1/Conversations?PageSize=2&Page=1&PageToken=PT2")
            .unwrap();
        assert_eq!(
            url,
            "http://localhost:8080/v1/Conversations?PageSize=2&Page=1&PageToken=PT2"
        );
    }

    #[test]
    fn test_read_limits_delegates() {
        let version = api_version(None);
        let limits = version.read_limits(Some(120), Some(50)).unwrap();
        assert_eq!(limits.page_size, 50);
        assert_eq!(limits.page_limit, Some(3));
    }
}
