//! [`Page`]: one collection response decoded into instances.
//!
//! The service wraps records in an envelope. API v2010 puts paging metadata
//! at the top level:
//!
//! ```json
//! {
//!   "messages": [ ... ],
//!   "next_page_uri": "/2010-04-01/Accounts/AC1/Messages.json?PageSize=50&Page=1&PageToken=PA...",
//!   "page": 0,
//!   "page_size": 50
//! }
//! ```
//!
//! Newer versions nest it under `meta`:
//!
//! ```json
//! {
//!   "conversations": [ ... ],
//!   "meta": { "key": "conversations", "next_page_url": "https://...", "page": 0, "page_size": 50 }
//! }
//! ```

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::{HttpResponse, Version};
use crate::rest::resource::decode;
use crate::rest::{Instance, Resource, ResourceError, Solution};

/// Top-level keys that carry paging metadata rather than records.
const META_KEYS: &[&str] = &[
    "end",
    "first_page_uri",
    "last_page_uri",
    "meta",
    "next_page_uri",
    "num_pages",
    "page",
    "page_size",
    "previous_page_uri",
    "start",
    "total",
    "uri",
];

/// One page of a resource collection.
///
/// Instances keep the order the service returned them in and carry the
/// page's solution.
pub struct Page<R: Resource> {
    version: Arc<Version>,
    solution: Solution,
    instances: Vec<Instance<R>>,
    next_page_url: Option<String>,
    previous_page_url: Option<String>,
    page_number: Option<u64>,
    page_size: Option<u64>,
}

impl<R: Resource> Page<R> {
    /// Decodes a page from a collection response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the body holds no record array or
    /// a record fails to decode.
    pub fn from_response(
        version: Arc<Version>,
        response: HttpResponse,
        solution: Solution,
    ) -> Result<Self, ResourceError> {
        let code = response.code;
        let Value::Object(mut body) = response.body else {
            return Err(Self::malformed(code, "page body is not an object"));
        };

        let meta = body.get("meta").and_then(Value::as_object).cloned();
        let key = Self::records_key(&body, meta.as_ref())
            .ok_or_else(|| Self::malformed(code, "unable to locate records in page"))?;

        let records = match body.remove(&key) {
            Some(Value::Array(records)) => records,
            Some(Value::Null) | None => Vec::new(),
            Some(_) => return Err(Self::malformed(code, "records are not an array")),
        };

        let instances = records
            .into_iter()
            .map(|record| {
                decode::<R>(code, record)
                    .map(|properties| Instance::new(Arc::clone(&version), properties, solution.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let next_page_url = continuation(meta.as_ref(), &body, "next_page_url", "next_page_uri");
        let previous_page_url =
            continuation(meta.as_ref(), &body, "previous_page_url", "previous_page_uri");
        let page_number = number(meta.as_ref(), &body, "page");
        let page_size = number(meta.as_ref(), &body, "page_size");

        Ok(Self {
            version,
            solution,
            instances,
            next_page_url,
            previous_page_url,
            page_number,
            page_size,
        })
    }

    /// Returns the instances on this page in server order.
    #[must_use]
    pub fn instances(&self) -> &[Instance<R>] {
        &self.instances
    }

    /// Consumes the page and returns its instances.
    #[must_use]
    pub fn into_instances(self) -> Vec<Instance<R>> {
        self.instances
    }

    /// Returns the number of instances on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if the page holds no instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Returns the path parameters shared by every instance on this page.
    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Returns the continuation URL of the next page, if any.
    #[must_use]
    pub fn next_page_url(&self) -> Option<&str> {
        self.next_page_url.as_deref()
    }

    /// Returns the URL of the previous page, if any.
    #[must_use]
    pub fn previous_page_url(&self) -> Option<&str> {
        self.previous_page_url.as_deref()
    }

    /// Returns the page number reported by the service.
    #[must_use]
    pub const fn page_number(&self) -> Option<u64> {
        self.page_number
    }

    /// Returns the page size reported by the service.
    #[must_use]
    pub const fn page_size(&self) -> Option<u64> {
        self.page_size
    }

    /// Requests the next page. Returns `Ok(None)` when this is the last page.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error of the request.
    pub async fn next_page(&self) -> Result<Option<Self>, ResourceError> {
        match self.next_page_url.as_deref() {
            Some(url) => self.follow(url).await.map(Some),
            None => Ok(None),
        }
    }

    /// Requests the previous page. Returns `Ok(None)` on the first page.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error of the request.
    pub async fn previous_page(&self) -> Result<Option<Self>, ResourceError> {
        match self.previous_page_url.as_deref() {
            Some(url) => self.follow(url).await.map(Some),
            None => Ok(None),
        }
    }

    async fn follow(&self, url: &str) -> Result<Self, ResourceError> {
        let response = self.version.page_by_url(url).await?;
        Self::from_response(Arc::clone(&self.version), response, self.solution.clone())
    }

    fn records_key(body: &Map<String, Value>, meta: Option<&Map<String, Value>>) -> Option<String> {
        if let Some(key) = meta.and_then(|m| m.get("key")).and_then(Value::as_str) {
            return Some(key.to_string());
        }

        let mut candidates = body.keys().filter(|key| !META_KEYS.contains(&key.as_str()));
        match (candidates.next(), candidates.next()) {
            (Some(key), None) => Some(key.clone()),
            _ => None,
        }
    }

    fn malformed(code: u16, message: &str) -> ResourceError {
        ResourceError::Http(crate::clients::HttpError::Response(
            crate::clients::HttpResponseError {
                code,
                message: format!("Failed to deserialize {} page: {message}", R::NAME),
                error_code: None,
                more_info: None,
                error_reference: None,
            },
        ))
    }
}

impl<R: Resource> std::fmt::Debug for Page<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("resource", &R::NAME)
            .field("instances", &self.instances)
            .field("next_page_url", &self.next_page_url)
            .field("page_number", &self.page_number)
            .finish_non_exhaustive()
    }
}

/// Reads a continuation link, preferring the absolute URL under `meta`.
fn continuation(
    meta: Option<&Map<String, Value>>,
    body: &Map<String, Value>,
    meta_key: &str,
    body_key: &str,
) -> Option<String> {
    meta.and_then(|m| m.get(meta_key))
        .or_else(|| body.get(body_key))
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(String::from)
}

fn number(meta: Option<&Map<String, Value>>, body: &Map<String, Value>, key: &str) -> Option<u64> {
    meta.and_then(|m| m.get(key))
        .or_else(|| body.get(key))
        .and_then(Value::as_u64)
}
