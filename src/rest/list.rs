//! [`ResourceList`]: the collection root of a resource.
//!
//! A list exposes four ways to read a collection:
//!
//! - [`ResourceList::page`]: exactly one request, returns a [`Page`]
//! - [`ResourceList::get_page`]: one request against a continuation URL
//! - [`ResourceList::each`]: streams instances to a callback, page by page
//! - [`ResourceList::list`]: collects what `each` would deliver
//!
//! Pages are fetched strictly one after another: page N+1 is requested only
//! after every instance of page N reached the callback.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::ReadOptions;
//! use twilio_api::rest::resources::v2010::MessageReadParams;
//!
//! let messages = twilio.messages();
//!
//! // At most 120 records, fetched 50 per page (3 requests at most)
//! let options = ReadOptions {
//!     filters: MessageReadParams { to: Some("+15558675309".into()), ..Default::default() },
//!     limit: Some(120),
//!     page_size: Some(50),
//! };
//! messages.each(options, |message| println!("{:?}", message.body)).await?;
//! ```

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::clients::{HttpMethod, Version};
use crate::rest::resource::{decode, encode};
use crate::rest::{
    Instance, InstanceContext, Page, Resource, ResourceError, ResourceOperation, Solution, Validate,
};

/// Options for [`ResourceList::each`] and [`ResourceList::list`].
#[derive(Debug, Clone, Default)]
pub struct ReadOptions<P> {
    /// Resource-specific filters; unset fields are not sent.
    pub filters: P,
    /// Upper limit on the number of records delivered; `None` reads everything.
    pub limit: Option<u32>,
    /// Records per request; defaults to `min(limit, 1000)` or 50.
    pub page_size: Option<u32>,
}

impl<P: Default> ReadOptions<P> {
    /// Creates options that read at most `limit` records.
    #[must_use]
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}

/// Options for a single [`ResourceList::page`] request.
#[derive(Debug, Clone, Default)]
pub struct PageOptions<P> {
    /// Resource-specific filters; unset fields are not sent.
    pub filters: P,
    /// Continuation token returned by the service.
    pub page_token: Option<String>,
    /// Client-side page counter, sent as `Page`.
    pub page_number: Option<u32>,
    /// Records per request.
    pub page_size: Option<u32>,
}

/// The collection endpoint of resource `R` under one [`Solution`].
///
/// Lists hold no mutable state; every operation is a fresh request.
pub struct ResourceList<R: Resource> {
    version: Arc<Version>,
    solution: Solution,
    _resource: std::marker::PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceList<R> {
    /// Creates a list for `solution` (e.g. `{account_sid}`).
    #[must_use]
    pub const fn new(version: Arc<Version>, solution: Solution) -> Self {
        Self {
            version,
            solution,
            _resource: std::marker::PhantomData,
        }
    }

    /// Returns the path parameters of this collection.
    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Returns the version this list talks to.
    #[must_use]
    pub const fn version(&self) -> &Arc<Version> {
        &self.version
    }

    /// Creates a new resource in this collection.
    ///
    /// Required parameters are checked before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingRequiredField`] if a required parameter
    /// is absent, [`ResourceError::PathResolutionFailed`] if the resource
    /// cannot be created, or the transport/decode error.
    pub async fn create(&self, params: &R::CreateParams) -> Result<Instance<R>, ResourceError> {
        params.validate()?;
        let uri = R::resolve_uri(ResourceOperation::Create, &self.solution)?;

        let data = encode::<R, _>(params)?;
        let payload = self.version.create(&uri, data).await?;
        let properties = decode::<R>(201, payload)?;
        Ok(Instance::new(
            Arc::clone(&self.version),
            properties,
            self.solution.clone(),
        ))
    }

    /// Requests exactly one page.
    ///
    /// Only filters that are set, plus `PageToken`, `Page` and `PageSize` when
    /// given, are sent as query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the collection cannot
    /// be read, or the transport/decode error.
    pub async fn page(
        &self,
        options: &PageOptions<R::ReadParams>,
    ) -> Result<Page<R>, ResourceError> {
        let uri = R::resolve_uri(ResourceOperation::Read, &self.solution)?;

        let mut params = encode::<R, _>(&options.filters)?;
        if let Some(token) = &options.page_token {
            params.push(("PageToken".to_string(), token.clone()));
        }
        if let Some(number) = options.page_number {
            params.push(("Page".to_string(), number.to_string()));
        }
        if let Some(size) = options.page_size {
            params.push(("PageSize".to_string(), size.to_string()));
        }

        let response = self.version.page(HttpMethod::Get, &uri, params).await?;
        Page::from_response(Arc::clone(&self.version), response, self.solution.clone())
    }

    /// Requests the page at a continuation URL returned by the service.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error.
    pub async fn get_page(&self, url: &str) -> Result<Page<R>, ResourceError> {
        let response = self.version.page_by_url(url).await?;
        Page::from_response(Arc::clone(&self.version), response, self.solution.clone())
    }

    /// Streams instances to `callback` in server order.
    ///
    /// Iteration stops when a page is empty, when `limit` records were
    /// delivered, when the page limit derived from `limit` is reached, or when
    /// the service returns no continuation. A failure on any page aborts the
    /// iteration; instances already delivered stay delivered.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidArgument`] for a zero `limit` or
    /// `page_size`, or the transport/decode error of the failing page.
    pub async fn each<F>(
        &self,
        options: ReadOptions<R::ReadParams>,
        callback: F,
    ) -> Result<(), ResourceError>
    where
        F: FnMut(Instance<R>),
    {
        self.each_with_cancellation(options, &CancellationToken::new(), callback)
            .await
    }

    /// Like [`each`](Self::each), but stops with [`ResourceError::Cancelled`]
    /// once `token` is cancelled.
    ///
    /// Cancellation interrupts an in-flight page request and is also checked
    /// before each delivery.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Cancelled`] after cancellation, otherwise the
    /// errors of [`each`](Self::each).
    pub async fn each_with_cancellation<F>(
        &self,
        options: ReadOptions<R::ReadParams>,
        token: &CancellationToken,
        mut callback: F,
    ) -> Result<(), ResourceError>
    where
        F: FnMut(Instance<R>),
    {
        let limits = self.version.read_limits(options.limit, options.page_size)?;

        let first = PageOptions {
            filters: options.filters,
            page_token: None,
            page_number: None,
            page_size: Some(limits.page_size),
        };
        let mut page = Self::cancellable(token, self.page(&first)).await?;

        let mut pages_fetched: u64 = 1;
        let mut delivered: u64 = 0;

        loop {
            if page.is_empty() {
                break;
            }

            let next_url = page.next_page_url().map(String::from);

            for instance in page.into_instances() {
                if token.is_cancelled() {
                    tracing::warn!(
                        resource = R::NAME,
                        delivered,
                        "Iteration cancelled"
                    );
                    return Err(ResourceError::Cancelled);
                }
                callback(instance);
                delivered += 1;
                if limits.limit.is_some_and(|limit| delivered >= u64::from(limit)) {
                    return Ok(());
                }
            }

            if limits.page_limit.is_some_and(|limit| pages_fetched >= u64::from(limit)) {
                break;
            }
            let Some(url) = next_url else {
                break;
            };

            tracing::debug!(
                resource = R::NAME,
                page = pages_fetched + 1,
                delivered,
                "Fetching next page"
            );
            page = Self::cancellable(token, self.get_page(&url)).await?;
            pages_fetched += 1;
        }

        Ok(())
    }

    /// Collects every instance [`each`](Self::each) would deliver.
    ///
    /// Never returns more than `limit` records.
    ///
    /// # Errors
    ///
    /// See [`each`](Self::each). Records gathered before a failure are dropped.
    pub async fn list(
        &self,
        options: ReadOptions<R::ReadParams>,
    ) -> Result<Vec<Instance<R>>, ResourceError> {
        self.list_with_cancellation(options, &CancellationToken::new())
            .await
    }

    /// Like [`list`](Self::list), but stops with [`ResourceError::Cancelled`]
    /// once `token` is cancelled.
    ///
    /// # Errors
    ///
    /// See [`each_with_cancellation`](Self::each_with_cancellation).
    pub async fn list_with_cancellation(
        &self,
        options: ReadOptions<R::ReadParams>,
        token: &CancellationToken,
    ) -> Result<Vec<Instance<R>>, ResourceError> {
        let mut instances = Vec::new();
        self.each_with_cancellation(options, token, |instance| instances.push(instance))
            .await?;
        Ok(instances)
    }

    /// Returns the context of the resource identified by `sid`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource cannot
    /// be addressed individually.
    pub fn get(&self, sid: impl Into<String>) -> Result<InstanceContext<R>, ResourceError> {
        InstanceContext::new(
            Arc::clone(&self.version),
            self.solution.clone().with(Solution::SID, sid),
        )
    }

    async fn cancellable<T>(
        token: &CancellationToken,
        request: impl std::future::Future<Output = Result<T, ResourceError>>,
    ) -> Result<T, ResourceError> {
        tokio::select! {
            biased;
            () = token.cancelled() => {
                tracing::warn!(resource = R::NAME, "Page request cancelled");
                Err(ResourceError::Cancelled)
            }
            result = request => result,
        }
    }
}

impl<R: Resource> Clone for ResourceList<R> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.version), self.solution.clone())
    }
}

impl<R: Resource> std::fmt::Debug for ResourceList<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceList")
            .field("resource", &R::NAME)
            .field("solution", &self.solution)
            .finish_non_exhaustive()
    }
}
