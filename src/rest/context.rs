//! [`InstanceContext`]: the addressable identity of one resource.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::clients::Version;
use crate::rest::resource::{decode, encode};
use crate::rest::{Instance, Resource, ResourceError, ResourceOperation, Solution, Validate};

/// Operations tried, in order, to find the instance URI.
const INSTANCE_OPERATIONS: [ResourceOperation; 3] = [
    ResourceOperation::Fetch,
    ResourceOperation::Update,
    ResourceOperation::Remove,
];

/// A handle on one resource, addressed by its [`Solution`].
///
/// The URI is computed once at construction and never changes. A context
/// holds no cached state: every `fetch` and `update` returns a freshly
/// decoded [`Instance`].
///
/// # Example
///
/// ```rust,ignore
/// let context = twilio.messages().get("SM123")?;
/// let message = context.fetch().await?;
/// assert_eq!(message.solution().sid(), Some("SM123"));
///
/// let removed = context.remove().await?;
/// ```
pub struct InstanceContext<R: Resource> {
    version: Arc<Version>,
    solution: Solution,
    uri: String,
    _resource: PhantomData<fn() -> R>,
}

// Verify InstanceContext is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InstanceContext<crate::rest::resources::v2010::Message>>();
};

impl<R: Resource> InstanceContext<R> {
    /// Creates a context for `solution`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no
    /// instance URI or the solution lacks a parameter it needs.
    pub fn new(version: Arc<Version>, solution: Solution) -> Result<Self, ResourceError> {
        let uri = INSTANCE_OPERATIONS
            .iter()
            .filter(|operation| R::supports(**operation))
            .find_map(|operation| R::resolve_uri(*operation, &solution).ok())
            .ok_or(ResourceError::PathResolutionFailed {
                resource: R::NAME,
                operation: "context",
            })?;

        Ok(Self {
            version,
            solution,
            uri,
            _resource: PhantomData,
        })
    }

    /// Returns the path parameters of this context.
    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Returns the version-relative URI of this resource.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the version this context talks to.
    #[must_use]
    pub const fn version(&self) -> &Arc<Version> {
        &self.version
    }

    /// Fetches the resource.
    ///
    /// The returned instance keeps this context's `sid` even if the payload
    /// carries a different one.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource cannot
    /// be fetched, or the transport/decode error.
    pub async fn fetch(&self) -> Result<Instance<R>, ResourceError> {
        self.ensure_supported(ResourceOperation::Fetch)?;

        let payload = self.version.fetch(&self.uri, Vec::new()).await?;
        let properties = decode::<R>(200, payload)?;
        Ok(self.instance(properties))
    }

    /// Updates the resource with the supplied fields.
    ///
    /// Only fields that are set on `params` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource cannot
    /// be updated, or the transport/decode error.
    pub async fn update(&self, params: &R::UpdateParams) -> Result<Instance<R>, ResourceError> {
        self.ensure_supported(ResourceOperation::Update)?;

        let data = encode::<R, _>(params)?;
        let payload = self.version.update(&self.uri, data).await?;
        let properties = decode::<R>(200, payload)?;
        Ok(self.instance(properties))
    }

    /// Removes the resource. Returns `true` when the service confirmed the
    /// deletion.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource cannot
    /// be removed, or the transport error.
    pub async fn remove(&self) -> Result<bool, ResourceError> {
        self.ensure_supported(ResourceOperation::Remove)?;

        Ok(self.version.remove(&self.uri).await?)
    }

    /// Creates the resource at this context's URI.
    ///
    /// Used by singleton sub-resources (such as call feedback) that are
    /// created in place rather than through a collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingRequiredField`] before any request if
    /// validation fails, [`ResourceError::PathResolutionFailed`] if the
    /// resource cannot be created here, or the transport/decode error.
    pub async fn create(&self, params: &R::CreateParams) -> Result<Instance<R>, ResourceError> {
        params.validate()?;
        let uri = R::resolve_uri(ResourceOperation::Create, &self.solution)?;

        let data = encode::<R, _>(params)?;
        let payload = self.version.create(&uri, data).await?;
        let properties = decode::<R>(201, payload)?;
        Ok(self.instance(properties))
    }

    fn instance(&self, properties: R) -> Instance<R> {
        Instance::new(Arc::clone(&self.version), properties, self.solution.clone())
    }

    fn ensure_supported(&self, operation: ResourceOperation) -> Result<(), ResourceError> {
        if R::supports(operation) {
            Ok(())
        } else {
            Err(ResourceError::PathResolutionFailed {
                resource: R::NAME,
                operation: operation.as_str(),
            })
        }
    }
}

impl<R: Resource> Clone for InstanceContext<R> {
    fn clone(&self) -> Self {
        Self {
            version: Arc::clone(&self.version),
            solution: self.solution.clone(),
            uri: self.uri.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> std::fmt::Debug for InstanceContext<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceContext")
            .field("resource", &R::NAME)
            .field("solution", &self.solution)
            .field("uri", &self.uri)
            .finish()
    }
}
