//! [`Instance`]: an immutable snapshot of one resource.

use std::ops::Deref;
use std::sync::{Arc, OnceLock};

use crate::clients::Version;
use crate::rest::{InstanceContext, Resource, ResourceError, Solution};

/// A decoded resource together with the path parameters that address it.
///
/// `Instance<R>` implements `Deref<Target = R>`, so the resource's fields are
/// read directly:
///
/// ```rust,ignore
/// let message = twilio.messages().get("SM123")?.fetch().await?;
/// println!("{:?} -> {:?}", message.from, message.to);
/// ```
///
/// Properties are never mutated in place; `update` returns a new instance.
/// The [`InstanceContext`] behind `fetch`/`update`/`remove` is created on
/// first use and shared by later calls.
pub struct Instance<R: Resource> {
    properties: R,
    solution: Solution,
    version: Arc<Version>,
    context: OnceLock<InstanceContext<R>>,
}

impl<R: Resource> Instance<R> {
    /// Creates an instance.
    ///
    /// An explicit non-empty `sid` in `solution` is kept; otherwise the
    /// payload's own identifier fills it.
    #[must_use]
    pub fn new(version: Arc<Version>, properties: R, solution: Solution) -> Self {
        let explicit = solution.sid().is_some_and(|sid| !sid.is_empty());
        let solution = match properties.sid() {
            Some(sid) if !explicit && !sid.is_empty() => solution.with(Solution::SID, sid),
            _ => solution,
        };

        Self {
            properties,
            solution,
            version,
            context: OnceLock::new(),
        }
    }

    /// Returns the decoded properties.
    #[must_use]
    pub const fn properties(&self) -> &R {
        &self.properties
    }

    /// Consumes the instance and returns the decoded properties.
    #[must_use]
    pub fn into_properties(self) -> R {
        self.properties
    }

    /// Returns the path parameters that address this resource.
    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Returns the context bound to this instance, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] for resources that
    /// cannot be addressed individually.
    pub fn context(&self) -> Result<&InstanceContext<R>, ResourceError> {
        if let Some(context) = self.context.get() {
            return Ok(context);
        }
        let context = InstanceContext::new(Arc::clone(&self.version), self.solution.clone())?;
        Ok(self.context.get_or_init(|| context))
    }

    /// Fetches a fresh copy of this resource.
    ///
    /// # Errors
    ///
    /// See [`InstanceContext::fetch`].
    pub async fn fetch(&self) -> Result<Self, ResourceError> {
        self.context()?.fetch().await
    }

    /// Updates this resource and returns the new snapshot.
    ///
    /// # Errors
    ///
    /// See [`InstanceContext::update`].
    pub async fn update(&self, params: &R::UpdateParams) -> Result<Self, ResourceError> {
        self.context()?.update(params).await
    }

    /// Removes this resource.
    ///
    /// # Errors
    ///
    /// See [`InstanceContext::remove`].
    pub async fn remove(&self) -> Result<bool, ResourceError> {
        self.context()?.remove().await
    }
}

impl<R: Resource> Deref for Instance<R> {
    type Target = R;

    fn deref(&self) -> &Self::Target {
        &self.properties
    }
}

impl<R: Resource> Clone for Instance<R> {
    fn clone(&self) -> Self {
        Self {
            properties: self.properties.clone(),
            solution: self.solution.clone(),
            version: Arc::clone(&self.version),
            context: self.context.clone(),
        }
    }
}

impl<R: Resource> std::fmt::Debug for Instance<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instance")
            .field("properties", &self.properties)
            .field("solution", &self.solution)
            .finish_non_exhaustive()
    }
}
