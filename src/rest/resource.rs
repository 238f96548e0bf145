//! The [`Resource`] trait shared by every REST resource.
//!
//! A resource describes *what* lives at an endpoint: its field struct, the
//! parameter structs for each operation and the URI templates. The generic
//! [`ResourceList`](crate::rest::ResourceList),
//! [`InstanceContext`](crate::rest::InstanceContext),
//! [`Instance`](crate::rest::Instance) and [`Page`](crate::rest::Page) types
//! supply the behavior.
//!
//! # Implementing a Resource
//!
//! 1. Define the field struct with serde derives (use the helpers in
//!    [`deserialize`](crate::rest::deserialize) for numbers and timestamps)
//! 2. Define parameter structs with wire names and `skip_serializing_if`
//! 3. Implement `Resource` with the paths the endpoint supports
//!
//! # Example
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use twilio_api::rest::{Resource, ResourceError, ResourceOperation, ResourcePath, Validate};
//! use twilio_api::HttpMethod;
//!
//! #[derive(Debug, Clone, Deserialize)]
//! pub struct Queue {
//!     pub sid: Option<String>,
//!     pub friendly_name: Option<String>,
//! }
//!
//! #[derive(Debug, Clone, Default, Serialize)]
//! pub struct QueueCreateParams {
//!     #[serde(rename = "FriendlyName", skip_serializing_if = "Option::is_none")]
//!     pub friendly_name: Option<String>,
//! }
//!
//! impl Validate for QueueCreateParams {
//!     fn validate(&self) -> Result<(), ResourceError> {
//!         twilio_api::rest::require::<Queue, _>("FriendlyName", self.friendly_name.as_ref())
//!     }
//! }
//!
//! impl Resource for Queue {
//!     type ReadParams = ();
//!     type CreateParams = QueueCreateParams;
//!     type UpdateParams = ();
//!
//!     const NAME: &'static str = "Queue";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &["account_sid"], "/Accounts/{account_sid}/Queues.json"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Read, &["account_sid"], "/Accounts/{account_sid}/Queues.json"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Fetch, &["account_sid", "sid"], "/Accounts/{account_sid}/Queues/{sid}.json"),
//!     ];
//!
//!     fn sid(&self) -> Option<&str> {
//!         self.sid.as_deref()
//!     }
//! }
//! ```

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use crate::rest::{build_path, get_path, ResourceError, ResourceOperation, ResourcePath, Solution};

/// Client-side checks run by `create` before any request is sent.
pub trait Validate {
    /// Returns an error naming the first missing required parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingRequiredField`] when a required
    /// parameter is absent.
    fn validate(&self) -> Result<(), ResourceError> {
        Ok(())
    }
}

impl Validate for () {}

/// Fails with [`ResourceError::MissingRequiredField`] when `value` is `None`.
///
/// # Errors
///
/// Returns [`ResourceError::MissingRequiredField`] naming `field` and `R::NAME`.
pub fn require<R: Resource, T>(field: &'static str, value: Option<&T>) -> Result<(), ResourceError> {
    if value.is_none() {
        return Err(ResourceError::MissingRequiredField {
            resource: R::NAME,
            field,
        });
    }
    Ok(())
}

/// A REST resource type.
///
/// Implementors are the decoded field structs; the trait carries the
/// endpoint metadata the generic engine needs.
///
/// # Associated Types
///
/// - `ReadParams`: filters for `page`/`each`/`list` (use `()` if none)
/// - `CreateParams`: parameters for `create` (use `()` if unsupported)
/// - `UpdateParams`: parameters for `update` (use `()` if unsupported)
///
/// # Associated Constants
///
/// - `NAME`: the resource name used in errors (e.g., "Message")
/// - `PATHS`: the URI templates of each supported operation
pub trait Resource: DeserializeOwned + Clone + Debug + Send + Sync + Sized + 'static {
    /// Filters accepted when reading the collection.
    type ReadParams: Serialize + Default + Send + Sync;

    /// Parameters accepted by `create`.
    type CreateParams: Serialize + Validate + Send + Sync;

    /// Parameters accepted by `update`.
    type UpdateParams: Serialize + Send + Sync;

    /// The singular name of the resource (e.g., "Message").
    const NAME: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns the resource's own identifier from its payload, if any.
    fn sid(&self) -> Option<&str>;

    /// Returns `true` if the resource declares a path for `operation`.
    #[must_use]
    fn supports(operation: ResourceOperation) -> bool {
        Self::PATHS.iter().any(|p| p.operation == operation)
    }

    /// Resolves the URI of `operation` for `solution`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the operation is not
    /// supported or the solution lacks a parameter the template needs.
    fn resolve_uri(
        operation: ResourceOperation,
        solution: &Solution,
    ) -> Result<String, ResourceError> {
        get_path(Self::PATHS, operation, &solution.keys())
            .and_then(|path| build_path(path.template, solution))
            .ok_or(ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: operation.as_str(),
            })
    }
}

/// Decodes a resource payload, reporting failures as an HTTP-kind error.
pub(crate) fn decode<R: Resource>(
    code: u16,
    payload: serde_json::Value,
) -> Result<R, ResourceError> {
    serde_json::from_value(payload).map_err(|e| ResourceError::decode(code, R::NAME, &e))
}

/// Serializes operation parameters into wire pairs.
pub(crate) fn encode<R: Resource, P: Serialize>(
    params: &P,
) -> Result<Vec<(String, String)>, ResourceError> {
    crate::rest::to_params(params).map_err(|e| ResourceError::serialize(R::NAME, &e))
}
