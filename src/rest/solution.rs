//! Path parameters that address a resource.

use std::collections::BTreeMap;
use std::fmt;

/// The ordered set of path parameters that addresses a resource
/// (e.g. `account_sid` and the resource's own `sid`).
///
/// A solution is immutable once it is handed to a list, context or instance;
/// [`Solution::with`] returns a new value.
///
/// # Example
///
/// ```rust
/// use twilio_api::rest::Solution;
///
/// let solution = Solution::new().with("account_sid", "AC123").with("sid", "SM1");
/// assert_eq!(solution.get("account_sid"), Some("AC123"));
/// assert_eq!(solution.sid(), Some("SM1"));
/// assert_eq!(solution.keys(), vec!["account_sid", "sid"]);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Solution {
    params: BTreeMap<&'static str, String>,
}

impl Solution {
    /// Name of the parameter holding a resource's own identifier.
    pub const SID: &'static str = "sid";

    /// Creates an empty solution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this solution with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.insert(key, value.into());
        self
    }

    /// Returns the value of `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns the resource's own identifier, if present.
    #[must_use]
    pub fn sid(&self) -> Option<&str> {
        self.get(Self::SID)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Returns the parameter names in order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.params.keys().copied().collect()
    }

    /// Iterates over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.params.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.params.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overwrites_existing_value() {
        let solution = Solution::new().with("sid", "A").with("sid", "B");
        assert_eq!(solution.sid(), Some("B"));
        assert_eq!(solution.len(), 1);
    }

    #[test]
    fn test_keys_are_ordered() {
        let solution = Solution::new()
            .with("sid", "SM1")
            .with("account_sid", "AC1")
            .with("message_sid", "MM1");
        assert_eq!(solution.keys(), vec!["account_sid", "message_sid", "sid"]);
    }

    #[test]
    fn test_empty_solution() {
        let solution = Solution::new();
        assert!(solution.is_empty());
        assert_eq!(solution.sid(), None);
        assert!(!solution.contains("account_sid"));
    }

    #[test]
    fn test_debug_output() {
        let solution = Solution::new().with("account_sid", "AC1");
        assert_eq!(format!("{solution:?}"), "{\"account_sid\": \"AC1\"}");
    }
}
