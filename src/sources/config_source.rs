//! Configuration source trait.

use crate::error::Result;
use std::collections::HashMap;

/// One layer of application configuration.
///
/// Layers are merged key by key in ascending [`priority`](Self::priority)
/// order, so a higher-priority layer overrides the keys it defines and
/// leaves the rest alone. Nested tables merge leaf by leaf.
pub trait ConfigSource: Send + Sync {
    /// Load this layer as top-level key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the layer cannot be read or parsed.
    fn load(&self) -> Result<HashMap<String, config::Value>>;

    /// Get a human-readable name for this layer (for logging).
    fn name(&self) -> String;

    /// Get the priority of this layer (higher = takes precedence).
    ///
    /// Built-in priorities:
    /// - Environment variables: 300
    /// - Files: 100, 110, 120, ... in the order they were added
    /// - Built-in defaults: 0
    fn priority(&self) -> i32 {
        100
    }
}
