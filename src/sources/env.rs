//! Environment variable configuration source.

use super::ConfigSource;
use crate::error::{Error, Result};
use config::Environment;
use std::collections::HashMap;

/// Reads configuration keys from prefixed environment variables.
///
/// With prefix `PATTERNKIT` and separator `__`, `PATTERNKIT_APP_NAME=Demo`
/// sets `app_name` and `PATTERNKIT_VALUES__THEME=dark` sets `values.theme`.
///
/// # Examples
///
/// ```rust
/// use patternkit::sources::{ConfigSource, EnvSource};
///
/// let source = EnvSource::new("PATTERNKIT", "__");
/// assert_eq!(source.priority(), 300);
/// ```
pub struct EnvSource {
    prefix: String,
    separator: String,
    priority: i32,
}

impl EnvSource {
    /// Create a source matching `{prefix}_*` variables, nesting keys on `separator`.
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: separator.into(),
            priority: 300,
        }
    }

    /// Set the priority for this source.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl ConfigSource for EnvSource {
    fn load(&self) -> Result<HashMap<String, config::Value>> {
        // Values stay strings: "1.0" must remain a version, not a float.
        let environment = Environment::with_prefix(&self.prefix)
            .prefix_separator("_")
            .separator(&self.separator);

        config::Config::builder()
            .add_source(environment)
            .build()
            .map_err(|e| Error::LoadError(format!("Failed to read environment: {}", e)))?
            .try_deserialize::<HashMap<String, config::Value>>()
            .map_err(|e| {
                Error::DeserializationError(format!("Failed to parse environment: {}", e))
            })
    }

    fn name(&self) -> String {
        format!("env:{}*", self.prefix)
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
