//! Built-in default values.

use super::ConfigSource;
use crate::error::Result;
use crate::settings::AppConfig;
use std::collections::HashMap;

/// The lowest layer: values compiled into the binary.
///
/// # Examples
///
/// ```rust
/// use patternkit::sources::{ConfigSource, DefaultsSource};
///
/// let defaults = DefaultsSource::for_app();
/// let values = defaults.load().unwrap();
/// assert_eq!(values["app_name"].clone().into_string().unwrap(), "TaskManagerApp");
/// ```
pub struct DefaultsSource {
    values: HashMap<String, config::Value>,
    priority: i32,
}

impl DefaultsSource {
    /// Create an empty defaults layer.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            priority: 0,
        }
    }

    /// Defaults taken from [`AppConfig::default`].
    pub fn for_app() -> Self {
        let app = AppConfig::default();
        Self::new()
            .with("app_name", app.app_name)
            .with("version", app.version)
            .with("sort_strategy", app.sort_strategy.as_str())
    }

    /// Set the priority for this source.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Add or replace one default.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<config::Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl Default for DefaultsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for DefaultsSource {
    fn load(&self) -> Result<HashMap<String, config::Value>> {
        Ok(self.values.clone())
    }

    fn name(&self) -> String {
        "defaults".to_string()
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
