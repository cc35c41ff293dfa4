//! The application configuration record.

use crate::error::Result;
use crate::sort::SortKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Process-wide settings, constructed once at startup.
///
/// Lookups by key accept both the snake_case field names and the camelCase
/// names (`appName`, `sortStrategy`). Unknown keys live in [`values`](Self::values)
/// and are matched case-insensitively: configuration files and environment
/// variables arrive lowercased, so `values` keys are stored in lowercase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display name of the application.
    pub app_name: String,
    /// Application version string.
    pub version: String,
    /// Strategy the demo drivers sort with.
    pub sort_strategy: SortKind,
    /// Free-form settings.
    pub values: HashMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "TaskManagerApp".to_string(),
            version: "1.0".to_string(),
            sort_strategy: SortKind::default(),
            values: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Look up a setting by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "appName" | "app_name" => Some(self.app_name.clone()),
            "version" => Some(self.version.clone()),
            "sortStrategy" | "sort_strategy" => Some(self.sort_strategy.to_string()),
            other => self.values.get(&other.to_lowercase()).cloned(),
        }
    }

    /// Set a setting by key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::error::Error::InvalidArgument)
    /// if `key` names the sort strategy and `value` is not a known strategy.
    /// `self` is unchanged in that case.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        match key {
            "appName" | "app_name" => self.app_name = value,
            "version" => self.version = value,
            "sortStrategy" | "sort_strategy" => self.sort_strategy = value.parse()?,
            other => {
                self.values.insert(other.to_lowercase(), value);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.get("appName").as_deref(), Some("TaskManagerApp"));
        assert_eq!(config.get("version").as_deref(), Some("1.0"));
        assert_eq!(config.get("sortStrategy").as_deref(), Some("quick"));
        assert_eq!(config.get("theme"), None);
    }

    #[test]
    fn test_set_known_and_free_form_keys() {
        let mut config = AppConfig::default();
        config.set("app_name", "Board").unwrap();
        config.set("sortStrategy", "MergeSort").unwrap();
        config.set("theme", "dark").unwrap();

        assert_eq!(config.app_name, "Board");
        assert_eq!(config.sort_strategy, SortKind::Merge);
        assert_eq!(config.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_free_form_keys_ignore_case() {
        let mut config = AppConfig::default();
        config.values.insert("theme".to_string(), "dark".to_string());

        assert_eq!(config.get("Theme").as_deref(), Some("dark"));
        config.set("THEME", "light").unwrap();
        config.set("maxRetries", "3").unwrap();

        assert_eq!(config.values.len(), 2);
        assert_eq!(config.values.get("theme").map(String::as_str), Some("light"));
        assert_eq!(config.get("maxretries").as_deref(), Some("3"));
    }

    #[test]
    fn test_set_unknown_strategy() {
        let mut config = AppConfig::default();
        let err = config.set("sort_strategy", "bogo").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(config.sort_strategy, SortKind::Quick);
    }
}
