//! Configuration loader that merges multiple sources.

use crate::error::{Error, Result};
use crate::sources::ConfigSource;
use serde::de::DeserializeOwned;

/// Merges configuration layers by priority and deserializes the result.
///
/// Layers are applied lowest priority first. Nested tables are merged leaf
/// by leaf, so a layer that sets `values.lang` keeps a lower layer's
/// `values.theme`.
pub struct ConfigLoader {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigLoader {
    /// Create a loader with no layers.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a configuration layer.
    pub fn add_source(&mut self, source: Box<dyn ConfigSource>) {
        self.sources.push(source);
    }

    /// Load, merge and deserialize all layers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LoadError`] if there are no layers or one fails to
    /// load, and [`Error::DeserializationError`] if the merged keys do not
    /// fit `T`.
    pub fn load<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if self.sources.is_empty() {
            return Err(Error::LoadError(
                "No configuration sources specified".to_string(),
            ));
        }

        let mut builder = config::Config::builder();

        for source in self.sorted_sources() {
            let values = source.load().map_err(|e| {
                Error::LoadError(format!("Failed to load source '{}': {}", source.name(), e))
            })?;
            tracing::debug!(source = %source.name(), keys = values.len(), "configuration layer loaded");

            let mut leaves = Vec::new();
            for (key, value) in &values {
                flatten_into(key, value, &mut leaves);
            }

            for (key, value) in leaves {
                builder = builder.set_override(&key, value).map_err(|e| {
                    Error::LoadError(format!(
                        "Failed to merge source '{}': {}",
                        source.name(),
                        e
                    ))
                })?;
            }
        }

        let merged = builder
            .build()
            .map_err(|e| Error::LoadError(format!("Failed to build configuration: {}", e)))?;

        merged.try_deserialize::<T>().map_err(|e| {
            Error::DeserializationError(format!("Failed to deserialize configuration: {}", e))
        })
    }

    /// Get the list of source names in priority order.
    pub fn source_names(&self) -> Vec<String> {
        self.sorted_sources().iter().map(|s| s.name()).collect()
    }

    /// Layers from lowest to highest priority; ties keep insertion order.
    fn sorted_sources(&self) -> Vec<&dyn ConfigSource> {
        let mut sorted: Vec<&dyn ConfigSource> = self.sources.iter().map(|s| s.as_ref()).collect();
        sorted.sort_by_key(|s| s.priority());
        sorted
    }
}

/// Split nested tables into dotted leaf keys (`values.theme`).
///
/// Empty tables contribute nothing.
fn flatten_into(key: &str, value: &config::Value, out: &mut Vec<(String, config::Value)>) {
    match &value.kind {
        config::ValueKind::Table(table) => {
            for (child, nested) in table {
                flatten_into(&format!("{}.{}", key, child), nested, out);
            }
        }
        _ => out.push((key.to_string(), value.clone())),
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AppConfig;
    use crate::sort::SortKind;
    use std::collections::HashMap;

    struct MockSource {
        name: String,
        priority: i32,
        values: HashMap<String, config::Value>,
    }

    impl MockSource {
        fn new(name: &str, priority: i32) -> Self {
            Self {
                name: name.to_string(),
                priority,
                values: HashMap::new(),
            }
        }

        fn with_value(mut self, key: &str, value: impl Into<config::Value>) -> Self {
            self.values.insert(key.to_string(), value.into());
            self
        }
    }

    impl ConfigSource for MockSource {
        fn load(&self) -> Result<HashMap<String, config::Value>> {
            Ok(self.values.clone())
        }

        fn name(&self) -> String {
            self.name.clone()
        }

        fn priority(&self) -> i32 {
            self.priority
        }
    }

    #[test]
    fn test_empty_loader() {
        let loader = ConfigLoader::new();
        let result: Result<AppConfig> = loader.load();
        assert!(matches!(result, Err(Error::LoadError(_))));
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(MockSource::new("partial", 100).with_value("app_name", "Board")));

        let config: AppConfig = loader.load().unwrap();
        assert_eq!(config.app_name, "Board");
        assert_eq!(config.version, "1.0");
        assert_eq!(config.sort_strategy, SortKind::Quick);
    }

    #[test]
    fn test_precedence() {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(
            MockSource::new("override", 200).with_value("sort_strategy", "merge"),
        ));
        loader.add_source(Box::new(
            MockSource::new("base", 100)
                .with_value("app_name", "Board")
                .with_value("sort_strategy", "quick"),
        ));

        let config: AppConfig = loader.load().unwrap();
        assert_eq!(config.sort_strategy, SortKind::Merge);
        assert_eq!(config.app_name, "Board");
    }

    #[test]
    fn test_bad_strategy_is_deserialization_error() {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(
            MockSource::new("bad", 100).with_value("sort_strategy", "bubble"),
        ));

        let result: Result<AppConfig> = loader.load();
        assert!(matches!(result, Err(Error::DeserializationError(_))));
    }

    fn table(entries: &[(&str, &str)]) -> config::Value {
        let map: config::Map<String, config::Value> = entries
            .iter()
            .map(|(k, v)| (k.to_string(), config::Value::from(*v)))
            .collect();
        config::Value::from(map)
    }

    #[test]
    fn test_nested_tables_merge_across_layers() {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(
            MockSource::new("file", 100).with_value("values", table(&[("theme", "dark"), ("lang", "de")])),
        ));
        loader.add_source(Box::new(
            MockSource::new("env", 300).with_value("values", table(&[("lang", "en")])),
        ));

        let config: AppConfig = loader.load().unwrap();
        assert_eq!(config.values.len(), 2);
        assert_eq!(config.values.get("theme").map(String::as_str), Some("dark"));
        assert_eq!(config.values.get("lang").map(String::as_str), Some("en"));
    }

    #[test]
    fn test_empty_table_keeps_lower_layer() {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(
            MockSource::new("file", 100).with_value("values", table(&[("theme", "dark")])),
        ));
        loader.add_source(Box::new(MockSource::new("empty", 200).with_value("values", table(&[]))));

        let config: AppConfig = loader.load().unwrap();
        assert_eq!(config.values.get("theme").map(String::as_str), Some("dark"));
    }

    #[test]
    fn test_source_names() {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(MockSource::new("file", 100)));
        loader.add_source(Box::new(MockSource::new("env", 300)));
        loader.add_source(Box::new(MockSource::new("defaults", 0)));

        assert_eq!(loader.source_names(), vec!["defaults", "file", "env"]);
    }
}
