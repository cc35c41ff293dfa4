//! Builder for constructing a ConfigStore.

use super::store::Validator;
use super::{AppConfig, ConfigLoader, ConfigStore};
use crate::error::{Result, ValidationError};
use crate::sources::{ConfigSource, DefaultsSource, EnvSource, FileSource};
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for a [`ConfigStore`].
///
/// Layers, lowest priority first: built-in defaults, files in the order
/// added, custom sources at their own priority, environment variables.
///
/// # Examples
///
/// ```rust,no_run
/// use patternkit::settings::ConfigStore;
///
/// # fn example() -> patternkit::error::Result<()> {
/// let store = ConfigStore::builder()
///     .with_file("config/patternkit.yaml")
///     .with_env_overrides("PATTERNKIT", "__")
///     .build()?;
///
/// println!("{} v{}", store.get().app_name, store.get().version);
/// # Ok(())
/// # }
/// ```
pub struct ConfigBuilder {
    file_paths: Vec<PathBuf>,
    env_prefix: Option<String>,
    env_separator: Option<String>,
    custom_sources: Vec<Box<dyn ConfigSource>>,
    validator: Option<Validator>,
    defaults: bool,
}

impl ConfigBuilder {
    /// Create a builder that starts from the built-in defaults.
    pub fn new() -> Self {
        Self {
            file_paths: Vec::new(),
            env_prefix: None,
            env_separator: None,
            custom_sources: Vec::new(),
            validator: None,
            defaults: true,
        }
    }

    /// Add a YAML, TOML or JSON file.
    ///
    /// Later files override earlier ones.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_paths.push(path.into());
        self
    }

    /// Read overrides from `{prefix}_*` environment variables.
    ///
    /// `separator` splits nested keys, e.g. `__` for `PREFIX_VALUES__THEME`.
    pub fn with_env_overrides(mut self, prefix: &str, separator: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self.env_separator = Some(separator.to_string());
        self
    }

    /// Add a custom configuration source.
    pub fn with_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.custom_sources.push(Box::new(source));
        self
    }

    /// Skip the built-in defaults layer.
    ///
    /// Missing keys still deserialize to [`AppConfig::default`] values.
    pub fn without_defaults(mut self) -> Self {
        self.defaults = false;
        self
    }

    /// Add a check that every published configuration must pass.
    ///
    /// It runs at build time and again on every later
    /// [`ConfigStore::set`]/[`ConfigStore::update`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use patternkit::error::ValidationError;
    /// use patternkit::settings::{AppConfig, ConfigStore};
    ///
    /// let result = ConfigStore::builder()
    ///     .with_validation(|config: &AppConfig| {
    ///         if config.version == "1.0" {
    ///             return Err(ValidationError::invalid_field("version", "1.0 is retired"));
    ///         }
    ///         Ok(())
    ///     })
    ///     .build();
    /// assert!(result.is_err());
    /// ```
    pub fn with_validation<F>(mut self, validator: F) -> Self
    where
        F: Fn(&AppConfig) -> std::result::Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Load every layer, validate the result and wrap it in a store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A layer fails to load
    /// - The merged keys do not deserialize into [`AppConfig`]
    /// - Validation fails
    pub fn build(mut self) -> Result<ConfigStore> {
        let validator = self.validator.take();
        let loader = self.into_loader();
        let config: AppConfig = loader.load()?;

        ConfigStore::check(&config, validator.as_ref())?;

        tracing::info!(
            app_name = %config.app_name,
            version = %config.version,
            sources = ?loader.source_names(),
            "configuration loaded"
        );
        Ok(ConfigStore::with_validator(config, validator))
    }

    fn into_loader(self) -> ConfigLoader {
        let mut loader = ConfigLoader::new();

        if self.defaults {
            loader.add_source(Box::new(DefaultsSource::for_app()));
        }

        for (index, path) in self.file_paths.iter().enumerate() {
            let priority = 100 + (index as i32 * 10);
            loader.add_source(Box::new(FileSource::new(path).with_priority(priority)));
        }

        for source in self.custom_sources {
            loader.add_source(source);
        }

        if let (Some(prefix), Some(separator)) = (self.env_prefix, self.env_separator) {
            loader.add_source(Box::new(EnvSource::new(prefix, separator)));
        }

        loader
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::sort::SortKind;

    #[test]
    fn test_defaults_only() {
        let store = ConfigBuilder::new().build().unwrap();
        assert_eq!(*store.get(), AppConfig::default());
    }

    #[test]
    fn test_builder_accumulates_files() {
        let builder = ConfigBuilder::new()
            .with_file("base.yaml")
            .with_file("local.toml");
        assert_eq!(builder.file_paths.len(), 2);
    }

    #[test]
    fn test_builder_env_overrides() {
        let builder = ConfigBuilder::new().with_env_overrides("PATTERNKIT", "__");
        assert_eq!(builder.env_prefix.as_deref(), Some("PATTERNKIT"));
        assert_eq!(builder.env_separator.as_deref(), Some("__"));
    }

    #[test]
    fn test_custom_source_overrides_defaults() {
        let store = ConfigBuilder::new()
            .with_source(DefaultsSource::new().with("sort_strategy", "merge").with_priority(50))
            .build()
            .unwrap();
        assert_eq!(store.get().sort_strategy, SortKind::Merge);
        assert_eq!(store.get().app_name, "TaskManagerApp");
    }

    #[test]
    fn test_without_defaults_needs_a_source() {
        let result = ConfigBuilder::new().without_defaults().build();
        assert!(matches!(result, Err(Error::LoadError(_))));
    }

    #[test]
    fn test_validator_runs_at_build() {
        let result = ConfigBuilder::new()
            .with_validation(|config: &AppConfig| {
                if config.sort_strategy == SortKind::Quick {
                    return Err(ValidationError::invalid_field(
                        "sort_strategy",
                        "quick is not allowed here",
                    ));
                }
                Ok(())
            })
            .build();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Configuration validation failed"));
    }
}
