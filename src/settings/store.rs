//! The configuration handle passed to callers.

use super::{AppConfig, ConfigBuilder};
use crate::error::{Result, ValidationError};
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::sync::Arc;

#[cfg(feature = "validation")]
use super::Validate;

/// Type alias for validator functions.
pub(crate) type Validator =
    Arc<dyn Fn(&AppConfig) -> std::result::Result<(), ValidationError> + Send + Sync>;

/// Shared handle to the application configuration.
///
/// Reads are lock-free snapshots via `arc-swap`; writers are serialized and
/// publish a whole new [`AppConfig`] only after it passes validation.
/// Clones share the same underlying configuration.
///
/// # Examples
///
/// ```rust
/// use patternkit::settings::ConfigStore;
///
/// let store = ConfigStore::builder().build().unwrap();
/// assert_eq!(store.value("appName").as_deref(), Some("TaskManagerApp"));
///
/// store.set("version", "2.0").unwrap();
/// assert_eq!(store.get().version, "2.0");
/// ```
pub struct ConfigStore {
    current: Arc<ArcSwap<AppConfig>>,
    write_lock: Arc<Mutex<()>>,
    validator: Option<Validator>,
}

impl ConfigStore {
    /// Create a store holding `initial` without loading or validation.
    pub fn new(initial: AppConfig) -> Self {
        Self::with_validator(initial, None)
    }

    pub(crate) fn with_validator(initial: AppConfig, validator: Option<Validator>) -> Self {
        Self {
            current: Arc::new(ArcSwap::from_pointee(initial)),
            write_lock: Arc::new(Mutex::new(())),
            validator,
        }
    }

    /// Start building a store from layered sources.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Snapshot of the current configuration.
    pub fn get(&self) -> Arc<AppConfig> {
        self.current.load_full()
    }

    /// Look up one setting by key. See [`AppConfig::get`].
    pub fn value(&self, key: &str) -> Option<String> {
        self.current.load().get(key)
    }

    /// Change one setting and publish the result.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an unknown sort strategy and
    /// `ValidationError` if the changed configuration is rejected. The
    /// previous configuration stays in place on error.
    pub fn set(&self, key: &str, value: impl Into<String>) -> Result<()> {
        let _guard = self.write_lock.lock();

        let mut next = AppConfig::clone(&self.current.load());
        next.set(key, value)?;
        self.publish(next)?;

        tracing::debug!(key, "configuration value updated");
        Ok(())
    }

    /// Replace the whole configuration.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `next` is rejected.
    pub fn update(&self, next: AppConfig) -> Result<()> {
        let _guard = self.write_lock.lock();
        self.publish(next)
    }

    /// Run every validator against `config`.
    pub(crate) fn check(config: &AppConfig, validator: Option<&Validator>) -> Result<()> {
        #[cfg(feature = "validation")]
        config.validate()?;

        if let Some(validator) = validator {
            validator(config)?;
        }
        Ok(())
    }

    fn publish(&self, next: AppConfig) -> Result<()> {
        Self::check(&next, self.validator.as_ref())?;
        self.current.store(Arc::new(next));
        Ok(())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl Clone for ConfigStore {
    fn clone(&self) -> Self {
        Self {
            current: Arc::clone(&self.current),
            write_lock: Arc::clone(&self.write_lock),
            validator: self.validator.clone(),
        }
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("current", &self.get())
            .field("validator", &self.validator.is_some())
            .finish()
    }
}
