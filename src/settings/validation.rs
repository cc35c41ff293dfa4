//! Configuration validation support.

use super::AppConfig;
use crate::error::ValidationError;

/// Trait for configuration validation.
///
/// [`ConfigStore`](super::ConfigStore) runs it before the first configuration
/// is published and before every later change; a failing value is rejected
/// and the previous one stays in place.
///
/// # Examples
///
/// ```rust
/// use patternkit::settings::{AppConfig, Validate};
///
/// let mut config = AppConfig::default();
/// assert!(config.validate().is_ok());
///
/// config.app_name.clear();
/// assert!(config.validate().is_err());
/// ```
pub trait Validate {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Should return a `ValidationError` describing what validation failed.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if self.app_name.trim().is_empty() {
            errors.push(ValidationError::invalid_field("app_name", "must not be empty"));
        }
        if self.version.trim().is_empty() {
            errors.push(ValidationError::invalid_field("version", "must not be empty"));
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(ValidationError::Multiple(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_version_rejected() {
        let config = AppConfig {
            version: "  ".to_string(),
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn test_all_problems_reported() {
        let config = AppConfig {
            app_name: String::new(),
            version: String::new(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::Multiple(errors)) if errors.len() == 2
        ));
    }
}
