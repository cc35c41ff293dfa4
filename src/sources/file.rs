//! File-based configuration source.

use super::ConfigSource;
use crate::error::{Error, Result};
use config::File;
use std::collections::HashMap;
use std::path::PathBuf;

/// Extensions the `config` crate can parse for us.
const SUPPORTED_EXTENSIONS: &[&str] = &["yaml", "yml", "toml", "json"];

/// Reads configuration from a YAML, TOML or JSON file.
///
/// The format is chosen from the file extension. The file must exist when
/// the configuration is built.
///
/// # Examples
///
/// ```rust,no_run
/// use patternkit::sources::FileSource;
///
/// let source = FileSource::new("config/patternkit.toml").with_priority(150);
/// ```
pub struct FileSource {
    path: PathBuf,
    priority: i32,
}

impl FileSource {
    /// Create a file source with the default file priority (100).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            priority: 100,
        }
    }

    /// Set the priority for this source.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    fn validate_extension(&self) -> Result<()> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                Error::LoadError(format!(
                    "Unable to determine file format for: {}",
                    self.path.display()
                ))
            })?;

        if SUPPORTED_EXTENSIONS.contains(&extension) {
            Ok(())
        } else {
            Err(Error::LoadError(format!(
                "Unsupported file extension: {}. Supported: .yaml, .yml, .toml, .json",
                extension
            )))
        }
    }
}

impl ConfigSource for FileSource {
    fn load(&self) -> Result<HashMap<String, config::Value>> {
        self.validate_extension()?;

        if !self.path.exists() {
            return Err(Error::LoadError(format!(
                "Configuration file not found: {}",
                self.path.display()
            )));
        }

        config::Config::builder()
            .add_source(File::from(self.path.clone()).required(true))
            .build()
            .map_err(|e| Error::LoadError(format!("Failed to load file: {}", e)))?
            .try_deserialize::<HashMap<String, config::Value>>()
            .map_err(|e| Error::DeserializationError(format!("Failed to parse file: {}", e)))
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_supported_extensions() {
        for name in ["app.yaml", "app.yml", "app.toml", "app.json"] {
            assert!(FileSource::new(name).validate_extension().is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_unsupported_extensions() {
        assert!(FileSource::new("app.ini").validate_extension().is_err());
        assert!(FileSource::new("app").validate_extension().is_err());
    }

    #[test]
    fn test_load_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.toml");
        fs::write(&path, "app_name = \"Board\"\nsort_strategy = \"merge\"\n").unwrap();

        let values = FileSource::new(&path).load().unwrap();
        assert_eq!(values["app_name"].clone().into_string().unwrap(), "Board");
        assert_eq!(values["sort_strategy"].clone().into_string().unwrap(), "merge");
    }

    #[test]
    fn test_load_missing_file() {
        let err = FileSource::new("/nonexistent/patternkit.yaml").load().unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_name_contains_path() {
        assert!(FileSource::new("app.yaml").name().contains("app.yaml"));
    }
}
