//! Layers that feed the application configuration.

mod config_source;
mod defaults;
mod env;
mod file;

pub use config_source::ConfigSource;
pub use defaults::DefaultsSource;
pub use env::EnvSource;
pub use file::FileSource;
