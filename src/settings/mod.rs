//! Application configuration, loaded once and passed explicitly.
//!
//! There is no global accessor. Build a [`ConfigStore`] at startup with
//! [`ConfigBuilder`] and hand clones of it to whatever needs configuration.

mod app;
mod builder;
mod loader;
mod store;

#[cfg(feature = "validation")]
mod validation;

pub use app::AppConfig;
pub use builder::ConfigBuilder;
pub(crate) use loader::ConfigLoader;
pub use store::ConfigStore;

#[cfg(feature = "validation")]
pub use validation::Validate;
