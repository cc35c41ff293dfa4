//! # patternkit
//!
//! Strategy-driven sorting and observer-based task notifications.
//!
//! ## Overview
//!
//! `patternkit` provides two independent components:
//! - [`sort::SortContext`] applies a swappable [`sort::SortStrategy`]
//!   (quicksort or merge sort) to an integer slice in place
//! - [`notify::NotificationHub`] broadcasts task-status changes to
//!   registered subscribers, in registration order
//!
//! Around them sit an explicitly constructed application configuration
//! ([`settings::ConfigStore`]), a string-keyed vehicle factory and a small
//! task processor.
//!
//! ## Quick Start
//!
//! ```rust
//! use patternkit::prelude::*;
//! use std::sync::Arc;
//!
//! # fn example() -> patternkit::error::Result<()> {
//! let config = ConfigStore::builder().build()?;
//!
//! let mut sorter = SortContext::new();
//! sorter.set_strategy(config.get().sort_strategy.strategy());
//!
//! let mut data = [34, 7, 23, 32, 5, 62];
//! sorter.execute_sort(&mut data)?;
//! assert_eq!(data, [5, 7, 23, 32, 34, 62]);
//!
//! let hub = NotificationHub::new();
//! let email = Arc::new(EmailNotifier::new());
//! hub.add_observer(email.clone());
//! hub.set_status("Completed");
//! assert!(email.messages()[0].contains("Completed"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Feature Flags
//!
//! - `validation` (default): run [`settings::Validate`] on every configuration
//!   before it is published.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod error;
pub mod notify;
pub mod settings;
pub mod sort;
pub mod sources;
pub mod task;
pub mod vehicle;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::error::{Error, Result, ValidationError};
    pub use crate::notify::{
        Broadcast, EmailNotifier, NotificationHub, PushNotifier, SmsNotifier, Subscriber,
    };
    pub use crate::settings::{AppConfig, ConfigBuilder, ConfigStore};
    pub use crate::sort::{MergeSort, QuickSort, SortContext, SortKind, SortStrategy};
    pub use crate::task::{Task, TaskProcessor};
    pub use crate::vehicle::{Vehicle, VehicleKind, VehicleService, vehicle_for};

    #[cfg(feature = "validation")]
    pub use crate::settings::Validate;
}
