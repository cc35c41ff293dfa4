//! Strategy-driven in-place sorting.
//!
//! A [`SortContext`] holds one swappable [`SortStrategy`] and applies it to
//! caller-owned integer sequences. Two strategies ship with the crate:
//! [`QuickSort`] (unstable, Lomuto partition) and [`MergeSort`] (stable).
//!
//! ```rust
//! use patternkit::sort::{MergeSort, SortContext};
//! use std::sync::Arc;
//!
//! let mut context = SortContext::new();
//! context.set_strategy(Arc::new(MergeSort));
//!
//! let mut data = [34, 7, 23, 32, 5, 62];
//! context.execute_sort(&mut data).unwrap();
//! assert_eq!(data, [5, 7, 23, 32, 34, 62]);
//! ```

mod context;
mod merge;
mod quick;
mod strategy;

pub use context::SortContext;
pub use merge::{MergeSort, merge_sort_by};
pub use quick::{QuickSort, quick_sort_by};
pub use strategy::{SortKind, SortStrategy};
