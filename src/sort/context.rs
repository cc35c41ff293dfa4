//! The sort context holding the active strategy.

use super::SortStrategy;
use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// Applies the currently selected [`SortStrategy`] to caller-owned sequences.
///
/// The context starts without a strategy. The strategy can be swapped at any
/// time and takes effect on the next [`execute_sort`](Self::execute_sort).
/// Sequences are sorted in place; copy beforehand if the original is needed.
///
/// # Examples
///
/// ```rust
/// use patternkit::sort::{QuickSort, SortContext};
/// use std::sync::Arc;
///
/// let mut context = SortContext::new();
/// assert!(context.execute_sort(&mut [2, 1]).is_err());
///
/// context.set_strategy(Arc::new(QuickSort));
/// let mut data = vec![3, 1, 2];
/// context.execute_sort(&mut data).unwrap();
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
#[derive(Default, Clone)]
pub struct SortContext {
    strategy: Option<Arc<dyn SortStrategy>>,
}

impl SortContext {
    /// Create a context with no strategy selected.
    pub fn new() -> Self {
        Self { strategy: None }
    }

    /// Create a context with `strategy` already selected.
    pub fn with_strategy(strategy: Arc<dyn SortStrategy>) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    /// Replace the active strategy.
    pub fn set_strategy(&mut self, strategy: Arc<dyn SortStrategy>) {
        tracing::debug!(strategy = strategy.name(), "sort strategy selected");
        self.strategy = Some(strategy);
    }

    /// Return to the unset state.
    pub fn clear_strategy(&mut self) {
        self.strategy = None;
    }

    /// The active strategy, if one has been set.
    pub fn strategy(&self) -> Option<&Arc<dyn SortStrategy>> {
        self.strategy.as_ref()
    }

    /// Sort `sequence` ascending in place with the active strategy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if no strategy has been set. The
    /// sequence is left untouched in that case.
    pub fn execute_sort(&self, sequence: &mut [i32]) -> Result<()> {
        let strategy = self
            .strategy
            .as_ref()
            .ok_or_else(|| Error::InvalidState("no sort strategy set".to_string()))?;

        strategy.sort(sequence);
        tracing::debug!(
            strategy = strategy.name(),
            len = sequence.len(),
            "sequence sorted"
        );
        Ok(())
    }
}

impl fmt::Debug for SortContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortContext")
            .field("strategy", &self.strategy.as_ref().map(|s| s.name()))
            .finish()
    }
}
