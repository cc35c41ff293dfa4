//! The sort strategy trait and its string-keyed factory.

use super::{MergeSort, QuickSort};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// An ordering algorithm that can be plugged into a [`SortContext`](super::SortContext).
///
/// Implementations are stateless and must reorder the sequence ascending in place.
///
/// # Examples
///
/// ```rust
/// use patternkit::sort::SortStrategy;
///
/// struct StdSort;
///
/// impl SortStrategy for StdSort {
///     fn sort(&self, sequence: &mut [i32]) {
///         sequence.sort();
///     }
///
///     fn name(&self) -> &'static str {
///         "std"
///     }
/// }
/// ```
pub trait SortStrategy: Send + Sync {
    /// Sort `sequence` ascending in place.
    fn sort(&self, sequence: &mut [i32]);

    /// Human-readable name used in logs.
    fn name(&self) -> &'static str;
}

/// The built-in strategies, selectable by name.
///
/// Parsing accepts `quick`/`quicksort` and `merge`/`mergesort`, ignoring case
/// and surrounding whitespace. Anything else is an [`Error::InvalidArgument`].
///
/// # Examples
///
/// ```rust
/// use patternkit::sort::SortKind;
///
/// let kind: SortKind = "MergeSort".parse().unwrap();
/// assert_eq!(kind, SortKind::Merge);
/// assert!("bubble".parse::<SortKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKind {
    /// [`QuickSort`]
    #[default]
    #[serde(alias = "quicksort")]
    Quick,
    /// [`MergeSort`]
    #[serde(alias = "mergesort")]
    Merge,
}

impl SortKind {
    /// Create a shareable instance of this strategy.
    pub fn strategy(self) -> Arc<dyn SortStrategy> {
        match self {
            Self::Quick => Arc::new(QuickSort),
            Self::Merge => Arc::new(MergeSort),
        }
    }

    /// Canonical lowercase key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Merge => "merge",
        }
    }
}

impl FromStr for SortKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quick" | "quicksort" => Ok(Self::Quick),
            "merge" | "mergesort" => Ok(Self::Merge),
            _ => Err(Error::invalid_argument(format!(
                "unknown sort strategy: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("quick".parse::<SortKind>().unwrap(), SortKind::Quick);
        assert_eq!(" QuickSort ".parse::<SortKind>().unwrap(), SortKind::Quick);
        assert_eq!("merge".parse::<SortKind>().unwrap(), SortKind::Merge);
        assert_eq!("MERGESORT".parse::<SortKind>().unwrap(), SortKind::Merge);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "heap".parse::<SortKind>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(err.to_string().contains("heap"));
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(SortKind::Quick.strategy().name(), "QuickSort");
        assert_eq!(SortKind::Merge.strategy().name(), "MergeSort");
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in [SortKind::Quick, SortKind::Merge] {
            assert_eq!(kind.to_string().parse::<SortKind>().unwrap(), kind);
        }
    }
}
